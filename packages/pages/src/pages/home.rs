//! Landing page: hero, platform features, impact stats, closing call to action.

use guardian_content::{ContentRegistry, Feature, StatCard};
use leptos::*;

use crate::components::{FeatureCard, Icon, StatTile, SystemBanner};
use crate::layout::Shell;
use crate::{Toast, render};

/// Renders the landing page.
#[must_use]
pub fn home_page(content: &ContentRegistry, toasts: Vec<Toast>) -> String {
    let content = content.clone();
    render(move || {
        let site = content.site.clone();
        let banner = site.banners.home.clone();
        let brand = site.brand.name.clone();
        view! {
            <Shell title="Guardian One" site=site toasts=toasts active="/">
                <div class="container mx-auto px-4 pt-6">
                    <SystemBanner banner=banner/>
                </div>
                <Hero brand=brand/>
                <FeatureGrid features=content.features.clone()/>
                <ImpactStats stats=content.impact_stats.clone()/>
                <ClosingCta/>
            </Shell>
        }
    })
}

#[component]
fn Hero(#[prop(into)] brand: String) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden">
            <div class="hero-gradient absolute inset-0 opacity-95"></div>
            <div class="relative container mx-auto px-4 py-24 md:py-32">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="text-white space-y-6">
                        <div class="flex items-center gap-2 mb-6">
                            <Icon name="shield" class="h-8 w-8 animate-pulse-shield"/>
                            <h1 class="text-2xl font-bold tracking-tight">{brand}</h1>
                        </div>
                        <h2 class="text-4xl md:text-5xl font-bold tracking-tight">
                            "Protecting children through innovative technology"
                        </h2>
                        <p class="text-lg text-white/80 max-w-lg">
                            "A comprehensive technological ecosystem designed to prevent and detect child trafficking globally, using AI, blockchain, and community engagement."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 pt-4">
                            <a
                                href="/dashboard"
                                class="inline-flex items-center justify-center gap-2 rounded-md bg-white text-guardian-primary hover:bg-gray-100 px-6 py-3 font-medium"
                            >
                                <Icon name="shield"/>
                                "View Dashboard"
                            </a>
                            <a
                                href="/report"
                                class="inline-flex items-center justify-center gap-2 rounded-md border border-white text-white hover:bg-white/10 px-6 py-3 font-medium"
                            >
                                <Icon name="message-square"/>
                                "Report Incident"
                            </a>
                        </div>
                    </div>
                    <div class="hidden lg:flex justify-center">
                        <div class="relative w-96 h-96">
                            <div class="absolute inset-0 bg-white/10 backdrop-blur-lg rounded-full animate-pulse-shield"></div>
                            <div class="absolute inset-8 bg-white/20 backdrop-blur-lg rounded-full animate-pulse-shield [animation-delay:250ms]"></div>
                            <div class="absolute inset-16 bg-white/30 backdrop-blur-lg rounded-full animate-pulse-shield [animation-delay:500ms]"></div>
                            <div class="absolute inset-0 flex items-center justify-center">
                                <Icon name="shield" class="w-32 h-32 text-white"/>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-0 left-0 w-full">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 1440 100"
                    class="text-gray-50 fill-current"
                >
                    <path d="M0,64L80,69.3C160,75,320,85,480,80C640,75,800,53,960,48C1120,43,1280,53,1360,58.7L1440,64L1440,100L1360,100C1280,100,1120,100,960,100C800,100,640,100,480,100C320,100,160,100,80,100L0,100Z"></path>
                </svg>
            </div>
        </div>
    }
}

#[component]
fn FeatureGrid(features: Vec<Feature>) -> impl IntoView {
    view! {
        <section class="py-16 md:py-24 bg-gradient-to-b from-gray-50 to-guardian-light/30">
            <div class="container mx-auto px-4">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-3xl font-bold tracking-tight text-guardian-dark mb-4">
                        "Core Components"
                    </h2>
                    <p class="text-gray-600">
                        "Guardian One integrates multiple technologies to create a comprehensive protection system."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {features
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ImpactStats(stats: Vec<StatCard>) -> impl IntoView {
    view! {
        <section class="py-16 md:py-24">
            <div class="container mx-auto px-4">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-3xl font-bold tracking-tight text-guardian-dark mb-4">
                        "Making a Global Impact"
                    </h2>
                    <p class="text-gray-600">
                        "Our technology is designed to scale globally and make a significant difference in child protection efforts."
                    </p>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {stats
                        .into_iter()
                        .map(|card| view! { <StatTile card=card/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ClosingCta() -> impl IntoView {
    view! {
        <section class="py-16 md:py-24 hero-gradient text-white">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto text-center space-y-8">
                    <div class="mx-auto w-16 h-16 flex items-center justify-center">
                        <Icon name="shield" class="h-12 w-12 animate-pulse-shield"/>
                    </div>
                    <h2 class="text-3xl md:text-4xl font-bold tracking-tight">
                        "Join our mission to protect every child"
                    </h2>
                    <p class="text-lg text-white/80 max-w-2xl mx-auto">
                        "Every minute counts in the fight against child trafficking. Whether you're a community member, law enforcement officer, or humanitarian worker, your participation makes our shield stronger."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 pt-4 justify-center">
                        <a
                            href="/report"
                            class="inline-flex items-center justify-center gap-2 rounded-md bg-white text-guardian-primary hover:bg-gray-100 px-6 py-3 font-medium"
                        >
                            "Join Guardian One"
                            <Icon name="arrow-right"/>
                        </a>
                        <a
                            href="/about?tab=partners"
                            class="inline-flex items-center justify-center rounded-md border border-white text-white hover:bg-white/10 px-6 py-3 font-medium"
                        >
                            "Partner With Us"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
