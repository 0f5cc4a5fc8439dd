//! Mission, technology, and partner briefs.

use guardian_content::ContentRegistry;
use leptos::*;

use crate::components::Icon;
use crate::layout::Shell;
use crate::{Toast, render};

/// Sections of the about page, selected by query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    Mission,
    Technology,
    Partners,
}

impl AboutTab {
    const ALL: [Self; 3] = [Self::Mission, Self::Technology, Self::Partners];

    /// Resolves a `?tab=` value, defaulting to the mission brief.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("technology") => Self::Technology,
            Some("partners") => Self::Partners,
            _ => Self::Mission,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mission => "mission",
            Self::Technology => "technology",
            Self::Partners => "partners",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Mission => "Our Mission",
            Self::Technology => "Technology",
            Self::Partners => "Partners",
        }
    }
}

/// Renders the about page with the requested tab expanded.
#[must_use]
pub fn about_page(content: &ContentRegistry, tab: AboutTab, toasts: Vec<Toast>) -> String {
    let content = content.clone();
    render(move || {
        let site = content.site.clone();
        view! {
            <Shell title="About | Guardian One" site=site toasts=toasts active="/about">
                <div class="container mx-auto px-4 py-8">
                    <div class="max-w-4xl mx-auto">
                        <div class="text-center mb-12">
                            <div class="flex justify-center mb-4">
                                <Icon name="shield" class="h-12 w-12 text-guardian-primary"/>
                            </div>
                            <h1 class="text-4xl font-bold tracking-tight mb-4">
                                "About GUARDIAN ONE"
                            </h1>
                            <p class="text-lg text-gray-500">
                                "A zero-to-one technological ecosystem to prevent and detect child trafficking globally"
                            </p>
                        </div>

                        <div class="grid grid-cols-3 gap-1 rounded-lg bg-gray-100 p-1 text-center text-sm font-medium mb-8">
                            {AboutTab::ALL
                                .iter()
                                .map(|&entry| view! {
                                    <a
                                        href=format!("/about?tab={}", entry.as_str())
                                        class=if entry == tab {
                                            "rounded-md bg-white shadow-sm px-3 py-1.5"
                                        } else {
                                            "rounded-md text-gray-600 hover:text-gray-900 px-3 py-1.5"
                                        }
                                    >
                                        {entry.label()}
                                    </a>
                                })
                                .collect::<Vec<_>>()}
                        </div>

                        {tab_body(tab)}
                    </div>
                </div>
            </Shell>
        }
    })
}

fn tab_body(tab: AboutTab) -> View {
    match tab {
        AboutTab::Mission => view! { <MissionTab/> }.into_view(),
        AboutTab::Technology => view! { <TechnologyTab/> }.into_view(),
        AboutTab::Partners => view! { <PartnersTab/> }.into_view(),
    }
}

#[component]
fn PrincipleCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] body: String,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-6">
            <h3 class="flex items-center gap-2 font-semibold mb-3">
                <Icon name=icon class="h-5 w-5 text-guardian-primary"/>
                {title}
            </h3>
            <p class="text-gray-500">{body}</p>
        </div>
    }
}

#[component]
fn MissionTab() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="space-y-4">
                <h2 class="text-2xl font-bold tracking-tight text-guardian-primary">
                    "Our Mission"
                </h2>
                <p class="text-gray-500">
                    "GUARDIAN ONE was established with a singular focus: to create a unified, proactive digital defense system to prevent child trafficking at scale. While child trafficking is acknowledged globally, existing solutions are fragmented, reactive, and largely analog."
                </p>
                <p class="text-gray-500">
                    "Our mission is to leverage cutting-edge technology to protect vulnerable children worldwide through an integrated approach that combines biometric identity verification, AI-powered risk detection, and community engagement."
                </p>
            </div>

            <hr class="border-gray-200"/>

            <div class="space-y-4">
                <h2 class="text-2xl font-bold tracking-tight text-guardian-primary">
                    "Core Principles"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <PrincipleCard
                        icon="shield"
                        title="Proactive Protection"
                        body="We believe in preventing trafficking before it occurs through early warning systems and predictive analytics."
                    />
                    <PrincipleCard
                        icon="lock"
                        title="Privacy by Design"
                        body="All our systems are built with privacy as a fundamental principle, ensuring data protection and responsible use."
                    />
                    <PrincipleCard
                        icon="globe"
                        title="Global Cooperation"
                        body="We foster collaboration between governments, NGOs, and communities to create a unified global response."
                    />
                    <PrincipleCard
                        icon="users"
                        title="Community Empowerment"
                        body="We provide tools and education to enable communities to protect their own children."
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn TechnologyCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] summary: String,
    #[prop(into)] body: String,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-6">
            <h3 class="flex items-center gap-2 font-semibold">
                <Icon name=icon class="h-5 w-5 text-guardian-primary"/>
                {title}
            </h3>
            <p class="text-sm text-gray-500 mt-1 mb-3">{summary}</p>
            <p class="text-gray-500">{body}</p>
        </div>
    }
}

#[component]
fn TechnologyTab() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="space-y-4">
                <h2 class="text-2xl font-bold tracking-tight text-guardian-primary">
                    "Our Technology"
                </h2>
                <p class="text-gray-500">
                    "GUARDIAN ONE integrates multiple advanced technologies to create a comprehensive child protection ecosystem. Our platform is designed to be decentralized, secure, and interoperable with existing systems."
                </p>
            </div>

            <div class="space-y-6">
                <TechnologyCard
                    icon="fingerprint"
                    title="Biometric Child Identity Ledger (BCIL)"
                    summary="Secure identity verification system"
                    body="The BCIL enrolls children using facial, iris, and fingerprint biometrics, creating a secure, tamper-proof digital identity. The system uses blockchain technology to ensure data integrity while maintaining strict privacy controls. Access is limited to authorized agencies with comprehensive audit trails."
                />
                <TechnologyCard
                    icon="brain-circuit"
                    title="Real-Time Risk Detection AI (RRD-AI)"
                    summary="Predictive analytics for trafficking prevention"
                    body="Our AI models continuously monitor patterns and behaviors to identify potential trafficking situations before they escalate. The system analyzes travel patterns, document validations, and other risk factors to generate alerts when suspicious activities are detected. RRD-AI also identifies high-risk geographic areas based on historical data and emerging trends."
                />
                <TechnologyCard
                    icon="database"
                    title="DarkNet & Social Signal Crawlers"
                    summary="Advanced monitoring of trafficking communications"
                    body="Our specialized crawlers use natural language processing and computer vision to detect trafficking content across dark web forums, encrypted messaging platforms, and social media. These tools can identify coded language, suspicious image patterns, and other signals that indicate potential trafficking activity."
                />
                <TechnologyCard
                    icon="users"
                    title="Community Shield App"
                    summary="Empowering communities to protect children"
                    body="The Community Shield App provides tools for anonymous reporting, educational resources, and real-time alerts about trafficking risks in the local area. The app includes a secure reporting system, an AI chatbot for guidance on identifying and reporting trafficking, and educational modules to help communities recognize warning signs."
                />
            </div>
        </div>
    }
}

#[component]
fn PartnerCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] body: String,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-6 text-center">
            <div class="mx-auto w-16 h-16 bg-guardian-light rounded-full flex items-center justify-center mb-2">
                <Icon name=icon class="h-8 w-8 text-guardian-primary"/>
            </div>
            <h3 class="font-semibold mb-3">{title}</h3>
            <p class="text-gray-500">{body}</p>
        </div>
    }
}

#[component]
fn PartnersTab() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="space-y-4">
                <h2 class="text-2xl font-bold tracking-tight text-guardian-primary">
                    "Our Partners"
                </h2>
                <p class="text-gray-500">
                    "GUARDIAN ONE works with a global network of partners to implement our technology and maximize its impact. Our collaborative approach brings together governments, international organizations, NGOs, and technology companies."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <PartnerCard
                    icon="globe"
                    title="International Organizations"
                    body="We collaborate with UNICEF, IOM, and INTERPOL to implement our systems in trafficking hotspots and coordinate global response efforts."
                />
                <PartnerCard
                    icon="shield"
                    title="Government Agencies"
                    body="We work with law enforcement, border control, and child protection agencies to integrate our technology with existing government systems."
                />
                <PartnerCard
                    icon="users"
                    title="Non-Governmental Organizations"
                    body="We partner with Save the Children, Plan International, and other NGOs to ensure our technology reaches the most vulnerable communities."
                />
            </div>

            <div class="rounded-lg bg-gray-100 p-6 text-center">
                <h3 class="text-lg font-medium mb-4">"Become a Partner"</h3>
                <p class="text-gray-500 mb-4">
                    "We are always looking for new partners who share our vision of a world where every child is safe from trafficking. Whether you're a government agency, NGO, or technology company, we welcome your collaboration."
                </p>
                <a href="/report" class="text-guardian-primary hover:underline">
                    "Contact us to learn more about partnership opportunities →"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::AboutTab;

    #[test]
    fn tab_queries_round_trip() {
        for tab in AboutTab::ALL {
            assert_eq!(AboutTab::from_query(Some(tab.as_str())), tab);
        }
    }

    #[test]
    fn unknown_tabs_land_on_the_mission() {
        assert_eq!(AboutTab::from_query(None), AboutTab::Mission);
        assert_eq!(AboutTab::from_query(Some("press")), AboutTab::Mission);
    }
}
