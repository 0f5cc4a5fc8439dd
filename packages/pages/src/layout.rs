//! Document shell: head, header, footer, toast stack.

use guardian_content::SiteContent;
use leptos::*;

use crate::Toast;
use crate::components::Icon;

/// Tailwind runtime configuration with the guardian palette.
const TAILWIND_CONFIG: &str = r"
tailwind.config = {
  theme: {
    extend: {
      colors: {
        guardian: {
          primary: '#1D4ED8',
          dark: '#1E3A8A',
          light: '#DBEAFE',
          accent: '#DC2626',
          warning: '#EA580C',
          success: '#059669'
        }
      }
    }
  }
};
";

/// Document head shared by the shell and standalone pages.
#[component]
pub(crate) fn DocumentHead(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <head>
            <meta charset="utf-8"/>
            <meta name="viewport" content="width=device-width, initial-scale=1"/>
            <title>{title}</title>
            <script src="https://cdn.tailwindcss.com"></script>
            <script inner_html=TAILWIND_CONFIG></script>
            <link rel="stylesheet" href="/assets/css/guardian.css"/>
        </head>
    }
}

/// Full document shell around a page body.
#[component]
pub fn Shell(
    #[prop(into)] title: String,
    site: SiteContent,
    toasts: Vec<Toast>,
    #[prop(into)] active: String,
    children: Children,
) -> impl IntoView {
    let footer_site = site.clone();
    view! {
        <html lang="en">
            <DocumentHead title=title/>
            <body class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                <Header site=site active=active/>
                <main class="flex-1">{children()}</main>
                <Footer site=footer_site/>
                <ToastStack toasts=toasts/>
            </body>
        </html>
    }
}

#[component]
fn Header(site: SiteContent, active: String) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 w-full border-b bg-white/95 backdrop-blur">
            <div class="container mx-auto px-4 flex h-16 items-center justify-between">
                <a href="/" class="flex items-center gap-2">
                    <Icon name="shield" class="h-6 w-6 text-guardian-primary"/>
                    <span class="font-bold text-lg text-guardian-primary">{site.brand.name.clone()}</span>
                </a>

                <nav class="hidden md:flex items-center gap-6">
                    {site.nav.iter().map(|link| {
                        let current = link.path == active;
                        view! {
                            <a
                                href=link.path.clone()
                                class=if current {
                                    "text-sm font-medium text-guardian-primary"
                                } else {
                                    "text-sm font-medium hover:text-guardian-primary transition-colors"
                                }
                            >
                                {link.label.clone()}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>

                <div class="flex items-center gap-4">
                    <span class="relative p-2">
                        <Icon name="bell" class="h-5 w-5"/>
                        <span class="absolute top-1 right-1 w-2 h-2 bg-guardian-accent rounded-full"></span>
                    </span>
                    <a
                        href="/report"
                        class="hidden md:flex px-4 py-2 rounded-md text-sm font-medium text-white bg-guardian-primary hover:bg-guardian-dark transition-colors"
                    >
                        "Emergency SOS"
                    </a>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Footer(site: SiteContent) -> impl IntoView {
    let brand = site.brand;
    let groups = site.footer_groups;
    view! {
        <footer class="bg-guardian-dark text-white py-12">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div class="space-y-4">
                        <div class="flex items-center gap-2">
                            <Icon name="shield" class="h-6 w-6"/>
                            <span class="font-bold text-lg">{brand.name.clone()}</span>
                        </div>
                        <p class="text-sm text-gray-300">{brand.tagline.clone()}</p>
                    </div>
                    {groups.into_iter().map(|group| view! {
                        <div>
                            <h3 class="font-semibold text-lg mb-4">{group.title}</h3>
                            <ul class="space-y-2 text-sm text-gray-300">
                                {group.links.into_iter().map(|link| view! {
                                    <li>
                                        <a href=link.path class="hover:text-white transition-colors">
                                            {link.label}
                                        </a>
                                    </li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="border-t border-gray-600 mt-8 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-sm text-gray-300">
                        "© 2025 " {brand.name} ". All rights reserved."
                    </p>
                    <div class="flex items-center gap-2 mt-4 md:mt-0 text-sm text-gray-300">
                        <span>"Made with"</span>
                        <Icon name="heart" class="h-4 w-4 text-guardian-accent"/>
                        <span>{brand.strap}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn ToastStack(toasts: Vec<Toast>) -> impl IntoView {
    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2 w-80">
            {toasts.into_iter().map(|toast| {
                let tone = if toast.success {
                    "border-guardian-success/40 bg-white"
                } else {
                    "border-guardian-accent/40 bg-white"
                };
                view! {
                    <div class=format!("border rounded-lg shadow-lg p-4 {tone}")>
                        <p class="font-semibold text-sm">{toast.title}</p>
                        <p class="text-sm text-gray-600 mt-1">{toast.body}</p>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
