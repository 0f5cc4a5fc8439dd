//! Standalone 404 page, rendered without the site chrome.

use leptos::*;

use crate::components::Icon;
use crate::layout::DocumentHead;
use crate::render;

/// Renders the fallback page for unknown routes.
#[must_use]
pub fn not_found_page() -> String {
    render(|| {
        view! {
            <html lang="en">
                <DocumentHead title="Page Not Found | Guardian One"/>
                <body class="min-h-screen flex items-center justify-center bg-gray-50 text-gray-900">
                    <div class="text-center space-y-6 max-w-md px-4">
                        <div class="flex justify-center">
                            <Icon name="shield-alert" class="h-16 w-16 text-guardian-accent"/>
                        </div>
                        <h1 class="text-4xl font-bold text-guardian-primary">"404"</h1>
                        <p class="text-xl text-guardian-dark">"Page not found"</p>
                        <p class="text-gray-500">
                            "The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."
                        </p>
                        <a
                            href="/"
                            class="inline-flex items-center gap-2 rounded-md bg-guardian-primary hover:bg-guardian-dark text-white px-4 py-2 text-sm font-medium"
                        >
                            <Icon name="home" class="h-5 w-5"/>
                            "Return to Home"
                        </a>
                    </div>
                </body>
            </html>
        }
    })
}
