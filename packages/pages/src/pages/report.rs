//! Public incident intake form and its confirmation page.

use guardian_content::ContentRegistry;
use guardian_models::CaseCategory;
use leptos::*;

use crate::components::Icon;
use crate::layout::Shell;
use crate::{Toast, render};

const fn tab_classes(selected: bool) -> &'static str {
    if selected {
        "rounded-md bg-white shadow-sm px-3 py-1.5"
    } else {
        "rounded-md text-gray-600 hover:text-gray-900 px-3 py-1.5"
    }
}

/// Renders the report intake form, in standard or anonymous mode.
#[must_use]
pub fn report_page(content: &ContentRegistry, anonymous: bool, toasts: Vec<Toast>) -> String {
    let content = content.clone();
    render(move || {
        let site = content.site.clone();
        let report_type = if anonymous { "anonymous" } else { "standard" };
        let identity_icon = if anonymous { "eye-off" } else { "eye" };
        let identity_note = if anonymous {
            "Your identity will be protected"
        } else {
            "Your information is kept confidential"
        };
        view! {
            <Shell
                title="Report an Incident | Guardian One"
                site=site
                toasts=toasts
                active="/report"
            >
                <div class="container mx-auto px-4 py-8">
                    <h1 class="text-3xl font-bold tracking-tight mb-6">"Report an Incident"</h1>
                    <div class="max-w-3xl mx-auto">
                        <div class="bg-white rounded-lg border border-gray-200 shadow-sm">
                            <div class="p-6 border-b border-gray-100">
                                <div class="flex items-center gap-2">
                                    <Icon name="shield" class="h-5 w-5 text-guardian-primary"/>
                                    <h2 class="text-lg font-semibold">"Submit a Report"</h2>
                                </div>
                                <p class="text-sm text-gray-500 mt-1">
                                    "Help us protect children by reporting suspicious activity or concerns"
                                </p>
                            </div>
                            <div class="p-6">
                                <div class="grid grid-cols-2 gap-1 rounded-lg bg-gray-100 p-1 text-center text-sm font-medium">
                                    <a href="/report" class=tab_classes(!anonymous)>
                                        "Standard Report"
                                    </a>
                                    <a href="/report?tab=anonymous" class=tab_classes(anonymous)>
                                        "Anonymous Report"
                                    </a>
                                </div>
                                <form method="post" action="/report" class="space-y-6 mt-4">
                                    <input type="hidden" name="report_type" value=report_type/>
                                    {if anonymous {
                                        view! {
                                            <p class="text-sm text-gray-500">
                                                "No personally identifiable information will be collected. This report will be encrypted and anonymized to protect your identity."
                                            </p>
                                            <label class="flex items-center space-x-2">
                                                <input
                                                    type="checkbox"
                                                    name="no_followup"
                                                    required
                                                    class="h-4 w-4 rounded border-gray-300"
                                                />
                                                <span class="text-sm font-medium leading-none">
                                                    "I understand that I cannot be contacted for follow-up information"
                                                </span>
                                            </label>
                                        }
                                        .into_view()
                                    } else {
                                        view! {
                                            <p class="text-sm text-gray-500">
                                                "Your contact information will be collected but kept confidential. This allows our team to follow up for additional details if needed."
                                            </p>
                                            <div class="space-y-4">
                                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                                    <label class="block space-y-2">
                                                        <span class="text-sm font-medium">
                                                            "Your Name"
                                                        </span>
                                                        <input
                                                            name="name"
                                                            placeholder="Enter your name"
                                                            class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                                                        />
                                                    </label>
                                                    <label class="block space-y-2">
                                                        <span class="text-sm font-medium">
                                                            "Email Address"
                                                        </span>
                                                        <input
                                                            name="email"
                                                            type="email"
                                                            placeholder="Enter your email"
                                                            class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                                                        />
                                                    </label>
                                                </div>
                                                <label class="block space-y-2">
                                                    <span class="text-sm font-medium">
                                                        "Phone Number (Optional)"
                                                    </span>
                                                    <input
                                                        name="phone"
                                                        placeholder="Enter your phone number"
                                                        class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                                                    />
                                                </label>
                                            </div>
                                        }
                                        .into_view()
                                    }}
                                    <label class="block space-y-2">
                                        <span class="text-sm font-medium">"Incident Location"</span>
                                        <div class="relative">
                                            <input
                                                name="location"
                                                placeholder="Enter location or use current location"
                                                required
                                                class="w-full rounded-md border border-gray-300 px-3 py-2 pr-10 text-sm"
                                            />
                                            <span class="absolute right-3 top-2.5 text-gray-400">
                                                <Icon name="map-pin" class="h-4 w-4"/>
                                            </span>
                                        </div>
                                    </label>
                                    <label class="block space-y-2">
                                        <span class="text-sm font-medium">"Incident Type"</span>
                                        <select
                                            name="incident_type"
                                            required
                                            class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm bg-white"
                                        >
                                            <option value="" disabled selected>
                                                "Select incident type"
                                            </option>
                                            {CaseCategory::all()
                                                .iter()
                                                .map(|&category| view! {
                                                    <option value=category.to_string()>
                                                        {category.label()}
                                                    </option>
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>
                                    <label class="block space-y-2">
                                        <span class="text-sm font-medium">"Description"</span>
                                        <textarea
                                            name="description"
                                            placeholder="Provide as much detail as possible about what you observed"
                                            required
                                            rows="6"
                                            class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm min-h-32"
                                        ></textarea>
                                    </label>
                                    <div class="space-y-2">
                                        <span class="block text-sm font-medium">
                                            "Upload Evidence (Optional)"
                                        </span>
                                        <div class="border-2 border-dashed border-gray-300 rounded-lg p-6 text-center">
                                            <Icon
                                                name="upload"
                                                class="h-6 w-6 mx-auto text-gray-400 mb-2"
                                            />
                                            <p class="text-sm text-gray-500 mb-2">
                                                "Drag and drop files here or click to browse"
                                            </p>
                                            <p class="text-xs text-gray-500">
                                                "Supports images, video, and audio files"
                                            </p>
                                            <input
                                                type="file"
                                                name="evidence"
                                                multiple
                                                class="hidden"
                                            />
                                            <button
                                                type="button"
                                                class="mt-4 rounded-md border border-gray-300 px-3 py-1.5 text-sm font-medium hover:bg-gray-50"
                                            >
                                                "Select Files"
                                            </button>
                                        </div>
                                    </div>
                                    <label class="flex items-center space-x-2">
                                        <input
                                            type="checkbox"
                                            name="good_faith"
                                            required
                                            class="h-4 w-4 rounded border-gray-300"
                                        />
                                        <span class="text-sm font-medium leading-none">
                                            "I confirm that this report is being made in good faith"
                                        </span>
                                    </label>
                                    <div class="flex justify-between items-center">
                                        <div class="flex items-center gap-2 text-sm text-gray-500">
                                            <Icon name=identity_icon class="h-4 w-4"/>
                                            <span>{identity_note}</span>
                                        </div>
                                        <button
                                            type="submit"
                                            class="inline-flex items-center gap-2 rounded-md bg-guardian-primary hover:bg-guardian-dark text-white px-4 py-2 text-sm font-medium"
                                        >
                                            <Icon name="shield" class="h-4 w-4"/>
                                            "Submit Report"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    </div>
                </div>
            </Shell>
        }
    })
}

/// Renders the confirmation card after a report lands.
#[must_use]
pub fn report_submitted_page(
    content: &ContentRegistry,
    reference: String,
    toasts: Vec<Toast>,
) -> String {
    let content = content.clone();
    render(move || {
        let site = content.site.clone();
        view! {
            <Shell
                title="Report Submitted | Guardian One"
                site=site
                toasts=toasts
                active="/report"
            >
                <div class="container mx-auto px-4 py-8">
                    <h1 class="text-3xl font-bold tracking-tight mb-6">"Report an Incident"</h1>
                    <div class="max-w-3xl mx-auto">
                        <div class="rounded-lg border border-guardian-success/30 bg-guardian-success/5 shadow-sm">
                            <div class="p-6">
                                <div class="flex items-center gap-2">
                                    <Icon name="shield-check" class="h-6 w-6 text-guardian-success"/>
                                    <h2 class="text-lg font-semibold">"Report Submitted"</h2>
                                </div>
                                <p class="text-sm text-gray-500 mt-1">
                                    "Your report has been successfully submitted"
                                </p>
                            </div>
                            <div class="px-6 pb-6 space-y-4">
                                <p>
                                    "Thank you for your vigilance. Your report has been received and will be processed immediately by our team."
                                </p>
                                <p>
                                    "A confirmation and reference number have been sent to the contact information you provided (if applicable)."
                                </p>
                                <p class="text-sm text-gray-600">
                                    "Reference: "
                                    <span class="font-mono">{reference}</span>
                                </p>
                            </div>
                            <div class="px-6 pb-6 flex justify-between">
                                <a
                                    href="/report"
                                    class="rounded-md border border-gray-300 bg-white px-4 py-2 text-sm font-medium hover:bg-gray-50"
                                >
                                    "Submit Another Report"
                                </a>
                                <a
                                    href="/dashboard"
                                    class="rounded-md bg-guardian-primary hover:bg-guardian-dark text-white px-4 py-2 text-sm font-medium"
                                >
                                    "View Report Status"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </Shell>
        }
    })
}
