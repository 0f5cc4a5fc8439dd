//! Standing system banners shown at the top of a page body.

use guardian_content::{Banner, BannerVariant};
use leptos::*;

use super::Icon;

const fn tone(variant: BannerVariant) -> (&'static str, &'static str) {
    match variant {
        BannerVariant::Destructive => (
            "bg-guardian-accent/10 border-guardian-accent/30 text-guardian-accent",
            "shield-alert",
        ),
        BannerVariant::Warning => (
            "bg-guardian-warning/10 border-guardian-warning/30 text-guardian-warning",
            "shield-alert",
        ),
        BannerVariant::Success => (
            "bg-guardian-success/10 border-guardian-success/30 text-guardian-success",
            "shield-check",
        ),
        BannerVariant::Default => (
            "bg-guardian-light border-guardian-primary/30 text-guardian-primary",
            "shield",
        ),
    }
}

/// Full-width callout with a tone-matched shield icon.
#[component]
pub fn SystemBanner(banner: Banner) -> impl IntoView {
    let (classes, icon) = tone(banner.variant);
    view! {
        <div class=format!("rounded-lg border px-4 py-3 flex items-start gap-3 {classes}")>
            <Icon name=icon class="h-5 w-5 mt-0.5 shrink-0"/>
            <div>
                <p class="font-semibold">{banner.title}</p>
                <p class="text-sm opacity-90">{banner.description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destructive_and_warning_banners_share_the_alert_shield() {
        assert_eq!(tone(BannerVariant::Destructive).1, "shield-alert");
        assert_eq!(tone(BannerVariant::Warning).1, "shield-alert");
        assert_eq!(tone(BannerVariant::Success).1, "shield-check");
        assert_eq!(tone(BannerVariant::Default).1, "shield");
    }

    #[test]
    fn every_tone_draws_a_tinted_border() {
        for variant in [
            BannerVariant::Default,
            BannerVariant::Destructive,
            BannerVariant::Warning,
            BannerVariant::Success,
        ] {
            assert!(tone(variant).0.contains("border-"));
        }
    }
}
