//! Severity and status chips.

use guardian_models::{AlertStatus, RiskLevel};
use leptos::*;

/// Chip classes for a risk level.
#[must_use]
pub const fn severity_classes(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "bg-guardian-primary text-white",
        RiskLevel::Medium => "bg-amber-500 text-white",
        RiskLevel::High => "bg-guardian-warning text-white",
        RiskLevel::Critical => "bg-guardian-accent text-white",
    }
}

/// Chip classes for an alert status.
#[must_use]
pub const fn status_classes(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Active => {
            "bg-guardian-accent/15 text-guardian-accent border-guardian-accent/30"
        }
        AlertStatus::Investigating => {
            "bg-guardian-warning/15 text-guardian-warning border-guardian-warning/30"
        }
        AlertStatus::Resolved => {
            "bg-guardian-success/15 text-guardian-success border-guardian-success/30"
        }
    }
}

/// Uppercases the first letter of a wire-cased label.
#[must_use]
pub fn chip_label(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Solid chip for an alert or zone severity.
#[component]
pub fn SeverityBadge(level: RiskLevel) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
            severity_classes(level),
        )>
            {chip_label(level.as_ref())}
        </span>
    }
}

/// Tinted outline chip for an alert handling status.
#[component]
pub fn StatusBadge(status: AlertStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium {}",
            status_classes(status),
        )>
            {chip_label(status.as_ref())}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_chips_step_through_the_palette() {
        assert!(severity_classes(RiskLevel::Critical).contains("guardian-accent"));
        assert!(severity_classes(RiskLevel::High).contains("guardian-warning"));
        assert!(severity_classes(RiskLevel::Medium).contains("amber-500"));
        assert!(severity_classes(RiskLevel::Low).contains("guardian-primary"));
    }

    #[test]
    fn status_chips_use_tinted_outlines() {
        for status in AlertStatus::all() {
            let classes = status_classes(*status);
            assert!(classes.contains("/15"));
            assert!(classes.contains("border-"));
        }
    }

    #[test]
    fn chip_labels_capitalize_the_first_letter_only() {
        assert_eq!(chip_label("investigating"), "Investigating");
        assert_eq!(chip_label("high"), "High");
        assert_eq!(chip_label(""), "");
    }
}
