//! Stat and feature cards.

use guardian_content::{Feature, LiveStatCard, StatCard, Trend, TrendDirection};
use leptos::*;

use super::Icon;

const fn trend_glyph(direction: TrendDirection) -> (&'static str, &'static str) {
    match direction {
        TrendDirection::Up => ("↑", "text-guardian-success"),
        TrendDirection::Down => ("↓", "text-guardian-accent"),
        TrendDirection::Neutral => ("→", "text-gray-500"),
    }
}

fn trend_line(trend: Option<Trend>) -> impl IntoView {
    trend.map(|trend| {
        let (arrow, color) = trend_glyph(trend.direction);
        view! {
            <p class=format!("text-xs font-medium mt-3 {color}")>
                <span>{arrow}</span>
                " "
                {trend.value}
            </p>
        }
    })
}

/// Stat card with a fixed headline figure.
#[component]
pub fn StatTile(card: StatCard) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 p-6 shadow-sm">
            <div class="flex items-start justify-between">
                <div class="space-y-1">
                    <p class="text-sm font-medium text-gray-500">{card.title}</p>
                    <p class="text-3xl font-bold">{card.value}</p>
                    <p class="text-xs text-gray-500">{card.description}</p>
                </div>
                <div class="rounded-full bg-guardian-light p-2 text-guardian-primary">
                    <Icon name=card.icon/>
                </div>
            </div>
            {trend_line(card.trend)}
        </div>
    }
}

/// Stat card whose headline figure comes from live records.
#[component]
pub fn LiveStatTile(card: LiveStatCard, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 p-6 shadow-sm">
            <div class="flex items-start justify-between">
                <div class="space-y-1">
                    <p class="text-sm font-medium text-gray-500">{card.title}</p>
                    <p class="text-3xl font-bold text-guardian-accent">{value}</p>
                    <p class="text-xs text-gray-500">{card.description}</p>
                </div>
                <div class="rounded-full bg-guardian-accent/10 p-2 text-guardian-accent">
                    <Icon name=card.icon/>
                </div>
            </div>
            {trend_line(card.trend)}
        </div>
    }
}

/// Platform capability card for the home page grid.
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 p-6 shadow-sm hover:shadow-md transition-shadow">
            <div class="rounded-full bg-guardian-light w-12 h-12 flex items-center justify-center text-guardian-primary mb-4">
                <Icon name=feature.icon class="h-6 w-6"/>
            </div>
            <h3 class="font-semibold text-lg mb-2">{feature.title}</h3>
            <p class="text-sm text-gray-600">{feature.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_arrows_follow_direction() {
        assert_eq!(
            trend_glyph(TrendDirection::Up),
            ("↑", "text-guardian-success")
        );
        assert_eq!(
            trend_glyph(TrendDirection::Down),
            ("↓", "text-guardian-accent")
        );
        assert_eq!(trend_glyph(TrendDirection::Neutral), ("→", "text-gray-500"));
    }
}
