//! Server-rendered SVG charts for the analytics tab.

use guardian_analytics::{RegionShare, ResponseBucket, TrendPoint};
use leptos::*;

const VIEW_W: f64 = 600.0;
const VIEW_H: f64 = 300.0;
const PAD: f64 = 40.0;
const BAR_GAP_RATIO: f64 = 0.4;

const ALERT_COLOR: &str = "#8B5CF6";
const RESOLVED_COLOR: &str = "#10B981";
const AXIS_COLOR: &str = "#E5E7EB";
const LABEL_COLOR: &str = "#6B7280";

fn x_at(index: u32, count: u32) -> f64 {
    if count < 2 {
        return VIEW_W / 2.0;
    }
    PAD + (VIEW_W - 2.0 * PAD) * f64::from(index) / f64::from(count - 1)
}

fn y_at(value: u32, max: u32) -> f64 {
    if max == 0 {
        return VIEW_H - PAD;
    }
    VIEW_H - PAD - (VIEW_H - 2.0 * PAD) * f64::from(value) / f64::from(max)
}

fn line_points(values: &[u32], max: u32) -> String {
    let count = u32::try_from(values.len()).unwrap_or(u32::MAX);
    (0u32..)
        .zip(values)
        .map(|(i, &v)| format!("{:.1},{:.1}", x_at(i, count), y_at(v, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn area_points(values: &[u32], max: u32) -> String {
    if values.is_empty() {
        return String::new();
    }
    let count = u32::try_from(values.len()).unwrap_or(u32::MAX);
    let baseline = VIEW_H - PAD;
    format!(
        "{} {:.1},{baseline:.1} {:.1},{baseline:.1}",
        line_points(values, max),
        x_at(count - 1, count),
        x_at(0, count),
    )
}

fn bar_w(count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (VIEW_W - 2.0 * PAD) / f64::from(count) * (1.0 - BAR_GAP_RATIO)
}

fn bar_x(index: u32, count: u32) -> f64 {
    let slot = (VIEW_W - 2.0 * PAD) / f64::from(count.max(1));
    PAD + slot * f64::from(index) + (slot - bar_w(count)) / 2.0
}

fn slot_center(index: u32, count: u32) -> f64 {
    bar_x(index, count) + bar_w(count) / 2.0
}

#[component]
fn Axes() -> impl IntoView {
    let baseline = format!("{:.1}", VIEW_H - PAD);
    let right = format!("{:.1}", VIEW_W - PAD);
    let pad = format!("{PAD:.1}");
    view! {
        <line
            x1=pad.clone()
            y1=baseline.clone()
            x2=right
            y2=baseline.clone()
            stroke=AXIS_COLOR
        ></line>
        <line x1=pad.clone() y1=format!("{PAD:.1}") x2=pad y2=baseline stroke=AXIS_COLOR></line>
    }
}

/// Line chart of monthly alert volumes against resolutions.
#[component]
pub fn TrendsChart(points: &'static [TrendPoint]) -> impl IntoView {
    let max = points
        .iter()
        .map(|p| p.alerts.max(p.resolved))
        .max()
        .unwrap_or(0);
    let alerts: Vec<u32> = points.iter().map(|p| p.alerts).collect();
    let resolved: Vec<u32> = points.iter().map(|p| p.resolved).collect();
    let count = u32::try_from(points.len()).unwrap_or(u32::MAX);
    view! {
        <div>
            <svg viewBox="0 0 600 300" class="w-full" role="img" aria-label="Monthly alert trends">
                <Axes/>
                <polyline
                    points=line_points(&alerts, max)
                    fill="none"
                    stroke=ALERT_COLOR
                    stroke-width="2"
                ></polyline>
                <polyline
                    points=line_points(&resolved, max)
                    fill="none"
                    stroke=RESOLVED_COLOR
                    stroke-width="2"
                ></polyline>
                {(0u32..)
                    .zip(points)
                    .map(|(i, p)| view! {
                        <text
                            x=format!("{:.1}", x_at(i, count))
                            y=format!("{:.1}", VIEW_H - PAD + 20.0)
                            text-anchor="middle"
                            fill=LABEL_COLOR
                            font-size="12"
                        >
                            {p.month}
                        </text>
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <div class="flex items-center justify-center gap-6 mt-2 text-xs text-gray-600">
                <span class="flex items-center gap-1.5">
                    <span
                        class="inline-block h-2 w-2 rounded-full"
                        style=format!("background:{ALERT_COLOR}")
                    ></span>
                    "Alerts"
                </span>
                <span class="flex items-center gap-1.5">
                    <span
                        class="inline-block h-2 w-2 rounded-full"
                        style=format!("background:{RESOLVED_COLOR}")
                    ></span>
                    "Resolved"
                </span>
            </div>
        </div>
    }
}

/// Bar chart of alert share per region.
#[component]
pub fn RegionsChart(regions: &'static [RegionShare]) -> impl IntoView {
    let max = regions.iter().map(|r| r.value).max().unwrap_or(0);
    let count = u32::try_from(regions.len()).unwrap_or(u32::MAX);
    view! {
        <svg
            viewBox="0 0 600 300"
            class="w-full"
            role="img"
            aria-label="Alert distribution by region"
        >
            <Axes/>
            {(0u32..)
                .zip(regions)
                .map(|(i, region)| {
                    let top = y_at(region.value, max);
                    let height = VIEW_H - PAD - top;
                    view! {
                        <rect
                            x=format!("{:.1}", bar_x(i, count))
                            y=format!("{top:.1}")
                            width=format!("{:.1}", bar_w(count))
                            height=format!("{height:.1}")
                            rx="4"
                            fill=ALERT_COLOR
                        ></rect>
                        <text
                            x=format!("{:.1}", slot_center(i, count))
                            y=format!("{:.1}", top - 8.0)
                            text-anchor="middle"
                            fill=LABEL_COLOR
                            font-size="12"
                        >
                            {format!("{}%", region.value)}
                        </text>
                        <text
                            x=format!("{:.1}", slot_center(i, count))
                            y=format!("{:.1}", VIEW_H - PAD + 20.0)
                            text-anchor="middle"
                            fill=LABEL_COLOR
                            font-size="11"
                        >
                            {region.name}
                        </text>
                    }
                })
                .collect::<Vec<_>>()}
        </svg>
    }
}

/// Area chart of how quickly alerts are answered.
#[component]
pub fn ResponseChart(buckets: &'static [ResponseBucket]) -> impl IntoView {
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let counts: Vec<u32> = buckets.iter().map(|b| b.count).collect();
    let count = u32::try_from(buckets.len()).unwrap_or(u32::MAX);
    view! {
        <svg viewBox="0 0 600 300" class="w-full" role="img" aria-label="Response time analysis">
            <Axes/>
            <polygon points=area_points(&counts, max) fill=ALERT_COLOR opacity="0.25"></polygon>
            <polyline
                points=line_points(&counts, max)
                fill="none"
                stroke=ALERT_COLOR
                stroke-width="2"
            ></polyline>
            {(0u32..)
                .zip(buckets)
                .map(|(i, bucket)| view! {
                    <text
                        x=format!("{:.1}", x_at(i, count))
                        y=format!("{:.1}", VIEW_H - PAD + 20.0)
                        text-anchor="middle"
                        fill=LABEL_COLOR
                        font-size="12"
                    >
                        {bucket.time}
                    </text>
                })
                .collect::<Vec<_>>()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_points_space_evenly_across_the_plot() {
        assert_eq!(
            line_points(&[0, 50, 100], 100),
            "40.0,260.0 300.0,150.0 560.0,40.0"
        );
    }

    #[test]
    fn area_points_close_along_the_baseline() {
        let points = area_points(&[10, 20], 20);
        assert!(points.starts_with("40.0,150.0 560.0,40.0"));
        assert!(points.ends_with("560.0,260.0 40.0,260.0"));
    }

    #[test]
    fn bars_stay_inside_the_padded_plot() {
        let count = 4;
        for i in 0..count {
            let x = bar_x(i, count);
            assert!(x >= PAD);
            assert!(x + bar_w(count) <= VIEW_W - PAD + 0.01);
        }
    }

    #[test]
    fn zero_max_clamps_to_the_baseline() {
        assert!((y_at(5, 0) - (VIEW_H - PAD)).abs() < f64::EPSILON);
    }

    #[test]
    fn single_point_series_centers_horizontally() {
        assert!((x_at(0, 1) - VIEW_W / 2.0).abs() < f64::EPSILON);
    }
}
