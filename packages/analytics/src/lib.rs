#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Chart series and dashboard counters.
//!
//! The dashboard charts render three fixed series that illustrate what a
//! fully instrumented deployment would show. The counters are the live
//! half: they tally the mirrored collections so the summary cards track
//! real record state instead of hard-coded figures.

use guardian_models::{Alert, AlertStatus, RiskLevel, RiskZone};
use serde::Serialize;

/// One month of alert volume against resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Month label.
    pub month: &'static str,
    /// Alerts raised that month.
    pub alerts: u32,
    /// Alerts resolved that month.
    pub resolved: u32,
}

/// One region's share of total alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionShare {
    /// Region label.
    pub name: &'static str,
    /// Share of alerts, in percent.
    pub value: u32,
}

/// How many alerts were answered within a time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseBucket {
    /// Bucket label.
    pub time: &'static str,
    /// Alerts answered within the bucket.
    pub count: u32,
}

/// Monthly alert volumes and resolutions for the trends line chart.
#[must_use]
pub const fn alert_trends() -> &'static [TrendPoint] {
    &[
        TrendPoint {
            month: "Jan",
            alerts: 65,
            resolved: 55,
        },
        TrendPoint {
            month: "Feb",
            alerts: 78,
            resolved: 70,
        },
        TrendPoint {
            month: "Mar",
            alerts: 90,
            resolved: 85,
        },
        TrendPoint {
            month: "Apr",
            alerts: 81,
            resolved: 75,
        },
        TrendPoint {
            month: "May",
            alerts: 56,
            resolved: 50,
        },
        TrendPoint {
            month: "Jun",
            alerts: 55,
            resolved: 48,
        },
    ]
}

/// Alert distribution by region for the regional bar chart.
#[must_use]
pub const fn regional_distribution() -> &'static [RegionShare] {
    &[
        RegionShare {
            name: "Southeast Asia",
            value: 35,
        },
        RegionShare {
            name: "South Asia",
            value: 28,
        },
        RegionShare {
            name: "Africa",
            value: 24,
        },
        RegionShare {
            name: "Latin America",
            value: 13,
        },
    ]
}

/// Response time buckets for the response analysis area chart.
#[must_use]
pub const fn response_times() -> &'static [ResponseBucket] {
    &[
        ResponseBucket {
            time: "1min",
            count: 45,
        },
        ResponseBucket {
            time: "5min",
            count: 30,
        },
        ResponseBucket {
            time: "15min",
            count: 15,
        },
        ResponseBucket {
            time: "30min",
            count: 10,
        },
    ]
}

/// Average alert response time shown on the summary cards.
///
/// Response telemetry lives outside this app, so the figure is fixed.
pub const AVG_RESPONSE_TIME: &str = "4.2 min";

/// Alert count for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// The status being counted.
    pub status: AlertStatus,
    /// How many alerts currently carry it.
    pub count: usize,
}

/// Zone count for one risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskCount {
    /// The risk level being counted.
    pub level: RiskLevel,
    /// How many zones currently carry it.
    pub count: usize,
}

/// Tallies alerts per status, in declared status order.
///
/// Statuses with no alerts are included with a zero count so chart rows
/// stay stable as records come and go.
#[must_use]
pub fn status_breakdown(alerts: &[Alert]) -> Vec<StatusCount> {
    AlertStatus::all()
        .iter()
        .map(|&status| StatusCount {
            status,
            count: alerts.iter().filter(|a| a.status == status).count(),
        })
        .collect()
}

/// Tallies risk zones per level, lowest to highest.
#[must_use]
pub fn risk_distribution(zones: &[RiskZone]) -> Vec<RiskCount> {
    RiskLevel::all()
        .iter()
        .map(|&level| RiskCount {
            level,
            count: zones.iter().filter(|z| z.risk_level == level).count(),
        })
        .collect()
}

/// Alerts not yet resolved, the dashboard's headline count.
#[must_use]
pub fn active_alert_count(alerts: &[Alert]) -> usize {
    alerts
        .iter()
        .filter(|a| a.status != AlertStatus::Resolved)
        .count()
}

/// Counts behind the alert center summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertSummary {
    /// Alerts at critical risk.
    pub critical: usize,
    /// Alerts at high risk.
    pub high_priority: usize,
    /// Alerts still in the active state.
    pub active: usize,
}

impl AlertSummary {
    /// Tallies summary counts from risk/status pairs.
    ///
    /// Takes pairs rather than records so the alert center can summarize
    /// whichever it is showing, live alerts or the illustrative feed.
    #[must_use]
    pub fn tally(items: impl IntoIterator<Item = (RiskLevel, AlertStatus)>) -> Self {
        let mut summary = Self {
            critical: 0,
            high_priority: 0,
            active: 0,
        };
        for (level, status) in items {
            match level {
                RiskLevel::Critical => summary.critical += 1,
                RiskLevel::High => summary.high_priority += 1,
                RiskLevel::Low | RiskLevel::Medium => {}
            }
            if status == AlertStatus::Active {
                summary.active += 1;
            }
        }
        summary
    }

    /// Tallies summary counts from the live alert collection.
    #[must_use]
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        Self::tally(alerts.iter().map(|a| (a.risk_level, a.status)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};
    use guardian_models::{Location, RecordId};

    use super::*;

    fn alert(level: RiskLevel, status: AlertStatus) -> Alert {
        Alert {
            id: RecordId::from("a1"),
            title: "Checkpoint flag".to_owned(),
            description: "Verification mismatch".to_owned(),
            risk_level: level,
            status,
            user_id: "service".to_owned(),
            location: Location::text("Bangkok, Thailand"),
            created_at: Utc.with_ymd_and_hms(2024, 4, 16, 10, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 4, 16, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn trend_series_spans_six_months() {
        let trends = alert_trends();
        assert_eq!(trends.len(), 6);
        assert_eq!(trends[0].month, "Jan");
        assert_eq!(trends[2].alerts, 90);
        assert_eq!(trends[5].resolved, 48);
    }

    #[test]
    fn regional_shares_sum_to_one_hundred() {
        let total: u32 = regional_distribution().iter().map(|r| r.value).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn response_buckets_are_ordered_fastest_first() {
        let buckets = response_times();
        assert_eq!(buckets[0].time, "1min");
        assert!(buckets.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn status_breakdown_keeps_empty_statuses() {
        let alerts = vec![
            alert(RiskLevel::High, AlertStatus::Active),
            alert(RiskLevel::Low, AlertStatus::Active),
        ];
        let breakdown = status_breakdown(&alerts);
        assert_eq!(breakdown.len(), AlertStatus::all().len());
        assert_eq!(breakdown[0].status, AlertStatus::Active);
        assert_eq!(breakdown[0].count, 2);
        assert_eq!(breakdown[2].status, AlertStatus::Resolved);
        assert_eq!(breakdown[2].count, 0);
    }

    #[test]
    fn risk_distribution_runs_lowest_to_highest() {
        let zone = |level| RiskZone {
            id: RecordId::from("z1"),
            location: Location::text("Border crossing east"),
            description: "Repeat indicators".to_owned(),
            risk_level: level,
            status: guardian_models::ZoneStatus::Active,
            coordinates: guardian_models::Coordinates::new(13.75, 100.5),
            user_id: "service".to_owned(),
        };
        let zones = vec![
            zone(RiskLevel::Critical),
            zone(RiskLevel::Critical),
            zone(RiskLevel::Low),
        ];

        let distribution = risk_distribution(&zones);
        assert_eq!(
            distribution
                .iter()
                .map(|r| (r.level, r.count))
                .collect::<Vec<_>>(),
            vec![
                (RiskLevel::Low, 1),
                (RiskLevel::Medium, 0),
                (RiskLevel::High, 0),
                (RiskLevel::Critical, 2),
            ]
        );
    }

    #[test]
    fn summary_counts_levels_and_active_independently() {
        let summary = AlertSummary::tally([
            (RiskLevel::Critical, AlertStatus::Active),
            (RiskLevel::High, AlertStatus::Investigating),
            (RiskLevel::High, AlertStatus::Active),
            (RiskLevel::Medium, AlertStatus::Active),
            (RiskLevel::Low, AlertStatus::Resolved),
        ]);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.high_priority, 2);
        assert_eq!(summary.active, 3);
    }

    #[test]
    fn active_count_excludes_resolved_alerts() {
        let alerts = vec![
            alert(RiskLevel::High, AlertStatus::Active),
            alert(RiskLevel::High, AlertStatus::Investigating),
            alert(RiskLevel::Low, AlertStatus::Resolved),
        ];
        assert_eq!(active_alert_count(&alerts), 2);
    }

    #[test]
    fn counts_serialize_with_wire_casing() {
        let breakdown = status_breakdown(&[alert(RiskLevel::High, AlertStatus::Active)]);
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json[0]["status"], "active");
        assert_eq!(json[0]["count"], 1);
    }
}
