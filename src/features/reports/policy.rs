use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::models::{Report, ReportKind, WaterLevel};

/// Opacity for markers of stale reports
const EXPIRED_MARKER_OPACITY: f64 = 0.5;

/// Map display category for quick filtering.
///
/// `bahaya` reports have no dedicated category and only show up under
/// `All`. That mirrors the product behavior, it is not an accident of
/// this implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportFilter {
    #[default]
    All,
    Passable,
    Blocked,
    Dry,
}

/// A report is expired once the current time passes `expires_at`.
/// Derived on every read; nothing is persisted when a report goes
/// stale, and a later confirmation moves `expires_at` forward again.
pub fn is_expired(report: &Report, now: DateTime<Utc>) -> bool {
    now > report.expires_at
}

/// Expired reports are dimmed, fresh ones drawn at full opacity.
pub fn marker_opacity(report: &Report, now: DateTime<Utc>) -> f64 {
    if is_expired(report, now) {
        EXPIRED_MARKER_OPACITY
    } else {
        1.0
    }
}

/// Marker color by water level; dry routes (no level) are green.
pub fn marker_color(water_level: Option<WaterLevel>) -> &'static str {
    match water_level {
        Some(WaterLevel::Siaga) => "#FACC15",    // yellow
        Some(WaterLevel::Bahaya) => "#F97316",   // orange
        Some(WaterLevel::Evakuasi) => "#EF4444", // red
        None => "#22C55E",                       // green for dry routes
    }
}

/// Human-readable Indonesian label by water level.
pub fn water_level_label(water_level: Option<WaterLevel>) -> &'static str {
    match water_level {
        Some(WaterLevel::Siaga) => "🟡 Siaga (Semata Kaki)",
        Some(WaterLevel::Bahaya) => "🟠 Bahaya (Selutut/Sepinggang)",
        Some(WaterLevel::Evakuasi) => "🔴 Evakuasi (Sedada/Atap)",
        None => "🟢 Jalan Kering",
    }
}

/// Partition reports for map display.
pub fn filter_reports(reports: Vec<Report>, filter: ReportFilter) -> Vec<Report> {
    match filter {
        ReportFilter::All => reports,
        ReportFilter::Passable => reports
            .into_iter()
            .filter(|r| r.kind == ReportKind::Flood && r.severity == Some(WaterLevel::Siaga))
            .collect(),
        ReportFilter::Blocked => reports
            .into_iter()
            .filter(|r| r.kind == ReportKind::Flood && r.severity == Some(WaterLevel::Evakuasi))
            .collect(),
        ReportFilter::Dry => reports
            .into_iter()
            .filter(|r| r.kind == ReportKind::DryRoute)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn test_report(kind: ReportKind, severity: Option<WaterLevel>) -> Report {
        let now = Utc::now();
        Report {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            kind,
            severity,
            latitude: -7.2575,
            longitude: 112.7521,
            photo_url: Some("https://cdn.example.com/photo.jpg".to_string()),
            social_url: None,
            social_platform: None,
            confirmation_count: 0,
            created_at: now,
            last_confirmed_at: now,
            expires_at: now + Duration::hours(3),
        }
    }

    #[test]
    fn test_is_expired_boundary() {
        let report = test_report(ReportKind::Flood, Some(WaterLevel::Siaga));
        let expires = report.expires_at;

        assert!(!is_expired(&report, expires - Duration::seconds(1)));
        assert!(!is_expired(&report, expires));
        assert!(is_expired(&report, expires + Duration::seconds(1)));
    }

    #[test]
    fn test_reconfirmed_report_is_fresh_again() {
        let mut report = test_report(ReportKind::Flood, Some(WaterLevel::Bahaya));
        let now = Utc::now();

        report.expires_at = now - Duration::minutes(10);
        assert!(is_expired(&report, now));

        // A confirmation pushes expires_at into the future; no explicit
        // reactivation step exists
        report.expires_at = now + Duration::hours(3);
        assert!(!is_expired(&report, now));
    }

    #[test]
    fn test_marker_opacity() {
        let report = test_report(ReportKind::DryRoute, None);

        assert_eq!(marker_opacity(&report, report.expires_at), 1.0);
        assert_eq!(
            marker_opacity(&report, report.expires_at + Duration::seconds(1)),
            0.5
        );
    }

    #[test]
    fn test_marker_color() {
        assert_eq!(marker_color(Some(WaterLevel::Siaga)), "#FACC15");
        assert_eq!(marker_color(Some(WaterLevel::Bahaya)), "#F97316");
        assert_eq!(marker_color(Some(WaterLevel::Evakuasi)), "#EF4444");
        assert_eq!(marker_color(None), "#22C55E");
    }

    #[test]
    fn test_water_level_label() {
        assert_eq!(
            water_level_label(Some(WaterLevel::Siaga)),
            "🟡 Siaga (Semata Kaki)"
        );
        assert_eq!(water_level_label(None), "🟢 Jalan Kering");
    }

    #[test]
    fn test_filter_all_is_identity() {
        let reports = vec![
            test_report(ReportKind::Flood, Some(WaterLevel::Siaga)),
            test_report(ReportKind::Flood, Some(WaterLevel::Bahaya)),
            test_report(ReportKind::Flood, Some(WaterLevel::Evakuasi)),
            test_report(ReportKind::DryRoute, None),
        ];
        let ids: Vec<Uuid> = reports.iter().map(|r| r.id).collect();

        let all = filter_reports(reports, ReportFilter::All);
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_filter_partition() {
        let siaga = test_report(ReportKind::Flood, Some(WaterLevel::Siaga));
        let bahaya = test_report(ReportKind::Flood, Some(WaterLevel::Bahaya));
        let evakuasi = test_report(ReportKind::Flood, Some(WaterLevel::Evakuasi));
        let dry = test_report(ReportKind::DryRoute, None);
        let reports = vec![
            siaga.clone(),
            bahaya.clone(),
            evakuasi.clone(),
            dry.clone(),
        ];

        let passable = filter_reports(reports.clone(), ReportFilter::Passable);
        let blocked = filter_reports(reports.clone(), ReportFilter::Blocked);
        let dry_only = filter_reports(reports.clone(), ReportFilter::Dry);
        let all = filter_reports(reports, ReportFilter::All);

        assert_eq!(passable.len(), 1);
        assert_eq!(passable[0].id, siaga.id);
        assert_eq!(blocked.len(), 1);
        assert_eq!(blocked[0].id, evakuasi.id);
        assert_eq!(dry_only.len(), 1);
        assert_eq!(dry_only[0].id, dry.id);

        // Every categorized report is part of the full set, and no
        // report lands in more than one category
        let all_ids: Vec<Uuid> = all.iter().map(|r| r.id).collect();
        for r in passable.iter().chain(blocked.iter()).chain(dry_only.iter()) {
            assert!(all_ids.contains(&r.id));
        }
        assert!(passable.iter().all(|r| r.id != blocked[0].id));
        assert!(passable.iter().all(|r| r.id != dry_only[0].id));
        assert!(blocked.iter().all(|r| r.id != dry_only[0].id));

        // bahaya reports show up in no quick-filter category at all
        for r in passable.iter().chain(blocked.iter()).chain(dry_only.iter()) {
            assert_ne!(r.id, bahaya.id);
        }
    }

    #[test]
    fn test_filter_query_values_deserialize() {
        let filter: ReportFilter = serde_json::from_str("\"passable\"").unwrap();
        assert_eq!(filter, ReportFilter::Passable);
        let filter: ReportFilter = serde_json::from_str("\"dry\"").unwrap();
        assert_eq!(filter, ReportFilter::Dry);
    }
}
