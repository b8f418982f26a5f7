use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dtos::ReportResponseDto;

/// Buffered events per subscriber; slow consumers skip what they miss
/// and re-fetch the report list to catch up
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// A change to the report set, emitted after the corresponding store
/// write has succeeded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportEvent {
    Insert { report: ReportResponseDto },
    Update { report: ReportResponseDto },
    Delete { report_id: Uuid },
}

/// Apply a change event to a report set.
///
/// Inserts prepend (newest first, matching the list ordering), updates
/// replace by id, deletes remove by id. Events for unknown ids are
/// no-ops, so replaying against a stale set stays safe.
pub fn apply_event(
    mut reports: Vec<ReportResponseDto>,
    event: ReportEvent,
) -> Vec<ReportResponseDto> {
    match event {
        ReportEvent::Insert { report } => {
            reports.insert(0, report);
        }
        ReportEvent::Update { report } => {
            if let Some(existing) = reports.iter_mut().find(|r| r.id == report.id) {
                *existing = report;
            }
        }
        ReportEvent::Delete { report_id } => {
            reports.retain(|r| r.id != report_id);
        }
    }
    reports
}

/// Fan-out hub for report change events.
///
/// Services publish after successful mutations; the SSE endpoint hands
/// each connection its own receiver.
#[derive(Clone)]
pub struct ReportEventHub {
    sender: broadcast::Sender<ReportEvent>,
}

impl ReportEventHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Broadcast an event to all current subscribers. A send error only
    /// means nobody is listening right now, which is fine.
    pub fn publish(&self, event: ReportEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReportEvent> {
        self.sender.subscribe()
    }
}

impl Default for ReportEventHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::{Report, ReportKind, WaterLevel};
    use chrono::{Duration, Utc};

    fn test_dto(kind: ReportKind, severity: Option<WaterLevel>) -> ReportResponseDto {
        let now = Utc::now();
        let report = Report {
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
        };
        ReportResponseDto::from_report(report, now)
    }

    #[test]
    fn test_insert_prepends() {
        let existing = test_dto(ReportKind::Flood, Some(WaterLevel::Siaga));
        let incoming = test_dto(ReportKind::DryRoute, None);
        let incoming_id = incoming.id;

        let reports = apply_event(
            vec![existing.clone()],
            ReportEvent::Insert { report: incoming },
        );

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id, incoming_id);
        assert_eq!(reports[1].id, existing.id);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let report = test_dto(ReportKind::Flood, Some(WaterLevel::Siaga));
        let mut updated = report.clone();
        updated.confirmation_count = 5;

        let reports = apply_event(vec![report], ReportEvent::Update { report: updated });

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].confirmation_count, 5);
    }

    #[test]
    fn test_update_for_unknown_id_is_noop() {
        let known = test_dto(ReportKind::Flood, Some(WaterLevel::Siaga));
        let unknown = test_dto(ReportKind::Flood, Some(WaterLevel::Bahaya));

        let reports = apply_event(
            vec![known.clone()],
            ReportEvent::Update { report: unknown },
        );

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, known.id);
        assert_eq!(reports[0].confirmation_count, known.confirmation_count);
    }

    #[test]
    fn test_delete_removes_by_id() {
        let first = test_dto(ReportKind::Flood, Some(WaterLevel::Evakuasi));
        let second = test_dto(ReportKind::DryRoute, None);

        let reports = apply_event(
            vec![first.clone(), second.clone()],
            ReportEvent::Delete {
                report_id: first.id,
            },
        );

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, second.id);
    }

    #[test]
    fn test_delete_for_unknown_id_is_noop() {
        let report = test_dto(ReportKind::Flood, Some(WaterLevel::Siaga));

        let reports = apply_event(
            vec![report.clone()],
            ReportEvent::Delete {
                report_id: Uuid::new_v4(),
            },
        );

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, report.id);
    }

    #[test]
    fn test_event_json_shape() {
        let report = test_dto(ReportKind::Flood, Some(WaterLevel::Siaga));
        let event = ReportEvent::Delete { report_id: report.id };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "delete");
        assert_eq!(json["report_id"], report.id.to_string());
    }

    #[tokio::test]
    async fn test_hub_delivers_to_subscriber() {
        let hub = ReportEventHub::new();
        let mut rx = hub.subscribe();

        let report = test_dto(ReportKind::Flood, Some(WaterLevel::Siaga));
        hub.publish(ReportEvent::Insert {
            report: report.clone(),
        });

        match rx.recv().await.unwrap() {
            ReportEvent::Insert { report: received } => assert_eq!(received.id, report.id),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_publish_without_subscribers_does_not_panic() {
        let hub = ReportEventHub::new();
        hub.publish(ReportEvent::Delete {
            report_id: Uuid::new_v4(),
        });
    }
}
