use serde::{Deserialize, Serialize};

/// Common shape shared by the three update workflows. The windowed filter
/// and the aggregators only see records through this trait.
pub trait UpdateRecord {
    fn event_id(&self) -> i64;
    fn occurred_at(&self) -> i64;
    fn region_ids(&self) -> Vec<i64>;
}

/// Geographic point attached to an emergency update. Kept optional end to
/// end: "no position recorded" must stay distinguishable from `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// Attendee-raised emergency. Inbound fields default to their zero values
/// so the validator, not the JSON decoder, reports what is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyUpdate {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub event_id: i64,
    #[serde(default)]
    pub region_ids: Vec<i64>,
    #[serde(default)]
    pub occurred_at: i64,
    #[serde(default)]
    pub dealt_with: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl UpdateRecord for EmergencyUpdate {
    fn event_id(&self) -> i64 {
        self.event_id
    }

    fn occurred_at(&self) -> i64 {
        self.occurred_at
    }

    fn region_ids(&self) -> Vec<i64> {
        self.region_ids.clone()
    }
}

/// Organiser-authored notification pushed to attendees in the named
/// regions. `notification_id` stays zero until fan-out confirms delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganiserNotification {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub region_ids: Vec<i64>,
    #[serde(default)]
    pub occurred_at: i64,
    #[serde(default)]
    pub notification_id: i32,
    #[serde(default)]
    pub event_id: i64,
}

impl UpdateRecord for OrganiserNotification {
    fn event_id(&self) -> i64 {
        self.event_id
    }

    fn occurred_at(&self) -> i64 {
        self.occurred_at
    }

    fn region_ids(&self) -> Vec<i64> {
        self.region_ids.clone()
    }
}

/// Inbound movement update. All fields are optional at the wire level so
/// presence can be validated explicitly; `into_record` converts an accepted
/// update into the persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementUpdate {
    pub uuid: Option<String>,
    pub event_id: Option<i64>,
    pub region_id: Option<i64>,
    pub entering: Option<bool>,
    pub occurred_at: Option<i64>,
}

impl MovementUpdate {
    /// Pre: the update passed `validate_movement`. Missing fields fall back
    /// to zero values rather than panicking.
    pub fn into_record(self) -> MovementRecord {
        MovementRecord {
            uuid: self.uuid.unwrap_or_default(),
            event_id: self.event_id.unwrap_or_default(),
            region_id: self.region_id,
            entering: self.entering.unwrap_or_default(),
            occurred_at: self.occurred_at.unwrap_or_default(),
        }
    }
}

/// Persisted movement row as the heatmap reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecord {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub event_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
    #[serde(default)]
    pub entering: bool,
    #[serde(default)]
    pub occurred_at: i64,
}

impl UpdateRecord for MovementRecord {
    fn event_id(&self) -> i64 {
        self.event_id
    }

    fn occurred_at(&self) -> i64 {
        self.occurred_at
    }

    fn region_ids(&self) -> Vec<i64> {
        self.region_id.into_iter().collect()
    }
}
