use crate::engine::update::{
    EmergencyUpdate, MovementUpdate, OrganiserNotification, Position,
};

pub struct EmergencyUpdateFactory {
    inner: EmergencyUpdate,
}

impl EmergencyUpdateFactory {
    pub fn new() -> Self {
        Self {
            inner: EmergencyUpdate {
                uuid: "Test-UUID".into(),
                event_id: 99,
                region_ids: vec![1, 2],
                occurred_at: 123456,
                dealt_with: false,
                description: String::new(),
                position: None,
            },
        }
    }

    pub fn with_uuid(mut self, uuid: &str) -> Self {
        self.inner.uuid = uuid.to_string();
        self
    }

    pub fn with_event_id(mut self, event_id: i64) -> Self {
        self.inner.event_id = event_id;
        self
    }

    pub fn with_region_ids(mut self, region_ids: Vec<i64>) -> Self {
        self.inner.region_ids = region_ids;
        self
    }

    pub fn with_occurred_at(mut self, occurred_at: i64) -> Self {
        self.inner.occurred_at = occurred_at;
        self
    }

    pub fn with_dealt_with(mut self, dealt_with: bool) -> Self {
        self.inner.dealt_with = dealt_with;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.inner.description = description.to_string();
        self
    }

    pub fn with_position(mut self, lat: f64, lng: f64) -> Self {
        self.inner.position = Some(Position { lat, lng });
        self
    }

    pub fn create(self) -> EmergencyUpdate {
        self.inner
    }
}

pub struct NotificationFactory {
    inner: OrganiserNotification,
}

impl NotificationFactory {
    pub fn new() -> Self {
        Self {
            inner: OrganiserNotification {
                title: "Gate change".into(),
                description: "Main stage moved to gate 4".into(),
                region_ids: vec![5],
                occurred_at: 123456,
                notification_id: 0,
                event_id: 1,
            },
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.inner.title = title.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.inner.description = description.to_string();
        self
    }

    pub fn with_region_ids(mut self, region_ids: Vec<i64>) -> Self {
        self.inner.region_ids = region_ids;
        self
    }

    pub fn with_occurred_at(mut self, occurred_at: i64) -> Self {
        self.inner.occurred_at = occurred_at;
        self
    }

    pub fn with_event_id(mut self, event_id: i64) -> Self {
        self.inner.event_id = event_id;
        self
    }

    pub fn create(self) -> OrganiserNotification {
        self.inner
    }
}

pub struct MovementUpdateFactory {
    inner: MovementUpdate,
}

impl MovementUpdateFactory {
    pub fn new() -> Self {
        Self {
            inner: MovementUpdate {
                uuid: Some("123e4567-e89b-12d3-a456-426614174000".into()),
                event_id: Some(1),
                region_id: Some(5),
                entering: Some(true),
                occurred_at: Some(123456),
            },
        }
    }

    pub fn with_uuid(mut self, uuid: Option<&str>) -> Self {
        self.inner.uuid = uuid.map(str::to_owned);
        self
    }

    pub fn with_event_id(mut self, event_id: Option<i64>) -> Self {
        self.inner.event_id = event_id;
        self
    }

    pub fn with_region_id(mut self, region_id: Option<i64>) -> Self {
        self.inner.region_id = region_id;
        self
    }

    pub fn with_entering(mut self, entering: Option<bool>) -> Self {
        self.inner.entering = entering;
        self
    }

    pub fn with_occurred_at(mut self, occurred_at: Option<i64>) -> Self {
        self.inner.occurred_at = occurred_at;
        self
    }

    pub fn create(self) -> MovementUpdate {
        self.inner
    }
}
