use crate::engine::row::{Row, RowValue};

/// Builds raw scan rows for decoder tests, including malformed ones.
pub struct RowFactory {
    row: Row,
}

impl RowFactory {
    pub fn new() -> Self {
        Self { row: Row::new() }
    }

    /// A well-formed emergency row.
    pub fn emergency() -> Self {
        Self::new()
            .with("uuid", RowValue::Str("Test-UUID".into()))
            .with("eventId", RowValue::Int(99))
            .with(
                "regionIds",
                RowValue::List(vec![RowValue::Int(1), RowValue::Int(2)]),
            )
            .with("occurredAt", RowValue::Int(123456))
            .with("dealtWith", RowValue::Bool(false))
            .with("description", RowValue::Str(String::new()))
    }

    /// A well-formed organiser notification row.
    pub fn notification() -> Self {
        Self::new()
            .with("title", RowValue::Str("Gate change".into()))
            .with(
                "description",
                RowValue::Str("Main stage moved to gate 4".into()),
            )
            .with("regionIds", RowValue::List(vec![RowValue::Int(5)]))
            .with("occurredAt", RowValue::Int(123456))
            .with("notificationId", RowValue::Int(0))
            .with("eventId", RowValue::Int(1))
    }

    /// A well-formed movement row.
    pub fn movement() -> Self {
        Self::new()
            .with(
                "uuid",
                RowValue::Str("123e4567-e89b-12d3-a456-426614174000".into()),
            )
            .with("eventId", RowValue::Int(1))
            .with("regionId", RowValue::Int(5))
            .with("entering", RowValue::Bool(true))
            .with("occurredAt", RowValue::Int(123456))
    }

    pub fn with(mut self, name: &str, value: RowValue) -> Self {
        self.row.insert(name, value);
        self
    }

    pub fn create(self) -> Row {
        self.row
    }
}
