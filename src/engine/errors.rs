use thiserror::Error;

/// First-violated-rule errors produced by the update validators.
/// Messages are deterministic; callers surface them verbatim as 400 bodies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} not present in {update}")]
    Missing {
        field: &'static str,
        update: &'static str,
    },

    #[error("uuid shorter than 5 characters")]
    UuidTooShort,

    #[error("uuid is not 36 characters")]
    UuidNotExact,

    #[error("invalid eventId")]
    InvalidEventId,

    #[error("no regions specified")]
    NoRegions,

    #[error("occurredAt timestamp missing")]
    OccurredAtMissing,

    #[error("invalid occurredAt")]
    InvalidOccurredAt,

    #[error("title is empty")]
    TitleEmpty,

    #[error("description is empty")]
    DescriptionEmpty,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("table has no key column")]
    NoKeyColumn,
}

#[derive(Debug, Error)]
pub enum FanoutError {
    #[error("publish failed: {0}")]
    Publish(String),

    #[error("broadcast failed: {0}")]
    Broadcast(String),
}
