use crate::engine::errors::ValidationError;
use crate::engine::update::types::{EmergencyUpdate, MovementUpdate, OrganiserNotification};

pub const UUID_MIN_LENGTH: usize = 5;
pub const MOVEMENT_UUID_LENGTH: usize = 36;

/// Validators are pure checks over one inbound update. Rules run in a
/// fixed order and the first failure wins, so rejection messages are
/// reproducible. `occurredAt == 0` counts as missing in every workflow.
pub fn validate_emergency(update: &EmergencyUpdate) -> Result<(), ValidationError> {
    if update.uuid.is_empty() {
        return Err(ValidationError::Missing {
            field: "uuid",
            update: "emergency update",
        });
    }
    if update.uuid.len() < UUID_MIN_LENGTH {
        return Err(ValidationError::UuidTooShort);
    }
    if update.event_id == 0 {
        return Err(ValidationError::Missing {
            field: "eventId",
            update: "emergency update",
        });
    }
    if update.event_id < 0 {
        return Err(ValidationError::InvalidEventId);
    }
    if update.region_ids.is_empty() {
        return Err(ValidationError::Missing {
            field: "regionIds",
            update: "emergency update",
        });
    }
    if update.occurred_at == 0 {
        return Err(ValidationError::OccurredAtMissing);
    }
    Ok(())
}

pub fn validate_notification(
    notification: &OrganiserNotification,
) -> Result<(), ValidationError> {
    if notification.title.is_empty() {
        return Err(ValidationError::TitleEmpty);
    }
    if notification.description.is_empty() {
        return Err(ValidationError::DescriptionEmpty);
    }
    if notification.region_ids.is_empty() {
        return Err(ValidationError::NoRegions);
    }
    if notification.occurred_at == 0 {
        return Err(ValidationError::OccurredAtMissing);
    }
    Ok(())
}

pub fn validate_movement(update: &MovementUpdate) -> Result<(), ValidationError> {
    let Some(uuid) = update.uuid.as_deref() else {
        return Err(ValidationError::Missing {
            field: "uuid",
            update: "movement update",
        });
    };
    if uuid.len() != MOVEMENT_UUID_LENGTH {
        return Err(ValidationError::UuidNotExact);
    }
    match update.event_id {
        None | Some(0) => {
            return Err(ValidationError::Missing {
                field: "eventId",
                update: "movement update",
            });
        }
        Some(id) if id < 0 => return Err(ValidationError::InvalidEventId),
        Some(_) => {}
    }
    if update.region_id.is_none() {
        return Err(ValidationError::Missing {
            field: "regionId",
            update: "movement update",
        });
    }
    if update.entering.is_none() {
        return Err(ValidationError::Missing {
            field: "entering",
            update: "movement update",
        });
    }
    match update.occurred_at {
        None | Some(0) => Err(ValidationError::OccurredAtMissing),
        Some(at) if at < 0 => Err(ValidationError::InvalidOccurredAt),
        Some(_) => Ok(()),
    }
}
