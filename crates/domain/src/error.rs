//! Common error types used across the workspace.
//!
//! Each failure category is its own typed error and converts into
//! [`MergingtonError`] via `#[from]`. The `Display` text of each variant is
//! what HTTP clients see in the `detail` field, so it is part of the
//! external contract.

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum MergingtonError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

/// Input or invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Activity name must not be empty")]
    EmptyName,
    #[error("Email must not be empty")]
    EmptyEmail,
    #[error("Maximum participants must be greater than zero")]
    ZeroCapacity,
}

/// A lookup by activity name that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Activity not found")]
pub struct NotFoundError {
    /// The name that was looked up.
    pub name: String,
}

/// A roster mutation that does not apply to the current roster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("Student is already signed up")]
    AlreadySignedUp { email: String },
    #[error("Participant not found in this activity")]
    ParticipantNotFound { email: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_found_without_name() {
        let err: MergingtonError = NotFoundError {
            name: "Knitting".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Activity not found");
    }

    #[test]
    fn should_mention_already_signed_up_on_duplicate() {
        let err: MergingtonError = ConflictError::AlreadySignedUp {
            email: "michael@mergington.edu".to_string(),
        }
        .into();
        assert!(err.to_string().contains("already signed up"));
    }

    #[test]
    fn should_mention_participant_not_found_on_missing_email() {
        let err: MergingtonError = ConflictError::ParticipantNotFound {
            email: "ghost@mergington.edu".to_string(),
        }
        .into();
        assert!(err.to_string().contains("Participant not found"));
    }
}
