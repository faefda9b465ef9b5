//! Activity — a named extracurricular offering and its roster.

use serde::{Deserialize, Serialize};

use crate::error::{ConflictError, MergingtonError, ValidationError};

/// An extracurricular activity students can sign up for.
///
/// The `name` is the activity's identity within the directory. Participants
/// are identified solely by their email address and kept in signup order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Advisory only; signups are never rejected for exceeding it.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Create a builder for constructing an [`Activity`].
    #[must_use]
    pub fn builder() -> ActivityBuilder {
        ActivityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MergingtonError::Validation`] when `name` is empty or
    /// `max_participants` is zero.
    pub fn validate(&self) -> Result<(), MergingtonError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.max_participants == 0 {
            return Err(ValidationError::ZeroCapacity.into());
        }
        Ok(())
    }

    /// Whether `email` is currently on the roster.
    #[must_use]
    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Append `email` to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEmail`] for a blank email and
    /// [`ConflictError::AlreadySignedUp`] when the email is already on the
    /// roster. The roster is untouched on error.
    pub fn sign_up(&mut self, email: &str) -> Result<(), MergingtonError> {
        ensure_email(email)?;
        if self.is_signed_up(email) {
            return Err(ConflictError::AlreadySignedUp {
                email: email.to_string(),
            }
            .into());
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEmail`] for a blank email and
    /// [`ConflictError::ParticipantNotFound`] when the email is not on the
    /// roster.
    pub fn unregister(&mut self, email: &str) -> Result<(), MergingtonError> {
        ensure_email(email)?;
        let Some(index) = self.participants.iter().position(|p| p == email) else {
            return Err(ConflictError::ParticipantNotFound {
                email: email.to_string(),
            }
            .into());
        };
        self.participants.remove(index);
        Ok(())
    }
}

fn ensure_email(email: &str) -> Result<(), MergingtonError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail.into());
    }
    Ok(())
}

/// Step-by-step builder for [`Activity`].
#[derive(Debug, Default)]
pub struct ActivityBuilder {
    name: Option<String>,
    description: Option<String>,
    schedule: Option<String>,
    max_participants: Option<u32>,
    participants: Vec<String>,
}

impl ActivityBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    #[must_use]
    pub fn max_participants(mut self, max_participants: u32) -> Self {
        self.max_participants = Some(max_participants);
        self
    }

    /// Add a participant to the initial roster.
    #[must_use]
    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Consume the builder, validate, and return an [`Activity`].
    ///
    /// # Errors
    ///
    /// Returns [`MergingtonError::Validation`] if `name` is missing or empty,
    /// or `max_participants` is missing or zero.
    pub fn build(self) -> Result<Activity, MergingtonError> {
        let activity = Activity {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            schedule: self.schedule.unwrap_or_default(),
            max_participants: self.max_participants.unwrap_or_default(),
            participants: self.participants,
        };
        activity.validate()?;
        Ok(activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::builder()
            .name("Chess Club")
            .description("Learn strategies and compete in chess tournaments")
            .schedule("Fridays, 3:30 PM - 5:00 PM")
            .max_participants(12)
            .participant("michael@mergington.edu")
            .participant("daniel@mergington.edu")
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_activity_when_fields_provided() {
        let activity = chess();
        assert_eq!(activity.name, "Chess Club");
        assert_eq!(activity.max_participants, 12);
        assert_eq!(activity.participants.len(), 2);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Activity::builder().max_participants(5).build();
        assert!(matches!(
            result,
            Err(MergingtonError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_capacity_is_zero() {
        let result = Activity::builder().name("Choir").build();
        assert!(matches!(
            result,
            Err(MergingtonError::Validation(ValidationError::ZeroCapacity))
        ));
    }

    #[test]
    fn should_append_participant_on_sign_up() {
        let mut activity = chess();
        activity.sign_up("newstudent@mergington.edu").unwrap();
        assert_eq!(
            activity.participants,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "newstudent@mergington.edu"
            ]
        );
    }

    #[test]
    fn should_reject_duplicate_sign_up_and_keep_roster() {
        let mut activity = chess();
        let result = activity.sign_up("michael@mergington.edu");
        assert!(matches!(
            result,
            Err(MergingtonError::Conflict(ConflictError::AlreadySignedUp { .. }))
        ));
        assert_eq!(activity.participants.len(), 2);
    }

    #[test]
    fn should_reject_blank_email() {
        let mut activity = chess();
        let result = activity.sign_up("   ");
        assert!(matches!(
            result,
            Err(MergingtonError::Validation(ValidationError::EmptyEmail))
        ));
        assert_eq!(activity.participants.len(), 2);
    }

    #[test]
    fn should_not_enforce_capacity_on_sign_up() {
        let mut activity = Activity::builder()
            .name("Tiny Club")
            .max_participants(1)
            .participant("a@mergington.edu")
            .build()
            .unwrap();
        activity.sign_up("b@mergington.edu").unwrap();
        assert_eq!(activity.participants.len(), 2);
    }

    #[test]
    fn should_remove_only_matching_participant_on_unregister() {
        let mut activity = chess();
        activity.unregister("michael@mergington.edu").unwrap();
        assert_eq!(activity.participants, vec!["daniel@mergington.edu"]);
    }

    #[test]
    fn should_fail_second_unregister_for_same_email() {
        let mut activity = chess();
        activity.unregister("daniel@mergington.edu").unwrap();
        let result = activity.unregister("daniel@mergington.edu");
        assert!(matches!(
            result,
            Err(MergingtonError::Conflict(
                ConflictError::ParticipantNotFound { .. }
            ))
        ));
    }

    #[test]
    fn should_leave_empty_roster_after_unregistering_everyone() {
        let mut activity = chess();
        for email in activity.participants.clone() {
            activity.unregister(&email).unwrap();
        }
        assert!(activity.participants.is_empty());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let activity = chess();
        let json = serde_json::to_string(&activity).unwrap();
        let parsed: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, activity);
    }
}
