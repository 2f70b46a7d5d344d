//! Validation

use std::{collections::BTreeMap, error::Error, fmt};

use serde::Serialize;

use crate::draft::{BookingDraft, Field};

/// Field-level validation messages for a draft. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    messages: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    /// Whether every field passed validation.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Message for an invalid field.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    /// Whether the field has a message.
    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    /// Invalid fields and their messages, in form order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.messages.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.messages.insert(field, message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";

        for (field, message) in self.entries() {
            write!(f, "{separator}{field}: {message}")?;
            separator = "; ";
        }

        Ok(())
    }
}

impl Error for ValidationErrors {}

/// Checks every rule against the draft and collects all failures.
///
/// Rules are evaluated independently; a failure in one field never hides another. Date-times are
/// compared as strings, which orders `YYYY-MM-DD[THH:MM]` values chronologically.
pub fn validate(draft: &BookingDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    }

    if draft.check_in.is_empty() {
        errors.insert(Field::CheckIn, "Check-in is required");
    }

    if draft.check_out.is_empty() {
        errors.insert(Field::CheckOut, "Check-out is required");
    }

    if !draft.check_in.is_empty()
        && !draft.check_out.is_empty()
        && draft.check_in >= draft.check_out
    {
        errors.insert(Field::CheckOut, "Check-out must be after Check-in");
    }

    if draft.guest_count().is_none() {
        errors.insert(Field::Guests, "At least 1 guest required");
    }

    if draft.room_count().is_none() {
        errors.insert(Field::Rooms, "At least 1 room required");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            room_type: "Deluxe".to_string(),
            guests: "2".to_string(),
            rooms: "1".to_string(),
            check_in: "2025-06-01T14:00".to_string(),
            check_out: "2025-06-04T11:00".to_string(),
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        let errors = validate(&valid_draft());

        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate(&BookingDraft::default());

        let fields: Vec<Field> = errors.entries().map(|(field, _)| field).collect();

        assert_eq!(
            fields,
            [
                Field::Name,
                Field::Email,
                Field::Guests,
                Field::Rooms,
                Field::CheckIn,
                Field::CheckOut
            ]
        );
        assert_eq!(errors.get(Field::CheckOut), Some("Check-out is required"));
    }

    #[test]
    fn whitespace_name_and_email_are_missing() {
        let draft = BookingDraft {
            name: "   ".to_string(),
            email: "\t".to_string(),
            ..valid_draft()
        };

        let errors = validate(&draft);

        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn email_format_is_not_checked() {
        let draft = BookingDraft {
            email: "not-an-email".to_string(),
            ..valid_draft()
        };

        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn check_out_equal_to_check_in_is_rejected() {
        let draft = BookingDraft {
            check_out: "2025-06-01T14:00".to_string(),
            ..valid_draft()
        };

        assert_eq!(
            validate(&draft).get(Field::CheckOut),
            Some("Check-out must be after Check-in")
        );
    }

    #[test]
    fn check_out_before_check_in_is_rejected_alongside_other_errors() {
        let draft = BookingDraft {
            name: String::new(),
            guests: "0".to_string(),
            check_in: "2025-06-05T10:00".to_string(),
            check_out: "2025-06-04T10:00".to_string(),
            ..valid_draft()
        };

        let errors = validate(&draft);

        assert!(errors.contains(Field::CheckOut));
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Guests));
        assert!(!errors.contains(Field::CheckIn));
    }

    #[test]
    fn guest_count_must_be_a_positive_integer() {
        for guests in ["0", "-1", "abc", ""] {
            let draft = BookingDraft {
                guests: guests.to_string(),
                ..valid_draft()
            };

            assert_eq!(
                validate(&draft).get(Field::Guests),
                Some("At least 1 guest required"),
                "guests = {guests:?}"
            );
        }

        let draft = BookingDraft {
            guests: "1".to_string(),
            ..valid_draft()
        };

        assert!(!validate(&draft).contains(Field::Guests));
    }

    #[test]
    fn room_count_must_be_a_positive_integer() {
        let draft = BookingDraft {
            rooms: "none".to_string(),
            ..valid_draft()
        };

        assert_eq!(
            validate(&draft).get(Field::Rooms),
            Some("At least 1 room required")
        );
    }

    #[test]
    fn unknown_room_type_is_not_a_validation_error() {
        let draft = BookingDraft {
            room_type: "Penthouse".to_string(),
            ..valid_draft()
        };

        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn display_joins_messages_in_form_order() {
        let draft = BookingDraft {
            name: String::new(),
            rooms: "0".to_string(),
            ..valid_draft()
        };

        assert_eq!(
            validate(&draft).to_string(),
            "name: Name is required; rooms: At least 1 room required"
        );
    }

    #[test]
    fn errors_serialize_keyed_by_field_name() -> Result<(), serde_json::Error> {
        let draft = BookingDraft {
            email: String::new(),
            ..valid_draft()
        };

        assert_eq!(
            serde_json::to_value(validate(&draft))?,
            serde_json::json!({ "email": "Email is required" })
        );

        Ok(())
    }
}
