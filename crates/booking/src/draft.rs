//! Booking draft
//!
//! The in-progress state of the booking form. Fields hold the raw text entered by the guest;
//! nothing is validated or parsed until a submission is attempted.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rooms::RoomType;

/// A booking form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Guest name
    Name,

    /// Contact email
    Email,

    /// Room type selection
    RoomType,

    /// Number of guests
    Guests,

    /// Number of rooms
    Rooms,

    /// Check-in date and time
    CheckIn,

    /// Check-out date and time
    CheckOut,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::RoomType,
        Field::Guests,
        Field::Rooms,
        Field::CheckIn,
        Field::CheckOut,
    ];

    /// Input name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::RoomType => "roomType",
            Field::Guests => "guests",
            Field::Rooms => "rooms",
            Field::CheckIn => "checkIn",
            Field::CheckOut => "checkOut",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a booking form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown booking field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == value)
            .ok_or_else(|| UnknownField(value.to_string()))
    }
}

/// Raw booking form state for one form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    /// Guest name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Selected room type, as submitted by the room selector
    pub room_type: String,

    /// Number of guests, as typed
    pub guests: String,

    /// Number of rooms, as typed
    pub rooms: String,

    /// Check-in, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DD`
    pub check_in: String,

    /// Check-out, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DD`
    pub check_out: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            room_type: RoomType::default().name().to_string(),
            guests: String::new(),
            rooms: String::new(),
            check_in: String::new(),
            check_out: String::new(),
        }
    }
}

impl BookingDraft {
    /// Overwrites a field with the raw input value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Raw value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::RoomType => &self.room_type,
            Field::Guests => &self.guests,
            Field::Rooms => &self.rooms,
            Field::CheckIn => &self.check_in,
            Field::CheckOut => &self.check_out,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::RoomType => &mut self.room_type,
            Field::Guests => &mut self.guests,
            Field::Rooms => &mut self.rooms,
            Field::CheckIn => &mut self.check_in,
            Field::CheckOut => &mut self.check_out,
        }
    }

    /// Selected room type; unknown selections resolve to [`RoomType::Single`].
    pub fn room_type(&self) -> RoomType {
        RoomType::from_selection(&self.room_type)
    }

    /// Guest count, when the input holds a positive integer.
    pub fn guest_count(&self) -> Option<u32> {
        parse_count(&self.guests)
    }

    /// Room count, when the input holds a positive integer.
    pub fn room_count(&self) -> Option<u32> {
        parse_count(&self.rooms)
    }
}

/// Parses a positive count from form input using leading-integer semantics.
///
/// Leading whitespace and an optional sign are accepted and anything after the first run of
/// digits is ignored, so `"2 guests"` reads as `2`. Zero, negative and digit-less input yields
/// `None`.
pub fn parse_count(raw: &str) -> Option<u32> {
    parse_leading_integer(raw)
        .filter(|value| *value >= 1)
        .and_then(|value| u32::try_from(value).ok())
}

fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;

    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_draft_selects_single_room() {
        let draft = BookingDraft::default();

        assert_eq!(draft.room_type, "Single");
        assert_eq!(draft.room_type(), RoomType::Single);
        assert!(draft.name.is_empty());
    }

    #[test]
    fn set_overwrites_raw_value() {
        let mut draft = BookingDraft::default();

        draft.set(Field::Guests, "abc");
        draft.set(Field::CheckIn, "2025-03-01T14:00");

        assert_eq!(draft.get(Field::Guests), "abc");
        assert_eq!(draft.check_in, "2025-03-01T14:00");
    }

    #[test]
    fn field_names_round_trip() -> TestResult {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>()?, field);
        }

        assert_eq!(
            "nights".parse::<Field>(),
            Err(UnknownField("nights".to_string()))
        );

        Ok(())
    }

    #[test]
    fn parse_count_accepts_positive_integers() {
        assert_eq!(parse_count("1"), Some(1));
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count("  3"), Some(3));
        assert_eq!(parse_count("+4"), Some(4));
    }

    #[test]
    fn parse_count_reads_leading_digits_only() {
        assert_eq!(parse_count("2 guests"), Some(2));
        assert_eq!(parse_count("1.9"), Some(1));
    }

    #[test]
    fn parse_count_rejects_non_positive_or_missing_numbers() {
        for raw in ["0", "-1", "-0", "abc", "", "   ", "-", "x1"] {
            assert_eq!(parse_count(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn parse_count_rejects_out_of_range_values() {
        assert_eq!(parse_count("99999999999"), None);
        assert_eq!(parse_count("99999999999999999999999"), None);
    }
}
