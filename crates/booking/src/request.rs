//! Booking request
//!
//! The JSON body posted to the booking endpoint. It can only be built from a draft that passes
//! validation.

use serde::Serialize;

use crate::{
    draft::BookingDraft,
    prices::Price,
    validation::{ValidationErrors, validate},
};

/// Booking creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    customer_name: String,
    customer_email: String,
    room: u8,
    check_in: String,
    check_out: String,
    guests: u32,
    rooms: u32,
    total_price: Price,
}

impl BookingRequest {
    /// Builds the request for a draft.
    ///
    /// # Errors
    ///
    /// Returns the draft's [`ValidationErrors`] when any field is invalid.
    pub fn from_draft(draft: &BookingDraft) -> Result<Self, ValidationErrors> {
        let errors = validate(draft);

        if !errors.is_empty() {
            return Err(errors);
        }

        // Both counts are checked by `validate`.
        let (Some(guests), Some(rooms)) = (draft.guest_count(), draft.room_count()) else {
            return Err(errors);
        };

        let room_type = draft.room_type();

        Ok(Self {
            customer_name: draft.name.clone(),
            customer_email: draft.email.clone(),
            room: room_type.id(),
            check_in: date_portion(&draft.check_in).to_string(),
            check_out: date_portion(&draft.check_out).to_string(),
            guests,
            rooms,
            total_price: room_type.total_price(rooms),
        })
    }

    /// Guest name
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Contact email
    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    /// Room identifier
    pub fn room(&self) -> u8 {
        self.room
    }

    /// Check-in date, `YYYY-MM-DD`
    pub fn check_in(&self) -> &str {
        &self.check_in
    }

    /// Check-out date, `YYYY-MM-DD`
    pub fn check_out(&self) -> &str {
        &self.check_out
    }

    /// Number of guests
    pub fn guests(&self) -> u32 {
        self.guests
    }

    /// Number of rooms
    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    /// Price of the stay
    pub fn total_price(&self) -> Price {
        self.total_price
    }
}

/// Drops the time of day from a `YYYY-MM-DDTHH:MM` value.
fn date_portion(value: &str) -> &str {
    value.split_once('T').map_or(value, |(date, _)| date)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::draft::Field;

    use super::*;

    fn draft(room_type: &str, rooms: &str) -> BookingDraft {
        BookingDraft {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            room_type: room_type.to_string(),
            guests: "2".to_string(),
            rooms: rooms.to_string(),
            check_in: "2025-07-10T15:00".to_string(),
            check_out: "2025-07-12T10:30".to_string(),
        }
    }

    #[test]
    fn double_rooms_are_priced_per_room() -> TestResult {
        let request = BookingRequest::from_draft(&draft("Double", "3"))?;

        assert_eq!(request.room(), 2);
        assert_eq!(request.total_price(), Price::new(4500));
        assert_eq!(request.rooms(), 3);

        Ok(())
    }

    #[test]
    fn single_suite() -> TestResult {
        let request = BookingRequest::from_draft(&draft("Suite", "1"))?;

        assert_eq!(request.room(), 4);
        assert_eq!(request.total_price(), Price::new(2500));

        Ok(())
    }

    #[test]
    fn unknown_room_type_is_booked_as_single() -> TestResult {
        let request = BookingRequest::from_draft(&draft("Penthouse", "2"))?;

        assert_eq!(request.room(), 1);
        assert_eq!(request.total_price(), Price::new(2000));

        Ok(())
    }

    #[test]
    fn dates_are_truncated_to_the_day() -> TestResult {
        let request = BookingRequest::from_draft(&draft("Single", "1"))?;

        assert_eq!(request.check_in(), "2025-07-10");
        assert_eq!(request.check_out(), "2025-07-12");

        Ok(())
    }

    #[test]
    fn date_only_values_are_kept() {
        assert_eq!(date_portion("2025-07-10"), "2025-07-10");
        assert_eq!(date_portion(""), "");
    }

    #[test]
    fn invalid_draft_is_rejected_with_its_errors() {
        let mut invalid = draft("Single", "0");
        invalid.set(Field::Name, "");

        let Err(errors) = BookingRequest::from_draft(&invalid) else {
            unreachable!("draft with missing name must not build a request");
        };

        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Rooms));
    }

    #[test]
    fn serializes_to_api_body() -> TestResult {
        let request = BookingRequest::from_draft(&draft("Deluxe", "2"))?;

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "customer_name": "Grace Hopper",
                "customer_email": "grace@example.com",
                "room": 3,
                "check_in": "2025-07-10",
                "check_out": "2025-07-12",
                "guests": 2,
                "rooms": 2,
                "total_price": 4000,
            })
        );

        Ok(())
    }
}
