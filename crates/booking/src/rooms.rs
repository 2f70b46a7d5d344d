//! Rooms
//!
//! The fixed room catalogue: the identifier the booking API expects for each room type and the
//! base rate used to price a stay.

use std::{fmt, io};

use serde::{Deserialize, Serialize};
use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::{Columns, Rows}},
};

use crate::prices::Price;

/// Room types offered on the booking form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Single room
    #[default]
    Single,

    /// Double room
    Double,

    /// Deluxe room
    Deluxe,

    /// Suite
    Suite,

    /// Family room
    Family,
}

impl RoomType {
    /// Every room type, in catalogue order.
    pub const ALL: [RoomType; 5] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::Family,
    ];

    /// Parses a room type from its exact variant name, e.g. `"Deluxe"`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|room| room.name() == value)
    }

    /// Resolves a raw form selection, falling back to [`RoomType::Single`] for unknown values.
    pub fn from_selection(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Variant name, as submitted by the room selector.
    pub const fn name(self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
            RoomType::Family => "Family",
        }
    }

    /// Human-readable option label.
    pub const fn label(self) -> &'static str {
        match self {
            RoomType::Single => "Single Room",
            RoomType::Double => "Double Room",
            RoomType::Deluxe => "Deluxe Room",
            RoomType::Suite => "Suite Room",
            RoomType::Family => "Family Room",
        }
    }

    /// Identifier the booking API uses for this room type.
    pub const fn id(self) -> u8 {
        match self {
            RoomType::Single => 1,
            RoomType::Double => 2,
            RoomType::Deluxe => 3,
            RoomType::Suite => 4,
            RoomType::Family => 5,
        }
    }

    /// Base rate for one room of this type.
    pub const fn base_rate(self) -> Price {
        match self {
            RoomType::Single => Price::new(1000),
            RoomType::Double => Price::new(1500),
            RoomType::Deluxe => Price::new(2000),
            RoomType::Suite => Price::new(2500),
            RoomType::Family => Price::new(3000),
        }
    }

    /// Total price for booking `rooms` rooms of this type.
    pub fn total_price(self, rooms: u32) -> Price {
        self.base_rate().times(rooms)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes the room catalogue as a table of room types, identifiers and base rates.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_catalogue(mut out: impl io::Write) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Room Type", "Label", "Id", "Base Rate"]);

    for room in RoomType::ALL {
        builder.push_record([
            room.name().to_string(),
            room.label().to_string(),
            room.id().to_string(),
            room.base_rate().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..4), Alignment::right());

    writeln!(out, "{table}")
}
