//! The cafe record and its row mapping.

use sqlx::FromRow;

use cafe_registry_core::{CafeId, SeatRange};

/// A stored cafe row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Cafe {
    pub id: CafeId,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: SeatRange,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// Nullable at the storage layer; the form requires it.
    pub coffee_price: Option<String>,
}

/// The mutable field set of a cafe.
///
/// Produced by form validation and consumed whole by insert and update;
/// every write replaces all of these fields at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeDraft {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: SeatRange,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: String,
}

/// One rendered cell of the list view: column name and display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnValue {
    pub name: &'static str,
    pub value: String,
}

impl Cafe {
    /// Column names of the `cafes` table, in display order.
    ///
    /// [`Self::to_row`] must produce exactly these keys in this order; a unit
    /// test guards the two against drifting apart when fields are added.
    pub const COLUMNS: [&'static str; 11] = [
        "id",
        "name",
        "map_url",
        "img_url",
        "location",
        "seats",
        "has_toilet",
        "has_wifi",
        "has_sockets",
        "can_take_calls",
        "coffee_price",
    ];

    /// Convert the row into an ordered column -> display value mapping for
    /// the list template.
    #[must_use]
    pub fn to_row(&self) -> Vec<ColumnValue> {
        fn cell(name: &'static str, value: String) -> ColumnValue {
            ColumnValue { name, value }
        }

        vec![
            cell("id", self.id.to_string()),
            cell("name", self.name.clone()),
            cell("map_url", self.map_url.clone()),
            cell("img_url", self.img_url.clone()),
            cell("location", self.location.clone()),
            cell("seats", self.seats.to_string()),
            cell("has_toilet", yes_no(self.has_toilet)),
            cell("has_wifi", yes_no(self.has_wifi)),
            cell("has_sockets", yes_no(self.has_sockets)),
            cell("can_take_calls", yes_no(self.can_take_calls)),
            cell("coffee_price", self.coffee_price.clone().unwrap_or_default()),
        ]
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}
