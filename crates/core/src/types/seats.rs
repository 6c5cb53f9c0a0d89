//! Seating-capacity buckets.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not one of the seating buckets.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("not a valid seating range: {0:?}")]
pub struct SeatRangeError(pub String);

/// Seating capacity of a cafe, constrained to a fixed set of bucket labels.
///
/// The labels are stored verbatim in the `seats` column and rendered as the
/// options of the form's select widget.
///
/// ## Examples
///
/// ```
/// use cafe_registry_core::SeatRange;
///
/// assert_eq!(SeatRange::parse("20-30"), Ok(SeatRange::TwentyToThirty));
/// assert_eq!(SeatRange::TwentyToThirty.as_str(), "20-30");
/// assert!(SeatRange::parse("lots").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SeatRange {
    #[default]
    #[serde(rename = "0-10")]
    UpToTen,
    #[serde(rename = "10-20")]
    TenToTwenty,
    #[serde(rename = "20-30")]
    TwentyToThirty,
    #[serde(rename = "30-40")]
    ThirtyToForty,
    #[serde(rename = "40-50")]
    FortyToFifty,
    #[serde(rename = "50+")]
    FiftyPlus,
}

impl SeatRange {
    /// All buckets in display order, for rendering the select widget.
    pub const ALL: [Self; 6] = [
        Self::UpToTen,
        Self::TenToTwenty,
        Self::TwentyToThirty,
        Self::ThirtyToForty,
        Self::FortyToFifty,
        Self::FiftyPlus,
    ];

    /// The bucket label as stored and displayed.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UpToTen => "0-10",
            Self::TenToTwenty => "10-20",
            Self::TwentyToThirty => "20-30",
            Self::ThirtyToForty => "30-40",
            Self::FortyToFifty => "40-50",
            Self::FiftyPlus => "50+",
        }
    }

    /// Parse a bucket label.
    ///
    /// # Errors
    ///
    /// Returns [`SeatRangeError`] if the input is not one of the six labels.
    pub fn parse(s: &str) -> Result<Self, SeatRangeError> {
        match s {
            "0-10" => Ok(Self::UpToTen),
            "10-20" => Ok(Self::TenToTwenty),
            "20-30" => Ok(Self::TwentyToThirty),
            "30-40" => Ok(Self::ThirtyToForty),
            "40-50" => Ok(Self::FortyToFifty),
            "50+" => Ok(Self::FiftyPlus),
            other => Err(SeatRangeError(other.to_owned())),
        }
    }
}

impl fmt::Display for SeatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SeatRange {
    type Err = SeatRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for SeatRange {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <&str as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for SeatRange {
    fn decode(
        value: sqlx::sqlite::SqliteValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let label = <&str as sqlx::Decode<'r, sqlx::Sqlite>>::decode(value)?;
        Ok(Self::parse(label)?)
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for SeatRange {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.as_str(), buf)
    }
}
