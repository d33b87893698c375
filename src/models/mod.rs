//! Typed schemas for every request and response body the movie API uses.
//!
//! Field names on the wire follow the service (`Title`, `FavoriteMovies`,
//! `_id`, ...); the Rust side uses snake_case.

mod movie;
mod request;
mod user;

pub use movie::{Director, Genre, Movie, MovieId};
pub use request::{Credentials, LoginResponse, ProfileUpdate, Registration};
pub use user::User;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Helper to deserialize id as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize a year sent as a number, a year string, or a date
/// string such as `"1946-12-18"`. Null yields `None`.
pub(crate) fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = Option<i32>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a year as integer or string")
        }

        fn visit_unit<E>(self) -> Result<Option<i32>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Option<i32>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Option<i32>, E>
        where
            E: de::Error,
        {
            i32::try_from(value)
                .map(Some)
                .map_err(|_| E::custom(format!("year out of range: {}", value)))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<i32>, E>
        where
            E: de::Error,
        {
            i32::try_from(value)
                .map(Some)
                .map_err(|_| E::custom(format!("year out of range: {}", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<Option<i32>, E>
        where
            E: de::Error,
        {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .get(..4)
                .and_then(|digits| digits.parse::<i32>().ok())
                .map(Some)
                .ok_or_else(|| E::custom(format!("not a year: {:?}", value)))
        }
    }

    deserializer.deserialize_any(YearVisitor)
}

/// Helper to deserialize a birthday sent either as `YYYY-MM-DD` or as an
/// ISO-8601 timestamp; only the date part is kept.
pub(crate) fn deserialize_birthday<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    raw.get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("not a date: {:?}", raw)))
}

/// Helper to deserialize nullable strings as empty string
/// Handles both missing fields and explicit null values
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
