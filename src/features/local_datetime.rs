//! ISO local date-times as the server writes them: seconds are dropped when zero.
//!
//! Use with `#[serde(with = "crate::features::local_datetime")]`, or the
//! `option` submodule together with `#[serde(default)]` for nullable fields.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

const FULL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const SHORT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn parse(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, FULL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, SHORT_FORMAT))
}

pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(FULL_FORMAT))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
