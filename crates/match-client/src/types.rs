//! Wire types of the match listing

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One page of the match listing: `{ "data": [...] }`
///
/// Pagination fields next to `data` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchPage {
    pub data: Vec<FootballMatch>,
}

/// A football match as delivered by the listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootballMatch {
    /// Identifier used for favorites; numeric ids are kept as strings
    #[serde(default, deserialize_with = "string_or_number")]
    pub fifa_id: String,
    pub team1: String,
    pub team2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    /// Any other fields of the record (goals, venue, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FootballMatch {
    pub fn new(fifa_id: impl Into<String>, team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self {
            fifa_id: fifa_id.into(),
            team1: team1.into(),
            team2: team2.into(),
            match_date: None,
            competition: None,
            year: None,
            round: None,
            extra: BTreeMap::new(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
