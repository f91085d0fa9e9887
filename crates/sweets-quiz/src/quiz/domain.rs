use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog identifier for a sweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable catalog entry. Only the tag sets and `sweetness` take part in scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price_range: String,
    #[serde(default)]
    pub texture: BTreeSet<String>,
    pub sweetness: String,
    #[serde(default)]
    pub mood: BTreeSet<String>,
    #[serde(default)]
    pub time: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub recommendation: String,
}

/// One user selection, tied to a question by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "questionId", alias = "question_id")]
    pub question_id: u32,
    pub value: String,
}

impl Answer {
    pub fn new(question_id: u32, value: impl Into<String>) -> Self {
        Self {
            question_id,
            value: value.into(),
        }
    }
}

/// Item attribute a question is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDimension {
    Mood,
    TimeOfDay,
    Texture,
    Sweetness,
}

impl MatchDimension {
    pub const MOOD_QUESTION: u32 = 1;
    pub const TIME_QUESTION: u32 = 2;
    pub const TEXTURE_QUESTION: u32 = 4;
    pub const SWEETNESS_QUESTION: u32 = 5;

    /// Maps a question id onto the attribute it scores. Question 3 and unknown ids score
    /// nothing.
    pub fn for_question(question_id: u32) -> Option<Self> {
        match question_id {
            Self::MOOD_QUESTION => Some(Self::Mood),
            Self::TIME_QUESTION => Some(Self::TimeOfDay),
            Self::TEXTURE_QUESTION => Some(Self::Texture),
            Self::SWEETNESS_QUESTION => Some(Self::Sweetness),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchDimension::Mood => "mood",
            MatchDimension::TimeOfDay => "time of day",
            MatchDimension::Texture => "texture",
            MatchDimension::Sweetness => "sweetness",
        }
    }

    /// Whether `item` carries `value` on this dimension. Sweetness is an exact match, the
    /// rest are set membership.
    pub fn matches(&self, item: &Item, value: &str) -> bool {
        match self {
            MatchDimension::Mood => item.mood.contains(value),
            MatchDimension::TimeOfDay => item.time.contains(value),
            MatchDimension::Texture => item.texture.contains(value),
            MatchDimension::Sweetness => item.sweetness == value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_accepts_camel_and_snake_case() {
        let camel: Answer =
            serde_json::from_str(r#"{"questionId":1,"value":"relax"}"#).expect("camelCase");
        let snake: Answer =
            serde_json::from_str(r#"{"question_id":1,"value":"relax"}"#).expect("snake_case");
        assert_eq!(camel, snake);
        assert_eq!(
            serde_json::to_value(&camel).expect("serializes")["questionId"],
            1
        );
    }

    #[test]
    fn question_three_has_no_dimension() {
        assert_eq!(MatchDimension::for_question(3), None);
        assert_eq!(MatchDimension::for_question(0), None);
        assert_eq!(MatchDimension::for_question(1), Some(MatchDimension::Mood));
        assert_eq!(
            MatchDimension::for_question(5),
            Some(MatchDimension::Sweetness)
        );
    }
}
