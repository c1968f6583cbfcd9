//! Emotional tone classification.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, IntoEnumIterator};

/// Closed set of emotional tones a generated story can carry.
///
/// Parsing is exact and case-sensitive. Anything outside these seven names is
/// rejected rather than coerced to [`Tone::Neutral`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Tone {
    Happy,
    Sad,
    Intense,
    Mysterious,
    Calm,
    Hopeful,
    Neutral,
}

impl Tone {
    /// Wire names of every tone, in declaration order.
    pub fn names() -> Vec<&'static str> {
        Tone::iter().map(Into::into).collect()
    }

    /// Tones the generator is asked to choose between.
    ///
    /// [`Tone::Neutral`] is accepted in responses but never suggested.
    pub fn expressive() -> impl Iterator<Item = Tone> {
        Tone::iter().filter(|tone| *tone != Tone::Neutral)
    }

    /// Wire name of this tone.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_exactly_seven_tones() {
        assert_eq!(
            Tone::names(),
            vec!["HAPPY", "SAD", "INTENSE", "MYSTERIOUS", "CALM", "HOPEFUL", "NEUTRAL"]
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Tone::from_str("MYSTERIOUS").ok(), Some(Tone::Mysterious));
        assert!(Tone::from_str("mysterious").is_err());
        assert!(Tone::from_str(" CALM").is_err());
        assert!(Tone::from_str("EXCITED").is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Tone::Hopeful).unwrap();
        assert_eq!(json, "\"HOPEFUL\"");
        let tone: Tone = serde_json::from_str("\"SAD\"").unwrap();
        assert_eq!(tone, Tone::Sad);
        assert!(serde_json::from_str::<Tone>("\"EXCITED\"").is_err());
    }

    #[test]
    fn test_expressive_excludes_neutral() {
        let expressive: Vec<Tone> = Tone::expressive().collect();
        assert_eq!(expressive.len(), 6);
        assert!(!expressive.contains(&Tone::Neutral));
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(Tone::Intense.to_string(), "INTENSE");
        assert_eq!(Tone::Calm.as_str(), "CALM");
    }
}
