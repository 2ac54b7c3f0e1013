//! Outline panel depth.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Deepest heading level the outline can show.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Which heading levels the outline panel lists.
///
/// In TOML this is written as a level (`outline = 2`), an inclusive range
/// (`outline = [2, 3]`), the keyword `"deep"` (levels 2 through 6), or
/// `false` to hide the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outline {
    /// Outline panel hidden.
    Disabled,
    /// Headings of a single level.
    Level(u8),
    /// Headings from the first level to the second, inclusive.
    Range(u8, u8),
    /// Every heading from level 2 down.
    Deep,
}

impl Default for Outline {
    fn default() -> Self {
        Self::Level(2)
    }
}

impl Outline {
    /// Inclusive heading level range, or `None` when disabled.
    #[must_use]
    pub fn levels(self) -> Option<(u8, u8)> {
        match self {
            Self::Disabled => None,
            Self::Level(level) => Some((level, level)),
            Self::Range(min, max) => Some((min, max)),
            Self::Deep => Some((2, MAX_HEADING_LEVEL)),
        }
    }
}

impl Serialize for Outline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Level(level) => serializer.serialize_u8(level),
            Self::Range(min, max) => [min, max].serialize(serializer),
            Self::Deep => serializer.serialize_str("deep"),
        }
    }
}

impl<'de> Deserialize<'de> for Outline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OutlineVisitor)
    }
}

struct OutlineVisitor;

/// Narrow a parsed heading level, naming the valid range on failure.
fn heading_level<E: de::Error>(value: i64) -> Result<u8, E> {
    u8::try_from(value)
        .ok()
        .filter(|level| (1..=MAX_HEADING_LEVEL).contains(level))
        .ok_or_else(|| {
            E::custom(format!(
                "theme.outline level {value} is out of range, expected 1 to {MAX_HEADING_LEVEL}"
            ))
        })
}

impl<'de> Visitor<'de> for OutlineVisitor {
    type Value = Outline;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a heading level, a [min, max] pair, \"deep\" or false")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Outline, E> {
        if value {
            Err(E::custom(
                "theme.outline = true is not supported, use a level, [min, max] or \"deep\"",
            ))
        } else {
            Ok(Outline::Disabled)
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Outline, E> {
        heading_level(value).map(Outline::Level)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Outline, E> {
        self.visit_i64(i64::try_from(value).unwrap_or(i64::MAX))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Outline, E> {
        if value == "deep" {
            Ok(Outline::Deep)
        } else {
            Err(E::custom(format!(
                "unknown theme.outline keyword \"{value}\", expected \"deep\""
            )))
        }
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Outline, A::Error> {
        let pair_error = || -> A::Error {
            de::Error::custom("theme.outline range must be a [min, max] pair")
        };
        let min = seq.next_element::<i64>()?.ok_or_else(pair_error)?;
        let max = seq.next_element::<i64>()?.ok_or_else(pair_error)?;
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(pair_error());
        }
        Ok(Outline::Range(heading_level(min)?, heading_level(max)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        outline: Outline,
    }

    fn parse(value: &str) -> Result<Outline, toml::de::Error> {
        toml::from_str::<Wrapper>(&format!("outline = {value}")).map(|w| w.outline)
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(parse("3").unwrap(), Outline::Level(3));
        assert_eq!(parse("[2, 4]").unwrap(), Outline::Range(2, 4));
        assert_eq!(parse("\"deep\"").unwrap(), Outline::Deep);
        assert_eq!(parse("false").unwrap(), Outline::Disabled);
    }

    #[test]
    fn test_parse_rejects_true_and_unknown_keyword() {
        assert!(parse("true").is_err());
        let err = parse("\"shallow\"").unwrap_err();
        assert!(err.to_string().contains("theme.outline"), "got: {err}");
    }

    #[test]
    fn test_parse_out_of_range_level_names_valid_range() {
        for value in ["300", "-1", "0", "7", "[2, 9]"] {
            let err = parse(value).unwrap_err();
            let msg = err.to_string();
            assert!(
                msg.contains("theme.outline level") && msg.contains("expected 1 to 6"),
                "{value}: got {msg}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_malformed_range() {
        for value in ["[2]", "[1, 2, 3]"] {
            let err = parse(value).unwrap_err();
            assert!(err.to_string().contains("[min, max]"), "{value}: got {err}");
        }
    }

    #[test]
    fn test_levels() {
        assert_eq!(Outline::default().levels(), Some((2, 2)));
        assert_eq!(Outline::Deep.levels(), Some((2, 6)));
        assert_eq!(Outline::Range(1, 3).levels(), Some((1, 3)));
        assert_eq!(Outline::Disabled.levels(), None);
    }

    #[test]
    fn test_serializes_to_input_shape() {
        let json = serde_json::to_string(&Wrapper {
            outline: Outline::Range(2, 3),
        })
        .unwrap();
        assert_eq!(json, r#"{"outline":[2,3]}"#);

        let json = serde_json::to_string(&Wrapper {
            outline: Outline::Deep,
        })
        .unwrap();
        assert_eq!(json, r#"{"outline":"deep"}"#);
    }
}
