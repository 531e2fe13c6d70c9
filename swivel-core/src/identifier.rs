use std::str::FromStr;

use derive_more::Display;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid identifier `{0}`, expected namespace:path")]
pub struct InvalidIdentifier(pub String);

/// Names a kind of block, e.g. `minecraft:chest`.
#[derive(Display, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{namespace}:{path}")]
pub struct Identifier {
    pub namespace: String,
    pub path: String,
}

impl Identifier {
    pub fn vanilla(path: &str) -> Self {
        Self {
            namespace: "minecraft".to_string(),
            path: path.to_string(),
        }
    }
}

fn valid_segment(segment: &str, allow_slash: bool) -> bool {
    !segment.is_empty()
        && segment.chars().all(|c| {
            matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.') || (allow_slash && c == '/')
        })
}

impl FromStr for Identifier {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path))
                if valid_segment(namespace, false) && valid_segment(path, true) =>
            {
                Ok(Identifier {
                    namespace: namespace.to_string(),
                    path: path.to_string(),
                })
            }
            _ => Err(InvalidIdentifier(s.to_string())),
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdentifierVisitor;

        impl Visitor<'_> for IdentifierVisitor {
            type Value = Identifier;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a valid Identifier (namespace:path)")
            }

            fn visit_str<E>(self, identifier: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                identifier.parse().map_err(serde::de::Error::custom)
            }
        }
        deserializer.deserialize_str(IdentifierVisitor)
    }
}
