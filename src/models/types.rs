//! Common domain type definitions

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Medal awarded for a result
///
/// Only these three values count as a medal. A missing value, or any other
/// label found in the data, means the result earned no medal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Medal {
    /// First place
    Gold,
    /// Second place
    Silver,
    /// Third place
    Bronze,
}

impl Medal {
    /// Parse a stored medal label, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "GOLD" => Some(Self::Gold),
            "SILVER" => Some(Self::Silver),
            "BRONZE" => Some(Self::Bronze),
            _ => None,
        }
    }

    /// Stored label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "GOLD",
            Self::Silver => "SILVER",
            Self::Bronze => "BRONZE",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde adapter storing an optional medal as a nullable string column.
///
/// Unrecognised labels decode to `None`.
pub mod medal_column {
    use super::{Deserialize, Deserializer, Medal, Serializer};

    pub fn serialize<S>(medal: &Option<Medal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match medal {
            Some(medal) => serializer.serialize_some(medal.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Medal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().and_then(|raw| {
            let medal = Medal::parse(raw);
            if medal.is_none() && !raw.trim().is_empty() {
                log::debug!("Treating unrecognised medal label '{raw}' as no medal");
            }
            medal
        }))
    }
}
