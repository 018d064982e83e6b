// ============================================================================
// Canvas coherence mode — how generated pixels blend at the mask boundary
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoherenceMode {
    /// Coherence pass runs over the whole image.
    Unmasked,
    /// Coherence pass limited to the masked region.
    Mask,
    /// Coherence pass limited to a band around the mask edge.
    Edge,
}

impl CoherenceMode {
    /// Wire value, as carried in actions and the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoherenceMode::Unmasked => "unmasked",
            CoherenceMode::Mask => "mask",
            CoherenceMode::Edge => "edge",
        }
    }

    /// Fixed English display label.
    pub fn label(&self) -> &'static str {
        match self {
            CoherenceMode::Unmasked => "Unmasked",
            CoherenceMode::Mask => "Mask",
            CoherenceMode::Edge => "Mask Edge",
        }
    }

    pub fn all() -> &'static [CoherenceMode] {
        &[
            CoherenceMode::Unmasked,
            CoherenceMode::Mask,
            CoherenceMode::Edge,
        ]
    }
}

impl fmt::Display for CoherenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCoherenceModeError {
    pub value: String,
}

impl fmt::Display for ParseCoherenceModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown coherence mode {:?} (expected unmasked, mask or edge)",
            self.value
        )
    }
}

impl std::error::Error for ParseCoherenceModeError {}

impl FromStr for CoherenceMode {
    type Err = ParseCoherenceModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "unmasked" => Ok(CoherenceMode::Unmasked),
            "mask" => Ok(CoherenceMode::Mask),
            "edge" => Ok(CoherenceMode::Edge),
            other => Err(ParseCoherenceModeError {
                value: other.to_string(),
            }),
        }
    }
}

// -- Select options ---------------------------------------------------------

/// One row of a select widget. Values cross the widget boundary as strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// The coherence options, in display order.
pub static COHERENCE_OPTIONS: [SelectOption; 3] = [
    SelectOption {
        label: "Unmasked",
        value: "unmasked",
    },
    SelectOption {
        label: "Mask",
        value: "mask",
    },
    SelectOption {
        label: "Mask Edge",
        value: "edge",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_wire_values() {
        assert_eq!("unmasked".parse::<CoherenceMode>(), Ok(CoherenceMode::Unmasked));
        assert_eq!("mask".parse::<CoherenceMode>(), Ok(CoherenceMode::Mask));
        assert_eq!(" edge ".parse::<CoherenceMode>(), Ok(CoherenceMode::Edge));
    }

    #[test]
    fn rejects_labels_and_unknown_values() {
        let err = "Mask Edge".parse::<CoherenceMode>().unwrap_err();
        assert_eq!(err.value, "Mask Edge");
        assert!("staged".parse::<CoherenceMode>().is_err());
        assert!("".parse::<CoherenceMode>().is_err());
    }

    #[test]
    fn options_match_enum_order() {
        let values: Vec<&str> = COHERENCE_OPTIONS.iter().map(|o| o.value).collect();
        let modes: Vec<&str> = CoherenceMode::all().iter().map(|m| m.as_str()).collect();
        assert_eq!(values, modes);
        for (opt, mode) in COHERENCE_OPTIONS.iter().zip(CoherenceMode::all()) {
            assert_eq!(opt.label, mode.label());
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&CoherenceMode::Edge).unwrap();
        assert_eq!(json, "\"edge\"");
    }
}
