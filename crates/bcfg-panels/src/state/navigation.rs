//! Left navigation sections.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use bcfg_model::ModelError;

/// One accordion section of the left navigation, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    Building,
    Bays,
    Sheeting,
    Openings,
    Accessory,
    Structure,
    Quote,
}

impl PanelId {
    pub const ALL: [PanelId; 7] = [
        PanelId::Building,
        PanelId::Bays,
        PanelId::Sheeting,
        PanelId::Openings,
        PanelId::Accessory,
        PanelId::Structure,
        PanelId::Quote,
    ];

    /// Identifier stored as the store's active panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::Building => "building",
            PanelId::Bays => "bays",
            PanelId::Sheeting => "sheeting",
            PanelId::Openings => "openings",
            PanelId::Accessory => "accessory",
            PanelId::Structure => "structure",
            PanelId::Quote => "quote",
        }
    }

    /// Section heading.
    pub fn label(&self) -> &'static str {
        match self {
            PanelId::Building => "BUILDING",
            PanelId::Bays => "BAYS",
            PanelId::Sheeting => "SHEETING",
            PanelId::Openings => "OPENINGS",
            PanelId::Accessory => "ACCESSORY",
            PanelId::Structure => "STRUCTURE",
            PanelId::Quote => "QUOTE",
        }
    }

    /// Section matching a stored active panel id, if any.
    pub fn from_id(id: &str) -> Option<PanelId> {
        PanelId::ALL.into_iter().find(|panel| panel.as_str() == id)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelId::from_id(&s.trim().to_lowercase()).ok_or_else(|| ModelError::unknown("panel", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for panel in PanelId::ALL {
            assert_eq!(PanelId::from_id(panel.as_str()), Some(panel));
        }
        assert_eq!(PanelId::from_id(""), None);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Quote".parse::<PanelId>().unwrap(), PanelId::Quote);
        assert!("roof".parse::<PanelId>().is_err());
    }
}
