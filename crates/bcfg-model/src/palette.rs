//! Fixed RAL colour palette offered by the colour pickers.

use serde::Serialize;

/// One palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RalColor {
    /// RAL code, e.g. `RAL 9002`.
    pub code: &'static str,
    pub name: &'static str,
    /// CSS hex colour, e.g. `#E7EBDA`.
    pub hex: &'static str,
}

impl RalColor {
    /// Code without the `RAL ` prefix, as printed under a swatch.
    pub fn short_code(&self) -> &'static str {
        self.code.strip_prefix("RAL ").unwrap_or(self.code)
    }

    /// Matches either the code or the display name.
    pub fn matches(&self, value: &str) -> bool {
        self.code == value || self.name == value
    }
}

pub static RAL_COLORS: [RalColor; 12] = [
    RalColor {
        code: "RAL 9002",
        name: "Grey White",
        hex: "#E7EBDA",
    },
    RalColor {
        code: "RAL 9010",
        name: "Pure White",
        hex: "#F4F4F4",
    },
    RalColor {
        code: "RAL 9006",
        name: "White Aluminium",
        hex: "#A5A5A5",
    },
    RalColor {
        code: "RAL 9007",
        name: "Grey Aluminium",
        hex: "#8F8F8F",
    },
    RalColor {
        code: "RAL 7035",
        name: "Light Grey",
        hex: "#CBD0CC",
    },
    RalColor {
        code: "RAL 7016",
        name: "Anthracite Grey",
        hex: "#383E42",
    },
    RalColor {
        code: "RAL 5010",
        name: "Gentian Blue",
        hex: "#0E294B",
    },
    RalColor {
        code: "RAL 6005",
        name: "Moss Green",
        hex: "#2F4538",
    },
    RalColor {
        code: "RAL 3000",
        name: "Flame Red",
        hex: "#AF2B1E",
    },
    RalColor {
        code: "RAL 1015",
        name: "Light Ivory",
        hex: "#E6D690",
    },
    RalColor {
        code: "RAL 8017",
        name: "Chocolate Brown",
        hex: "#45322E",
    },
    RalColor {
        code: "RAL 9005",
        name: "Jet Black",
        hex: "#0A0A0A",
    },
];

/// Find a palette entry by code or name.
pub fn find_color(value: &str) -> Option<&'static RalColor> {
    RAL_COLORS.iter().find(|color| color.matches(value))
}

/// Resolve a stored colour value, falling back to the first palette entry.
pub fn resolve_color(value: &str) -> &'static RalColor {
    find_color(value).unwrap_or(&RAL_COLORS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        for (i, color) in RAL_COLORS.iter().enumerate() {
            assert!(
                RAL_COLORS[i + 1..].iter().all(|c| c.code != color.code),
                "duplicate {}",
                color.code
            );
        }
    }

    #[test]
    fn lookup_by_name_or_code() {
        assert_eq!(find_color("RAL 7016").map(|c| c.name), Some("Anthracite Grey"));
        assert_eq!(find_color("Flame Red").map(|c| c.code), Some("RAL 3000"));
        assert_eq!(resolve_color("Arctic White").code, "RAL 9002");
    }
}
