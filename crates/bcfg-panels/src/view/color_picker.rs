//! Colour picker and swatch view models.

use serde::Serialize;

use bcfg_model::{ColorSlot, RAL_COLORS, RalColor, find_color, resolve_color};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPickerView {
    pub label: &'static str,
    /// Colour slot written on choice. `None` for display-only pickers.
    pub slot: Option<ColorSlot>,
    /// Value as stored, code or name.
    pub value: String,
    /// Palette entry shown on the trigger button.
    pub selected: RalColor,
    pub open: bool,
    pub options: Vec<ColorOptionView>,
}

impl ColorPickerView {
    /// Text shown on the trigger button.
    pub fn display_name(&self) -> &'static str {
        if self.selected.name.is_empty() {
            self.selected.code
        } else {
            self.selected.name
        }
    }
}

/// One palette entry inside the popover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorOptionView {
    pub code: &'static str,
    /// Code without the `RAL ` prefix.
    pub short_code: &'static str,
    pub hex: &'static str,
    pub title: String,
    /// Highlighted when the stored value is exactly this code.
    pub selected: bool,
}

pub fn color_picker_view(
    label: &'static str,
    slot: Option<ColorSlot>,
    value: &str,
    open: bool,
) -> ColorPickerView {
    let options = RAL_COLORS
        .iter()
        .map(|color| ColorOptionView {
            code: color.code,
            short_code: color.short_code(),
            hex: color.hex,
            title: format!("{} - {}", color.code, color.name),
            selected: color.code == value,
        })
        .collect();

    ColorPickerView {
        label,
        slot,
        value: value.to_string(),
        selected: *resolve_color(value),
        open,
        options,
    }
}

/// Small colour preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchView {
    /// Palette hex, or the raw value when it is not a palette entry.
    pub fill: String,
    pub title: String,
}

pub fn color_swatch(value: &str) -> SwatchView {
    match find_color(value) {
        Some(color) => SwatchView {
            fill: color.hex.to_string(),
            title: color.name.to_string(),
        },
        None => SwatchView {
            fill: value.to_string(),
            title: value.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_resolves_by_name() {
        let view = color_picker_view(
            "Flashing Color",
            Some(ColorSlot::Flashing),
            "Jet Black",
            false,
        );
        assert_eq!(view.selected.code, "RAL 9005");
        // Highlight only matches on code.
        assert!(view.options.iter().all(|o| !o.selected));
    }

    #[test]
    fn picker_falls_back_to_first_entry() {
        let view = color_picker_view("Window Color", None, "Arctic White", false);
        assert_eq!(view.selected, RAL_COLORS[0]);
        assert_eq!(view.display_name(), "Grey White");
    }

    #[test]
    fn options_strip_prefix() {
        let view = color_picker_view("Base Plate", Some(ColorSlot::BasePlate), "RAL 7016", true);
        let option = view
            .options
            .iter()
            .find(|o| o.selected)
            .expect("selected option");
        assert_eq!(option.short_code, "7016");
        assert_eq!(option.title, "RAL 7016 - Anthracite Grey");
        assert_eq!(view.options.len(), RAL_COLORS.len());
    }

    #[test]
    fn swatch_uses_raw_value_when_unknown() {
        assert_eq!(color_swatch("#123456").fill, "#123456");
        assert_eq!(color_swatch("RAL 9005").title, "Jet Black");
    }
}
