mod builtin;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ThemeError;

pub use builtin::{dark, light, pastel};

/// Serialized palette keys that are not color roles.
const IDENTITY_KEYS: [&str; 3] = ["name", "type", "uiTheme"];

/// Whether a theme is meant for a dark or a light editor background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    /// The editor base theme a palette of this kind is registered against.
    pub fn default_ui_theme(self) -> UiTheme {
        match self {
            Self::Dark => UiTheme::VsDark,
            Self::Light => UiTheme::Vs,
        }
    }
}

/// Base theme identifier used when registering a theme with the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiTheme {
    #[serde(rename = "vs")]
    Vs,
    #[serde(rename = "vs-dark")]
    VsDark,
    #[serde(rename = "hc-black")]
    HcBlack,
    #[serde(rename = "hc-light")]
    HcLight,
}

/// One visual identity: every color role the theme assembler reads.
///
/// Roles serialize under their camelCase names (`editorBg`, `gitAdded`, ...), which is
/// also how configured palettes refer to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    pub ui_theme: UiTheme,

    // Syntax colors
    pub cyan: String,
    pub purple: String,
    pub lime: String,
    pub pink: String,
    pub yellow: String,
    pub white: String,
    pub fg: String,
    pub fg_muted: String,
    pub comment: String,
    pub error: String,

    // Backgrounds
    pub editor_bg: String,
    pub sidebar_bg: String,
    pub widget_bg: String,
    pub shadow_bg: String,
    pub list_active_bg: String,
    pub selection_bg: String,
    pub selection_border: String,
    pub find_match_bg: String,
    pub find_match_border: String,
    pub find_match_highlight_bg: String,
    pub hover_highlight_bg: String,
    pub word_highlight_bg: String,
    pub word_highlight_strong_bg: String,
    pub line_highlight_bg: String,
    pub line_highlight_border: String,
    pub fold_bg: String,

    // UI foregrounds
    pub ui_fg: String,
    pub ui_fg_muted: String,
    pub ui_fg_dim: String,
    pub accent_blue: String,
    pub accent_light_blue: String,
    pub accent_bright_blue: String,
    pub badge_bg: String,
    pub focus_border: String,
    pub progress_bar: String,
    pub link_fg: String,

    // Borders
    pub border_subtle: String,
    pub border_medium: String,
    pub border_strong: String,
    pub border_bright: String,
    pub border_transparent: String,
    pub border_menu: String,

    // Editor details
    pub line_number_fg: String,
    pub line_number_active_fg: String,
    pub cursor_fg: String,
    pub cursor_bg: String,
    pub whitespace_fg: String,
    pub indent_guide_bg: String,
    pub indent_guide_active_bg: String,
    pub ruler_fg: String,
    pub bracket_match_bg: String,
    pub bracket_match_border: String,
    pub code_lens_fg: String,

    // Scrollbar
    pub scrollbar_bg: String,
    pub scrollbar_hover_bg: String,
    pub scrollbar_active_bg: String,

    // Buttons
    pub button_bg: String,
    pub button_hover_bg: String,
    pub button_secondary_bg: String,
    pub button_secondary_hover_bg: String,

    // Input
    pub input_active_bg: String,
    pub input_active_border: String,
    pub placeholder_fg: String,

    // Tabs
    pub tab_active_border: String,
    pub tab_inactive_fg: String,
    pub tab_border: String,
    pub tab_bar_border: String,

    // Title bar
    pub title_inactive_bg: String,
    pub title_inactive_fg: String,

    // Status bar
    pub status_debug_bg: String,
    pub status_no_folder_bg: String,
    pub status_remote_bg: String,
    pub status_item_hover_bg: String,
    pub status_item_active_bg: String,

    // Git decorations
    pub git_added: String,
    pub git_modified: String,
    pub git_deleted: String,
    pub git_conflicting: String,
    pub git_ignored: String,
    pub git_untracked: String,
    pub git_stage_deleted: String,
    pub git_stage_modified: String,
    pub git_submodule: String,

    // Gutter
    pub gutter_modified: String,
    pub gutter_added: String,
    pub gutter_deleted: String,
    pub gutter_folding: String,

    // Diff
    pub diff_inserted_bg: String,
    pub diff_removed_bg: String,
    pub diff_border: String,

    // Merge
    pub merge_current_header: String,
    pub merge_current_content: String,
    pub merge_incoming_header: String,
    pub merge_incoming_content: String,
    pub merge_common_header: String,

    // Peek view
    pub peek_border: String,
    pub peek_editor_bg: String,
    pub peek_match_highlight_bg: String,
    pub peek_match_highlight_border: String,
    pub peek_result_match_bg: String,
    pub peek_result_selection_bg: String,

    // Suggest widget
    pub suggest_selected_bg: String,
    pub suggest_highlight_fg: String,

    // Notifications
    pub error_icon: String,
    pub warning_icon: String,
    pub info_icon: String,
    pub notification_border: String,
    pub notification_toast_border: String,

    // Terminal
    pub terminal_bg: String,
    pub terminal_cursor_bg: String,
    pub terminal_selection_bg: String,
    pub ansi_black: String,
    pub ansi_blue: String,
    pub ansi_bright_black: String,
    pub ansi_bright_blue: String,
    pub ansi_bright_cyan: String,
    pub ansi_bright_green: String,
    pub ansi_bright_magenta: String,
    pub ansi_bright_red: String,
    pub ansi_bright_white: String,
    pub ansi_bright_yellow: String,
    pub ansi_cyan: String,
    pub ansi_green: String,
    pub ansi_magenta: String,
    pub ansi_red: String,
    pub ansi_white: String,
    pub ansi_yellow: String,

    // Breadcrumb
    pub breadcrumb_fg: String,
    pub breadcrumb_focus_fg: String,

    // Misc
    pub editor_group_border: String,
    pub list_filter_bg: String,
    pub list_filter_no_match: String,
    pub tree_indent_stroke: String,
    pub walk_through_bg: String,
    pub settings_focused_row: String,
    pub debug_toolbar_border: String,
    pub menu_separator: String,
    pub menu_selection_bg: String,
    pub widget_resize_border: String,
    pub picker_group_border: String,
    pub picker_group_fg: String,
    pub panel_active_border: String,
    pub panel_active_fg: String,
    pub panel_inactive_fg: String,
    pub editor_overview_bg: String,
    pub editor_overview_border: String,
    pub editor_error_bg: String,
    pub editor_warning_bg: String,
    pub editor_info_bg: String,
}

/// Changes applied on top of a base palette to produce a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteOverrides {
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ThemeKind>,
    #[serde(default, rename = "uiTheme", skip_serializing_if = "Option::is_none")]
    pub ui_theme: Option<UiTheme>,
    /// Role name (camelCase) to replacement color.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

/// The shipped palettes, in the order their variants are generated.
pub fn builtin_palettes() -> Vec<Palette> {
    vec![dark(), pastel(), light()]
}

impl Palette {
    /// Returns a new palette with the given roles replaced; `self` is left untouched.
    ///
    /// A kind change without an explicit `ui_theme` also moves the palette onto that
    /// kind's default base theme.
    pub fn derive(&self, overrides: &PaletteOverrides) -> Result<Palette, ThemeError> {
        let mut roles = self.role_map()?;
        for (role, color) in &overrides.colors {
            if IDENTITY_KEYS.contains(&role.as_str()) || !roles.contains_key(role) {
                return Err(ThemeError::UnknownRole {
                    palette: overrides.name.clone(),
                    role: role.clone(),
                });
            }
            if !is_hex_color(color) {
                return Err(ThemeError::InvalidColor {
                    palette: overrides.name.clone(),
                    role: role.clone(),
                    value: color.clone(),
                });
            }
            roles.insert(role.clone(), Value::String(color.clone()));
        }

        let mut derived: Palette = serde_json::from_value(Value::Object(roles))?;
        derived.name = overrides.name.clone();
        if let Some(kind) = overrides.kind {
            if kind != derived.kind {
                derived.ui_theme = kind.default_ui_theme();
            }
            derived.kind = kind;
        }
        if let Some(ui_theme) = overrides.ui_theme {
            derived.ui_theme = ui_theme;
        }

        log::debug!(
            "Derived palette {:?} from {:?} ({} roles overridden)",
            derived.name,
            self.name,
            overrides.colors.len()
        );
        Ok(derived)
    }

    /// Checks that the palette can be emitted: a non-blank name usable as a file name and
    /// hex colors in every role.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.name.trim().is_empty() {
            return Err(ThemeError::EmptyName);
        }
        if self.name.contains(&['/', '\\', '\0'][..]) {
            return Err(ThemeError::UnsafeName(self.name.clone()));
        }
        for (role, value) in self.role_map()? {
            if IDENTITY_KEYS.contains(&role.as_str()) {
                continue;
            }
            let color = value.as_str().unwrap_or_default();
            if !is_hex_color(color) {
                return Err(ThemeError::InvalidColor {
                    palette: self.name.clone(),
                    role,
                    value: color.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The palette as a flat camelCase key/value map, identity keys included.
    fn role_map(&self) -> Result<Map<String, Value>, ThemeError> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }
}

/// `#` followed by 3, 4, 6 or 8 hex digits.
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(name: &str, colors: &[(&str, &str)]) -> PaletteOverrides {
        PaletteOverrides {
            name: name.to_string(),
            colors: colors
                .iter()
                .map(|(role, color)| (role.to_string(), color.to_string()))
                .collect(),
            ..PaletteOverrides::default()
        }
    }

    #[test]
    fn builtin_palettes_are_valid_and_ordered() {
        let palettes = builtin_palettes();
        let names: Vec<&str> = palettes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["digitaliss", "digitaliss Pastel", "digitaliss Light"]);
        for palette in &palettes {
            palette.validate().unwrap();
        }
    }

    #[test]
    fn pastel_inherits_untouched_roles_from_dark() {
        let (dark, pastel) = (dark(), pastel());
        assert_eq!(pastel.kind, ThemeKind::Dark);
        assert_eq!(pastel.ui_theme, UiTheme::VsDark);
        assert_eq!(pastel.ansi_red, dark.ansi_red);
        assert_eq!(pastel.white, dark.white);
        assert_ne!(pastel.cyan, dark.cyan);
        assert_eq!(pastel.selection_bg, "#1a3050");
    }

    #[test]
    fn light_is_a_light_theme() {
        let light = light();
        assert_eq!(light.kind, ThemeKind::Light);
        assert_eq!(light.ui_theme, UiTheme::Vs);
        assert_eq!(light.white, "#000000");
    }

    #[test]
    fn derive_replaces_only_named_roles() {
        let base = dark();
        let derived = base
            .derive(&overrides("digitaliss Midnight", &[("editorBg", "#000000")]))
            .unwrap();

        assert_eq!(derived.name, "digitaliss Midnight");
        assert_eq!(derived.editor_bg, "#000000");
        assert_eq!(derived.pink, base.pink);
        assert_eq!(derived.kind, base.kind);
        assert_eq!(base, dark(), "base palette must not change");
    }

    #[test]
    fn derive_rejects_unknown_roles() {
        let error = dark()
            .derive(&overrides("broken", &[("editorBackground", "#000000")]))
            .unwrap_err();
        assert!(matches!(error, ThemeError::UnknownRole { ref role, .. } if role == "editorBackground"));
    }

    #[test]
    fn derive_rejects_identity_keys_as_roles() {
        let error = dark()
            .derive(&overrides("broken", &[("name", "#000000")]))
            .unwrap_err();
        assert!(matches!(error, ThemeError::UnknownRole { .. }));
    }

    #[test]
    fn derive_rejects_non_hex_colors() {
        let error = dark()
            .derive(&overrides("broken", &[("pink", "hotpink")]))
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "role pink in palette broken is not a hex color: \"hotpink\""
        );
    }

    #[test]
    fn changing_kind_moves_ui_theme_unless_given() {
        let mut light_overrides = overrides("paper", &[]);
        light_overrides.kind = Some(ThemeKind::Light);
        let derived = dark().derive(&light_overrides).unwrap();
        assert_eq!(derived.ui_theme, UiTheme::Vs);

        light_overrides.ui_theme = Some(UiTheme::HcLight);
        let derived = dark().derive(&light_overrides).unwrap();
        assert_eq!(derived.ui_theme, UiTheme::HcLight);
    }

    #[test]
    fn validate_reports_the_broken_role() {
        let mut palette = pastel();
        palette.git_added = "#12345".into();
        let error = palette.validate().unwrap_err();
        assert!(matches!(error, ThemeError::InvalidColor { ref role, .. } if role == "gitAdded"));
    }

    #[test]
    fn validate_rejects_names_with_path_separators() {
        for name in ["../escaped", "a/b", "a\\b"] {
            let mut palette = dark();
            palette.name = name.to_string();
            assert!(
                matches!(palette.validate(), Err(ThemeError::UnsafeName(ref n)) if n == name),
                "{name}"
            );
        }

        let mut palette = dark();
        palette.name = "..".to_string();
        palette.validate().unwrap();
    }

    #[test]
    fn validate_rejects_blank_names() {
        let mut palette = dark();
        palette.name = "   ".into();
        assert!(matches!(palette.validate(), Err(ThemeError::EmptyName)));
    }

    #[test]
    fn hex_colors_allow_short_and_alpha_forms() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#ffff"));
        assert!(is_hex_color("#FFFFFF25"));
        assert!(!is_hex_color("ffffff"));
        assert!(!is_hex_color("#fffff"));
        assert!(!is_hex_color("#gggggg"));
    }

    #[test]
    fn overrides_parse_from_toml() {
        let parsed: PaletteOverrides = toml::from_str(
            r##"
name = "digitaliss Dusk"
type = "light"
uiTheme = "hc-light"

[colors]
pink = "#ff00aa"
"##,
        )
        .unwrap();

        assert_eq!(parsed.kind, Some(ThemeKind::Light));
        assert_eq!(parsed.ui_theme, Some(UiTheme::HcLight));
        assert_eq!(parsed.colors["pink"], "#ff00aa");
    }
}
