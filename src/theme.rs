mod document;
mod semantic;
mod token_colors;
mod workbench;

pub use document::{FontStyle, Scope, ThemeDocument, TokenColorRule, TokenStyle};

use crate::palette::Palette;

/// Suffix appended to the display name of italic variants.
const ITALIC_SUFFIX: &str = " Italic";

/// Builds the full theme document for one palette and italic setting.
///
/// Pure: the same inputs always produce an identical document.
pub fn assemble(palette: &Palette, italic: bool) -> ThemeDocument {
    let italics = Italics::new(italic);
    let name = if italic {
        format!("{}{ITALIC_SUFFIX}", palette.name)
    } else {
        palette.name.clone()
    };

    ThemeDocument {
        name,
        kind: palette.kind,
        semantic_highlighting: true,
        semantic_token_colors: semantic::semantic_token_colors(palette, italics),
        token_colors: token_colors::token_colors(palette, italics),
        colors: workbench::workbench_colors(palette),
    }
}

/// The one switch that differs between a variant and its italic twin.
///
/// Only the styles built through these helpers follow the switch; every other
/// rule has a fixed font style.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Italics {
    enabled: bool,
}

impl Italics {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub(crate) fn style(self, color: &str) -> TokenStyle {
        let style = TokenStyle::foreground(color);
        if self.enabled {
            style.italic()
        } else {
            style
        }
    }

    /// Keyword-like rules.
    pub(crate) fn keyword(self, color: &str) -> TokenStyle {
        self.style(color)
    }

    /// Storage-like rules (`storage`, `storage.type.*`, modifiers).
    pub(crate) fn storage(self, color: &str) -> TokenStyle {
        self.style(color)
    }
}

fn fg(color: &str) -> TokenStyle {
    TokenStyle::foreground(color)
}

fn font(style: FontStyle) -> TokenStyle {
    TokenStyle::font(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{builtin_palettes, dark, light};

    fn keyword_rule(document: &ThemeDocument) -> &TokenColorRule {
        document
            .token_colors
            .iter()
            .find(|rule| rule.scope == Scope::from("keyword"))
            .unwrap()
    }

    fn golden(name: &str) -> String {
        let path = format!("{}/testdata/{name}", env!("CARGO_MANIFEST_DIR"));
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn assemble_is_deterministic() {
        for palette in builtin_palettes() {
            for italic in [false, true] {
                assert_eq!(assemble(&palette, italic), assemble(&palette, italic));
            }
        }
    }

    #[test]
    fn italic_variant_is_named_after_the_palette() {
        let palette = dark();
        assert_eq!(assemble(&palette, false).name, "digitaliss");
        assert_eq!(assemble(&palette, true).name, "digitaliss Italic");
        assert!(assemble(&palette, true).semantic_highlighting);
    }

    #[test]
    fn italic_switch_only_touches_font_styles() {
        for palette in builtin_palettes() {
            let plain = assemble(&palette, false);
            let italic = assemble(&palette, true);

            assert_eq!(plain.token_colors.len(), italic.token_colors.len());
            for (a, b) in plain.token_colors.iter().zip(&italic.token_colors) {
                assert_eq!(a.name, b.name);
                assert_eq!(a.scope, b.scope);
                assert_eq!(a.settings.foreground, b.settings.foreground);
            }
            assert_eq!(plain.colors, italic.colors);
        }
    }

    #[test]
    fn keyword_rule_without_italics() {
        let document = assemble(&dark(), false);
        let settings = &keyword_rule(&document).settings;
        assert_eq!(settings.foreground.as_deref(), Some("#ff0453"));
        assert_eq!(settings.font_style, None);

        let json = serde_json::to_value(settings).unwrap();
        assert!(json.get("fontStyle").is_none());
    }

    #[test]
    fn keyword_rule_with_italics() {
        let document = assemble(&dark(), true);
        let settings = &keyword_rule(&document).settings;
        assert_eq!(settings.foreground.as_deref(), Some("#ff0453"));
        assert_eq!(settings.font_style, Some(FontStyle::Italic));
    }

    #[test]
    fn light_document_uses_themed_foreground() {
        let palette = light();
        let document = assemble(&palette, false);
        assert_eq!(serde_json::to_value(document.kind).unwrap(), "light");
        assert_eq!(document.colors.get("activityBar.foreground"), Some(&palette.ui_fg));
    }

    #[test]
    fn dark_inactive_selection_literal_survives_assembly() {
        let document = assemble(&dark(), false);
        assert_eq!(
            document
                .colors
                .get("editor.inactiveSelectionBackground")
                .map(String::as_str),
            Some("#15284583")
        );
    }

    #[test]
    fn json_round_trip_is_lossless() {
        for palette in builtin_palettes() {
            let document = assemble(&palette, true);
            let json = serde_json::to_string_pretty(&document).unwrap();
            let parsed: ThemeDocument = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, document);
        }
    }

    #[test]
    fn matches_golden_dark_italic_theme() {
        let document = serde_json::to_string_pretty(&assemble(&dark(), true)).unwrap();
        assert_eq!(document, golden("digitaliss-italic-color-theme.json"));
    }

    #[test]
    fn matches_golden_light_theme() {
        let document = serde_json::to_string_pretty(&assemble(&light(), false)).unwrap();
        assert_eq!(document, golden("digitaliss-light-color-theme.json"));
    }

    #[test]
    fn comment_rule_writes_font_before_color() {
        let json = serde_json::to_string(&assemble(&dark(), false).token_colors[0]).unwrap();
        assert!(json.ends_with(r##""settings":{"fontStyle":"italic","foreground":"#6c6d998d"}}"##));
    }
}
