use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::palette::ThemeKind;

/// A complete editor color theme, serialized as-is into a `*-color-theme.json` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    pub semantic_highlighting: bool,
    pub semantic_token_colors: IndexMap<String, TokenStyle>,
    pub token_colors: Vec<TokenColorRule>,
    pub colors: IndexMap<String, String>,
}

/// A TextMate scope selector rule. Later rules win over earlier ones in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenColorRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub scope: Scope,
    pub settings: TokenStyle,
}

/// Either a single (possibly comma-separated) selector string or a list of selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scope {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for Scope {
    fn from(selector: &str) -> Self {
        Self::One(selector.to_string())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Scope {
    fn from(selectors: [&'a str; N]) -> Self {
        Self::Many(selectors.iter().map(|s| s.to_string()).collect())
    }
}

/// Foreground and font of a token.
///
/// Keys serialize in the order they were set, so a style built from a font and then given a
/// color writes `fontStyle` first. Equality ignores that order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStyle {
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub font_style: Option<FontStyle>,
    #[serde(skip)]
    font_first: bool,
}

impl TokenStyle {
    pub fn foreground(color: &str) -> Self {
        Self {
            foreground: Some(color.to_string()),
            font_style: None,
            font_first: false,
        }
    }

    /// A style that only changes the font, keeping whatever color the token already has.
    pub fn font(style: FontStyle) -> Self {
        Self {
            foreground: None,
            font_style: Some(style),
            font_first: false,
        }
    }

    pub fn with_foreground(self, color: &str) -> Self {
        Self {
            foreground: Some(color.to_string()),
            font_first: self.foreground.is_none() && self.font_style.is_some(),
            ..self
        }
    }

    pub fn with_font(self, style: FontStyle) -> Self {
        Self {
            font_style: Some(style),
            ..self
        }
    }

    pub fn italic(self) -> Self {
        self.with_font(FontStyle::Italic)
    }

    pub fn bold(self) -> Self {
        self.with_font(FontStyle::Bold)
    }

    pub fn bold_italic(self) -> Self {
        self.with_font(FontStyle::BoldItalic)
    }

    pub fn underline(self) -> Self {
        self.with_font(FontStyle::Underline)
    }
}

impl PartialEq for TokenStyle {
    fn eq(&self, other: &Self) -> bool {
        self.foreground == other.foreground && self.font_style == other.font_style
    }
}

impl Serialize for TokenStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = usize::from(self.foreground.is_some()) + usize::from(self.font_style.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if self.font_first {
            if let Some(font_style) = &self.font_style {
                map.serialize_entry("fontStyle", font_style)?;
            }
        }
        if let Some(foreground) = &self.foreground {
            map.serialize_entry("foreground", foreground)?;
        }
        if !self.font_first {
            if let Some(font_style) = &self.font_style {
                map.serialize_entry("fontStyle", font_style)?;
            }
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontStyle {
    #[serde(rename = "italic")]
    Italic,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "bold italic")]
    BoldItalic,
    #[serde(rename = "underline")]
    Underline,
    #[serde(rename = "normal")]
    Normal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_without_font_omits_the_key() {
        let json = serde_json::to_value(TokenStyle::foreground("#ff0453")).unwrap();
        assert_eq!(json, serde_json::json!({ "foreground": "#ff0453" }));
    }

    #[test]
    fn font_styles_use_editor_spelling() {
        let style = TokenStyle::foreground("#ffffff").bold_italic();
        let json = serde_json::to_value(style).unwrap();
        assert_eq!(json["fontStyle"], "bold italic");
        assert_eq!(
            serde_json::to_value(TokenStyle::font(FontStyle::Normal)).unwrap(),
            serde_json::json!({ "fontStyle": "normal" })
        );
    }

    #[test]
    fn scope_accepts_string_or_list() {
        let one: Scope = serde_json::from_str(r#""keyword.control""#).unwrap();
        let many: Scope = serde_json::from_str(r#"["a.b", "c.d"]"#).unwrap();
        assert_eq!(one, Scope::from("keyword.control"));
        assert_eq!(many, Scope::from(["a.b", "c.d"]));
    }

    #[test]
    fn color_added_after_font_is_written_second() {
        let style = TokenStyle::font(FontStyle::Italic).with_foreground("#6c6d998d");
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r##"{"fontStyle":"italic","foreground":"#6c6d998d"}"##);
        assert_eq!(style, TokenStyle::foreground("#6c6d998d").italic());
    }

    #[test]
    fn font_added_after_color_is_written_second() {
        let style = TokenStyle::foreground("#ff0453").bold();
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r##"{"foreground":"#ff0453","fontStyle":"bold"}"##);
    }
}
