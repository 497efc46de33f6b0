use indexmap::IndexMap;

use crate::palette::Palette;

use super::{fg, Italics, TokenStyle};

/// Colors for tokens classified by a language server rather than a TextMate grammar.
pub(super) fn semantic_token_colors(
    p: &Palette,
    italics: Italics,
) -> IndexMap<String, TokenStyle> {
    [
        ("enumMember", fg(&p.cyan)),
        ("variable.constant", fg(&p.purple)),
        ("variable.defaultLibrary", fg(&p.lime)),
        ("function", fg(&p.pink)),
        ("method", fg(&p.pink)),
        ("function.declaration", fg(&p.pink)),
        ("method.declaration", fg(&p.pink)),
        ("function.defaultLibrary", fg(&p.cyan)),
        ("property", fg(&p.fg)),
        ("property.readonly", fg(&p.purple)),
        ("parameter", fg(&p.fg_muted)),
        ("variable", fg(&p.fg)),
        ("variable.readonly", fg(&p.purple)),
        ("variable.local", fg(&p.fg)),
        ("type", italics.style(&p.lime)),
        ("interface", italics.style(&p.lime)),
        ("class", fg(&p.lime)),
        ("struct", fg(&p.lime)),
        ("typeParameter", fg(&p.lime).italic()),
        ("enum", fg(&p.cyan)),
        ("namespace", fg(&p.lime)),
        ("macro", fg(&p.pink)),
        ("decorator", fg(&p.cyan)),
        ("string", fg(&p.yellow)),
        ("number", fg(&p.purple)),
        ("regexp", fg(&p.cyan)),
        ("keyword", italics.style(&p.pink)),
        ("comment", fg(&p.comment).italic()),
        ("operator", fg(&p.fg_muted)),
        ("selfKeyword", fg(&p.lime).italic()),
        ("builtinType", fg(&p.cyan)),
        ("type.defaultLibrary", fg(&p.cyan)),
        ("property.declaration", fg(&p.fg)),
        ("event", fg(&p.fg)),
        ("label", fg(&p.fg)),
    ]
    .into_iter()
    .map(|(kind, style)| (kind.to_string(), style))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{dark, light};
    use crate::theme::FontStyle;

    fn font_of(colors: &IndexMap<String, TokenStyle>, kind: &str) -> Option<FontStyle> {
        colors.get(kind).and_then(|style| style.font_style)
    }

    #[test]
    fn always_italic_kinds_ignore_the_switch() {
        for enabled in [false, true] {
            let colors = semantic_token_colors(&dark(), Italics::new(enabled));
            assert_eq!(font_of(&colors, "comment"), Some(FontStyle::Italic));
            assert_eq!(font_of(&colors, "typeParameter"), Some(FontStyle::Italic));
            assert_eq!(font_of(&colors, "selfKeyword"), Some(FontStyle::Italic));
        }
    }

    #[test]
    fn type_interface_and_keyword_follow_the_switch() {
        let plain = semantic_token_colors(&light(), Italics::new(false));
        let italic = semantic_token_colors(&light(), Italics::new(true));
        for kind in ["type", "interface", "keyword"] {
            assert_eq!(font_of(&plain, kind), None, "{kind}");
            assert_eq!(font_of(&italic, kind), Some(FontStyle::Italic), "{kind}");
        }
        assert_eq!(font_of(&italic, "class"), None);
    }

    #[test]
    fn kinds_read_colors_from_the_palette() {
        let palette = dark();
        let colors = semantic_token_colors(&palette, Italics::new(false));
        assert_eq!(colors.len(), 35);
        assert_eq!(
            colors.get("function"),
            Some(&TokenStyle::foreground(&palette.pink))
        );
        assert_eq!(
            colors.get("parameter").and_then(|s| s.foreground.as_deref()),
            Some(palette.fg_muted.as_str())
        );
    }
}
