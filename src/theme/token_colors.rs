//! TextMate scope rules, grouped by language.
//!
//! Groups are concatenated in a fixed order and never deduplicated: when two rules
//! match the same token the editor applies the later one, so moving a group changes
//! the rendered colors.

mod c_family;
mod css;
mod data;
mod generic;
mod go;
mod java;
mod javascript;
mod kotlin;
mod markdown;
mod misc;
mod php;
mod python;
mod ruby;
mod rust_lang;
mod shell;

use crate::palette::Palette;

use super::{fg, font, Italics, Scope, TokenColorRule, TokenStyle};

type RuleGroup = fn(&Palette, Italics) -> Vec<TokenColorRule>;

const GROUPS: [RuleGroup; 15] = [
    generic::rules,
    markdown::rules,
    javascript::rules,
    css::rules,
    php::rules,
    python::rules,
    rust_lang::rules,
    go::rules,
    ruby::rules,
    kotlin::rules,
    shell::rules,
    data::rules,
    java::rules,
    c_family::rules,
    misc::rules,
];

pub(super) fn token_colors(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    GROUPS.iter().flat_map(|group| group(p, italics)).collect()
}

fn rule(name: &str, scope: impl Into<Scope>, settings: TokenStyle) -> TokenColorRule {
    TokenColorRule {
        name: Some(name.to_string()),
        scope: scope.into(),
        settings,
    }
}

fn unnamed(scope: impl Into<Scope>, settings: TokenStyle) -> TokenColorRule {
    TokenColorRule {
        name: None,
        scope: scope.into(),
        settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{dark, light, pastel};
    use crate::theme::FontStyle;

    fn scope_text(rule: &TokenColorRule) -> String {
        match &rule.scope {
            Scope::One(selector) => selector.clone(),
            Scope::Many(selectors) => selectors.join(","),
        }
    }

    #[test]
    fn every_group_contributes_rules() {
        let palette = dark();
        for group in GROUPS {
            assert!(!group(&palette, Italics::new(false)).is_empty());
        }
    }

    #[test]
    fn full_table_has_fixed_length() {
        assert_eq!(token_colors(&dark(), Italics::new(false)).len(), 366);
        assert_eq!(token_colors(&light(), Italics::new(true)).len(), 366);
    }

    #[test]
    fn exactly_the_helper_rules_follow_the_italic_switch() {
        let palette = pastel();
        let plain = token_colors(&palette, Italics::new(false));
        let italic = token_colors(&palette, Italics::new(true));

        let changed: Vec<&TokenColorRule> = plain
            .iter()
            .zip(&italic)
            .filter(|(a, b)| a != b)
            .map(|(a, _)| a)
            .collect();
        assert_eq!(changed.len(), 32);
        for rule in changed {
            assert_eq!(rule.settings.font_style, None, "{}", scope_text(rule));
        }
    }

    #[test]
    fn rules_without_color_only_set_the_font() {
        let rules = token_colors(&dark(), Italics::new(false));
        let block_comments = rules
            .iter()
            .find(|r| r.name.as_deref() == Some("Block comments"))
            .unwrap();
        assert_eq!(block_comments.settings, TokenStyle::font(FontStyle::Italic));
    }

    #[test]
    fn later_rules_keep_their_position() {
        let rules = token_colors(&dark(), Italics::new(false));
        let first = rules.first().unwrap();
        let last = rules.last().unwrap();
        assert_eq!(first.name.as_deref(), Some("Comments"));
        assert_eq!(last.name.as_deref(), Some("Comment Markup Link"));
        assert_eq!(scope_text(last), "comment markup.link");
    }

    #[test]
    fn unnamed_rules_serialize_without_name() {
        let rules = token_colors(&dark(), Italics::new(false));
        let unnamed: Vec<&TokenColorRule> = rules.iter().filter(|r| r.name.is_none()).collect();
        assert_eq!(unnamed.len(), 4);
        let json = serde_json::to_value(unnamed[0]).unwrap();
        assert!(json.get("name").is_none());
    }
}
