use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        rule(
            "CSS/SCSS/LESS property values",
            "support.constant.property-value.scss,support.constant.property-value.css",
            fg(&p.purple),
        ),
        rule(
            "CSS/SCSS/LESS operators",
            "keyword.operator.css,keyword.operator.scss,keyword.operator.less",
            fg(&p.cyan),
        ),
        rule(
            "CSS color names",
            "support.constant.color.w3c-standard-color-name.css,support.constant.color.w3c-standard-color-name.scss",
            fg(&p.purple),
        ),
        rule("CSS comma", "punctuation.separator.list.comma.css", fg(&p.fg_muted)),
        rule("CSS vendored property", "support.type.vendored.property-name.css", fg(&p.cyan)),
        rule(
            "CSS pseudo-elements/classes",
            "entity.other.attribute-name.pseudo-element,entity.other.attribute-name.pseudo-class",
            fg(&p.cyan),
        ),
        rule("SCSS selector", "selector.sass", fg(&p.fg)),
        rule("CSS rgb-value", "rgb-value", fg(&p.cyan)),
        rule("CSS inline color decoration", "inline-color-decoration rgb-value", fg(&p.purple)),
        rule("LESS rgb value", "less rgb-value", fg(&p.purple)),
        rule(
            "CSS variable",
            "variable.css,variable.scss,variable.less,variable.argument.css",
            fg(&p.fg),
        ),
        rule(
            "CSS property name",
            "support.type.property-name.css,support.type.property-name.scss,support.type.property-name.less",
            fg(&p.fg_muted),
        ),
        rule(
            "CSS media query",
            "support.type.property-name.media.css,support.type.property-name.media.scss",
            fg(&p.cyan),
        ),
        rule(
            "CSS at-rule",
            "keyword.control.at-rule.css,keyword.control.at-rule.scss",
            italics.keyword(&p.pink),
        ),
    ]
}
