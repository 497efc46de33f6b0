use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        rule("Kotlin keyword control", "keyword.control.kotlin", italics.keyword(&p.pink)),
        rule("Kotlin storage modifier", "storage.modifier.kotlin", italics.storage(&p.pink)),
        rule("Kotlin function", "entity.name.function.kotlin", fg(&p.pink)),
        rule("Kotlin class", "entity.name.type.class.kotlin", fg(&p.lime)),
        rule("Kotlin storage type", "storage.type.kotlin", fg(&p.lime)),
        rule("Kotlin parameter", "variable.parameter.kotlin", fg(&p.fg_muted)),
        rule("Kotlin constant", "constant.other.kotlin", fg(&p.purple)),
        rule("Kotlin support function", "support.function.kotlin", fg(&p.cyan)),
        rule(
            "Kotlin string template",
            "string.template.kotlin,punctuation.definition.template.kotlin",
            fg(&p.yellow),
        ),
        rule("Kotlin package", "entity.name.package.kotlin", fg(&p.lime)),
        rule(
            "Kotlin annotation",
            "entity.name.type.annotation.kotlin,storage.type.annotation.kotlin",
            fg(&p.cyan),
        ),
        rule(
            "Kotlin null safety",
            "keyword.operator.elvis.kotlin,keyword.operator.null-check.kotlin",
            fg(&p.pink),
        ),
    ]
}
