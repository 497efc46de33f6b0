use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        rule("Go assignment operator", "keyword.operator.assignment.go", fg(&p.lime)),
        rule(
            "Go arithmetic/address operator",
            "keyword.operator.arithmetic.go,keyword.operator.address.go",
            fg(&p.pink),
        ),
        rule("Go package name", "entity.name.package.go", fg(&p.lime)),
        rule("Go function", "entity.name.function.go", fg(&p.pink)),
        rule("Go type", "entity.name.type.go", fg(&p.lime)),
        rule("Go storage type", "storage.type.go", italics.storage(&p.pink)),
        rule("Go keyword control", "keyword.control.go", italics.keyword(&p.pink)),
        rule("Go keyword function", "keyword.function.go", italics.keyword(&p.pink)),
        rule("Go variable", "variable.other.go", fg(&p.fg)),
        rule("Go constant", "constant.other.go", fg(&p.purple)),
        rule("Go builtin function", "support.function.builtin.go", fg(&p.cyan)),
        rule("Go import", "entity.name.import.go", fg(&p.yellow)),
        rule("Go keyword type", "keyword.type.go", fg(&p.lime)),
        rule("Go method receiver", "variable.other.receiver.go", fg(&p.fg)),
    ]
}
