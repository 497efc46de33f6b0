use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        rule("Rust lifetime", "storage.modifier.lifetime.rust", fg(&p.fg_muted)),
        rule("Rust std function", "support.function.std.rust", fg(&p.pink)),
        rule("Rust lifetime entity", "entity.name.lifetime.rust", fg(&p.lime)),
        rule("Rust language variable", "variable.language.rust", fg(&p.fg)),
        rule("Rust core constant", "support.constant.core.rust", fg(&p.purple)),
        rule("Rust operator misc", "keyword.operator.misc.rust", fg(&p.fg_muted)),
        rule("Rust operator sigil", "keyword.operator.sigil.rust", fg(&p.pink)),
        rule("Rust type", "entity.name.type.rust", fg(&p.lime)),
        rule("Rust function", "entity.name.function.rust", fg(&p.pink)),
        rule("Rust module", "entity.name.module.rust", fg(&p.lime)),
        rule("Rust keyword control", "keyword.control.rust", italics.keyword(&p.pink)),
        rule("Rust storage type", "storage.type.rust", italics.storage(&p.pink)),
        rule("Rust trait", "entity.name.type.trait.rust", fg(&p.lime)),
        rule("Rust constant caps", "constant.other.caps.rust", fg(&p.purple)),
        rule("Rust attribute", "meta.attribute.rust", fg(&p.cyan)),
        rule("Rust macro", "support.macro.rust,entity.name.function.macro.rust", fg(&p.cyan)),
        rule("Rust unsafe", "keyword.other.unsafe.rust", italics.keyword(&p.pink)),
        rule(
            "Rust impl/where",
            "keyword.other.impl.rust,keyword.other.where.rust,keyword.other.fn.rust",
            italics.keyword(&p.pink),
        ),
        rule("Rust type numeric", "entity.name.type.numeric.rust", fg(&p.lime)),
        rule(
            "Rust async/await",
            "keyword.control.async.rust,keyword.control.await.rust",
            italics.keyword(&p.pink),
        ),
    ]
}
