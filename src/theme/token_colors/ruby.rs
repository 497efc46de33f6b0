use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        rule("Ruby parameter", "function.parameter.ruby, function.parameter.cs", fg(&p.fg_muted)),
        rule("Ruby constant symbol", "constant.language.symbol.ruby", fg(&p.cyan)),
        rule(
            "Ruby keyword control",
            "keyword.control.ruby,keyword.control.class.ruby,keyword.control.module.ruby,keyword.control.def.ruby",
            italics.keyword(&p.pink),
        ),
        rule("Ruby class", "entity.name.type.class.ruby", fg(&p.lime)),
        rule("Ruby module", "entity.name.type.module.ruby", fg(&p.lime)),
        rule("Ruby function", "entity.name.function.ruby", fg(&p.pink)),
        rule("Ruby constant language", "constant.language.ruby", fg(&p.purple)),
        rule("Ruby instance variable", "variable.other.readwrite.instance.ruby", fg(&p.fg)),
        rule("Ruby class variable", "variable.other.readwrite.class.ruby", fg(&p.fg)),
        rule("Ruby support function", "support.function.kernel.ruby", fg(&p.cyan)),
        rule("Ruby constant other", "variable.other.constant.ruby", fg(&p.purple)),
        rule("Ruby string interpolation", "string.interpolated.ruby", fg(&p.yellow)),
        rule("Ruby embedded punctuation", "punctuation.section.embedded.ruby", fg(&p.pink)),
        rule("Ruby symbol", "constant.other.symbol.ruby", fg(&p.cyan)),
        rule(
            "Ruby heredoc",
            "string.unquoted.heredoc.ruby,punctuation.definition.string.begin.ruby,punctuation.definition.string.end.ruby",
            fg(&p.yellow),
        ),
        rule("Ruby block variable", "variable.other.block.ruby", fg(&p.fg)),
    ]
}
