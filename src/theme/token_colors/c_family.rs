use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        // C / C++
        rule("C++ function", "meta.function.c,meta.function.cpp", fg(&p.fg)),
        rule(
            "C++ block",
            "punctuation.section.block.begin.bracket.curly.cpp,punctuation.section.block.end.bracket.curly.cpp,punctuation.terminator.statement.c,punctuation.section.block.begin.bracket.curly.c,punctuation.section.block.end.bracket.curly.c,punctuation.section.parens.begin.bracket.round.c,punctuation.section.parens.end.bracket.round.c,punctuation.section.parameters.begin.bracket.round.c,punctuation.section.parameters.end.bracket.round.c",
            fg(&p.fg_muted),
        ),
        rule(
            "C operator assignment",
            "keyword.operator.assignment.c,keyword.operator.comparison.c,keyword.operator.c,keyword.operator.increment.c,keyword.operator.decrement.c,keyword.operator.bitwise.shift.c,keyword.operator.assignment.cpp,keyword.operator.comparison.cpp,keyword.operator.cpp,keyword.operator.increment.cpp,keyword.operator.decrement.cpp,keyword.operator.bitwise.shift.cpp",
            fg(&p.pink),
        ),
        rule(
            "C punctuation separator",
            "punctuation.separator.c,punctuation.separator.cpp",
            fg(&p.pink),
        ),
        rule(
            "C type posix-reserved",
            "support.type.posix-reserved.c,support.type.posix-reserved.cpp",
            fg(&p.cyan),
        ),
        rule(
            "C sizeof",
            "keyword.operator.sizeof.c,keyword.operator.sizeof.cpp",
            italics.keyword(&p.pink),
        ),
        rule("C variables", "variable.c", fg(&p.fg_muted)),

        // C#
        rule("C# storage type", "storage.type.cs", fg(&p.lime)),
        rule("C# local variable", "entity.name.variable.local.cs", fg(&p.fg)),
        rule(
            "C++/C# scope resolution",
            [
                "entity.name.label.cs",
                "entity.name.scope-resolution.function.call",
                "entity.name.scope-resolution.function.definition",
            ],
            fg(&p.lime),
        ),
    ]
}
