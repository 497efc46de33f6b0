use crate::palette::Palette;
use crate::theme::{FontStyle, TokenColorRule};

use super::{fg, font, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        rule("Python magic variable", "support.variable.magic.python", fg(&p.fg)),
        rule(
            "Python punctuation",
            "punctuation.separator.period.python,punctuation.separator.element.python,punctuation.parenthesis.begin.python,punctuation.parenthesis.end.python",
            fg(&p.fg_muted),
        ),
        rule(
            "Python self",
            "variable.parameter.function.language.special.self.python",
            fg(&p.lime),
        ),
        rule("Python parameter", "variable.parameter.function.language.python", fg(&p.purple)),
        rule("Python type", "support.type.python", fg(&p.cyan)),
        rule("Python logical", "keyword.operator.logical.python", italics.keyword(&p.pink)),
        rule("Python parameter function", "variable.parameter.function.python", fg(&p.purple)),
        rule(
            "Python block",
            "punctuation.definition.arguments.begin.python,punctuation.definition.arguments.end.python,punctuation.separator.arguments.python,punctuation.definition.list.begin.python,punctuation.definition.list.end.python",
            fg(&p.fg_muted),
        ),
        rule("Python function-call", "meta.function-call.generic.python", fg(&p.pink)),
        rule(
            "Python placeholder",
            "constant.character.format.placeholder.other.python",
            fg(&p.purple),
        ),
        rule("Python decorator @", "meta.function.decorator.python", fg(&p.pink)),
        rule(
            "Python decorator support",
            "support.token.decorator.python,meta.function.decorator.identifier.python",
            fg(&p.cyan),
        ),
        rule(
            "Python keyword control",
            "keyword.control.import.python,keyword.control.flow.python",
            font(FontStyle::Italic),
        ),
        rule(
            "Python f-string braces",
            "punctuation.definition.f-string.begin.python,punctuation.definition.f-string.end.python",
            fg(&p.yellow),
        ),
        rule(
            "Python type hint",
            "support.type.python,meta.function.parameters.python",
            fg(&p.cyan),
        ),
    ]
}
