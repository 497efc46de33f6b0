use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        rule(
            "Java type annotations",
            ["storage.type.annotation.java", "storage.type.object.array.java"],
            fg(&p.lime),
        ),
        rule("Java source", "source.java", fg(&p.fg)),
        rule(
            "Java punctuation",
            "punctuation.section.block.begin.java,punctuation.section.block.end.java,punctuation.definition.method-parameters.begin.java,punctuation.definition.method-parameters.end.java,meta.method.identifier.java,punctuation.section.method.begin.java,punctuation.section.method.end.java,punctuation.terminator.java,punctuation.section.class.begin.java,punctuation.section.class.end.java,punctuation.section.inner-class.begin.java,punctuation.section.inner-class.end.java,meta.method-call.java,punctuation.section.class.begin.bracket.curly.java,punctuation.section.class.end.bracket.curly.java,punctuation.section.method.begin.bracket.curly.java,punctuation.section.method.end.bracket.curly.java,punctuation.separator.period.java,punctuation.bracket.angle.java,punctuation.definition.annotation.java,meta.method.body.java",
            fg(&p.fg_muted),
        ),
        rule("Java method", "meta.method.java", fg(&p.pink)),
        rule(
            "Java storage",
            "storage.modifier.import.java,storage.type.java,storage.type.generic.java",
            fg(&p.lime),
        ),
        rule("Java instanceof", "keyword.operator.instanceof.java", italics.keyword(&p.pink)),
        rule("Java variable", "meta.definition.variable.name.java", fg(&p.fg)),
        rule("Java Variables", "token.variable.parameter.java", fg(&p.fg_muted)),
        rule("Java Imports", "import.storage.java", fg(&p.lime)),
        rule("Java Packages keyword", "token.package.keyword", fg(&p.pink)),
        rule("Java Packages", "token.package", fg(&p.fg_muted)),
        rule("Java Storage", "token.storage.type.java", fg(&p.lime)),
    ]
}
