//! JavaScript, TypeScript, JSX/TSX and Vue templates.

use crate::palette::Palette;
use crate::theme::{FontStyle, TokenColorRule};

use super::{fg, font, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        // JavaScript / TypeScript
        rule("js/ts import keyword", "keyword.operator.expression.import", fg(&p.pink)),
        rule(
            "js/ts module",
            "support.module.node,support.type.object.module,support.module.node",
            fg(&p.lime),
        ),
        rule("js/ts module type", "entity.name.type.module", fg(&p.lime)),
        rule("Math constant", "support.constant.math", fg(&p.lime)),
        rule("Math property", "support.constant.property.math", fg(&p.purple)),
        rule(
            "js variable readwrite",
            "variable.other.readwrite,meta.object-literal.key,support.variable.property,support.variable.object.process,support.variable.object.node",
            fg(&p.fg),
        ),
        rule("js/ts json", "support.constant.json", fg(&p.purple)),
        rule(
            "js/ts keywords",
            [
                "keyword.operator.expression.instanceof",
                "keyword.operator.new",
                "keyword.operator.ternary",
                "keyword.operator.optional",
                "keyword.operator.expression.keyof",
            ],
            italics.keyword(&p.pink),
        ),
        rule("js/ts console", "support.type.object.console", fg(&p.fg)),
        rule("js/ts process property", "support.variable.property.process", fg(&p.purple)),
        rule(
            "js/ts expression operators",
            "keyword.operator.expression.delete,keyword.operator.expression.in,keyword.operator.expression.of,keyword.operator.expression.instanceof,keyword.operator.new,keyword.operator.expression.typeof,keyword.operator.expression.void",
            italics.keyword(&p.pink),
        ),
        rule(
            "Compound Assignment js/ts",
            "keyword.operator.assignment.compound.js,keyword.operator.assignment.compound.ts",
            fg(&p.cyan),
        ),
        rule("Import module", "keyword.operator.module", fg(&p.pink)),
        rule("js Flowtype", "support.type.type.flowtype", fg(&p.pink)),
        rule("js Flow primitive", "support.type.primitive", fg(&p.lime)),
        rule("js class prop", "meta.property.object", fg(&p.fg)),
        rule("js func parameter", "variable.parameter.function.js", fg(&p.fg)),
        rule("js template literals begin", "keyword.other.template.begin", fg(&p.yellow)),
        rule("js template literals end", "keyword.other.template.end", fg(&p.yellow)),
        rule(
            "js template literals variable braces begin",
            "keyword.other.substitution.begin",
            fg(&p.yellow),
        ),
        rule(
            "js template literals variable braces end",
            "keyword.other.substitution.end",
            fg(&p.yellow),
        ),
        rule("js/ts parameter brace", "function.parameter", fg(&p.fg_muted)),
        rule("js/ts brace function", "function.brace", fg(&p.fg_muted)),
        rule("js dom", "support.type.object.dom", fg(&p.cyan)),
        rule("js dom variable", "support.variable.dom,support.variable.property.dom", fg(&p.fg)),
        rule(
            "ts primitive/builtin",
            "support.type.primitive.ts,support.type.builtin.ts,support.type.primitive.tsx,support.type.builtin.tsx",
            fg(&p.lime),
        ),
        rule(
            "js/ts italic",
            "entity.other.attribute-name.js,entity.other.attribute-name.ts,entity.other.attribute-name.jsx,entity.other.attribute-name.tsx,variable.parameter,variable.language.super",
            font(FontStyle::Italic),
        ),
        rule("template literal punctuation", "punctuation.quasi.element", fg(&p.pink)),

        // JSX / TSX
        rule(
            "JSX component tags",
            "support.class.component.js,support.class.component.tsx,support.class.component.jsx",
            fg(&p.lime),
        ),
        rule(
            "JSX tag names",
            "entity.name.tag.js,entity.name.tag.tsx,entity.name.tag.jsx,entity.name.tag.ts",
            fg(&p.fg),
        ),
        rule(
            "JSX expression braces",
            "punctuation.section.embedded.begin.jsx,punctuation.section.embedded.end.jsx,punctuation.section.embedded.begin.tsx,punctuation.section.embedded.end.tsx",
            fg(&p.pink),
        ),
        rule(
            "JSX spread operator",
            "keyword.operator.spread.jsx,keyword.operator.spread.tsx",
            fg(&p.pink),
        ),
        rule(
            "JSX string attribute values",
            "string.quoted.double.jsx,string.quoted.single.jsx,string.quoted.double.tsx,string.quoted.single.tsx",
            fg(&p.yellow),
        ),

        // Vue
        rule(
            "Vue directives",
            "entity.other.attribute-name.directive.vue,punctuation.separator.key-value.html.vue",
            fg(&p.pink),
        ),
        rule(
            "Vue directive shorthand",
            "entity.other.attribute-name.shorthand.vue,entity.other.attribute-name.event.shorthand.vue",
            fg(&p.pink),
        ),
        rule("Vue component tags", "entity.name.tag.other.html.vue", fg(&p.lime)),
        rule("Vue interpolation braces", "punctuation.definition.block.tag.vue", fg(&p.pink)),
        rule("Vue template expression", "expression.embedded.vue", fg(&p.fg)),
    ]
}
