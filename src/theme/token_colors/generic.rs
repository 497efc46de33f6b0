//! Cross-language rules shared by every grammar, plus diff output.

use crate::palette::Palette;
use crate::theme::{FontStyle, TokenColorRule};

use super::{fg, font, rule, unnamed, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        // Comments
        rule(
            "Comments",
            "comment, punctuation.definition.comment",
            font(FontStyle::Italic).with_foreground(&p.comment),
        ),
        rule(
            "Block comments",
            "comment.line.double-slash,comment.block.documentation",
            font(FontStyle::Italic),
        ),

        // Keywords
        rule("Keywords", "keyword", italics.keyword(&p.pink)),
        rule("Keyword Control", "keyword.control", italics.keyword(&p.pink)),
        rule("Storage", "storage", italics.storage(&p.pink)),
        rule("Storage JS TS", "token.storage", italics.storage(&p.pink)),

        // Variables
        rule("Variables", "variable", fg(&p.fg)),
        rule("Language variables", "variable.language", fg(&p.lime).italic()),
        rule("Variable parameter", "variable.parameter.function", fg(&p.fg_muted)),
        rule("Variable other constant", "variable.other.constant", fg(&p.lime)),

        // Functions
        rule(
            "Functions",
            [
                "entity.name.function",
                "meta.require",
                "support.function.any-method",
                "variable.function",
            ],
            fg(&p.pink),
        ),
        rule("Support function", "support.function", fg(&p.cyan)),
        rule("Function call console", "entity.name.function,support.function.console", fg(&p.pink)),

        // Classes / Types
        rule("Classes", "support.class, entity.name.type.class", fg(&p.lime)),
        rule(
            "Class name",
            ["entity.name.class", "variable.other.class.js", "variable.other.class.ts"],
            fg(&p.lime),
        ),
        rule("Type Name", "entity.name.type", fg(&p.lime)),
        rule("Namespaces", "entity.name.namespace", fg(&p.lime)),
        rule("Type namespace", "entity.name.type.namespace", fg(&p.lime)),
        rule("Inherited Class", "entity.other.inherited-class", fg(&p.lime)),
        rule("Class name identifier", "entity.name.class.identifier.namespace.type", fg(&p.lime)),

        // Strings
        rule("Strings", "string", fg(&p.yellow)),
        rule(
            "String punctuation",
            "punctuation.definition.string.begin,punctuation.definition.string.end",
            fg(&p.yellow),
        ),

        // Constants & Numbers
        rule("Constants", "constant", fg(&p.purple)),
        rule("Integers", "constant.numeric", fg(&p.purple)),
        rule("Constant definition", "punctuation.definition.constant", fg(&p.purple)),
        rule("Constant other symbol", "constant.other.symbol", fg(&p.cyan)),

        // Operators
        rule("Operators", "keyword.operator", fg(&p.fg_muted)),
        rule("Operator logical", "keyword.operator.logical", fg(&p.cyan)),
        rule("Operator bitwise", "keyword.operator.bitwise", fg(&p.cyan)),
        rule("Operator channel", "keyword.operator.channel", fg(&p.cyan)),
        rule(
            "Operator arithmetic/comparison",
            "keyword.operator.arithmetic,keyword.operator.comparison,keyword.operator.decrement,keyword.operator.increment,keyword.operator.relational",
            fg(&p.cyan),
        ),
        rule("Compound Assignment Operators", "keyword.operator.assignment.compound", fg(&p.pink)),
        rule("Assignment operator", "keyword.operator.assignment", fg(&p.cyan)),
        rule("Operator delete", "keyword.operator.delete", fg(&p.pink)),

        // Punctuation
        rule("Punctuation separator delimiter", "punctuation.separator.delimiter", fg(&p.fg_muted)),
        rule("Punctuation separator key-value", "punctuation.separator.key-value", fg(&p.fg_muted)),
        rule("Meta tag", "meta.tag", fg(&p.fg_muted)),
        rule("Meta brace square", "meta.brace.square", fg(&p.fg_muted)),
        rule("Block scope", "block.scope.end,block.scope.begin", fg(&p.fg_muted)),

        // Tags & Attributes (HTML)
        rule("Tags", "entity.name.tag", fg(&p.fg)),
        rule("Attributes", "entity.other.attribute-name", fg(&p.purple)),
        rule(
            "Attribute IDs",
            "entity.other.attribute-name.id",
            font(FontStyle::Normal).with_foreground(&p.pink),
        ),
        rule(
            "Attribute class (CSS)",
            "entity.other.attribute-name.class.css",
            font(FontStyle::Normal).with_foreground(&p.purple),
        ),

        // Support types
        rule("Support type property-name", "support.type.property-name", fg(&p.fg_muted)),
        rule("Support constant property-value", "support.constant.property-value", fg(&p.fg_muted)),
        rule("Support constant font-name", "support.constant.font-name", fg(&p.purple)),

        // Methods
        rule("Methods", "keyword.other.special-method", fg(&p.pink)),

        // Control Elements
        rule("Control Elements", "control.elements, keyword.operator.less", fg(&p.purple)),

        // Units
        rule("Units", "keyword.other.unit", fg(&p.fg)),

        // Selector
        rule("Selector", "meta.selector", fg(&p.pink)),

        // Regexp
        rule("Regular Expressions", "string.regexp", fg(&p.cyan)),
        rule("Regexp constant character-class", "constant.other.character-class.regexp", fg(&p.fg)),
        rule("Regexp operator.quantifier", "keyword.operator.quantifier.regexp", fg(&p.purple)),

        // Escape characters
        rule("Escape Characters", "constant.character.escape", fg(&p.cyan)),

        // Embedded
        rule("Embedded", "punctuation.section.embedded, variable.interpolation", fg(&p.fg)),
        rule(
            "Embedded begin/end",
            "punctuation.section.embedded.begin,punctuation.section.embedded.end",
            fg(&p.pink),
        ),

        // Invalid
        rule("Invalid illegal", "invalid.illegal", fg(&p.white)),
        rule("Invalid illegal HTML", "invalid.illegal.bad-ampersand.html", fg(&p.fg_muted)),
        rule("Broken", "invalid.broken", fg(&p.white)),
        rule("Deprecated", "invalid.deprecated", fg(&p.white)),
        rule("Unimplemented", "invalid.unimplemented", fg(&p.white)),

        // String interpolation
        rule(
            "String interpolation",
            [
                "punctuation.definition.template-expression.begin",
                "punctuation.definition.template-expression.end",
                "punctuation.section.embedded",
            ],
            fg(&p.pink),
        ),
        rule("Template expression reset", "meta.template.expression", fg(&p.fg_muted)),

        // Token info/warn/error/debug
        unnamed("token.info-token", fg(&p.pink)),
        unnamed("token.warn-token", fg(&p.purple)),
        unnamed("token.error-token", fg(&p.error)),
        unnamed("token.debug-token", fg(&p.pink)),

        // Diff
        rule("Markup diff changed", "markup.changed.diff", fg(&p.lime)),
        rule(
            "Diff headers",
            "meta.diff.header.from-file,meta.diff.header.to-file,punctuation.definition.from-file.diff,punctuation.definition.to-file.diff",
            fg(&p.pink),
        ),
        rule("Diff inserted", "markup.inserted.diff", fg(&p.yellow)),
        rule("Diff deleted", "markup.deleted.diff", fg(&p.fg)),
    ]
}
