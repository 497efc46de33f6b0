//! PHP and Laravel Blade templates.

use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        // PHP
        rule("PHP class", "variable.other.class.php", fg(&p.fg)),
        rule(
            "PHP use/namespace",
            "support.other.namespace.use.php,support.other.namespace.use-as.php,support.other.namespace.php,entity.other.alias.php,meta.interface.php",
            fg(&p.lime),
        ),
        rule("PHP error-control", "keyword.operator.error-control.php", fg(&p.pink)),
        rule("PHP instanceof", "keyword.operator.type.php", italics.keyword(&p.pink)),
        rule("PHP array begin", "punctuation.section.array.begin.php", fg(&p.fg_muted)),
        rule("PHP array end", "punctuation.section.array.end.php", fg(&p.fg_muted)),
        rule(
            "PHP illegal non-null-typehinted",
            "invalid.illegal.non-null-typehinted.php",
            fg(&p.error),
        ),
        rule(
            "PHP types",
            "storage.type.php,meta.other.type.phpdoc.php,keyword.other.type.php,keyword.other.array.phpdoc.php",
            fg(&p.lime),
        ),
        rule(
            "PHP function call",
            "meta.function-call.php,meta.function-call.object.php,meta.function-call.static.php",
            fg(&p.pink),
        ),
        rule(
            "PHP punctuation",
            "punctuation.definition.parameters.begin.bracket.round.php,punctuation.definition.parameters.end.bracket.round.php,punctuation.separator.delimiter.php,punctuation.section.scope.begin.php,punctuation.section.scope.end.php,punctuation.terminator.expression.php,punctuation.definition.arguments.begin.bracket.round.php,punctuation.definition.arguments.end.bracket.round.php,punctuation.definition.storage-type.begin.bracket.round.php,punctuation.definition.storage-type.end.bracket.round.php,punctuation.definition.array.begin.bracket.round.php,punctuation.definition.array.end.bracket.round.php,punctuation.definition.begin.bracket.round.php,punctuation.definition.end.bracket.round.php,punctuation.definition.begin.bracket.curly.php,punctuation.definition.end.bracket.curly.php,punctuation.definition.section.switch-block.end.bracket.curly.php,punctuation.definition.section.switch-block.start.bracket.curly.php,punctuation.definition.section.switch-block.begin.bracket.curly.php,punctuation.definition.section.switch-block.end.bracket.curly.php",
            fg(&p.fg_muted),
        ),
        rule(
            "PHP constants",
            "support.constant.ext.php,support.constant.std.php,support.constant.core.php,support.constant.parser-token.php",
            fg(&p.purple),
        ),
        rule("PHP goto/other", "entity.name.goto-label.php,support.other.php", fg(&p.pink)),
        rule(
            "PHP logical/bitwise",
            "keyword.operator.logical.php,keyword.operator.bitwise.php,keyword.operator.arithmetic.php",
            fg(&p.cyan),
        ),
        rule("PHP regexp", "keyword.operator.regexp.php", fg(&p.pink)),
        rule("PHP comparison", "keyword.operator.comparison.php", fg(&p.cyan)),
        rule(
            "PHP heredoc/nowdoc",
            "keyword.operator.heredoc.php,keyword.operator.nowdoc.php",
            fg(&p.pink),
        ),

        // PHP 8+ features
        rule("PHP attributes", "meta.attribute.php", fg(&p.cyan)),
        rule("PHP enum keyword", "storage.type.enum.php", italics.storage(&p.pink)),
        rule("PHP match expression", "keyword.control.match.php", italics.keyword(&p.pink)),
        rule("PHP named argument", "entity.name.variable.parameter.php", fg(&p.fg_muted)),
        rule("PHP arrow function", "storage.type.function.arrow.php", italics.storage(&p.pink)),
        rule("PHP property promotion", "storage.modifier.php", italics.storage(&p.pink)),

        // Blade
        rule(
            "Blade tag",
            "text.html.laravel-blade source.php.embedded.line.html entity.name.tag.laravel-blade",
            fg(&p.pink),
        ),
        rule(
            "Blade @",
            "text.html.laravel-blade source.php.embedded.line.html support.constant.laravel-blade",
            fg(&p.pink),
        ),
        rule("Blade directives", "keyword.blade,keyword.control.blade", italics.keyword(&p.pink)),
        rule(
            "Blade echo braces",
            "support.function.construct.begin.blade,support.function.construct.end.blade",
            fg(&p.cyan),
        ),
        rule(
            "Blade raw echo",
            "punctuation.blade.raw.begin,punctuation.blade.raw.end",
            fg(&p.pink),
        ),
        rule("Blade component tag", "entity.name.tag.component.blade", fg(&p.lime)),
    ]
}
