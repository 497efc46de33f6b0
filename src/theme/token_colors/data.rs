//! Configuration and data formats: YAML, TOML, dotenv, SQL and JSON.

use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        // YAML
        rule(
            "YAML block sequence",
            "punctuation.definition.block.sequence.item.yaml",
            fg(&p.fg_muted),
        ),
        rule("YAML tag", "entity.name.tag.yaml", fg(&p.fg)),
        rule(
            "YAML string",
            "string.unquoted.plain.out.yaml,string.unquoted.block.yaml,string.quoted.single.yaml,string.quoted.double.yaml",
            fg(&p.yellow),
        ),
        rule("YAML boolean", "constant.language.boolean.yaml", fg(&p.purple)),
        rule(
            "YAML numeric",
            "constant.numeric.yaml,constant.numeric.integer.yaml,constant.numeric.float.yaml",
            fg(&p.purple),
        ),
        rule("YAML null", "constant.language.null.yaml", fg(&p.purple)),
        rule("YAML key", "entity.name.tag.yaml,support.type.property-name.yaml", fg(&p.fg)),
        rule(
            "YAML anchor/alias",
            "entity.name.type.anchor.yaml,variable.other.alias.yaml,punctuation.definition.anchor.yaml,punctuation.definition.alias.yaml",
            fg(&p.cyan),
        ),
        rule("YAML separator", "punctuation.separator.key-value.mapping.yaml", fg(&p.fg_muted)),
        rule(
            "YAML block scalar",
            "keyword.control.flow.block-scalar.literal.yaml,keyword.control.flow.block-scalar.folded.yaml",
            italics.keyword(&p.pink),
        ),

        // TOML
        rule("TOML key", "keyword.key.toml,support.type.property-name.toml", fg(&p.fg)),
        rule(
            "TOML string",
            "string.quoted.single.basic.line.toml,string.quoted.double.basic.line.toml",
            fg(&p.yellow),
        ),
        rule(
            "TOML date/datetime",
            "constant.other.date.toml,constant.other.datetime.toml,constant.other.time.toml",
            fg(&p.purple),
        ),
        rule(
            "TOML table",
            "entity.other.attribute-name.table.toml,support.type.property-name.table.toml",
            fg(&p.cyan),
        ),
        rule("TOML array table", "entity.other.attribute-name.table.array.toml", fg(&p.cyan)),
        rule("TOML boolean", "constant.language.boolean.toml", fg(&p.purple)),

        // .env files
        rule("Env variable name", "variable.other.env,keyword.other.definition.ini", fg(&p.fg)),
        rule("Env variable value", "source.env,source.ini", fg(&p.yellow)),
        rule(
            "Env comment",
            "comment.line.number-sign.env,comment.line.semicolon.ini",
            fg(&p.comment).italic(),
        ),
        rule("Ini section header", "entity.name.section.group-title.ini", fg(&p.cyan)),

        // SQL
        rule("SQL Variables", "text.variable,text.bracketed", fg(&p.fg)),
        rule(
            "SQL keyword",
            "keyword.other.sql,keyword.other.DML.sql,keyword.other.DDL.sql",
            italics.keyword(&p.pink),
        ),
        rule("SQL function", "support.function.sql", fg(&p.cyan)),
        rule("SQL operator", "keyword.operator.sql", fg(&p.cyan)),
        rule("SQL string", "string.quoted.single.sql,string.quoted.double.sql", fg(&p.yellow)),
        rule(
            "SQL constant",
            "constant.other.database-name.sql,constant.other.table-name.sql",
            fg(&p.lime),
        ),
        rule("SQL star", "keyword.operator.star.sql", fg(&p.fg)),
        rule("SQL type", "storage.type.sql", fg(&p.lime)),

        // JSON
        rule("JSON property name", "support.type.property-name.json", fg(&p.fg)),
        rule(
            "JSON property name punctuation",
            "support.type.property-name.json punctuation",
            fg(&p.fg),
        ),
        rule(
            "JSON dictionary keys",
            "source.json meta.structure.dictionary.json > string.quoted.json",
            fg(&p.fg),
        ),
        rule(
            "JSON dictionary key punctuation",
            "source.json meta.structure.dictionary.json > string.quoted.json > punctuation.string",
            fg(&p.fg),
        ),
        rule(
            "JSON values",
            "source.json meta.structure.dictionary.json > value.json > string.quoted.json,source.json meta.structure.array.json > value.json > string.quoted.json,source.json meta.structure.dictionary.json > value.json > string.quoted.json > punctuation,source.json meta.structure.array.json > value.json > string.quoted.json > punctuation",
            fg(&p.yellow),
        ),
        rule(
            "JSON constants",
            "source.json meta.structure.dictionary.json > constant.language.json,source.json meta.structure.array.json > constant.language.json",
            fg(&p.cyan),
        ),
        rule(
            "JSONC comments",
            "comment.line.double-slash.js,comment.block.json",
            fg(&p.comment).italic(),
        ),
    ]
}
