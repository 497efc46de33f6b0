//! Languages that only need a handful of rules each.

use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, _italics: Italics) -> Vec<TokenColorRule> {
    vec![
        // Haskell
        rule("Haskell variable generic-type", "variable.other.generic-type.haskell", fg(&p.pink)),
        rule("Haskell storage type", "storage.type.haskell", fg(&p.purple)),

        // Elixir
        rule("Elixir symbol", "constant.language.symbol.elixir", fg(&p.cyan)),

        // Clojure
        rule("Clojure globals", "entity.global.clojure", fg(&p.lime)),
        rule("Clojure symbols", "meta.symbol.clojure", fg(&p.fg)),
        rule("Clojure constants", "constant.keyword.clojure", fg(&p.cyan)),

        // CoffeeScript
        rule(
            "CoffeeScript function argument",
            "meta.arguments.coffee,variable.parameter.function.coffee",
            fg(&p.fg),
        ),

        // Elm
        rule("Elm prelude", "support.type.prelude.elm", fg(&p.cyan)),
        rule("Elm constant", "support.constant.elm", fg(&p.purple)),

        // Groovy
        rule("Groovy import", "storage.modifier.import.groovy", fg(&p.lime)),
        rule("Groovy methods", "meta.method.groovy", fg(&p.pink)),
        rule("Groovy variables", "meta.definition.variable.name.groovy", fg(&p.fg)),
        rule("Groovy inheritance", "meta.definition.class.inherited.classes.groovy", fg(&p.yellow)),

        // Makefile
        rule("Makefile prerequisites", "meta.scope.prerequisites.makefile", fg(&p.fg)),
        rule("Makefile text", "source.makefile", fg(&p.lime)),

        // HLSL
        rule("HLSL semantic", "support.variable.semantic.hlsl", fg(&p.lime)),
        rule(
            "HLSL types",
            [
                "support.type.texture.hlsl",
                "support.type.sampler.hlsl",
                "support.type.object.hlsl",
                "support.type.object.rw.hlsl",
                "support.type.fx.hlsl",
            ],
            fg(&p.pink),
        ),

        // Swift / VB
        rule("Swift/VB types", "support.type.swift,support.type.vb.asp", fg(&p.lime)),

        // Unison
        rule(
            "Unison punctuation",
            "punctuation.definition.delayed.unison,punctuation.definition.list.begin.unison,punctuation.definition.list.end.unison,punctuation.definition.ability.begin.unison,punctuation.definition.ability.end.unison,punctuation.operator.assignment.as.unison,punctuation.separator.pipe.unison,punctuation.separator.delimiter.unison,punctuation.definition.hash.unison",
            fg(&p.fg),
        ),

        // Edge
        rule("Edge support constant", "support.constant.edge", fg(&p.pink)),

        // Xi
        rule("Xi function", "entity.name.function.xi", fg(&p.lime)),
        rule("Xi class", "entity.name.class.xi", fg(&p.cyan)),
        rule("Xi character class", "constant.character.character-class.regexp.xi", fg(&p.fg)),
        rule("Xi constant regexp", "constant.regexp.xi", fg(&p.pink)),
        rule("Xi control", "keyword.control.xi", fg(&p.cyan)),
        rule("Xi invalid", "invalid.xi", fg(&p.fg_muted)),
        rule("Xi quote", "beginning.punctuation.definition.quote.markdown.xi", fg(&p.yellow)),
        rule(
            "Xi comments list",
            "beginning.punctuation.definition.list.markdown.xi",
            fg(&p.comment),
        ),
        rule("Xi link", "constant.character.xi", fg(&p.pink)),
        rule("Xi accent", "accent.xi", fg(&p.pink)),
        rule("Xi wikiword", "wikiword.xi", fg(&p.purple)),
        rule("Xi operators", "constant.other.color.rgb-value.xi", fg(&p.white)),
        rule("Xi dim elements", "punctuation.definition.tag.xi", fg(&p.comment)),

        // HTML / Pug
        rule("HTML entities", "constant.character.entity", fg(&p.fg)),
        rule("HTML custom element", "entity.name.tag.custom.html", fg(&p.lime)),
        rule("HTML data attribute", "entity.other.attribute-name.html", fg(&p.purple)),

        // Links inside comments
        rule("Comment Markup Link", "comment markup.link", fg(&p.comment)),
    ]
}
