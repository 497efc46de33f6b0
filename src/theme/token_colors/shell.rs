//! Shell scripts and Dockerfiles.

use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, italics: Italics) -> Vec<TokenColorRule> {
    vec![
        // Shell
        rule(
            "Shell keyword control",
            "keyword.control.shell,keyword.control.bash",
            italics.keyword(&p.pink),
        ),
        rule("Shell function", "entity.name.function.shell", fg(&p.pink)),
        rule(
            "Shell variable",
            "variable.other.normal.shell,variable.other.special.shell",
            fg(&p.fg),
        ),
        rule("Shell builtin", "support.function.builtin.shell", fg(&p.cyan)),
        rule(
            "Shell string",
            "string.quoted.double.shell,string.quoted.single.shell",
            fg(&p.yellow),
        ),
        rule(
            "Shell option",
            "constant.other.option.shell,constant.other.option.bash",
            fg(&p.purple),
        ),
        rule(
            "Shell variable definition",
            "punctuation.definition.variable.shell,punctuation.definition.variable.bash",
            fg(&p.fg),
        ),
        rule(
            "Shell pipe/redirection",
            "keyword.operator.pipe.shell,keyword.operator.redirect.shell,keyword.operator.logical.shell",
            fg(&p.cyan),
        ),
        rule("Shell assignment", "keyword.operator.assign.shell", fg(&p.cyan)),
        rule(
            "Shell subshell",
            "punctuation.definition.subshell.begin,punctuation.definition.subshell.end",
            fg(&p.pink),
        ),

        // Dockerfile
        rule(
            "Dockerfile keyword",
            "keyword.other.special-method.dockerfile,keyword.control.dockerfile",
            italics.keyword(&p.cyan),
        ),
        rule("Dockerfile instruction", "entity.name.function.dockerfile", fg(&p.pink)),
        rule("Dockerfile variable", "variable.other.dockerfile", fg(&p.fg)),
        rule("Dockerfile from", "keyword.other.dockerfile", italics.keyword(&p.pink)),
        rule(
            "Dockerfile string",
            "string.quoted.double.dockerfile,string.quoted.single.dockerfile",
            fg(&p.yellow),
        ),
    ]
}
