//! Markdown and generic markup.

use crate::palette::Palette;
use crate::theme::TokenColorRule;

use super::{fg, rule, Italics};

pub(super) fn rules(p: &Palette, _italics: Italics) -> Vec<TokenColorRule> {
    vec![
        // Heading levels, one color per depth
        rule(
            "Heading 1",
            "heading.1.markdown entity.name.section.markdown,markup.heading.1.markdown",
            fg(&p.pink).bold(),
        ),
        rule(
            "Heading 2",
            "heading.2.markdown entity.name.section.markdown,markup.heading.2.markdown",
            fg(&p.cyan).bold(),
        ),
        rule(
            "Heading 3",
            "heading.3.markdown entity.name.section.markdown,markup.heading.3.markdown",
            fg(&p.lime).bold(),
        ),
        rule(
            "Heading 4",
            "heading.4.markdown entity.name.section.markdown,markup.heading.4.markdown",
            fg(&p.purple).bold(),
        ),
        rule(
            "Heading 5",
            "heading.5.markdown entity.name.section.markdown,markup.heading.5.markdown",
            fg(&p.yellow).bold(),
        ),
        rule(
            "Heading 6",
            "heading.6.markdown entity.name.section.markdown,markup.heading.6.markdown",
            fg(&p.fg).bold(),
        ),
        rule("Heading fallback", "markup.heading,entity.name.section", fg(&p.pink).bold()),
        rule("Heading # punctuation", "punctuation.definition.heading.markdown", fg(&p.comment)),
        rule(
            "Markdown heading setext",
            "markup.heading.setext,markup.heading.setext.1.markdown,markup.heading.setext.2.markdown",
            fg(&p.pink).bold(),
        ),

        // Bold & Italic
        rule("Bold", "markup.bold,todo.bold", fg(&p.purple).bold()),
        rule(
            "Bold punctuation",
            "punctuation.definition.bold,punctuation.definition.bold.markdown",
            fg(&p.comment),
        ),
        rule(
            "Markup italic",
            "markup.italic,markup.italic.markdown,punctuation.definition.italic,todo.emphasis",
            fg(&p.pink).italic(),
        ),
        rule(
            "Bold italic",
            "markup.bold markup.italic,markup.italic markup.bold",
            fg(&p.purple).bold_italic(),
        ),
        rule(
            "Strikethrough",
            "markup.strikethrough,markup.strikethrough.markdown,punctuation.definition.strikethrough.markdown",
            fg(&p.comment),
        ),

        // Inline code & code blocks
        rule(
            "Markdown inline code",
            "markup.inline.raw.markdown,markup.inline.raw.string.markdown",
            fg(&p.yellow),
        ),
        rule(
            "Inline code backtick punctuation",
            "punctuation.definition.raw.markdown",
            fg(&p.comment),
        ),
        rule(
            "Markdown fenced code block",
            "markup.fenced_code.block.markdown,punctuation.definition.markdown",
            fg(&p.yellow),
        ),
        rule(
            "Fenced code block delimiters",
            "punctuation.definition.fenced.markdown,markup.fenced_code.block.markdown punctuation.definition.markdown",
            fg(&p.comment),
        ),
        rule(
            "Fenced code language identifier",
            "fenced_code.block.language.markdown,fenced_code.block.language",
            fg(&p.cyan).italic(),
        ),

        // Lists
        rule(
            "Markdown list bullets/numbers",
            "punctuation.definition.list.begin.markdown,punctuation.definition.list.markdown,beginning.punctuation.definition.list.markdown",
            fg(&p.cyan),
        ),

        // Links
        rule(
            "Markdown link text",
            "string.other.link.title.markdown,string.other.link.description.markdown",
            fg(&p.lime),
        ),
        rule(
            "Markdown link URL",
            "markup.underline.link.markdown,markup.underline.link.image.markdown",
            fg(&p.cyan).underline(),
        ),
        rule(
            "Markdown link brackets/parens",
            "punctuation.definition.string.begin.markdown,punctuation.definition.string.end.markdown,punctuation.definition.metadata.markdown",
            fg(&p.comment),
        ),
        rule(
            "Markdown image !",
            "punctuation.definition.link.description.begin.markdown",
            fg(&p.purple),
        ),

        // Blockquotes
        rule("Markdown blockquote", "markup.quote.markdown", fg(&p.comment).italic()),
        rule(
            "Markdown blockquote punctuation",
            "punctuation.definition.quote.begin.markdown",
            fg(&p.cyan),
        ),

        // Horizontal rule
        rule("Markdown separator/thematic break", "meta.separator.markdown", fg(&p.comment)),

        // Tables
        rule("Markdown table", "markup.table.markdown", fg(&p.fg)),
        rule(
            "Markdown table separator",
            "punctuation.separator.table.markdown,punctuation.definition.table.markdown",
            fg(&p.comment),
        ),
    ]
}
