//! Rich-text subset rendering: `<b>`/`<strong>` and `<i>`/`<em>`.
//!
//! The markup is parsed into plain text plus a per-character style, so a
//! phrase that happens to repeat elsewhere in the text never inherits
//! styling from its styled twin. Malformed markup degrades to
//! tag-stripped plain text instead of failing the export.

use crate::fonts::{FontEntry, FontVariant};

use super::page::{BODY_SIZE, LEADING, RenderContext, body_width};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    pub fn variant(self) -> FontVariant {
        FontVariant::select(self.bold, self.italic)
    }
}

/// Resolved rich text: the flattened characters and one style per char.
pub struct RichText {
    chars: Vec<char>,
    styles: Vec<Style>,
}

impl RichText {
    /// Parse the markup subset. Whitespace collapses the way HTML text
    /// does; block-level boundaries contribute a single separating space.
    pub fn parse(markup: &str) -> RichText {
        // roxmltree only knows the XML entities.
        let prepared = markup.replace("&nbsp;", " ");
        let wrapped = format!("<sim>{prepared}</sim>");
        match roxmltree::Document::parse(&wrapped) {
            Ok(doc) => {
                let mut rich = RichText {
                    chars: Vec::new(),
                    styles: Vec::new(),
                };
                rich.collect(doc.root_element(), Style::default());
                rich.trim_end();
                rich
            }
            Err(err) => {
                log::debug!("rich text is not well-formed ({err}), stripping tags");
                Self::from_plain(&strip_tags(markup))
            }
        }
    }

    /// Plain text with every char regular (fallback path).
    fn from_plain(text: &str) -> RichText {
        let mut rich = RichText {
            chars: Vec::new(),
            styles: Vec::new(),
        };
        for ch in text.chars() {
            rich.push(ch, Style::default());
        }
        rich.trim_end();
        rich
    }

    fn collect(&mut self, node: roxmltree::Node, style: Style) {
        for child in node.children() {
            if child.is_text() {
                for ch in child.text().unwrap_or("").chars() {
                    self.push(ch, style);
                }
            } else if child.is_element() {
                let tag = child.tag_name().name();
                let child_style = match tag {
                    "b" | "strong" => Style {
                        bold: true,
                        ..style
                    },
                    "i" | "em" => Style {
                        italic: true,
                        ..style
                    },
                    _ => style,
                };
                self.collect(child, child_style);
                if is_block_boundary(tag) {
                    self.push(' ', style);
                }
            }
        }
    }

    fn push(&mut self, ch: char, style: Style) {
        if ch.is_whitespace() {
            if matches!(self.chars.last(), None | Some(' ')) {
                return;
            }
            self.chars.push(' ');
        } else {
            self.chars.push(ch);
        }
        self.styles.push(style);
    }

    fn trim_end(&mut self) {
        while self.chars.last() == Some(&' ') {
            self.chars.pop();
            self.styles.pop();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn plain(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Greedy wrap into char ranges, measured with `font` for every
    /// candidate line regardless of the styles inside it.
    fn wrap(&self, font: &FontEntry, size: f32, max_width: f32) -> Vec<(usize, usize)> {
        let mut lines = Vec::new();
        let mut line: Option<(usize, usize)> = None;

        for (start, end) in self.word_ranges() {
            match line {
                None => line = Some((start, end)),
                Some((line_start, line_end)) => {
                    let candidate: String = self.chars[line_start..end].iter().collect();
                    if font.text_width(size, &candidate) > max_width {
                        lines.push((line_start, line_end));
                        line = Some((start, end));
                    } else {
                        line = Some((line_start, end));
                    }
                }
            }
        }
        if let Some(last) = line {
            lines.push(last);
        }
        lines
    }

    fn word_ranges(&self) -> Vec<(usize, usize)> {
        let mut words = Vec::new();
        let mut start = None;
        for (i, &ch) in self.chars.iter().enumerate() {
            if ch == ' ' {
                if let Some(s) = start.take() {
                    words.push((s, i));
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            words.push((s, self.chars.len()));
        }
        words
    }

    /// Split a char range into style-homogeneous runs.
    fn runs_in(&self, start: usize, end: usize) -> Vec<(FontVariant, String)> {
        let mut runs: Vec<(FontVariant, String)> = Vec::new();
        for i in start..end {
            let variant = self.styles[i].variant();
            match runs.last_mut() {
                Some((last, text)) if *last == variant => text.push(self.chars[i]),
                _ => runs.push((variant, self.chars[i].to_string())),
            }
        }
        runs
    }
}

fn is_block_boundary(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div" | "br" | "li" | "ul" | "ol" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

/// Last-resort cleanup for markup that does not parse: drop everything
/// angle-bracketed, unescape the common entities, collapse whitespace.
fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Render rich text at the cursor, wrapping against the body width.
///
/// Candidate lines are measured with the regular face at body size; each
/// drawn line emits its style runs inside a single text object. The
/// cursor is left on the last drawn baseline — callers own the gap that
/// follows.
pub fn draw(ctx: &mut RenderContext, markup: &str, x: f32) {
    let rich = RichText::parse(markup);
    if rich.is_empty() {
        return;
    }

    let lines = rich.wrap(ctx.font(FontVariant::Regular), BODY_SIZE, body_width());
    for (i, &(start, end)) in lines.iter().enumerate() {
        if i > 0 {
            ctx.advance(LEADING);
            ctx.ensure_space(LEADING);
        }
        let runs = rich.runs_in(start, end);
        ctx.styled_line(BODY_SIZE, x, &runs);
    }
}
