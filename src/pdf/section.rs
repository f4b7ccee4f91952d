//! Section and subsection headings.

use crate::fonts::FontVariant;

use super::page::{BODY_SIZE, HEADER_SIZE, LEADING, MARGIN, RenderContext};
use super::{layout, richtext};

/// Body of a top-level section. Whether a body is rich text is an
/// explicit property of the call site, never inferred from the title.
#[derive(Clone, Copy, Debug)]
pub enum SectionBody<'a> {
    None,
    Plain(&'a str),
    Rich(&'a str),
}

/// Draw a bold section title at the margin and, if present, its body.
///
/// Rich bodies indent 20pt and get an extra half-leading after; plain
/// bodies indent 10pt. A full leading closes any non-empty body.
pub fn draw_section(ctx: &mut RenderContext, title: &str, body: SectionBody) {
    ctx.text(FontVariant::Bold, HEADER_SIZE, MARGIN, title);
    ctx.advance(LEADING * 1.5);

    match body {
        SectionBody::Rich(text) if !text.is_empty() => {
            richtext::draw(ctx, text, MARGIN + 20.0);
            ctx.advance(LEADING / 2.0);
            ctx.advance(LEADING);
        }
        SectionBody::Plain(text) if !text.is_empty() => {
            layout::draw_wrapped(ctx, FontVariant::Regular, BODY_SIZE, MARGIN + 10.0, text);
            ctx.advance(LEADING);
        }
        _ => {}
    }
}

/// Draw a bold subsection title, slightly indented.
pub fn draw_subsection(ctx: &mut RenderContext, title: &str) {
    ctx.text(FontVariant::Bold, BODY_SIZE, MARGIN + 10.0, title);
    ctx.advance(LEADING);
}
