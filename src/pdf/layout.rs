//! Greedy word-wrap and the line-level drawing helpers.
//!
//! Wrapping is pure: `wrap_lines` and `text_height` depend only on their
//! arguments, and every drawing path consumes `wrap_lines` output, so a
//! dry-run measurement always matches what is later drawn.

use crate::fonts::{FontEntry, FontVariant};

use super::page::{BODY_SIZE, LEADING, MARGIN, PAGE_WIDTH, RenderContext, body_width};

/// Split `text` into drawable lines no wider than `max_width`.
///
/// Explicit `\n` always breaks; blank segments survive as empty lines.
/// A single word wider than `max_width` is emitted unsplit on its own
/// line. Empty input produces no lines at all.
pub fn wrap_lines(font: &FontEntry, size: f32, text: &str, max_width: f32) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for segment in text.split('\n') {
        let mut current = String::new();
        for word in segment.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if font.text_width(size, &candidate) > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            } else {
                current = candidate;
            }
        }
        lines.push(current);
    }
    lines
}

/// Height the wrapped text occupies: lines × size × 1.2. Zero for empty text.
pub fn text_height(font: &FontEntry, size: f32, text: &str, max_width: f32) -> f32 {
    wrap_lines(font, size, text, max_width).len() as f32 * size * 1.2
}

/// Draw wrapped text at the cursor, advancing one LEADING per line and
/// breaking pages as needed. Line width is the fixed body width
/// regardless of `x`.
pub fn draw_wrapped(
    ctx: &mut RenderContext,
    variant: FontVariant,
    size: f32,
    x: f32,
    text: &str,
) {
    if text.is_empty() {
        return;
    }
    for line in wrap_lines(ctx.font(variant), size, text, body_width()) {
        ctx.ensure_space(LEADING);
        ctx.text(variant, size, x, &line);
        ctx.advance(LEADING);
    }
}

/// Draw wrapped text at a fixed position with leading size × 1.2, without
/// touching the cursor or pagination. Returns the block height. This is
/// the table-cell path: the caller dry-runs heights with [`text_height`]
/// first and positions each cell itself.
pub fn draw_block_at(
    ctx: &mut RenderContext,
    variant: FontVariant,
    size: f32,
    x: f32,
    top_y: f32,
    max_width: f32,
    text: &str,
) -> f32 {
    let lines = wrap_lines(ctx.font(variant), size, text, max_width);
    let line_h = size * 1.2;
    for (i, line) in lines.iter().enumerate() {
        ctx.text_at(variant, size, x, top_y - i as f32 * line_h, line);
    }
    lines.len() as f32 * line_h
}

/// Draw horizontally centred wrapped text (page titles). Wraps against
/// the full width between the margins.
pub fn draw_centered(ctx: &mut RenderContext, variant: FontVariant, size: f32, text: &str) {
    if text.is_empty() {
        return;
    }
    let max_width = PAGE_WIDTH - 2.0 * MARGIN;
    for line in wrap_lines(ctx.font(variant), size, text, max_width) {
        ctx.ensure_space(LEADING);
        let line_width = ctx.text_width(variant, size, &line);
        ctx.text(variant, size, (PAGE_WIDTH - line_width) / 2.0, &line);
        ctx.advance(LEADING);
    }
}

/// Draw a bold label at the margin followed by a regular value. The
/// value starts right after the label; continuation lines return to the
/// margin. An empty value prints as "-".
pub fn draw_labeled(ctx: &mut RenderContext, label: &str, value: &str) {
    let label_width = ctx.text_width(FontVariant::Bold, BODY_SIZE, label);
    let value_x = MARGIN + label_width;
    let max_width = PAGE_WIDTH - value_x - MARGIN;

    ctx.ensure_space(LEADING);
    ctx.text(FontVariant::Bold, BODY_SIZE, MARGIN, label);

    let value = if value.is_empty() { "-" } else { value };
    let lines = wrap_lines(ctx.font(FontVariant::Regular), BODY_SIZE, value, max_width);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            ctx.ensure_space(LEADING);
        }
        let x = if i == 0 { value_x } else { MARGIN };
        ctx.text(FontVariant::Regular, BODY_SIZE, x, line);
        ctx.advance(LEADING);
    }
}
