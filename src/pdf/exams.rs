//! "Esami e Referti": diagnostic exams with their reports and attachments.

use crate::fonts::{FontVariant, replace_vertical_glyphs};
use crate::model::Scenario;

use super::layout::draw_wrapped;
use super::page::{BODY_SIZE, LEADING, MARGIN, RenderContext, SMALL_SIZE};
use super::section::{SectionBody, draw_section, draw_subsection};

pub fn draw(ctx: &mut RenderContext, scenario: &Scenario) {
    if scenario.exams.is_empty() {
        return;
    }

    ctx.ensure_space(LEADING * 5.0);
    draw_section(ctx, "Esami e Referti", SectionBody::None);

    for exam in &scenario.exams {
        ctx.ensure_space(LEADING * 3.0);
        draw_subsection(ctx, &replace_vertical_glyphs(&exam.kind));

        if !exam.report.is_empty() {
            draw_wrapped(
                ctx,
                FontVariant::Regular,
                BODY_SIZE,
                MARGIN + 20.0,
                &format!("Referto: {}", exam.report),
            );
        }
        if let Some(attachment) = &exam.attachment
            && !attachment.is_empty()
        {
            draw_wrapped(
                ctx,
                FontVariant::Regular,
                SMALL_SIZE,
                MARGIN + 20.0,
                &format!("Allegato: {attachment}"),
            );
        }
        ctx.advance(LEADING);
    }
}
