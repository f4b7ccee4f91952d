//! Timeline section for advanced and patient-simulated scenarios.

use crate::fonts::{FontVariant, replace_vertical_glyphs};
use crate::model::{Scenario, TimelineStep};

use super::layout::draw_wrapped;
use super::page::{BODY_SIZE, LEADING, MARGIN, RenderContext};
use super::patient::draw_vitals;
use super::section::{SectionBody, draw_section, draw_subsection};

const LABEL_INDENT: f32 = MARGIN + 20.0;
const TEXT_INDENT: f32 = MARGIN + 30.0;

fn draw_labeled_block(ctx: &mut RenderContext, label: &str, text: Option<&str>) {
    ctx.ensure_space(LEADING * 3.0);
    draw_wrapped(ctx, FontVariant::Bold, BODY_SIZE, LABEL_INDENT, label);
    if let Some(text) = text {
        ctx.ensure_space(LEADING * 2.0);
        draw_wrapped(ctx, FontVariant::Regular, BODY_SIZE, TEXT_INDENT, text);
    }
    ctx.advance(LEADING / 2.0);
}

fn draw_step(ctx: &mut RenderContext, scenario: &Scenario, step: &TimelineStep) {
    let title = format!("Tempo {} ({:.1} min)", step.id, step.timer_seconds as f64 / 60.0);
    ctx.ensure_space(LEADING * 3.0);
    draw_subsection(ctx, &title);

    draw_vitals(ctx, &step.vitals);

    for param in &step.additional_params {
        ctx.ensure_space(LEADING * 2.0);
        let name = replace_vertical_glyphs(&param.name);
        let unit = replace_vertical_glyphs(&param.unit);
        // Free-form values print as numbers; anything unparsable becomes 0.
        let value: f64 = param.value.trim().parse().unwrap_or(0.0);
        draw_wrapped(
            ctx,
            FontVariant::Regular,
            BODY_SIZE,
            LABEL_INDENT,
            &format!("{name}: {value} {unit}"),
        );
    }
    ctx.advance(LEADING);

    if !step.details.is_empty() {
        draw_labeled_block(ctx, "Dettagli:", Some(&step.details));
    }
    if scenario.pediatric && !step.parent_role.is_empty() {
        draw_labeled_block(ctx, "Ruolo del genitore:", Some(&step.parent_role));
    }
    if !step.action.is_empty() {
        let label = format!("Azioni da svolgere per passare a → T{}:", step.t_yes);
        draw_labeled_block(ctx, &label, Some(&step.action));
    }
    if let Some(t_no) = step.t_no {
        let label = format!("Se non vengono svolte le azioni passare a → T{t_no}");
        draw_labeled_block(ctx, &label, None);
    }
}

pub fn draw(ctx: &mut RenderContext, scenario: &Scenario) {
    if scenario.timeline.is_empty() {
        return;
    }

    // Room for the section title plus the first step's heading.
    ctx.ensure_space(LEADING * 6.0);
    draw_section(ctx, "Timeline", SectionBody::None);

    for (i, step) in scenario.timeline.iter().enumerate() {
        draw_step(ctx, scenario, step);
        if i + 1 < scenario.timeline.len() {
            ctx.ensure_space(LEADING * 2.0);
            ctx.advance(LEADING);
        }
    }
    log::debug!(
        "Timeline drawn: {} steps for '{}'",
        scenario.timeline.len(),
        scenario.title,
    );
}
