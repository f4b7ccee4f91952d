//! Scenario header: centred titles and the labeled metadata rows.

use crate::fonts::FontVariant;
use crate::model::Scenario;

use super::layout::{draw_centered, draw_labeled};
use super::page::{HEADER_SIZE, LEADING, RenderContext, TITLE_SIZE};

pub fn draw(ctx: &mut RenderContext, scenario: &Scenario) {
    draw_centered(ctx, FontVariant::Bold, TITLE_SIZE, "Dettaglio Scenario");
    ctx.advance(LEADING * 2.0);

    draw_centered(ctx, FontVariant::Bold, HEADER_SIZE, &scenario.title);
    ctx.advance(LEADING * 2.0);

    draw_labeled(ctx, "Autori: ", &scenario.authors);
    draw_labeled(ctx, "Target: ", &scenario.target);
    draw_labeled(ctx, "Tipologia: ", &scenario.kind_label);
    draw_labeled(ctx, "Paziente: ", &scenario.patient_name);
    draw_labeled(ctx, "Patologia: ", scenario.pathology.as_deref().unwrap_or(""));
    let duration = if scenario.duration_minutes > 0 {
        format!("{} minuti", scenario.duration_minutes)
    } else {
        String::new()
    };
    draw_labeled(ctx, "Durata: ", &duration);

    ctx.advance(LEADING);
    log::debug!("Scenario header drawn for '{}'", scenario.title);
}
