//! Narrative sections of the scenario report, in their fixed order.

use crate::model::{ExportOptions, Scenario};

use super::RenderContext;
use super::page::LEADING;
use super::section::{SectionBody, draw_section};

/// Room for the title plus the first body line before drawing a section.
fn titled_section(ctx: &mut RenderContext, title: &str, body: SectionBody) {
    ctx.ensure_space(LEADING * 3.0);
    draw_section(ctx, title, body);
}

pub fn draw(ctx: &mut RenderContext, scenario: &Scenario, opts: &ExportOptions) {
    if opts.description && !scenario.description.is_empty() {
        titled_section(ctx, "Descrizione", SectionBody::Rich(&scenario.description));
    }
    if opts.briefing && !scenario.briefing.is_empty() {
        titled_section(ctx, "Briefing", SectionBody::Rich(&scenario.briefing));
    }
    if opts.parents_info && scenario.pediatric && !scenario.parents_info.is_empty() {
        titled_section(
            ctx,
            "Informazioni dai genitori",
            SectionBody::Rich(&scenario.parents_info),
        );
    }
    if opts.classroom_pact && !scenario.classroom_pact.is_empty() {
        titled_section(ctx, "Patto d'Aula", SectionBody::Rich(&scenario.classroom_pact));
    }

    if opts.key_actions && !scenario.key_actions.is_empty() {
        let bullets = scenario
            .key_actions
            .iter()
            .map(|action| format!("• {action}"))
            .collect::<Vec<_>>()
            .join("\n");
        titled_section(ctx, "Azioni Chiave", SectionBody::Plain(&bullets));
    }

    if opts.objectives && !scenario.objectives.is_empty() {
        titled_section(ctx, "Obiettivi Didattici", SectionBody::Rich(&scenario.objectives));
    }
    if opts.moulage && !scenario.moulage.is_empty() {
        titled_section(ctx, "Moulage", SectionBody::Rich(&scenario.moulage));
    }
    if opts.fluids_and_drugs && !scenario.fluids_and_drugs.is_empty() {
        titled_section(
            ctx,
            "Liquidi e dosi farmaci",
            SectionBody::Rich(&scenario.fluids_and_drugs),
        );
    }

    if opts.materials && !scenario.materials.is_empty() {
        let bullets = scenario
            .materials
            .iter()
            .map(|m| format!("• {}: {}", m.name, m.description))
            .collect::<Vec<_>>()
            .join("\n");
        titled_section(ctx, "Materiale necessario", SectionBody::Plain(&bullets));
    }
}
