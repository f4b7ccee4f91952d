//! "Sceneggiatura": the acting script of patient-simulated scenarios.

use crate::model::Scenario;

use super::page::{LEADING, MARGIN, RenderContext};
use super::richtext;
use super::section::{SectionBody, draw_section};

pub fn draw(ctx: &mut RenderContext, scenario: &Scenario) {
    if scenario.script.is_empty() {
        return;
    }

    ctx.ensure_space(LEADING * 5.0);
    draw_section(ctx, "Sceneggiatura", SectionBody::None);
    richtext::draw(ctx, &scenario.script, MARGIN + 20.0);
    ctx.advance(LEADING);
}
