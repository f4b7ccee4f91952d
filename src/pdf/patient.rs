//! Patient baseline (T0): vital signs, vascular accesses, physical exam.

use crate::fonts::FontVariant;
use crate::model::{ExportOptions, Scenario, VascularAccess, Vitals};

use super::layout::draw_wrapped;
use super::page::{BODY_SIZE, LEADING, MARGIN, RenderContext};
use super::section::{SectionBody, draw_section, draw_subsection};
use super::richtext;

/// Draw the vital-sign block shared by the patient baseline and the
/// timeline steps. FiO2 and supplemental oxygen only print when
/// positive; everything else prints a placeholder for missing data.
pub(super) fn draw_vitals(ctx: &mut RenderContext, vitals: &Vitals) {
    let x = MARGIN + 20.0;
    let line = |ctx: &mut RenderContext, text: String| {
        ctx.ensure_space(LEADING * 2.0);
        draw_wrapped(ctx, FontVariant::Regular, BODY_SIZE, x, &text);
    };

    line(
        ctx,
        format!("PA: {} mmHg", vitals.blood_pressure.as_deref().unwrap_or("-")),
    );
    line(ctx, format!("FC: {} bpm", vitals.heart_rate.unwrap_or(0)));
    line(
        ctx,
        format!("RR: {} atti/min", vitals.respiratory_rate.unwrap_or(0)),
    );
    line(ctx, format!("Temperatura: {:.1} °C", vitals.temperature));
    line(ctx, format!("SpO2: {}%", vitals.spo2.unwrap_or(0)));

    if let Some(fio2) = vitals.fio2
        && fio2 > 0
    {
        line(ctx, format!("FiO2: {fio2}%"));
    }
    if let Some(liters) = vitals.oxygen_liters
        && liters > 0.0
    {
        line(ctx, format!("Litri O2: {liters:.1} L/min"));
    }

    line(ctx, format!("EtCO2: {} mmHg", vitals.etco2.unwrap_or(0)));
}

fn draw_accesses(ctx: &mut RenderContext, title: &str, accesses: &[VascularAccess]) {
    ctx.ensure_space(LEADING * 3.0);
    draw_subsection(ctx, title);
    for access in accesses {
        ctx.ensure_space(LEADING * 2.0);
        let row = format!(
            "• {} - {} ({}) - {}G",
            access.kind, access.site, access.side, access.gauge
        );
        draw_wrapped(ctx, FontVariant::Regular, BODY_SIZE, MARGIN + 20.0, &row);
    }
    ctx.advance(LEADING);
}

pub fn draw(ctx: &mut RenderContext, scenario: &Scenario, opts: &ExportOptions) {
    if !opts.vital_params && !opts.accesses && !opts.physical_exam {
        return;
    }

    ctx.ensure_space(LEADING * 3.0);
    draw_section(ctx, "Stato Paziente", SectionBody::None);

    if let Some(patient) = &scenario.patient {
        if opts.vital_params {
            ctx.ensure_space(LEADING * 3.0);
            draw_subsection(ctx, "Parametri Vitali");
            draw_vitals(ctx, &patient.vitals);
            if let Some(monitor) = &patient.monitor
                && !monitor.is_empty()
            {
                ctx.ensure_space(LEADING * 2.0);
                draw_wrapped(
                    ctx,
                    FontVariant::Regular,
                    BODY_SIZE,
                    MARGIN + 20.0,
                    &format!("Monitor: {monitor}"),
                );
            }
            ctx.advance(LEADING);
        }

        if opts.accesses && !patient.venous_accesses.is_empty() {
            draw_accesses(ctx, "Accessi Venosi", &patient.venous_accesses);
        }
        if opts.accesses && !patient.arterial_accesses.is_empty() {
            draw_accesses(ctx, "Accessi Arteriosi", &patient.arterial_accesses);
        }
    }

    if opts.physical_exam {
        let findings: Vec<_> = scenario
            .physical_exam
            .iter()
            .filter(|f| !f.region.trim().is_empty() && !f.notes.trim().is_empty())
            .collect();
        if !findings.is_empty() {
            ctx.ensure_space(LEADING * 3.0);
            draw_subsection(ctx, "Esame Fisico");

            for finding in findings {
                ctx.ensure_space(LEADING * 4.0);
                draw_wrapped(
                    ctx,
                    FontVariant::Bold,
                    BODY_SIZE,
                    MARGIN + 20.0,
                    &format!("{}:", finding.region),
                );
                richtext::draw(ctx, &finding.notes, MARGIN + 40.0);
                ctx.advance(LEADING);
            }
            ctx.advance(LEADING);
        }
    }
}
