//! PDF export for clinical-simulation scenarios.
//!
//! Two documents are produced: the scenario detail report (header,
//! narrative sections, patient baseline, exams, timeline, script) and
//! the laboratory exam report (categorised result tables). Layout is a
//! single top-to-bottom pass with an explicit cursor; given the same
//! scenario and fonts, the output bytes are identical.

mod error;
pub mod fonts;
pub mod model;
pub mod pdf;

pub use error::Error;
pub use fonts::{FontEntry, FontSet, FontVariant};
pub use pdf::Branding;

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Local};

use model::{ExportOptions, LabExamSet, Scenario};

/// Render the scenario detail report and write it to `output`.
pub fn export_scenario(
    scenario: &Scenario,
    options: &ExportOptions,
    fonts: &FontSet,
    branding: &Branding,
    output: &Path,
) -> Result<(), Error> {
    let t0 = Instant::now();

    let bytes = pdf::render_scenario(scenario, options, fonts, branding)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}

/// Render the laboratory exam report and write it to `output`.
/// `issued_at` is the timestamp printed under the report title.
pub fn export_lab_report(
    set: &LabExamSet,
    scenario: &Scenario,
    issued_at: DateTime<Local>,
    fonts: &FontSet,
    output: &Path,
) -> Result<(), Error> {
    let t0 = Instant::now();

    let bytes = pdf::render_lab_report(set, scenario, issued_at, fonts)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}
