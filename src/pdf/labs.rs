//! Laboratory exam report: a tabular document separate from the
//! scenario report.
//!
//! Rows use a two-pass layout: every cell is dry-run measured first, then
//! all four cells are drawn top-aligned at the same baseline and the
//! cursor advances once by the tallest cell plus padding, so a long
//! reference range can never desynchronise the row.

use crate::fonts::FontVariant;
use crate::model::{LabExamSet, LabTest, Scenario};

use super::layout::{draw_block_at, text_height};
use super::page::{LEADING, MARGIN, PAGE_WIDTH, RenderContext};

const TITLE_SIZE: f32 = 18.0;
const CATEGORY_SIZE: f32 = 14.0;
const CELL_SIZE: f32 = 10.0;
const PATIENT_SIZE: f32 = 12.0;
/// Horizontal inset of cell text and slack removed from the wrap width.
const CELL_PAD: f32 = 2.0;
/// Vertical gap added below the tallest cell of each row.
const ROW_GAP: f32 = 10.0;

const COLUMN_FRACTIONS: [f32; 4] = [0.35, 0.15, 0.20, 0.30];

fn column_widths() -> [f32; 4] {
    let table_width = PAGE_WIDTH - 2.0 * MARGIN;
    COLUMN_FRACTIONS.map(|f| table_width * f)
}

fn draw_table_header(ctx: &mut RenderContext, col_widths: &[f32; 4]) {
    let headers = ["Esame", "Valore", "Unità di Misura", "Range di Riferimento"];
    let mut x = MARGIN;
    for (header, width) in headers.iter().zip(col_widths) {
        ctx.text(FontVariant::Bold, CELL_SIZE, x + CELL_PAD, header);
        x += width;
    }
    ctx.advance(LEADING);
    ctx.rule(MARGIN, PAGE_WIDTH - MARGIN);
    ctx.advance(ROW_GAP);
}

fn draw_row(ctx: &mut RenderContext, test: &LabTest, col_widths: &[f32; 4]) {
    let cells = [
        test.name.as_str(),
        test.value.as_str(),
        test.unit.as_str(),
        test.reference_range.as_str(),
    ];

    // Pass 1: measure every cell to find the row height.
    let font = ctx.font(FontVariant::Regular);
    let mut max_height: f32 = 0.0;
    for (cell, width) in cells.iter().zip(col_widths) {
        let h = text_height(font, CELL_SIZE, cell, width - 2.0 * CELL_PAD);
        max_height = max_height.max(h);
    }

    // The whole row moves to the next page together; a tall cell must
    // not run past the bottom margin.
    ctx.ensure_space(max_height + ROW_GAP);

    // Pass 2: draw all cells from the same top baseline.
    let top = ctx.y;
    let mut x = MARGIN;
    for (cell, width) in cells.iter().zip(col_widths) {
        draw_block_at(
            ctx,
            FontVariant::Regular,
            CELL_SIZE,
            x + CELL_PAD,
            top,
            width - 2.0 * CELL_PAD,
            cell,
        );
        x += width;
    }

    ctx.advance(max_height + ROW_GAP);
}

/// Draw the whole lab report into `ctx`. `issued_at` is the preformatted
/// report timestamp shown under the title.
pub fn draw(ctx: &mut RenderContext, set: &LabExamSet, scenario: &Scenario, issued_at: &str) {
    ctx.ensure_space(200.0);

    ctx.text(FontVariant::Bold, TITLE_SIZE, MARGIN, "Referto Esami di Laboratorio");
    ctx.advance(LEADING * 2.0);

    ctx.text(
        FontVariant::Regular,
        CELL_SIZE,
        MARGIN,
        &format!("Data referto: {issued_at}"),
    );
    ctx.advance(LEADING * 1.5);

    ctx.text(
        FontVariant::Regular,
        PATIENT_SIZE,
        MARGIN,
        &format!("Paziente: {}", scenario.patient_name),
    );
    ctx.advance(LEADING * 2.0);

    let col_widths = column_widths();
    for category in &set.categories {
        ctx.ensure_space(100.0);
        ctx.text(FontVariant::Bold, CATEGORY_SIZE, MARGIN, &category.name);
        ctx.advance(LEADING * 1.5);

        draw_table_header(ctx, &col_widths);

        for test in &category.tests {
            draw_row(ctx, test, &col_widths);
        }
        ctx.advance(LEADING);
    }
}
