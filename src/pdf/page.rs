use std::collections::BTreeSet;

use pdf_writer::{Content, Name, Str};

use crate::fonts::{FontEntry, FontSet, FontVariant};

pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = 40.0;
pub const LEADING: f32 = 14.0;

pub const TITLE_SIZE: f32 = 16.0;
pub const HEADER_SIZE: f32 = 14.0;
pub const BODY_SIZE: f32 = 11.0;
pub const SMALL_SIZE: f32 = 9.0;

/// Maximum line width for body text. Fixed for every indent level, so a
/// deeper indent narrows the right margin rather than the line.
pub const fn body_width() -> f32 {
    PAGE_WIDTH - 2.0 * MARGIN - 10.0
}

/// Mutable render state for one document: the finished pages, the open
/// content stream, and the baseline cursor. Passed down to every drawing
/// routine; nothing in the engine is global.
pub struct RenderContext<'a> {
    fonts: &'a FontSet,
    content: Content,
    finished: Vec<Content>,
    used_chars: [BTreeSet<char>; 4],
    /// Baseline of the next line to draw, in page coordinates.
    pub y: f32,
}

impl<'a> RenderContext<'a> {
    pub fn new(fonts: &'a FontSet) -> Self {
        RenderContext {
            fonts,
            content: Content::new(),
            finished: Vec::new(),
            used_chars: Default::default(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    pub fn fonts(&self) -> &FontSet {
        self.fonts
    }

    pub fn font(&self, variant: FontVariant) -> &FontEntry {
        self.fonts.get(variant)
    }

    pub fn text_width(&self, variant: FontVariant, size: f32, text: &str) -> f32 {
        self.fonts.text_width(variant, size, text)
    }

    /// Break to a fresh page unless `needed` points fit above the margin.
    pub fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < MARGIN {
            self.new_page();
        }
    }

    pub fn new_page(&mut self) {
        self.finished
            .push(std::mem::replace(&mut self.content, Content::new()));
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Move the cursor down by `dy` points.
    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Pages emitted so far, counting the one still open.
    pub fn page_count(&self) -> usize {
        self.finished.len() + 1
    }

    /// Show one line at an explicit baseline, without touching the cursor.
    pub fn text_at(&mut self, variant: FontVariant, size: f32, x: f32, y: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        self.record(variant, text);
        let bytes = self.fonts.get(variant).encode_text(text);
        self.content.begin_text();
        self.content.set_font(variant.resource_name(), size);
        self.content.next_line(x, y);
        self.content.show(Str(&bytes));
        self.content.end_text();
    }

    /// Show one line at the current baseline.
    pub fn text(&mut self, variant: FontVariant, size: f32, x: f32, text: &str) {
        let y = self.y;
        self.text_at(variant, size, x, y, text);
    }

    /// Show one line made of style-homogeneous runs, all sharing the
    /// current baseline.
    pub fn styled_line(&mut self, size: f32, x: f32, runs: &[(FontVariant, String)]) {
        if runs.iter().all(|(_, t)| t.is_empty()) {
            return;
        }
        self.content.begin_text();
        self.content.next_line(x, self.y);
        for (variant, text) in runs {
            if text.is_empty() {
                continue;
            }
            self.record(*variant, text);
            let bytes = self.fonts.get(*variant).encode_text(text);
            self.content.set_font(variant.resource_name(), size);
            self.content.show(Str(&bytes));
        }
        self.content.end_text();
    }

    /// Stroke a horizontal rule on the current baseline.
    pub fn rule(&mut self, x_start: f32, x_end: f32) {
        self.content.move_to(x_start, self.y);
        self.content.line_to(x_end, self.y);
        self.content.stroke();
    }

    /// Place a registered image XObject with its bottom-left corner at
    /// (x, y), scaled to w × h points.
    pub fn place_image(&mut self, resource: &str, x: f32, y: f32, w: f32, h: f32) {
        self.content.save_state();
        self.content.transform([w, 0.0, 0.0, h, x, y]);
        self.content.x_object(Name(resource.as_bytes()));
        self.content.restore_state();
    }

    fn record(&mut self, variant: FontVariant, text: &str) {
        self.used_chars[variant.index()].extend(text.chars());
    }

    /// Close the open page and hand everything to the assembler.
    pub(crate) fn finish(mut self) -> (Vec<Content>, [BTreeSet<char>; 4]) {
        self.finished.push(self.content);
        (self.finished, self.used_chars)
    }
}
