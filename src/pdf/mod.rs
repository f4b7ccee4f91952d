//! The layout engine and PDF assembler.
//!
//! Drawing routines append text operators to the open page of a
//! [`RenderContext`] while a vertical cursor walks down from the top
//! margin; [`render_scenario`] and [`render_lab_report`] run the drawing
//! pass and then serialize the finished pages, fonts and logos into the
//! final document.

mod description;
mod exams;
mod header;
pub mod labs;
pub mod layout;
mod logo;
pub mod page;
mod patient;
pub mod richtext;
pub mod section;
mod script;
mod timeline;

pub use logo::Branding;
pub use page::RenderContext;

use chrono::{DateTime, Local};
use pdf_writer::{Filter, Finish, Name, Pdf, Rect, Ref};

use crate::error::Error;
use crate::fonts::{self, FontSet, FontVariant};
use crate::model::{ExportOptions, LabExamSet, Scenario};

use page::{PAGE_HEIGHT, PAGE_WIDTH};

/// Render the scenario detail report.
///
/// Sections appear in a fixed order; `options` switches individual
/// sections off, and sections whose data is empty are skipped either
/// way. Timeline and script additionally depend on the scenario kind.
pub fn render_scenario(
    scenario: &Scenario,
    options: &ExportOptions,
    fonts: &FontSet,
    branding: &Branding,
) -> Result<Vec<u8>, Error> {
    let logos = logo::load(branding)?;

    let mut ctx = RenderContext::new(fonts);
    logo::draw_banner(&mut ctx, &logos);

    header::draw(&mut ctx, scenario);
    description::draw(&mut ctx, scenario, options);
    patient::draw(&mut ctx, scenario, options);
    if options.exams {
        exams::draw(&mut ctx, scenario);
    }
    if options.timeline && scenario.kind.has_timeline() {
        timeline::draw(&mut ctx, scenario);
    }
    if options.script && scenario.kind.has_script() {
        script::draw(&mut ctx, scenario);
    }

    log::info!(
        "Scenario '{}' laid out on {} page(s)",
        scenario.title,
        ctx.page_count(),
    );
    Ok(assemble(fonts, ctx, &logos))
}

/// Render the laboratory exam report for a scenario.
///
/// `issued_at` is stamped under the title; passing it in keeps the
/// output a pure function of its inputs.
pub fn render_lab_report(
    set: &LabExamSet,
    scenario: &Scenario,
    issued_at: DateTime<Local>,
    fonts: &FontSet,
) -> Result<Vec<u8>, Error> {
    let mut ctx = RenderContext::new(fonts);
    let stamp = issued_at.format("%d/%m/%Y %H:%M:%S").to_string();
    labs::draw(&mut ctx, set, scenario, &stamp);

    log::info!(
        "Lab report for '{}' laid out on {} page(s)",
        scenario.title,
        ctx.page_count(),
    );
    let logos = logo::Logos {
        app: None,
        center: None,
    };
    Ok(assemble(fonts, ctx, &logos))
}

fn embed_logo(pdf: &mut Pdf, alloc: &mut impl FnMut() -> Ref, logo: &logo::Logo) -> Ref {
    let xobj_ref = alloc();
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&logo.rgb, 6);
    let mut xobj = pdf.image_xobject(xobj_ref, &compressed);
    xobj.filter(Filter::FlateDecode);
    xobj.width(logo.width as i32);
    xobj.height(logo.height as i32);
    xobj.color_space().device_rgb();
    xobj.bits_per_component(8);
    xobj.finish();
    xobj_ref
}

/// Serialize the drawn pages into the final PDF: fonts, logo XObjects,
/// compressed content streams, and the page tree.
fn assemble(fonts: &FontSet, ctx: RenderContext, logos: &logo::Logos) -> Vec<u8> {
    let t0 = std::time::Instant::now();
    let (contents, used_chars) = ctx.finish();

    let mut pdf = Pdf::new();
    let mut next_ref = 1;
    let mut alloc = || {
        let r = Ref::new(next_ref);
        next_ref += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let page_ids: Vec<Ref> = contents.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = contents.iter().map(|_| alloc()).collect();

    let font_refs: Vec<Ref> = FontVariant::ALL
        .iter()
        .map(|&variant| {
            fonts::register_font(
                &mut pdf,
                fonts.get(variant),
                &used_chars[variant.index()],
                &mut alloc,
            )
        })
        .collect();

    let mut image_xobjects: Vec<(&'static str, Ref)> = Vec::new();
    if let Some(app) = &logos.app {
        image_xobjects.push((logo::APP_LOGO_RESOURCE, embed_logo(&mut pdf, &mut alloc, app)));
    }
    if let Some(center) = &logos.center {
        image_xobjects.push((
            logo::CENTER_LOGO_RESOURCE,
            embed_logo(&mut pdf, &mut alloc, center),
        ));
    }

    let n = contents.len();
    for (i, content) in contents.into_iter().enumerate() {
        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
            .parent(pages_id)
            .contents(content_ids[i]);
        {
            let mut resources = page.resources();
            {
                let mut font_dict = resources.fonts();
                for (variant, font_ref) in FontVariant::ALL.iter().zip(&font_refs) {
                    font_dict.pair(variant.resource_name(), *font_ref);
                }
            }
            if !image_xobjects.is_empty() {
                let mut xobjects = resources.x_objects();
                for (name, xobj_ref) in &image_xobjects {
                    xobjects.pair(Name(name.as_bytes()), *xobj_ref);
                }
            }
        }
    }

    let bytes = pdf.finish();
    log::info!(
        "Assembled {} page(s), {} bytes in {:.1}ms",
        n,
        bytes.len(),
        t0.elapsed().as_secs_f64() * 1000.0,
    );
    bytes
}
