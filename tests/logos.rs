mod common;

use std::path::PathBuf;

use simsuite_pdf::model::ExportOptions;
use simsuite_pdf::pdf::render_scenario;
use simsuite_pdf::{Branding, Error};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("simsuite-pdf-test-{}-{name}", std::process::id()))
}

fn write_garbage(name: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, b"definitely not a png").unwrap();
    path
}

fn write_png(name: &str) -> PathBuf {
    let path = temp_path(name);
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
    img.save_with_format(&path, image::ImageFormat::Png).unwrap();
    path
}

fn render(branding: &Branding) -> Result<Vec<u8>, Error> {
    let fonts = common::metrics_fonts();
    let scenario = common::sample_scenario();
    render_scenario(&scenario, &ExportOptions::default(), &fonts, branding)
}

#[test]
fn broken_center_logo_without_default_fails() {
    let branding = Branding {
        center_logo: Some(write_garbage("broken-center.png")),
        ..Branding::default()
    };
    assert!(matches!(render(&branding), Err(Error::Logo(_))));
}

#[test]
fn broken_default_center_logo_fails() {
    let branding = Branding {
        default_center_logo: Some(write_garbage("broken-default.png")),
        ..Branding::default()
    };
    assert!(matches!(render(&branding), Err(Error::Logo(_))));
}

#[test]
fn broken_center_logo_falls_back_to_the_default() {
    let branding = Branding {
        center_logo: Some(write_garbage("broken-center-2.png")),
        default_center_logo: Some(write_png("default-center.png")),
        ..Branding::default()
    };
    let bytes = render(&branding).expect("default logo takes over");
    assert!(common::all_content(&bytes).contains("/Im2 Do"));
}

#[test]
fn unreadable_app_logo_is_skipped_not_fatal() {
    let branding = Branding {
        app_logo: Some(write_garbage("broken-app.png")),
        ..Branding::default()
    };
    let bytes = render(&branding).expect("app logo is optional");
    assert!(!common::all_content(&bytes).contains("/Im1 Do"));
}

#[test]
fn valid_logos_are_placed_on_the_first_page() {
    let branding = Branding {
        app_logo: Some(write_png("app.png")),
        center_logo: Some(write_png("center.png")),
        ..Branding::default()
    };
    let bytes = render(&branding).expect("render");
    // Logo image data is itself a flate stream, so pick the page stream
    // out by its title.
    let streams = common::content_streams(&bytes);
    let first_page = streams
        .iter()
        .find(|s| s.contains("Dettaglio Scenario"))
        .expect("first page stream");
    assert!(first_page.contains("/Im1 Do"));
    assert!(first_page.contains("/Im2 Do"));
}
