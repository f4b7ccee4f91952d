mod common;

use simsuite_pdf::FontVariant;
use simsuite_pdf::fonts::replace_vertical_glyphs;

#[test]
fn text_width_sums_per_character_advances() {
    let fonts = common::metrics_fonts();
    // Helvetica-like table: digits are 556/1000, space is 278/1000.
    let width = fonts.text_width(FontVariant::Regular, 10.0, "12 3");
    let expected = (556.0 * 3.0 + 278.0) / 1000.0 * 10.0;
    assert!((width - expected).abs() < 0.001);
}

#[test]
fn empty_text_has_zero_width() {
    let fonts = common::metrics_fonts();
    assert_eq!(fonts.text_width(FontVariant::Regular, 11.0, ""), 0.0);
}

#[test]
fn chemistry_notation_is_flattened_to_ascii() {
    assert_eq!(replace_vertical_glyphs("SpO₂"), "SpO2");
    assert_eq!(replace_vertical_glyphs("PaCO₂"), "PaCO2");
    assert_eq!(replace_vertical_glyphs("10⁻³"), "10-3");
    assert_eq!(replace_vertical_glyphs("Na⁺"), "Na+");
    assert_eq!(replace_vertical_glyphs("normale"), "normale");
}
