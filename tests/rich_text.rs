mod common;

use simsuite_pdf::FontVariant;
use simsuite_pdf::pdf::richtext::{RichText, Style};

fn variants(rich: &RichText) -> Vec<FontVariant> {
    rich.styles().iter().map(|s| s.variant()).collect()
}

#[test]
fn plain_markup_stays_regular() {
    let rich = RichText::parse("just some text");
    assert_eq!(rich.plain(), "just some text");
    assert!(variants(&rich).iter().all(|&v| v == FontVariant::Regular));
}

#[test]
fn bold_and_italic_tags_style_their_characters() {
    let rich = RichText::parse("ab <b>cd</b> <i>ef</i>");
    assert_eq!(rich.plain(), "ab cd ef");
    let v = variants(&rich);
    assert_eq!(v[0], FontVariant::Regular); // a
    assert_eq!(v[3], FontVariant::Bold); // c
    assert_eq!(v[4], FontVariant::Bold); // d
    assert_eq!(v[6], FontVariant::Italic); // e
}

#[test]
fn nesting_combines_into_bold_italic() {
    let rich = RichText::parse("<b>x<em>y</em></b>");
    assert_eq!(rich.plain(), "xy");
    let v = variants(&rich);
    assert_eq!(v, vec![FontVariant::Bold, FontVariant::BoldItalic]);
}

#[test]
fn repeated_phrase_keeps_its_own_style() {
    // The same word appears bold and plain; only the tagged occurrence
    // may come out bold.
    let rich = RichText::parse("<b>shock</b> settico, stato di shock");
    let plain = rich.plain();
    assert_eq!(plain, "shock settico, stato di shock");

    let v = variants(&rich);
    let second = plain.rfind("shock").unwrap();
    for i in 0..5 {
        assert_eq!(v[i], FontVariant::Bold);
        assert_eq!(v[second + i], FontVariant::Regular);
    }
}

#[test]
fn strong_is_bold_and_em_is_italic() {
    let rich = RichText::parse("<strong>a</strong><em>b</em>");
    assert_eq!(variants(&rich), vec![FontVariant::Bold, FontVariant::Italic]);
}

#[test]
fn whitespace_collapses_like_html() {
    let rich = RichText::parse("a\n\n   b\t c");
    assert_eq!(rich.plain(), "a b c");
}

#[test]
fn block_tags_separate_their_content() {
    let rich = RichText::parse("<p>first</p><p>second</p>");
    assert_eq!(rich.plain(), "first second");
}

#[test]
fn nbsp_and_xml_entities_are_resolved() {
    let rich = RichText::parse("a&nbsp;b &amp; c");
    assert_eq!(rich.plain(), "a b & c");
}

#[test]
fn malformed_markup_degrades_to_stripped_text() {
    // Unclosed tag: not well-formed XML, so styles are dropped but the
    // words survive.
    let rich = RichText::parse("before <b>bold text after");
    assert_eq!(rich.plain(), "before bold text after");
    assert!(variants(&rich).iter().all(|&v| v == FontVariant::Regular));
}

#[test]
fn empty_markup_is_empty() {
    assert!(RichText::parse("").is_empty());
    assert!(RichText::parse("<p>   </p>").is_empty());
}

#[test]
fn style_selects_the_matching_variant() {
    assert_eq!(Style::default().variant(), FontVariant::Regular);
    assert_eq!(
        Style {
            bold: true,
            italic: true
        }
        .variant(),
        FontVariant::BoldItalic,
    );
}
