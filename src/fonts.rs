use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use pdf_writer::{Name, Pdf, Rect, Ref};
use ttf_parser::Face;

use crate::error::Error;

/// The four face variants the renderer draws with.
///
/// Styled text always resolves to exactly one of these; there is no
/// synthetic bolding or slanting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontVariant {
    pub const ALL: [FontVariant; 4] = [
        FontVariant::Regular,
        FontVariant::Bold,
        FontVariant::Italic,
        FontVariant::BoldItalic,
    ];

    pub fn select(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (true, true) => FontVariant::BoldItalic,
            (true, false) => FontVariant::Bold,
            (false, true) => FontVariant::Italic,
            (false, false) => FontVariant::Regular,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            FontVariant::Regular => 0,
            FontVariant::Bold => 1,
            FontVariant::Italic => 2,
            FontVariant::BoldItalic => 3,
        }
    }

    /// Resource name under which the font is registered on every page.
    pub(crate) fn resource_name(self) -> Name<'static> {
        match self {
            FontVariant::Regular => Name(b"F1"),
            FontVariant::Bold => Name(b"F2"),
            FontVariant::Italic => Name(b"F3"),
            FontVariant::BoldItalic => Name(b"F4"),
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "LiberationSans-Regular.ttf",
            FontVariant::Bold => "LiberationSans-Bold.ttf",
            FontVariant::Italic => "LiberationSans-Italic.ttf",
            FontVariant::BoldItalic => "LiberationSans-BoldItalic.ttf",
        }
    }

    fn fallback_base_font(self) -> &'static str {
        match self {
            FontVariant::Regular => "Helvetica",
            FontVariant::Bold => "Helvetica-Bold",
            FontVariant::Italic => "Helvetica-Oblique",
            FontVariant::BoldItalic => "Helvetica-BoldOblique",
        }
    }
}

/// Metrics and (optionally) the raw program of one loaded face.
pub struct FontEntry {
    ps_name: String,
    /// WinAnsi widths at 1000 units/em for bytes 32..=255.
    widths_1000: Vec<f32>,
    /// Per-char widths covering the full cmap; None for metrics-only entries.
    char_widths_1000: Option<HashMap<char, f32>>,
    char_to_gid: Option<HashMap<char, u16>>,
    /// Raw TrueType program for embedding; None for metrics-only entries.
    data: Option<Vec<u8>>,
    ascent_1000: f32,
    descent_1000: f32,
    cap_height_1000: f32,
    bbox_1000: [f32; 4],
}

impl FontEntry {
    /// Parse a TrueType face and extract everything the renderer needs.
    pub fn from_ttf(ps_name: &str, path: &Path, data: Vec<u8>) -> Result<FontEntry, Error> {
        let face = Face::parse(&data, 0).map_err(|_| Error::FontParse {
            path: path.to_path_buf(),
        })?;

        let units = face.units_per_em() as f32;
        let to_1000 = |v: f32| v / units * 1000.0;

        let widths_1000: Vec<f32> = (32u8..=255u8)
            .map(|byte| {
                face.glyph_index(winansi_to_char(byte))
                    .and_then(|gid| face.glyph_hor_advance(gid))
                    .map(|adv| to_1000(adv as f32))
                    .unwrap_or(0.0)
            })
            .collect();

        // Full cmap coverage so any char in the input can be measured,
        // encoded and listed in the CID width array.
        let mut char_to_gid = HashMap::new();
        let mut char_widths_1000 = HashMap::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|cp| {
                    let Some(ch) = char::from_u32(cp) else { return };
                    let Some(gid) = subtable.glyph_index(cp) else {
                        return;
                    };
                    char_to_gid.entry(ch).or_insert(gid.0);
                    let w = face
                        .glyph_hor_advance(gid)
                        .map(|adv| to_1000(adv as f32))
                        .unwrap_or(0.0);
                    char_widths_1000.entry(ch).or_insert(w);
                });
            }
        }

        let bb = face.global_bounding_box();
        let cap_height = face
            .capital_height()
            .map(|h| to_1000(h as f32))
            .unwrap_or(700.0);

        Ok(FontEntry {
            ps_name: ps_name.to_string(),
            widths_1000,
            char_widths_1000: Some(char_widths_1000),
            char_to_gid: Some(char_to_gid),
            ascent_1000: to_1000(face.ascender() as f32),
            descent_1000: to_1000(face.descender() as f32),
            cap_height_1000: cap_height,
            bbox_1000: [
                to_1000(bb.x_min as f32),
                to_1000(bb.y_min as f32),
                to_1000(bb.x_max as f32),
                to_1000(bb.y_max as f32),
            ],
            data: Some(data),
        })
    }

    /// A metrics-only entry backed by a WinAnsi width table. The rendered
    /// PDF references a base-14 font instead of embedding a program.
    pub fn with_widths(variant: FontVariant, widths_1000: Vec<f32>) -> FontEntry {
        assert_eq!(widths_1000.len(), 224);
        FontEntry {
            ps_name: variant.fallback_base_font().to_string(),
            widths_1000,
            char_widths_1000: None,
            char_to_gid: None,
            data: None,
            ascent_1000: 750.0,
            descent_1000: -250.0,
            cap_height_1000: 700.0,
            bbox_1000: [-200.0, -250.0, 1100.0, 900.0],
        }
    }

    /// Width of a single character in 1000-units. Uses the cmap-backed map
    /// when present, otherwise the WinAnsi table.
    fn char_width_1000(&self, ch: char) -> f32 {
        if let Some(ref map) = self.char_widths_1000
            && let Some(&w) = map.get(&ch)
        {
            return w;
        }
        let byte = char_to_winansi(ch);
        if byte >= 32 {
            self.widths_1000[(byte - 32) as usize]
        } else {
            0.0
        }
    }

    /// Advance width of `text` at `size` points.
    pub fn text_width(&self, size: f32, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.char_width_1000(ch) * size / 1000.0)
            .sum()
    }

    /// Encode text for a content-stream `Tj`: glyph ids for embedded
    /// faces, WinAnsi bytes otherwise.
    pub(crate) fn encode_text(&self, text: &str) -> Vec<u8> {
        match &self.char_to_gid {
            Some(map) => encode_as_gids(text, map),
            None => to_winansi_bytes(text),
        }
    }
}

/// The resolved regular/bold/italic/bold-italic set used for one document.
pub struct FontSet {
    entries: [FontEntry; 4],
}

impl FontSet {
    /// Load the four Liberation Sans faces from `dir`.
    pub fn load_dir(dir: &Path) -> Result<FontSet, Error> {
        let t0 = std::time::Instant::now();
        let mut loaded = Vec::with_capacity(4);
        for variant in FontVariant::ALL {
            let path = dir.join(variant.file_name());
            let data = std::fs::read(&path).map_err(|source| Error::FontRead {
                path: path.clone(),
                source,
            })?;
            let stem = variant.file_name().trim_end_matches(".ttf");
            loaded.push(FontEntry::from_ttf(stem, &path, data)?);
        }
        let entries = match <[FontEntry; 4]>::try_from(loaded) {
            Ok(e) => e,
            Err(_) => unreachable!("exactly four variants loaded"),
        };
        log::info!(
            "Loaded 4 font faces from {} in {:.1}ms",
            dir.display(),
            t0.elapsed().as_secs_f64() * 1000.0,
        );
        Ok(FontSet { entries })
    }

    /// Build a set from pre-computed entries (metrics-only sets in tests).
    pub fn from_entries(entries: [FontEntry; 4]) -> FontSet {
        FontSet { entries }
    }

    pub fn get(&self, variant: FontVariant) -> &FontEntry {
        &self.entries[variant.index()]
    }

    pub fn text_width(&self, variant: FontVariant, size: f32, text: &str) -> f32 {
        self.get(variant).text_width(size, text)
    }
}

/// Write the font objects for one variant and return its indirect reference.
///
/// Embedded faces become Type0/CID fonts with Identity-H encoding and a
/// ToUnicode CMap; metrics-only entries fall back to a WinAnsi-encoded
/// base-14 font.
pub(crate) fn register_font(
    pdf: &mut Pdf,
    entry: &FontEntry,
    used_chars: &BTreeSet<char>,
    alloc: &mut impl FnMut() -> Ref,
) -> Ref {
    let font_ref = alloc();

    let (Some(data), Some(char_to_gid)) = (&entry.data, &entry.char_to_gid) else {
        log::warn!(
            "No font program for {} — referencing the base font unembedded",
            entry.ps_name,
        );
        pdf.type1_font(font_ref)
            .base_font(Name(entry.ps_name.as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        return font_ref;
    };

    let descriptor_ref = alloc();
    let data_ref = alloc();

    let data_len = data.len() as i32;
    pdf.stream(data_ref, data).pair(Name(b"Length1"), data_len);

    pdf.font_descriptor(descriptor_ref)
        .name(Name(entry.ps_name.as_bytes()))
        .flags(pdf_writer::types::FontFlags::NON_SYMBOLIC)
        .bbox(Rect::new(
            entry.bbox_1000[0],
            entry.bbox_1000[1],
            entry.bbox_1000[2],
            entry.bbox_1000[3],
        ))
        .italic_angle(0.0)
        .ascent(entry.ascent_1000)
        .descent(entry.descent_1000)
        .cap_height(entry.cap_height_1000)
        .stem_v(80.0)
        .font_file2(data_ref);

    let system_info = pdf_writer::types::SystemInfo {
        registry: pdf_writer::Str(b"Adobe"),
        ordering: pdf_writer::Str(b"Identity"),
        supplement: 0,
    };

    let cid_font_ref = alloc();
    {
        let mut cid = pdf.cid_font(cid_font_ref);
        cid.subtype(pdf_writer::types::CidFontType::Type2);
        cid.base_font(Name(entry.ps_name.as_bytes()));
        cid.system_info(system_info);
        cid.font_descriptor(descriptor_ref);
        cid.default_width(0.0);
        cid.cid_to_gid_map_predefined(Name(b"Identity"));

        // Widths for the glyphs this document actually shows, sorted by
        // glyph id so identical input yields identical bytes.
        let mut gid_widths: Vec<(u16, f32)> = used_chars
            .iter()
            .filter_map(|&ch| {
                let gid = *char_to_gid.get(&ch)?;
                Some((gid, entry.char_width_1000(ch)))
            })
            .collect();
        gid_widths.sort_by_key(|&(gid, _)| gid);
        gid_widths.dedup_by_key(|&mut (gid, _)| gid);
        if !gid_widths.is_empty() {
            let mut w = cid.widths();
            for &(gid, width) in &gid_widths {
                w.consecutive(gid, [width]);
            }
        }
    }

    let tounicode_ref = alloc();
    let cmap_name = format!("{}-UTF16", entry.ps_name);
    let mut cmap = pdf_writer::types::UnicodeCmap::new(
        Name(cmap_name.as_bytes()),
        pdf_writer::types::SystemInfo {
            registry: pdf_writer::Str(b"Adobe"),
            ordering: pdf_writer::Str(b"Identity"),
            supplement: 0,
        },
    );
    for &ch in used_chars {
        if let Some(&gid) = char_to_gid.get(&ch) {
            cmap.pair(gid, ch);
        }
    }
    let cmap_data = cmap.finish();
    pdf.stream(tounicode_ref, cmap_data.as_slice());

    pdf.type0_font(font_ref)
        .base_font(Name(entry.ps_name.as_bytes()))
        .encoding_predefined(Name(b"Identity-H"))
        .descendant_font(cid_font_ref)
        .to_unicode(tounicode_ref);

    font_ref
}

/// Windows-1252 (WinAnsi) byte to Unicode char mapping.
/// Bytes 0x80-0x9F are remapped; all others map directly to their codepoint.
fn winansi_to_char(byte: u8) -> char {
    match byte {
        0x80 => '\u{20AC}',
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x8E => '\u{017D}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}', // bullet
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}',
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9E => '\u{017E}',
        0x9F => '\u{0178}',
        _ => byte as char,
    }
}

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007F => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

/// Convert a UTF-8 string to WinAnsi bytes for PDF Str encoding.
/// Unmappable chars are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(|c| {
            let byte = char_to_winansi(c);
            (byte >= 32).then_some(byte)
        })
        .collect()
}

/// Encode UTF-8 text as big-endian 2-byte glyph IDs for CIDFont streams.
fn encode_as_gids(text: &str, char_to_gid: &HashMap<char, u16>) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for ch in text.chars() {
        let gid = char_to_gid.get(&ch).copied().unwrap_or(0);
        out.push((gid >> 8) as u8);
        out.push((gid & 0xFF) as u8);
    }
    out
}

/// Approximate Helvetica widths at 1000 units/em for WinAnsi 32..=255.
pub fn helvetica_widths() -> Vec<f32> {
    (32u8..=255u8)
        .map(|b| match b {
            32 => 278.0,                          // space
            33..=47 => 333.0,                     // punctuation
            48..=57 => 556.0,                     // digits
            58..=64 => 333.0,                     // more punctuation
            73 | 74 => 278.0,                     // I J (narrow uppercase)
            77 => 833.0,                          // M (wide)
            65..=90 => 667.0,                     // uppercase A-Z (average)
            91..=96 => 333.0,                     // brackets etc.
            102 | 105 | 106 | 108 | 116 => 278.0, // narrow lowercase: f i j l t
            109 | 119 => 833.0,                   // m w (wide)
            97..=122 => 556.0,                    // lowercase a-z (average)
            _ => 556.0,
        })
        .collect()
}

/// Replace Unicode super/subscript digits and signs with their ASCII
/// equivalents. Exam types and parameter names arrive with chemistry
/// notation (SpO₂, PaCO₂) the report prints flattened.
pub fn replace_vertical_glyphs(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '₀' | '⁰' => '0',
            '₁' | '¹' => '1',
            '₂' | '²' => '2',
            '₃' | '³' => '3',
            '₄' | '⁴' => '4',
            '₅' | '⁵' => '5',
            '₆' | '⁶' => '6',
            '₇' | '⁷' => '7',
            '₈' | '⁸' => '8',
            '₉' | '⁹' => '9',
            '⁻' => '-',
            '⁺' => '+',
            _ => c,
        })
        .collect()
}
