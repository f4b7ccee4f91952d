#![allow(dead_code)]

use simsuite_pdf::fonts::{FontEntry, FontSet, FontVariant, helvetica_widths};
use simsuite_pdf::model::{
    ExamFinding, ExamReport, LabCategory, LabExamSet, LabTest, Material, PatientState, Scenario,
    ScenarioKind, TimelineStep, VascularAccess, Vitals,
};

/// A metrics-only font set: Helvetica-like widths, nothing embedded.
/// Rendering with it exercises the WinAnsi fallback path and needs no
/// font files on disk.
pub fn metrics_fonts() -> FontSet {
    FontSet::from_entries([
        FontEntry::with_widths(FontVariant::Regular, helvetica_widths()),
        FontEntry::with_widths(FontVariant::Bold, helvetica_widths()),
        FontEntry::with_widths(FontVariant::Italic, helvetica_widths()),
        FontEntry::with_widths(FontVariant::BoldItalic, helvetica_widths()),
    ])
}

pub fn sample_vitals() -> Vitals {
    Vitals {
        blood_pressure: Some("120/80".into()),
        heart_rate: Some(72),
        respiratory_rate: Some(16),
        temperature: 36.5,
        spo2: Some(98),
        fio2: Some(21),
        oxygen_liters: None,
        etco2: Some(35),
    }
}

pub fn sample_scenario() -> Scenario {
    Scenario {
        title: "Shock settico in pronto soccorso".into(),
        authors: "M. Rossi, L. Bianchi".into(),
        target: "Specializzandi di anestesia".into(),
        kind: ScenarioKind::Advanced,
        kind_label: "Scenario avanzato".into(),
        patient_name: "Mario Verdi".into(),
        pediatric: false,
        pathology: Some("Sepsi".into()),
        duration_minutes: 20,

        description: "Paziente con <b>febbre</b> e ipotensione.".into(),
        briefing: "Turno notturno, <i>organico ridotto</i>.".into(),
        parents_info: String::new(),
        classroom_pact: "Quanto accade in aula resta in aula.".into(),
        objectives: "Riconoscere il quadro di <b>shock</b>.".into(),
        moulage: String::new(),
        fluids_and_drugs: "Cristalloidi 30 ml/kg.".into(),
        key_actions: vec![
            "Accesso venoso entro 5 minuti".into(),
            "Emocolture prima degli antibiotici".into(),
        ],
        materials: vec![Material {
            name: "Defibrillatore".into(),
            description: "con piastre pediatriche".into(),
        }],

        patient: Some(PatientState {
            vitals: sample_vitals(),
            monitor: Some("ECG a 5 derivazioni".into()),
            venous_accesses: vec![VascularAccess {
                kind: "Periferico".into(),
                site: "Avambraccio".into(),
                side: "Destro".into(),
                gauge: 18,
            }],
            arterial_accesses: vec![],
        }),
        physical_exam: vec![ExamFinding {
            region: "Torace".into(),
            notes: "Murmure ridotto alla base <b>destra</b>.".into(),
        }],
        timeline: vec![
            TimelineStep {
                id: 0,
                timer_seconds: 300,
                vitals: sample_vitals(),
                additional_params: vec![],
                details: "Il paziente risponde alle domande.".into(),
                parent_role: String::new(),
                action: "Somministrare fluidi".into(),
                t_yes: 1,
                t_no: Some(2),
            },
            TimelineStep {
                id: 1,
                timer_seconds: 600,
                vitals: Vitals::default(),
                additional_params: vec![],
                details: String::new(),
                parent_role: String::new(),
                action: String::new(),
                t_yes: 0,
                t_no: None,
            },
        ],
        exams: vec![ExamReport {
            kind: "ECG".into(),
            report: "Tachicardia sinusale.".into(),
            attachment: Some("ecg_t0.png".into()),
        }],
        script: String::new(),
    }
}

pub fn sample_lab_set() -> LabExamSet {
    LabExamSet {
        categories: vec![LabCategory {
            name: "Emocromo".into(),
            tests: vec![
                LabTest {
                    name: "Emoglobina".into(),
                    value: "13.5".into(),
                    unit: "g/dL".into(),
                    reference_range: "12.0 - 16.0".into(),
                },
                LabTest {
                    name: "Leucociti".into(),
                    value: "15.2".into(),
                    unit: "10^3/uL".into(),
                    reference_range: "4.0 - 10.0".into(),
                },
            ],
        }],
    }
}

/// Inflate every zlib-compressed stream in the document. With a
/// metrics-only font set these are exactly the page content streams.
pub fn content_streams(pdf: &[u8]) -> Vec<String> {
    let mut streams = Vec::new();
    let mut pos = 0;
    while let Some(found) = find(pdf, b"stream", pos) {
        pos = found + 6;
        // Skip matches that are the tail of "endstream".
        if found > 0 && pdf[found - 1] != b'\n' && pdf[found - 1] != b' ' {
            continue;
        }
        let mut data_start = pos;
        if pdf.get(data_start) == Some(&b'\r') {
            data_start += 1;
        }
        if pdf.get(data_start) == Some(&b'\n') {
            data_start += 1;
        }
        let Some(end) = find(pdf, b"endstream", data_start) else {
            break;
        };
        let mut data_end = end;
        while data_end > data_start && (pdf[data_end - 1] == b'\n' || pdf[data_end - 1] == b'\r') {
            data_end -= 1;
        }
        if let Ok(raw) = miniz_oxide::inflate::decompress_to_vec_zlib(&pdf[data_start..data_end]) {
            streams.push(String::from_utf8_lossy(&raw).into_owned());
        }
        pos = end + 9;
    }
    streams
}

/// All inflated content joined, for simple substring assertions.
pub fn all_content(pdf: &[u8]) -> String {
    content_streams(pdf).join("\n")
}

/// Every text baseline (the y operand of `Td`) in the inflated streams.
pub fn baselines(pdf: &[u8]) -> Vec<f32> {
    let mut ys = Vec::new();
    for stream in content_streams(pdf) {
        let tokens: Vec<&str> = stream.split_whitespace().collect();
        for (i, token) in tokens.iter().enumerate() {
            if *token == "Td"
                && i >= 1
                && let Ok(y) = tokens[i - 1].parse::<f32>()
            {
                ys.push(y);
            }
        }
    }
    ys
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| from + i)
}
