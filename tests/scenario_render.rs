mod common;

use simsuite_pdf::Branding;
use simsuite_pdf::model::ExportOptions;
use simsuite_pdf::pdf::render_scenario;

#[test]
fn renders_a_valid_single_call_document() {
    let fonts = common::metrics_fonts();
    let scenario = common::sample_scenario();

    let bytes = render_scenario(
        &scenario,
        &ExportOptions::default(),
        &fonts,
        &Branding::default(),
    )
    .expect("render");

    assert!(bytes.starts_with(b"%PDF-"));
    assert!(!common::content_streams(&bytes).is_empty());
}

#[test]
fn output_is_deterministic() {
    let fonts = common::metrics_fonts();
    let scenario = common::sample_scenario();
    let opts = ExportOptions::default();
    let branding = Branding::default();

    let a = render_scenario(&scenario, &opts, &fonts, &branding).expect("render");
    let b = render_scenario(&scenario, &opts, &fonts, &branding).expect("render");
    assert_eq!(a, b);
}

#[test]
fn header_and_sections_appear_in_the_content() {
    let fonts = common::metrics_fonts();
    let scenario = common::sample_scenario();

    let bytes = render_scenario(
        &scenario,
        &ExportOptions::default(),
        &fonts,
        &Branding::default(),
    )
    .expect("render");
    let content = common::all_content(&bytes);

    assert!(content.contains("Dettaglio Scenario"));
    assert!(content.contains("Shock settico in pronto soccorso"));
    assert!(content.contains("Autori: "));
    assert!(content.contains("20 minuti"));
    assert!(content.contains("Descrizione"));
    assert!(content.contains("Stato Paziente"));
    assert!(content.contains("Timeline"));
    // Parentheses are escaped inside PDF literal strings.
    assert!(content.contains("Tempo 0 "));
    assert!(content.contains("5.0 min"));
    assert!(content.contains("Esami e Referti"));
    // Rich text comes out as plain words with the markup resolved.
    assert!(content.contains("febbre"));
    assert!(!content.contains("<b>"));
}

#[test]
fn disabled_sections_are_omitted() {
    let fonts = common::metrics_fonts();
    let scenario = common::sample_scenario();
    let opts = ExportOptions {
        timeline: false,
        exams: false,
        ..ExportOptions::default()
    };

    let bytes =
        render_scenario(&scenario, &opts, &fonts, &Branding::default()).expect("render");
    let content = common::all_content(&bytes);

    assert!(!content.contains("Timeline"));
    assert!(!content.contains("Esami e Referti"));
    assert!(content.contains("Descrizione"));
}

#[test]
fn quick_scenarios_have_no_timeline_even_when_enabled() {
    let fonts = common::metrics_fonts();
    let mut scenario = common::sample_scenario();
    scenario.kind = simsuite_pdf::model::ScenarioKind::Quick;

    let bytes = render_scenario(
        &scenario,
        &ExportOptions::default(),
        &fonts,
        &Branding::default(),
    )
    .expect("render");
    assert!(!common::all_content(&bytes).contains("Timeline"));
}

#[test]
fn missing_vitals_print_placeholders_but_oxygen_lines_are_dropped() {
    let fonts = common::metrics_fonts();
    let mut scenario = common::sample_scenario();
    let patient = scenario.patient.as_mut().unwrap();
    patient.vitals = simsuite_pdf::model::Vitals::default();
    scenario.timeline.clear();

    let bytes = render_scenario(
        &scenario,
        &ExportOptions::default(),
        &fonts,
        &Branding::default(),
    )
    .expect("render");
    let content = common::all_content(&bytes);

    assert!(content.contains("PA: - mmHg"));
    assert!(content.contains("FC: 0 bpm"));
    assert!(content.contains("SpO2: 0%"));
    assert!(content.contains("EtCO2: 0 mmHg"));
    assert!(!content.contains("FiO2"));
    assert!(!content.contains("Litri O2"));
}

#[test]
fn additional_params_print_numbers_with_flattened_names() {
    let fonts = common::metrics_fonts();
    let mut scenario = common::sample_scenario();
    scenario.timeline[0].additional_params = vec![
        simsuite_pdf::model::AdditionalParam {
            name: "PaCO₂".into(),
            value: "45".into(),
            unit: "mmHg".into(),
        },
        simsuite_pdf::model::AdditionalParam {
            name: "Glicemia".into(),
            value: "abc".into(),
            unit: "mg/dL".into(),
        },
    ];

    let bytes = render_scenario(
        &scenario,
        &ExportOptions::default(),
        &fonts,
        &Branding::default(),
    )
    .expect("render");
    let content = common::all_content(&bytes);

    // Subscripts flatten to ASCII; an unparsable value prints as 0.
    assert!(content.contains("PaCO2: 45 mmHg"));
    assert!(content.contains("Glicemia: 0 mg/dL"));
}

#[test]
fn section_titles_stay_above_the_bottom_margin() {
    let fonts = common::metrics_fonts();
    let mut scenario = common::sample_scenario();
    // Long narratives leave the cursor near the page bottom right where
    // the next title is drawn.
    scenario.description = "parola ".repeat(400).trim_end().to_string();
    scenario.briefing = "testo ".repeat(400).trim_end().to_string();
    scenario.objectives = "riga ".repeat(400).trim_end().to_string();

    let bytes = render_scenario(
        &scenario,
        &ExportOptions::default(),
        &fonts,
        &Branding::default(),
    )
    .expect("render");

    for y in common::baselines(&bytes) {
        assert!(
            y >= simsuite_pdf::pdf::page::MARGIN - 0.01,
            "baseline {y} below the bottom margin",
        );
    }
}

#[test]
fn long_narratives_paginate() {
    let fonts = common::metrics_fonts();
    let mut scenario = common::sample_scenario();
    scenario.description = "parola ".repeat(2000);

    let bytes = render_scenario(
        &scenario,
        &ExportOptions::default(),
        &fonts,
        &Branding::default(),
    )
    .expect("render");
    assert!(common::content_streams(&bytes).len() > 1);
}
