//! Data model for scenario exports.
//!
//! These are plain aggregates: the renderer never fetches anything, the
//! caller assembles the full scenario (or lab exam set) up front. All
//! types deserialize from JSON when the `serde` feature is on, which is
//! how the CLI feeds the engine.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScenarioKind {
    Quick,
    Advanced,
    PatientSimulated,
}

impl ScenarioKind {
    /// Whether the scenario carries a timeline (quick scenarios do not).
    pub fn has_timeline(self) -> bool {
        matches!(self, ScenarioKind::Advanced | ScenarioKind::PatientSimulated)
    }

    /// Whether the scenario carries a script ("sceneggiatura").
    pub fn has_script(self) -> bool {
        self == ScenarioKind::PatientSimulated
    }
}

/// Vital signs shared between the patient baseline (T0) and timeline steps.
///
/// `None` integer values print as 0, a missing blood pressure prints as "-".
/// FiO2 and supplemental oxygen are only printed when positive.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub blood_pressure: Option<String>,
    pub heart_rate: Option<i32>,
    pub respiratory_rate: Option<i32>,
    pub temperature: f64,
    pub spo2: Option<i32>,
    pub fio2: Option<i32>,
    pub oxygen_liters: Option<f64>,
    pub etco2: Option<i32>,
}

/// A venous or arterial access line.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VascularAccess {
    pub kind: String,
    pub site: String,
    pub side: String,
    pub gauge: i32,
}

/// Patient state at T0.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientState {
    pub vitals: Vitals,
    pub monitor: Option<String>,
    pub venous_accesses: Vec<VascularAccess>,
    pub arterial_accesses: Vec<VascularAccess>,
}

/// One region of the physical examination, with free-form rich-text notes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExamFinding {
    pub region: String,
    pub notes: String,
}

/// An extra monitored parameter attached to a timeline step (e.g. glycemia).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdditionalParam {
    pub name: String,
    pub value: String,
    pub unit: String,
}

/// A step of the scenario timeline.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineStep {
    pub id: i32,
    /// Step duration in seconds; printed in minutes.
    pub timer_seconds: i64,
    pub vitals: Vitals,
    pub additional_params: Vec<AdditionalParam>,
    pub details: String,
    pub parent_role: String,
    /// Action required to move on, and the step reached when it is taken.
    pub action: String,
    pub t_yes: i32,
    /// Step reached when the action is not taken, if such a transition exists.
    pub t_no: Option<i32>,
}

/// A diagnostic exam with its textual report and optional attachment name.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExamReport {
    pub kind: String,
    pub report: String,
    pub attachment: Option<String>,
}

/// A required material item.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    pub name: String,
    pub description: String,
}

/// The full scenario aggregate consumed by the renderer.
///
/// Narrative fields (description, briefing, ...) hold the rich-text
/// subset (`<b>`, `<strong>`, `<i>`, `<em>`); empty strings mean the
/// section is absent and is skipped.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub title: String,
    pub authors: String,
    pub target: String,
    pub kind: ScenarioKind,
    /// Scenario type label shown in the header ("Tipologia").
    pub kind_label: String,
    pub patient_name: String,
    pub pediatric: bool,
    pub pathology: Option<String>,
    pub duration_minutes: i32,

    pub description: String,
    pub briefing: String,
    pub parents_info: String,
    pub classroom_pact: String,
    pub objectives: String,
    pub moulage: String,
    pub fluids_and_drugs: String,
    pub key_actions: Vec<String>,
    pub materials: Vec<Material>,

    pub patient: Option<PatientState>,
    pub physical_exam: Vec<ExamFinding>,
    pub timeline: Vec<TimelineStep>,
    pub exams: Vec<ExamReport>,
    pub script: String,
}

/// A single laboratory test row.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabTest {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabCategory {
    pub name: String,
    pub tests: Vec<LabTest>,
}

/// The lab exam report document input.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabExamSet {
    pub categories: Vec<LabCategory>,
}

/// Per-section toggles for the scenario export. Everything defaults to on.
#[derive(Clone, Copy, Debug)]
pub struct ExportOptions {
    pub description: bool,
    pub briefing: bool,
    pub parents_info: bool,
    pub classroom_pact: bool,
    pub key_actions: bool,
    pub objectives: bool,
    pub moulage: bool,
    pub fluids_and_drugs: bool,
    pub materials: bool,
    pub vital_params: bool,
    pub accesses: bool,
    pub physical_exam: bool,
    pub exams: bool,
    pub timeline: bool,
    pub script: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            description: true,
            briefing: true,
            parents_info: true,
            classroom_pact: true,
            key_actions: true,
            objectives: true,
            moulage: true,
            fluids_and_drugs: true,
            materials: true,
            vital_params: true,
            accesses: true,
            physical_exam: true,
            exams: true,
            timeline: true,
            script: true,
        }
    }
}
