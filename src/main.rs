use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use simsuite_pdf::model::{ExportOptions, LabExamSet, Scenario};
use simsuite_pdf::{Branding, Error, FontSet};

/// Export a clinical-simulation scenario as a PDF report.
#[derive(Parser)]
#[command(name = "simsuite-pdf", version, about)]
struct Args {
    /// Scenario description (JSON)
    scenario: PathBuf,

    /// Output PDF path
    #[arg(short, long)]
    output: PathBuf,

    /// Directory containing the LiberationSans-*.ttf faces
    #[arg(long)]
    fonts: PathBuf,

    /// Render the lab exam report from this JSON file instead of the
    /// scenario detail report
    #[arg(long)]
    lab_exams: Option<PathBuf>,

    /// App logo (PNG) for the top-left corner of the first page
    #[arg(long)]
    app_logo: Option<PathBuf>,

    /// Centre logo (PNG) for the first page
    #[arg(long)]
    center_logo: Option<PathBuf>,

    /// Fallback used when the centre logo is missing or unreadable
    #[arg(long)]
    default_center_logo: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), Error> {
    let fonts = FontSet::load_dir(&args.fonts)?;

    let scenario_json = std::fs::read_to_string(&args.scenario)?;
    let scenario: Scenario = serde_json::from_str(&scenario_json).map_err(|source| Error::Json {
        path: args.scenario.clone(),
        source,
    })?;

    if let Some(lab_path) = &args.lab_exams {
        let labs_json = std::fs::read_to_string(lab_path)?;
        let set: LabExamSet = serde_json::from_str(&labs_json).map_err(|source| Error::Json {
            path: lab_path.clone(),
            source,
        })?;
        simsuite_pdf::export_lab_report(&set, &scenario, chrono::Local::now(), &fonts, &args.output)
    } else {
        let branding = Branding {
            app_logo: args.app_logo.clone(),
            center_logo: args.center_logo.clone(),
            default_center_logo: args.default_center_logo.clone(),
        };
        simsuite_pdf::export_scenario(
            &scenario,
            &ExportOptions::default(),
            &fonts,
            &branding,
            &args.output,
        )
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
