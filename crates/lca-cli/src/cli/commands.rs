use super::CliError;
use super::render;
use anyhow::Context;
use clap::ValueEnum;
use lca_core::reference::FOSSIL_JET_BASELINE_G_PER_MJ;
use lca_core::scenario::Scenario;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(super) enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
pub(super) struct RunArgs {
    /// Scenario JSON file
    scenario: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Fossil jet fuel reference intensity (g CO2e/MJ)
    #[arg(long, default_value_t = FOSSIL_JET_BASELINE_G_PER_MJ)]
    fossil_reference: f64,
}

#[derive(clap::Args)]
pub(super) struct SweepArgs {
    /// Scenario JSON file
    scenario: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Electricity source to sweep; repeat to override the default list
    #[arg(long = "source")]
    sources: Vec<String>,
}

#[derive(clap::Args)]
pub(super) struct DemoScenarioArgs {
    /// Destination file; stdout when omitted
    output: Option<PathBuf>,
}

pub(super) fn run_assessment_command(args: RunArgs) -> Result<i32, CliError> {
    tracing::debug!(scenario = %args.scenario.display(), "loading scenario");
    let mut model = Scenario::load(&args.scenario)?.into_model()?;
    model.calculate()?;
    let reduction = model.emission_reduction(args.fossil_reference)?;

    match args.format {
        OutputFormat::Text => {
            let results = model.results().ok_or_else(|| {
                lca_core::domain::LcaError::computation(
                    "CALC.RESULTS_ABSENT",
                    "calculation produced no results",
                )
            })?;
            print!(
                "{}",
                render::assessment_report(model.config(), results, reduction, args.fossil_reference)
            );
        }
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "pathway": model.config().pathway,
                "functional_unit": model.config().functional_unit.as_str(),
                "co2_source": model.config().co2_source.as_str(),
                "results": model.results(),
                "emission_reduction_pct": reduction,
                "fossil_reference_g_per_mj": args.fossil_reference,
            });
            println!("{}", render::to_pretty_json(&payload)?);
        }
    }
    Ok(0)
}

pub(super) fn run_sweep_command(args: SweepArgs) -> Result<i32, CliError> {
    tracing::debug!(scenario = %args.scenario.display(), "loading scenario");
    let model = Scenario::load(&args.scenario)?.into_model()?;

    let source_refs: Vec<&str> = args.sources.iter().map(String::as_str).collect();
    let sources = (!source_refs.is_empty()).then_some(source_refs.as_slice());
    let table = model.analyze_electricity_sources(sources)?;

    match args.format {
        OutputFormat::Text => print!("{}", render::sweep_table(&table)),
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "pathway": model.config().pathway,
                "scenarios": table,
            });
            println!("{}", render::to_pretty_json(&payload)?);
        }
    }
    Ok(0)
}

pub(super) fn run_demo_scenario_command(args: DemoScenarioArgs) -> Result<i32, CliError> {
    let json = Scenario::ft_dac_demo().to_json_pretty()?;
    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create '{}'", parent.display()))?;
                }
            }
            fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("failed to write '{}'", path.display()))?;
        }
        None => println!("{json}"),
    }
    Ok(0)
}
