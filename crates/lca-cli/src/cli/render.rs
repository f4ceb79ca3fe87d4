//! Text rendering of engine and sweep output. Rounding and display scaling
//! (kg to g CO2e) happen here only; the core stays unrounded.

use super::CliError;
use anyhow::Context;
use lca_core::domain::{LifecycleStage, PathwayConfig};
use lca_core::engine::LcaResults;
use lca_core::sensitivity::ElectricityScenario;
use serde::Serialize;
use std::fmt::Write;

pub(super) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value).context("failed to encode JSON output")?)
}

pub(super) fn assessment_report(
    config: &PathwayConfig,
    results: &LcaResults,
    reduction_pct: f64,
    fossil_reference: f64,
) -> String {
    let unit = config.functional_unit.as_str();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "SAF Life Cycle Assessment: pathway {}, CO2 source {}, per {unit}",
        config.pathway, config.co2_source
    );

    let _ = writeln!(out, "\nGHG Emissions Breakdown (g CO2e/{unit}):");
    for (stage, value) in results.ghg_emissions.iter() {
        let _ = writeln!(out, "  {stage}: {:.2}", value * 1000.0);
    }
    let _ = writeln!(out, "  total: {:.2}", results.ghg_emissions.total() * 1000.0);

    let _ = writeln!(out, "\nEnergy Consumption Breakdown (MJ/{unit}):");
    for (stage, value) in results.energy_consumption.iter() {
        let _ = writeln!(out, "  {stage}: {value:.2}");
    }
    let _ = writeln!(out, "  total: {:.2}", results.energy_consumption.total());

    let _ = writeln!(out, "\nWater Usage Breakdown (L/{unit}):");
    for (stage, value) in results.water_usage.iter() {
        let _ = writeln!(out, "  {stage}: {value:.2}");
    }
    let _ = writeln!(out, "  total: {:.2}", results.water_usage.total());

    let energy_total = results.energy_consumption.total();
    if energy_total > 0.0 {
        let share = |stage: LifecycleStage| {
            results.energy_consumption.get(stage).unwrap_or(0.0) / energy_total * 100.0
        };
        let _ = writeln!(out, "\nEnergy Efficiency Analysis:");
        let _ = writeln!(
            out,
            "  DAC Energy Share: {:.1}%",
            share(LifecycleStage::CarbonCapture)
        );
        let _ = writeln!(
            out,
            "  Electrolysis Energy Share: {:.1}%",
            share(LifecycleStage::Electrolysis)
        );
        let _ = writeln!(
            out,
            "  FT Synthesis Energy Share: {:.1}%",
            share(LifecycleStage::Conversion)
        );
    }

    let _ = writeln!(
        out,
        "\nEmission Reduction vs Fossil Jet ({fossil_reference:.1} g CO2e/MJ): {reduction_pct:.1}%"
    );

    out
}

pub(super) fn sweep_table(table: &[ElectricityScenario]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:>12} {:>12} {:>12} {:>12}",
        "source", "kg CO2e/kWh", "g CO2e/MJ", "reduction %", "elec share %"
    );
    for row in table {
        let _ = writeln!(
            out,
            "{:<16} {:>12.3} {:>12.2} {:>12.1} {:>12.1}",
            row.electricity_source,
            row.carbon_intensity,
            row.saf_emissions_g_per_mj,
            row.emission_reduction_pct,
            row.electrolysis_contribution_pct
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{assessment_report, sweep_table};
    use lca_core::engine::calculate;
    use lca_core::reference::FOSSIL_JET_BASELINE_G_PER_MJ;
    use lca_core::report;
    use lca_core::scenario::Scenario;

    #[test]
    fn assessment_report_lists_every_section() {
        let model = Scenario::ft_dac_demo()
            .into_model()
            .expect("demo must validate");
        let results = calculate(model.config(), model.parameters()).expect("calculation succeeds");
        let saf_g_per_mj = report::emissions_g_per_mj(
            results.ghg_emissions.total(),
            model.config().functional_unit,
            43.0,
        );
        let reduction = report::emission_reduction_vs_fossil_jet(saf_g_per_mj);

        let text = assessment_report(
            model.config(),
            &results,
            reduction,
            FOSSIL_JET_BASELINE_G_PER_MJ,
        );

        assert!(text.contains("GHG Emissions Breakdown (g CO2e/MJ):"));
        assert!(text.contains("Energy Consumption Breakdown (MJ/MJ):"));
        assert!(text.contains("Water Usage Breakdown (L/MJ):"));
        assert!(text.contains("Energy Efficiency Analysis:"));
        assert!(text.contains("carbon_capture"));
        assert!(text.contains("Emission Reduction vs Fossil Jet"));
    }

    #[test]
    fn sweep_table_has_one_line_per_scenario_plus_header() {
        let model = Scenario::ft_dac_demo()
            .into_model()
            .expect("demo must validate");
        let rows = model
            .analyze_electricity_sources(Some(&["wind", "coal"]))
            .expect("sweep succeeds");

        let text = sweep_table(&rows);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("wind"));
        assert!(text.contains("coal"));
    }
}
