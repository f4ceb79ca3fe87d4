//! Sensitivity of the SAF carbon intensity to the electricity source feeding
//! the electrolysis stage.
//!
//! Each scenario runs the engine on an isolated copy of the stage
//! parameters, so the caller's store is never touched and there is no
//! restore step that could be skipped on failure.

use crate::domain::{LcaResult, LifecycleStage, PathwayConfig};
use crate::engine;
use crate::reference::DEFAULT_SWEEP_SOURCES;
use crate::report;
use crate::stages::StageParameters;
use serde::Serialize;

/// One row of the electricity-source comparison table. Emission figures are
/// on the fixed g CO2e/MJ basis regardless of the configured functional unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectricityScenario {
    pub electricity_source: String,
    /// kg CO2e/kWh, re-derived from the source tag.
    pub carbon_intensity: f64,
    pub saf_emissions_g_per_mj: f64,
    pub emission_reduction_pct: f64,
    pub electrolysis_emissions_g_per_mj: f64,
    /// Duplicate of the SAF figure, kept for downstream contribution math.
    pub total_emissions_g_per_mj: f64,
    pub electrolysis_contribution_pct: f64,
}

/// Re-runs the calculation engine once per electricity source, holding every
/// other parameter constant. Engine failures propagate unchanged.
pub fn analyze_electricity_sources(
    config: &PathwayConfig,
    params: &StageParameters,
    sources: Option<&[&str]>,
) -> LcaResult<Vec<ElectricityScenario>> {
    let stages = params.required(&config.pathway)?;
    let energy_density = stages.use_phase.energy_density;
    let baseline_electrolysis = stages.electrolysis.clone();
    let unit = config.functional_unit;

    let sources = sources.unwrap_or(&DEFAULT_SWEEP_SOURCES);
    let mut table = Vec::with_capacity(sources.len());

    for source in sources {
        let mut scenario_params = params.clone();
        let swapped = baseline_electrolysis.with_source(source);
        let carbon_intensity = swapped.electricity_carbon_intensity;
        scenario_params.electrolysis = Some(swapped);

        let results = engine::calculate(config, &scenario_params)?;
        let saf_emissions =
            report::emissions_g_per_mj(results.ghg_emissions.total(), unit, energy_density);
        let electrolysis_emissions = report::emissions_g_per_mj(
            results
                .ghg_emissions
                .get(LifecycleStage::Electrolysis)
                .unwrap_or(0.0),
            unit,
            energy_density,
        );

        table.push(ElectricityScenario {
            electricity_source: source.to_string(),
            carbon_intensity,
            saf_emissions_g_per_mj: saf_emissions,
            emission_reduction_pct: report::emission_reduction_vs_fossil_jet(saf_emissions),
            electrolysis_emissions_g_per_mj: electrolysis_emissions,
            total_emissions_g_per_mj: saf_emissions,
            electrolysis_contribution_pct: 0.0,
        });
    }

    for row in &mut table {
        row.electrolysis_contribution_pct =
            row.electrolysis_emissions_g_per_mj / row.total_emissions_g_per_mj * 100.0;
    }

    Ok(table)
}
