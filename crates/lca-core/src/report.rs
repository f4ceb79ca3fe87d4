//! Benchmarking of assessment output against the fossil jet fuel baseline.

use crate::domain::FunctionalUnit;
use crate::reference::FOSSIL_JET_BASELINE_G_PER_MJ;

/// Converts a total GHG figure (kg CO2e per functional unit) to the fixed
/// g CO2e/MJ comparison basis. Non-MJ units divide by the fuel energy
/// density (MJ/kg) to reach a per-MJ figure.
pub fn emissions_g_per_mj(total_kg: f64, unit: FunctionalUnit, energy_density: f64) -> f64 {
    match unit {
        FunctionalUnit::MegaJoule => total_kg * 1000.0,
        FunctionalUnit::Kilogram | FunctionalUnit::Litre => total_kg * 1000.0 / energy_density,
    }
}

/// Emission reduction relative to a fossil jet fuel reference, in percent.
pub fn emission_reduction(saf_g_per_mj: f64, fossil_reference: f64) -> f64 {
    (fossil_reference - saf_g_per_mj) / fossil_reference * 100.0
}

/// Reduction against the default 89.0 g CO2e/MJ conventional jet baseline.
pub fn emission_reduction_vs_fossil_jet(saf_g_per_mj: f64) -> f64 {
    emission_reduction(saf_g_per_mj, FOSSIL_JET_BASELINE_G_PER_MJ)
}
