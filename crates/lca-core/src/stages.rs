//! Validated per-stage parameter records and the store the calculation
//! engine reads them from.
//!
//! Range validation happens here, at construction time, so the engine can
//! divide by efficiencies without guarding every expression. Implicit
//! pathway defaults (CO:H2 ratio, syngas demand) are also resolved here,
//! never inside the calculation formulas.

use crate::domain::{LcaError, LcaResult, LifecycleStage};
use crate::reference::{
    DEFAULT_CO_H2_RATIO, DEFAULT_SYNGAS_REQUIREMENT, resolve_carbon_intensity,
};
use serde::Serialize;

/// Rejects efficiency percentages outside (0, 100]. A zero efficiency would
/// otherwise surface as a division by zero in the actual-quantity inflation.
fn validate_percentage(name: &str, value: f64) -> LcaResult<f64> {
    if value.is_finite() && value > 0.0 && value <= 100.0 {
        Ok(value)
    } else {
        Err(LcaError::input_validation(
            "PARAM.PERCENTAGE_RANGE",
            format!("{name} must be within (0, 100], got {value}"),
        ))
    }
}

fn validate_non_negative(name: &str, value: f64) -> LcaResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LcaError::input_validation(
            "PARAM.NON_NEGATIVE_VALUE",
            format!("{name} must be non-negative, got {value}"),
        ))
    }
}

fn validate_positive(name: &str, value: f64) -> LcaResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LcaError::input_validation(
            "PARAM.POSITIVE_VALUE",
            format!("{name} must be positive, got {value}"),
        ))
    }
}

/// Feedstock production inputs, per kg feedstock. Not consumed by the
/// CO2-to-fuel calculation but carried for pathway generality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedstockParameters {
    pub feedstock_type: String,
    pub ghg_emissions: f64,
    pub energy_input: f64,
    pub water_usage: f64,
    pub land_use: f64,
    pub yield_rate: f64,
}

impl FeedstockParameters {
    pub fn new(
        feedstock_type: impl Into<String>,
        ghg_emissions: f64,
        energy_input: f64,
        water_usage: f64,
        land_use: f64,
        yield_rate: f64,
    ) -> Self {
        Self {
            feedstock_type: feedstock_type.into(),
            ghg_emissions,
            energy_input,
            water_usage,
            land_use,
            yield_rate,
        }
    }
}

/// Fischer-Tropsch conversion inputs, per kg fuel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionParameters {
    pub technology: String,
    pub efficiency: f64,
    pub ghg_emissions: f64,
    pub energy_input: f64,
    pub water_usage: f64,
    /// kg syngas per kg fuel.
    pub syngas_requirement: f64,
    /// mol CO : mol H2, expressed as a ratio.
    pub co_h2_ratio: f64,
}

impl ConversionParameters {
    pub fn new(
        technology: impl Into<String>,
        efficiency: f64,
        ghg_emissions: f64,
        energy_input: f64,
        water_usage: f64,
        syngas_requirement: Option<f64>,
        co_h2_ratio: Option<f64>,
    ) -> LcaResult<Self> {
        let syngas_requirement = match syngas_requirement {
            Some(value) => validate_positive("syngas_requirement", value)?,
            None => DEFAULT_SYNGAS_REQUIREMENT,
        };
        let co_h2_ratio = match co_h2_ratio {
            Some(value) => validate_positive("co_h2_ratio", value)?,
            None => DEFAULT_CO_H2_RATIO,
        };
        Ok(Self {
            technology: technology.into(),
            efficiency,
            ghg_emissions,
            energy_input,
            water_usage,
            syngas_requirement,
            co_h2_ratio,
        })
    }
}

/// Fuel distribution inputs, per kg fuel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionParameters {
    pub transport_distance_km: f64,
    pub transport_mode: String,
    pub ghg_emissions: f64,
    pub energy_input: f64,
}

impl DistributionParameters {
    pub fn new(
        transport_distance_km: f64,
        transport_mode: impl Into<String>,
        ghg_emissions: f64,
        energy_input: f64,
    ) -> Self {
        Self {
            transport_distance_km,
            transport_mode: transport_mode.into(),
            ghg_emissions,
            energy_input,
        }
    }
}

/// Combustion inputs. Energy density is the pivot for MJ-basis normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsePhaseParameters {
    /// kg CO2e per kg fuel burned.
    pub combustion_emissions: f64,
    /// MJ per kg fuel.
    pub energy_density: f64,
}

impl UsePhaseParameters {
    pub fn new(combustion_emissions: f64, energy_density: f64) -> LcaResult<Self> {
        Ok(Self {
            combustion_emissions,
            energy_density: validate_positive("energy_density", energy_density)?,
        })
    }
}

/// Direct Air Capture inputs, per kg CO2 captured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarbonCaptureParameters {
    pub capture_efficiency: f64,
    pub energy_requirement: f64,
    pub ghg_emissions: f64,
    pub water_usage: f64,
    /// kg CO2 required per kg fuel produced (stoichiometric).
    pub co2_capture_rate: f64,
}

impl CarbonCaptureParameters {
    pub fn new(
        capture_efficiency: f64,
        energy_requirement: f64,
        ghg_emissions: f64,
        water_usage: f64,
        co2_capture_rate: f64,
    ) -> LcaResult<Self> {
        Ok(Self {
            capture_efficiency: validate_percentage("capture_efficiency", capture_efficiency)?,
            energy_requirement,
            ghg_emissions,
            water_usage,
            co2_capture_rate: validate_positive("co2_capture_rate", co2_capture_rate)?,
        })
    }
}

/// CO2-to-CO and water-to-H2 electrolysis inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectrolysisParameters {
    pub co2_electrolysis_efficiency: f64,
    pub water_electrolysis_efficiency: f64,
    pub electricity_source: String,
    /// kg CO2e per kWh, resolved at construction.
    pub electricity_carbon_intensity: f64,
    /// MJ per kg CO.
    pub energy_input_co: f64,
    /// MJ per kg H2.
    pub energy_input_h2: f64,
    /// L per kg of CO+H2 produced.
    pub water_usage: f64,
}

impl ElectrolysisParameters {
    /// An explicit carbon intensity always overrides the source-derived
    /// lookup; without one, unrecognized sources fall back to the renewable
    /// intensity with a warning.
    pub fn new(
        co2_electrolysis_efficiency: f64,
        water_electrolysis_efficiency: f64,
        electricity_source: impl Into<String>,
        energy_input_co: f64,
        energy_input_h2: f64,
        water_usage: f64,
        electricity_carbon_intensity: Option<f64>,
    ) -> LcaResult<Self> {
        let electricity_source = electricity_source.into();
        // Zero is a meaningful override here (fully zero-carbon electricity)
        // and the intensity is never a divisor.
        let electricity_carbon_intensity = match electricity_carbon_intensity {
            Some(value) => validate_non_negative("electricity_carbon_intensity", value)?,
            None => resolve_carbon_intensity(&electricity_source).intensity,
        };
        Ok(Self {
            co2_electrolysis_efficiency: validate_percentage(
                "co2_electrolysis_efficiency",
                co2_electrolysis_efficiency,
            )?,
            water_electrolysis_efficiency: validate_percentage(
                "water_electrolysis_efficiency",
                water_electrolysis_efficiency,
            )?,
            electricity_source,
            electricity_carbon_intensity,
            energy_input_co,
            energy_input_h2,
            water_usage,
        })
    }

    /// Copy of these parameters with the electricity source swapped and the
    /// intensity re-derived from the tag. Used by the sensitivity sweep.
    pub fn with_source(&self, source: &str) -> Self {
        let mut swapped = self.clone();
        swapped.electricity_source = source.to_string();
        swapped.electricity_carbon_intensity = resolve_carbon_intensity(source).intensity;
        swapped
    }
}

/// The stage parameter store. Records are set independently and may be
/// overwritten any number of times before a calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StageParameters {
    pub feedstock: Option<FeedstockParameters>,
    pub conversion: Option<ConversionParameters>,
    pub distribution: Option<DistributionParameters>,
    pub use_phase: Option<UsePhaseParameters>,
    pub carbon_capture: Option<CarbonCaptureParameters>,
    pub electrolysis: Option<ElectrolysisParameters>,
}

/// Borrowed view of the five stages the CO2-to-fuel calculation requires.
#[derive(Debug, Clone, Copy)]
pub struct RequiredStages<'a> {
    pub carbon_capture: &'a CarbonCaptureParameters,
    pub electrolysis: &'a ElectrolysisParameters,
    pub conversion: &'a ConversionParameters,
    pub distribution: &'a DistributionParameters,
    pub use_phase: &'a UsePhaseParameters,
}

impl StageParameters {
    pub fn required(&self, pathway: &str) -> LcaResult<RequiredStages<'_>> {
        if let (Some(carbon_capture), Some(electrolysis), Some(conversion), Some(distribution), Some(use_phase)) = (
            self.carbon_capture.as_ref(),
            self.electrolysis.as_ref(),
            self.conversion.as_ref(),
            self.distribution.as_ref(),
            self.use_phase.as_ref(),
        ) {
            return Ok(RequiredStages {
                carbon_capture,
                electrolysis,
                conversion,
                distribution,
                use_phase,
            });
        }

        let slots = [
            (LifecycleStage::CarbonCapture, self.carbon_capture.is_none()),
            (LifecycleStage::Electrolysis, self.electrolysis.is_none()),
            (LifecycleStage::Conversion, self.conversion.is_none()),
            (LifecycleStage::Distribution, self.distribution.is_none()),
            (LifecycleStage::UsePhase, self.use_phase.is_none()),
        ];
        let missing: Vec<&str> = slots
            .iter()
            .filter(|(_, absent)| *absent)
            .map(|(stage, _)| stage.as_str())
            .collect();
        Err(LcaError::missing_data(
            "CALC.MISSING_STAGE",
            format!(
                "pathway '{pathway}' is missing stage data: {}",
                missing.join(", ")
            ),
        ))
    }
}
