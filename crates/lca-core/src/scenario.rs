//! JSON scenario files: a pathway configuration plus the six stage records,
//! validated into a [`SafLcaModel`] through the same constructors as the
//! typed API.

use crate::domain::{Co2Source, FunctionalUnit, LcaError, LcaResult, PathwayConfig};
use crate::model::SafLcaModel;
use crate::stages::{
    CarbonCaptureParameters, ConversionParameters, DistributionParameters, ElectrolysisParameters,
    FeedstockParameters, StageParameters, UsePhaseParameters,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub pathway: String,
    /// "MJ", "kg", or "L".
    pub functional_unit: String,
    pub co2_source: Co2Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedstock: Option<FeedstockSpec>,
    pub conversion: ConversionSpec,
    pub distribution: DistributionSpec,
    pub use_phase: UsePhaseSpec,
    pub carbon_capture: CarbonCaptureSpec,
    pub electrolysis: ElectrolysisSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedstockSpec {
    pub feedstock_type: String,
    pub ghg_emissions: f64,
    pub energy_input: f64,
    pub water_usage: f64,
    pub land_use: f64,
    pub yield_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSpec {
    pub technology: String,
    pub efficiency: f64,
    pub ghg_emissions: f64,
    pub energy_input: f64,
    pub water_usage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syngas_requirement: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_h2_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSpec {
    pub transport_distance_km: f64,
    pub transport_mode: String,
    pub ghg_emissions: f64,
    pub energy_input: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsePhaseSpec {
    pub combustion_emissions: f64,
    pub energy_density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonCaptureSpec {
    pub capture_efficiency: f64,
    pub energy_requirement: f64,
    pub ghg_emissions: f64,
    pub water_usage: f64,
    pub co2_capture_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectrolysisSpec {
    pub co2_electrolysis_efficiency: f64,
    pub water_electrolysis_efficiency: f64,
    pub electricity_source: String,
    pub energy_input_co: f64,
    pub energy_input_h2: f64,
    pub water_usage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity_carbon_intensity: Option<f64>,
}

impl Scenario {
    pub fn load(path: &Path) -> LcaResult<Self> {
        let source = fs::read_to_string(path).map_err(|error| {
            LcaError::io_system(
                "IO.SCENARIO_READ",
                format!("failed to read scenario '{}': {error}", path.display()),
            )
        })?;
        Self::from_json(&source)
    }

    pub fn from_json(source: &str) -> LcaResult<Self> {
        serde_json::from_str(source).map_err(|error| {
            LcaError::input_validation(
                "INPUT.SCENARIO_PARSE",
                format!("failed to parse scenario JSON: {error}"),
            )
        })
    }

    pub fn to_json_pretty(&self) -> LcaResult<String> {
        serde_json::to_string_pretty(self).map_err(|error| {
            LcaError::computation(
                "CALC.SCENARIO_ENCODE",
                format!("failed to encode scenario JSON: {error}"),
            )
        })
    }

    /// Validates every record and assembles the pathway model.
    pub fn into_model(self) -> LcaResult<SafLcaModel> {
        let functional_unit = FunctionalUnit::from_tag(&self.functional_unit).ok_or_else(|| {
            LcaError::unsupported_unit(
                "CALC.FUNCTIONAL_UNIT",
                format!(
                    "unsupported functional unit '{}', expected MJ, kg, or L",
                    self.functional_unit
                ),
            )
        })?;
        let config = PathwayConfig::new(self.pathway, functional_unit, self.co2_source);

        let params = StageParameters {
            feedstock: self.feedstock.map(|spec| {
                FeedstockParameters::new(
                    spec.feedstock_type,
                    spec.ghg_emissions,
                    spec.energy_input,
                    spec.water_usage,
                    spec.land_use,
                    spec.yield_rate,
                )
            }),
            conversion: Some(ConversionParameters::new(
                self.conversion.technology,
                self.conversion.efficiency,
                self.conversion.ghg_emissions,
                self.conversion.energy_input,
                self.conversion.water_usage,
                self.conversion.syngas_requirement,
                self.conversion.co_h2_ratio,
            )?),
            distribution: Some(DistributionParameters::new(
                self.distribution.transport_distance_km,
                self.distribution.transport_mode,
                self.distribution.ghg_emissions,
                self.distribution.energy_input,
            )),
            use_phase: Some(UsePhaseParameters::new(
                self.use_phase.combustion_emissions,
                self.use_phase.energy_density,
            )?),
            carbon_capture: Some(CarbonCaptureParameters::new(
                self.carbon_capture.capture_efficiency,
                self.carbon_capture.energy_requirement,
                self.carbon_capture.ghg_emissions,
                self.carbon_capture.water_usage,
                self.carbon_capture.co2_capture_rate,
            )?),
            electrolysis: Some(ElectrolysisParameters::new(
                self.electrolysis.co2_electrolysis_efficiency,
                self.electrolysis.water_electrolysis_efficiency,
                self.electrolysis.electricity_source,
                self.electrolysis.energy_input_co,
                self.electrolysis.energy_input_h2,
                self.electrolysis.water_usage,
                self.electrolysis.electricity_carbon_intensity,
            )?),
        };

        Ok(SafLcaModel::with_parameters(config, params))
    }

    /// Built-in FT/DAC demonstration dataset on an MJ basis, sized for
    /// C12H26 stoichiometry (3.1 kg CO2 and 2.13 kg syngas per kg fuel).
    pub fn ft_dac_demo() -> Self {
        Self {
            pathway: "FT".to_string(),
            functional_unit: "MJ".to_string(),
            co2_source: Co2Source::DirectAirCapture,
            feedstock: None,
            conversion: ConversionSpec {
                technology: "Fischer-Tropsch".to_string(),
                efficiency: 0.65,
                ghg_emissions: 0.2,
                energy_input: 25.0,
                water_usage: 5.0,
                syngas_requirement: Some(2.13),
                co_h2_ratio: Some(0.923),
            },
            distribution: DistributionSpec {
                transport_distance_km: 500.0,
                transport_mode: "truck".to_string(),
                ghg_emissions: 0.05,
                energy_input: 2.0,
            },
            use_phase: UsePhaseSpec {
                // Carbon neutral combustion when the CO2 comes from air.
                combustion_emissions: 0.0,
                energy_density: 43.0,
            },
            carbon_capture: CarbonCaptureSpec {
                capture_efficiency: 80.0,
                energy_requirement: 30.0,
                ghg_emissions: 0.08,
                water_usage: 5.0,
                co2_capture_rate: 3.1,
            },
            electrolysis: ElectrolysisSpec {
                co2_electrolysis_efficiency: 65.0,
                water_electrolysis_efficiency: 75.0,
                electricity_source: "renewable".to_string(),
                energy_input_co: 28.0,
                energy_input_h2: 55.0,
                water_usage: 20.0,
                electricity_carbon_intensity: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scenario;
    use crate::domain::LcaErrorCategory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn demo_scenario_round_trips_through_json() {
        let demo = Scenario::ft_dac_demo();
        let json = demo.to_json_pretty().expect("encoding succeeds");
        let parsed = Scenario::from_json(&json).expect("parsing succeeds");
        assert_eq!(parsed, demo);
    }

    #[test]
    fn demo_scenario_builds_a_calculable_model() {
        let mut model = Scenario::ft_dac_demo()
            .into_model()
            .expect("demo must validate");
        let results = model.calculate().expect("calculation succeeds");
        assert!(results.ghg_emissions.total() > 0.0);
    }

    #[test]
    fn unknown_functional_unit_is_an_unsupported_unit_error() {
        let mut scenario = Scenario::ft_dac_demo();
        scenario.functional_unit = "gallon".to_string();

        let error = scenario.into_model().expect_err("must be rejected");
        assert_eq!(error.category(), LcaErrorCategory::UnsupportedUnitError);
        assert!(error.message().contains("gallon"));
    }

    #[test]
    fn invalid_efficiency_in_a_file_is_rejected_on_load() {
        let mut scenario = Scenario::ft_dac_demo();
        scenario.carbon_capture.capture_efficiency = 0.0;

        let error = scenario.into_model().expect_err("must be rejected");
        assert_eq!(error.code(), "PARAM.PERCENTAGE_RANGE");
    }

    #[test]
    fn load_maps_missing_file_to_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let error = Scenario::load(&temp.path().join("absent.json"))
            .expect_err("missing file must fail");
        assert_eq!(error.category(), LcaErrorCategory::IoSystemError);
    }

    #[test]
    fn load_maps_malformed_json_to_validation_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write succeeds");

        let error = Scenario::load(&path).expect_err("malformed file must fail");
        assert_eq!(error.category(), LcaErrorCategory::InputValidationError);
    }
}
