//! Stateful facade over the pure calculation engine.
//!
//! The pathway configuration is fixed at construction; stage records may be
//! overwritten any number of times before a calculation. Cached results are
//! cleared by every setter and fully replaced by every calculation run.

use crate::domain::{LcaResult, PathwayConfig};
use crate::engine::{self, LcaResults};
use crate::report;
use crate::sensitivity::{self, ElectricityScenario};
use crate::stages::{
    CarbonCaptureParameters, ConversionParameters, DistributionParameters, ElectrolysisParameters,
    FeedstockParameters, StageParameters, UsePhaseParameters,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SafLcaModel {
    config: PathwayConfig,
    params: StageParameters,
    results: Option<LcaResults>,
}

impl SafLcaModel {
    pub fn new(config: PathwayConfig) -> Self {
        Self {
            config,
            params: StageParameters::default(),
            results: None,
        }
    }

    pub fn with_parameters(config: PathwayConfig, params: StageParameters) -> Self {
        Self {
            config,
            params,
            results: None,
        }
    }

    pub const fn config(&self) -> &PathwayConfig {
        &self.config
    }

    pub const fn parameters(&self) -> &StageParameters {
        &self.params
    }

    pub const fn results(&self) -> Option<&LcaResults> {
        self.results.as_ref()
    }

    pub fn set_feedstock(&mut self, feedstock: FeedstockParameters) {
        self.params.feedstock = Some(feedstock);
        self.results = None;
    }

    pub fn set_conversion(&mut self, conversion: ConversionParameters) {
        self.params.conversion = Some(conversion);
        self.results = None;
    }

    pub fn set_distribution(&mut self, distribution: DistributionParameters) {
        self.params.distribution = Some(distribution);
        self.results = None;
    }

    pub fn set_use_phase(&mut self, use_phase: UsePhaseParameters) {
        self.params.use_phase = Some(use_phase);
        self.results = None;
    }

    pub fn set_carbon_capture(&mut self, carbon_capture: CarbonCaptureParameters) {
        self.params.carbon_capture = Some(carbon_capture);
        self.results = None;
    }

    pub fn set_electrolysis(&mut self, electrolysis: ElectrolysisParameters) {
        self.params.electrolysis = Some(electrolysis);
        self.results = None;
    }

    /// Runs the engine and replaces the cached results wholesale.
    pub fn calculate(&mut self) -> LcaResult<&LcaResults> {
        let results = engine::calculate(&self.config, &self.params)?;
        Ok(&*self.results.insert(results))
    }

    /// Emission reduction versus a fossil jet reference (g CO2e/MJ),
    /// calculating first when no results are cached.
    pub fn emission_reduction(&mut self, fossil_reference: f64) -> LcaResult<f64> {
        if self.results.is_none() {
            self.calculate()?;
        }
        let stages = self.params.required(&self.config.pathway)?;
        let energy_density = stages.use_phase.energy_density;
        let total_kg = self
            .results
            .as_ref()
            .map_or(0.0, |results| results.ghg_emissions.total());
        let saf_g_per_mj =
            report::emissions_g_per_mj(total_kg, self.config.functional_unit, energy_density);
        Ok(report::emission_reduction(saf_g_per_mj, fossil_reference))
    }

    /// Electricity-source sweep over the current parameter store. The store
    /// itself is never mutated; each scenario works on its own copy.
    pub fn analyze_electricity_sources(
        &self,
        sources: Option<&[&str]>,
    ) -> LcaResult<Vec<ElectricityScenario>> {
        sensitivity::analyze_electricity_sources(&self.config, &self.params, sources)
    }
}
