//! Cradle-to-grave life cycle assessment for a Sustainable Aviation Fuel
//! pathway built on Direct Air Capture, CO2/water electrolysis, and
//! Fischer-Tropsch synthesis.
//!
//! The calculation engine is a pure function over validated stage
//! parameters; the sensitivity analyzer sweeps electricity-source carbon
//! intensity through it; the model facade adds the stateful set/calculate
//! lifecycle. Presentation (tables, charts) lives outside this crate and
//! consumes the result breakdowns as plain data.

pub mod domain;
pub mod engine;
pub mod model;
pub mod reference;
pub mod report;
pub mod scenario;
pub mod sensitivity;
pub mod stages;

pub use domain::{
    Co2Source, FunctionalUnit, LcaError, LcaErrorCategory, LcaResult, LifecycleStage,
    PathwayConfig,
};
pub use engine::{LcaResults, StageBreakdown, calculate};
pub use model::SafLcaModel;
pub use scenario::Scenario;
pub use sensitivity::{ElectricityScenario, analyze_electricity_sources};
