pub mod errors;

pub use errors::{LcaError, LcaErrorCategory, LcaResult};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Normalization basis for every quantity an assessment reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FunctionalUnit {
    #[default]
    #[serde(rename = "MJ")]
    MegaJoule,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "L")]
    Litre,
}

impl FunctionalUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MegaJoule => "MJ",
            Self::Kilogram => "kg",
            Self::Litre => "L",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "MJ" => Some(Self::MegaJoule),
            "kg" => Some(Self::Kilogram),
            "L" => Some(Self::Litre),
            _ => None,
        }
    }
}

impl Display for FunctionalUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Co2Source {
    #[serde(rename = "DAC")]
    DirectAirCapture,
    Biogenic,
    Industrial,
}

impl Co2Source {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DirectAirCapture => "DAC",
            Self::Biogenic => "biogenic",
            Self::Industrial => "industrial",
        }
    }
}

impl Display for Co2Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Life-cycle stages of the DAC → electrolysis → Fischer-Tropsch pathway, in
/// cradle-to-grave order. The snake_case names key the result breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    CarbonCapture,
    Electrolysis,
    Conversion,
    Distribution,
    UsePhase,
}

impl LifecycleStage {
    pub const ALL: [Self; 5] = [
        Self::CarbonCapture,
        Self::Electrolysis,
        Self::Conversion,
        Self::Distribution,
        Self::UsePhase,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CarbonCapture => "carbon_capture",
            Self::Electrolysis => "electrolysis",
            Self::Conversion => "conversion",
            Self::Distribution => "distribution",
            Self::UsePhase => "use_phase",
        }
    }
}

impl Display for LifecycleStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Identity of a production pathway. Fixed once constructed; the functional
/// unit drives every normalization downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayConfig {
    pub pathway: String,
    pub functional_unit: FunctionalUnit,
    pub co2_source: Co2Source,
}

impl PathwayConfig {
    pub fn new(
        pathway: impl Into<String>,
        functional_unit: FunctionalUnit,
        co2_source: Co2Source,
    ) -> Self {
        Self {
            pathway: pathway.into(),
            functional_unit,
            co2_source,
        }
    }
}
