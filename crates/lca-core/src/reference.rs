//! Static reference tables and pathway constants shared by the calculation
//! engine and the sensitivity analyzer. All data here is process-wide and
//! read-only.

use std::fmt::{Display, Formatter};

/// 1 kWh = 3.6 MJ, used to convert electricity carbon intensity to an MJ basis.
pub const KWH_TO_MJ: f64 = 3.6;

/// Assumed SAF density for the litre-basis normalization (kg/L).
pub const SAF_DENSITY_KG_PER_L: f64 = 0.8;

/// Life-cycle GHG intensity of conventional fossil jet fuel (g CO2e/MJ),
/// per EU RED II.
pub const FOSSIL_JET_BASELINE_G_PER_MJ: f64 = 89.0;

/// Fallback CO:H2 mol ratio for Fischer-Tropsch syngas when a scenario does
/// not specify one.
pub const DEFAULT_CO_H2_RATIO: f64 = 1.0;

/// Fallback syngas demand (kg syngas per kg fuel) when a scenario does not
/// specify one. Pathway-specific assumption, not a generic truth.
pub const DEFAULT_SYNGAS_REQUIREMENT: f64 = 2.5;

/// GWP100 characterization factors (kg CO2e per kg gas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GreenhouseGas {
    Co2,
    Ch4,
    N2o,
}

impl GreenhouseGas {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Co2 => "CO2",
            Self::Ch4 => "CH4",
            Self::N2o => "N2O",
        }
    }

    pub const fn gwp_100(self) -> f64 {
        match self {
            Self::Co2 => 1.0,
            Self::Ch4 => 28.0,
            Self::N2o => 265.0,
        }
    }
}

impl Display for GreenhouseGas {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Carbon intensities of named electricity sources (kg CO2e/kWh).
pub const ELECTRICITY_CARBON_INTENSITIES: [(&str, f64); 14] = [
    ("grid_global", 0.475),
    ("grid_eu", 0.253),
    ("grid_china", 0.638),
    ("grid_us", 0.389),
    ("natural_gas", 0.410),
    ("coal", 0.820),
    ("solar", 0.048),
    ("wind", 0.011),
    ("hydro", 0.024),
    ("nuclear", 0.012),
    ("biomass", 0.230),
    ("renewable_mix", 0.030),
    ("low_carbon_mix", 0.100),
    ("renewable", 0.020),
];

/// Source tag used when an electricity source is not in the table.
pub const FALLBACK_ELECTRICITY_SOURCE: &str = "renewable";

/// Sources swept by the sensitivity analyzer when the caller supplies none.
pub const DEFAULT_SWEEP_SOURCES: [&str; 11] = [
    "renewable_mix",
    "grid_global",
    "grid_eu",
    "grid_us",
    "grid_china",
    "natural_gas",
    "coal",
    "solar",
    "wind",
    "hydro",
    "renewable",
];

pub fn carbon_intensity_for_source(source: &str) -> Option<f64> {
    ELECTRICITY_CARBON_INTENSITIES
        .iter()
        .find(|(tag, _)| *tag == source)
        .map(|(_, intensity)| *intensity)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityResolution {
    pub intensity: f64,
    /// False when the source tag was unknown and the renewable fallback applied.
    pub recognized: bool,
}

/// Resolves an electricity source tag to its carbon intensity. Unknown tags
/// fall back to the generic renewable intensity and emit a warning rather
/// than failing.
pub fn resolve_carbon_intensity(source: &str) -> IntensityResolution {
    match carbon_intensity_for_source(source) {
        Some(intensity) => IntensityResolution {
            intensity,
            recognized: true,
        },
        None => {
            let fallback = carbon_intensity_for_source(FALLBACK_ELECTRICITY_SOURCE)
                .unwrap_or(0.020);
            tracing::warn!(
                source,
                fallback_intensity = fallback,
                "electricity source not recognized, using renewable default"
            );
            IntensityResolution {
                intensity: fallback,
                recognized: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_SWEEP_SOURCES, ELECTRICITY_CARBON_INTENSITIES, FOSSIL_JET_BASELINE_G_PER_MJ,
        GreenhouseGas, KWH_TO_MJ, SAF_DENSITY_KG_PER_L, carbon_intensity_for_source,
        resolve_carbon_intensity,
    };

    #[test]
    fn gwp_factors_match_ar5_values() {
        assert_eq!(GreenhouseGas::Co2.gwp_100(), 1.0);
        assert_eq!(GreenhouseGas::Ch4.gwp_100(), 28.0);
        assert_eq!(GreenhouseGas::N2o.gwp_100(), 265.0);
    }

    #[test]
    fn intensity_table_is_finite_and_positive() {
        for (tag, intensity) in ELECTRICITY_CARBON_INTENSITIES {
            assert!(intensity.is_finite(), "{tag} intensity must be finite");
            assert!(intensity > 0.0, "{tag} intensity must be positive");
        }
        assert!(KWH_TO_MJ > 0.0);
        assert!(SAF_DENSITY_KG_PER_L > 0.0);
        assert!(FOSSIL_JET_BASELINE_G_PER_MJ > 0.0);
    }

    #[test]
    fn default_sweep_sources_all_resolve_from_the_table() {
        for source in DEFAULT_SWEEP_SOURCES {
            assert!(
                carbon_intensity_for_source(source).is_some(),
                "{source} must be in the intensity table"
            );
        }
    }

    #[test]
    fn unknown_source_falls_back_to_renewable_intensity() {
        let resolution = resolve_carbon_intensity("fusion");
        assert!(!resolution.recognized);
        assert_eq!(resolution.intensity, 0.020);

        let known = resolve_carbon_intensity("coal");
        assert!(known.recognized);
        assert_eq!(known.intensity, 0.820);
    }
}
