//! Load Combinations (IRC:6-2017 / IS 800:2007)
//!
//! Limit state load combinations for bridge structures. Ultimate limit
//! state (ULS) factors amplify loads; serviceability (SLS) factors check
//! at or below service level.
//!
//! Reference: IRC:6-2017 Tables 1-6, IS 800:2007 Table 4

use serde::{Deserialize, Serialize};

/// Limit state combinations for bridge design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitState {
    /// Ultimate limit state, basic combination
    UlsBasic,
    /// Ultimate limit state with seismic
    UlsSeismic,
    /// Ultimate limit state with accidental loads
    UlsAccidental,
    /// Serviceability, rare combination
    SlsRare,
    /// Serviceability, frequent combination
    SlsFrequent,
    /// Serviceability, quasi-permanent combination
    SlsQuasiPermanent,
}

impl LimitState {
    /// All limit states for iteration
    pub const ALL: [LimitState; 6] = [
        LimitState::UlsBasic,
        LimitState::UlsSeismic,
        LimitState::UlsAccidental,
        LimitState::SlsRare,
        LimitState::SlsFrequent,
        LimitState::SlsQuasiPermanent,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            LimitState::UlsBasic => "ULS Basic",
            LimitState::UlsSeismic => "ULS Seismic",
            LimitState::UlsAccidental => "ULS Accidental",
            LimitState::SlsRare => "SLS Rare",
            LimitState::SlsFrequent => "SLS Frequent",
            LimitState::SlsQuasiPermanent => "SLS Quasi-permanent",
        }
    }

    /// Partial safety factors for this combination
    pub fn factors(&self) -> PartialSafetyFactors {
        match self {
            LimitState::UlsBasic => PartialSafetyFactors {
                dead_load_favourable: 1.0,
                dead_load_unfavourable: 1.35,
                superimposed_dead_load: 1.35,
                live_load: 1.50,
                wind_load: 1.50,
                temperature: 1.0,
                seismic: 0.0,
                earth_pressure: 1.50,
                braking_force: 1.50,
                centrifugal_force: 1.50,
            },
            LimitState::UlsSeismic => PartialSafetyFactors {
                dead_load_favourable: 1.0,
                dead_load_unfavourable: 1.35,
                superimposed_dead_load: 1.35,
                live_load: 0.75,
                // Wind is not combined with seismic (IRC:6-2017 Cl. 219.5.2)
                wind_load: 0.0,
                temperature: 0.50,
                seismic: 1.50,
                earth_pressure: 1.0,
                braking_force: 0.50,
                centrifugal_force: 0.0,
            },
            LimitState::UlsAccidental => PartialSafetyFactors {
                dead_load_favourable: 1.0,
                dead_load_unfavourable: 1.0,
                superimposed_dead_load: 1.0,
                live_load: 0.75,
                wind_load: 0.0,
                temperature: 0.50,
                seismic: 0.0,
                earth_pressure: 1.0,
                braking_force: 0.75,
                centrifugal_force: 0.0,
            },
            LimitState::SlsRare => PartialSafetyFactors {
                dead_load_favourable: 1.0,
                dead_load_unfavourable: 1.0,
                superimposed_dead_load: 1.0,
                live_load: 1.0,
                wind_load: 1.0,
                temperature: 1.0,
                seismic: 0.0,
                earth_pressure: 1.0,
                braking_force: 1.0,
                centrifugal_force: 1.0,
            },
            LimitState::SlsFrequent => PartialSafetyFactors {
                dead_load_favourable: 1.0,
                dead_load_unfavourable: 1.0,
                superimposed_dead_load: 1.0,
                live_load: 0.75,
                wind_load: 0.50,
                temperature: 0.60,
                seismic: 0.0,
                earth_pressure: 1.0,
                braking_force: 0.75,
                centrifugal_force: 0.75,
            },
            LimitState::SlsQuasiPermanent => PartialSafetyFactors {
                dead_load_favourable: 1.0,
                dead_load_unfavourable: 1.0,
                superimposed_dead_load: 1.0,
                live_load: 0.0,
                wind_load: 0.0,
                temperature: 0.50,
                seismic: 0.0,
                earth_pressure: 1.0,
                braking_force: 0.0,
                centrifugal_force: 0.0,
            },
        }
    }
}

impl std::fmt::Display for LimitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Partial safety factors (gamma_f) applied to characteristic loads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialSafetyFactors {
    pub dead_load_favourable: f64,
    pub dead_load_unfavourable: f64,
    pub superimposed_dead_load: f64,
    pub live_load: f64,
    pub wind_load: f64,
    pub temperature: f64,
    pub seismic: f64,
    pub earth_pressure: f64,
    pub braking_force: f64,
    pub centrifugal_force: f64,
}

/// Factored load components for one limit state combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactoredBreakdown {
    pub dead_load: f64,
    pub superimposed_dead: f64,
    pub live_load: f64,
    pub wind_load: f64,
    pub temperature: f64,
    pub seismic: f64,
    pub braking: f64,
    pub centrifugal: f64,
}

/// Characteristic (unfactored) loads for a bridge load case.
///
/// Components default to zero so a case can name only the loads it has.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeLoadCase {
    pub name: String,
    /// Self-weight of steel (kN or kN/m)
    #[serde(default)]
    pub dead_load: f64,
    /// Wearing coat, railing, services (kN or kN/m)
    #[serde(default)]
    pub superimposed_dead: f64,
    /// Vehicle load (kN or kN/m)
    #[serde(default)]
    pub live_load: f64,
    #[serde(default)]
    pub wind_load: f64,
    #[serde(default)]
    pub temperature_load: f64,
    #[serde(default)]
    pub seismic_load: f64,
    /// Longitudinal braking force (kN)
    #[serde(default)]
    pub braking_load: f64,
    /// Centrifugal force for curved bridges (kN)
    #[serde(default)]
    pub centrifugal_load: f64,
}

impl BridgeLoadCase {
    pub fn new(name: impl Into<String>) -> Self {
        BridgeLoadCase {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Total factored load under the given partial safety factors.
    /// Dead load takes the unfavourable factor.
    pub fn factored_total(&self, factors: &PartialSafetyFactors) -> f64 {
        factors.dead_load_unfavourable * self.dead_load
            + factors.superimposed_dead_load * self.superimposed_dead
            + factors.live_load * self.live_load
            + factors.wind_load * self.wind_load
            + factors.temperature * self.temperature_load
            + factors.seismic * self.seismic_load
            + factors.braking_force * self.braking_load
            + factors.centrifugal_force * self.centrifugal_load
    }

    /// Per-component factored loads under the given factors.
    pub fn factored_breakdown(&self, factors: &PartialSafetyFactors) -> FactoredBreakdown {
        FactoredBreakdown {
            dead_load: factors.dead_load_unfavourable * self.dead_load,
            superimposed_dead: factors.superimposed_dead_load * self.superimposed_dead,
            live_load: factors.live_load * self.live_load,
            wind_load: factors.wind_load * self.wind_load,
            temperature: factors.temperature * self.temperature_load,
            seismic: factors.seismic * self.seismic_load,
            braking: factors.braking_force * self.braking_load,
            centrifugal: factors.centrifugal_force * self.centrifugal_load,
        }
    }

    /// Factored totals for every limit state combination, in the order
    /// of [`LimitState::ALL`]. Useful for finding the governing case.
    pub fn all_combinations(&self) -> Vec<(LimitState, f64)> {
        LimitState::ALL
            .iter()
            .map(|ls| (*ls, self.factored_total(&ls.factors())))
            .collect()
    }

    /// The limit state producing the largest factored total.
    pub fn governing_combination(&self) -> (LimitState, f64) {
        self.all_combinations()
            .into_iter()
            .fold((LimitState::UlsBasic, f64::MIN), |best, cur| {
                if cur.1 > best.1 {
                    cur
                } else {
                    best
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_uls_basic_factors() {
        let f = LimitState::UlsBasic.factors();
        assert_eq!(f.dead_load_unfavourable, 1.35);
        assert_eq!(f.live_load, 1.50);
        assert_eq!(f.seismic, 0.0);
    }

    #[test]
    fn test_sls_rare_is_unit_factors() {
        let f = LimitState::SlsRare.factors();
        assert_eq!(f.dead_load_unfavourable, 1.0);
        assert_eq!(f.live_load, 1.0);
        assert_eq!(f.wind_load, 1.0);
    }

    #[test]
    fn test_factored_total_dead_plus_live() {
        let mut lc = BridgeLoadCase::new("midspan");
        lc.dead_load = 50.0;
        lc.live_load = 120.0;
        let total = lc.factored_total(&LimitState::UlsBasic.factors());
        // 1.35*50 + 1.50*120 = 247.5
        assert!(approx_eq(total, 247.5));
    }

    #[test]
    fn test_governing_is_uls_basic_for_gravity_case() {
        let mut lc = BridgeLoadCase::new("gravity");
        lc.dead_load = 50.0;
        lc.superimposed_dead = 10.0;
        lc.live_load = 120.0;
        let (state, total) = lc.governing_combination();
        assert_eq!(state, LimitState::UlsBasic);
        assert!(total > lc.factored_total(&LimitState::SlsRare.factors()));
    }

    #[test]
    fn test_quasi_permanent_drops_live_load() {
        let mut lc = BridgeLoadCase::new("long_term");
        lc.dead_load = 50.0;
        lc.live_load = 120.0;
        let total = lc.factored_total(&LimitState::SlsQuasiPermanent.factors());
        assert!(approx_eq(total, 50.0));
    }

    #[test]
    fn test_factored_breakdown_components() {
        let mut lc = BridgeLoadCase::new("midspan");
        lc.dead_load = 50.0;
        lc.live_load = 120.0;
        let b = lc.factored_breakdown(&LimitState::UlsBasic.factors());
        assert!(approx_eq(b.dead_load, 67.5));
        assert!(approx_eq(b.live_load, 180.0));
        assert_eq!(b.wind_load, 0.0);
    }

    #[test]
    fn test_all_combinations_count() {
        let lc = BridgeLoadCase::new("empty");
        assert_eq!(lc.all_combinations().len(), 6);
    }

    #[test]
    fn test_load_case_serialization() {
        let mut lc = BridgeLoadCase::new("midspan");
        lc.dead_load = 42.0;
        let json = serde_json::to_string(&lc).unwrap();
        let roundtrip: BridgeLoadCase = serde_json::from_str(&json).unwrap();
        assert_eq!(lc, roundtrip);
    }
}
