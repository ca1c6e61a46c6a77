//! Design Report Structures
//!
//! The fixed, typed output record of a design run. Downstream consumers
//! (CLI, report generators, web layers) read this record as-is; nothing
//! calls back into the engine mid-computation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capacity::{DeflectionCheck, MomentCapacity, ShearCapacity, WebBearingCheck};
use crate::design::input::PlateGirderInput;
use crate::design::sizing::InitialDimensions;
use crate::loads::influence::MovingLoadResults;
use crate::section::PlateGirderSection;

/// How the plate dimensions were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingMethod {
    Auto,
    UserSpecified,
}

/// Dead load buildup per girder, all as linear loads (kN/m).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadLoadBreakdown {
    pub girder_self_weight_kn_m: f64,
    pub deck_slab_kn_m: f64,
    pub cross_beams_kn_m: f64,
    pub wearing_coat_kn_m: f64,
    pub crash_barrier_kn_m: f64,
    /// Structural dead load (self-weight + deck + cross beams)
    pub total_dead_kn_m: f64,
    /// Superimposed dead load (wearing coat + barrier)
    pub total_superimposed_kn_m: f64,
}

/// Midspan moment and support shear from the dead load UDL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadLoadEffects {
    pub total_udl_kn_m: f64,
    pub midspan_moment_knm: f64,
    pub support_shear_kn: f64,
}

/// Moving-load analysis echo: vehicle, impact, and raw envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingLoadAnalysis {
    pub span_m: f64,
    pub impact_factor: f64,
    /// IRC designation of the analysed vehicle
    pub vehicle_class: String,
    pub results: MovingLoadResults,
}

/// Per-girder live load effects after lane distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveLoadEffects {
    pub max_moment_knm: f64,
    pub max_shear_kn: f64,
    /// lanes loaded / number of girders
    pub distribution_factor: f64,
}

/// Factored ULS design forces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoredForces {
    pub factored_moment_knm: f64,
    pub factored_shear_kn: f64,
    pub gamma_dead: f64,
    pub gamma_live: f64,
}

/// Demand-to-capacity summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utilization {
    /// Factored moment / governing moment capacity
    pub moment_ratio: f64,
    /// Factored shear / design shear capacity
    pub shear_ratio: f64,
    /// "PASS" when moment, shear, and deflection are all adequate
    pub status: String,
}

/// Complete result record of a plate girder design run.
///
/// A structurally inadequate design still produces a complete report:
/// capacity exceedances land in `errors` and the verdict in
/// `utilization.status`, so one run surfaces every failing check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    /// Unique report identifier
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,

    /// Echo of the validated input
    pub input: PlateGirderInput,

    pub sizing_method: SizingMethod,
    pub initial_dimensions: InitialDimensions,
    pub section_properties: PlateGirderSection,
    /// Girder self-weight (kN/m)
    pub weight_per_meter_kn: f64,

    pub dead_loads: DeadLoadBreakdown,
    pub dead_load_effects: DeadLoadEffects,

    /// None when the moving-load analysis failed (see warnings)
    pub live_load_analysis: Option<MovingLoadAnalysis>,
    pub live_load_effects: Option<LiveLoadEffects>,

    pub factored_forces: FactoredForces,
    pub moment_capacity: MomentCapacity,
    pub shear_capacity: ShearCapacity,
    pub deflection: DeflectionCheck,
    pub web_bearing: WebBearingCheck,

    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub utilization: Utilization,

    /// "completed" once the pipeline has run to the end
    pub status: String,
}

impl DesignReport {
    /// True when every strength and serviceability check passed
    pub fn is_adequate(&self) -> bool {
        self.utilization.status == "PASS"
    }
}
