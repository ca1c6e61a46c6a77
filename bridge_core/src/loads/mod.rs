//! Bridge loading: IRC vehicle catalog, influence-line moving-load
//! analysis, and limit state load combinations.

pub mod combinations;
pub mod influence;
pub mod vehicles;

pub use combinations::{BridgeLoadCase, FactoredBreakdown, LimitState, PartialSafetyFactors};
pub use influence::{
    analyze_moving_load, find_absolute_max_moment, find_critical_position, load_effect,
    moment_influence_line, shear_influence_line, IlQuantity, InfluenceLine, MovingLoadResults,
    ShearSide,
};
pub use vehicles::{
    congestion_factor, impact_factor, lane_distribution_factor, vehicle_by_name,
    vehicle_for_type, AxleLoad, BridgeType, VehicleLoad, VehicleType,
};
