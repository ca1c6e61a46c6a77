//! IRC:6-2017 Vehicle Loading Catalog
//!
//! Standard vehicle load trains for highway bridge design:
//! - Class A (standard two-lane loading)
//! - Class B (single lane / minor road loading)
//! - Class AA (heavy loading, tracked and wheeled)
//! - Class 70R (special heavy vehicle: wheeled, tracked, bogie)
//!
//! Tracked vehicles are modelled as five equivalent point loads per track
//! so the same influence-line machinery handles every vehicle class.
//!
//! Reference: IRC:6-2017, Annexure A

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// IRC vehicle classification types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    ClassA,
    ClassB,
    ClassAaTracked,
    ClassAaWheeled,
    Class70RWheeled,
    Class70RTracked,
    Class70RBogie,
}

impl VehicleType {
    /// All vehicle types for iteration
    pub const ALL: [VehicleType; 7] = [
        VehicleType::ClassA,
        VehicleType::ClassB,
        VehicleType::ClassAaTracked,
        VehicleType::ClassAaWheeled,
        VehicleType::Class70RWheeled,
        VehicleType::Class70RTracked,
        VehicleType::Class70RBogie,
    ];

    /// IRC designation string
    pub fn code(&self) -> &'static str {
        match self {
            VehicleType::ClassA => "CLASS_A",
            VehicleType::ClassB => "CLASS_B",
            VehicleType::ClassAaTracked => "CLASS_AA_TRACKED",
            VehicleType::ClassAaWheeled => "CLASS_AA_WHEELED",
            VehicleType::Class70RWheeled => "CLASS_70R_WHEELED",
            VehicleType::Class70RTracked => "CLASS_70R_TRACKED",
            VehicleType::Class70RBogie => "CLASS_70R_BOGIE",
        }
    }

    /// True for track-pad vehicles (tank-type loading)
    pub fn is_tracked(&self) -> bool {
        matches!(
            self,
            VehicleType::ClassAaTracked | VehicleType::Class70RTracked
        )
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Single axle load definition. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxleLoad {
    /// Axle load in kN
    pub load_kn: f64,
    /// Distance from the front of the vehicle in m
    pub position_m: f64,
    /// Tire contact width in m (transverse)
    pub contact_width_m: f64,
    /// Tire contact length in m (along traffic direction)
    pub contact_length_m: f64,
}

impl AxleLoad {
    /// Axle with the standard 0.25 x 0.50 m contact patch
    pub fn new(load_kn: f64, position_m: f64) -> Self {
        AxleLoad {
            load_kn,
            position_m,
            contact_width_m: 0.25,
            contact_length_m: 0.50,
        }
    }
}

/// Complete vehicle load configuration.
///
/// Axle positions are non-decreasing from the vehicle front. The total
/// load is derived from the axles, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleLoad {
    pub vehicle_type: VehicleType,
    pub axles: Vec<AxleLoad>,
    /// Overall vehicle length in m
    pub total_length_m: f64,
    /// Minimum nose-to-tail gap between successive vehicles in the same lane (m)
    pub min_spacing_same_lane_m: f64,
    /// Ground contact area per wheel/track: (width, length) in m
    pub ground_contact_area: (f64, f64),
}

impl VehicleLoad {
    /// Total vehicle weight in kN (sum of axle loads)
    pub fn total_load_kn(&self) -> f64 {
        self.axles.iter().map(|a| a.load_kn).sum()
    }

    /// Axle positions from the vehicle front
    pub fn axle_positions(&self) -> Vec<f64> {
        self.axles.iter().map(|a| a.position_m).collect()
    }

    /// Number of axles
    pub fn num_axles(&self) -> usize {
        self.axles.len()
    }
}

/// IRC Class A loading train.
///
/// Standard two-lane loading for highways and permanent bridges.
/// From the front: 2 axles of 27 kN at 1.1 m spacing, 3.2 m gap,
/// 2 axles of 114 kN at 1.2 m, 4.3 m gap, 4 axles of 68 kN at 3.0 m.
/// Train length approximately 20.3 m.
///
/// Reference: IRC:6-2017, Annexure A, Fig. 1
pub fn class_a_train() -> VehicleLoad {
    VehicleLoad {
        vehicle_type: VehicleType::ClassA,
        axles: vec![
            AxleLoad::new(27.0, 0.0),
            AxleLoad::new(27.0, 1.1),
            AxleLoad::new(114.0, 1.1 + 3.2),
            AxleLoad::new(114.0, 1.1 + 3.2 + 1.2),
            AxleLoad::new(68.0, 1.1 + 3.2 + 1.2 + 4.3),
            AxleLoad::new(68.0, 1.1 + 3.2 + 1.2 + 4.3 + 3.0),
            AxleLoad::new(68.0, 1.1 + 3.2 + 1.2 + 4.3 + 6.0),
            AxleLoad::new(68.0, 1.1 + 3.2 + 1.2 + 4.3 + 9.0),
        ],
        total_length_m: 20.3,
        min_spacing_same_lane_m: 18.5,
        ground_contact_area: (0.25, 0.50),
    }
}

/// IRC Class B loading train.
///
/// Lighter loading for minor roads and temporary bridges. Same axle
/// geometry as Class A with 16/68/41 kN axle groups.
///
/// Reference: IRC:6-2017, Annexure A, Fig. 2
pub fn class_b_train() -> VehicleLoad {
    VehicleLoad {
        vehicle_type: VehicleType::ClassB,
        axles: vec![
            AxleLoad::new(16.0, 0.0),
            AxleLoad::new(16.0, 1.1),
            AxleLoad::new(68.0, 1.1 + 3.2),
            AxleLoad::new(68.0, 1.1 + 3.2 + 1.2),
            AxleLoad::new(41.0, 1.1 + 3.2 + 1.2 + 4.3),
            AxleLoad::new(41.0, 1.1 + 3.2 + 1.2 + 4.3 + 3.0),
            AxleLoad::new(41.0, 1.1 + 3.2 + 1.2 + 4.3 + 6.0),
            AxleLoad::new(41.0, 1.1 + 3.2 + 1.2 + 4.3 + 9.0),
        ],
        total_length_m: 20.3,
        min_spacing_same_lane_m: 18.5,
        ground_contact_area: (0.25, 0.50),
    }
}

/// Model a track pad as equivalent point loads for IL analysis.
fn tracked_vehicle(
    vehicle_type: VehicleType,
    track_load_kn: f64,
    track_length_m: f64,
    total_length_m: f64,
    contact: (f64, f64),
) -> VehicleLoad {
    let num_points = 5;
    let point_spacing = track_length_m / (num_points - 1) as f64;
    let point_load = track_load_kn / num_points as f64;

    let axles = (0..num_points)
        .map(|i| AxleLoad::new(point_load, i as f64 * point_spacing))
        .collect();

    VehicleLoad {
        vehicle_type,
        axles,
        total_length_m,
        min_spacing_same_lane_m: 30.0,
        ground_contact_area: contact,
    }
}

/// IRC Class AA tracked vehicle (tank-type loading).
///
/// Two track pads, each 3.6 m long x 0.85 m wide, 700 kN total.
///
/// Reference: IRC:6-2017, Annexure A, Fig. 3
pub fn class_aa_tracked() -> VehicleLoad {
    tracked_vehicle(VehicleType::ClassAaTracked, 350.0, 3.6, 7.2, (3.6, 0.85))
}

/// IRC Class AA wheeled vehicle, 400 kN over 4 axles.
///
/// Reference: IRC:6-2017, Annexure A, Fig. 3A
pub fn class_aa_wheeled() -> VehicleLoad {
    VehicleLoad {
        vehicle_type: VehicleType::ClassAaWheeled,
        axles: vec![
            AxleLoad::new(62.5, 0.0),
            AxleLoad::new(62.5, 1.2),
            AxleLoad::new(125.0, 1.2 + 2.79),
            AxleLoad::new(125.0, 1.2 + 2.79 + 1.2),
        ],
        total_length_m: 8.19,
        min_spacing_same_lane_m: 30.0,
        ground_contact_area: (0.30, 0.15),
    }
}

/// IRC Class 70R wheeled vehicle.
///
/// Heavy loading for National Highways: 2 steering axles of 80 kN at
/// 1.37 m, a 4.57 m gap, then 5 bogie axles of 170 kN at 1.37 m spacing.
/// Approximately 1010 kN over 15.22 m.
///
/// Reference: IRC:6-2017, Annexure A, Fig. 5
pub fn class_70r_wheeled() -> VehicleLoad {
    VehicleLoad {
        vehicle_type: VehicleType::Class70RWheeled,
        axles: vec![
            AxleLoad::new(80.0, 0.0),
            AxleLoad::new(80.0, 1.37),
            AxleLoad::new(170.0, 1.37 + 4.57),
            AxleLoad::new(170.0, 1.37 + 4.57 + 1.37),
            AxleLoad::new(170.0, 1.37 + 4.57 + 2.74),
            AxleLoad::new(170.0, 1.37 + 4.57 + 4.11),
            AxleLoad::new(170.0, 1.37 + 4.57 + 5.48),
        ],
        total_length_m: 15.22,
        min_spacing_same_lane_m: 30.0,
        ground_contact_area: (0.86, 0.263),
    }
}

/// IRC Class 70R tracked vehicle: two 4.57 m x 0.85 m pads, 700 kN total.
///
/// Reference: IRC:6-2017, Annexure A, Fig. 4
pub fn class_70r_tracked() -> VehicleLoad {
    tracked_vehicle(
        VehicleType::Class70RTracked,
        350.0,
        4.57,
        7.92,
        (4.57, 0.85),
    )
}

/// IRC Class 70R bogie loading: two 200 kN axles at 1.22 m.
///
/// Reference: IRC:6-2017, Annexure A, Fig. 6
pub fn class_70r_bogie() -> VehicleLoad {
    VehicleLoad {
        vehicle_type: VehicleType::Class70RBogie,
        axles: vec![
            AxleLoad {
                load_kn: 200.0,
                position_m: 0.0,
                contact_width_m: 0.38,
                contact_length_m: 0.15,
            },
            AxleLoad {
                load_kn: 200.0,
                position_m: 1.22,
                contact_width_m: 0.38,
                contact_length_m: 0.15,
            },
        ],
        total_length_m: 4.87,
        min_spacing_same_lane_m: 30.0,
        ground_contact_area: (0.38, 0.15),
    }
}

/// Build the vehicle for a given type.
pub fn vehicle_for_type(vehicle_type: VehicleType) -> VehicleLoad {
    match vehicle_type {
        VehicleType::ClassA => class_a_train(),
        VehicleType::ClassB => class_b_train(),
        VehicleType::ClassAaTracked => class_aa_tracked(),
        VehicleType::ClassAaWheeled => class_aa_wheeled(),
        VehicleType::Class70RWheeled => class_70r_wheeled(),
        VehicleType::Class70RTracked => class_70r_tracked(),
        VehicleType::Class70RBogie => class_70r_bogie(),
    }
}

/// Alias table for IRC designations. Bare CLASS_70R means the wheeled
/// configuration; bare CLASS_AA means tracked.
static VEHICLE_ALIASES: Lazy<HashMap<&'static str, VehicleType>> = Lazy::new(|| {
    HashMap::from([
        ("CLASS_A", VehicleType::ClassA),
        ("CLASS_B", VehicleType::ClassB),
        ("CLASS_70R", VehicleType::Class70RWheeled),
        ("CLASS_70R_WHEELED", VehicleType::Class70RWheeled),
        ("CLASS_70R_TRACKED", VehicleType::Class70RTracked),
        ("CLASS_70R_BOGIE", VehicleType::Class70RBogie),
        ("CLASS_AA", VehicleType::ClassAaTracked),
        ("CLASS_AA_TRACKED", VehicleType::ClassAaTracked),
        ("CLASS_AA_WHEELED", VehicleType::ClassAaWheeled),
    ])
});

/// Look up a vehicle by its IRC designation string (case-insensitive).
pub fn vehicle_by_name(name: &str) -> CalcResult<VehicleLoad> {
    VEHICLE_ALIASES
        .get(name.to_uppercase().as_str())
        .map(|vt| vehicle_for_type(*vt))
        .ok_or_else(|| CalcError::vehicle_not_found(name))
}

/// Bridge superstructure material, used for the impact-factor formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeType {
    Steel,
    Concrete,
    Composite,
}

/// Impact factor (dynamic amplification) per IRC:6-2017, Clause 211.2.
///
/// Returned as a multiplier on live load, e.g. 1.25 means a 25% increase.
/// For Class A/B the factor follows the 9/(13.5+L) steel formula (or
/// 4.5/(6+L) for concrete); Class AA/70R use 25% up to 9 m span, tapering
/// linearly to 10% at 45 m. The increment never drops below 10%.
///
/// ```rust
/// use bridge_core::loads::vehicles::{impact_factor, BridgeType, VehicleType};
///
/// let f = impact_factor(BridgeType::Steel, 10.0, VehicleType::ClassA);
/// assert!((f - 1.383).abs() < 0.001);
/// ```
pub fn impact_factor(bridge_type: BridgeType, span_m: f64, vehicle_type: VehicleType) -> f64 {
    let increment = match vehicle_type {
        VehicleType::ClassA | VehicleType::ClassB => match bridge_type {
            BridgeType::Steel => 9.0 / (13.5 + span_m),
            BridgeType::Concrete => 4.5 / (6.0 + span_m),
            BridgeType::Composite => {
                (9.0 / (13.5 + span_m) + 4.5 / (6.0 + span_m)) / 2.0
            }
        },
        VehicleType::ClassAaTracked
        | VehicleType::ClassAaWheeled
        | VehicleType::Class70RWheeled
        | VehicleType::Class70RTracked
        | VehicleType::Class70RBogie => {
            if span_m <= 9.0 {
                0.25
            } else {
                // 25% at 9 m reducing linearly to 10% at 45 m
                (0.25 - (span_m - 9.0) * (0.15 / 36.0)).max(0.10)
            }
        }
    };

    1.0 + increment.max(0.10)
}

/// Lane reduction factor for simultaneous multi-lane loading.
///
/// Reference: IRC:6-2017, Clause 208.3
pub fn lane_distribution_factor(num_lanes: u32) -> f64 {
    match num_lanes {
        0 | 1 | 2 => 1.0,
        3 => 0.9,
        _ => 0.75,
    }
}

/// Congestion factor for long-span bridges.
///
/// Reference: IRC:6-2017, Clause 209
pub fn congestion_factor(span_m: f64) -> f64 {
    if span_m <= 10.0 {
        1.0
    } else if span_m <= 40.0 {
        1.0 + 0.15 * (span_m - 10.0) / 30.0
    } else {
        1.15
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_a_total_load() {
        let v = class_a_train();
        assert_eq!(v.num_axles(), 8);
        // 2*27 + 2*114 + 4*68 = 554 kN
        assert!((v.total_load_kn() - 554.0).abs() < 0.01);
    }

    #[test]
    fn test_class_b_total_load() {
        let v = class_b_train();
        assert_eq!(v.num_axles(), 8);
        // 2*16 + 2*68 + 4*41 = 332 kN
        assert!((v.total_load_kn() - 332.0).abs() < 0.01);
    }

    #[test]
    fn test_class_70r_wheeled_total_load() {
        let v = class_70r_wheeled();
        assert_eq!(v.num_axles(), 7);
        // 2*80 + 5*170 = 1010 kN
        assert!((v.total_load_kn() - 1010.0).abs() < 0.01);
    }

    #[test]
    fn test_tracked_vehicles_total_load() {
        for v in [class_aa_tracked(), class_70r_tracked()] {
            assert_eq!(v.num_axles(), 5);
            assert!((v.total_load_kn() - 350.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_bogie_total_load() {
        let v = class_70r_bogie();
        assert!((v.total_load_kn() - 400.0).abs() < 0.01);
        assert_eq!(v.axles[1].position_m, 1.22);
    }

    #[test]
    fn test_axle_positions_non_decreasing() {
        for vt in VehicleType::ALL {
            let v = vehicle_for_type(vt);
            let positions = v.axle_positions();
            for pair in positions.windows(2) {
                assert!(
                    pair[1] >= pair[0],
                    "{} axle positions must be non-decreasing",
                    vt
                );
            }
            // No axle beyond the stated vehicle length
            assert!(positions.last().unwrap() <= &v.total_length_m);
        }
    }

    #[test]
    fn test_vehicle_by_name_aliases() {
        assert_eq!(
            vehicle_by_name("CLASS_70R").unwrap().vehicle_type,
            VehicleType::Class70RWheeled
        );
        assert_eq!(
            vehicle_by_name("class_aa").unwrap().vehicle_type,
            VehicleType::ClassAaTracked
        );
        assert!(vehicle_by_name("CLASS_Z").is_err());
    }

    #[test]
    fn test_impact_factor_class_a_steel() {
        // I = 9/(13.5 + 10) = 0.383
        let f = impact_factor(BridgeType::Steel, 10.0, VehicleType::ClassA);
        assert!((f - 1.383).abs() < 0.001);
    }

    #[test]
    fn test_impact_factor_floor() {
        // Very long span: increment floors at 10%
        let f = impact_factor(BridgeType::Steel, 100.0, VehicleType::ClassA);
        assert!((f - 1.10).abs() < 1e-9);
        let f70 = impact_factor(BridgeType::Steel, 100.0, VehicleType::Class70RWheeled);
        assert!((f70 - 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_impact_factor_70r_short_span() {
        let f = impact_factor(BridgeType::Steel, 8.0, VehicleType::Class70RTracked);
        assert!((f - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_lane_distribution_factors() {
        assert_eq!(lane_distribution_factor(1), 1.0);
        assert_eq!(lane_distribution_factor(2), 1.0);
        assert_eq!(lane_distribution_factor(3), 0.9);
        assert_eq!(lane_distribution_factor(4), 0.75);
        assert_eq!(lane_distribution_factor(6), 0.75);
    }

    #[test]
    fn test_congestion_factor_range() {
        assert_eq!(congestion_factor(8.0), 1.0);
        assert_eq!(congestion_factor(50.0), 1.15);
        let mid = congestion_factor(25.0);
        assert!(mid > 1.0 && mid < 1.15);
    }

    #[test]
    fn test_vehicle_serialization() {
        let v = class_a_train();
        let json = serde_json::to_string(&v).unwrap();
        let roundtrip: VehicleLoad = serde_json::from_str(&json).unwrap();
        assert_eq!(v, roundtrip);
    }
}
