//! Initial Girder Sizing
//!
//! Empirical starting dimensions for simply supported plate girders:
//! - overall depth L/12 to L/14, deeper for heavier vehicle classes
//! - web thickness sized to keep d/tw under 200e where practical
//! - flange width d/3, capped by the compact outstand limit
//!
//! These are starting points for the design checks, not final sizes.

use serde::{Deserialize, Serialize};

use crate::design::input::PlateGirderInput;
use crate::errors::CalcResult;
use crate::loads::vehicles::{vehicle_by_name, VehicleType};
use crate::section::calculate_epsilon;

/// Initial plate dimensions from the sizing rules (all mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialDimensions {
    pub web_depth_mm: f64,
    pub web_thickness_mm: f64,
    pub flange_width_mm: f64,
    pub flange_thickness_mm: f64,
}

fn round_up_to(value: f64, increment: f64) -> f64 {
    (value / increment).ceil() * increment
}

/// Empirical initial sizing for a plate girder.
///
/// Span-to-depth factor is 12 for 70R loading, 13 for Class AA, and 14
/// for the lighter Class A/B trains. Depth rounds up to 50 mm, plate
/// thicknesses to even millimetres, and flange width to 10 mm with a
/// 200 mm practical minimum for welding access.
pub fn initial_sizing(input: &PlateGirderInput) -> CalcResult<InitialDimensions> {
    let span = input.effective_span;
    let fy = input.yield_strength();
    let epsilon = calculate_epsilon(fy);

    let vehicle_type = vehicle_by_name(&input.live_load_class)?.vehicle_type;
    let depth_factor = match vehicle_type {
        VehicleType::Class70RWheeled
        | VehicleType::Class70RTracked
        | VehicleType::Class70RBogie => 12.0,
        VehicleType::ClassAaTracked | VehicleType::ClassAaWheeled => 13.0,
        VehicleType::ClassA | VehicleType::ClassB => 14.0,
    };

    let overall_depth = round_up_to(span / depth_factor, 50.0);

    let flange_thickness = round_up_to((overall_depth / 40.0).max(20.0), 2.0);

    let web_depth = overall_depth - 2.0 * flange_thickness;

    // Keep d/tw under 200e to avoid transverse stiffeners, but never
    // below 8 mm; thinner webs distort during welding
    let min_web_thickness = (web_depth / (200.0 * epsilon)).max(8.0);
    let web_thickness = round_up_to(min_web_thickness, 2.0).max(8.0);

    // Flange width d/3, capped so the outstand stays within 8.4e
    let max_flange_width = 2.0 * (8.4 * epsilon * flange_thickness) + web_thickness;
    let flange_width = round_up_to((web_depth / 3.0).min(max_flange_width), 10.0).max(200.0);

    Ok(InitialDimensions {
        web_depth_mm: web_depth,
        web_thickness_mm: web_thickness,
        flange_width_mm: flange_width,
        flange_thickness_mm: flange_thickness,
    })
}
