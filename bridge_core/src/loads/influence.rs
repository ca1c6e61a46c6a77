//! Influence-Line Moving Load Analysis
//!
//! Influence-line based analysis of a simply supported span under an
//! IRC vehicle load train:
//! - maximum bending moment at midspan and its critical vehicle position
//! - absolute maximum moment anywhere on the span
//! - maximum shear at both supports
//!
//! The critical placement search sweeps the vehicle front across the span
//! at a fixed increment and keeps the worst effect. Brute force is
//! intentional here: it handles arbitrary axle configurations and the
//! sweep is cheap at the default discretization.
//!
//! Reference: Hibbeler, Structural Analysis, Ch. 6 (influence lines)

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::vehicles::VehicleLoad;

/// Default number of IL stations along the span
pub const DEFAULT_NUM_POINTS: usize = 201;

/// Default vehicle sweep increment (m)
pub const DEFAULT_STEP_M: f64 = 0.1;

/// Response quantity an influence line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IlQuantity {
    Moment,
    Shear,
}

/// Which face of the cut a shear influence line is evaluated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShearSide {
    Left,
    Right,
}

/// Influence line ordinates at discrete stations along the span.
///
/// An influence line shows the variation of a response (moment or shear)
/// at a FIXED section as a unit load moves across the span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceLine {
    /// Stations along the span (m), uniformly spaced over [0, span]
    pub positions: Vec<f64>,
    /// IL ordinate at each station
    pub ordinates: Vec<f64>,
    /// Total span (m)
    pub span_m: f64,
    /// Response quantity
    pub quantity: IlQuantity,
    /// Section where the quantity is measured (m from left support)
    pub location_m: f64,
}

impl InfluenceLine {
    /// Linearly interpolate the ordinate at an arbitrary position.
    /// Positions outside [0, span] clamp to the end ordinates.
    pub fn ordinate_at(&self, position_m: f64) -> f64 {
        let n = self.positions.len();
        if position_m <= self.positions[0] {
            return self.ordinates[0];
        }
        if position_m >= self.positions[n - 1] {
            return self.ordinates[n - 1];
        }
        // Stations are uniform, so the bracketing index is direct
        let dx = self.span_m / (n - 1) as f64;
        let i = ((position_m / dx) as usize).min(n - 2);
        let x0 = self.positions[i];
        let t = (position_m - x0) / dx;
        self.ordinates[i] * (1.0 - t) + self.ordinates[i + 1] * t
    }
}

fn check_span_and_location(span_m: f64, location_m: f64) -> CalcResult<()> {
    if span_m <= 0.0 {
        return Err(CalcError::invalid_input(
            "span",
            span_m.to_string(),
            "Span must be positive",
        ));
    }
    if !(0.0..=span_m).contains(&location_m) {
        return Err(CalcError::invalid_input(
            "location",
            location_m.to_string(),
            "Section location must lie within the span",
        ));
    }
    Ok(())
}

/// Moment influence line for a simply supported beam.
///
/// For a unit load at position x, the moment at section `a` is
/// `x(L-a)/L` for x <= a and `a(L-x)/L` for x > a. The IL is zero at
/// both supports and peaks at x = a with ordinate `a(L-a)/L`.
///
/// ```rust
/// use bridge_core::loads::influence::moment_influence_line;
///
/// let il = moment_influence_line(30.0, 15.0, 201).unwrap();
/// let peak = il.ordinates.iter().cloned().fold(f64::MIN, f64::max);
/// assert!((peak - 7.5).abs() < 1e-9);
/// ```
pub fn moment_influence_line(
    span_m: f64,
    location_m: f64,
    num_points: usize,
) -> CalcResult<InfluenceLine> {
    check_span_and_location(span_m, location_m)?;

    let n = num_points.max(2);
    let dx = span_m / (n - 1) as f64;
    let mut positions = Vec::with_capacity(n);
    let mut ordinates = Vec::with_capacity(n);

    for i in 0..n {
        let x = i as f64 * dx;
        let eta = if x <= location_m {
            x * (span_m - location_m) / span_m
        } else {
            location_m * (span_m - x) / span_m
        };
        positions.push(x);
        ordinates.push(eta);
    }

    Ok(InfluenceLine {
        positions,
        ordinates,
        span_m,
        quantity: IlQuantity::Moment,
        location_m,
    })
}

/// Shear influence line for a simply supported beam.
///
/// The IL has a discontinuity of magnitude 1.0 at the section; `side`
/// selects which of the two branches applies on each side of the cut,
/// so that support shears can be evaluated from the face toward the
/// span interior. At a station exactly on the cut the unfavourable
/// (larger) branch `(L-a)/L` is taken.
pub fn shear_influence_line(
    span_m: f64,
    location_m: f64,
    num_points: usize,
    side: ShearSide,
) -> CalcResult<InfluenceLine> {
    check_span_and_location(span_m, location_m)?;

    let n = num_points.max(2);
    let dx = span_m / (n - 1) as f64;
    let mut positions = Vec::with_capacity(n);
    let mut ordinates = Vec::with_capacity(n);

    for i in 0..n {
        let x = i as f64 * dx;
        let eta = if x < location_m {
            match side {
                ShearSide::Right => -x / span_m,
                ShearSide::Left => (span_m - x) / span_m,
            }
        } else if x > location_m {
            match side {
                ShearSide::Right => (span_m - x) / span_m,
                ShearSide::Left => -x / span_m,
            }
        } else {
            (span_m - location_m) / span_m
        };
        positions.push(x);
        ordinates.push(eta);
    }

    Ok(InfluenceLine {
        positions,
        ordinates,
        span_m,
        quantity: IlQuantity::Shear,
        location_m,
    })
}

/// Load effect from superposition: `sum(P_i * eta_i)` over axles on the
/// span. Axles off the span contribute zero.
///
/// `front_position_m` is the position of the vehicle front measured from
/// the left support; it may be negative (vehicle partially entered).
pub fn load_effect(il: &InfluenceLine, vehicle: &VehicleLoad, front_position_m: f64) -> f64 {
    let mut total = 0.0;
    for axle in &vehicle.axles {
        let axle_pos = front_position_m + axle.position_m;
        if (0.0..=il.span_m).contains(&axle_pos) {
            total += axle.load_kn * il.ordinate_at(axle_pos);
        }
    }
    total
}

/// Sweep the vehicle across the span and find the front position that
/// maximizes the load effect. Ties keep the first position found.
///
/// Returns `(critical_position_m, max_effect)`.
pub fn find_critical_position(
    il: &InfluenceLine,
    vehicle: &VehicleLoad,
    step_m: f64,
) -> (f64, f64) {
    let start = -vehicle.total_length_m;
    let end = il.span_m + step_m;

    let mut max_effect = 0.0;
    let mut critical_pos = 0.0;

    let mut pos = start;
    while pos < end {
        let effect = load_effect(il, vehicle, pos);
        if effect > max_effect {
            max_effect = effect;
            critical_pos = pos;
        }
        pos += step_m;
    }

    (critical_pos, max_effect)
}

/// Absolute maximum bending moment anywhere on the span.
///
/// Samples section locations uniformly between 0.3L and 0.7L, the band
/// where the maximum occurs for standard highway load trains, and keeps
/// the worst `(moment, location, vehicle_position)` triple.
pub fn find_absolute_max_moment(
    span_m: f64,
    vehicle: &VehicleLoad,
    num_sections: usize,
    step_m: f64,
) -> CalcResult<(f64, f64, f64)> {
    let n = num_sections.max(2);
    let band_start = 0.3 * span_m;
    let band_end = 0.7 * span_m;
    let d_section = (band_end - band_start) / (n - 1) as f64;

    let mut max_moment = 0.0;
    let mut moment_location = span_m / 2.0;
    let mut vehicle_pos = 0.0;

    for i in 0..n {
        let section_loc = band_start + i as f64 * d_section;
        let il = moment_influence_line(span_m, section_loc, DEFAULT_NUM_POINTS)?;
        let (crit_pos, moment) = find_critical_position(&il, vehicle, step_m);
        if moment > max_moment {
            max_moment = moment;
            moment_location = section_loc;
            vehicle_pos = crit_pos;
        }
    }

    Ok((max_moment, moment_location, vehicle_pos))
}

/// Results of a complete moving-load analysis, with impact applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingLoadResults {
    /// Maximum bending moment at midspan (kNm)
    pub max_moment_midspan_knm: f64,
    /// Vehicle front position producing the midspan maximum (m)
    pub critical_position_moment_m: f64,
    /// Absolute maximum moment anywhere on the span (kNm)
    pub absolute_max_moment_knm: f64,
    /// Section location of the absolute maximum (m from left support)
    pub absolute_max_moment_location_m: f64,
    /// Maximum shear at the left support (kN)
    pub max_shear_left_kn: f64,
    /// Maximum shear at the right support (kN)
    pub max_shear_right_kn: f64,
    /// Governing shear, max of the two supports (kN)
    pub max_shear_kn: f64,
    /// Impact factor already applied to all force results
    pub impact_factor: f64,
}

/// Complete moving-load analysis for a simply supported span.
///
/// Computes the midspan moment envelope, the absolute maximum moment via
/// the band search, and the support shears via ILs placed just inside
/// each support, each evaluated from the face toward midspan. Every raw
/// effect is multiplied by `impact_factor` before being reported.
pub fn analyze_moving_load(
    span_m: f64,
    vehicle: &VehicleLoad,
    impact_factor: f64,
) -> CalcResult<MovingLoadResults> {
    let il_moment_mid = moment_influence_line(span_m, span_m / 2.0, DEFAULT_NUM_POINTS)?;
    let (crit_pos_moment, max_moment_mid) =
        find_critical_position(&il_moment_mid, vehicle, DEFAULT_STEP_M);

    let (max_moment_overall, max_moment_location, _) =
        find_absolute_max_moment(span_m, vehicle, 21, DEFAULT_STEP_M)?;

    // Shear peaks when the heavy axles sit next to the support
    let il_shear_left = shear_influence_line(span_m, 0.01, DEFAULT_NUM_POINTS, ShearSide::Right)?;
    let (_, max_shear_left) = find_critical_position(&il_shear_left, vehicle, DEFAULT_STEP_M);

    let il_shear_right =
        shear_influence_line(span_m, span_m - 0.01, DEFAULT_NUM_POINTS, ShearSide::Left)?;
    let (_, max_shear_right) = find_critical_position(&il_shear_right, vehicle, DEFAULT_STEP_M);

    let max_shear_left_kn = max_shear_left * impact_factor;
    let max_shear_right_kn = max_shear_right * impact_factor;

    Ok(MovingLoadResults {
        max_moment_midspan_knm: max_moment_mid * impact_factor,
        critical_position_moment_m: crit_pos_moment,
        absolute_max_moment_knm: max_moment_overall * impact_factor,
        absolute_max_moment_location_m: max_moment_location,
        max_shear_left_kn,
        max_shear_right_kn,
        max_shear_kn: max_shear_left_kn.max(max_shear_right_kn),
        impact_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::vehicles::{class_70r_wheeled, class_a_train, AxleLoad, VehicleLoad, VehicleType};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn unit_vehicle() -> VehicleLoad {
        VehicleLoad {
            vehicle_type: VehicleType::ClassA,
            axles: vec![AxleLoad::new(1.0, 0.0)],
            total_length_m: 0.0,
            min_spacing_same_lane_m: 0.0,
            ground_contact_area: (0.25, 0.50),
        }
    }

    #[test]
    fn test_moment_il_shape() {
        let il = moment_influence_line(30.0, 15.0, 201).unwrap();
        assert_eq!(il.positions.len(), il.ordinates.len());
        assert!(approx_eq(il.ordinates[0], 0.0, 1e-12));
        assert!(approx_eq(*il.ordinates.last().unwrap(), 0.0, 1e-12));
        // Peak a(L-a)/L = 15*15/30 = 7.5
        let peak = il.ordinates.iter().cloned().fold(f64::MIN, f64::max);
        assert!(approx_eq(peak, 7.5, 1e-9));
        // Non-negative everywhere
        assert!(il.ordinates.iter().all(|&o| o >= -1e-12));
    }

    #[test]
    fn test_moment_il_off_center_peak() {
        let il = moment_influence_line(20.0, 6.0, 201).unwrap();
        // 6 * 14 / 20 = 4.2 at the section itself
        assert!(approx_eq(il.ordinate_at(6.0), 4.2, 1e-9));
    }

    #[test]
    fn test_shear_il_unit_jump() {
        let span = 30.0;
        // Station spacing is 0.15 m, so the cut falls exactly on a station
        let location = 12.0;
        for side in [ShearSide::Left, ShearSide::Right] {
            let il = shear_influence_line(span, location, 201, side).unwrap();
            // Largest adjacent-station difference sits at the cut; its
            // magnitude is 1.0 up to the branch slope over one station
            let max_jump = il
                .ordinates
                .windows(2)
                .map(|pair| (pair[1] - pair[0]).abs())
                .fold(0.0, f64::max);
            assert!(
                approx_eq(max_jump, 1.0, 0.01),
                "jump magnitude {max_jump} should be 1.0"
            );
        }
    }

    #[test]
    fn test_shear_il_branch_values_at_cut() {
        let il = shear_influence_line(30.0, 12.0, 201, ShearSide::Left).unwrap();
        // At the cut the unfavourable branch (L-a)/L is taken
        assert!(approx_eq(il.ordinate_at(12.0), 0.6, 1e-9));
        // One full station past the cut is the -x/L branch
        assert!(approx_eq(il.ordinate_at(12.15), -12.15 / 30.0, 1e-9));
    }

    #[test]
    fn test_shear_il_near_support() {
        // IL just inside the left support, right side: ordinates approach
        // the reaction line (L-x)/L away from the cut
        let il = shear_influence_line(30.0, 0.01, 201, ShearSide::Right).unwrap();
        assert!(il.ordinate_at(0.15) > 0.99);
        assert!(il.ordinate_at(1.05) > 0.96);
    }

    #[test]
    fn test_load_effect_unit_load_at_midspan() {
        let il = moment_influence_line(30.0, 15.0, 201).unwrap();
        let effect = load_effect(&il, &unit_vehicle(), 15.0);
        assert!(approx_eq(effect, 7.5, 1e-9));
    }

    #[test]
    fn test_load_effect_off_span_axles_ignored() {
        let il = moment_influence_line(30.0, 15.0, 201).unwrap();
        assert_eq!(load_effect(&il, &unit_vehicle(), -5.0), 0.0);
        assert_eq!(load_effect(&il, &unit_vehicle(), 35.0), 0.0);
    }

    #[test]
    fn test_critical_position_unit_load() {
        // Single unit load: critical position is at the section
        let il = moment_influence_line(30.0, 15.0, 201).unwrap();
        let (pos, effect) = find_critical_position(&il, &unit_vehicle(), 0.1);
        assert!(approx_eq(effect, 7.5, 0.05));
        assert!(approx_eq(pos, 15.0, 0.11));
    }

    #[test]
    fn test_absolute_max_at_least_midspan_max() {
        let vehicle = class_a_train();
        let span = 30.0;
        let il_mid = moment_influence_line(span, span / 2.0, 201).unwrap();
        let (_, mid_max) = find_critical_position(&il_mid, &vehicle, 0.1);
        let (abs_max, location, _) =
            find_absolute_max_moment(span, &vehicle, 21, 0.1).unwrap();
        assert!(abs_max >= mid_max - 1e-9);
        assert!(location >= 0.3 * span && location <= 0.7 * span);
    }

    #[test]
    fn test_analyze_moving_load_class_a() {
        let vehicle = class_a_train();
        let results = analyze_moving_load(30.0, &vehicle, 1.0).unwrap();
        assert!(results.max_moment_midspan_knm > 0.0);
        assert!(results.absolute_max_moment_knm >= results.max_moment_midspan_knm - 1e-9);
        assert!(results.max_shear_kn > 0.0);
        // Symmetric span: both supports see nearly the same maximum
        assert!(
            approx_eq(results.max_shear_left_kn, results.max_shear_right_kn, 0.05 * results.max_shear_kn)
        );
    }

    #[test]
    fn test_impact_factor_scales_results() {
        let vehicle = class_a_train();
        let base = analyze_moving_load(30.0, &vehicle, 1.0).unwrap();
        let amplified = analyze_moving_load(30.0, &vehicle, 1.25).unwrap();
        assert!(approx_eq(
            amplified.max_moment_midspan_knm,
            base.max_moment_midspan_knm * 1.25,
            1e-6
        ));
        assert!(approx_eq(amplified.max_shear_kn, base.max_shear_kn * 1.25, 1e-6));
    }

    #[test]
    fn test_70r_exceeds_class_a_shear() {
        let span = 30.0;
        let a = analyze_moving_load(span, &class_a_train(), 1.0).unwrap();
        let heavy = analyze_moving_load(span, &class_70r_wheeled(), 1.0).unwrap();
        assert!(heavy.max_shear_kn > a.max_shear_kn);
        assert!(heavy.absolute_max_moment_knm > a.absolute_max_moment_knm);
    }

    #[test]
    fn test_invalid_span_rejected() {
        assert!(moment_influence_line(-10.0, 5.0, 201).is_err());
        assert!(moment_influence_line(30.0, 35.0, 201).is_err());
        assert!(shear_influence_line(0.0, 0.0, 201, ShearSide::Left).is_err());
    }
}
