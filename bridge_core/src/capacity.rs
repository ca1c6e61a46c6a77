//! Member Capacity Checks (IS 800:2007)
//!
//! Design capacities for welded plate girders:
//! - moment capacity with lateral-torsional buckling (Clause 8.2)
//! - shear capacity, plastic or post-critical method (Clause 8.4)
//! - deflection serviceability (IRC:24-2010 Clause 504.5)
//! - web bearing at supports (Clause 8.7.4)
//!
//! Forces are reported in kN and kNm; inputs stay in mm and MPa.

use serde::{Deserialize, Serialize};

use crate::materials::{E_STEEL, GAMMA_M0, GAMMA_M1, G_STEEL, POISSON_STEEL};
use crate::section::{calculate_epsilon, PlateGirderSection};

/// Sentinel for web-shear slenderness when the critical stress degenerates
const LAMBDA_W_SENTINEL: f64 = 999.0;

/// Moment capacity results with LTB intermediates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentCapacity {
    /// Section (plastic or elastic) capacity (kNm)
    pub section_capacity_knm: f64,
    /// LTB-limited capacity, None when continuously braced (kNm)
    pub ltb_capacity_knm: Option<f64>,
    /// Governing design capacity, min of the above (kNm)
    pub governing_capacity_knm: f64,
    /// Elastic critical moment (kNm), None when LTB is skipped
    pub critical_moment_knm: Option<f64>,
    /// Non-dimensional LTB slenderness
    pub lambda_lt: Option<f64>,
    /// Imperfection factor used (welded-section values)
    pub alpha_lt: Option<f64>,
    /// LTB reduction factor
    pub chi_lt: Option<f64>,
}

/// Moment capacity per IS 800:2007 Clause 8.2.
///
/// Section capacity uses Zp for plastic/compact sections, min(Ze) for
/// semi-compact/slender, divided by gamma_m0. If `unbraced_length_mm`
/// is positive, the lateral-torsional buckling capacity is computed and
/// the lower of the two governs; zero unbraced length means continuous
/// bracing and skips LTB entirely.
///
/// Plate girders are welded, so alpha_LT is 0.49 for h/bf <= 2 and
/// 0.76 otherwise.
pub fn moment_capacity(
    section: &PlateGirderSection,
    fy: f64,
    unbraced_length_mm: f64,
    effective_length_factor: f64,
) -> MomentCapacity {
    let m_d = if section.section_class.allows_plastic_modulus() {
        section.plastic_section_modulus * fy / GAMMA_M0
    } else {
        let z_elastic = section.section_modulus_top.min(section.section_modulus_bottom);
        z_elastic * fy / GAMMA_M0
    };
    let section_capacity_knm = m_d / 1e6;

    if unbraced_length_mm <= 0.0 {
        return MomentCapacity {
            section_capacity_knm,
            ltb_capacity_knm: None,
            governing_capacity_knm: section_capacity_knm,
            critical_moment_knm: None,
            lambda_lt: None,
            alpha_lt: None,
            chi_lt: None,
        };
    }

    let l_lt = effective_length_factor * unbraced_length_mm;
    let h = section.total_depth;
    let i_y = section.moment_of_inertia_yy;

    // St. Venant torsional constant for an open thin-walled section
    let i_t = (section.top_flange_width * section.top_flange_thickness.powi(3)
        + section.bottom_flange_width * section.bottom_flange_thickness.powi(3)
        + section.web_depth * section.web_thickness.powi(3))
        / 3.0;

    // Warping constant for a symmetric I-section
    let i_w = i_y * h.powi(2) / 4.0;

    let pi2 = std::f64::consts::PI.powi(2);
    let term1 = pi2 * E_STEEL * i_y / l_lt.powi(2);
    let radicand = i_w / i_y + (l_lt.powi(2) * G_STEEL * i_t) / (pi2 * E_STEEL * i_y);

    let m_cr = if radicand <= 0.0 {
        f64::INFINITY
    } else {
        term1 * radicand.sqrt()
    };

    let lambda_lt = (section.plastic_section_modulus * fy / m_cr).sqrt();

    let alpha_lt = if section.total_depth / section.top_flange_width <= 2.0 {
        0.49
    } else {
        0.76
    };

    let phi_lt = 0.5 * (1.0 + alpha_lt * (lambda_lt - 0.2) + lambda_lt.powi(2));

    let discriminant = phi_lt.powi(2) - lambda_lt.powi(2);
    let chi_lt = if discriminant <= 0.0 {
        1.0
    } else {
        (1.0 / (phi_lt + discriminant.sqrt())).min(1.0)
    };

    let ltb_capacity_knm = chi_lt * section.plastic_section_modulus * fy / GAMMA_M1 / 1e6;

    MomentCapacity {
        section_capacity_knm,
        ltb_capacity_knm: Some(ltb_capacity_knm),
        governing_capacity_knm: section_capacity_knm.min(ltb_capacity_knm),
        critical_moment_knm: Some(m_cr / 1e6),
        lambda_lt: Some(lambda_lt),
        alpha_lt: Some(alpha_lt),
        chi_lt: Some(chi_lt),
    }
}

/// Which shear design method governed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShearMethod {
    /// Stocky web, full plastic shear
    Plastic,
    /// Slender web, buckling-reduced strength
    PostCritical,
}

/// Shear capacity results with buckling intermediates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearCapacity {
    /// Full plastic shear capacity (kN)
    pub plastic_capacity_kn: f64,
    /// Governing design shear capacity (kN)
    pub design_capacity_kn: f64,
    pub method: ShearMethod,
    /// Web d/tw ratio
    pub web_slenderness: f64,
    /// Buckling coefficient, None when the plastic method governs
    pub k_v: Option<f64>,
    /// Elastic critical shear stress (MPa)
    pub tau_cr_elastic: Option<f64>,
    /// Non-dimensional web-shear slenderness
    pub lambda_w: Option<f64>,
    /// Shear buckling strength (MPa)
    pub tau_b: Option<f64>,
}

/// Shear capacity per IS 800:2007 Clause 8.4.
///
/// Webs with `d/tw <= 67e` carry the full plastic shear
/// `Av fy / (sqrt(3) gamma_m0)`. Slender webs use the simple
/// post-critical method: elastic buckling stress from the panel aspect
/// ratio, then the three-branch buckling strength curve, divided by
/// gamma_m1. `stiffener_spacing_mm` of None means an unstiffened web;
/// spacings wider than the web depth are treated the same.
pub fn shear_capacity(
    section: &PlateGirderSection,
    fy: f64,
    stiffener_spacing_mm: Option<f64>,
) -> ShearCapacity {
    let d = section.web_depth;
    let t_w = section.web_thickness;

    // Shear area for a welded I-section (Clause 8.4.1.1)
    let a_v = d * t_w;
    let f_yw = fy / 3.0_f64.sqrt();

    let plastic_capacity_kn = a_v * f_yw / GAMMA_M0 / 1000.0;

    let web_slenderness = d / t_w;
    let epsilon = calculate_epsilon(fy);

    if web_slenderness <= 67.0 * epsilon {
        return ShearCapacity {
            plastic_capacity_kn,
            design_capacity_kn: plastic_capacity_kn,
            method: ShearMethod::Plastic,
            web_slenderness,
            k_v: None,
            tau_cr_elastic: None,
            lambda_w: None,
            tau_b: None,
        };
    }

    let k_v = match stiffener_spacing_mm {
        Some(c) if c <= d => 5.35 + 4.0 / (c / d).powi(2),
        _ => 5.35,
    };

    let pi2 = std::f64::consts::PI.powi(2);
    let tau_cr = k_v * pi2 * E_STEEL / (12.0 * (1.0 - POISSON_STEEL.powi(2))) * (t_w / d).powi(2);

    let lambda_w = if tau_cr > 0.0 {
        (f_yw / tau_cr).sqrt()
    } else {
        LAMBDA_W_SENTINEL
    };

    let tau_b = if lambda_w <= 0.8 {
        f_yw
    } else if lambda_w < 1.2 {
        (1.0 - 0.8 * (lambda_w - 0.8)) * f_yw
    } else {
        f_yw / lambda_w.powi(2)
    };

    let design_capacity_kn = a_v * tau_b / GAMMA_M1 / 1000.0;

    ShearCapacity {
        plastic_capacity_kn,
        design_capacity_kn,
        method: ShearMethod::PostCritical,
        web_slenderness,
        k_v: Some(k_v),
        tau_cr_elastic: Some(tau_cr),
        lambda_w: Some(lambda_w),
        tau_b: Some(tau_b),
    }
}

/// Deflection serviceability check results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCheck {
    /// Midspan deflection from UDL (mm)
    pub deflection_udl_mm: f64,
    /// Midspan deflection from the point load (mm)
    pub deflection_point_mm: f64,
    /// Total midspan deflection (mm)
    pub total_deflection_mm: f64,
    /// Allowable deflection, span/600 (mm)
    pub allowable_deflection_mm: f64,
    /// span / total deflection, infinity at zero deflection
    pub deflection_ratio: f64,
    pub deflection_ok: bool,
}

/// Deflection under serviceability loads against the span/600 limit of
/// IRC:24-2010. UDL deflection `5wL^4/384EI`, midspan point load
/// `PL^3/48EI`; negative loads are treated as absent.
///
/// `udl_n_per_mm` is in N/mm (numerically equal to kN/m),
/// `point_load_n` in N.
pub fn check_deflection(
    span_mm: f64,
    moment_of_inertia: f64,
    udl_n_per_mm: f64,
    point_load_n: f64,
) -> DeflectionCheck {
    let delta_udl = if udl_n_per_mm > 0.0 {
        5.0 * udl_n_per_mm * span_mm.powi(4) / (384.0 * E_STEEL * moment_of_inertia)
    } else {
        0.0
    };

    let delta_point = if point_load_n > 0.0 {
        point_load_n * span_mm.powi(3) / (48.0 * E_STEEL * moment_of_inertia)
    } else {
        0.0
    };

    let total = delta_udl + delta_point;
    let allowable = span_mm / 600.0;

    DeflectionCheck {
        deflection_udl_mm: delta_udl,
        deflection_point_mm: delta_point,
        total_deflection_mm: total,
        allowable_deflection_mm: allowable,
        deflection_ratio: if total > 0.0 {
            span_mm / total
        } else {
            f64::INFINITY
        },
        deflection_ok: total <= allowable,
    }
}

/// Web bearing check results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebBearingCheck {
    /// Web bearing (crippling) capacity (kN)
    pub bearing_capacity_kn: f64,
    /// Applied support reaction (kN)
    pub reaction_kn: f64,
    /// Dispersion length through the flange (mm)
    pub dispersion_length_mm: f64,
    pub bearing_ok: bool,
    /// Advisory when stiffeners are required
    pub note: Option<String>,
}

/// Web bearing (crippling) at a support per IS 800:2007 Clause 8.7.4.
///
/// Load disperses through the flange at a 1:2.5 slope; for welded
/// sections the root radius is effectively zero, so `n1 = b1 + 5 tf`.
pub fn check_web_bearing(
    section: &PlateGirderSection,
    fy: f64,
    bearing_length_mm: f64,
    reaction_kn: f64,
) -> WebBearingCheck {
    let t_w = section.web_thickness;
    let t_f = section.top_flange_thickness;

    let n1 = bearing_length_mm + 5.0 * t_f;
    let fw_kn = (bearing_length_mm + n1) * t_w * fy / GAMMA_M0 / 1000.0;
    let bearing_ok = fw_kn >= reaction_kn;

    WebBearingCheck {
        bearing_capacity_kn: fw_kn,
        reaction_kn,
        dispersion_length_mm: n1,
        bearing_ok,
        note: if bearing_ok {
            None
        } else {
            Some(format!(
                "Web bearing capacity {fw_kn:.1} kN < reaction {reaction_kn:.1} kN. \
                 Bearing stiffeners required at supports."
            ))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::section_properties;

    fn stocky_section() -> PlateGirderSection {
        section_properties(800.0, 16.0, 300.0, 25.0, None, None, 250.0).unwrap()
    }

    fn slender_web_section() -> PlateGirderSection {
        section_properties(2000.0, 10.0, 500.0, 32.0, None, None, 250.0).unwrap()
    }

    #[test]
    fn test_moment_capacity_positive() {
        let sec = stocky_section();
        let mc = moment_capacity(&sec, 250.0, 3000.0, 1.0);
        assert!(mc.section_capacity_knm > 0.0);
        assert!(mc.governing_capacity_knm > 0.0);
    }

    #[test]
    fn test_ltb_never_exceeds_section_capacity() {
        let sec = slender_web_section();
        let mc = moment_capacity(&sec, 250.0, 6000.0, 1.0);
        assert!(mc.governing_capacity_knm <= mc.section_capacity_knm + 1e-9);
        let chi = mc.chi_lt.unwrap();
        assert!(chi > 0.0 && chi <= 1.0);
    }

    #[test]
    fn test_continuously_braced_skips_ltb() {
        let sec = stocky_section();
        let mc = moment_capacity(&sec, 250.0, 0.0, 1.0);
        assert!(mc.ltb_capacity_knm.is_none());
        assert!(mc.lambda_lt.is_none());
        assert_eq!(mc.governing_capacity_knm, mc.section_capacity_knm);
    }

    #[test]
    fn test_longer_unbraced_length_weaker() {
        let sec = slender_web_section();
        let short = moment_capacity(&sec, 250.0, 2000.0, 1.0);
        let long = moment_capacity(&sec, 250.0, 12_000.0, 1.0);
        assert!(long.governing_capacity_knm <= short.governing_capacity_knm);
    }

    #[test]
    fn test_semi_compact_uses_elastic_modulus() {
        let sec = slender_web_section();
        assert!(!sec.section_class.allows_plastic_modulus());
        let mc = moment_capacity(&sec, 250.0, 0.0, 1.0);
        let z_e = sec.section_modulus_top.min(sec.section_modulus_bottom);
        let expected = z_e * 250.0 / GAMMA_M0 / 1e6;
        assert!((mc.section_capacity_knm - expected).abs() < 1e-6);
    }

    #[test]
    fn test_stocky_web_plastic_shear() {
        let sec = stocky_section();
        // d/tw = 50 <= 67
        let sc = shear_capacity(&sec, 250.0, None);
        assert_eq!(sc.method, ShearMethod::Plastic);
        assert_eq!(sc.design_capacity_kn, sc.plastic_capacity_kn);
        // Av*fy/sqrt(3)/1.10 = 800*16*144.34/1.10 /1000
        assert!((sc.plastic_capacity_kn - 1679.6).abs() < 1.0);
    }

    #[test]
    fn test_slender_web_post_critical() {
        let sec = slender_web_section();
        // d/tw = 200 > 67
        let sc = shear_capacity(&sec, 250.0, None);
        assert_eq!(sc.method, ShearMethod::PostCritical);
        assert!(sc.design_capacity_kn < sc.plastic_capacity_kn);
        assert!(sc.design_capacity_kn > 0.0);
        assert_eq!(sc.k_v, Some(5.35));
    }

    #[test]
    fn test_stiffeners_never_reduce_shear() {
        let sec = slender_web_section();
        let unstiffened = shear_capacity(&sec, 250.0, None);
        let stiffened = shear_capacity(&sec, 250.0, Some(1500.0));
        assert!(stiffened.design_capacity_kn >= unstiffened.design_capacity_kn);
        // Closer stiffeners raise kv further
        let close = shear_capacity(&sec, 250.0, Some(1000.0));
        assert!(close.design_capacity_kn >= stiffened.design_capacity_kn);
    }

    #[test]
    fn test_wide_stiffener_spacing_is_unstiffened() {
        let sec = slender_web_section();
        let wide = shear_capacity(&sec, 250.0, Some(5000.0));
        assert_eq!(wide.k_v, Some(5.35));
    }

    #[test]
    fn test_deflection_zero_load() {
        let check = check_deflection(30_000.0, 5e10, 0.0, 0.0);
        assert_eq!(check.total_deflection_mm, 0.0);
        assert!(check.deflection_ok);
        assert!(check.deflection_ratio.is_infinite());
    }

    #[test]
    fn test_deflection_allowable_is_span_over_600() {
        let check = check_deflection(30_000.0, 5e10, 20.0, 0.0);
        assert_eq!(check.allowable_deflection_mm, 50.0);
    }

    #[test]
    fn test_deflection_udl_formula() {
        let span: f64 = 30_000.0;
        let i = 5e10;
        let w = 20.0;
        let check = check_deflection(span, i, w, 0.0);
        let expected = 5.0 * w * span.powi(4) / (384.0 * E_STEEL * i);
        assert!((check.deflection_udl_mm - expected).abs() < 1e-9);
    }

    #[test]
    fn test_web_bearing_adequate() {
        let sec = stocky_section();
        let check = check_web_bearing(&sec, 250.0, 300.0, 500.0);
        // n1 = 300 + 5*25 = 425
        assert_eq!(check.dispersion_length_mm, 425.0);
        assert!(check.bearing_ok);
        assert!(check.note.is_none());
    }

    #[test]
    fn test_web_bearing_requires_stiffeners() {
        let sec = section_properties(1000.0, 8.0, 300.0, 12.0, None, None, 250.0).unwrap();
        let check = check_web_bearing(&sec, 250.0, 100.0, 5000.0);
        assert!(!check.bearing_ok);
        assert!(check.note.unwrap().contains("stiffeners"));
    }
}
