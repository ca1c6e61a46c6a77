//! Plate Girder Section Properties and Classification
//!
//! Cross-sectional properties of welded I-shaped plate girders (area,
//! centroid, moments of inertia, elastic and plastic section moduli)
//! and section classification per IS 800:2007 Table 2.
//!
//! All dimensions in mm, section moduli in mm3, inertias in mm4.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::section::section_properties;
//!
//! let sec = section_properties(1500.0, 12.0, 400.0, 25.0, None, None, 250.0).unwrap();
//! assert_eq!(sec.total_depth, 1550.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::DENSITY_STEEL;

/// Epsilon factor for section classification, `sqrt(250/fy)`.
///
/// Normalizes slenderness limits across steel grades. Equals 1.0 for
/// E250 and shrinks as yield strength rises, tightening every limit.
pub fn calculate_epsilon(fy: f64) -> f64 {
    (250.0 / fy).sqrt()
}

/// Section classification tiers per IS 800:2007 Table 2.
///
/// Determines whether the plastic or elastic section modulus may be
/// used in moment capacity calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionClass {
    /// Can form a plastic hinge, use Zp
    Plastic,
    /// Reaches yield, use Zp with reduced rotation capacity
    Compact,
    /// Local buckling after yield, use Ze
    SemiCompact,
    /// Local buckling governs, effective section needed
    Slender,
}

impl SectionClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionClass::Plastic => "plastic",
            SectionClass::Compact => "compact",
            SectionClass::SemiCompact => "semi-compact",
            SectionClass::Slender => "slender",
        }
    }

    /// True if the plastic section modulus may be used for bending
    pub fn allows_plastic_modulus(&self) -> bool {
        matches!(self, SectionClass::Plastic | SectionClass::Compact)
    }
}

impl std::fmt::Display for SectionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Classify a section per IS 800:2007 Table 2.
///
/// The class is governed by the more slender element: both the web
/// `d/tw` ratio and the compression-flange outstand ratio must satisfy
/// a tier's limits or the section drops to the next tier, down to
/// slender past all three.
///
/// Web limits (bending): 84e / 105e / 126e.
/// Flange outstand limits (compression): 8.4e / 9.4e / 13.6e.
pub fn classify_section(web_slenderness: f64, flange_slenderness: f64, fy: f64) -> SectionClass {
    let epsilon = calculate_epsilon(fy);

    if web_slenderness <= 84.0 * epsilon && flange_slenderness <= 8.4 * epsilon {
        SectionClass::Plastic
    } else if web_slenderness <= 105.0 * epsilon && flange_slenderness <= 9.4 * epsilon {
        SectionClass::Compact
    } else if web_slenderness <= 126.0 * epsilon && flange_slenderness <= 13.6 * epsilon {
        SectionClass::SemiCompact
    } else {
        SectionClass::Slender
    }
}

/// Computed plate girder section: dimensions plus derived properties.
///
/// Output of [`section_properties`], consumed by the capacity checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateGirderSection {
    // Dimensions (mm)
    pub web_depth: f64,
    pub web_thickness: f64,
    pub top_flange_width: f64,
    pub top_flange_thickness: f64,
    pub bottom_flange_width: f64,
    pub bottom_flange_thickness: f64,

    // Derived properties
    /// Overall depth (mm)
    pub total_depth: f64,
    /// Cross-sectional area (mm2)
    pub area: f64,
    /// Strong-axis moment of inertia (mm4)
    pub moment_of_inertia_xx: f64,
    /// Weak-axis moment of inertia (mm4)
    pub moment_of_inertia_yy: f64,
    /// Elastic section modulus at the top fiber (mm3)
    pub section_modulus_top: f64,
    /// Elastic section modulus at the bottom fiber (mm3)
    pub section_modulus_bottom: f64,
    /// Centroid height from the bottom fiber (mm)
    pub centroid_from_bottom: f64,
    /// Plastic section modulus (mm3)
    pub plastic_section_modulus: f64,

    pub section_class: SectionClass,
    /// Web d/tw ratio
    pub web_slenderness: f64,
    /// Flange outstand ratio (b - tw)/(2 tf)
    pub flange_slenderness: f64,
}

impl PlateGirderSection {
    /// Self-weight per metre run (kN/m)
    pub fn weight_per_meter(&self) -> f64 {
        self.area * 1e-6 * DENSITY_STEEL
    }

    /// Shape factor Zp/Ze against the smaller elastic modulus
    pub fn shape_factor(&self) -> f64 {
        let z_elastic = self.section_modulus_top.min(self.section_modulus_bottom);
        if z_elastic > 0.0 {
            self.plastic_section_modulus / z_elastic
        } else {
            1.0
        }
    }

    /// Re-classify with the actual yield strength.
    ///
    /// Section properties are computed once from geometry; classification
    /// alone depends on fy, so this second pass replaces the provisional
    /// class without touching any other field.
    pub fn reclassify(&mut self, fy: f64) {
        self.section_class = classify_section(self.web_slenderness, self.flange_slenderness, fy);
    }
}

fn check_positive(field: &str, value: f64) -> CalcResult<()> {
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Plate dimension must be positive",
        ));
    }
    Ok(())
}

/// Compute section properties for a welded I-shaped plate girder.
///
/// The bottom flange defaults to the top flange (doubly symmetric).
/// Strong-axis inertia uses the parallel-axis theorem about the
/// area-weighted centroid; the weak-axis inertia is a direct sum since
/// all three plates share the web centerline.
///
/// The plastic section modulus uses
/// `(A_tf (d_w + t_tf) + A_bf (d_w + t_bf))/2 + t_w d_w^2/4`, exact for
/// doubly symmetric sections and a documented approximation for
/// unsymmetric ones, where the equal-area axis shifts off mid-depth.
pub fn section_properties(
    d_web: f64,
    t_web: f64,
    b_tf: f64,
    t_tf: f64,
    b_bf: Option<f64>,
    t_bf: Option<f64>,
    fy: f64,
) -> CalcResult<PlateGirderSection> {
    let b_bf = b_bf.unwrap_or(b_tf);
    let t_bf = t_bf.unwrap_or(t_tf);

    check_positive("web_depth", d_web)?;
    check_positive("web_thickness", t_web)?;
    check_positive("top_flange_width", b_tf)?;
    check_positive("top_flange_thickness", t_tf)?;
    check_positive("bottom_flange_width", b_bf)?;
    check_positive("bottom_flange_thickness", t_bf)?;

    let total_depth = d_web + t_tf + t_bf;

    let area_web = d_web * t_web;
    let area_tf = b_tf * t_tf;
    let area_bf = b_bf * t_bf;
    let total_area = area_web + area_tf + area_bf;

    // Component centroids from the bottom of the bottom flange
    let y_bf = t_bf / 2.0;
    let y_web = t_bf + d_web / 2.0;
    let y_tf = t_bf + d_web + t_tf / 2.0;

    let y_centroid = (area_bf * y_bf + area_web * y_web + area_tf * y_tf) / total_area;

    // Parallel-axis theorem: I = sum(I_local + A d^2)
    let i_web = t_web * d_web.powi(3) / 12.0 + area_web * (y_web - y_centroid).powi(2);
    let i_tf = b_tf * t_tf.powi(3) / 12.0 + area_tf * (y_tf - y_centroid).powi(2);
    let i_bf = b_bf * t_bf.powi(3) / 12.0 + area_bf * (y_bf - y_centroid).powi(2);
    let i_xx = i_web + i_tf + i_bf;

    // Weak axis: all plates centered on the web centerline
    let i_yy = d_web * t_web.powi(3) / 12.0 + t_tf * b_tf.powi(3) / 12.0 + t_bf * b_bf.powi(3) / 12.0;

    let y_top = total_depth - y_centroid;
    let z_top = i_xx / y_top;
    let z_bottom = i_xx / y_centroid;

    let z_plastic = (area_tf * (d_web + t_tf) + area_bf * (d_web + t_bf)) / 2.0
        + t_web * d_web.powi(2) / 4.0;

    let web_slenderness = d_web / t_web;
    let flange_slenderness = (b_tf - t_web) / (2.0 * t_tf);

    let section_class = classify_section(web_slenderness, flange_slenderness, fy);

    Ok(PlateGirderSection {
        web_depth: d_web,
        web_thickness: t_web,
        top_flange_width: b_tf,
        top_flange_thickness: t_tf,
        bottom_flange_width: b_bf,
        bottom_flange_thickness: t_bf,
        total_depth,
        area: total_area,
        moment_of_inertia_xx: i_xx,
        moment_of_inertia_yy: i_yy,
        section_modulus_top: z_top,
        section_modulus_bottom: z_bottom,
        centroid_from_bottom: y_centroid,
        plastic_section_modulus: z_plastic,
        section_class,
        web_slenderness,
        flange_slenderness,
    })
}
