//! Structural Steel Grades (IS 2062)
//!
//! Grade definitions and material constants for weldable structural steel
//! used in plate girder bridges. Yield and ultimate strengths follow
//! IS 2062:2011 Table 2 for nominal thickness up to 20 mm; the slight
//! reduction for thicker plates is not modelled.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::materials::SteelGrade;
//!
//! let grade = SteelGrade::E350;
//! assert_eq!(grade.yield_strength_mpa(), 350.0);
//! assert_eq!(grade.ultimate_strength_mpa(), 490.0);
//! ```

use serde::{Deserialize, Serialize};

/// Young's modulus of structural steel (MPa), constant for all grades
pub const E_STEEL: f64 = 200_000.0;

/// Shear modulus of steel (MPa), E / 2(1+nu) with nu = 0.3
pub const G_STEEL: f64 = 76_923.0;

/// Poisson's ratio for steel
pub const POISSON_STEEL: f64 = 0.3;

/// Density of steel (kN/m3)
pub const DENSITY_STEEL: f64 = 78.5;

/// Partial safety factor for material, yielding (IS 800:2007 Cl. 5.4.1)
pub const GAMMA_M0: f64 = 1.10;

/// Partial safety factor for material, buckling (IS 800:2007 Cl. 5.4.1)
pub const GAMMA_M1: f64 = 1.25;

/// Standard Indian structural steel grades as per IS 2062.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SteelGrade {
    /// Fe 410 W A, fy = 250 MPa
    #[default]
    E250A,
    /// Fe 410 W B, fy = 250 MPa
    E250B,
    /// Fe 440, fy = 300 MPa
    E300,
    /// Fe 490, fy = 350 MPa
    E350,
    /// Fe 540, fy = 410 MPa
    E410,
    /// Fe 570, fy = 450 MPa
    E450,
}

impl SteelGrade {
    /// All grades for iteration
    pub const ALL: [SteelGrade; 6] = [
        SteelGrade::E250A,
        SteelGrade::E250B,
        SteelGrade::E300,
        SteelGrade::E350,
        SteelGrade::E410,
        SteelGrade::E450,
    ];

    /// Parse from the grade designation string (case-insensitive)
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "E250A" => Some(SteelGrade::E250A),
            "E250B" => Some(SteelGrade::E250B),
            "E300" => Some(SteelGrade::E300),
            "E350" => Some(SteelGrade::E350),
            "E410" => Some(SteelGrade::E410),
            "E450" => Some(SteelGrade::E450),
            _ => None,
        }
    }

    /// Yield strength fy in MPa (IS 2062:2011 Table 2, t <= 20 mm)
    pub fn yield_strength_mpa(&self) -> f64 {
        match self {
            SteelGrade::E250A | SteelGrade::E250B => 250.0,
            SteelGrade::E300 => 300.0,
            SteelGrade::E350 => 350.0,
            SteelGrade::E410 => 410.0,
            SteelGrade::E450 => 450.0,
        }
    }

    /// Ultimate tensile strength fu in MPa (IS 2062:2011 Table 2)
    pub fn ultimate_strength_mpa(&self) -> f64 {
        match self {
            SteelGrade::E250A | SteelGrade::E250B => 410.0,
            SteelGrade::E300 => 440.0,
            SteelGrade::E350 => 490.0,
            SteelGrade::E410 => 540.0,
            SteelGrade::E450 => 570.0,
        }
    }

    /// Grade designation with the equivalent Fe classification
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::E250A => "E250A (Fe 410 W A)",
            SteelGrade::E250B => "E250B (Fe 410 W B)",
            SteelGrade::E300 => "E300 (Fe 440)",
            SteelGrade::E350 => "E350 (Fe 490)",
            SteelGrade::E410 => "E410 (Fe 540)",
            SteelGrade::E450 => "E450 (Fe 570)",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
