//! Design Input Record
//!
//! Validated input parameters for a plate girder bridge design run.
//! All dimensions in mm, loads in kN or kN/m unless noted otherwise.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::vehicles::vehicle_by_name;
use crate::materials::SteelGrade;

/// Bridge span configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeSpanType {
    #[default]
    SimplySupported,
    Continuous2Span,
    Continuous3Span,
}

impl BridgeSpanType {
    pub fn display_name(&self) -> &'static str {
        match self {
            BridgeSpanType::SimplySupported => "simply supported",
            BridgeSpanType::Continuous2Span => "continuous (2 span)",
            BridgeSpanType::Continuous3Span => "continuous (3 span)",
        }
    }
}

fn default_carriageway_width() -> f64 {
    7500.0
}
fn default_num_lanes() -> u32 {
    2
}
fn default_num_girders() -> u32 {
    2
}
fn default_concrete_grade() -> String {
    "M30".to_string()
}
fn default_live_load_class() -> String {
    "CLASS_A".to_string()
}
fn default_num_lanes_loaded() -> u32 {
    2
}
fn default_wearing_coat_thickness() -> f64 {
    75.0
}
fn default_crash_barrier_load() -> f64 {
    10.0
}

/// Input parameters for plate girder bridge design.
///
/// ## Example
///
/// ```rust
/// use bridge_core::design::PlateGirderInput;
///
/// let input = PlateGirderInput::new("NH-44 ROB", "Km 245+500", 30_000.0, 3000.0);
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateGirderInput {
    // Project identification
    pub project_name: String,
    pub bridge_name: String,
    #[serde(default)]
    pub chainage: Option<String>,

    // Span geometry
    /// Effective span (mm)
    pub effective_span: f64,
    #[serde(default)]
    pub span_type: BridgeSpanType,

    // Cross-section geometry
    /// Clear carriageway width (mm)
    #[serde(default = "default_carriageway_width")]
    pub carriageway_width: f64,
    #[serde(default = "default_num_lanes")]
    pub num_lanes: u32,
    /// Footpath width each side (mm)
    #[serde(default)]
    pub footpath_width: f64,

    // Girder configuration
    #[serde(default = "default_num_girders")]
    pub num_girders: u32,
    /// Centre-to-centre girder spacing (mm)
    pub girder_spacing: f64,

    // Materials
    #[serde(default)]
    pub steel_grade: SteelGrade,
    /// Deck slab concrete grade, e.g. "M30"
    #[serde(default = "default_concrete_grade")]
    pub concrete_grade: String,

    // Explicit plate dimensions; None means auto sizing
    #[serde(default)]
    pub web_depth: Option<f64>,
    #[serde(default)]
    pub web_thickness: Option<f64>,
    #[serde(default)]
    pub flange_width: Option<f64>,
    #[serde(default)]
    pub flange_thickness: Option<f64>,

    // Loading
    /// IRC vehicle designation, e.g. "CLASS_A", "CLASS_70R", "CLASS_AA"
    #[serde(default = "default_live_load_class")]
    pub live_load_class: String,
    #[serde(default = "default_num_lanes_loaded")]
    pub num_lanes_loaded: u32,

    // Superimposed dead loads
    /// Wearing coat thickness (mm)
    #[serde(default = "default_wearing_coat_thickness")]
    pub wearing_coat_thickness: f64,
    /// Crash barrier UDL (kN/m)
    #[serde(default = "default_crash_barrier_load")]
    pub crash_barrier_load: f64,
}

impl PlateGirderInput {
    /// Input with the standard defaults for everything except the
    /// identifiers, span, and girder spacing.
    pub fn new(
        project_name: impl Into<String>,
        bridge_name: impl Into<String>,
        effective_span_mm: f64,
        girder_spacing_mm: f64,
    ) -> Self {
        PlateGirderInput {
            project_name: project_name.into(),
            bridge_name: bridge_name.into(),
            chainage: None,
            effective_span: effective_span_mm,
            span_type: BridgeSpanType::SimplySupported,
            carriageway_width: default_carriageway_width(),
            num_lanes: default_num_lanes(),
            footpath_width: 0.0,
            num_girders: default_num_girders(),
            girder_spacing: girder_spacing_mm,
            steel_grade: SteelGrade::default(),
            concrete_grade: default_concrete_grade(),
            web_depth: None,
            web_thickness: None,
            flange_width: None,
            flange_thickness: None,
            live_load_class: default_live_load_class(),
            num_lanes_loaded: default_num_lanes_loaded(),
            wearing_coat_thickness: default_wearing_coat_thickness(),
            crash_barrier_load: default_crash_barrier_load(),
        }
    }

    /// Yield strength fy of the selected steel grade (MPa)
    pub fn yield_strength(&self) -> f64 {
        self.steel_grade.yield_strength_mpa()
    }

    /// Ultimate tensile strength fu of the selected steel grade (MPa)
    pub fn ultimate_strength(&self) -> f64 {
        self.steel_grade.ultimate_strength_mpa()
    }

    /// Validate all input parameters.
    ///
    /// Returns the first violation found; the pipeline refuses to run
    /// on invalid input.
    pub fn validate(&self) -> CalcResult<()> {
        if self.project_name.trim().is_empty() {
            return Err(CalcError::missing_field("project_name"));
        }
        if self.bridge_name.trim().is_empty() {
            return Err(CalcError::missing_field("bridge_name"));
        }

        if self.effective_span <= 0.0 {
            return Err(CalcError::invalid_input(
                "effective_span",
                self.effective_span.to_string(),
                "Effective span must be positive",
            ));
        }
        if self.effective_span > 60_000.0 {
            return Err(CalcError::invalid_input(
                "effective_span",
                self.effective_span.to_string(),
                "Span exceeds the typical 60 m plate girder limit; consider a box girder or cable-stayed design",
            ));
        }

        if self.span_type != BridgeSpanType::SimplySupported {
            return Err(CalcError::invalid_input(
                "span_type",
                self.span_type.display_name(),
                "Only simply supported spans are supported",
            ));
        }

        if self.carriageway_width <= 0.0 {
            return Err(CalcError::invalid_input(
                "carriageway_width",
                self.carriageway_width.to_string(),
                "Carriageway width must be positive",
            ));
        }
        if !(1..=8).contains(&self.num_lanes) {
            return Err(CalcError::invalid_input(
                "num_lanes",
                self.num_lanes.to_string(),
                "Number of lanes must be between 1 and 8",
            ));
        }
        if self.footpath_width < 0.0 {
            return Err(CalcError::invalid_input(
                "footpath_width",
                self.footpath_width.to_string(),
                "Footpath width cannot be negative",
            ));
        }

        if !(2..=10).contains(&self.num_girders) {
            return Err(CalcError::invalid_input(
                "num_girders",
                self.num_girders.to_string(),
                "Number of main girders must be between 2 and 10",
            ));
        }
        if self.girder_spacing <= 0.0 {
            return Err(CalcError::invalid_input(
                "girder_spacing",
                self.girder_spacing.to_string(),
                "Girder spacing must be positive",
            ));
        }

        if !is_valid_concrete_grade(&self.concrete_grade) {
            return Err(CalcError::invalid_input(
                "concrete_grade",
                self.concrete_grade.clone(),
                "Concrete grade must look like M25, M30, ...",
            ));
        }

        if let Some(d) = self.web_depth {
            if d <= 0.0 {
                return Err(CalcError::invalid_input(
                    "web_depth",
                    d.to_string(),
                    "Web depth must be positive",
                ));
            }
            if d < self.effective_span / 25.0 {
                return Err(CalcError::invalid_input(
                    "web_depth",
                    d.to_string(),
                    format!(
                        "Web depth too shallow for span {} mm; minimum recommended {:.0} mm (span/15)",
                        self.effective_span,
                        self.effective_span / 15.0
                    ),
                ));
            }
        }
        for (field, value) in [
            ("web_thickness", self.web_thickness),
            ("flange_width", self.flange_width),
            ("flange_thickness", self.flange_thickness),
        ] {
            if let Some(v) = value {
                if v <= 0.0 {
                    return Err(CalcError::invalid_input(
                        field,
                        v.to_string(),
                        "Plate dimension must be positive",
                    ));
                }
            }
        }

        // Vehicle designation must resolve in the catalog
        vehicle_by_name(&self.live_load_class)?;

        if self.num_lanes_loaded < 1 {
            return Err(CalcError::invalid_input(
                "num_lanes_loaded",
                self.num_lanes_loaded.to_string(),
                "At least one lane must be loaded",
            ));
        }
        if self.wearing_coat_thickness < 0.0 {
            return Err(CalcError::invalid_input(
                "wearing_coat_thickness",
                self.wearing_coat_thickness.to_string(),
                "Wearing coat thickness cannot be negative",
            ));
        }
        if self.crash_barrier_load < 0.0 {
            return Err(CalcError::invalid_input(
                "crash_barrier_load",
                self.crash_barrier_load.to_string(),
                "Crash barrier load cannot be negative",
            ));
        }

        Ok(())
    }
}

fn is_valid_concrete_grade(grade: &str) -> bool {
    let bytes = grade.as_bytes();
    bytes.len() == 3
        && bytes[0] == b'M'
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_valid() {
        let input = PlateGirderInput::new("Test", "B1", 30_000.0, 3000.0);
        assert!(input.validate().is_ok());
        assert_eq!(input.yield_strength(), 250.0);
        assert_eq!(input.ultimate_strength(), 410.0);
    }

    #[test]
    fn test_span_limits() {
        let mut input = PlateGirderInput::new("Test", "B1", -100.0, 3000.0);
        assert!(input.validate().is_err());
        input.effective_span = 75_000.0;
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("60 m"));
    }

    #[test]
    fn test_continuous_span_rejected() {
        let mut input = PlateGirderInput::new("Test", "B1", 30_000.0, 3000.0);
        input.span_type = BridgeSpanType::Continuous2Span;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_shallow_web_depth_rejected() {
        let mut input = PlateGirderInput::new("Test", "B1", 30_000.0, 3000.0);
        input.web_depth = Some(1000.0); // less than span/25 = 1200
        assert!(input.validate().is_err());
        input.web_depth = Some(2000.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_unknown_vehicle_rejected() {
        let mut input = PlateGirderInput::new("Test", "B1", 30_000.0, 3000.0);
        input.live_load_class = "CLASS_Z".to_string();
        assert_eq!(input.validate().unwrap_err().error_code(), "VEHICLE_NOT_FOUND");
    }

    #[test]
    fn test_concrete_grade_pattern() {
        let mut input = PlateGirderInput::new("Test", "B1", 30_000.0, 3000.0);
        input.concrete_grade = "C30".to_string();
        assert!(input.validate().is_err());
        input.concrete_grade = "M45".to_string();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_missing_identifiers() {
        let input = PlateGirderInput::new("", "B1", 30_000.0, 3000.0);
        assert_eq!(input.validate().unwrap_err().error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_input_deserializes_with_defaults() {
        let json = r#"{
            "project_name": "NH-44 ROB",
            "bridge_name": "Km 245+500",
            "effective_span": 30000,
            "girder_spacing": 3000
        }"#;
        let input: PlateGirderInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.num_girders, 2);
        assert_eq!(input.live_load_class, "CLASS_A");
        assert_eq!(input.wearing_coat_thickness, 75.0);
        assert!(input.validate().is_ok());
    }
}
