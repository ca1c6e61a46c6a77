//! # bridge_core - Steel Plate Girder Bridge Design Engine
//!
//! `bridge_core` implements limit state design of welded steel plate
//! girder highway bridges: IRC moving-load analysis via influence lines,
//! section property calculation and classification, and IS 800:2007
//! capacity checks. All inputs and outputs are JSON-serializable, so
//! CLI, report, and web layers consume the same typed records.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Complete Reports**: an inadequate design returns a full report
//!   with a FAIL verdict, never an error
//!
//! ## Quick Start
//!
//! ```rust
//! use bridge_core::design::{design_plate_girder, PlateGirderInput};
//!
//! let input = PlateGirderInput::new("NH-44 ROB", "Km 245+500", 30_000.0, 3000.0);
//! let report = design_plate_girder(&input).unwrap();
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`design`] - The end-to-end design orchestrator and its input/report records
//! - [`loads`] - IRC vehicle catalog, influence lines, load combinations
//! - [`section`] - Plate girder section properties and classification
//! - [`capacity`] - Moment, shear, deflection, and bearing checks
//! - [`materials`] - Steel grades and material constants
//! - [`codes`] - Design-code registry
//! - [`errors`] - Structured error types

pub mod capacity;
pub mod codes;
pub mod design;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod section;

// Re-export commonly used types at crate root for convenience
pub use design::{design_plate_girder, DesignReport, PlateGirderInput};
pub use errors::{CalcError, CalcResult};
pub use materials::SteelGrade;
pub use section::{PlateGirderSection, SectionClass};
