//! Design Code Registry
//!
//! Immutable catalog of the Indian design codes this engine implements
//! clauses from. Built once at startup; callers receive references into
//! the static table rather than mutating any process-wide state.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// A design code edition referenced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignCode {
    /// Canonical designation, e.g. "IRC:6-2017"
    pub name: &'static str,
    pub title: &'static str,
    pub year: u16,
    /// What the engine uses this code for
    pub scope: &'static str,
}

/// Immutable lookup table of design codes, keyed by designation.
#[derive(Debug)]
pub struct CodeRegistry {
    codes: BTreeMap<&'static str, DesignCode>,
}

impl CodeRegistry {
    /// The standard registry built once at startup.
    pub fn standard() -> &'static CodeRegistry {
        &CODE_REGISTRY
    }

    pub fn get(&self, name: &str) -> Option<&DesignCode> {
        self.codes.get(name)
    }

    /// Names of all registered design codes, sorted.
    pub fn list(&self) -> Vec<&'static str> {
        self.codes.keys().copied().collect()
    }
}

static CODE_REGISTRY: Lazy<CodeRegistry> = Lazy::new(|| {
    let codes = [
        DesignCode {
            name: "IRC:6-2017",
            title: "Standard Specifications and Code of Practice for Road Bridges, Section II: Loads and Load Combinations",
            year: 2017,
            scope: "Vehicle load trains, impact factors, lane factors, partial safety factors",
        },
        DesignCode {
            name: "IRC:24-2010",
            title: "Standard Specifications and Code of Practice for Road Bridges, Section V: Steel Road Bridges",
            year: 2010,
            scope: "Deflection limits and steel bridge detailing",
        },
        DesignCode {
            name: "IS 800:2007",
            title: "General Construction in Steel - Code of Practice",
            year: 2007,
            scope: "Section classification, moment, shear, and bearing capacities",
        },
        DesignCode {
            name: "IS 2062:2011",
            title: "Hot Rolled Medium and High Tensile Structural Steel",
            year: 2011,
            scope: "Steel grade strength values",
        },
    ];
    CodeRegistry {
        codes: codes.into_iter().map(|c| (c.name, c)).collect(),
    }
});

/// Look up a design code in the standard registry.
pub fn get_code(name: &str) -> Option<&'static DesignCode> {
    CodeRegistry::standard().get(name)
}

/// Names of all codes in the standard registry, sorted.
pub fn list_codes() -> Vec<&'static str> {
    CodeRegistry::standard().list()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_codes() {
        assert!(get_code("IRC:6-2017").is_some());
        assert!(get_code("IS 800:2007").is_some());
        assert!(get_code("AISC 360").is_none());
    }

    #[test]
    fn test_list_codes_complete() {
        let names = list_codes();
        assert_eq!(names.len(), 4);
        assert!(names.contains(&"IRC:24-2010"));
    }

    #[test]
    fn test_code_metadata() {
        let code = get_code("IRC:6-2017").unwrap();
        assert_eq!(code.year, 2017);
        assert!(code.scope.contains("impact"));
    }
}
