//! Step backend selection.
//!
//! Both backends produce identical grids; they differ only in how the
//! scratch buffer is filled during one step.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStrategy {
    /// Row-major, one cell at a time
    #[default]
    Serial,
    /// Rows filled in parallel with rayon
    Parallel,
}

impl StepStrategy {
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Serial",
            StepStrategy::Parallel => "Parallel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(StepStrategy::default(), StepStrategy::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = StepStrategy::all().iter().map(|s| s.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let strategy: StepStrategy = serde_json::from_str("\"parallel\"").unwrap();
        assert_eq!(strategy, StepStrategy::Parallel);
    }
}
