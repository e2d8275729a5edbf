use crate::error::ProgramError;

/// Tuning knobs for building and solving a linear program
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum pivots before giving up with `Status::Undefined`
    pub max_iterations: usize,
    /// Tolerance for floating point comparisons
    pub tolerance: f64,
    /// Base artificial penalty; the program multiplies it by its largest
    /// objective coefficient
    pub big_m: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10000,
            tolerance: 1e-9,
            big_m: 1e6,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// M has to dominate every objective coefficient, but the larger it is the
    /// more precision the reduced costs lose while artificials are basic.
    pub fn with_big_m(mut self, big_m: f64) -> Self {
        self.big_m = big_m;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ProgramError> {
        if self.max_iterations == 0 {
            return Err(ProgramError::InvalidConfig("max_iterations must be at least 1".into()));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ProgramError::InvalidConfig(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        if !self.big_m.is_finite() || self.big_m <= 0.0 {
            return Err(ProgramError::InvalidConfig(format!(
                "big_m must be finite and positive, got {}",
                self.big_m
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            SolverConfig::new().with_max_iterations(0),
            SolverConfig::new().with_tolerance(f64::NAN),
            SolverConfig::new().with_tolerance(-1.0),
            SolverConfig::new().with_big_m(0.0),
            SolverConfig::new().with_big_m(f64::INFINITY),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(ProgramError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }
}
