use thiserror::Error;

/// Configuration shared by the root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating a root finder config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol: 1e-10,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite or not positive.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self { max_iters, tol })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance of the stop test.
    ///
    /// Bisection compares it against the half-width of its bracket; the other
    /// solvers compare it against the distance between successive
    /// approximations.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, -1e-6), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::Tolerance));
    }

    #[test]
    fn keeps_valid_values() {
        let config = Config::new(7, 1e-4).expect("valid config");
        assert_eq!(config.max_iters(), 7);
        assert_eq!(config.tol(), 1e-4);
    }
}
