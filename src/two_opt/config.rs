//! 2-opt configuration.

/// Configuration parameters for 2-opt.
///
/// # Examples
///
/// ```
/// use u_tsp::two_opt::TwoOptConfig;
///
/// let config = TwoOptConfig::default().with_max_passes(50);
/// assert_eq!(config.max_passes, Some(50));
/// assert!(TwoOptConfig::default().max_passes.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoOptConfig {
    /// Maximum number of full passes over all segment pairs.
    ///
    /// `None` runs until a local optimum is reached. Each pass costs
    /// O(n²) distance evaluations and the number of passes is not bounded
    /// in general, so large instances may want a cap.
    pub max_passes: Option<usize>,
}

impl TwoOptConfig {
    /// Caps the number of passes.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }

    /// Removes the pass cap.
    pub fn unbounded(mut self) -> Self {
        self.max_passes = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(TwoOptConfig::default().max_passes, None);
    }

    #[test]
    fn test_cap_and_uncap() {
        let config = TwoOptConfig::default().with_max_passes(3);
        assert_eq!(config.max_passes, Some(3));
        assert_eq!(config.unbounded().max_passes, None);
    }
}
