//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] fixes the policies an engine applies for its whole
//! lifetime: the edge behaviour used when counting neighbours, the
//! transition rule, and the ceiling on grid size enforced by `init`.

use std::error::Error;
use std::fmt;

use cgol_core::RuleError;
use cgol_space::EdgeBehavior;

use crate::rule::LifeRule;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_cells` is zero, so no grid could ever be created.
    ZeroCellLimit,
    /// The rule string could not be parsed.
    Rule(RuleError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCellLimit => write!(f, "max_cells must be at least 1"),
            Self::Rule(e) => write!(f, "rule: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rule(e) => Some(e),
            Self::ZeroCellLimit => None,
        }
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Policies fixed for the lifetime of a [`LifeEngine`](crate::LifeEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// How neighbours beyond the grid edge are treated. Default: `Absorb`.
    pub edge: EdgeBehavior,
    /// Transition rule. Default: Conway (`B3/S23`).
    pub rule: LifeRule,
    /// Largest `width * height` that `init` accepts. Default: 16 Mi cells
    /// (two 16 MiB buffers).
    pub max_cells: usize,
}

impl EngineConfig {
    /// Default cell ceiling.
    pub const DEFAULT_MAX_CELLS: usize = 1 << 24;

    /// Replace the rule with one parsed from `B.../S...` notation.
    pub fn with_rule_str(mut self, rule: &str) -> Result<Self, ConfigError> {
        self.rule = rule.parse()?;
        Ok(self)
    }

    /// Replace the edge behaviour.
    pub fn with_edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cells == 0 {
            return Err(ConfigError::ZeroCellLimit);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            edge: EdgeBehavior::Absorb,
            rule: LifeRule::CONWAY,
            max_cells: Self::DEFAULT_MAX_CELLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let c = EngineConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.edge, EdgeBehavior::Absorb);
        assert_eq!(c.rule, LifeRule::CONWAY);
    }

    #[test]
    fn zero_cell_limit_rejected() {
        let c = EngineConfig {
            max_cells: 0,
            ..EngineConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroCellLimit));
    }

    #[test]
    fn with_rule_str_parses() {
        let c = EngineConfig::default().with_rule_str("B36/S23").unwrap();
        assert_eq!(c.rule, LifeRule::HIGH_LIFE);
    }

    #[test]
    fn with_rule_str_surfaces_rule_error() {
        let err = EngineConfig::default().with_rule_str("nope").unwrap_err();
        assert!(matches!(err, ConfigError::Rule(_)));
        assert!(err.source().is_some());
    }
}
