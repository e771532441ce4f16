//! Examine parameters.
//!
//! Contains [`ExamineParams`], the configuration that is fixed once per run
//! and shared by every stage of the examine engine.

use serde::{Deserialize, Serialize};

use crate::error::{ExamineError, Result};

pub const DEFAULT_Y_TOLERANCE: f64 = 3.0;
pub const DEFAULT_MIN_GAP: f64 = 12.0;
pub const DEFAULT_CLUSTER_TOLERANCE: f64 = 3.0;
pub const DEFAULT_TYPE_KEYS: &[&str] = &["TicketType"];
pub const DEFAULT_NUMBER_KEYS: &[&str] = &["TicketNumber"];

/// How the key/value boundary of a page is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Tokens starting left of `x` are key text.
    Fixed { x: f64 },
    /// Infer the boundary from the widest gap of each line.
    ///
    /// Only gaps of at least `min_gap` vote. Votes closer together than
    /// `cluster_tolerance` count as the same column.
    InferredGap { min_gap: f64, cluster_tolerance: f64 },
}

impl Default for SplitPolicy {
    fn default() -> Self {
        SplitPolicy::InferredGap {
            min_gap: DEFAULT_MIN_GAP,
            cluster_tolerance: DEFAULT_CLUSTER_TOLERANCE,
        }
    }
}

/// Key names that identify the document as a whole.
///
/// Matching is ASCII case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityKeys {
    pub type_keys: Vec<String>,
    pub number_keys: Vec<String>,
}

impl Default for IdentityKeys {
    fn default() -> Self {
        Self {
            type_keys: DEFAULT_TYPE_KEYS.iter().map(|s| s.to_string()).collect(),
            number_keys: DEFAULT_NUMBER_KEYS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl IdentityKeys {
    pub fn is_type_key(&self, key: &str) -> bool {
        self.type_keys.iter().any(|k| k.eq_ignore_ascii_case(key))
    }

    pub fn is_number_key(&self, key: &str) -> bool {
        self.number_keys.iter().any(|k| k.eq_ignore_ascii_case(key))
    }
}

/// Parameters for the examine phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamineParams {
    /// Two tokens belong to the same line if their vertical centers are
    /// within this distance (in points) of the line's running average.
    pub y_tolerance: f64,

    /// Key/value boundary policy.
    pub split: SplitPolicy,

    /// Identity key names.
    pub identity: IdentityKeys,
}

impl Default for ExamineParams {
    fn default() -> Self {
        Self {
            y_tolerance: DEFAULT_Y_TOLERANCE,
            split: SplitPolicy::default(),
            identity: IdentityKeys::default(),
        }
    }
}

impl ExamineParams {
    /// Creates validated parameters.
    pub fn new(y_tolerance: f64, split: SplitPolicy, identity: IdentityKeys) -> Result<Self> {
        let params = Self {
            y_tolerance,
            split,
            identity,
        };
        params.validate()?;
        Ok(params)
    }

    /// Same as the defaults, but with a fixed split boundary.
    pub fn with_fixed_split(x: f64) -> Self {
        Self {
            split: SplitPolicy::Fixed { x },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.y_tolerance.is_finite() || self.y_tolerance < 0.0 {
            return Err(ExamineError::InvalidParams(format!(
                "y_tolerance must be a non-negative number, got {}",
                self.y_tolerance
            )));
        }
        match self.split {
            SplitPolicy::Fixed { x } if !x.is_finite() => Err(ExamineError::InvalidParams(
                format!("fixed split must be finite, got {x}"),
            )),
            SplitPolicy::InferredGap {
                min_gap,
                cluster_tolerance,
            } if !(min_gap.is_finite() && min_gap > 0.0)
                || !(cluster_tolerance.is_finite() && cluster_tolerance >= 0.0) =>
            {
                Err(ExamineError::InvalidParams(format!(
                    "inferred split needs min_gap > 0 and cluster_tolerance >= 0, got {min_gap} and {cluster_tolerance}"
                )))
            }
            _ => Ok(()),
        }
    }
}
