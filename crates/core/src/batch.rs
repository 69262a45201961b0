//! Welcome a batch of raw names and summarize the run.

use itertools::{Either as Side, Itertools};
use serde::Serialize;

use crate::greeting::welcome_message;
use crate::name::{NameRules, ValidatedName};

/// A name that failed validation and the first rule it broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub input: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    /// Validated names in input order, one per greeting.
    pub accepted: Vec<ValidatedName>,
    pub greetings: Vec<String>,
    pub rejected: Vec<Rejection>,
    pub success_rate: f64,
}

impl BatchReport {
    pub fn valid_count(&self) -> usize {
        self.greetings.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Validate every name, greet the valid ones, report the rest.
#[allow(clippy::cast_precision_loss)]
pub fn welcome_batch<S: AsRef<str>>(names: &[S], rules: &NameRules) -> BatchReport {
    let (accepted, rejected): (Vec<ValidatedName>, Vec<Rejection>) =
        names.iter().map(|name| name.as_ref()).partition_map(|raw| {
            rules.check(raw).map_or_else(
                |violation| {
                    Side::Right(Rejection {
                        input: raw.to_owned(),
                        reason: violation.to_string(),
                    })
                },
                Side::Left,
            )
        });
    let greetings: Vec<String> = accepted.iter().map(welcome_message).collect();

    let total = names.len();
    let success_rate = if total == 0 {
        0.0
    } else {
        greetings.len() as f64 / total as f64
    };

    tracing::debug!(total, valid = greetings.len(), "batch processed");

    BatchReport {
        total,
        accepted,
        greetings,
        rejected,
        success_rate,
    }
}
