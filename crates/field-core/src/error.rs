// File: crates/field-core/src/error.rs
// Summary: Validation and plot error types surfaced to the user as a single message.

use thiserror::Error;

/// What was wrong with a single charge line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineFault {
    /// Line did not split into exactly three tokens.
    TokenCount(usize),
    /// One of x, y, q did not parse as a finite number.
    NotANumber,
}

/// Input validation failures. All of them are detected before any sampling starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("at least one charge must be entered")]
    EmptyInput,

    #[error("line {line}: {}", describe_fault(.fault))]
    MalformedChargeLine { line: usize, fault: LineFault },

    #[error("grid parameters: {0}")]
    InvalidGrid(String),

    #[error("equipotential level count must be within 1..=100, got {0}")]
    InvalidLevelCount(i64),
}

impl ValidationError {
    /// 1-based line number for malformed charge lines.
    pub fn line(&self) -> Option<usize> {
        match self {
            ValidationError::MalformedChargeLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

fn describe_fault(fault: &LineFault) -> String {
    match fault {
        LineFault::TokenCount(n) => format!("expected three values (x y q), found {n}"),
        LineFault::NotANumber => "x, y and q must be finite numbers".to_string(),
    }
}

/// Failure of a plot or zoom request.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] anyhow::Error),
}
