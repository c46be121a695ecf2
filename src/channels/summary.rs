//! Per-reference failures and their aggregate report

use crate::api::AppError;
use std::fmt;
use thiserror::Error;

/// User-facing category of a failed lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Rendered as `<reference> not found`
    NotFound,
    /// Rendered with the server error's own formatting
    RemoteFailure,
}

/// Status codes with a dedicated kind; everything else is `RemoteFailure`.
///
/// A bad request is reported the same way as a missing channel.
pub const STATUS_CLASSIFICATION: &[(u16, FailureKind)] = &[
    (404, FailureKind::NotFound),
    (400, FailureKind::NotFound),
];

pub fn failure_kind(status_code: u16) -> FailureKind {
    STATUS_CLASSIFICATION
        .iter()
        .find(|(code, _)| *code == status_code)
        .map(|(_, kind)| *kind)
        .unwrap_or(FailureKind::RemoteFailure)
}

/// Turn a failed remote call into the error reported for `reference`
pub fn classify(reference: &str, err: &AppError) -> ResolutionError {
    let kind = failure_kind(err.status_code);
    let message = match kind {
        FailureKind::NotFound => format!("{} not found", reference),
        FailureKind::RemoteFailure => err.to_string(),
    };

    ResolutionError {
        reference: reference.to_string(),
        kind,
        message,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ResolutionError {
    reference: String,
    kind: FailureKind,
    message: String,
}

impl ResolutionError {
    /// The id, team id or channel name the failed lookup was made with
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Every failure of a batch, in input order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionSummary {
    errors: Vec<ResolutionError>,
}

impl ResolutionSummary {
    /// `None` when there is nothing to report
    pub fn from_errors(errors: Vec<ResolutionError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[ResolutionError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<ResolutionError> {
        self.errors
    }
}

impl fmt::Display for ResolutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.len() == 1 {
            writeln!(f, "1 error occurred:")?;
        } else {
            writeln!(f, "{} errors occurred:", self.errors.len())?;
        }
        for err in &self.errors {
            writeln!(f, "\t* {}", err)?;
        }
        writeln!(f)
    }
}

impl std::error::Error for ResolutionSummary {}
