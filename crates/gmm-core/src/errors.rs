//! Structured error types shared across GMM crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::imt::Imt;
use crate::range::Range;

/// Structured payload attached to configuration level [`GmmError`] variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (column names, periods, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for ground motion evaluation.
///
/// `OutOfRange` is an input defect and is the only failure an evaluation can
/// produce. The remaining families describe configuration defects that are
/// surfaced when a model instance is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GmmError {
    /// An input value lies outside its declared valid interval.
    #[error("{field} value {value} is outside {range}")]
    OutOfRange {
        /// Label of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
        /// The violated interval, including its boundary kind.
        range: Range,
    },
    /// The model has no coefficients for the requested intensity measure.
    #[error("{model} does not support {imt}")]
    MissingPeriod {
        /// Model identifier.
        model: String,
        /// Requested intensity measure.
        imt: Imt,
    },
    /// A coefficient table is malformed or incomplete.
    #[error("coefficient error: {0}")]
    Coefficients(ErrorInfo),
    /// A model configuration document could not be decoded.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl GmmError {
    /// Returns a stable machine readable code for the error.
    pub fn code(&self) -> &str {
        match self {
            GmmError::OutOfRange { .. } => "out-of-range",
            GmmError::MissingPeriod { .. } => "missing-period",
            GmmError::Coefficients(info) | GmmError::Config(info) => &info.code,
        }
    }

    /// Whether the error describes a bad input rather than a bad configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(self, GmmError::OutOfRange { .. })
    }

    /// Adds a context entry to configuration level errors; input errors and
    /// missing periods already carry their context and are returned as is.
    pub fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            GmmError::Coefficients(info) => GmmError::Coefficients(info.with_context(key, value)),
            GmmError::Config(info) => GmmError::Config(info.with_context(key, value)),
            other => other,
        }
    }
}

/// Builds a [`GmmError::Coefficients`] from any displayable cause.
pub fn coefficient_error(code: &str, err: impl ToString) -> GmmError {
    GmmError::Coefficients(ErrorInfo::new(code, err.to_string()))
}

/// Builds a [`GmmError::Config`] from any displayable cause.
pub fn config_error(code: &str, err: impl ToString) -> GmmError {
    GmmError::Config(ErrorInfo::new(code, err.to_string()))
}
