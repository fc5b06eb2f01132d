//! Period-indexed coefficient tables.

use std::collections::BTreeMap;
use std::io;

use csv::{ReaderBuilder, StringRecord, Trim};
use gmm_core::errors::{coefficient_error, GmmError};
use gmm_core::Imt;
use serde::de::DeserializeOwned;

/// Header of the column holding the period key (`PGA`, `0.2`, ...).
pub const KEY_COLUMN: &str = "T";

/// A strongly typed row of named coefficients for one period.
pub trait CoefficientRow: DeserializeOwned + Copy + Send + Sync + 'static {
    /// Column names the row reads; every one must be present in a table.
    const NAMES: &'static [&'static str];
}

/// Immutable table of coefficient rows keyed by intensity measure.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable<R> {
    model: &'static str,
    rows: BTreeMap<Imt, R>,
}

fn table_error(model: &str, code: &str, message: impl ToString) -> GmmError {
    coefficient_error(code, message).with_context("model", model)
}

impl<R: CoefficientRow> CoefficientTable<R> {
    /// Parses a CSV table held in memory.
    pub fn from_csv_str(model: &'static str, text: &str) -> Result<Self, GmmError> {
        Self::from_csv_reader(model, text.as_bytes())
    }

    /// Parses a CSV table whose first column is [`KEY_COLUMN`] and whose
    /// remaining columns are coefficient names. Lines starting with `#` are
    /// ignored; extra columns are allowed.
    pub fn from_csv_reader<Rd: io::Read>(model: &'static str, reader: Rd) -> Result<Self, GmmError> {
        let mut csv = ReaderBuilder::new()
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let headers = csv
            .headers()
            .map_err(|err| table_error(model, "coefficient-header", err))?
            .clone();
        if headers.get(0) != Some(KEY_COLUMN) {
            return Err(
                table_error(model, "coefficient-key-column", "first column must be the period key")
                    .with_context("expected", KEY_COLUMN)
                    .with_context("found", headers.get(0).unwrap_or_default()),
            );
        }
        let names: StringRecord = headers.iter().skip(1).collect();
        for name in R::NAMES {
            if !names.iter().any(|column| column == *name) {
                return Err(
                    table_error(model, "missing-coefficient", "coefficient column absent")
                        .with_context("column", *name),
                );
            }
        }

        let mut rows = BTreeMap::new();
        for record in csv.records() {
            let record = record.map_err(|err| table_error(model, "coefficient-record", err))?;
            let key = record.get(0).unwrap_or_default();
            let imt: Imt = key.parse().map_err(|err: gmm_core::imt::ParseImtError| {
                table_error(model, "unknown-period", err).with_context("key", key)
            })?;
            let values: StringRecord = record.iter().skip(1).collect();
            let row: R = values
                .deserialize(Some(&names))
                .map_err(|err| table_error(model, "bad-coefficient", err).with_context("imt", imt.id()))?;
            if rows.insert(imt, row).is_some() {
                return Err(
                    table_error(model, "duplicate-period", "period appears more than once")
                        .with_context("imt", imt.id()),
                );
            }
        }
        if rows.is_empty() {
            return Err(table_error(model, "empty-table", "table has no rows"));
        }

        tracing::debug!(model, periods = rows.len(), "parsed coefficient table");
        Ok(Self { model, rows })
    }

    /// Returns the row for `imt`, or [`GmmError::MissingPeriod`].
    pub fn for_period(&self, imt: Imt) -> Result<&R, GmmError> {
        self.rows.get(&imt).ok_or_else(|| GmmError::MissingPeriod {
            model: self.model.to_string(),
            imt,
        })
    }

    /// Intensity measures with a row, in ascending order.
    pub fn imts(&self) -> impl Iterator<Item = Imt> + '_ {
        self.rows.keys().copied()
    }

    /// Identifier of the model the table belongs to.
    pub fn model(&self) -> &'static str {
        self.model
    }
}
