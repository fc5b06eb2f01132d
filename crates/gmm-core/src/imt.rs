//! Intensity measure types.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ground motion intensity measure: peak values and 5%-damped spectral
/// accelerations at discrete response periods.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Imt {
    Pga,
    Pgv,
    Sa0p01,
    Sa0p02,
    Sa0p03,
    Sa0p05,
    Sa0p075,
    Sa0p1,
    Sa0p15,
    Sa0p2,
    Sa0p25,
    Sa0p3,
    Sa0p4,
    Sa0p5,
    Sa0p75,
    Sa1p0,
    Sa1p5,
    Sa2p0,
    Sa3p0,
    Sa4p0,
    Sa5p0,
    Sa7p5,
    Sa10p0,
}

static TABLE: [(Imt, &str, Option<f64>); 23] = [
    (Imt::Pga, "PGA", None),
    (Imt::Pgv, "PGV", None),
    (Imt::Sa0p01, "SA0P01", Some(0.01)),
    (Imt::Sa0p02, "SA0P02", Some(0.02)),
    (Imt::Sa0p03, "SA0P03", Some(0.03)),
    (Imt::Sa0p05, "SA0P05", Some(0.05)),
    (Imt::Sa0p075, "SA0P075", Some(0.075)),
    (Imt::Sa0p1, "SA0P1", Some(0.1)),
    (Imt::Sa0p15, "SA0P15", Some(0.15)),
    (Imt::Sa0p2, "SA0P2", Some(0.2)),
    (Imt::Sa0p25, "SA0P25", Some(0.25)),
    (Imt::Sa0p3, "SA0P3", Some(0.3)),
    (Imt::Sa0p4, "SA0P4", Some(0.4)),
    (Imt::Sa0p5, "SA0P5", Some(0.5)),
    (Imt::Sa0p75, "SA0P75", Some(0.75)),
    (Imt::Sa1p0, "SA1P0", Some(1.0)),
    (Imt::Sa1p5, "SA1P5", Some(1.5)),
    (Imt::Sa2p0, "SA2P0", Some(2.0)),
    (Imt::Sa3p0, "SA3P0", Some(3.0)),
    (Imt::Sa4p0, "SA4P0", Some(4.0)),
    (Imt::Sa5p0, "SA5P0", Some(5.0)),
    (Imt::Sa7p5, "SA7P5", Some(7.5)),
    (Imt::Sa10p0, "SA10P0", Some(10.0)),
];

impl Imt {
    /// Every intensity measure in ascending order.
    pub fn all() -> impl ExactSizeIterator<Item = Imt> {
        TABLE.iter().map(|(imt, _, _)| *imt)
    }

    fn entry(&self) -> &'static (Imt, &'static str, Option<f64>) {
        // TABLE is ordered by discriminant
        &TABLE[*self as usize]
    }

    /// Stable identifier, e.g. `PGA` or `SA0P2`.
    pub fn id(&self) -> &'static str {
        self.entry().1
    }

    /// Response period in seconds; `None` for peak measures.
    pub fn period(&self) -> Option<f64> {
        self.entry().2
    }

    /// Whether this is a spectral acceleration.
    pub fn is_sa(&self) -> bool {
        self.period().is_some()
    }

    /// Spectral acceleration at exactly `period` seconds, if supported.
    pub fn from_period(period: f64) -> Option<Imt> {
        TABLE
            .iter()
            .find(|(_, _, p)| *p == Some(period))
            .map(|(imt, _, _)| *imt)
    }
}

impl Display for Imt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a string names no known [`Imt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseImtError(String);

impl Display for ParseImtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown intensity measure '{}'", self.0)
    }
}

impl std::error::Error for ParseImtError {}

impl FromStr for Imt {
    type Err = ParseImtError;

    /// Accepts identifiers (`PGA`, `SA0P2`, case-insensitive) or a bare
    /// period in seconds (`0.2`) as used for coefficient table keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((imt, _, _)) = TABLE
            .iter()
            .find(|(_, id, _)| id.eq_ignore_ascii_case(trimmed))
        {
            return Ok(*imt);
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Imt::from_period)
            .ok_or_else(|| ParseImtError(s.to_string()))
    }
}

impl From<Imt> for String {
    fn from(imt: Imt) -> Self {
        imt.id().to_string()
    }
}

impl TryFrom<String> for Imt {
    type Error = ParseImtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_discriminants() {
        for (idx, imt) in Imt::all().enumerate() {
            assert_eq!(imt as usize, idx);
        }
    }

    #[test]
    fn parses_ids_and_periods() {
        assert_eq!("PGA".parse::<Imt>().unwrap(), Imt::Pga);
        assert_eq!("sa0p2".parse::<Imt>().unwrap(), Imt::Sa0p2);
        assert_eq!("0.2".parse::<Imt>().unwrap(), Imt::Sa0p2);
        assert_eq!("10.0".parse::<Imt>().unwrap(), Imt::Sa10p0);
        assert_eq!("1".parse::<Imt>().unwrap(), Imt::Sa1p0);
        assert!("0.33".parse::<Imt>().is_err());
        assert!("PGD".parse::<Imt>().is_err());
    }

    #[test]
    fn peak_measures_have_no_period() {
        assert_eq!(Imt::Pga.period(), None);
        assert!(!Imt::Pgv.is_sa());
        assert_eq!(Imt::Sa0p075.period(), Some(0.075));
    }
}
