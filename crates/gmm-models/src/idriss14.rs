//! Idriss (2014) NGA-West2 model for shallow crustal earthquakes in active
//! tectonic regions.
//!
//! Reference: Idriss, I.M., 2014, An NGA-West2 empirical model for estimating
//! the horizontal spectral values generated by shallow crustal earthquakes,
//! Earthquake Spectra, v. 30, n. 3, p. 1155-1177, doi:10.1193/070613EQS195M.
//!
//! Component is RotD50. PGA uses the 0.01 s coefficients. The recommended
//! Vs30 cap of 1200 m/s is applied; the recommended 150 km distance limit is
//! declared in the constraints only.
//!
//! The bundled table carries PGA and 0.01 s to 0.2 s; other periods are
//! reported as [`GmmError::MissingPeriod`].

use std::sync::OnceLock;

use gmm_core::errors::config_error;
use gmm_core::fault::{DIP_RANGE, RAKE_RANGE};
use gmm_core::{
    Constraints, FaultStyle, Field, GmmError, GmmInput, GroundMotionModel, Imt, Range,
    ScalarGroundMotion,
};
use serde::{Deserialize, Serialize};

use crate::coefficients::{CoefficientRow, CoefficientTable};

/// Registry identifier.
pub const ID: &str = "IDRISS_14";

/// Display name.
pub const NAME: &str = "Idriss (2014)";

const COEFFS_CSV: &str = include_str!("../resources/idriss14.csv");

/// Fields the equation reads and therefore validates.
pub const FIELDS: [Field; 4] = [Field::Mag, Field::Rrup, Field::Rake, Field::Vs30];

/// Coefficients for one period. `_lo` and `_hi` sets apply below and above
/// the magnitude threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Constant term, low magnitudes.
    pub a1_lo: f64,
    /// Linear magnitude scaling, low magnitudes.
    pub a2_lo: f64,
    /// Constant term, high magnitudes.
    pub a1_hi: f64,
    /// Linear magnitude scaling, high magnitudes.
    pub a2_hi: f64,
    /// Quadratic scaling in `(mag_ref - Mw)`.
    pub a3: f64,
    /// Geometric spreading, low magnitudes.
    pub b1_lo: f64,
    /// Magnitude dependence of geometric spreading, low magnitudes.
    pub b2_lo: f64,
    /// Geometric spreading, high magnitudes.
    pub b1_hi: f64,
    /// Magnitude dependence of geometric spreading, high magnitudes.
    pub b2_hi: f64,
    /// Site scaling with ln(Vs30).
    pub xi: f64,
    /// Anelastic attenuation per km of rRup.
    pub gamma: f64,
    /// Reverse faulting adjustment.
    pub phi: f64,
}

impl CoefficientRow for Coefficients {
    const NAMES: &'static [&'static str] = &[
        "a1_lo", "a2_lo", "a1_hi", "a2_hi", "a3", "b1_lo", "b2_lo", "b1_hi", "b2_hi", "xi",
        "gamma", "phi",
    ];
}

fn default_mag_threshold() -> f64 {
    6.75
}

fn default_mag_ref() -> f64 {
    8.5
}

fn default_distance_offset() -> f64 {
    10.0
}

fn default_vs30_cap() -> f64 {
    1200.0
}

fn default_sigma_base() -> f64 {
    1.18
}

fn default_sigma_period_scale() -> f64 {
    0.035
}

fn default_period_floor() -> f64 {
    0.05
}

fn default_period_ceiling() -> f64 {
    3.0
}

fn default_sigma_mag_scale() -> f64 {
    0.06
}

fn default_mag_floor() -> f64 {
    5.0
}

fn default_mag_ceiling() -> f64 {
    7.5
}

/// Published constants of the Idriss (2014) equations.
///
/// Every field defaults to the published value so partial documents only
/// override what they name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Idriss14Config {
    /// Magnitudes strictly above this use the `_hi` coefficients.
    #[serde(default = "default_mag_threshold")]
    pub mag_threshold: f64,
    /// Reference magnitude of the quadratic saturation term.
    #[serde(default = "default_mag_ref")]
    pub mag_ref: f64,
    /// Added to rRup inside the distance logarithm.
    #[serde(default = "default_distance_offset")]
    pub distance_offset: f64,
    /// Ceiling applied to Vs30 inside the site logarithm.
    #[serde(default = "default_vs30_cap")]
    pub vs30_cap: f64,
    /// Constant term of the standard deviation.
    #[serde(default = "default_sigma_base")]
    pub sigma_base: f64,
    /// Scale of the ln(period) term of the standard deviation.
    #[serde(default = "default_sigma_period_scale")]
    pub sigma_period_scale: f64,
    /// Shortest period used by the standard deviation; also used for PGA.
    #[serde(default = "default_period_floor")]
    pub period_floor: f64,
    /// Longest period used by the standard deviation.
    #[serde(default = "default_period_ceiling")]
    pub period_ceiling: f64,
    /// Scale of the magnitude term of the standard deviation.
    #[serde(default = "default_sigma_mag_scale")]
    pub sigma_mag_scale: f64,
    /// Smallest magnitude used by the standard deviation.
    #[serde(default = "default_mag_floor")]
    pub mag_floor: f64,
    /// Largest magnitude used by the standard deviation.
    #[serde(default = "default_mag_ceiling")]
    pub mag_ceiling: f64,
}

impl Default for Idriss14Config {
    fn default() -> Self {
        Self {
            mag_threshold: default_mag_threshold(),
            mag_ref: default_mag_ref(),
            distance_offset: default_distance_offset(),
            vs30_cap: default_vs30_cap(),
            sigma_base: default_sigma_base(),
            sigma_period_scale: default_sigma_period_scale(),
            period_floor: default_period_floor(),
            period_ceiling: default_period_ceiling(),
            sigma_mag_scale: default_sigma_mag_scale(),
            mag_floor: default_mag_floor(),
            mag_ceiling: default_mag_ceiling(),
        }
    }
}

impl Idriss14Config {
    /// Loads and validates a configuration from YAML; absent keys keep
    /// published values.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, GmmError> {
        let config: Self = crate::serde::from_yaml_slice(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from JSON; absent keys keep
    /// published values.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, GmmError> {
        let config: Self = crate::serde::from_json_slice(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects constants that would make the mean or sigma undefined for an
    /// input inside the declared ranges.
    pub fn validate(&self) -> Result<(), GmmError> {
        let constants = [
            ("mag_threshold", self.mag_threshold),
            ("mag_ref", self.mag_ref),
            ("distance_offset", self.distance_offset),
            ("vs30_cap", self.vs30_cap),
            ("sigma_base", self.sigma_base),
            ("sigma_period_scale", self.sigma_period_scale),
            ("period_floor", self.period_floor),
            ("period_ceiling", self.period_ceiling),
            ("sigma_mag_scale", self.sigma_mag_scale),
            ("mag_floor", self.mag_floor),
            ("mag_ceiling", self.mag_ceiling),
        ];
        for (name, value) in constants {
            if !value.is_finite() {
                return Err(invalid(name, value, "constant must be finite"));
            }
        }
        // rRup is never negative, so a positive offset keeps the log defined
        if self.distance_offset <= 0.0 {
            return Err(invalid("distance_offset", self.distance_offset, "must be positive"));
        }
        if self.vs30_cap <= 0.0 {
            return Err(invalid("vs30_cap", self.vs30_cap, "must be positive"));
        }
        if self.period_floor <= 0.0 {
            return Err(invalid("period_floor", self.period_floor, "must be positive"));
        }
        if self.period_floor > self.period_ceiling {
            return Err(invalid(
                "period_ceiling",
                self.period_ceiling,
                "must not be below period_floor",
            ));
        }
        if self.mag_floor > self.mag_ceiling {
            return Err(invalid(
                "mag_ceiling",
                self.mag_ceiling,
                "must not be below mag_floor",
            ));
        }
        Ok(())
    }
}

fn invalid(name: &str, value: f64, message: &str) -> GmmError {
    config_error("invalid-config", message)
        .with_context("model", ID)
        .with_context("field", name)
        .with_context("value", value.to_string())
}

/// Which coefficient set a magnitude selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeRegime {
    /// `Mw <= threshold`
    Low,
    /// `Mw > threshold`
    High,
}

/// Shared, lazily parsed coefficient table.
pub fn coefficients() -> Result<&'static CoefficientTable<Coefficients>, GmmError> {
    static TABLE: OnceLock<Result<CoefficientTable<Coefficients>, GmmError>> = OnceLock::new();
    TABLE
        .get_or_init(|| CoefficientTable::from_csv_str(ID, COEFFS_CSV))
        .as_ref()
        .map_err(Clone::clone)
}

/// Declared input ranges.
pub fn constraints() -> &'static Constraints {
    static CONSTRAINTS: OnceLock<Constraints> = OnceLock::new();
    CONSTRAINTS.get_or_init(|| {
        Constraints::builder()
            .set(Field::Mag, Range::closed(5.0, 8.5))
            .set_distances(150.0)
            .set(Field::Dip, DIP_RANGE)
            .set(Field::Ztop, Range::closed(0.0, 20.0))
            .set(Field::Rake, RAKE_RANGE)
            .set(Field::Vs30, Range::closed_open(450.0, 1500.0))
            // borrowed from ASK14, the model defines no basin term
            .set(Field::Z1p0, Range::closed(0.0, 3.0))
            .build()
    })
}

/// Idriss (2014) instance bound to one intensity measure.
#[derive(Debug, Clone, PartialEq)]
pub struct Idriss14 {
    imt: Imt,
    coeffs: Coefficients,
    config: Idriss14Config,
}

impl Idriss14 {
    /// Creates an instance with the published constants.
    pub fn new(imt: Imt) -> Result<Self, GmmError> {
        Self::with_config(imt, Idriss14Config::default())
    }

    /// Creates an instance with custom constants, rejecting invalid ones.
    pub fn with_config(imt: Imt, config: Idriss14Config) -> Result<Self, GmmError> {
        config.validate()?;
        let coeffs = *coefficients()?.for_period(imt)?;
        tracing::debug!(model = ID, imt = imt.id(), "created model instance");
        Ok(Self {
            imt,
            coeffs,
            config,
        })
    }

    /// Coefficients resolved for this instance's intensity measure.
    pub fn coeffs(&self) -> &Coefficients {
        &self.coeffs
    }

    /// Constants in use.
    pub fn config(&self) -> &Idriss14Config {
        &self.config
    }

    /// Coefficient set selected by `mw`.
    pub fn regime(&self, mw: f64) -> MagnitudeRegime {
        if mw > self.config.mag_threshold {
            MagnitudeRegime::High
        } else {
            MagnitudeRegime::Low
        }
    }

    /// Mean ln ground motion. Does not validate `input`.
    pub fn mean(&self, input: &GmmInput) -> f64 {
        let c = &self.coeffs;
        let cfg = &self.config;
        let mw = input.mw;
        let r_rup = input.r_rup;

        let (a1, a2, b1, b2) = match self.regime(mw) {
            MagnitudeRegime::Low => (c.a1_lo, c.a2_lo, c.b1_lo, c.b2_lo),
            MagnitudeRegime::High => (c.a1_hi, c.a2_hi, c.b1_hi, c.b2_hi),
        };
        let style_term = match FaultStyle::from_rake(input.rake) {
            FaultStyle::Reverse => c.phi,
            _ => 0.0,
        };
        let dm = cfg.mag_ref - mw;

        a1 + a2 * mw + c.a3 * dm * dm - (b1 + b2 * mw) * (r_rup + cfg.distance_offset).ln()
            + c.xi * input.vs30.min(cfg.vs30_cap).ln()
            + c.gamma * r_rup
            + style_term
    }

    /// Standard deviation of ln ground motion; depends only on period and
    /// magnitude.
    pub fn sigma(&self, mw: f64) -> f64 {
        let cfg = &self.config;
        let period = self
            .imt
            .period()
            .map_or(cfg.period_floor, |t| clip(t, cfg.period_floor, cfg.period_ceiling));
        let s1 = cfg.sigma_period_scale * period.ln();
        let s2 = cfg.sigma_mag_scale * clip(mw, cfg.mag_floor, cfg.mag_ceiling);
        cfg.sigma_base + s1 - s2
    }
}

// Saturates at both ends; the floor wins ties.
fn clip(value: f64, floor: f64, ceiling: f64) -> f64 {
    if value <= floor {
        floor
    } else if value < ceiling {
        value
    } else {
        ceiling
    }
}

impl GroundMotionModel for Idriss14 {
    fn id(&self) -> &'static str {
        ID
    }

    fn imt(&self) -> Imt {
        self.imt
    }

    fn constraints(&self) -> &Constraints {
        constraints()
    }

    fn calc(&self, input: &GmmInput) -> Result<ScalarGroundMotion, GmmError> {
        constraints().check_fields(input, &FIELDS)?;
        let mean = self.mean(input);
        let sigma = self.sigma(input.mw);
        tracing::trace!(model = ID, imt = self.imt.id(), mean, sigma, "evaluated");
        Ok(ScalarGroundMotion::new(mean, sigma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(mw: f64, r_rup: f64, rake: f64, vs30: f64) -> GmmInput {
        GmmInput::builder()
            .mag(mw)
            .r_rup(r_rup)
            .rake(rake)
            .vs30(vs30, true)
            .build()
    }

    #[test]
    fn bundled_table_covers_pga_through_short_periods() {
        let table = coefficients().unwrap();
        let imts: Vec<_> = table.imts().collect();
        let expected: Vec<_> = Imt::all()
            .filter(|imt| imt.period().map_or(*imt == Imt::Pga, |t| t <= 0.2))
            .collect();
        assert_eq!(imts, expected);
    }

    // The published regressions are constrained so both magnitude regimes
    // give the same median at the threshold, at every distance.
    #[test]
    fn bundled_rows_are_continuous_at_threshold() {
        let table = coefficients().unwrap();
        for imt in table.imts() {
            let c = table.for_period(imt).unwrap();
            let m = default_mag_threshold();
            let a_gap = (c.a1_hi + c.a2_hi * m) - (c.a1_lo + c.a2_lo * m);
            let b_gap = (c.b1_hi + c.b2_hi * m) - (c.b1_lo + c.b2_lo * m);
            assert!(a_gap.abs() < 2e-4, "{imt}: a gap {a_gap}");
            assert!(b_gap.abs() < 2e-4, "{imt}: b gap {b_gap}");
        }
    }

    #[test]
    fn pga_uses_shortest_period_coefficients() {
        let table = coefficients().unwrap();
        assert_eq!(
            table.for_period(Imt::Pga).unwrap(),
            table.for_period(Imt::Sa0p01).unwrap()
        );
    }

    #[test]
    fn threshold_magnitude_is_low_regime() {
        let model = Idriss14::new(Imt::Pga).unwrap();
        assert_eq!(model.regime(6.75), MagnitudeRegime::Low);
        assert_eq!(model.regime(6.750001), MagnitudeRegime::High);
    }

    #[test]
    fn mean_matches_hand_computation() {
        let model = Idriss14::new(Imt::Pga).unwrap();
        let c = *model.coeffs();
        let expected = c.a1_lo + c.a2_lo * 6.0 + c.a3 * 2.5 * 2.5
            - (c.b1_lo + c.b2_lo * 6.0) * 40f64.ln()
            + c.xi * 760f64.ln()
            + c.gamma * 30.0;
        let actual = model.mean(&input(6.0, 30.0, 0.0, 760.0));
        assert!((actual - expected).abs() < 1e-12);
    }

    #[test]
    fn sigma_for_pga_uses_period_floor() {
        let pga = Idriss14::new(Imt::Pga).unwrap();
        let sa = Idriss14::new(Imt::Sa0p05).unwrap();
        assert_eq!(pga.sigma(6.5), sa.sigma(6.5));
    }

    #[test]
    fn sigma_magnitude_is_clipped() {
        let model = Idriss14::new(Imt::Sa0p1).unwrap();
        assert_eq!(model.sigma(4.0), model.sigma(5.0));
        assert_eq!(model.sigma(8.0), model.sigma(7.5));
        assert!((model.sigma(6.0) - (1.18 + 0.035 * 0.1f64.ln() - 0.36)).abs() < 1e-12);
    }

    #[test]
    fn clip_saturates_at_published_period_bounds() {
        assert_eq!(clip(10.0, 0.05, 3.0), clip(3.0, 0.05, 3.0));
        assert_eq!(clip(0.01, 0.05, 3.0), 0.05);
        assert_eq!(clip(1.0, 0.05, 3.0), 1.0);
    }

    #[test]
    fn distance_offset_keeps_zero_distance_finite() {
        let model = Idriss14::new(Imt::Pga).unwrap();
        assert!(model.mean(&input(6.0, 0.0, 0.0, 760.0)).is_finite());
    }

    #[test]
    fn calc_rejects_fields_it_reads() {
        let model = Idriss14::new(Imt::Pga).unwrap();
        for (bad, label) in [
            (input(4.9, 20.0, 0.0, 760.0), "Magnitude"),
            (input(7.0, 150.1, 0.0, 760.0), "Rupture Distance"),
            (input(7.0, 20.0, 181.0, 760.0), "Rake"),
            (input(7.0, 20.0, 0.0, 1500.0), "Vs30"),
        ] {
            match model.calc(&bad) {
                Err(GmmError::OutOfRange { field, .. }) => assert_eq!(field, label),
                other => panic!("expected {label} failure, got {other:?}"),
            }
        }
    }

    #[test]
    fn calc_ignores_fields_it_does_not_read() {
        let model = Idriss14::new(Imt::Pga).unwrap();
        let odd = GmmInput::builder()
            .mag(7.0)
            .r_rup(20.0)
            .dip(120.0)
            .z_top(35.0)
            .build();
        assert!(model.calc(&odd).is_ok());
    }

    #[test]
    fn invalid_constants_are_rejected() {
        let cases: [(&str, fn(&mut Idriss14Config)); 8] = [
            ("period_floor", |c| c.period_floor = 0.0),
            ("period_ceiling", |c| c.period_ceiling = 0.01),
            ("distance_offset", |c| c.distance_offset = -30.0),
            ("distance_offset", |c| c.distance_offset = 0.0),
            ("vs30_cap", |c| c.vs30_cap = 0.0),
            ("mag_ceiling", |c| c.mag_floor = 8.0),
            ("sigma_base", |c| c.sigma_base = f64::NAN),
            ("mag_threshold", |c| c.mag_threshold = f64::INFINITY),
        ];
        for (field, edit) in cases {
            let mut config = Idriss14Config::default();
            edit(&mut config);
            match Idriss14::with_config(Imt::Pga, config) {
                Err(GmmError::Config(info)) => {
                    assert_eq!(info.code, "invalid-config");
                    assert_eq!(info.context.get("field").map(String::as_str), Some(field));
                }
                other => panic!("expected {field} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_documents_fail_to_load() {
        let yaml = b"period_floor: 0.0\ndistance_offset: -30.0\n";
        let err = Idriss14Config::from_yaml_slice(yaml).unwrap_err();
        assert_eq!(err.code(), "invalid-config");
        let err = Idriss14Config::from_json_slice(br#"{"vs30_cap": -1.0}"#).unwrap_err();
        assert_eq!(err.code(), "invalid-config");
    }

    #[test]
    fn published_constants_are_valid() {
        assert!(Idriss14Config::default().validate().is_ok());
    }

    #[test]
    fn pgv_is_not_supported() {
        assert_eq!(Idriss14::new(Imt::Pgv).unwrap_err().code(), "missing-period");
    }
}
