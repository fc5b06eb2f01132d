//! Rupture and site description supplied to a ground motion model.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Named fields of a [`GmmInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Moment magnitude.
    Mag,
    /// Joyner-Boore distance (km).
    Rjb,
    /// Closest distance to rupture (km).
    Rrup,
    /// Site coordinate measured perpendicular to strike (km).
    Rx,
    /// Rupture dip (degrees).
    Dip,
    /// Down-dip rupture width (km).
    Width,
    /// Depth to top of rupture (km).
    Ztop,
    /// Hypocentral depth (km).
    Zhyp,
    /// Rupture rake (degrees).
    Rake,
    /// Time-averaged shear-wave velocity over the top 30 m (m/s).
    Vs30,
    /// Depth to the 1.0 km/s shear-wave horizon (km).
    Z1p0,
    /// Depth to the 2.5 km/s shear-wave horizon (km).
    Z2p5,
}

impl Field {
    /// Human readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Mag => "Magnitude",
            Field::Rjb => "Joyner-Boore Distance",
            Field::Rrup => "Rupture Distance",
            Field::Rx => "Distance X",
            Field::Dip => "Dip",
            Field::Width => "Width",
            Field::Ztop => "Top of Rupture Depth",
            Field::Zhyp => "Hypocentral Depth",
            Field::Rake => "Rake",
            Field::Vs30 => "Vs30",
            Field::Z1p0 => "Depth to Vs=1.0 km/sec",
            Field::Z2p5 => "Depth to Vs=2.5 km/sec",
        }
    }

    /// Reads this field's value from `input`; `None` for an unset basin
    /// depth. `vs_inf` is not numeric and has no field.
    pub fn value(&self, input: &GmmInput) -> Option<f64> {
        let value = match self {
            Field::Mag => input.mw,
            Field::Rjb => input.r_jb,
            Field::Rrup => input.r_rup,
            Field::Rx => input.r_x,
            Field::Dip => input.dip,
            Field::Width => input.width,
            Field::Ztop => input.z_top,
            Field::Zhyp => input.z_hyp,
            Field::Rake => input.rake,
            Field::Vs30 => input.vs30,
            Field::Z1p0 => return input.z1p0,
            Field::Z2p5 => return input.z2p5,
        };
        Some(value)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Earthquake rupture and site parameters for a single evaluation.
///
/// `z1p0` and `z2p5` are `None` to request the model's default basin term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GmmInput {
    /// Moment magnitude.
    pub mw: f64,
    /// Joyner-Boore distance (km).
    pub r_jb: f64,
    /// Closest distance to rupture (km).
    pub r_rup: f64,
    /// Site coordinate perpendicular to strike (km).
    pub r_x: f64,
    /// Rupture dip (degrees).
    pub dip: f64,
    /// Down-dip rupture width (km).
    pub width: f64,
    /// Depth to top of rupture (km).
    pub z_top: f64,
    /// Hypocentral depth (km).
    pub z_hyp: f64,
    /// Rupture rake (degrees).
    pub rake: f64,
    /// Vs30 (m/s).
    pub vs30: f64,
    /// Whether `vs30` was inferred rather than measured.
    pub vs_inf: bool,
    /// Depth to 1.0 km/s horizon (km).
    #[serde(default)]
    pub z1p0: Option<f64>,
    /// Depth to 2.5 km/s horizon (km).
    #[serde(default)]
    pub z2p5: Option<f64>,
}

impl GmmInput {
    /// Starts a builder seeded with [`GmmInput::default`].
    pub fn builder() -> GmmInputBuilder {
        GmmInputBuilder {
            input: GmmInput::default(),
        }
    }
}

impl Default for GmmInput {
    /// A moderate strike-slip event 10 km from a firm-rock site.
    fn default() -> Self {
        Self {
            mw: 6.5,
            r_jb: 10.0,
            r_rup: 10.3,
            r_x: 10.0,
            dip: 90.0,
            width: 14.0,
            z_top: 0.5,
            z_hyp: 7.5,
            rake: 0.0,
            vs30: 760.0,
            vs_inf: true,
            z1p0: None,
            z2p5: None,
        }
    }
}

/// Fluent builder for [`GmmInput`].
#[derive(Debug, Clone)]
pub struct GmmInputBuilder {
    input: GmmInput,
}

impl GmmInputBuilder {
    /// Sets the moment magnitude.
    pub fn mag(mut self, mw: f64) -> Self {
        self.input.mw = mw;
        self
    }

    /// Sets `r_jb`, `r_rup` and `r_x` together.
    pub fn distances(mut self, r_jb: f64, r_rup: f64, r_x: f64) -> Self {
        self.input.r_jb = r_jb;
        self.input.r_rup = r_rup;
        self.input.r_x = r_x;
        self
    }

    /// Sets the Joyner-Boore distance.
    pub fn r_jb(mut self, r_jb: f64) -> Self {
        self.input.r_jb = r_jb;
        self
    }

    /// Sets the closest distance to rupture.
    pub fn r_rup(mut self, r_rup: f64) -> Self {
        self.input.r_rup = r_rup;
        self
    }

    /// Sets the perpendicular site coordinate.
    pub fn r_x(mut self, r_x: f64) -> Self {
        self.input.r_x = r_x;
        self
    }

    /// Sets the dip.
    pub fn dip(mut self, dip: f64) -> Self {
        self.input.dip = dip;
        self
    }

    /// Sets the rupture width.
    pub fn width(mut self, width: f64) -> Self {
        self.input.width = width;
        self
    }

    /// Sets the depth to top of rupture.
    pub fn z_top(mut self, z_top: f64) -> Self {
        self.input.z_top = z_top;
        self
    }

    /// Sets the hypocentral depth.
    pub fn z_hyp(mut self, z_hyp: f64) -> Self {
        self.input.z_hyp = z_hyp;
        self
    }

    /// Sets the rake.
    pub fn rake(mut self, rake: f64) -> Self {
        self.input.rake = rake;
        self
    }

    /// Sets Vs30 and whether it was inferred.
    pub fn vs30(mut self, vs30: f64, vs_inf: bool) -> Self {
        self.input.vs30 = vs30;
        self.input.vs_inf = vs_inf;
        self
    }

    /// Sets both basin depth terms.
    pub fn basin(mut self, z1p0: f64, z2p5: f64) -> Self {
        self.input.z1p0 = Some(z1p0);
        self.input.z2p5 = Some(z2p5);
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> GmmInput {
        self.input
    }
}
