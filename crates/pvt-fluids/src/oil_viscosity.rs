//! Oil viscosity correlations.
//!
//! Every family follows the same three-step contract: a dead-oil viscosity
//! from API gravity and temperature, a saturated (live-oil) adjustment from
//! Rs, and an undersaturated adjustment above the bubble point computed from
//! the viscosity at the bubble point. Viscosities in cP.

use serde::{Deserialize, Serialize};

use crate::corr::OilViscosityCorrelation;
use crate::oil::{Calibration, oil_specific_gravity};

/// Calibrations for the saturated and undersaturated viscosity branches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViscosityCalibrations {
    pub saturated: Calibration,
    pub undersaturated: Calibration,
}

impl OilViscosityCorrelation {
    /// Oil viscosity [cP] at `(p, t)`.
    ///
    /// `pour_point` [°F] refines the Egbogah dead-oil viscosity when known;
    /// the other families ignore it.
    pub fn evaluate(
        self,
        p: f64,
        t: f64,
        pb: f64,
        rs: f64,
        rs_total: f64,
        api: f64,
        pour_point: Option<f64>,
        cal: &ViscosityCalibrations,
    ) -> f64 {
        let dead = self.dead_oil(api, t, pour_point);
        if p < pb {
            cal.saturated.apply(self.saturated(dead, rs, api))
        } else {
            let mu_pb = self.saturated(dead, rs_total, api);
            cal.undersaturated
                .apply(self.undersaturated(p, pb, api, mu_pb, dead))
        }
    }

    /// Dead (gas-free) oil viscosity [cP].
    pub fn dead_oil(self, api: f64, t: f64, pour_point: Option<f64>) -> f64 {
        match self {
            Self::BeggsRobinson => {
                let a = 10f64.powf(3.0324 - 0.02023 * api);
                10f64.powf(a * t.powf(-1.163)) - 1.0
            }
            Self::Beal => {
                let a = 10f64.powf(0.43 + 8.33 / api);
                (0.32 + 1.8e7 / api.powf(4.53)) * (360.0 / (t + 200.0)).powf(a)
            }
            Self::Petrosky => {
                let x = 4.59388 * t.log10() - 22.82792;
                2.3511e7 * t.powf(-2.10255) * api.log10().powf(x)
            }
            Self::Egbogah => egbogah_dead_oil(api, t, pour_point),
            Self::BergmanSutton => bergman_sutton_dead_oil(api, t),
            Self::DeGhetto => de_ghetto_dead_oil(api, t),
        }
    }

    /// Saturated (live) oil viscosity [cP] from the dead-oil viscosity.
    pub fn saturated(self, dead: f64, rs: f64, api: f64) -> f64 {
        match self {
            // Egbogah reuses the Beggs-Robinson live-oil adjustment
            Self::BeggsRobinson | Self::Egbogah => {
                let a1 = 10.715 * (rs + 100.0).powf(-0.515);
                let a2 = 5.44 * (rs + 150.0).powf(-0.338);
                a1 * dead.powf(a2)
            }
            Self::Beal => {
                let a1 = 10f64.powf(-7.4e-4 * rs + 2.2e-7 * rs * rs);
                let a2 = 0.68 / 10f64.powf(8.62e-5 * rs)
                    + 0.25 / 10f64.powf(1.1e-3 * rs)
                    + 0.062 / 10f64.powf(3.74e-3 * rs);
                a1 * dead.powf(a2)
            }
            Self::Petrosky => {
                let a = 0.1651 + 0.6165 * 10f64.powf(-0.00060866 * rs);
                let b = 0.5131 + 0.5109 * 10f64.powf(-0.0011831 * rs);
                a * dead.powf(b)
            }
            Self::BergmanSutton => {
                let a = 1.0 / (1.0 + (rs / 344.198).powf(0.855344));
                let b = 0.382322 + (1.0 - 0.382322) / (1.0 + (rs / 567.953).powf(0.819326));
                a * dead.powf(b)
            }
            Self::DeGhetto => de_ghetto_saturated(dead, rs, api),
        }
    }

    /// Undersaturated oil viscosity [cP] above the bubble point.
    pub fn undersaturated(self, p: f64, pb: f64, api: f64, mu_pb: f64, dead: f64) -> f64 {
        match self {
            Self::BeggsRobinson | Self::Egbogah => {
                let a = 2.6 * p.powf(1.187) * (-11.513 - 8.98e-5 * p).exp();
                mu_pb * (p / pb).powf(a)
            }
            Self::Beal => {
                mu_pb + 0.001 * (p - pb) * (0.024 * mu_pb.powf(1.6) + 0.038 * mu_pb.powf(0.56))
            }
            Self::Petrosky => {
                let a = -1.0146 + 1.3322 * mu_pb.log10()
                    - 0.4876 * mu_pb.log10().powi(2)
                    - 1.15036 * mu_pb.log10().powi(3);
                mu_pb + 0.0013449 * (p - pb) * 10f64.powf(a)
            }
            Self::BergmanSutton => {
                let alpha =
                    6.5698e-7 * (mu_pb * mu_pb).ln() - 1.48211e-5 * mu_pb.ln() + 2.27877e-4;
                let beta = 2.24623e-2 * mu_pb.ln() + 0.873204;
                mu_pb * (alpha * (p - pb).powf(beta)).exp()
            }
            Self::DeGhetto => de_ghetto_undersaturated(p, pb, api, mu_pb, dead),
        }
    }
}

fn egbogah_dead_oil(api: f64, t: f64, pour_point: Option<f64>) -> f64 {
    match pour_point {
        Some(tp) if tp != 0.0 => {
            // pour-point form works in °C
            let t_c = (t - 32.0) / 1.8;
            let tp_c = (tp - 32.0) / 1.8;
            let yo = oil_specific_gravity(api);
            let log_log = -1.7095 - 0.0087917 * tp_c + 2.7523 * yo
                + (-1.2943 + 0.0033214 * tp_c + 0.958195 * yo) * (t_c - tp_c).log10();
            10f64.powf(10f64.powf(log_log)) - 1.0
        }
        _ => {
            let log_mu = 1.8653 - 0.025086 * api - 0.5644 * t.log10();
            10f64.powf(10f64.powf(log_mu)) - 1.0
        }
    }
}

/// Bergman-Sutton dead-oil viscosity via Watson-factor kinematic
/// viscosities at 100 °F and 210 °F, converted with an ASTM slope.
fn bergman_sutton_dead_oil(api: f64, t: f64) -> f64 {
    let yo = oil_specific_gravity(api);
    let rho60 = 0.999012 * yo;
    let alpha60 = (2.5042e-4 + 8.302e-5 * rho60) / (rho60 * rho60);
    let vcf = |temp: f64| {
        let dt = temp - 60.0;
        (-alpha60 * dt * (1.0 + 0.8 * alpha60 * dt)).exp()
    };

    let tb = 1748.0 - 30.05 * api + 0.3451 * api.powi(2) - 0.002416 * api.powi(3)
        + 7.397e-6 * api.powi(4);
    let tc = tb
        / (0.533272 + 1.9101e-4 * tb + 7.79681e-8 * tb.powi(2) - 2.84376e-11 * tb.powi(3)
            + 9.59468e27 * tb.powi(-13));
    let a = 1.0 - tb / tc;
    let v2 = (2.40219 - 9.59688 * a + 3.45656 * a * a - 143.632 * a.powi(4)).exp() + 0.152995;
    let v1 = (0.701254 + 1.38359 * v2.ln() + 0.103604 * v2.ln().powi(2)).exp();
    let yo_prime = 0.843593 - 0.128624 * a - 3.36159 * a.powi(3) - 13749.5 * a.powi(12);
    let delta_y = yo - yo_prime;
    let x = (2.68316 - 62.0863 / tb.sqrt()).abs();
    let f2 = x * delta_y - 47.6033 * delta_y * delta_y / tb.sqrt();
    let v210 = ((v2 + 232.442 / tb).ln() * ((1.0 + 2.0 * f2) / (1.0 - 2.0 * f2)).powi(2)).exp()
        - 232.442 / tb;
    let f1 = 0.980633 * x * delta_y - 47.6033 * delta_y * delta_y / tb.sqrt();
    let v100 = ((v1 + 232.442 / tb).ln() * ((1.0 + 2.0 * f1) / (1.0 - 2.0 * f1)).powi(2)).exp()
        - 232.442 / tb;

    let mu100 = v100 * rho60 * vcf(100.0);
    let mu210 = v210 * rho60 * vcf(210.0);
    let b = ((mu210 + 0.974).ln().ln() - (mu100 + 0.974).ln().ln())
        / (512.7_f64.ln() - 402.7_f64.ln());
    let t1 = ((mu100 + 0.974).ln().ln() + b * ((t + 302.7).ln() - 402.7_f64.ln())).exp();
    t1.exp() - 0.974
}

fn de_ghetto_dead_oil(api: f64, t: f64) -> f64 {
    if api < 10.0 {
        let log_log = 1.90296 - 0.012619 * api - 0.61748 * t.log10();
        10f64.powf(10f64.powf(log_log)) - 1.0
    } else if api < 22.3 {
        let log_log = 2.06492 - 0.0179 * api - 0.70226 * t.log10();
        10f64.powf(10f64.powf(log_log)) - 1.0
    } else if api < 31.1 {
        let exponent = 12.5428 * t.log10() - 45.7874;
        220.15e9 * t.powf(-3.5560) * api.log10().powf(exponent)
    } else {
        let log_log = 1.67083 - 0.017628 * api - 0.61304 * t.log10();
        10f64.powf(10f64.powf(log_log)) - 1.0
    }
}

fn de_ghetto_saturated(dead: f64, rs: f64, api: f64) -> f64 {
    if api >= 31.1 {
        let t1 = 25.1921 * (rs + 100.0).powf(-0.6487);
        let t2 = dead.powf(2.7516 * (rs + 100.0).powf(-0.2135));
        return t1 * t2;
    }
    let y = 10f64.powf(-0.00081 * rs);
    let (c1, e1, e2, q0, q1, q2) = if api < 10.0 {
        (-0.0335, 1.0785, 0.5798 + 0.3432 * y, 2.3945, 0.8927, 0.001567)
    } else if api < 22.3 {
        (0.2478, 0.6114, 0.4731 + 0.5158 * y, -0.6311, 1.078, -0.003653)
    } else {
        (0.2038, 0.8591, 0.3855 + 0.5664 * y, 0.0132, 0.9821, -0.005215)
    };
    let f = (c1 + e1 * 10f64.powf(-0.000845 * rs)) * dead.powf(e2);
    q0 + q1 * f + q2 * f * f
}

fn de_ghetto_undersaturated(p: f64, pb: f64, api: f64, mu_pb: f64, dead: f64) -> f64 {
    if api < 10.0 {
        mu_pb
            - (p / pb)
                * (10f64.powf(-2.19) * dead.powf(1.055) * pb.powf(0.3132)
                    / 10f64.powf(0.0099 * api))
    } else if api < 22.3 {
        0.9886 * mu_pb
            + 0.002763 * (p - pb) * (-0.01153 * mu_pb.powf(1.7933) + 0.0316 * mu_pb.powf(1.5939))
    } else if api < 31.1 {
        mu_pb
            - (p / pb)
                * (10f64.powf(-3.8055) * dead.powf(1.4131) * pb.powf(0.6957)
                    / 10f64.powf(-0.00288 * api))
    } else {
        mu_pb
            - (p / pb)
                * (10f64.powf(-2.488) * dead.powf(0.9036) * pb.powf(0.6151)
                    / 10f64.powf(0.01976 * api))
    }
}
