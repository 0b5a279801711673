//! Gas correlations: surface gas gravity blending, pseudocritical
//! properties, Z factor, gas FVF, density and viscosity.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::corr::{GasKind, SeparatorStage, ZFactorCorrelation};
use crate::solver::RootConfig;

/// Separator train configuration used for average-gas-gravity blending.
///
/// Pressures in psia, temperatures in °F, Rs values in scf/stb, gravities
/// relative to air.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SeparatorTrain {
    /// Number of surface separation stages
    pub stage: SeparatorStage,
    /// Primary separator pressure [psia]
    pub psp1: f64,
    /// Primary separator temperature [°F]
    pub tsp1: f64,
    /// Primary separator gas-oil ratio [scf/stb]
    pub rs1: f64,
    /// Secondary separator gas-oil ratio [scf/stb]
    pub rs2: f64,
    /// Stock tank gas-oil ratio [scf/stb]
    pub rs3: f64,
    /// Secondary separator gas gravity (air = 1)
    pub gg2: f64,
    /// Stock tank gas gravity (air = 1)
    pub gg3: f64,
    /// Stock tank condensate gravity [°API]
    pub condensate_api: f64,
}

/// Stock-tank GOR estimate by the Valko-McCain correlation.
///
/// Valko and McCain, "Reservoir oil bubblepoint pressures revisited: gas-oil
/// ratios and surface gas specific gravities", J. Pet. Sci. Eng. 37 (2003).
pub fn stock_tank_rs_valko_mccain(psp1: f64, tsp1: f64, condensate_api: f64) -> f64 {
    let ln_psp = psp1.ln();
    let ln_tsp = tsp1.ln();
    let api = condensate_api;
    let c0 = -8.005 + 2.7 * ln_psp - 0.161 * ln_psp.powi(2);
    let c1 = 1.224 - 0.5 * ln_tsp;
    let c2 = -1.587 + 0.0441 * api - 2.29e-5 * api.powi(2);
    let zn = c0 + c1 + c2;
    let ln_rst = 3.955 + 0.83 * zn - 0.024 * zn.powi(2) + 0.075 * zn.powi(3);
    ln_rst.exp()
}

/// Stock-tank gas specific gravity estimate by the Valko-McCain correlation.
pub fn stock_tank_gravity_valko_mccain(
    psp1: f64,
    tsp1: f64,
    rs1: f64,
    gas_gravity: f64,
    condensate_api: f64,
) -> f64 {
    let ln_psp = psp1.ln();
    let tsp = tsp1;
    let api = condensate_api;
    let ygsp = gas_gravity;
    let ln_rsp = rs1.ln();
    let z1 = -17.275 + 7.9597 * ln_psp - 1.1013 * ln_psp.powi(2)
        + 2.773e-2 * ln_psp.powi(3)
        + 3.2287e-3 * ln_psp.powi(4);
    let z2 = -0.3354 - 0.3346 * ln_rsp + 0.1956 * ln_rsp.powi(2) - 3.4374e-2 * ln_rsp.powi(3)
        + 2.08e-3 * ln_rsp.powi(4);
    let z3 = 3.705 - 0.4273 * api + 1.818e-2 * api.powi(2) - 3.459e-4 * api.powi(3)
        + 2.505e-6 * api.powi(4);
    let z4 = -155.52 + 626.61 * ygsp - 957.38 * ygsp.powi(2) + 647.57 * ygsp.powi(3)
        - 163.26 * ygsp.powi(4);
    let z5 = 2.085 - 7.097e-2 * tsp + 9.859e-4 * tsp.powi(2) - 6.312e-6 * tsp.powi(3)
        + 1.4e-8 * tsp.powi(4);
    let zn = z1 + z2 + z3 + z4 + z5;
    1.219 + 0.198 * zn + 0.0845 * zn.powi(2) + 0.03 * zn.powi(3) + 0.003 * zn.powi(4)
}

/// Average specific gravity of the surface gas across the separator train.
///
/// `gas_gravity` is the gravity measured at the primary separator (for a
/// single-stage train, at stock-tank conditions) and is returned unchanged
/// in the single-stage case.
pub fn average_gas_gravity(train: &SeparatorTrain, gas_gravity: f64) -> f64 {
    let rsp = train.rs1;
    let ygsp = gas_gravity;
    match train.stage {
        SeparatorStage::SingleStage => gas_gravity,
        SeparatorStage::TwoStages => {
            if train.gg3 == 0.0 || train.rs3 == 0.0 {
                let rst = stock_tank_rs_valko_mccain(train.psp1, train.tsp1, train.condensate_api);
                let ygst = stock_tank_gravity_valko_mccain(
                    train.psp1,
                    train.tsp1,
                    train.rs1,
                    gas_gravity,
                    train.condensate_api,
                );
                (ygsp * rsp + ygst * rst) / (rsp + rst)
            } else {
                (gas_gravity * train.rs1 + train.rs3 * train.gg3) / (train.rs1 + train.rs3)
            }
        }
        SeparatorStage::ThreeStage => {
            let denom = train.rs1 + train.rs2 + train.rs3;
            if train.rs2 == 0.0
                || train.rs3 == 0.0
                || train.gg2 == 0.0
                || train.gg3 == 0.0
                || denom < 1e-12
            {
                // Fixed approximation when stage measurements are missing or
                // the Rs total degenerates.
                1.066 * ygsp
            } else {
                (gas_gravity * train.rs1 + train.rs2 * train.gg2 + train.rs3 * train.gg3) / denom
            }
        }
    }
}

/// Gas density [lb/ft³] from the real-gas law.
pub fn gas_density(p: f64, t: f64, z: f64, gas_gravity: f64) -> f64 {
    let t_rankine = t + 460.0;
    2.7 * gas_gravity * p / (z * t_rankine)
}

/// Gas formation volume factor [ft³/scf] from the real-gas law.
pub fn bg_real_gas(p: f64, t: f64, z: f64) -> f64 {
    let t_rankine = t + 460.0;
    0.0283 * z * t_rankine / p
}

/// Apparent molecular weight of the gas mixture.
pub fn molecular_weight(gas_gravity: f64) -> f64 {
    28.97 * gas_gravity
}

/// Gas viscosity [cP] by the Lee correlation.
///
/// Not applicable to sour gases. `rho_g` in lb/ft³, `mg` is the apparent
/// molecular weight, `t` in °F.
pub fn viscosity_lee(t: f64, rho_g: f64, mg: f64) -> f64 {
    let t_rankine = t + 460.0;
    let k = (9.4 + 0.02 * mg) * t_rankine.powf(1.5) / (209.0 + 19.0 * mg + t_rankine);
    let x = 3.5 + 986.0 / t_rankine + 0.01 * mg;
    let y = 2.4 - 0.2 * x;
    1e-4 * k * (x * (rho_g / 62.4).powf(y)).exp()
}

/// Result of a Z-factor evaluation.
///
/// `converged` is false when the Hall-Yarborough Newton solve exhausted its
/// iteration budget and the value was taken from the Beggs-Brill closed form
/// instead.
#[derive(Clone, Copy, Debug)]
pub struct ZFactorSolution {
    /// Real-gas deviation factor
    pub z: f64,
    /// Newton iterations taken (0 for the closed-form method)
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Z factor by the Beggs and Brill closed-form approximation.
pub fn z_factor_beggs_brill(ppr: f64, tpr: f64) -> f64 {
    let a = 1.39 * (tpr - 0.92).powf(0.5) - 0.36 * tpr - 0.101;
    let b = ppr * (0.62 - 0.23 * tpr)
        + ppr.powi(2) * (0.066 / (tpr - 0.86) - 0.037)
        + 0.32 * ppr.powi(6) / (20.723 * (tpr - 1.0)).exp();
    let c = 0.132 - 0.32 * tpr.log10();
    let d = (0.715 - 1.128 * tpr + 0.42 * tpr.powi(2)).exp();
    a + (1.0 - a) * (-b).exp() + c * ppr.powf(d)
}

/// Z factor by Hall-Yarborough, Newton-Raphson on reduced density.
///
/// Falls back to the Beggs-Brill closed form when the iteration budget is
/// exhausted; the fallback is reported in the result and logged.
pub fn z_factor_hall_yarborough(ppr: f64, tpr: f64) -> ZFactorSolution {
    let tpr = if tpr < 1.01 { 1.0 } else { tpr };
    let rt = 1.0 / tpr;

    // temperature dependent terms
    let a = 0.06125 * rt * (-1.2 * (1.0 - rt).powi(2)).exp();
    let b = rt * (14.76 - 9.76 * rt + 4.58 * rt * rt);
    let c = rt * (90.7 - 242.2 * rt + 42.4 * rt * rt);
    let d = 2.18 + 2.82 * rt;

    let f = |y: f64| {
        -a * ppr + (y + y * y + y.powi(3) - y.powi(4)) / (1.0 - y).powi(3) - b * y * y
            + c * y.powf(d)
    };
    let dfdy = |y: f64| {
        (1.0 + 4.0 * y + 4.0 * y * y - 4.0 * y.powi(3) + y.powi(4)) / (1.0 - y).powi(4)
            - 2.0 * b * y
            + d * c * y.powf(d - 1.0)
    };

    let config = RootConfig::default();
    let mut y = 0.001; // reduced density
    for iter in 0..config.max_iterations {
        // keep the iterate away from the (1 - y) singularity
        if y > 1.0 {
            y = 0.6;
        }
        let residual = f(y);
        if residual.abs() <= config.abs_tol {
            return ZFactorSolution {
                z: a * ppr / y,
                iterations: iter,
                converged: true,
            };
        }
        y -= residual / dfdy(y);
    }

    warn!(
        ppr,
        tpr, "Hall-Yarborough Z factor did not converge, using Beggs-Brill closed form"
    );
    ZFactorSolution {
        z: z_factor_beggs_brill(ppr, tpr),
        iterations: config.max_iterations,
        converged: false,
    }
}

/// Z factor via the selected correlation.
pub fn z_factor(corr: ZFactorCorrelation, ppr: f64, tpr: f64) -> ZFactorSolution {
    match corr {
        ZFactorCorrelation::HallYarborough => z_factor_hall_yarborough(ppr, tpr),
        ZFactorCorrelation::BeggsBrill => ZFactorSolution {
            z: z_factor_beggs_brill(ppr, tpr),
            iterations: 0,
            converged: true,
        },
    }
}

/// Pseudocritical pressure [psia] and temperature [°R] by the Standing
/// correlation, Wichert-Aziz corrected for non-hydrocarbon content.
pub fn pseudo_critical_standing(
    gas_gravity: f64,
    kind: GasKind,
    y_co2: f64,
    y_h2s: f64,
) -> (f64, f64) {
    let (ppc, tpc) = match kind {
        GasKind::Natural => (
            677.0 + 15.0 * gas_gravity - 37.5 * gas_gravity.powi(2),
            168.0 + 325.0 * gas_gravity - 12.5 * gas_gravity.powi(2),
        ),
        GasKind::Condensate => (
            706.0 - 51.7 * gas_gravity - 11.1 * gas_gravity.powi(2),
            187.0 + 330.0 * gas_gravity - 71.5 * gas_gravity.powi(2),
        ),
    };
    wichert_aziz_correction(ppc, tpc, y_co2, y_h2s)
}

/// Pseudocritical pressure [psia] and temperature [°R] by the Sutton
/// correlation, Wichert-Aziz corrected for non-hydrocarbon content.
pub fn pseudo_critical_sutton(
    gas_gravity: f64,
    kind: GasKind,
    y_co2: f64,
    y_h2s: f64,
) -> (f64, f64) {
    let (ppc, tpc) = match kind {
        GasKind::Natural => (
            671.1 + 14.0 * gas_gravity - 34.3 * gas_gravity.powi(2),
            120.1 + 425.0 * gas_gravity - 62.9 * gas_gravity.powi(2),
        ),
        GasKind::Condensate => (
            706.0 - 51.70 * gas_gravity - 11.1 * gas_gravity.powi(2),
            164.3 + 357.7 * gas_gravity - 67.7 * gas_gravity.powi(2),
        ),
    };
    wichert_aziz_correction(ppc, tpc, y_co2, y_h2s)
}

/// Wichert-Aziz correction of pseudocritical properties for CO2/H2S content.
///
/// Applied only when both mole fractions are nonzero.
pub fn wichert_aziz_correction(ppc: f64, tpc: f64, y_co2: f64, y_h2s: f64) -> (f64, f64) {
    if y_co2 == 0.0 || y_h2s == 0.0 {
        return (ppc, tpc);
    }
    let a = y_h2s + y_co2;
    let eps = 120.0 * (a.powf(0.9) - a.powf(1.6)) + 15.0 * (y_h2s.powf(0.5) - y_h2s.powf(0.4));
    let tpc_corr = tpc - eps;
    let ppc_corr = ppc * tpc_corr / (tpc + y_h2s * (1.0 - y_h2s) * eps);
    (ppc_corr, tpc_corr)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn single_stage_returns_gravity_unchanged(
            gas_gravity in 0.56_f64..1.5,
            rs1 in 0.0_f64..2000.0,
            psp1 in 14.7_f64..1500.0,
        ) {
            let train = SeparatorTrain {
                stage: SeparatorStage::SingleStage,
                psp1,
                tsp1: 80.0,
                rs1,
                ..Default::default()
            };
            prop_assert_eq!(average_gas_gravity(&train, gas_gravity), gas_gravity);
        }
    }
}
