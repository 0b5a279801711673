//! Water property correlations: gas solubility, formation volume factor,
//! compressibility, viscosity, density and gas-water interfacial tension.

use pvt_core::units::WATER_DENSITY;

use crate::error::{FluidError, FluidResult};

/// Gas solubility in brine [scf/stb] by Craft and Hawkins.
///
/// `salinity` in weight percent NaCl.
pub fn rsw_craft_hawkins(p: f64, t: f64, salinity: f64) -> f64 {
    let a = 2.12 + 3.45e-3 * t - 3.59e-5 * t * t;
    let b = 0.0107 - 5.26e-5 * t + 1.48e-7 * t * t;
    let c = -8.75e-7 + 3.9e-9 * t - 1.02e-11 * t * t;
    let rsw = a + b * p + c * p * p;
    // salinity correction factor
    let cs = 1.0 - (0.0753 - 0.000173 * t) * salinity;
    rsw * cs
}

/// Water formation volume factor [rb/stb] by Gould.
pub fn bw_gould(p: f64, t: f64) -> f64 {
    let tx = t - 60.0;
    1.0 + 1.2e-4 * tx + 1e-6 * tx * tx - 3.33e-6 * p
}

/// Water FVF above the bubble point from the value at the bubble point.
pub fn bw_above_pb(p: f64, pb: f64, bwb: f64, cw: f64) -> f64 {
    bwb * (-cw * (p - pb)).exp()
}

/// Compressibility of gas-free water [1/psi] by Meehan.
pub fn cwf_meehan(p: f64, t: f64) -> f64 {
    let a = 3.8546 - 0.000134 * p;
    let b = -0.01052 + 4.77e-7 * p;
    let c = 3.9267e-5 - 8.8e-10 * p;
    1e-6 * (a + b * t + c * t * t)
}

/// Compressibility of gas-saturated water [1/psi].
pub fn cwg_meehan(rsw: f64, cwf: f64) -> f64 {
    cwf * (1.0 + 8.9e-3 * rsw)
}

/// Salinity correction factor for water compressibility (Numbere et al.).
pub fn salinity_correction_numbere(t: f64, salinity: f64) -> f64 {
    1.0 + (-0.052 + 2.7e-4 * t - 1.14e-6 * t.powi(2) + 1.121e-9 * t.powi(3))
        * salinity.powf(0.7)
}

/// Brine compressibility [1/psi]: gas-free water corrected for dissolved
/// gas and salinity.
pub fn cw_meehan(p: f64, t: f64, rsw: f64, salinity: f64) -> f64 {
    let cwf = cwf_meehan(p, t);
    let cwg = cwg_meehan(rsw, cwf);
    cwg * salinity_correction_numbere(t, salinity)
}

/// Water viscosity [cP].
pub fn water_viscosity(t: f64) -> f64 {
    (1.003 - 1.479e-2 * t + 1.982e-5 * t * t).exp()
}

/// Water density [lb/ft³] from the stock-tank gravity and FVF.
pub fn water_density(water_gravity: f64, bw: f64) -> f64 {
    WATER_DENSITY * water_gravity / bw
}

/// Gas-water interfacial tension [dynes/cm], interpolated between the
/// 74 °F and 280 °F isotherms. The correlation is unusable above
/// 17569 psia.
pub fn gas_water_interfacial_tension(p: f64, t: f64) -> FluidResult<f64> {
    if p > 17569.0 {
        return Err(FluidError::OutOfRange {
            what: "pressure for gas-water interfacial tension",
            value: p,
            limit: 17569.0,
        });
    }
    let sigma74 = 75.0 - 1.108 * p.powf(0.349);
    let sigma280 = 53.0 - 0.1048 * p.powf(0.637);
    let sigma = if t <= 74.0 {
        sigma74
    } else if t >= 280.0 {
        sigma280
    } else {
        sigma74 - (t - 74.0) * (sigma74 - sigma280) / 206.0
    };
    Ok(sigma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bw_near_unity_at_standard_conditions() {
        let bw = bw_gould(14.7, 60.0);
        assert!((bw - 1.0).abs() < 0.001, "bw = {bw}");
    }

    #[test]
    fn bw_shrinks_with_pressure_above_pb() {
        let bwb = bw_gould(2000.0, 150.0);
        let bw = bw_above_pb(4000.0, 2000.0, bwb, 3e-6);
        assert!(bw < bwb);
    }

    #[test]
    fn salinity_reduces_gas_solubility() {
        let fresh = rsw_craft_hawkins(2000.0, 150.0, 0.0);
        let brine = rsw_craft_hawkins(2000.0, 150.0, 5.0);
        assert!(brine < fresh);
        assert!(fresh > 0.0);
    }

    #[test]
    fn brine_compressibility_magnitude() {
        let rsw = rsw_craft_hawkins(3000.0, 150.0, 1.0);
        let cw = cw_meehan(3000.0, 150.0, rsw, 1.0);
        assert!(cw > 1e-6 && cw < 1e-5, "cw = {cw}");
    }

    #[test]
    fn water_viscosity_drops_with_temperature() {
        assert!(water_viscosity(200.0) < water_viscosity(100.0));
        // roughly 1 cP at 60 °F
        let mu = water_viscosity(60.0);
        assert!(mu > 0.8 && mu < 1.5, "mu = {mu}");
    }

    #[test]
    fn water_density_of_fresh_water() {
        assert!((water_density(1.0, 1.0) - 62.4).abs() < 1e-12);
    }

    #[test]
    fn interfacial_tension_rejects_extreme_pressure() {
        assert!(gas_water_interfacial_tension(17569.0, 150.0).is_ok());
        let err = gas_water_interfacial_tension(17570.0, 150.0).unwrap_err();
        assert!(matches!(err, FluidError::OutOfRange { .. }));
    }

    #[test]
    fn interfacial_tension_interpolates_in_temperature() {
        let cold = gas_water_interfacial_tension(1000.0, 74.0).unwrap();
        let hot = gas_water_interfacial_tension(1000.0, 280.0).unwrap();
        let mid = gas_water_interfacial_tension(1000.0, 177.0).unwrap();
        assert!(mid < cold && mid > hot);
    }
}
