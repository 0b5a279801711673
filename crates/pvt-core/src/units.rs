//! Oilfield unit constants.
//!
//! Every correlation in the workspace works in oilfield units (psia, °F,
//! scf/stb, rb/stb, lb/ft³); these constants tie surface volumes, densities
//! and reference conditions together.

/// Cubic feet per barrel.
pub const CUBIC_FEET_PER_BARREL: f64 = 5.614;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Air density at standard conditions [lb/ft³].
pub const AIR_DENSITY: f64 = 0.0764;

/// Fresh water density at standard conditions [lb/ft³].
pub const WATER_DENSITY: f64 = 62.4;

/// Standard (stock tank) pressure [psia].
pub const STANDARD_PRESSURE: f64 = 14.7;

/// Standard (stock tank) temperature [°F].
pub const STANDARD_TEMPERATURE: f64 = 60.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_rate_conversion_factor() {
        // 1 stb/d expressed in ft³/s
        let ft3_per_s = CUBIC_FEET_PER_BARREL / SECONDS_PER_DAY;
        assert!((ft3_per_s - 6.4977e-5).abs() < 1e-8);
    }

    #[test]
    fn air_density_matches_ideal_gas_at_standard_conditions() {
        // 28.97 lb/lbmol over 379.3 scf/lbmol
        assert!((AIR_DENSITY - 28.97 / 379.3).abs() < 5e-4);
    }
}
