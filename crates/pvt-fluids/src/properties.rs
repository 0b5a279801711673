//! Evaluated fluid property snapshot.

use serde::{Deserialize, Serialize};

/// All PVT properties of the gas/oil/water system at one pressure and
/// temperature. Produced by [`crate::Fluid::local_gas_liquid_properties`].
///
/// Units: psia, °F, scf/stb, rb/stb, lb/ft³, cP, dynes/cm, ft³/s, ft/s.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FluidProperties {
    /// Evaluation pressure [psia]
    pub pressure: f64,
    /// Evaluation temperature [°F]
    pub temperature: f64,

    /// Bubble point pressure [psia]
    pub pb: f64,
    /// Solution gas-oil ratio [scf/stb]
    pub rs: f64,
    /// Gas solubility in water [scf/stb]
    pub rsw: f64,
    /// Oil formation volume factor [rb/stb]
    pub bo: f64,
    /// Isothermal oil compressibility [1/psi]
    pub co: f64,
    /// Gas formation volume factor [ft³/scf]
    pub bg: f64,
    /// Water formation volume factor [rb/stb]
    pub bw: f64,

    /// Real-gas deviation factor
    pub z_factor: f64,
    /// Whether the Z-factor solve converged (false means the closed-form
    /// fallback supplied the value)
    pub z_factor_converged: bool,

    /// Oil density [lb/ft³]
    pub rho_o: f64,
    /// Gas density [lb/ft³]
    pub rho_g: f64,
    /// Water density [lb/ft³]
    pub rho_w: f64,
    /// Volume-fraction weighted liquid density [lb/ft³]
    pub rho_l: f64,

    /// Oil viscosity [cP]
    pub mu_o: f64,
    /// Gas viscosity [cP]
    pub mu_g: f64,
    /// Water viscosity [cP]
    pub mu_w: f64,
    /// Volume-fraction weighted liquid viscosity [cP]
    pub mu_l: f64,

    /// Gas-oil interfacial tension [dynes/cm]
    pub sigma_o: f64,
    /// Gas-water interfacial tension [dynes/cm]
    pub sigma_w: f64,
    /// Volume-fraction weighted gas-liquid interfacial tension [dynes/cm]
    pub sigma_l: f64,

    /// In-situ oil fraction of the liquid phase
    pub fo: f64,
    /// In-situ water fraction of the liquid phase
    pub fw: f64,

    /// In-situ oil volumetric rate [ft³/s]
    pub qo: f64,
    /// In-situ free-gas volumetric rate [ft³/s]
    pub qg: f64,
    /// In-situ water volumetric rate [ft³/s]
    pub qw: f64,

    /// Superficial liquid velocity [ft/s]; requires a pipe diameter
    pub vsl: Option<f64>,
    /// Superficial gas velocity [ft/s]; requires a pipe diameter
    pub vsg: Option<f64>,
}
