//! pvt-fluids: black-oil PVT property correlations for pvtflow.
//!
//! Provides:
//! - A `Fluid` configuration type describing one reservoir fluid sample
//!   (composition, separator train, correlation selections, surface rates)
//! - Gas, oil and water correlation modules with selectable correlation
//!   families from the petroleum engineering literature
//! - A single evaluation entry point producing a `FluidProperties` snapshot
//!   of bubble point, solution GOR, formation volume factors, densities,
//!   viscosities and interfacial tensions at a given pressure/temperature
//!
//! # Architecture
//!
//! Correlation families are selected by enum and dispatched with exhaustive
//! `match`; every family of a given property implements the same contract
//! (for black-oil families: Pb, Rs, Bo, Co). Iterative solves (Hall-Yarborough
//! Z factor, Lasater gas mole fraction, De Ghetto implicit compressibility)
//! are bounded Newton routines that report convergence explicitly; recoverable
//! fallbacks are logged through `tracing`.
//!
//! All quantities use oilfield units: psia, °F, scf/stb, rb/stb, lb/ft³, cP,
//! dynes/cm.
//!
//! # Example
//!
//! ```no_run
//! use pvt_fluids::{BlackOilCorrelation, Fluid, OilViscosityCorrelation};
//!
//! let fluid = Fluid::new(36.4, 0.878, 594.0, 0.0, 1.0)
//!     .unwrap()
//!     .with_impurities(0.22, 0.17, 0.0)
//!     .with_black_oil_correlation(BlackOilCorrelation::Glaso)
//!     .with_oil_viscosity_correlation(OilViscosityCorrelation::BeggsRobinson);
//!
//! let props = fluid.local_gas_liquid_properties(100.0, 100.0).unwrap();
//! println!("Pb = {} psia, Bo = {} rb/stb", props.pb, props.bo);
//! ```

pub mod corr;
pub mod error;
pub mod fluid;
pub mod gas;
pub mod oil;
pub mod oil_viscosity;
pub mod properties;
pub mod solver;
pub mod water;

// Re-exports for ergonomics
pub use corr::{
    BlackOilCorrelation, GasKind, OilViscosityCorrelation, PseudoCriticalCorrelation,
    SeparatorStage, ZFactorCorrelation,
};
pub use error::{FluidError, FluidResult};
pub use fluid::{EvalOptions, Fluid};
pub use gas::{SeparatorTrain, ZFactorSolution};
pub use oil::{BlackOilCalibrations, BlackOilInputs, BlackOilPoint, Calibration};
pub use oil_viscosity::ViscosityCalibrations;
pub use properties::FluidProperties;
pub use solver::{RootConfig, RootResult};
