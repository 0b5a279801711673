//! Correlation-family and separator-train selections.
//!
//! Every enum value selects one interchangeable implementation that shares a
//! common input/output contract with the other values of its family. Dispatch
//! is by exhaustive `match`, so an unsupported selection is unrepresentable.

use serde::{Deserialize, Serialize};

/// Type of surface gas, selecting the pseudocritical coefficient set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GasKind {
    /// Dry natural gas.
    #[default]
    Natural,
    /// Gas condensate.
    Condensate,
}

/// Choice of black-oil correlation family (Pb, Rs, Bo, Co contract).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlackOilCorrelation {
    /// Al-Marhoun, Middle East crude oils (JPT, May 1988).
    AlMarhoun,
    /// De Ghetto, Paone and Villa, heavy and extra-heavy oils (SPE 30316).
    DeGhetto,
    /// Glaso, generalized North Sea correlations (JPT, May 1980).
    #[default]
    Glaso,
    /// Lasater bubble point correlation (SPE 957-G).
    Lasater,
    /// Petrosky and Farshad, Gulf of Mexico crudes (SPE 51395).
    Petrosky,
    /// Standing, California crudes.
    Standing,
    /// Vazquez and Beggs (SPE 6719).
    VazquezBeggs,
}

/// Choice of oil viscosity correlation family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OilViscosityCorrelation {
    /// Beggs and Robinson (SPE 5434).
    #[default]
    BeggsRobinson,
    /// Beal (1946).
    Beal,
    /// Petrosky and Farshad (SPE 29468).
    Petrosky,
    /// Egbogah and Ng (1983); uses pour point temperature when available.
    Egbogah,
    /// Bergman and Sutton (SPE 110194/110195).
    BergmanSutton,
    /// De Ghetto, API-banded (SPE 30316).
    DeGhetto,
}

/// Pseudocritical pressure/temperature correlation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PseudoCriticalCorrelation {
    /// Sutton correlation.
    #[default]
    Sutton,
    /// Standing correlation.
    Standing,
}

/// Z-factor correlation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZFactorCorrelation {
    /// Hall-Yarborough iterative solve with Beggs-Brill fallback.
    #[default]
    HallYarborough,
    /// Beggs and Brill closed-form approximation.
    BeggsBrill,
}

/// Surface separator sequence.
///
/// Governs which average-gas-gravity blending formula applies and whether
/// stock-tank Rs contributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeparatorStage {
    /// One separation stage, measured at stock-tank conditions.
    #[default]
    SingleStage,
    /// Primary separator plus stock tank.
    TwoStages,
    /// Primary separator, secondary separator and stock tank.
    ThreeStage,
}
