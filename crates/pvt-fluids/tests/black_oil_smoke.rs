//! End-to-end black-oil evaluation tests.
//!
//! These exercise the full `Fluid` pipeline against a light North Sea style
//! crude with realistic surface measurements. Tolerances are broad physical
//! plausibility bands rather than exact correlation values.

use pvt_fluids::{
    BlackOilCorrelation, EvalOptions, Fluid, OilViscosityCorrelation, PseudoCriticalCorrelation,
    ZFactorCorrelation,
};

fn light_crude() -> Fluid {
    Fluid::new(36.4, 0.878, 594.0, 0.0, 1.0)
        .unwrap()
        .with_impurities(0.22, 0.17, 0.0)
        .with_black_oil_correlation(BlackOilCorrelation::Glaso)
        .with_oil_viscosity_correlation(OilViscosityCorrelation::BeggsRobinson)
}

#[test]
fn low_pressure_saturated_point() {
    let props = light_crude().local_gas_liquid_properties(100.0, 100.0).unwrap();

    // Glaso bubble point for this crude sits near 2100 psia
    assert!(props.pb > 1500.0 && props.pb < 3000.0, "pb = {}", props.pb);
    // very little gas dissolved at 100 psia
    assert!(props.rs > 20.0 && props.rs < 60.0, "rs = {}", props.rs);
    assert!(props.bo > 1.0 && props.bo < 1.1, "bo = {}", props.bo);
    // nearly ideal gas
    assert!(
        props.z_factor > 0.9 && props.z_factor < 1.05,
        "z = {}",
        props.z_factor
    );
    assert!(props.z_factor_converged);
    assert!(props.bg > 0.1 && props.bg < 0.2, "bg = {}", props.bg);

    // physical plausibility of the phase properties
    assert!(props.rho_o > 40.0 && props.rho_o < 60.0, "rho_o = {}", props.rho_o);
    assert!(props.rho_w > 60.0 && props.rho_w < 65.0, "rho_w = {}", props.rho_w);
    assert!(props.rho_g > 0.1 && props.rho_g < 1.0, "rho_g = {}", props.rho_g);
    assert!(props.mu_g > 0.005 && props.mu_g < 0.05, "mu_g = {}", props.mu_g);
    assert!(props.mu_o > 1.0 && props.mu_o < 20.0, "mu_o = {}", props.mu_o);
    assert!(props.sigma_o > 0.0 && props.sigma_o < 40.0);
    assert!(props.sigma_w > 0.0 && props.sigma_w < 80.0);
}

#[test]
fn saturated_branch_trends_with_pressure() {
    let fluid = light_crude();
    let low = fluid.local_gas_liquid_properties(200.0, 100.0).unwrap();
    let high = fluid.local_gas_liquid_properties(1000.0, 100.0).unwrap();

    // more gas dissolves and the oil swells as pressure rises toward pb
    assert!(high.rs > low.rs);
    assert!(high.bo > low.bo);
    // gas compresses
    assert!(high.bg < low.bg);
    assert!(high.rho_g > low.rho_g);
}

#[test]
fn undersaturated_oil_holds_full_gor() {
    let fluid = light_crude();
    let props = fluid.local_gas_liquid_properties(6000.0, 100.0).unwrap();
    assert_eq!(props.rs, 594.0);
    assert!(props.pb < 6000.0);
    // oil shrinks under compression above the bubble point
    let at_pb = fluid
        .local_gas_liquid_properties(props.pb - 1.0, 100.0)
        .unwrap();
    assert!(props.bo < at_pb.bo);
}

#[test]
fn all_black_oil_families_produce_plausible_points() {
    for corr in [
        BlackOilCorrelation::AlMarhoun,
        BlackOilCorrelation::DeGhetto,
        BlackOilCorrelation::Glaso,
        BlackOilCorrelation::Lasater,
        BlackOilCorrelation::Petrosky,
        BlackOilCorrelation::Standing,
        BlackOilCorrelation::VazquezBeggs,
    ] {
        let fluid = light_crude().with_black_oil_correlation(corr);
        let props = fluid.local_gas_liquid_properties(500.0, 100.0).unwrap();
        assert!(props.pb > 500.0 && props.pb < 5000.0, "{corr:?}: pb = {}", props.pb);
        assert!(props.rs >= 0.0 && props.rs <= 594.0, "{corr:?}: rs = {}", props.rs);
        assert!(props.bo > 0.95 && props.bo < 1.5, "{corr:?}: bo = {}", props.bo);
        assert!(props.co > 0.0, "{corr:?}: co = {}", props.co);
    }
}

#[test]
fn all_viscosity_families_produce_plausible_points() {
    for corr in [
        OilViscosityCorrelation::BeggsRobinson,
        OilViscosityCorrelation::Beal,
        OilViscosityCorrelation::Petrosky,
        OilViscosityCorrelation::Egbogah,
        OilViscosityCorrelation::BergmanSutton,
        OilViscosityCorrelation::DeGhetto,
    ] {
        let fluid = light_crude().with_oil_viscosity_correlation(corr);
        let props = fluid.local_gas_liquid_properties(500.0, 100.0).unwrap();
        assert!(
            props.mu_o > 0.1 && props.mu_o < 100.0,
            "{corr:?}: mu_o = {}",
            props.mu_o
        );
    }
}

#[test]
fn z_factor_correlations_roughly_agree() {
    let hy = light_crude().with_z_factor_correlation(ZFactorCorrelation::HallYarborough);
    let bb = light_crude().with_z_factor_correlation(ZFactorCorrelation::BeggsBrill);
    let a = hy.local_gas_liquid_properties(1000.0, 100.0).unwrap();
    let b = bb.local_gas_liquid_properties(1000.0, 100.0).unwrap();
    let rel = ((a.z_factor - b.z_factor) / b.z_factor).abs();
    assert!(rel < 0.05, "hy = {}, bb = {}", a.z_factor, b.z_factor);
}

#[test]
fn pseudo_critical_choice_shifts_z_slightly() {
    let sutton = light_crude().with_pseudo_critical_correlation(PseudoCriticalCorrelation::Sutton);
    let standing =
        light_crude().with_pseudo_critical_correlation(PseudoCriticalCorrelation::Standing);
    let a = sutton.local_gas_liquid_properties(1000.0, 100.0).unwrap();
    let b = standing.local_gas_liquid_properties(1000.0, 100.0).unwrap();
    assert_ne!(a.z_factor, b.z_factor);
    let rel = ((a.z_factor - b.z_factor) / b.z_factor).abs();
    assert!(rel < 0.1);
}

#[test]
fn watercut_partitions_the_liquid_phase() {
    let mut fluid = Fluid::new(36.4, 0.878, 594.0, 0.5, 1.0).unwrap();
    fluid.set_liquid_rate(2000.0).unwrap();
    let props = fluid.local_gas_liquid_properties(500.0, 150.0).unwrap();

    assert!(props.fo > 0.0 && props.fo < 1.0);
    assert!((props.fo + props.fw - 1.0).abs() < 1e-12);
    // weighted liquid properties fall between the phase values
    let (lo, hi) = if props.rho_o < props.rho_w {
        (props.rho_o, props.rho_w)
    } else {
        (props.rho_w, props.rho_o)
    };
    assert!(props.rho_l >= lo && props.rho_l <= hi);
}

#[test]
fn velocities_scale_inversely_with_pipe_area() {
    let mut fluid = light_crude();
    fluid.set_oil_rate(3000.0).unwrap();

    let narrow = EvalOptions {
        pipe_diameter: Some(0.2),
        ..Default::default()
    };
    let wide = EvalOptions {
        pipe_diameter: Some(0.4),
        ..Default::default()
    };
    let a = fluid
        .local_gas_liquid_properties_with(500.0, 100.0, &narrow)
        .unwrap();
    let b = fluid
        .local_gas_liquid_properties_with(500.0, 100.0, &wide)
        .unwrap();

    // 2x diameter = 4x area = 1/4 the velocity
    let ratio = a.vsl.unwrap() / b.vsl.unwrap();
    assert!((ratio - 4.0).abs() < 1e-9, "ratio = {ratio}");
}
