//! CSV report writing.
//!
//! Two layouts: wide rows (one evaluation point per line, header on top) and
//! name/value pair columns for a single point. Values print with four decimal
//! places; magnitudes below 1e-4 switch to scientific notation so small
//! compressibilities survive the round trip.

use crate::ResultsResult;
use pvt_fluids::FluidProperties;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Column order of [`property_row`] and [`write_property_table`].
pub fn property_header() -> Vec<&'static str> {
    vec![
        "p_psia",
        "t_degF",
        "pb_psia",
        "rs_scf_stb",
        "rsw_scf_stb",
        "bo_rb_stb",
        "co_1_psi",
        "bg_ft3_scf",
        "bw_rb_stb",
        "z",
        "z_converged",
        "rho_o_lb_ft3",
        "rho_g_lb_ft3",
        "rho_w_lb_ft3",
        "rho_l_lb_ft3",
        "mu_o_cp",
        "mu_g_cp",
        "mu_w_cp",
        "mu_l_cp",
        "sigma_o_dyn_cm",
        "sigma_w_dyn_cm",
        "sigma_l_dyn_cm",
        "fo",
        "fw",
        "qo_ft3_s",
        "qg_ft3_s",
        "qw_ft3_s",
        "vsl_ft_s",
        "vsg_ft_s",
    ]
}

/// Format one value the way the reports print it.
pub fn format_value(value: f64) -> String {
    if value == 0.0 || value.abs() >= 1e-4 {
        format!("{value:.4}")
    } else {
        format!("{value:.2E}")
    }
}

fn optional_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format_value(v),
        None => String::new(),
    }
}

/// One evaluation point as formatted CSV cells, in [`property_header`] order.
pub fn property_row(props: &FluidProperties) -> Vec<String> {
    vec![
        format_value(props.pressure),
        format_value(props.temperature),
        format_value(props.pb),
        format_value(props.rs),
        format_value(props.rsw),
        format_value(props.bo),
        format_value(props.co),
        format_value(props.bg),
        format_value(props.bw),
        format_value(props.z_factor),
        props.z_factor_converged.to_string(),
        format_value(props.rho_o),
        format_value(props.rho_g),
        format_value(props.rho_w),
        format_value(props.rho_l),
        format_value(props.mu_o),
        format_value(props.mu_g),
        format_value(props.mu_w),
        format_value(props.mu_l),
        format_value(props.sigma_o),
        format_value(props.sigma_w),
        format_value(props.sigma_l),
        format_value(props.fo),
        format_value(props.fw),
        format_value(props.qo),
        format_value(props.qg),
        format_value(props.qw),
        optional_value(props.vsl),
        optional_value(props.vsg),
    ]
}

fn open(path: &Path, append: bool) -> std::io::Result<std::fs::File> {
    if append {
        OpenOptions::new().create(true).append(true).open(path)
    } else {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
    }
}

/// Write one row of string cells. `append` adds to an existing file instead
/// of replacing it.
pub fn write_string_row(path: &Path, cells: &[&str], append: bool) -> ResultsResult<()> {
    let mut file = open(path, append)?;
    writeln!(file, "{}", cells.join(","))?;
    Ok(())
}

/// Write one row of formatted values.
pub fn write_row(path: &Path, values: &[f64], append: bool) -> ResultsResult<()> {
    let cells: Vec<String> = values.iter().map(|&v| format_value(v)).collect();
    let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
    write_string_row(path, &refs, append)
}

/// Write name/value pairs one per line, for single-point reports.
pub fn write_pairs(path: &Path, pairs: &[(&str, f64)], append: bool) -> ResultsResult<()> {
    let mut file = open(path, append)?;
    for (name, value) in pairs {
        writeln!(file, "{},{}", name, format_value(*value))?;
    }
    Ok(())
}

/// Write a full property table: header row, then one row per point.
pub fn write_property_table(path: &Path, points: &[FluidProperties]) -> ResultsResult<()> {
    let header = property_header();
    write_string_row(path, &header, false)?;
    for props in points {
        let cells = property_row(props);
        let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
        write_string_row(path, &refs, true)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_notation_above_threshold() {
        assert_eq!(format_value(1.23456), "1.2346");
        assert_eq!(format_value(0.0), "0.0000");
        assert_eq!(format_value(-51.8), "-51.8000");
    }

    #[test]
    fn scientific_notation_below_threshold() {
        let s = format_value(1.5e-5);
        assert!(s.contains('E'), "{s}");
        let s = format_value(-9.9e-6);
        assert!(s.contains('E'), "{s}");
    }

    #[test]
    fn threshold_boundary_stays_fixed() {
        assert_eq!(format_value(1e-4), "0.0001");
    }

    #[test]
    fn header_matches_row_width() {
        let props = crate::snapshot::tests::sample_point();
        assert_eq!(property_header().len(), property_row(&props).len());
    }

    #[test]
    fn missing_velocities_leave_empty_cells() {
        let mut props = crate::snapshot::tests::sample_point();
        props.vsl = None;
        props.vsg = None;
        let row = property_row(&props);
        assert_eq!(row[row.len() - 2], "");
        assert_eq!(row[row.len() - 1], "");
    }
}
