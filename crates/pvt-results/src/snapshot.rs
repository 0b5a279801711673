//! JSON snapshot of a single evaluation point.

use crate::{ResultsError, ResultsResult};
use pvt_fluids::FluidProperties;
use std::fs;
use std::path::Path;

/// Write a pretty-printed JSON snapshot, creating parent directories.
pub fn save_snapshot(path: &Path, props: &FluidProperties) -> ResultsResult<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(props)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a snapshot back.
pub fn load_snapshot(path: &Path) -> ResultsResult<FluidProperties> {
    if !path.exists() {
        return Err(ResultsError::SnapshotNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    let props = serde_json::from_str(&content)?;
    Ok(props)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_point() -> FluidProperties {
        FluidProperties {
            pressure: 100.0,
            temperature: 100.0,
            pb: 2142.0,
            rs: 38.2,
            rsw: 0.0,
            bo: 1.0234,
            co: 8.5e-5,
            bg: 0.156,
            bw: 1.004,
            z_factor: 0.985,
            z_factor_converged: true,
            rho_o: 51.8,
            rho_g: 0.43,
            rho_w: 62.0,
            rho_l: 51.8,
            mu_o: 5.5,
            mu_g: 0.011,
            mu_w: 0.68,
            mu_l: 5.5,
            sigma_o: 29.3,
            sigma_w: 68.5,
            sigma_l: 29.3,
            fo: 1.0,
            fw: 0.0,
            qo: 0.0,
            qg: 0.0,
            qw: 0.0,
            vsl: Some(1.2),
            vsg: Some(3.4),
        }
    }

    #[test]
    fn load_missing_snapshot_reports_path() {
        let path = std::env::temp_dir().join("pvt_results_missing_snapshot.json");
        let _ = fs::remove_file(&path);
        let err = load_snapshot(&path).unwrap_err();
        match err {
            ResultsError::SnapshotNotFound { path: p } => {
                assert!(p.contains("pvt_results_missing_snapshot"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
