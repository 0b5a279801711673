use clap::{Args, Parser, Subcommand, ValueEnum};
use pvt_fluids::{
    BlackOilCorrelation, EvalOptions, Fluid, FluidProperties, GasKind, OilViscosityCorrelation,
    PseudoCriticalCorrelation, ZFactorCorrelation,
};
use pvt_results::{property_header, property_row, save_snapshot, write_property_table};
use std::path::{Path, PathBuf};

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Fluid error: {0}")]
    Fluid(#[from] pvt_fluids::FluidError),

    #[error("Results error: {0}")]
    Results(#[from] pvt_results::ResultsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "pvt-cli")]
#[command(about = "pvtflow CLI - black-oil PVT correlation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate fluid properties at one pressure and temperature
    Point {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Pressure [psia]
        #[arg(short, long)]
        pressure: f64,
        /// Temperature [°F]
        #[arg(short, long)]
        temperature: f64,
        /// Pipe inner diameter [ft], enables superficial velocities
        #[arg(long)]
        diameter: Option<f64>,
        /// Stock tank oil rate [stb/d]
        #[arg(long)]
        oil_rate: Option<f64>,
        /// Write the point as pretty JSON instead of printing a table
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Evaluate a pressure sweep at constant temperature
    Sweep {
        #[command(flatten)]
        fluid: FluidArgs,
        /// First pressure [psia]
        #[arg(long)]
        p_start: f64,
        /// Last pressure [psia]
        #[arg(long)]
        p_end: f64,
        /// Number of evenly spaced points
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(2..))]
        steps: u32,
        /// Temperature [°F]
        #[arg(short, long)]
        temperature: f64,
        /// Pipe inner diameter [ft], enables superficial velocities
        #[arg(long)]
        diameter: Option<f64>,
        /// Stock tank oil rate [stb/d]
        #[arg(long)]
        oil_rate: Option<f64>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the fluid definition to a JSON file for later --fluid use
    SaveFluid {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Output JSON file path
        path: PathBuf,
    },
}

#[derive(Args)]
struct FluidArgs {
    /// JSON fluid definition; composition flags are ignored when set
    #[arg(long)]
    fluid: Option<PathBuf>,
    /// Stock tank oil gravity [°API]
    #[arg(long, default_value_t = 36.4)]
    api: f64,
    /// Total produced gas specific gravity [air = 1]
    #[arg(long, default_value_t = 0.878)]
    gas_gravity: f64,
    /// Total producing gas-oil ratio [scf/stb]
    #[arg(long, default_value_t = 594.0)]
    gor: f64,
    /// Water cut [fraction]
    #[arg(long, default_value_t = 0.0)]
    wct: f64,
    /// Water salinity [wt% NaCl]
    #[arg(long, default_value_t = 1.0)]
    salinity: f64,
    /// Nitrogen content [mol%]
    #[arg(long, default_value_t = 0.22)]
    n2: f64,
    /// Carbon dioxide content [mol%]
    #[arg(long, default_value_t = 0.17)]
    co2: f64,
    /// Hydrogen sulfide content [mol%]
    #[arg(long, default_value_t = 0.0)]
    h2s: f64,
    /// Oil pour point [°F], used by the Egbogah viscosity family
    #[arg(long)]
    pour_point: Option<f64>,
    #[arg(long, value_enum, default_value_t = BlackOilArg::Glaso)]
    black_oil: BlackOilArg,
    #[arg(long, value_enum, default_value_t = OilViscosityArg::BeggsRobinson)]
    oil_viscosity: OilViscosityArg,
    #[arg(long, value_enum, default_value_t = PseudoCriticalArg::Sutton)]
    pseudo_critical: PseudoCriticalArg,
    #[arg(long, value_enum, default_value_t = ZFactorArg::HallYarborough)]
    z_factor: ZFactorArg,
    #[arg(long, value_enum, default_value_t = GasKindArg::Natural)]
    gas_kind: GasKindArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum BlackOilArg {
    AlMarhoun,
    DeGhetto,
    Glaso,
    Lasater,
    Petrosky,
    Standing,
    VazquezBeggs,
}

impl From<BlackOilArg> for BlackOilCorrelation {
    fn from(arg: BlackOilArg) -> Self {
        match arg {
            BlackOilArg::AlMarhoun => BlackOilCorrelation::AlMarhoun,
            BlackOilArg::DeGhetto => BlackOilCorrelation::DeGhetto,
            BlackOilArg::Glaso => BlackOilCorrelation::Glaso,
            BlackOilArg::Lasater => BlackOilCorrelation::Lasater,
            BlackOilArg::Petrosky => BlackOilCorrelation::Petrosky,
            BlackOilArg::Standing => BlackOilCorrelation::Standing,
            BlackOilArg::VazquezBeggs => BlackOilCorrelation::VazquezBeggs,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OilViscosityArg {
    BeggsRobinson,
    Beal,
    Petrosky,
    Egbogah,
    BergmanSutton,
    DeGhetto,
}

impl From<OilViscosityArg> for OilViscosityCorrelation {
    fn from(arg: OilViscosityArg) -> Self {
        match arg {
            OilViscosityArg::BeggsRobinson => OilViscosityCorrelation::BeggsRobinson,
            OilViscosityArg::Beal => OilViscosityCorrelation::Beal,
            OilViscosityArg::Petrosky => OilViscosityCorrelation::Petrosky,
            OilViscosityArg::Egbogah => OilViscosityCorrelation::Egbogah,
            OilViscosityArg::BergmanSutton => OilViscosityCorrelation::BergmanSutton,
            OilViscosityArg::DeGhetto => OilViscosityCorrelation::DeGhetto,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PseudoCriticalArg {
    Standing,
    Sutton,
}

impl From<PseudoCriticalArg> for PseudoCriticalCorrelation {
    fn from(arg: PseudoCriticalArg) -> Self {
        match arg {
            PseudoCriticalArg::Standing => PseudoCriticalCorrelation::Standing,
            PseudoCriticalArg::Sutton => PseudoCriticalCorrelation::Sutton,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ZFactorArg {
    HallYarborough,
    BeggsBrill,
}

impl From<ZFactorArg> for ZFactorCorrelation {
    fn from(arg: ZFactorArg) -> Self {
        match arg {
            ZFactorArg::HallYarborough => ZFactorCorrelation::HallYarborough,
            ZFactorArg::BeggsBrill => ZFactorCorrelation::BeggsBrill,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GasKindArg {
    Natural,
    Condensate,
}

impl From<GasKindArg> for GasKind {
    fn from(arg: GasKindArg) -> Self {
        match arg {
            GasKindArg::Natural => GasKind::Natural,
            GasKindArg::Condensate => GasKind::Condensate,
        }
    }
}

impl FluidArgs {
    fn build(&self) -> CliResult<Fluid> {
        if let Some(path) = &self.fluid {
            let content = std::fs::read_to_string(path)?;
            let fluid = serde_json::from_str(&content)?;
            return Ok(fluid);
        }

        let mut fluid = Fluid::new(self.api, self.gas_gravity, self.gor, self.wct, self.salinity)?
            .with_impurities(self.n2, self.co2, self.h2s)
            .with_black_oil_correlation(self.black_oil.into())
            .with_oil_viscosity_correlation(self.oil_viscosity.into())
            .with_pseudo_critical_correlation(self.pseudo_critical.into())
            .with_z_factor_correlation(self.z_factor.into())
            .with_gas_kind(self.gas_kind.into());
        if let Some(pour_point) = self.pour_point {
            fluid = fluid.with_pour_point(pour_point);
        }
        Ok(fluid)
    }
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Point {
            fluid,
            pressure,
            temperature,
            diameter,
            oil_rate,
            json,
        } => cmd_point(
            &fluid,
            pressure,
            temperature,
            diameter,
            oil_rate,
            json.as_deref(),
        ),
        Commands::Sweep {
            fluid,
            p_start,
            p_end,
            steps,
            temperature,
            diameter,
            oil_rate,
            output,
        } => cmd_sweep(
            &fluid,
            p_start,
            p_end,
            steps,
            temperature,
            diameter,
            oil_rate,
            output.as_deref(),
        ),
        Commands::SaveFluid { fluid, path } => cmd_save_fluid(&fluid, &path),
    }
}

fn prepare_fluid(args: &FluidArgs, oil_rate: Option<f64>) -> CliResult<Fluid> {
    let mut fluid = args.build()?;
    if let Some(rate) = oil_rate {
        fluid.set_oil_rate(rate)?;
    }
    Ok(fluid)
}

fn cmd_point(
    args: &FluidArgs,
    pressure: f64,
    temperature: f64,
    diameter: Option<f64>,
    oil_rate: Option<f64>,
    json: Option<&Path>,
) -> CliResult<()> {
    let fluid = prepare_fluid(args, oil_rate)?;
    let options = EvalOptions {
        pipe_diameter: diameter,
        ..Default::default()
    };
    let props = fluid.local_gas_liquid_properties_with(pressure, temperature, &options)?;

    if let Some(path) = json {
        save_snapshot(path, &props)?;
        println!("✓ Wrote snapshot to {}", path.display());
    } else {
        print_point(&props);
    }
    Ok(())
}

fn print_point(props: &FluidProperties) {
    println!(
        "Properties at {:.1} psia, {:.1} °F:",
        props.pressure, props.temperature
    );
    let header = property_header();
    let row = property_row(props);
    for (name, value) in header.iter().zip(&row) {
        if value.is_empty() {
            continue;
        }
        println!("  {name:<16} {value:>12}");
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_sweep(
    args: &FluidArgs,
    p_start: f64,
    p_end: f64,
    steps: u32,
    temperature: f64,
    diameter: Option<f64>,
    oil_rate: Option<f64>,
    output: Option<&Path>,
) -> CliResult<()> {
    let fluid = prepare_fluid(args, oil_rate)?;
    let options = EvalOptions {
        pipe_diameter: diameter,
        ..Default::default()
    };

    let dp = (p_end - p_start) / f64::from(steps - 1);
    let mut points = Vec::with_capacity(steps as usize);
    for i in 0..steps {
        let p = p_start + dp * f64::from(i);
        let props = fluid.local_gas_liquid_properties_with(p, temperature, &options)?;
        points.push(props);
    }

    if let Some(path) = output {
        write_property_table(path, &points)?;
        println!("✓ Wrote {} points to {}", points.len(), path.display());
    } else {
        print_sweep(&points);
    }
    Ok(())
}

fn print_sweep(points: &[FluidProperties]) {
    println!(
        "{:>10} {:>10} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "p_psia", "rs", "bo", "bg", "z", "rho_o", "mu_o"
    );
    for props in points {
        println!(
            "{:>10.1} {:>10.2} {:>8.4} {:>8.4} {:>8.4} {:>8.2} {:>8.3}",
            props.pressure, props.rs, props.bo, props.bg, props.z_factor, props.rho_o, props.mu_o
        );
    }
}

fn cmd_save_fluid(args: &FluidArgs, path: &Path) -> CliResult<()> {
    let fluid = args.build()?;
    let json = serde_json::to_string_pretty(&fluid)?;
    std::fs::write(path, json)?;
    println!("✓ Wrote fluid definition to {}", path.display());
    Ok(())
}
