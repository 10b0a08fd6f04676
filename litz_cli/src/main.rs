//! # Litz CLI
//!
//! Command line front end for `litz_core`.
//!
//! ```text
//! litz_cli validate --strands 67 --awg 36
//! litz_cli construct --strands 200 --awg 36 --litz-type "Type 2"
//! litz_cli design --strands 200 --awg 36 --wire-type insulated --insulation FEP --wall 0.004
//! litz_cli design --request quote.json --format json
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG` or pass `--verbose` to see the
//! engine's debug output.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use litz_core::calculations::{
    calculate_litz_construction, validate_strand_count, DiameterResult, ServeType,
};
use litz_core::design::{evaluate_design, DesignReport, DesignRequest, WireType};
use litz_core::tables::{
    FilmType, InsulationLayers, InsulationType, LitzType, DEFAULT_MAGNET_WIRE_GRADE,
};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "litz_cli")]
#[command(about = "Litz wire construction and diameter calculator", long_about = None)]
struct Cli {
    /// Log engine diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WireTypeArg {
    Bare,
    Insulated,
}

impl From<WireTypeArg> for WireType {
    fn from(arg: WireTypeArg) -> Self {
        match arg {
            WireTypeArg::Bare => WireType::BareServed,
            WireTypeArg::Insulated => WireType::Insulated,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a strand count can be bundled at a gauge
    Validate {
        #[arg(short, long)]
        strands: u32,

        #[arg(short, long)]
        awg: u32,
    },

    /// Resolve operations, factors and copper area
    Construct {
        #[arg(short, long)]
        strands: u32,

        #[arg(short, long)]
        awg: u32,

        /// "Type 1" or "Type 2"
        #[arg(short, long, default_value = "Type 1")]
        litz_type: LitzType,

        #[arg(short, long, default_value = DEFAULT_MAGNET_WIRE_GRADE)]
        grade: String,
    },

    /// Evaluate a full design: diameters, part numbers, warnings
    Design {
        /// JSON design request; other design options are ignored when given
        #[arg(short, long, conflicts_with_all = ["strands", "awg"])]
        request: Option<PathBuf>,

        #[arg(short, long, required_unless_present = "request")]
        strands: Option<u32>,

        #[arg(short, long, required_unless_present = "request")]
        awg: Option<u32>,

        #[arg(short, long, default_value = "Type 1")]
        litz_type: LitzType,

        #[arg(short, long, default_value = DEFAULT_MAGNET_WIRE_GRADE)]
        grade: String,

        #[arg(short, long, value_enum, default_value_t = WireTypeArg::Bare)]
        wire_type: WireTypeArg,

        /// ETFE, FEP or PFA
        #[arg(short, long, default_value = "ETFE")]
        insulation: InsulationType,

        /// Film builds to size (repeatable); all when omitted
        #[arg(long = "film")]
        films: Vec<FilmType>,

        /// Layer counts to size, 1 to 3 (repeatable); all when omitted
        #[arg(long = "layers", value_parser = parse_layers)]
        layers: Vec<InsulationLayers>,

        /// Requested per-layer wall, inches; sized from the bundle when omitted
        #[arg(long)]
        wall: Option<Decimal>,

        /// Single or Double nylon serve over bare results
        #[arg(long)]
        serve: Option<ServeType>,

        /// Operating temperature, °C
        #[arg(long, default_value_t = 20.0)]
        temperature: f64,

        /// Frequency, Hz
        #[arg(long, default_value_t = 1000.0)]
        frequency: f64,
    },
}

fn parse_layers(s: &str) -> Result<InsulationLayers, String> {
    let count: u8 = s.parse().map_err(|_| format!("'{}' is not a layer count", s))?;
    InsulationLayers::try_from(count).map_err(|e| e.to_string())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "litz_core=debug,litz_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_diameters(label: &str, d: &DiameterResult) {
    println!(
        "  {:<24} {:>7} {:>7} {:>7}   {}",
        label, d.min, d.nom, d.max, d.part_number
    );
    if let (Some(wall_in), Some(wall_mm)) = (d.wall_thickness_inches, d.wall_thickness_mm) {
        println!("  {:<24} wall {} in ({} mm)", "", wall_in, wall_mm);
    }
}

fn print_report(report: &DesignReport) {
    let c = &report.construction;
    println!("═══════════════════════════════════════");
    println!("  LITZ DESIGN  {}/{} {}", c.total_strands, c.wire_awg, c.litz_type);
    println!("═══════════════════════════════════════");

    if !report.is_valid() {
        println!("INVALID: {}", c.validation_message);
        if !report.validation.nearby_valid.is_empty() {
            let nearby: Vec<String> = report
                .validation
                .nearby_valid
                .iter()
                .map(u32::to_string)
                .collect();
            println!("Nearby valid counts: {}", nearby.join(", "));
        }
        return;
    }

    println!("Construction:");
    println!(
        "  Operations:     {} ({:?})",
        c.number_of_operations, report.validation.breakdown
    );
    println!("  Packing factor: {}", c.packing_factor);
    println!("  Take-up factor: {}", c.take_up_factor);
    println!(
        "  Copper area:    {} CMA ({} mm²)",
        c.total_copper_area_cma, c.total_copper_area_mm2
    );
    println!("  Equivalent:     {}", c.equivalent_awg);
    println!();

    if !report.bare.is_empty() {
        println!("Diameters (in):            min     nom     max");
        for film in &report.bare {
            match (&film.bare, &film.skipped) {
                (Some(bare), _) => {
                    print_diameters(&format!("{} bare", film.film_type), bare);
                    if let Some(served) = &film.served {
                        print_diameters(&format!("{} served", film.film_type), served);
                    }
                }
                (None, Some(reason)) => {
                    println!("  {:<24} {}", film.film_type.to_string(), reason)
                }
                (None, None) => {}
            }
        }
        println!();
    }

    if !report.insulated.is_empty() {
        println!("Diameters (in):            min     nom     max");
        for layer in &report.insulated {
            print_diameters(
                &format!("{} {}", layer.layers, report.request.insulation_type),
                &layer.diameters,
            );
        }
        println!();
    }

    if let Some(e) = &report.electrical {
        println!("Electrical ({} °C, {} Hz):", e.temperature_c, e.frequency_hz);
        println!("  DC resistance:  {:.4} Ω/1000 ft", e.dc_resistance_ohm_per_kft);
        println!("  Skin depth:     {:.4} mm", e.skin_depth_mm);
        println!("  N1 max:         {}", e.n1_max);
        println!();
    }

    let warnings = report.all_warnings();
    if !warnings.is_empty() {
        println!("Warnings:");
        for warning in warnings {
            println!("  ⚠ {}", warning);
        }
    }
}

fn load_request(path: &PathBuf) -> anyhow::Result<DesignRequest> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(DesignRequest::from_json(&json)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { strands, awg } => {
            let result = validate_strand_count(strands, awg);
            if cli.format == OutputFormat::Json {
                return print_json(&result);
            }
            println!("{}", result.message);
            if result.is_valid {
                println!("Breakdown: {:?}", result.breakdown);
            } else if !result.nearby_valid.is_empty() {
                let nearby: Vec<String> = result.nearby_valid.iter().map(u32::to_string).collect();
                println!("Nearby valid counts: {}", nearby.join(", "));
            }
        }

        Commands::Construct {
            strands,
            awg,
            litz_type,
            grade,
        } => {
            let construction = calculate_litz_construction(strands, awg, litz_type, &grade)?;
            if cli.format == OutputFormat::Json {
                return print_json(&construction);
            }
            println!("{}", construction.validation_message);
            println!("Operations:     {}", construction.number_of_operations);
            println!("Packing factor: {}", construction.packing_factor);
            println!("Take-up factor: {}", construction.take_up_factor);
            println!(
                "Copper area:    {} CMA ({} mm²)",
                construction.total_copper_area_cma, construction.total_copper_area_mm2
            );
            println!("Equivalent:     {}", construction.equivalent_awg);
        }

        Commands::Design {
            request,
            strands,
            awg,
            litz_type,
            grade,
            wire_type,
            insulation,
            films,
            layers,
            wall,
            serve,
            temperature,
            frequency,
        } => {
            let request = match request {
                Some(path) => load_request(&path)?,
                None => {
                    let (Some(strands), Some(awg)) = (strands, awg) else {
                        anyhow::bail!("--strands and --awg are required without --request");
                    };
                    let mut request = DesignRequest::new(strands, awg);
                    request.litz_type = litz_type;
                    request.magnet_wire_grade = grade;
                    request.wire_type = wire_type.into();
                    request.insulation_type = insulation;
                    if !films.is_empty() {
                        request.film_types = films;
                    }
                    if !layers.is_empty() {
                        request.layers = layers;
                    }
                    request.requested_wall_in = wall;
                    request.serve_type = serve;
                    request.temperature_c = temperature;
                    request.frequency_hz = frequency;
                    request
                }
            };
            debug!(strands = request.strand_count, awg = request.wire_awg, "evaluating design");

            let report = evaluate_design(&request)?;
            if cli.format == OutputFormat::Json {
                return print_json(&report);
            }
            print_report(&report);
        }
    }

    Ok(())
}
