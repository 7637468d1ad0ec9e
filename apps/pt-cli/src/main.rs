use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use pt_app::{AppResult, Classification, classify_state, list_tables, load_catalog};
use pt_state::StateResult;
use pt_tables::{PropertyKind, SaturationAxis};

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "PhaseTab CLI - thermodynamic state lookup from tabulated property data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the thermodynamic state from two property values
    Classify {
        /// Path to the catalog file (JSON or YAML)
        catalog_path: PathBuf,
        /// Substance name, e.g. water
        substance: String,
        /// Known saturation-indexing property: temperature or pressure
        first_property: SaturationAxis,
        /// Value of the first property (°C or bar)
        first_value: f64,
        /// Second property: temperature, specific_volume, internal_energy, enthalpy, or entropy
        second_property: PropertyKind,
        /// Value of the second property (table units)
        second_value: f64,
    },
    /// List tables in a catalog file
    Tables {
        /// Path to the catalog file (JSON or YAML)
        catalog_path: PathBuf,
    },
    /// Validate catalog file syntax and structure
    Validate {
        /// Path to the catalog file (JSON or YAML)
        catalog_path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            catalog_path,
            substance,
            first_property,
            first_value,
            second_property,
            second_value,
        } => cmd_classify(
            &catalog_path,
            substance,
            first_property,
            first_value,
            second_property,
            second_value,
        ),
        Commands::Tables { catalog_path } => cmd_tables(&catalog_path),
        Commands::Validate { catalog_path } => cmd_validate(&catalog_path),
    }
}

fn cmd_classify(
    catalog_path: &Path,
    substance: String,
    first_property: SaturationAxis,
    first_value: f64,
    second_property: PropertyKind,
    second_value: f64,
) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;

    let request = pt_app::ClassifyRequest {
        substance,
        first_property,
        first_value,
        second_property,
        second_value,
    };
    let classification = classify_state(&catalog, &request)?;

    print_classification(&classification);
    Ok(())
}

fn print_classification(classification: &Classification) {
    let row = &classification.row;
    println!(
        "Saturation row for {}: T = {:.2} °C, P = {:.4} bar",
        classification.substance, row.temperature_c, row.pressure_bar
    );
    println!("State: {}", classification.result.label());

    match &classification.result {
        StateResult::CompressedLiquid { detail } => {
            println!("  {}", detail);
        }
        StateResult::Mixture {
            quality,
            properties,
        } => {
            println!("  Quality: x = {:.4}", quality);
            print_properties(properties);
        }
        StateResult::SaturatedLiquid { properties }
        | StateResult::SaturatedVapor { properties }
        | StateResult::SuperheatedVapor { properties } => {
            print_properties(properties);
        }
        StateResult::Saturated { liquid, vapor } => {
            println!("Saturated-liquid properties:");
            print_properties(liquid);
            println!("Saturated-vapor properties:");
            print_properties(vapor);
        }
    }
}

fn print_properties(properties: &pt_tables::PhaseProperties) {
    for (property, value) in properties.iter() {
        println!("  {}: {:.6}", property.label(), value);
    }
}

fn cmd_tables(catalog_path: &Path) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let tables = list_tables(&catalog);

    if tables.is_empty() {
        println!("No tables found in catalog");
    } else {
        println!("Tables in catalog:");
        for name in tables {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn cmd_validate(catalog_path: &Path) -> AppResult<()> {
    println!("Validating catalog: {}", catalog_path.display());
    let catalog = load_catalog(catalog_path)?;
    println!(
        "✓ Catalog is valid ({} substances, {} tables)",
        catalog.substances().len(),
        catalog.table_names().len()
    );
    Ok(())
}
