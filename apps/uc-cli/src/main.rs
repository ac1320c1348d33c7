use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uc_app::{
    AppResult, Conversion, ConverterConfig, Precision, Session, convert_and_format,
    failure_message,
};
use uc_core::Category;
use uc_units::{ConversionRequest, ConvertError, table_for, units_for};

mod shell;

#[derive(Parser)]
#[command(name = "uc-cli")]
#[command(about = "Unit Converter CLI - length, mass, volume and temperature", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported categories
    Categories,
    /// List units for a category, in picker order
    Units {
        /// Category name (Length, Mass, Volume, Temperature)
        category: Category,
    },
    /// Convert a single value
    Convert {
        /// Category name (Length, Mass, Volume, Temperature)
        category: Category,
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source unit
        from: String,
        /// Target unit
        to: String,
        /// Decimal places shown (0-10); defaults to the config value
        #[arg(short, long)]
        precision: Option<i64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive converter form
    Shell,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Categories => cmd_categories(),
        Commands::Units { category } => cmd_units(category),
        Commands::Convert {
            category,
            value,
            from,
            to,
            precision,
            json,
        } => cmd_convert(&config, category, &value, &from, &to, precision, json),
        Commands::Shell => cmd_shell(&config),
    }
}

fn load_config(path: Option<&Path>) -> AppResult<ConverterConfig> {
    match path {
        Some(path) => ConverterConfig::load(path),
        None => {
            tracing::debug!("no config file given, using defaults");
            Ok(ConverterConfig::default())
        }
    }
}

fn cmd_categories() -> AppResult<()> {
    for category in Category::ALL {
        match table_for(category) {
            Some(table) => println!(
                "  {} (base: {}, {} units)",
                category,
                table.base_unit(),
                table.len()
            ),
            None => println!("  {} (Celsius pivot, 3 units)", category),
        }
    }
    Ok(())
}

fn cmd_units(category: Category) -> AppResult<()> {
    println!("{} units:", category);
    match table_for(category) {
        Some(table) => {
            for (unit, factor) in table.iter() {
                println!("  {:<18} 1 {} = {} {}", unit, unit, factor, table.base_unit());
            }
        }
        None => {
            for unit in units_for(category) {
                println!("  {}", unit);
            }
        }
    }
    Ok(())
}

fn cmd_convert(
    config: &ConverterConfig,
    category: Category,
    value: &str,
    from: &str,
    to: &str,
    precision: Option<i64>,
    json: bool,
) -> AppResult<()> {
    let precision = match precision {
        Some(p) => Precision::new(p)?,
        None => config.precision,
    };

    let request = ConversionRequest::new(category, from, to, value);
    let result = convert_and_format(&request, precision);

    let ok = write_conversion(&result, json, &mut io::stdout(), &mut io::stderr())?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Print a conversion outcome; returns false when it failed.
fn write_conversion<O: Write, E: Write>(
    result: &Result<Conversion, ConvertError>,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> AppResult<bool> {
    match result {
        Ok(conversion) if json => {
            writeln!(out, "{}", serde_json::to_string_pretty(conversion)?)?;
            Ok(true)
        }
        Ok(conversion) => {
            writeln!(out, "✓ {}", conversion.display)?;
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(error = %e, "convert failed");
            writeln!(err, "✗ {}", failure_message(e))?;
            Ok(false)
        }
    }
}

fn cmd_shell(config: &ConverterConfig) -> AppResult<()> {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run_shell(&mut session, stdin.lock(), &mut stdout)
}
