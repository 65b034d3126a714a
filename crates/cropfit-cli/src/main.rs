mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropfit",
    version,
    about = "Crop recommendations from soil and climate measurements"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank crops against a farm's soil and climate conditions
    Recommend {
        #[command(flatten)]
        fields: FormArgs,

        /// JSON file with form fields (flags override its values)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Custom JSON crop catalog
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Built-in catalog to use when no --catalog is given
        #[arg(short, long, value_name = "NAME", default_value = "standard")]
        preset: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table", value_parser = ["table", "json"])]
        output: String,

        /// Also list crops below the cutoff or past the top five
        #[arg(long)]
        show_all: bool,

        /// Show the per-factor score breakdown
        #[arg(long)]
        verbose: bool,
    },
    /// Inspect and validate crop catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

/// Form fields as text. Unset fields fall back to the input file or defaults.
#[derive(Args)]
struct FormArgs {
    /// Soil pH (0-14)
    #[arg(long, value_name = "PH", allow_hyphen_values = true)]
    ph: Option<String>,

    /// Soil nitrogen (ppm)
    #[arg(short = 'N', long, allow_hyphen_values = true)]
    nitrogen: Option<String>,

    /// Soil phosphorus (ppm)
    #[arg(short = 'P', long, allow_hyphen_values = true)]
    phosphorus: Option<String>,

    /// Soil potassium (ppm)
    #[arg(short = 'K', long, allow_hyphen_values = true)]
    potassium: Option<String>,

    /// Temperature (°C)
    #[arg(short, long, allow_hyphen_values = true)]
    temperature: Option<String>,

    /// Relative humidity (%)
    #[arg(long, allow_hyphen_values = true)]
    humidity: Option<String>,

    /// Monthly rainfall (mm)
    #[arg(short, long, allow_hyphen_values = true)]
    rainfall: Option<String>,

    /// Region: plains, coastal, hills, delta or desert
    #[arg(long)]
    region: Option<String>,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List built-in catalogs
    List,
    /// Show every crop's requirements in a built-in catalog
    Explain {
        /// Preset name (e.g., "standard")
        preset: String,
    },
    /// Print the catalog JSON schema with field descriptions and example
    Schema,
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Recommend {
            fields,
            input,
            catalog,
            preset,
            output,
            show_all,
            verbose,
        } => commands::recommend::run(
            fields.into_overrides(),
            input,
            catalog,
            &preset,
            &output,
            show_all,
            verbose,
        ),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Explain { preset } => commands::catalog::explain(&preset),
            CatalogAction::Schema => commands::catalog::schema(),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

impl FormArgs {
    fn into_overrides(self) -> commands::recommend::FormOverrides {
        commands::recommend::FormOverrides {
            soil_ph: self.ph,
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            temperature: self.temperature,
            humidity: self.humidity,
            rainfall: self.rainfall,
            region: self.region,
        }
    }
}
