//! MacroLens CLI
//!
//! Command-line interface for one-shot operations:
//! - Analyze a meal photo, optionally correct and save the numbers
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use macrolens::analysis::{HttpAnalysisClient, ImageUpload};
use macrolens::config::Config;
use macrolens::meal::MacroBreakdown;
use macrolens::results::{format_amount, MacroField, ResultView};
use macrolens::session::Session;
use macrolens::store::{AppStore, SubmissionOutcome};

#[derive(Parser)]
#[command(name = "macrolens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Macro-nutrient breakdown from a meal photo")]
#[command(long_about = "MacroLens sends a meal photo to an analysis server and shows the dish,\nits calories and macros, and the detected ingredients.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Analysis server URL (overrides the config file)
    #[arg(long, global = true)]
    pub server_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a meal photo
    Analyze {
        /// Image file
        image: PathBuf,
        /// Corrections in field=value format (calories, carbs, proteins, fat)
        #[arg(short, long = "set")]
        set: Vec<String>,
        /// Save the corrected values into the meal record
        #[arg(long)]
        save: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            image,
            set,
            save,
            format,
        } => {
            let mut config = Config::resolve(cli.config.as_deref())?;
            if let Some(url) = cli.server_url {
                config.server.base_url = url;
            }
            macrolens::telemetry::init(&config.logging)?;

            // Parse corrections up front so a typo fails before the upload
            let mut corrections = Vec::new();
            for entry in &set {
                let (field, value) = entry
                    .split_once('=')
                    .with_context(|| format!("Invalid correction {:?}, expected field=value", entry))?;
                let field: MacroField = field.parse()?;
                corrections.push((field, value.to_string()));
            }

            let upload = ImageUpload::from_path(&image).await?;
            let client = HttpAnalysisClient::new(config.server.clone())?;
            let session = Session::new(client, &config.ui);

            if let SubmissionOutcome::Rejected(failure) = session.submit_image(upload).await {
                eprintln!("Error: {}", failure);
                std::process::exit(1);
            }

            let state = session.snapshot().await;
            let mut view = ResultView::load_from_source(state.record());
            for (field, value) in &corrections {
                view.edit_field(*field, value);
            }

            let saved = if save {
                let edited = view.save();
                session.complete_edit(edited.clone()).await;
                Some(edited)
            } else {
                None
            };

            let state = session.snapshot().await;
            match format {
                OutputFormat::Json => match saved {
                    Some(edited) => println!("{}", serde_json::to_string_pretty(&edited)?),
                    None => println!("{}", serde_json::to_string_pretty(view.draft())?),
                },
                OutputFormat::Text => print_meal(&view, &state),
            }
        }

        Commands::Config { output } => {
            let config = macrolens::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_meal(view: &ResultView, state: &AppStore) {
    let draft = view.draft();

    println!("{}", draft.meal_name);
    println!("{}", draft.date);
    println!();

    match view.summary_lines() {
        Some(lines) => {
            for line in lines {
                println!("  {}", line);
            }
        }
        None => {
            for (field, value) in MacroField::ALL.iter().map(|f| (f, draft.get(*f))) {
                println!("  {:<10} {:>8} {}", field.label(), format_amount(value), field.unit());
            }
            println!();
            println!("(not saved, pass --save to keep these values)");
        }
    }

    let breakdown = MacroBreakdown::from_macros(&state.record().macros);
    println!();
    println!(
        "Energy split: carbs {:.0}% | protein {:.0}% | fat {:.0}%",
        breakdown.carbohydrates.percent, breakdown.protein.percent, breakdown.fat.percent
    );

    if draft.ingredients.is_empty() {
        return;
    }

    println!();
    println!(
        "{:<20} {:>8} {:>8} {:>8} {:>8} {:>10}",
        "Ingredient", "kcal", "Carbs", "Protein", "Fat", "Weight"
    );
    println!("{}", "-".repeat(67));
    for row in &draft.ingredients {
        println!(
            "{:<20} {:>8} {:>8} {:>8} {:>8} {:>10}",
            row.name,
            format_amount(row.calories),
            format_amount(row.carbs),
            format_amount(row.protein),
            format_amount(row.fat),
            row.weight
        );
    }
}
