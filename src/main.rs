//! MacroLens terminal session
//!
//! Interactive front end: shows the welcome splash, asks for a meal photo,
//! then opens the result editor.
//!
//! Commands at the prompt:
//! - `<path>`: analyze an image
//! - `field=value`: change a total while editing (calories, carbs, proteins, fat)
//! - `save`, `edit`, `dismiss`, `quit`

use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use macrolens::analysis::{HttpAnalysisClient, ImageUpload};
use macrolens::config::Config;
use macrolens::meal::MacroBreakdown;
use macrolens::results::{format_amount, format_long_date, MacroField, ResultView};
use macrolens::session::Session;
use macrolens::store::{AppStore, SubmissionOutcome};

#[derive(Parser)]
#[command(name = "macrolens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive meal analysis session")]
struct Args {
    /// Config file (default: search the usual locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Analysis server URL (overrides the config file)
    #[arg(long)]
    server_url: Option<String>,
}

enum Command {
    Analyze(PathBuf),
    Edit(String, String),
    Save,
    StartEditing,
    Dismiss,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line {
            "" => None,
            "quit" | "exit" | "q" => Some(Self::Quit),
            "save" => Some(Self::Save),
            "edit" => Some(Self::StartEditing),
            "dismiss" => Some(Self::Dismiss),
            "help" | "?" => Some(Self::Help),
            _ => match line.split_once('=') {
                Some((field, value)) => Some(Self::Edit(field.to_string(), value.to_string())),
                None => Some(Self::Analyze(PathBuf::from(line))),
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(url) = args.server_url {
        config.server.base_url = url;
    }
    macrolens::telemetry::init(&config.logging)?;

    tracing::info!("MacroLens v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Analysis endpoint: {}", config.server.endpoint());

    let client = HttpAnalysisClient::new(config.server.clone())?;
    let mut session = Session::new(client, &config.ui);

    // Splash
    session.start_splash();
    println!();
    println!("  MacroLens");
    println!("  Snap your meal. Know your macros.");
    println!();
    while session.snapshot().await.show_welcome() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    println!("{}", format_long_date(&Local::now().date_naive()));
    print_help();

    let mut view: Option<ResultView> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(view.as_ref());
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Dismiss => session.dismiss_notification().await,
            Command::Analyze(path) => {
                if let Some(new_view) = analyze(&session, &path).await {
                    view = Some(new_view);
                }
            }
            Command::Edit(field, value) => {
                let Some(view) = view.as_mut().filter(|v| v.is_editing()) else {
                    println!("Nothing to edit. Analyze a photo first, or type 'edit'.");
                    continue;
                };
                match field.parse::<MacroField>() {
                    Ok(field) => {
                        let stored = view.edit_field(field, &value);
                        println!("  {} = {}", field.label(), format_amount(stored));
                    }
                    Err(e) => println!("{}", e),
                }
            }
            Command::Save => match view.as_mut().filter(|v| v.is_editing()) {
                Some(view) => {
                    session.complete_edit(view.save()).await;
                    print_view(view, &session.snapshot().await);
                }
                None => println!("Nothing to save."),
            },
            Command::StartEditing => match view.as_mut() {
                Some(view) => {
                    view.start_editing();
                    print_view(view, &session.snapshot().await);
                }
                None => println!("Nothing to edit yet."),
            },
        }
    }

    session.shutdown();
    tracing::info!("Session ended");
    Ok(())
}

async fn analyze<C>(session: &Session<C>, path: &Path) -> Option<ResultView>
where
    C: macrolens::analysis::AnalysisClient,
{
    let upload = match ImageUpload::from_path(path).await {
        Ok(upload) => upload,
        Err(e) => {
            println!("{}", e);
            return None;
        }
    };

    println!("Analyzing {}...", upload.file_name);
    match session.submit_image(upload).await {
        SubmissionOutcome::Accepted => {
            let state = session.snapshot().await;
            let view = ResultView::load_from_source(state.record());
            print_view(&view, &state);
            Some(view)
        }
        SubmissionOutcome::Rejected(_) => {
            let state = session.snapshot().await;
            let notification = state.notification();
            println!("[{}] {}", notification.severity, notification.message);
            None
        }
        SubmissionOutcome::Stale => None,
    }
}

fn print_view(view: &ResultView, state: &AppStore) {
    let draft = view.draft();
    let breakdown = MacroBreakdown::from_macros(&state.record().macros);

    println!();
    println!("{}  ({})", draft.meal_name, draft.date);
    println!(
        "Energy split: carbs {:.0}% | protein {:.0}% | fat {:.0}%",
        breakdown.carbohydrates.percent, breakdown.protein.percent, breakdown.fat.percent
    );

    if let Some(fields) = view.fields() {
        for (field, value) in fields {
            println!("  {:<10} [{}] {}", field.label(), format_amount(value), field.unit());
        }
    }
    if let Some(lines) = view.summary_lines() {
        for line in lines {
            println!("  {}", line);
        }
    }

    for row in &draft.ingredients {
        println!(
            "    - {} ({}): {} kcal, {} g carbs, {} g protein, {} g fat",
            row.name,
            row.weight,
            format_amount(row.calories),
            format_amount(row.carbs),
            format_amount(row.protein),
            format_amount(row.fat)
        );
    }
    println!();
}

fn prompt(view: Option<&ResultView>) {
    use std::io::Write;

    match view {
        Some(view) if view.is_editing() => print!("edit> "),
        _ => print!("photo> "),
    }
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!();
    println!("Type the path of a meal photo to analyze it.");
    println!("While editing: calories=150, carbs=10, proteins=3, fat=5, then 'save'.");
    println!("Other commands: edit, dismiss, help, quit");
    println!();
}
