mod tui;

use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};

use ergo_lens_common::Config;
use ergo_lens_core::{
    build_view, histogram, load_csv, view, DashboardSession, DomainPolicy, FilterState, Record,
    ViewState,
};
use tui::app::App;
use tui::events::handle_key;
use tui::ui::render;

#[derive(Parser)]
#[command(name = "ergo-lens", version, about = "Interactive RER distribution explorer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    View {
        path: PathBuf,
        /// Override the configured domain policy ("fixed" or "extent")
        #[arg(long)]
        domain: Option<String>,
    },
    /// Print the histogram pipeline result as plain text
    Summary {
        path: PathBuf,
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    match cli.command {
        Commands::View { path, domain } => run_tui(path, config, domain).await?,
        Commands::Summary { path, save } => run_summary(path, save, &config).await?,
    }
    Ok(())
}

fn resolve_policy(config: &Config, override_mode: Option<&str>) -> DomainPolicy {
    let mut chart = config.chart.clone();
    if let Some(mode) = override_mode {
        chart.domain_mode = mode.to_string();
    }
    DomainPolicy::from_chart_config(&chart)
}

/// One-time dataset fetch; everything after this is synchronous.
async fn load_dataset(path: PathBuf) -> anyhow::Result<Vec<Record>> {
    let display = path.display().to_string();
    let records = tokio::task::spawn_blocking(move || load_csv(&path))
        .await?
        .map_err(|e| anyhow::anyhow!("failed to load {display}: {e}"))?;
    Ok(records)
}

async fn run_tui(path: PathBuf, config: Config, domain: Option<String>) -> anyhow::Result<()> {
    let input_path = path.display().to_string();
    let records = load_dataset(path).await?;
    let policy = resolve_policy(&config, domain.as_deref());
    let session = DashboardSession::new(records, policy);
    let mut app = App::new(input_path, session, config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick = Duration::from_millis(66); // 15Hz
    loop {
        terminal.draw(|f| render(f, &app))?;
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }
        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_summary(path: PathBuf, save: bool, config: &Config) -> anyhow::Result<()> {
    let records = load_dataset(path).await?;
    let policy = DomainPolicy::from_chart_config(&config.chart);
    let filters = FilterState::default();
    let view_state = build_view(&records, &filters, &policy);
    println!("{:<16} {}", "records:", records.len());
    match &view_state {
        ViewState::InsufficientData { sample_count, .. } => {
            println!("{:<16} {}", "filtered:", sample_count);
            println!("{}", view::NO_DATA_MESSAGE);
        }
        ViewState::Histogram {
            sample_count,
            bins,
            labels,
            ..
        } => {
            println!("{:<16} {}", "filtered:", sample_count);
            println!("{:<16} {}", "bins:", bins.len());
            let binned = histogram::total_count(bins);
            println!("{:<16} {}", "binned:", binned);
            println!("{:<16} {}", "clipped:", *sample_count as u64 - binned);
            println!();
            println!("{}", labels.title);
            let max = histogram::max_count(bins).max(1);
            for bin in bins {
                let blen = (bin.count as f64 / max as f64 * 50.0) as usize;
                println!(
                    "[{:>5.2}, {:>5.2}) |{:<50}| {}",
                    bin.x0,
                    bin.x1,
                    "█".repeat(blen),
                    bin.count
                );
            }
        }
    }
    if save {
        let out_path = PathBuf::from("summary.json");
        let doc = serde_json::json!({ "records": records.len(), "view": view_state });
        std::fs::write(&out_path, serde_json::to_string_pretty(&doc)?)?;
        println!("Summary saved to {}", out_path.display());
    }
    Ok(())
}
