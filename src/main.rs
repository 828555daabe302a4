mod app;
mod clock;
mod domain;
mod error;
mod input;
mod logging;
mod notifications;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use clock::SystemClock;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{day_done_count, day_total_minutes, TaskKey, Weekday};
use persistence::{
    config_file, ensure_data_dir, init_local_data_dir, load_config_or_default, report_file,
    save_config, Config, FileStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser)]
#[command(name = "weekboard")]
#[command(about = "A terminal dashboard for weekly job-search habits", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .weekboard directory in the current directory
    Init,
    /// Show this week's progress, streak and the shutdown cue
    Status,
    /// Toggle a task: DAY is a name (mon, tuesday) or 1-5, TASK is 1-based
    Toggle { day: String, task: usize },
    /// Archive this week with its outcome totals and start a new week
    Archive {
        /// Applications sent this week
        #[arg(short, long, default_value = "")]
        applications: String,
        /// Networking contacts made this week
        #[arg(short, long, default_value = "")]
        networking: String,
        /// Interviews had this week
        #[arg(short, long, default_value = "")]
        interviews: String,
    },
    /// List archived weeks, newest first
    History,
    /// Write a markdown report of the archive
    Report {
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Opened data directory with the app state loaded from it
struct Session {
    app: AppState,
    data_dir: PathBuf,
    _log_guard: WorkerGuard,
}

fn open_session() -> Result<Session> {
    let data_dir = ensure_data_dir()?;
    let log_guard = logging::enable_logging(&data_dir)?;
    let config = load_config_or_default(config_file(&data_dir));
    tracing::info!(data_dir = %data_dir.display(), "starting weekboard");

    let app = AppState::new(
        config,
        Box::new(FileStore::new(&data_dir)),
        Box::new(SystemClock),
    );

    Ok(Session {
        app,
        data_dir,
        _log_guard: log_guard,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_data_dir()?;
            save_config(config_file(&data_dir), &Config::default())?;
            println!("Initialized weekboard directory: {}", data_dir.display());
            println!();
            println!("Edit config.json there to change the weekly tasks, timezone or thresholds.");
            Ok(())
        }
        Some(Commands::Status) => {
            let session = open_session()?;
            print_status(&session.app);
            Ok(())
        }
        Some(Commands::Toggle { day, task }) => {
            let mut session = open_session()?;
            let app = &mut session.app;

            let weekday = Weekday::parse(&day)
                .with_context(|| format!("Unknown day '{}'. Use mon-fri or 1-5", day))?;
            let key = task
                .checked_sub(1)
                .and_then(|index| TaskKey::try_new(weekday, index))
                .filter(|key| app.is_task_in_week(*key))
                .with_context(|| format!("{} has no task {}", weekday, task))?;

            if let Some(checked) = app.toggle(key) {
                let day = &app.week[weekday.index() as usize];
                let label = &day.tasks[key.task_index as usize].label;
                println!("{} {}: {}", if checked { "[x]" } else { "[ ]" }, weekday, label);
            }
            report_save_warning(app);
            println!();
            print_status(app);
            Ok(())
        }
        Some(Commands::Archive {
            applications,
            networking,
            interviews,
        }) => {
            let mut session = open_session()?;
            let app = &mut session.app;

            app.archiver.applications = applications;
            app.archiver.networking_contacts = networking;
            app.archiver.interviews = interviews;
            let summary = app.submit_archive();
            println!(
                "Archived week at {}% ({} applications, {} networking contacts, {} interviews)",
                summary.completion_percent,
                summary.applications,
                summary.networking_contacts,
                summary.interviews
            );
            report_save_warning(app);
            Ok(())
        }
        Some(Commands::History) => {
            let session = open_session()?;
            print_history(&session.app);
            Ok(())
        }
        Some(Commands::Report { output }) => {
            let session = open_session()?;
            let app = &session.app;

            let output_path = output
                .map(PathBuf::from)
                .unwrap_or_else(|| report_file(&session.data_dir, app.today));
            report::generate_report(
                &app.state.history,
                &app.config.streak_thresholds,
                app.today,
                &output_path,
            )?;
            println!("Report generated: {}", output_path.display());
            Ok(())
        }
        None => {
            let mut session = open_session()?;
            eprintln!("Using weekboard directory: {}", session.data_dir.display());
            run_tui(&mut session.app)
        }
    }
}

fn report_save_warning(app: &AppState) {
    if let Some(message) = &app.status_message {
        eprintln!("Warning: {}", message);
    }
}

fn print_status(app: &AppState) {
    let summary = app.summary();

    for day in &app.week {
        let marker = if day.date == app.today { ">" } else { " " };
        println!(
            "{} {} {:<7} {}/{} done, {} min planned",
            marker,
            day.day.short_name(),
            day.date_label(),
            day_done_count(day, &app.state.checked),
            day.tasks.len(),
            day_total_minutes(day)
        );
        for (i, (key, task)) in day.task_keys().zip(&day.tasks).enumerate() {
            let checkbox = if app.state.is_checked(key) { "[x]" } else { "[ ]" };
            println!("      {} {}. {}", checkbox, i + 1, task.label);
        }
    }
    println!();
    let done: usize = app.week.iter().map(|day| day_done_count(day, &app.state.checked)).sum();
    println!(
        "Progress: {}% ({} of {} tasks)",
        summary.percent,
        done,
        app.config.week.total_tasks()
    );
    println!("Streak:   {} qualifying week(s)", summary.streak);
    if summary.show_shutdown {
        println!("Shutdown: you're done for today. Log off.");
    }
}

fn print_history(app: &AppState) {
    if app.state.history.is_empty() {
        println!("No archived weeks yet.");
        return;
    }
    for summary in &app.state.history {
        println!(
            "{}  {:>3}%  apps {:>3}  contacts {:>3}  interviews {:>3}{}",
            summary.archived_at,
            summary.completion_percent,
            summary.applications,
            summary.networking_contacts,
            summary.interviews,
            if app.config.streak_thresholds.is_met_by(summary) { "  *" } else { "" }
        );
    }
}

fn run_tui(app: &mut AppState) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.start_view(Instant::now());
    let result = run_app(&mut terminal, app);
    app.stop_view();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("Error: {}", err);
    }
    tracing::info!("stopped weekboard");

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
