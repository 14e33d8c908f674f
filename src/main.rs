// Countdown Timer Application
// Main entry point

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use countdown_timer::models::settings::Settings;
use countdown_timer::services::countdown::{
    compute, notify_when_elapsed, Clock, RefreshDriver, SystemClock, TargetInstant,
};
use countdown_timer::services::notification::NotificationService;
use countdown_timer::services::settings::SettingsService;
use countdown_timer::ui_egui;
use countdown_timer::ui_terminal::{render_line, TerminalDisplay};

#[derive(Debug, Parser)]
#[command(
    name = "countdown-timer",
    version,
    about = "Counts down to a fixed instant, once per second"
)]
struct Args {
    /// Path to a countdown.toml (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Instant to count down to, e.g. 2026-01-01T00:00:00; overrides the config file
    #[arg(long)]
    target: Option<String>,

    /// Print to the terminal instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Print the current state once and exit
    #[arg(long, conflicts_with = "headless")]
    once: bool,

    /// Print the --once state as JSON
    #[arg(long, requires = "once")]
    json: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let settings_service = SettingsService::new(args.config.clone());
    let mut settings = settings_service.load()?;
    if let Some(target) = args.target {
        settings.target_instant = Some(target);
    }

    // A bad target stops us here, before anything is shown.
    let target = settings.target()?;

    if args.init_config {
        let path = settings_service.save(&settings)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new()?);

    if args.once {
        return print_once(&settings, &target, clock.as_ref(), args.json);
    }

    log::info!("Starting countdown-timer v{}", env!("CARGO_PKG_VERSION"));

    if args.headless {
        run_headless(settings, target, clock)
    } else {
        run_windowed(settings, target, clock)
    }
}

fn print_once(
    settings: &Settings,
    target: &TargetInstant,
    clock: &dyn Clock,
    json: bool,
) -> Result<()> {
    let state = compute(target, clock.now());
    if json {
        println!("{}", serde_json::to_string(&state)?);
    } else {
        println!("{}", render_line(settings, &state));
    }
    Ok(())
}

fn elapsed_notifier(settings: &Settings) -> (NotificationService, String, String) {
    (
        NotificationService::new(settings.notify_on_elapsed),
        settings.elapsed_headline.clone(),
        settings.elapsed_message.clone(),
    )
}

fn run_headless(settings: Settings, target: TargetInstant, clock: Arc<dyn Clock>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let mut driver = RefreshDriver::new(target, clock).start()?;

        let (service, headline, message) = elapsed_notifier(&settings);
        let notifier = tokio::spawn(notify_when_elapsed(
            driver.subscribe(),
            service,
            headline,
            message,
        ));

        let display = TerminalDisplay::new(settings, io::stdout());
        tokio::select! {
            result = display.run(driver.subscribe()) => {
                result?;
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                log::info!("Interrupted; stopping countdown");
            }
        }

        driver.stop();
        notifier.abort();
        Ok::<_, anyhow::Error>(())
    })
}

fn run_windowed(settings: Settings, target: TargetInstant, clock: Arc<dyn Clock>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("countdown-tick")
        .enable_all()
        .build()?;
    let _guard = runtime.enter();

    let driver = RefreshDriver::new(target, clock).start()?;

    let (service, headline, message) = elapsed_notifier(&settings);
    let notifier = runtime.spawn(notify_when_elapsed(
        driver.subscribe(),
        service,
        headline,
        message,
    ));

    let result = ui_egui::run_window(settings, driver, runtime.handle().clone());
    notifier.abort();
    result
}
