//! alarmclock - tick a few times, then raise the alarm.
//!
//! Prints `Tick` once per interval, then every handler reports
//! `Handling event: alarm`; the console handler prints `Alarm received`
//! and the file handler writes it to the alarm file. Ctrl-C cancels the
//! countdown.

use alarmclock::{App, AppResult, TimerOutcome};
use alarmclock_config::{AlarmConfig, Validate};
use alarmclock_log::{error, info, warn, Console, Format, Level};
use clap::Parser;
use std::path::PathBuf;

/// Countdown timer notifying a console and a file handler
#[derive(Parser, Debug)]
#[command(name = "alarmclock")]
#[command(version)]
#[command(about = "Tick a few times, then raise the alarm")]
struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(short, long, env = "ALARMCLOCK_CONFIG")]
    config: Option<PathBuf>,

    /// Number of ticks before the alarm
    #[arg(short, long)]
    ticks: Option<u32>,

    /// Pause after each tick, in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// File overwritten when the alarm goes off
    #[arg(short = 'f', long)]
    alarm_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    /// Flags win over every other configuration source.
    fn apply(&self, config: &mut AlarmConfig) {
        if let Some(ticks) = self.ticks {
            config.ticks = ticks;
        }
        if let Some(interval) = self.interval_ms {
            config.tick_interval_ms = interval;
        }
        if let Some(ref file) = self.alarm_file {
            config.alarm_file = file.clone();
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    alarmclock_log::init();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("alarmclock: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = AlarmConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;
    configure_logging(&config, cli.debug);

    let app = App::build(&config, Console::stdout())?;
    let handle = app.start()?;

    let canceller = handle.canceller();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling countdown");
            canceller.cancel();
        }
    });

    match handle.wait().await? {
        TimerOutcome::Fired { delivered, .. } => {
            info!(
                "Alarm delivered to {} handler(s); wrote {}",
                delivered,
                config.alarm_file.display()
            );
        }
        TimerOutcome::Cancelled { ticks } => {
            warn!("Alarm cancelled after {} tick(s)", ticks);
        }
    }
    Ok(())
}

fn configure_logging(config: &AlarmConfig, debug: bool) {
    if let Some(level) = config.log_level.as_deref().and_then(Level::parse) {
        alarmclock_log::set_level(level);
    }
    if let Some(format) = config.log_format.as_deref().and_then(Format::parse) {
        alarmclock_log::set_format(format);
    }
    if debug {
        alarmclock_log::set_debug(true);
    }
}
