use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::mpsc;
use tracing::info;

use stockpulse::StockPulseError;
use stockpulse::config::{RankingsConfig, SourceKind, fetch_config};
use stockpulse::poller::{HttpSource, Poller, PollerHandle, SimulatedSource};
use stockpulse::tui::event::{spawn_event_reader, spawn_tick_timer};
use stockpulse::tui::{App, Message, Tui, render, restore_terminal, setup_terminal, update};

/// Interval for UI housekeeping ticks (error expiry, staleness redraw).
const UI_TICK_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<(), StockPulseError> {
    let app_config = fetch_config()?;
    init_tracing(app_config.log_file.as_deref())?;

    let rankings = app_config.rankings;
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    let mut terminal = setup_terminal()?;
    let mut app = App::new(rankings.source.label(), rankings.poll_interval);

    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), UI_TICK_MS);

    let mut poller = match start_poller(&rankings, tx) {
        Ok(poller) => poller,
        Err(e) => {
            restore_terminal(&mut terminal)?;
            return Err(e);
        }
    };

    let result = run(&mut terminal, &mut app, &mut rx).await;

    poller.stop();
    restore_terminal(&mut terminal)?;
    info!("Dashboard closed");

    result
}

/// Starts polling the configured source.
fn start_poller(
    rankings: &RankingsConfig,
    tx: mpsc::UnboundedSender<Message>,
) -> Result<PollerHandle, StockPulseError> {
    let handle = match rankings.source {
        SourceKind::Http => {
            let source = HttpSource::new(rankings.url.as_str())?;
            info!("Polling {}", source.url());
            Poller::start(source, rankings.poll_interval, tx)
        }
        SourceKind::Simulated => {
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            info!("Using simulated rankings (seed {seed})");
            Poller::start(SimulatedSource::new(seed), rankings.poll_interval, tx)
        }
    };
    Ok(handle)
}

/// Draws, then applies messages until the user quits or every sender is gone.
async fn run(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Message>,
) -> Result<(), StockPulseError> {
    loop {
        terminal
            .draw(|frame| render(frame, app))
            .map_err(|e| StockPulseError::Io(format!("failed to draw: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        update(app, message);

        // Drain whatever queued up during the draw before redrawing.
        while let Ok(message) = rx.try_recv() {
            update(app, message);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Sends tracing output to `log_file`. The TUI owns stdout, so without a
/// file nothing is logged.
fn init_tracing(log_file: Option<&Path>) -> Result<(), StockPulseError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StockPulseError::Io(format!("failed to open {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
