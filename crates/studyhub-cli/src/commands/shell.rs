//! Interactive dashboard shell.
//!
//! Runs a single-threaded tokio loop that waits on two sources: lines
//! from stdin and ticks from the deadline engine's recompute timer. Both
//! are handled on the same thread, one at a time.

use std::io::Write;

use studyhub_core::{Config, Dashboard, SystemBrowser, SystemClipboard};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::session::{Session, Step};

enum Input {
    Line(Option<String>),
    Recomputed,
}

pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(event_loop(config))
}

async fn event_loop(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut dash = Dashboard::from_config(config);
    dash.deadlines.start_ticker(config.refresh_interval());
    let mut session = Session::new(dash, SystemClipboard::new(), SystemBrowser);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    info!(
        view = %session.dash.active_view(),
        refresh_secs = config.deadlines.refresh_interval_secs,
        "shell started"
    );
    writeln!(stdout, "{}\n", session.render())?;
    writeln!(stdout, "Type `help` for commands.")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let input = tokio::select! {
            line = lines.next_line() => Input::Line(line?),
            Some(_) = session.dash.deadlines.next_tick() => Input::Recomputed,
        };

        match input {
            Input::Line(None) => break,
            Input::Line(Some(line)) => match session.handle(&line) {
                Step::Quit => break,
                Step::Print(text) if text.is_empty() => {}
                Step::Print(text) => writeln!(stdout, "{text}")?,
            },
            Input::Recomputed => {
                if let Some(text) = session.after_tick() {
                    writeln!(stdout, "\n{text}")?;
                }
            }
        }
    }

    session.dash.deadlines.stop_ticker();
    info!("shell closed");
    Ok(())
}
