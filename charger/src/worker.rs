// ABOUTME: Background thread that runs AI name suggestions on its own Tokio runtime.
// ABOUTME: Results are handed back to the UI thread through the window's suggestion-ready callback.

use std::sync::mpsc;

use anyhow::Context;
use hfc_core::config::SuggestConfig;
use hfc_core::suggest::{suggest, GeminiClient};
use tracing::{debug, error, info};

use crate::ChargerWindow;

pub enum WorkerCommand {
    Suggest(Vec<String>),
}

pub fn spawn(
    config: SuggestConfig,
    weak: slint::Weak<ChargerWindow>,
) -> anyhow::Result<mpsc::Sender<WorkerCommand>> {
    let (tx, rx) = mpsc::channel::<WorkerCommand>();
    std::thread::Builder::new()
        .name("suggest".to_string())
        .spawn(move || run(config, rx, weak))
        .context("failed to spawn suggestion worker")?;
    Ok(tx)
}

fn run(config: SuggestConfig, rx: mpsc::Receiver<WorkerCommand>, weak: slint::Weak<ChargerWindow>) {
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to start suggestion runtime");
            return;
        }
    };

    let client = match GeminiClient::from_config(&config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to create suggestion client");
            return;
        }
    };

    info!(configured = client.is_configured(), "suggestion worker ready");

    while let Ok(cmd) = rx.recv() {
        match cmd {
            WorkerCommand::Suggest(existing) => {
                let name = rt.block_on(suggest(&client, &existing));
                deliver(&weak, name);
            }
        }
    }

    debug!("suggestion worker exiting");
}

fn deliver(weak: &slint::Weak<ChargerWindow>, name: String) {
    let weak = weak.clone();
    if let Err(e) = slint::invoke_from_event_loop(move || {
        if let Some(w) = weak.upgrade() {
            w.invoke_suggestion_ready(name.into());
        }
    }) {
        debug!("event loop gone, dropping suggestion: {e}");
    }
}
