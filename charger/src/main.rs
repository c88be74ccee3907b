// ABOUTME: Housni Fast Charge, a decorative charging screen for MobileOS.
// ABOUTME: Wires the Slint window to the core state, the charge/clock timers, and the suggestion worker.

mod bridge;
mod controller;
mod logging;
mod ticker;
mod worker;

use anyhow::Context;
use hfc_core::settings::is_known_link;
use hfc_core::{AppState, Config};
use tracing::{info, warn};

use crate::controller::Controller;
use crate::ticker::Ticker;

slint::include_modules!();

fn main() -> anyhow::Result<()> {
    logging::init();

    info!("starting charger");

    let config = load_config()?;
    let window = ChargerWindow::new().context("failed to create charger window")?;
    let controller = Controller::new(&window);
    let worker = worker::spawn(config.suggest.clone(), window.as_weak())?;

    let c = controller.clone();
    window.on_open_settings(move || c.update_panel(hfc_core::SettingsPanel::open));

    let c = controller.clone();
    window.on_close_settings(move || c.update_panel(hfc_core::SettingsPanel::close));

    let c = controller.clone();
    window.on_toggle_language(move || c.update(AppState::toggle_language));

    let c = controller.clone();
    window.on_toggle_economy(move || c.update(AppState::toggle_economy));

    let c = controller.clone();
    window.on_select_animation(move |name| {
        c.update(|s| {
            s.select_animation(&name);
        })
    });

    let c = controller.clone();
    window.on_suggest_animation(move || c.request_suggestion(&worker));

    let c = controller.clone();
    window.on_suggestion_ready(move |name| c.accept_suggestion(name.to_string()));

    window.on_open_link(|url| open_link(&url));

    controller.refresh();

    let charge = controller.clone();
    let clock = controller.clone();
    let ticker = Ticker::start(
        &config.simulation,
        move || charge.update(AppState::tick),
        move || clock.refresh(),
    );

    info!("charger running");
    window.run()?;

    drop(ticker);
    info!("charger stopped");
    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    let Some(path) = Config::default_path() else {
        warn!("no configuration directory, using defaults");
        return Ok(Config::default());
    };
    let config = Config::load(&path)?;
    info!(path = %path.display(), "configuration loaded");
    Ok(config)
}

fn open_link(url: &str) {
    if !is_known_link(url) {
        warn!(url, "refusing to open unknown link");
        return;
    }
    if let Err(e) = open::that(url) {
        warn!(url, error = %e, "failed to open link");
    }
}
