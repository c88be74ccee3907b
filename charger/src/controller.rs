// ABOUTME: Owns the app state on the UI thread and routes user intents to named state operations.
// ABOUTME: Every mutation is followed by a full screen refresh through the bridge.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use chrono::Local;
use hfc_core::suggest::FALLBACK_FAILED;
use hfc_core::{AppState, ScreenModel, SettingsPanel};
use slint::ComponentHandle;
use tracing::{error, info};

use crate::bridge::Bridge;
use crate::worker::WorkerCommand;
use crate::ChargerWindow;

pub struct Controller {
    window: slint::Weak<ChargerWindow>,
    state: RefCell<AppState>,
    panel: RefCell<SettingsPanel>,
    bridge: Bridge,
}

impl Controller {
    pub fn new(window: &ChargerWindow) -> Rc<Self> {
        Rc::new(Self {
            window: window.as_weak(),
            state: RefCell::new(AppState::new()),
            panel: RefCell::new(SettingsPanel::default()),
            bridge: Bridge::new(window),
        })
    }

    pub fn refresh(&self) {
        let Some(window) = self.window.upgrade() else {
            return;
        };
        let now = Local::now().naive_local();
        let model = ScreenModel::build(&self.state.borrow(), &self.panel.borrow(), &now);
        self.bridge.apply(&window, &model);
    }

    pub fn update(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.state.borrow_mut());
        self.refresh();
    }

    pub fn update_panel(&self, f: impl FnOnce(&mut SettingsPanel)) {
        f(&mut self.panel.borrow_mut());
        self.refresh();
    }

    pub fn request_suggestion(&self, worker: &mpsc::Sender<WorkerCommand>) {
        if !self.panel.borrow_mut().begin_suggestion() {
            return;
        }
        let existing = self.state.borrow().user_animations().to_vec();
        info!(known = existing.len(), "requesting animation suggestion");
        if worker.send(WorkerCommand::Suggest(existing)).is_err() {
            error!("suggestion worker is not running");
            self.accept_suggestion(FALLBACK_FAILED.to_string());
            return;
        }
        self.refresh();
    }

    pub fn accept_suggestion(&self, name: String) {
        info!(name = name.as_str(), "adopting suggested animation");
        self.state.borrow_mut().adopt_suggestion(name);
        self.panel.borrow_mut().finish_suggestion();
        self.refresh();
    }
}
