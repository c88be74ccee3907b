// ABOUTME: The single application state record and every operation that mutates it.
// ABOUTME: Charging progression is plain arithmetic here; timers only call `tick`.

use tracing::debug;

use crate::i18n::{Language, Text};
use crate::theme::BUILTIN_THEMES;

const SEED_BATTERY_LEVEL: u8 = 42;
const SEED_TIME_REMAINING: u32 = 35;
const MINUTES_PER_TICK: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStatus {
    Charging,
    Full,
    NotCharging,
}

impl ChargeStatus {
    pub fn label(self, lang: Language) -> &'static str {
        match self {
            ChargeStatus::Charging => Text::Charging.in_lang(lang),
            ChargeStatus::Full => Text::Charged.in_lang(lang),
            ChargeStatus::NotCharging => Text::NotCharging.in_lang(lang),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    battery_level: u8,
    is_charging: bool,
    time_remaining: u32,
    economy_mode: bool,
    language: Language,
    current_animation: String,
    user_animations: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let user_animations: Vec<String> =
            BUILTIN_THEMES.iter().map(|t| t.to_string()).collect();
        Self {
            battery_level: SEED_BATTERY_LEVEL,
            is_charging: true,
            time_remaining: SEED_TIME_REMAINING,
            economy_mode: false,
            language: Language::En,
            current_animation: user_animations[0].clone(),
            user_animations,
        }
    }

    /// Starts from an arbitrary charge point; the rest of the record is seeded.
    pub fn with_charge(battery_level: u8, is_charging: bool, time_remaining: u32) -> Self {
        Self {
            battery_level: battery_level.min(100),
            is_charging,
            time_remaining,
            ..Self::new()
        }
    }

    pub fn battery_level(&self) -> u8 {
        self.battery_level
    }

    pub fn is_charging(&self) -> bool {
        self.is_charging
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn economy_mode(&self) -> bool {
        self.economy_mode
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    pub fn user_animations(&self) -> &[String] {
        &self.user_animations
    }

    /// One step of the simulated charger.
    pub fn tick(&mut self) {
        if self.is_charging && self.battery_level < 100 {
            self.battery_level = (self.battery_level + 1).min(100);
            self.time_remaining = self.time_remaining.saturating_sub(MINUTES_PER_TICK);
        }
    }

    pub fn advance(&mut self, ticks: u32) {
        for _ in 0..ticks {
            if !self.is_charging || self.battery_level >= 100 {
                break;
            }
            self.tick();
        }
    }

    pub fn charge_status(&self) -> ChargeStatus {
        if !self.is_charging {
            ChargeStatus::NotCharging
        } else if self.battery_level == 100 {
            ChargeStatus::Full
        } else {
            ChargeStatus::Charging
        }
    }

    /// The "N min until full" line is only meaningful while still filling.
    pub fn shows_time_remaining(&self) -> bool {
        self.is_charging && self.battery_level < 100
    }

    pub fn fill_ratio(&self) -> f32 {
        f32::from(self.battery_level) / 100.0
    }

    /// Makes `name` the active theme if it is one of the known themes.
    pub fn select_animation(&mut self, name: &str) -> bool {
        if !self.user_animations.iter().any(|a| a == name) {
            debug!(animation = name, "ignoring selection of unknown animation");
            return false;
        }
        self.current_animation = name.to_string();
        true
    }

    /// Appends a suggested theme, duplicates included, and makes it active.
    pub fn adopt_suggestion(&mut self, name: String) {
        self.current_animation = name.clone();
        self.user_animations.push(name);
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn toggle_economy(&mut self) {
        self.economy_mode = !self.economy_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_values() {
        let state = AppState::new();
        assert_eq!(state.battery_level(), 42);
        assert!(state.is_charging());
        assert_eq!(state.time_remaining(), 35);
        assert!(!state.economy_mode());
        assert_eq!(state.language(), Language::En);
        assert_eq!(state.current_animation(), "Neon Pulse");
        assert_eq!(
            state.user_animations(),
            [
                "Neon Pulse",
                "Mystic Waves",
                "Cyberpunk Glitch",
                "Aurora Borealis",
                "Liquid Metal"
            ]
        );
    }

    #[test]
    fn advance_matches_closed_form() {
        for n in [0u32, 1, 5, 17, 18, 30, 57, 58, 59, 200] {
            let mut state = AppState::new();
            state.advance(n);
            assert_eq!(u32::from(state.battery_level()), (42 + n).min(100), "n = {n}");
            assert_eq!(state.time_remaining(), 35u32.saturating_sub(2 * n), "n = {n}");
        }
    }

    #[test]
    fn tick_and_advance_agree() {
        let mut a = AppState::with_charge(90, true, 20);
        let mut b = a.clone();
        for _ in 0..7 {
            a.tick();
        }
        b.advance(7);
        assert_eq!(a, b);
    }

    #[test]
    fn full_battery_stays_full() {
        let mut state = AppState::new();
        state.advance(58);
        assert_eq!(state.battery_level(), 100);
        assert_eq!(state.time_remaining(), 0);
        assert_eq!(state.charge_status(), ChargeStatus::Full);
        assert!(!state.shows_time_remaining());

        state.advance(10);
        state.tick();
        assert_eq!(state.battery_level(), 100);
        assert_eq!(state.time_remaining(), 0);
    }

    #[test]
    fn not_charging_does_not_move() {
        let mut state = AppState::with_charge(50, false, 30);
        state.advance(5);
        assert_eq!(state.battery_level(), 50);
        assert_eq!(state.time_remaining(), 30);
        assert_eq!(state.charge_status(), ChargeStatus::NotCharging);
        assert!(!state.shows_time_remaining());
    }

    #[test]
    fn charge_status_labels() {
        assert_eq!(ChargeStatus::Charging.label(Language::En), "Charging...");
        assert_eq!(ChargeStatus::Full.label(Language::En), "Fully Charged");
        assert_eq!(ChargeStatus::Full.label(Language::Ar), "مشحون بالكامل");
    }

    #[test]
    fn with_charge_clamps_level() {
        assert_eq!(AppState::with_charge(250, true, 0).battery_level(), 100);
    }

    #[test]
    fn selecting_existing_theme() {
        let mut state = AppState::new();
        let before = state.user_animations().to_vec();
        assert!(state.select_animation("Aurora Borealis"));
        assert_eq!(state.current_animation(), "Aurora Borealis");
        assert_eq!(state.user_animations(), before.as_slice());
    }

    #[test]
    fn selecting_unknown_theme_is_ignored() {
        let mut state = AppState::new();
        assert!(!state.select_animation("Nope"));
        assert_eq!(state.current_animation(), "Neon Pulse");
    }

    #[test]
    fn adopting_suggestion_appends_and_selects() {
        let mut state = AppState::new();
        let mut expected = state.user_animations().to_vec();
        state.adopt_suggestion("Plasma Drift".to_string());
        expected.push("Plasma Drift".to_string());
        assert_eq!(state.user_animations(), expected.as_slice());
        assert_eq!(state.current_animation(), "Plasma Drift");
    }

    #[test]
    fn duplicate_suggestion_is_kept() {
        let mut state = AppState::new();
        state.adopt_suggestion("Neon Pulse".to_string());
        assert_eq!(state.user_animations().len(), 6);
        assert_eq!(
            state.user_animations().iter().filter(|a| *a == "Neon Pulse").count(),
            2
        );
        assert_eq!(state.current_animation(), "Neon Pulse");
    }

    #[test]
    fn toggles_round_trip() {
        let mut state = AppState::new();
        state.toggle_language();
        assert_eq!(state.language(), Language::Ar);
        state.toggle_language();
        assert_eq!(state.language(), Language::En);

        state.toggle_economy();
        assert!(state.economy_mode());
        state.toggle_economy();
        assert!(!state.economy_mode());
    }

    #[test]
    fn fill_ratio_tracks_level() {
        assert!((AppState::with_charge(25, true, 0).fill_ratio() - 0.25).abs() < f32::EPSILON);
    }
}
