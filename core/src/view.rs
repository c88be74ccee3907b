// ABOUTME: Screen view model assembled from the app state.
// ABOUTME: Holds every string and path the window displays so presentation logic stays testable.

use chrono::{Datelike, Timelike};

use crate::clock::ClockFace;
use crate::date::format_date;
use crate::i18n::{Language, Text};
use crate::settings::{SettingsPanel, SocialLink, SOCIAL_LINKS};
use crate::state::{AppState, ChargeStatus};
use crate::theme::{Rgb, ThemeKind, ThemeStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub label: &'static str,
    pub tint: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub kind: ThemeKind,
    pub track: String,
    pub fill: String,
    pub segments: String,
    pub stroke_width: f32,
    pub track_color: Rgb,
    pub watermark: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationEntry {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsModel {
    pub open: bool,
    pub title: &'static str,
    pub language_button: &'static str,
    pub choose_animation: &'static str,
    pub animations: Vec<AnimationEntry>,
    pub suggest_label: &'static str,
    pub generating: bool,
    pub socials_title: &'static str,
    pub socials: &'static [SocialLink],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenModel {
    pub title: &'static str,
    pub copyright: &'static str,
    pub language_code: &'static str,
    pub battery_level: u8,
    pub charging: bool,
    pub status: &'static str,
    pub time_left: Option<String>,
    pub date: String,
    pub economy: bool,
    pub economy_button: &'static str,
    pub economy_indicators: Vec<Indicator>,
    pub ring: Ring,
    pub clock: ClockFace,
    pub settings: SettingsModel,
}

impl ScreenModel {
    pub fn build<T: Datelike + Timelike>(state: &AppState, panel: &SettingsPanel, now: &T) -> Self {
        let lang = state.language();
        let status = state.charge_status();
        Self {
            // Header and footer branding stay in English.
            title: Text::AppTitle.in_lang(Language::En),
            copyright: Text::Copyright.in_lang(Language::En),
            language_code: lang.code(),
            battery_level: state.battery_level(),
            charging: status != ChargeStatus::NotCharging,
            status: status.label(lang),
            time_left: state.shows_time_remaining().then(|| {
                format!(
                    "{} min {}",
                    state.time_remaining(),
                    Text::TimeLeft.in_lang(lang)
                )
            }),
            date: format_date(now, lang),
            economy: state.economy_mode(),
            economy_button: if state.economy_mode() {
                Text::DisableEconomy.in_lang(lang)
            } else {
                Text::EnableEconomy.in_lang(lang)
            },
            economy_indicators: if state.economy_mode() {
                economy_indicators(lang)
            } else {
                Vec::new()
            },
            ring: ring(state),
            clock: ClockFace::at(now),
            settings: settings(state, panel),
        }
    }
}

fn economy_indicators(lang: Language) -> Vec<Indicator> {
    [
        (Text::WifiOff, Rgb(0xef, 0x44, 0x44)),
        (Text::BtOff, Rgb(0xef, 0x44, 0x44)),
        (Text::AirplaneOn, Rgb(0x60, 0xa5, 0xfa)),
        (Text::AppsKilled, Rgb(0xa8, 0x55, 0xf7)),
        (Text::BrightnessLow, Rgb(0xea, 0xb3, 0x08)),
    ]
    .into_iter()
    .map(|(text, tint)| Indicator {
        label: text.in_lang(lang),
        tint,
    })
    .collect()
}

fn ring(state: &AppState) -> Ring {
    let style = ThemeStyle::for_name(state.current_animation());
    let ratio = state.fill_ratio();
    Ring {
        kind: style.kind,
        track: style.ring_track(),
        fill: style.ring_fill(ratio),
        segments: style.ring_segments(ratio),
        stroke_width: style.stroke_width,
        track_color: style.track_color,
        watermark: style.watermark.map(String::from).unwrap_or_default(),
    }
}

fn settings(state: &AppState, panel: &SettingsPanel) -> SettingsModel {
    let lang = state.language();
    SettingsModel {
        open: panel.is_open(),
        title: Text::Settings.in_lang(lang),
        language_button: lang.native_name(),
        choose_animation: Text::ChooseAnimation.in_lang(lang),
        animations: state
            .user_animations()
            .iter()
            .map(|name| AnimationEntry {
                name: name.clone(),
                active: name == state.current_animation(),
            })
            .collect(),
        suggest_label: if panel.is_generating() {
            Text::Generating.in_lang(lang)
        } else {
            Text::SuggestAi.in_lang(lang)
        },
        generating: panel.is_generating(),
        socials_title: Text::Socials.in_lang(lang),
        socials: &SOCIAL_LINKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 22)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    fn build(state: &AppState) -> ScreenModel {
        ScreenModel::build(state, &SettingsPanel::default(), &now())
    }

    #[test]
    fn seeded_screen() {
        let model = build(&AppState::new());
        assert_eq!(model.title, "Housni Fast Charge");
        assert_eq!(model.language_code, "EN");
        assert_eq!(model.battery_level, 42);
        assert!(model.charging);
        assert_eq!(model.status, "Charging...");
        assert_eq!(model.time_left.as_deref(), Some("35 min until full"));
        assert_eq!(model.date, "Monday, Jul 22");
        assert_eq!(model.economy_button, "Enable Ultra Economy");
        assert!(model.economy_indicators.is_empty());
        assert_eq!(model.ring.kind, ThemeKind::NeonPulse);
        assert!(model.ring.watermark.is_empty());
        assert_eq!(model.clock.day_of_month, 22);
    }

    #[test]
    fn full_battery_hides_time_left() {
        let model = build(&AppState::with_charge(100, true, 0));
        assert_eq!(model.status, "Fully Charged");
        assert!(model.time_left.is_none());
    }

    #[test]
    fn not_charging_hides_bolt_and_time() {
        let model = build(&AppState::with_charge(70, false, 10));
        assert!(!model.charging);
        assert_eq!(model.status, "Not Charging");
        assert!(model.time_left.is_none());
    }

    #[test]
    fn arabic_screen_keeps_english_branding() {
        let mut state = AppState::new();
        state.toggle_language();
        let model = build(&state);
        assert_eq!(model.language_code, "AR");
        assert_eq!(model.title, "Housni Fast Charge");
        assert_eq!(model.status, "جاري الشحن...");
        assert_eq!(model.time_left.as_deref(), Some("35 min حتى يكتمل"));
        assert_eq!(model.date, "الاثنين, يوليو 22");
        assert_eq!(model.settings.language_button, "العربية");
    }

    #[test]
    fn economy_mode_lists_indicators() {
        let mut state = AppState::new();
        state.toggle_economy();
        let model = build(&state);
        assert!(model.economy);
        assert_eq!(model.economy_button, "Disable Ultra Economy");
        let labels: Vec<_> = model.economy_indicators.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            ["WiFi Off", "BT Off", "Airplane On", "Apps Killed", "Dimmed"]
        );
    }

    #[test]
    fn active_animation_is_marked() {
        let mut state = AppState::new();
        state.select_animation("Liquid Metal");
        let model = build(&state);
        let active: Vec<_> = model
            .settings
            .animations
            .iter()
            .filter(|a| a.active)
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(active, ["Liquid Metal"]);
        assert_eq!(model.ring.kind, ThemeKind::LiquidMetal);
    }

    #[test]
    fn suggested_theme_uses_custom_ring() {
        let mut state = AppState::new();
        state.adopt_suggestion("Plasma Drift".to_string());
        let model = build(&state);
        assert_eq!(model.ring.kind, ThemeKind::Custom);
        assert_eq!(model.ring.watermark, "P");
        assert_eq!(model.settings.animations.len(), 6);
    }

    #[test]
    fn generating_swaps_button_label() {
        let state = AppState::new();
        let mut panel = SettingsPanel::default();
        panel.open();
        panel.begin_suggestion();
        let model = ScreenModel::build(&state, &panel, &now());
        assert!(model.settings.open);
        assert!(model.settings.generating);
        assert_eq!(model.settings.suggest_label, "Thinking...");
    }

    #[test]
    fn cyberpunk_ring_has_segments() {
        let mut state = AppState::new();
        state.select_animation("Cyberpunk Glitch");
        let model = build(&state);
        assert!(!model.ring.segments.is_empty());
        assert!(!model.ring.fill.is_empty());
    }
}
