// ABOUTME: Copies a ScreenModel into the Slint window's properties and models.
// ABOUTME: List models are updated in place only when their rows change so scrolling survives ticks.

use std::rc::Rc;

use hfc_core::clock;
use hfc_core::theme::{Rgb, ThemeKind};
use hfc_core::view::ScreenModel;
use slint::{Color, Model, VecModel};

use crate::{
    Backdrop, ChargerWindow, IndicatorEntry, NumeralEntry, RingModel, SocialEntry, ThemeEntry,
};

pub struct Bridge {
    animations: Rc<VecModel<ThemeEntry>>,
    indicators: Rc<VecModel<IndicatorEntry>>,
    socials: Rc<VecModel<SocialEntry>>,
}

impl Bridge {
    pub fn new(window: &ChargerWindow) -> Self {
        let animations = Rc::new(VecModel::default());
        let indicators = Rc::new(VecModel::default());
        let socials = Rc::new(VecModel::default());
        window.set_animations(animations.clone().into());
        window.set_economy_indicators(indicators.clone().into());
        window.set_socials(socials.clone().into());

        // The dial face never changes.
        let numerals: Vec<NumeralEntry> = clock::numerals()
            .into_iter()
            .map(|n| NumeralEntry {
                label: n.label.into(),
                x: n.x,
                y: n.y,
            })
            .collect();
        window.set_numerals(Rc::new(VecModel::from(numerals)).into());
        window.set_clock_ticks(clock::tick_marks().into());

        Self {
            animations,
            indicators,
            socials,
        }
    }

    pub fn apply(&self, window: &ChargerWindow, model: &ScreenModel) {
        window.set_app_title(model.title.into());
        window.set_copyright(model.copyright.into());
        window.set_language_code(model.language_code.into());

        window.set_battery_level(i32::from(model.battery_level));
        window.set_charging(model.charging);
        window.set_status_text(model.status.into());
        window.set_time_left(model.time_left.as_deref().unwrap_or_default().into());
        window.set_date_text(model.date.as_str().into());
        window.set_ring(RingModel {
            backdrop: backdrop(model.ring.kind),
            track: model.ring.track.as_str().into(),
            fill: model.ring.fill.as_str().into(),
            segments: model.ring.segments.as_str().into(),
            stroke_width: model.ring.stroke_width,
            track_color: color(model.ring.track_color),
            watermark: model.ring.watermark.as_str().into(),
        });

        window.set_economy(model.economy);
        window.set_economy_label(model.economy_button.into());
        sync(
            &self.indicators,
            model
                .economy_indicators
                .iter()
                .map(|i| IndicatorEntry {
                    label: i.label.into(),
                    tint: color(i.tint),
                })
                .collect(),
        );

        window.set_hour_hand(model.clock.hour_hand().into());
        window.set_minute_hand(model.clock.minute_hand().into());
        window.set_second_hand(model.clock.second_hand().into());
        window.set_clock_day(model.clock.day_of_month.to_string().into());

        let settings = &model.settings;
        window.set_settings_open(settings.open);
        window.set_settings_title(settings.title.into());
        window.set_language_button(settings.language_button.into());
        window.set_choose_animation_label(settings.choose_animation.into());
        window.set_suggest_label(settings.suggest_label.into());
        window.set_generating(settings.generating);
        window.set_socials_title(settings.socials_title.into());
        sync(
            &self.animations,
            settings
                .animations
                .iter()
                .map(|a| ThemeEntry {
                    name: a.name.as_str().into(),
                    active: a.active,
                })
                .collect(),
        );
        sync(
            &self.socials,
            settings
                .socials
                .iter()
                .map(|s| SocialEntry {
                    name: s.name.into(),
                    label: s.label.into(),
                    url: s.url.into(),
                })
                .collect(),
        );
    }
}

fn sync<T: Clone + PartialEq + 'static>(model: &VecModel<T>, rows: Vec<T>) {
    let unchanged = model.row_count() == rows.len()
        && rows
            .iter()
            .enumerate()
            .all(|(i, row)| model.row_data(i).as_ref() == Some(row));
    if !unchanged {
        model.set_vec(rows);
    }
}

fn color(rgb: Rgb) -> Color {
    Color::from_rgb_u8(rgb.0, rgb.1, rgb.2)
}

fn backdrop(kind: ThemeKind) -> Backdrop {
    match kind {
        ThemeKind::NeonPulse => Backdrop::NeonPulse,
        ThemeKind::MysticWaves => Backdrop::MysticWaves,
        ThemeKind::CyberpunkGlitch => Backdrop::CyberpunkGlitch,
        ThemeKind::AuroraBorealis => Backdrop::AuroraBorealis,
        ThemeKind::LiquidMetal => Backdrop::LiquidMetal,
        ThemeKind::Custom => Backdrop::Custom,
    }
}
