// ABOUTME: Charging-animation themes and the geometry of the charge ring.
// ABOUTME: Ring arcs are emitted as SVG path commands in a 100x100 viewbox.

use std::f32::consts::TAU;
use std::fmt::Write as _;

pub const NEON_PULSE: &str = "Neon Pulse";
pub const MYSTIC_WAVES: &str = "Mystic Waves";
pub const CYBERPUNK_GLITCH: &str = "Cyberpunk Glitch";
pub const AURORA_BOREALIS: &str = "Aurora Borealis";
pub const LIQUID_METAL: &str = "Liquid Metal";

pub const BUILTIN_THEMES: [&str; 5] = [
    NEON_PULSE,
    MYSTIC_WAVES,
    CYBERPUNK_GLITCH,
    AURORA_BOREALIS,
    LIQUID_METAL,
];

const CENTER: f32 = 50.0;
const RING_SEGMENTS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    NeonPulse,
    MysticWaves,
    CyberpunkGlitch,
    AuroraBorealis,
    LiquidMetal,
    /// Any name that did not ship with the app, i.e. an AI suggestion.
    Custom,
}

impl ThemeKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            NEON_PULSE => ThemeKind::NeonPulse,
            MYSTIC_WAVES => ThemeKind::MysticWaves,
            CYBERPUNK_GLITCH => ThemeKind::CyberpunkGlitch,
            AURORA_BOREALIS => ThemeKind::AuroraBorealis,
            LIQUID_METAL => ThemeKind::LiquidMetal,
            _ => ThemeKind::Custom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStyle {
    pub kind: ThemeKind,
    /// Ring radius in viewbox units.
    pub radius: f32,
    pub stroke_width: f32,
    pub track_color: Rgb,
    /// Draw a dashed ring on top of the continuous fill line.
    pub segmented: bool,
    /// Large faded glyph behind custom themes.
    pub watermark: Option<char>,
}

impl ThemeStyle {
    pub fn for_name(name: &str) -> Self {
        let kind = ThemeKind::from_name(name);
        let (radius, stroke_width, track_color) = match kind {
            ThemeKind::NeonPulse => (48.0, 8.0, Rgb(0x1a, 0x1a, 0x1a)),
            ThemeKind::MysticWaves => (48.0, 6.0, Rgb(0x11, 0x11, 0x11)),
            ThemeKind::CyberpunkGlitch => (48.0, 2.0, Rgb(0x00, 0x00, 0x00)),
            ThemeKind::AuroraBorealis => (46.0, 8.0, Rgb(0x00, 0x33, 0x00)),
            ThemeKind::LiquidMetal => (44.0, 12.0, Rgb(0x11, 0x11, 0x11)),
            ThemeKind::Custom => (48.0, 8.0, Rgb(0x1a, 0x1a, 0x1a)),
        };
        Self {
            kind,
            radius,
            stroke_width,
            track_color,
            segmented: kind == ThemeKind::CyberpunkGlitch,
            watermark: match kind {
                ThemeKind::Custom => name.chars().next(),
                _ => None,
            },
        }
    }

    pub fn ring_track(&self) -> String {
        arc_path(self.radius, 1.0)
    }

    pub fn ring_fill(&self, ratio: f32) -> String {
        arc_path(self.radius, ratio)
    }

    pub fn ring_segments(&self, ratio: f32) -> String {
        if self.segmented {
            segment_path(self.radius, ratio)
        } else {
            String::new()
        }
    }
}

/// Point on a circle around the viewbox centre, clockwise from 12 o'clock.
pub(crate) fn polar(radius: f32, turns: f32) -> (f32, f32) {
    let angle = turns * TAU;
    (CENTER + radius * angle.sin(), CENTER - radius * angle.cos())
}

/// Clockwise arc from 12 o'clock covering `ratio` of the circle.
pub fn arc_path(radius: f32, ratio: f32) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    if ratio <= 0.0 {
        return String::new();
    }
    let (sx, sy) = polar(radius, 0.0);
    if ratio >= 1.0 {
        // A single arc cannot end where it starts.
        let (mx, my) = polar(radius, 0.5);
        return format!(
            "M {sx:.2} {sy:.2} A {radius} {radius} 0 1 1 {mx:.2} {my:.2} A {radius} {radius} 0 1 1 {sx:.2} {sy:.2}"
        );
    }
    let (ex, ey) = polar(radius, ratio);
    let large = u8::from(ratio > 0.5);
    format!("M {sx:.2} {sy:.2} A {radius} {radius} 0 {large} 1 {ex:.2} {ey:.2}")
}

fn segment_path(radius: f32, ratio: f32) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let slot = 1.0 / RING_SEGMENTS as f32;
    let mut path = String::new();
    for i in 0..RING_SEGMENTS {
        let start = i as f32 / RING_SEGMENTS as f32;
        if start >= ratio {
            break;
        }
        let end = (start + slot / 2.0).min(ratio);
        let (sx, sy) = polar(radius, start);
        let (ex, ey) = polar(radius, end);
        let _ = write!(path, "M {sx:.2} {sy:.2} A {radius} {radius} 0 0 1 {ex:.2} {ey:.2} ");
    }
    path.truncate(path.trim_end().len());
    path
}
