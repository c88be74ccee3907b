// ABOUTME: Analog clock geometry for the header dial.
// ABOUTME: Converts a wall-clock time into hand paths, numeral positions, and the date window.

use chrono::{Datelike, Timelike};

use crate::theme::polar;

const HOUR_HAND: f32 = 25.0;
const MINUTE_HAND: f32 = 35.0;
const SECOND_HAND: f32 = 40.0;
const NUMERAL_RADIUS: f32 = 26.0;
const TICK_OUTER: f32 = 46.0;
const TICK_INNER: f32 = 41.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Numeral {
    pub label: String,
    /// Centre of the numeral in viewbox units.
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    /// Fractions of a full turn, clockwise from 12.
    pub hour_turns: f32,
    pub minute_turns: f32,
    pub second_turns: f32,
    pub day_of_month: u32,
}

impl ClockFace {
    pub fn at<T: Timelike + Datelike>(time: &T) -> Self {
        let seconds = time.second() as f32 / 60.0;
        let minutes = (seconds + time.minute() as f32) / 60.0;
        // 24h input, so afternoon hours wrap past one full turn.
        let hours = ((minutes + time.hour() as f32) / 12.0).fract();
        Self {
            hour_turns: hours,
            minute_turns: minutes,
            second_turns: seconds,
            day_of_month: time.day(),
        }
    }

    pub fn hour_hand(&self) -> String {
        hand_path(HOUR_HAND, self.hour_turns)
    }

    pub fn minute_hand(&self) -> String {
        hand_path(MINUTE_HAND, self.minute_turns)
    }

    pub fn second_hand(&self) -> String {
        hand_path(SECOND_HAND, self.second_turns)
    }
}

fn hand_path(length: f32, turns: f32) -> String {
    let (x, y) = polar(length, turns);
    format!("M 50 50 L {x:.2} {y:.2}")
}

/// Twelve short marks at the rim of the dial.
pub fn tick_marks() -> String {
    (1..=12)
        .map(|n| {
            let turns = n as f32 / 12.0;
            let (ox, oy) = polar(TICK_OUTER, turns);
            let (ix, iy) = polar(TICK_INNER, turns);
            format!("M {ox:.2} {oy:.2} L {ix:.2} {iy:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn numerals() -> Vec<Numeral> {
    (1..=12)
        .map(|n| {
            let (x, y) = polar(NUMERAL_RADIUS, n as f32 / 12.0);
            Numeral {
                label: n.to_string(),
                x,
                y,
            }
        })
        .collect()
}
