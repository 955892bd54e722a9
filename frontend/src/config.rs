use log::Level;

pub const NOTIFY_BUTTON_ID: &str = "notifyBtn";
pub const FEATURE_CARD_SELECTOR: &str = ".feature-card";

pub const CONFIRMED_LABEL: &str = "You're on the list! 🚀";
pub const CONFIRMED_BACKGROUND: &str = "linear-gradient(90deg, #00ff88, #00b8ff)";
pub const CONFIRMED_SHADOW: &str = "0 0 30px rgba(0, 255, 136, 0.5)";

/// How far below its resting place a hidden card sits, in px.
pub const CARD_OFFSET_PX: u32 = 20;
pub const CARD_TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";

/// Delays driving the button reset and the card entrance, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub reset_delay_ms: u32,
    pub card_base_delay_ms: u32,
    pub card_stagger_ms: u32,
}

impl Timings {
    pub const DEFAULT: Timings = Timings {
        reset_delay_ms: 5_000,
        card_base_delay_ms: 500,
        card_stagger_ms: 200,
    };
}

impl Default for Timings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
