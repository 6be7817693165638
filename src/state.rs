use serde::Serialize;

pub const PAUSE_GLYPH: &str = "⏸";
pub const PLAY_GLYPH: &str = "▶";
pub const DEFAULT_GLYPH: &str = "⏯";
pub const PREVIOUS_GLYPH: &str = "⏮";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    /// Stopped, unknown, or the status query failed.
    Other,
}

impl PlaybackState {
    pub fn from_status(status: &str) -> Self {
        match status.trim() {
            "Playing" => PlaybackState::Playing,
            "Paused" => PlaybackState::Paused,
            _ => PlaybackState::Other,
        }
    }

    /// The glyph offers the action, so a playing player shows pause.
    pub fn glyph(self) -> &'static str {
        match self {
            PlaybackState::Playing => PAUSE_GLYPH,
            PlaybackState::Paused => PLAY_GLYPH,
            PlaybackState::Other => DEFAULT_GLYPH,
        }
    }
}

/// One line of Waybar custom-module output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    pub text: String,
    pub tooltip: String,
}

impl State {
    pub fn new(text: &str, tooltip: &str) -> Self {
        State {
            text: text.to_owned(),
            tooltip: tooltip.trim().to_owned(),
        }
    }

    pub fn playback(status: &str, metadata: &str) -> Self {
        State::new(PlaybackState::from_status(status).glyph(), metadata)
    }

    pub fn previous(metadata: &str) -> Self {
        State::new(PREVIOUS_GLYPH, metadata)
    }

    pub fn to_json(&self) -> String {
        // Two string fields cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"text":"{}","tooltip":""}}"#, DEFAULT_GLYPH)
        })
    }
}
