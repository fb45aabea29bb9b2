use game_core::{AudioSink, Label, TextDisplay};

/// Writes label updates to the log instead of a screen
pub struct LogDisplay;

impl TextDisplay for LogDisplay {
    fn set_text(&mut self, label: Label, text: &str) {
        log::info!("{:?}: {}", label, text);
    }

    fn set_visible(&mut self, label: Label, visible: bool) {
        log::debug!("{:?} visible: {}", label, visible);
    }
}

/// Writes sound cues to the log instead of an audio bus
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play_sound(&mut self, index: usize) {
        log::debug!("sound cue {}", index);
    }
}
