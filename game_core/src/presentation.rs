//! Turns frame events into text and sound cues on the host's outputs.

use rand::Rng;

use crate::config::Config;
use crate::host::{AudioSink, Label, TextDisplay};
use crate::params::Params;
use crate::resources::{Events, GameRng, Score};

/// Owns the host's display and audio outputs and drives them from the
/// events each step emits.
///
/// Carries its own rng for beep selection so cue variety never draws from
/// the simulation's stream.
pub struct PresentationBridge<T: TextDisplay, A: AudioSink> {
    display: T,
    audio: A,
    rng: GameRng,
}

impl<T: TextDisplay, A: AudioSink> PresentationBridge<T, A> {
    pub fn new(display: T, audio: A, sound_seed: u64) -> Self {
        Self {
            display,
            audio,
            rng: GameRng::new(sound_seed),
        }
    }

    /// Write the full presentation state out, for startup or after a host
    /// rebuilds its outputs
    pub fn sync(&mut self, score: &Score) {
        self.write_score(score);
        self.display.set_visible(Label::Instructions, true);
    }

    /// React to one step's accumulated events
    pub fn present(&mut self, events: &Events, score: &Score, config: &Config) {
        if events.match_started {
            self.display.set_visible(Label::Instructions, false);
        }
        if events.left_scored || events.right_scored {
            self.write_score(score);
            self.display.set_visible(Label::Instructions, true);
            self.audio.play_sound(Params::ROUND_SOUND);
        }
        if config.impact_beeps && (events.ball_hit_paddle || events.ball_hit_wall) {
            let index = self.rng.0.gen_range(0..Params::IMPACT_SOUND_COUNT);
            self.audio.play_sound(index);
        }
    }

    fn write_score(&mut self, score: &Score) {
        self.display
            .set_text(Label::LeftScore, &score.left.to_string());
        self.display
            .set_text(Label::RightScore, &score.right.to_string());
    }

    pub fn display(&self) -> &T {
        &self.display
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
