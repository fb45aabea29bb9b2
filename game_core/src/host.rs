//! Contracts the simulation expects its host to provide.
//!
//! Every engine-facing concern sits behind one of these traits so the core
//! never reaches into a scene graph: physics behind [`Mover`], scoring
//! visibility behind [`Viewport`], and presentation behind [`TextDisplay`]
//! and [`AudioSink`]. Controllers receive their collaborators at
//! construction or per call.

use glam::Vec2;

use crate::components::Side;

/// Bodies the mover can be asked to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyId {
    Ball,
    LeftPaddle,
    RightPaddle,
}

/// What a moving body ended up touching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    LeftPaddle,
    RightPaddle,
    /// Walls and anything else that is not a paddle
    Other,
}

impl From<Side> for Surface {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Surface::LeftPaddle,
            Side::Right => Surface::RightPaddle,
        }
    }
}

/// Body positions captured for one mover call
#[derive(Debug, Clone, Copy)]
pub struct SceneView {
    pub ball: Vec2,
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
}

/// A contact reported by the mover
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub surface: Surface,
    /// Unit normal pointing away from the surface
    pub normal: Vec2,
}

/// Outcome of a collision-aware move
#[derive(Debug, Clone, Copy)]
pub struct Moved {
    pub position: Vec2,
    pub contact: Option<Contact>,
}

/// Collision-aware movement, the only physics operation the core depends on
pub trait Mover {
    fn move_and_collide(&self, scene: &SceneView, body: BodyId, displacement: Vec2) -> Moved;
}

/// Visibility query the round lifecycle polls to detect a lost ball
pub trait Viewport {
    fn is_on_screen(&self, position: Vec2) -> bool;
}

/// Text labels the presentation bridge drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    LeftScore,
    RightScore,
    Instructions,
}

/// Score and instruction text output
pub trait TextDisplay {
    fn set_text(&mut self, label: Label, text: &str);
    fn set_visible(&mut self, label: Label, visible: bool);
}

/// Sound cue output; the host maps indices to actual streams
pub trait AudioSink {
    fn play_sound(&mut self, index: usize);
}

/// Test double that remembers every text call
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub texts: Vec<(Label, String)>,
    pub visibility: Vec<(Label, bool)>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent text written to a label, if any
    pub fn last_text(&self, label: Label) -> Option<&str> {
        self.texts
            .iter()
            .rev()
            .find(|(l, _)| *l == label)
            .map(|(_, text)| text.as_str())
    }

    /// Most recent visibility written to a label, if any
    pub fn last_visibility(&self, label: Label) -> Option<bool> {
        self.visibility
            .iter()
            .rev()
            .find(|(l, _)| *l == label)
            .map(|(_, visible)| *visible)
    }
}

impl TextDisplay for RecordingDisplay {
    fn set_text(&mut self, label: Label, text: &str) {
        self.texts.push((label, text.to_string()));
    }

    fn set_visible(&mut self, label: Label, visible: bool) {
        self.visibility.push((label, visible));
    }
}

/// Test double that remembers every sound cue
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<usize>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioSink for RecordingAudio {
    fn play_sound(&mut self, index: usize) {
        self.played.push(index);
    }
}

/// Test double that reports a scripted outcome for the ball and moves
/// paddles without collision
#[derive(Debug, Clone, Copy)]
pub struct ScriptedMover {
    pub ball_outcome: Moved,
}

impl Mover for ScriptedMover {
    fn move_and_collide(&self, scene: &SceneView, body: BodyId, displacement: Vec2) -> Moved {
        match body {
            BodyId::Ball => self.ball_outcome,
            BodyId::LeftPaddle => Moved {
                position: scene.left_paddle + displacement,
                contact: None,
            },
            BodyId::RightPaddle => Moved {
                position: scene.right_paddle + displacement,
                contact: None,
            },
        }
    }
}
