use glam::Vec2;

use crate::components::Side;
use crate::config::Config;
use crate::host::{BodyId, Contact, Moved, Mover, SceneView, Surface, Viewport};
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

/// Court geometry: reflective long edges, open short edges where the ball
/// can leave play
#[derive(Debug, Clone)]
pub struct Court {
    pub width: f32,
    pub height: f32,
    pub paddle_inset: f32,
}

impl Default for Court {
    fn default() -> Self {
        Self {
            width: Params::COURT_WIDTH,
            height: Params::COURT_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
        }
    }
}

impl Court {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            paddle_inset: Params::PADDLE_INSET,
        }
    }

    /// Where the ball starts and returns between rallies
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Court-fixed x for a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.width - self.paddle_inset,
        }
    }

    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(self.paddle_x(side), self.height / 2.0)
    }

    /// Clamp a paddle center into the wall band
    pub fn clamp_y(&self, y: f32, half_height: f32) -> f32 {
        y.clamp(half_height, self.height - half_height)
    }
}

/// Default physics backend: resolves ball and paddle moves against the
/// court's walls and paddle boxes
#[derive(Debug, Clone)]
pub struct CourtMover {
    court: Court,
    paddle_size: Vec2,
    ball_radius: f32,
}

impl CourtMover {
    pub fn new(court: Court, config: &Config) -> Self {
        Self {
            court,
            paddle_size: Vec2::new(config.paddle_width, config.paddle_height),
            ball_radius: config.ball_radius,
        }
    }

    fn paddle_box(&self, paddle_pos: Vec2) -> Aabb {
        Aabb::from_center_size(paddle_pos, self.paddle_size)
    }

    fn move_ball(&self, scene: &SceneView, displacement: Vec2) -> Moved {
        let mut pos = scene.ball + displacement;
        let mut contact = None;
        let r = self.ball_radius;

        // Top and bottom walls reflect; the short edges stay open
        if pos.y < r {
            pos.y = r;
            contact = Some(Contact {
                surface: Surface::Other,
                normal: Vec2::new(0.0, 1.0),
            });
        } else if pos.y > self.court.height - r {
            pos.y = self.court.height - r;
            contact = Some(Contact {
                surface: Surface::Other,
                normal: Vec2::new(0.0, -1.0),
            });
        }

        // Paddle contact wins over a wall graze in the same step
        for (side, paddle_pos) in [
            (Side::Left, scene.left_paddle),
            (Side::Right, scene.right_paddle),
        ] {
            let paddle = self.paddle_box(paddle_pos);
            if paddle.intersects_circle(pos, r) {
                // Push the ball clear of the inner face
                pos.x = match side {
                    Side::Left => paddle.max.x + r,
                    Side::Right => paddle.min.x - r,
                };
                let normal = match side {
                    Side::Left => Vec2::new(1.0, 0.0),
                    Side::Right => Vec2::new(-1.0, 0.0),
                };
                contact = Some(Contact {
                    surface: side.into(),
                    normal,
                });
                break;
            }
        }

        Moved {
            position: pos,
            contact,
        }
    }

    fn move_paddle(&self, side: Side, scene: &SceneView, displacement: Vec2) -> Moved {
        let start = match side {
            Side::Left => scene.left_paddle,
            Side::Right => scene.right_paddle,
        };
        let wanted = start.y + displacement.y;
        let clamped = self.court.clamp_y(wanted, self.paddle_size.y / 2.0);

        let contact = (clamped != wanted).then(|| Contact {
            surface: Surface::Other,
            normal: Vec2::new(0.0, if wanted > clamped { -1.0 } else { 1.0 }),
        });

        Moved {
            position: Vec2::new(self.court.paddle_x(side), clamped),
            contact,
        }
    }
}

impl Mover for CourtMover {
    fn move_and_collide(&self, scene: &SceneView, body: BodyId, displacement: Vec2) -> Moved {
        match body {
            BodyId::Ball => self.move_ball(scene, displacement),
            BodyId::LeftPaddle => self.move_paddle(Side::Left, scene, displacement),
            BodyId::RightPaddle => self.move_paddle(Side::Right, scene, displacement),
        }
    }
}

impl Viewport for CourtMover {
    fn is_on_screen(&self, position: Vec2) -> bool {
        (0.0..=self.court.width).contains(&position.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_mover() -> (CourtMover, SceneView) {
        let court = Court::default();
        let config = Config::new();
        let scene = SceneView {
            ball: court.ball_spawn(),
            left_paddle: court.paddle_spawn(Side::Left),
            right_paddle: court.paddle_spawn(Side::Right),
        };
        (CourtMover::new(court, &config), scene)
    }

    #[test]
    fn test_paddle_x_positions() {
        let court = Court::default();
        assert_eq!(court.paddle_x(Side::Left), 20.0, "Left paddle X");
        assert_eq!(court.paddle_x(Side::Right), 620.0, "Right paddle X");
    }

    #[test]
    fn test_clamp_y_bounds() {
        let court = Court::default();
        assert_eq!(court.clamp_y(0.0, 18.0), 18.0);
        assert_eq!(court.clamp_y(1000.0, 18.0), 342.0);
        assert_eq!(court.clamp_y(180.0, 18.0), 180.0, "In-band y is untouched");
    }

    #[test]
    fn test_aabb_intersects_circle() {
        let paddle = Aabb::from_center_size(Vec2::new(20.0, 180.0), Vec2::new(12.0, 36.0));
        assert!(paddle.intersects_circle(Vec2::new(28.0, 180.0), 5.0));
        assert!(
            !paddle.intersects_circle(Vec2::new(40.0, 180.0), 5.0),
            "Circle clear of the box should not intersect"
        );
        assert!(
            paddle.intersects_circle(Vec2::new(29.0, 200.0), 5.0),
            "Corner clip should intersect"
        );
    }

    #[test]
    fn test_ball_move_clamps_at_top_wall() {
        let (mover, mut scene) = setup_mover();
        scene.ball = Vec2::new(320.0, 8.0);

        let moved = mover.move_and_collide(&scene, BodyId::Ball, Vec2::new(2.0, -10.0));

        assert_eq!(moved.position.y, 5.0, "Ball should rest on the wall band");
        let contact = moved.contact.expect("expected wall contact");
        assert_eq!(contact.surface, Surface::Other);
        assert_eq!(contact.normal, Vec2::new(0.0, 1.0), "Top wall normal points down-court");
    }

    #[test]
    fn test_ball_move_clamps_at_bottom_wall() {
        let (mover, mut scene) = setup_mover();
        scene.ball = Vec2::new(320.0, 352.0);

        let moved = mover.move_and_collide(&scene, BodyId::Ball, Vec2::new(0.0, 10.0));

        assert_eq!(moved.position.y, 355.0);
        let contact = moved.contact.expect("expected wall contact");
        assert_eq!(contact.normal, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_ball_move_reports_left_paddle() {
        let (mover, mut scene) = setup_mover();
        scene.ball = Vec2::new(40.0, 180.0);

        let moved = mover.move_and_collide(&scene, BodyId::Ball, Vec2::new(-12.0, 0.0));

        let contact = moved.contact.expect("expected paddle contact");
        assert_eq!(contact.surface, Surface::LeftPaddle);
        assert!(
            moved.position.x > scene.left_paddle.x,
            "Ball should be pushed clear of the paddle face"
        );
    }

    #[test]
    fn test_ball_move_reports_right_paddle() {
        let (mover, mut scene) = setup_mover();
        scene.ball = Vec2::new(600.0, 180.0);

        let moved = mover.move_and_collide(&scene, BodyId::Ball, Vec2::new(12.0, 0.0));

        let contact = moved.contact.expect("expected paddle contact");
        assert_eq!(contact.surface, Surface::RightPaddle);
        assert!(moved.position.x < scene.right_paddle.x);
    }

    #[test]
    fn test_ball_move_clear_of_everything() {
        let (mover, scene) = setup_mover();

        let moved = mover.move_and_collide(&scene, BodyId::Ball, Vec2::new(5.0, 5.0));

        assert!(moved.contact.is_none(), "Open court should report no contact");
        assert_eq!(moved.position, scene.ball + Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_paddle_move_clamps_to_wall_band() {
        let (mover, scene) = setup_mover();

        let moved = mover.move_and_collide(&scene, BodyId::LeftPaddle, Vec2::new(0.0, -400.0));

        assert_eq!(moved.position.y, 18.0, "Paddle should stop at the band edge");
        assert!(moved.contact.is_some(), "Clipped move should report contact");
    }

    #[test]
    fn test_paddle_move_in_band_reports_no_contact() {
        let (mover, scene) = setup_mover();

        let moved = mover.move_and_collide(&scene, BodyId::RightPaddle, Vec2::new(0.0, 30.0));

        assert_eq!(moved.position.y, 210.0);
        assert!(moved.contact.is_none());
    }

    #[test]
    fn test_viewport_tracks_short_edges() {
        let (mover, _scene) = setup_mover();
        assert!(mover.is_on_screen(Vec2::new(320.0, 180.0)));
        assert!(mover.is_on_screen(Vec2::new(0.0, 180.0)), "Edge counts as visible");
        assert!(!mover.is_on_screen(Vec2::new(-1.0, 180.0)));
        assert!(!mover.is_on_screen(Vec2::new(641.0, 180.0)));
    }
}
