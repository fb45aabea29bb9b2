use game_core::{
    create_ball, create_paddle, step, Config, ControlState, Court, CourtMover, Events, GameRng,
    InputQueue, MatchState, PresentationBridge, Side, Time,
};
use hecs::World;

use crate::bot::InputBot;
use crate::sinks::{LogAudio, LogDisplay};

/// One locally driven game: world, resources, the court physics backend,
/// and log-backed presentation
pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub court: Court,
    pub config: Config,
    pub match_state: MatchState,
    pub controls: ControlState,
    pub input_queue: InputQueue,
    pub events: Events,
    pub rng: GameRng,
    mover: CourtMover,
    bot: InputBot,
    bridge: PresentationBridge<LogDisplay, LogAudio>,
}

impl LocalGame {
    pub fn new(seed: u64, config: Config) -> Self {
        let court = Court::default();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, &court, Side::Left);
        create_paddle(&mut world, &court, Side::Right);
        create_ball(&mut world, &court, &config, &mut rng);

        let mover = CourtMover::new(court.clone(), &config);
        let match_state = MatchState::new();
        // Offset seed keeps beep selection off the simulation's stream
        let mut bridge = PresentationBridge::new(LogDisplay, LogAudio, seed.wrapping_add(1));
        bridge.sync(&match_state.score);

        Self {
            world,
            time: Time::default(),
            court,
            config,
            match_state,
            controls: ControlState::new(),
            input_queue: InputQueue::new(),
            events: Events::new(),
            rng,
            mover,
            bot: InputBot::default(),
            bridge,
        }
    }

    /// Advance one rendered frame's worth of simulation
    pub fn frame(&mut self, dt: f32) {
        self.bot
            .drive(&self.world, &self.match_state, &mut self.input_queue);

        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.court,
            &self.config,
            &mut self.match_state,
            &mut self.controls,
            &mut self.input_queue,
            &mut self.events,
            &mut self.rng,
            &self.mover,
            &self.mover,
        );

        self.bridge
            .present(&self.events, &self.match_state.score, &self.config);
    }

    pub fn score(&self) -> (u32, u32) {
        (self.match_state.score.left, self.match_state.score.right)
    }
}
