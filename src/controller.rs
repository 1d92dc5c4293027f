//! Game controller
//!
//! Owns the live game state, the tick timer, the render surface and the
//! ranking. The UI layer talks to it through `start`, `set_direction`,
//! `tick` and `restart`.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::highscores::{RankingEntry, RankingStore, player_name_or_default};
use crate::persistence::PersistenceBackend;
use crate::platform::{DirectionSink, Ticker};
use crate::renderer::{self, RenderSurface, Sprites};
use crate::settings::GameConfig;
use crate::sim::{Direction, EndReason, GameState, StepOutcome};

/// Closing lines shown on the game-over screen
pub const CLOSING_MESSAGES: [&str; 6] = [
    "You're amazing! 💕",
    "What reflexes! 😍",
    "You're doing great! 🌟",
    "Keep it up! 💖",
    "You're awesome! ✨",
    "Impressive! 🎉",
];

/// Everything the game-over screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOver {
    pub final_score: u32,
    pub reason: EndReason,
    pub message: &'static str,
    /// Rank reached this run (1-indexed), if it made the top 10
    pub rank: Option<usize>,
    pub ranking: Vec<RankingEntry>,
}

pub struct GameController<B, T, S: RenderSurface> {
    config: GameConfig,
    state: GameState,
    ranking: RankingStore<B>,
    ticker: T,
    surface: S,
    sprites: Sprites<S::Image>,
    player: String,
    high_score: u32,
    game_over: Option<GameOver>,
    /// Seeds new runs and picks closing messages
    rng: Pcg32,
}

impl<B, T, S> GameController<B, T, S>
where
    B: PersistenceBackend,
    T: Ticker,
    S: RenderSurface,
{
    pub fn new(config: GameConfig, backend: B, ticker: T, surface: S, seed: u64) -> Self {
        let ranking = RankingStore::new(backend);
        let high_score = ranking.high_score();
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(config, rng.random());
        log::info!("Controller ready (high score {})", high_score);

        Self {
            config,
            state,
            ranking,
            ticker,
            surface,
            sprites: Sprites::default(),
            player: player_name_or_default(""),
            high_score,
            game_over: None,
            rng,
        }
    }

    /// Replace the head/food textures
    pub fn set_sprites(&mut self, sprites: Sprites<S::Image>) {
        self.sprites = sprites;
    }

    /// Begin a run for `player_name` (blank names play as the default)
    pub fn start(&mut self, player_name: &str) {
        self.player = player_name_or_default(player_name);
        log::info!("Starting game for {}", self.player);
        self.reset();
    }

    /// Abandon the current run and start a fresh one
    pub fn restart(&mut self) {
        log::info!("Restarting game for {}", self.player);
        self.reset();
    }

    fn reset(&mut self) {
        self.ticker.stop();
        self.state = GameState::new(self.config, self.rng.random());
        self.game_over = None;
        self.draw();
        self.ticker.start(self.state.speed_ms);
    }

    /// Request a turn; ignored once the run is over
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if self.game_over.is_some() {
            return false;
        }
        self.state.set_direction(dir)
    }

    /// Timer callback: advance one step, then draw or finish the run
    pub fn tick(&mut self) -> StepOutcome {
        if self.game_over.is_some() {
            return StepOutcome::Idle;
        }

        let outcome = self.state.step();
        match outcome {
            StepOutcome::GameOver(reason) => self.finish(reason),
            StepOutcome::Ate { speed_changed } => {
                if speed_changed {
                    log::debug!("Rescheduling tick timer at {} ms", self.state.speed_ms);
                    self.ticker.stop();
                    self.ticker.start(self.state.speed_ms);
                }
                self.draw();
            }
            StepOutcome::Moved | StepOutcome::Idle => self.draw(),
        }
        outcome
    }

    fn finish(&mut self, reason: EndReason) {
        self.ticker.stop();

        let final_score = self.state.score;
        let rank = self.ranking.record(&self.player, final_score);
        self.high_score = self.ranking.high_score();
        let message = CLOSING_MESSAGES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(CLOSING_MESSAGES[0]);

        if let Some(rank) = rank {
            log::info!("{} placed #{} with {}", self.player, rank, final_score);
        }
        self.game_over = Some(GameOver {
            final_score,
            reason,
            message,
            rank,
            ranking: self.ranking.load(),
        });
    }

    fn draw(&mut self) {
        renderer::draw(&mut self.surface, &self.state, &self.sprites);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Best stored score, refreshed after every run
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Current stored ranking
    pub fn ranking(&self) -> Vec<RankingEntry> {
        self.ranking.load()
    }

    pub fn game_over(&self) -> Option<&GameOver> {
        self.game_over.as_ref()
    }

    pub fn player_name(&self) -> &str {
        &self.player
    }

    /// Current tick interval (ms)
    pub fn tick_interval_ms(&self) -> u32 {
        self.state.speed_ms
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct state access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

impl<B, T, S> DirectionSink for GameController<B, T, S>
where
    B: PersistenceBackend,
    T: Ticker,
    S: RenderSurface,
{
    fn set_direction(&mut self, dir: Direction) -> bool {
        GameController::set_direction(self, dir)
    }
}
