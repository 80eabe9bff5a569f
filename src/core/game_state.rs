//! Game state module - the complete snake session
//!
//! Owns the snake, the food, scoring, the speed ramp and the session
//! lifecycle (idle, running, paused, over). The tick driver and the
//! renderer live elsewhere; this module is pure and deterministic.

use crate::core::rng::SimpleRng;
use crate::core::snake::Snake;
use crate::core::snapshot::GameSnapshot;
use crate::types::{
    Cell, Direction, GameAction, GameOverEvent, FOOD_SCORE, GRID_SIZE, INITIAL_TICK_MS,
    MIN_TICK_MS, SPAWN_X, SPAWN_Y, SPEED_STEP_MS,
};

/// Resample attempts before falling back to a linear scan. The grid has
/// 400 cells, so random placement terminates long before this in practice.
const FOOD_RESAMPLE_CAP: u32 = 10_000;

/// Complete session state.
///
/// Invalid operations (reversal requests, input outside the running state)
/// are silent no-ops; the only terminal outcome is the `game_over` flag.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    food: Cell,
    /// Direction the snake moved in on the last committed tick.
    direction: Direction,
    /// Latest accepted direction request, applied on the next tick.
    ///
    /// Kept separate from `direction` so a turn shows up in the snapshot
    /// immediately and rapid presses within one tick coalesce to the last
    /// valid request.
    pending_direction: Direction,
    score: u32,
    tick_interval_ms: u32,
    started: bool,
    paused: bool,
    game_over: bool,
    /// Last game-over notification (consumed by the driver).
    last_event: Option<GameOverEvent>,
    rng: SimpleRng,
}

impl GameState {
    /// Create an idle session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            snake: Snake::new(Cell::new(SPAWN_X, SPAWN_Y)),
            food: Cell::new(0, 0),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            tick_interval_ms: INITIAL_TICK_MS,
            started: false,
            paused: false,
            game_over: false,
            last_event: None,
            rng: SimpleRng::new(seed),
        };
        state.place_food();
        state
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current tick interval. The driver must re-read this after every
    /// tick: eating food shrinks it.
    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// (Re)start the session: full reset to initial values, then Running.
    ///
    /// Valid from any state; restarting mid-game behaves like restarting
    /// from the game-over screen.
    pub fn start(&mut self) {
        self.snake = Snake::new(Cell::new(SPAWN_X, SPAWN_Y));
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.tick_interval_ms = INITIAL_TICK_MS;
        self.started = true;
        self.paused = false;
        self.game_over = false;
        self.last_event = None;
        self.place_food();
    }

    /// Request a turn. Accepted only while running and when `dir` is not
    /// the exact reverse of the current movement direction; otherwise a
    /// silent no-op. Takes effect on the next tick.
    pub fn request_direction(&mut self, dir: Direction) {
        if !self.running() {
            return;
        }
        if dir == self.direction.opposite() {
            return;
        }
        self.pending_direction = dir;
    }

    /// Flip the paused flag. No-op unless started and not over.
    pub fn toggle_pause(&mut self) {
        if !self.started || self.game_over {
            return;
        }
        self.paused = !self.paused;
    }

    /// Advance the simulation by one step.
    ///
    /// Returns true if the snake moved (or the session ended on this
    /// tick); false when idle, paused or already over.
    pub fn tick(&mut self) -> bool {
        if !self.running() {
            return false;
        }

        let new_head = self.snake.head().step(self.pending_direction);

        // Terminal check against the pre-tick body: the losing position is
        // never committed, so the rendered snake stays unchanged.
        if !new_head.in_grid() || self.snake.occupies(new_head) {
            self.game_over = true;
            self.last_event = Some(GameOverEvent { score: self.score });
            return true;
        }

        if new_head == self.food {
            self.snake.grow(self.pending_direction);
            self.score += FOOD_SCORE;
            self.tick_interval_ms =
                self.tick_interval_ms.saturating_sub(SPEED_STEP_MS).max(MIN_TICK_MS);
            self.place_food();
        } else {
            self.snake.advance(self.pending_direction);
        }

        self.direction = self.pending_direction;
        true
    }

    /// Place food on a uniformly random cell off the snake.
    ///
    /// Iterative resample with a capped attempt count; past the cap the
    /// first free cell in row-major order is taken so placement always
    /// terminates and never lands on the body.
    pub fn place_food(&mut self) {
        for _ in 0..FOOD_RESAMPLE_CAP {
            let candidate = self.rng.next_cell();
            if !self.snake.occupies(candidate) {
                self.food = candidate;
                return;
            }
        }

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let candidate = Cell::new(x, y);
                if !self.snake.occupies(candidate) {
                    self.food = candidate;
                    return;
                }
            }
        }
        // Snake fills the whole grid; keep the previous food cell.
    }

    /// Take and clear the pending game-over notification.
    pub fn take_last_event(&mut self) -> Option<GameOverEvent> {
        self.last_event.take()
    }

    /// Apply a driver-level action.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Turn(dir) => self.request_direction(dir),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start(),
        }
    }

    /// Fill a caller-owned snapshot, reusing its segment allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.segments.clear();
        out.segments.extend(self.snake.segments());
        out.food = self.food;
        out.direction = self.direction;
        out.pending_direction = self.pending_direction;
        out.score = self.score;
        out.tick_interval_ms = self.tick_interval_ms;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn running(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    #[cfg(test)]
    pub fn set_food(&mut self, cell: Cell) {
        self.food = cell;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
