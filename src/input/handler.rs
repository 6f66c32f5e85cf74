//! DAS/ARR auto-repeat for held movement keys.
//!
//! Terminals often deliver no key release events, so a short timeout after
//! the last press drops the "held" state before repeats can run away.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::types::{
    GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS, SOFT_DROP_DAS_MS,
};

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

/// One held key's delayed-auto-shift state: an initial delay (DAS), then
/// one repeat per auto-repeat interval (ARR) of accumulated time.
#[derive(Debug, Clone)]
struct RepeatTimer {
    das_ms: u32,
    arr_ms: u32,
    das_timer: u32,
    arr_accumulator: u32,
}

impl RepeatTimer {
    fn new(das_ms: u32, arr_ms: u32) -> Self {
        Self {
            das_ms,
            arr_ms,
            das_timer: 0,
            arr_accumulator: 0,
        }
    }

    fn reset(&mut self) {
        self.das_timer = 0;
        self.arr_accumulator = 0;
    }

    /// Advance by `elapsed_ms` and return how many repeats fired.
    fn update(&mut self, elapsed_ms: u32) -> u32 {
        let prev = self.das_timer;
        self.das_timer += elapsed_ms;

        if self.das_timer < self.das_ms {
            return 0;
        }

        // Only time beyond the DAS threshold counts toward repeats.
        let excess = if prev < self.das_ms {
            self.das_timer - self.das_ms
        } else {
            elapsed_ms
        };
        self.arr_accumulator += excess;

        let repeats = self.arr_accumulator / self.arr_ms.max(1);
        self.arr_accumulator %= self.arr_ms.max(1);
        repeats
    }
}

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks held keys and emits repeated movement actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    down_held: bool,
    horizontal_timer: RepeatTimer,
    down_timer: RepeatTimer,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_ms: u32, arr_ms: u32) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            down_held: false,
            horizontal_timer: RepeatTimer::new(das_ms, arr_ms),
            down_timer: RepeatTimer::new(SOFT_DROP_DAS_MS, SOFT_DROP_ARR_MS),
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Track a press of a movement key. Returns the immediate action for a
    /// newly pressed key, None for a key already considered held.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.last_key_time = Instant::now();
                if self.horizontal == HorizontalDirection::Left {
                    None
                } else {
                    self.horizontal = HorizontalDirection::Left;
                    self.horizontal_timer.reset();
                    Some(GameAction::MoveLeft)
                }
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.last_key_time = Instant::now();
                if self.horizontal == HorizontalDirection::Right {
                    None
                } else {
                    self.horizontal = HorizontalDirection::Right;
                    self.horizontal_timer.reset();
                    Some(GameAction::MoveRight)
                }
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.last_key_time = Instant::now();
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    self.down_timer.reset();
                    Some(GameAction::SoftDrop)
                }
            }
            _ => None,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                if self.horizontal == HorizontalDirection::Left {
                    self.horizontal = HorizontalDirection::None;
                    self.horizontal_timer.reset();
                }
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                if self.horizontal == HorizontalDirection::Right {
                    self.horizontal = HorizontalDirection::None;
                    self.horizontal_timer.reset();
                }
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.down_held = false;
                self.down_timer.reset();
            }
            _ => {}
        }
    }

    /// Advance timers and collect repeat actions for held keys.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::<GameAction, 32>::new();

        // Auto-release when the terminal does not emit release events.
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            self.horizontal = HorizontalDirection::None;
            self.horizontal_timer.reset();
            self.down_held = false;
            self.down_timer.reset();
        }

        let repeat_action = match self.horizontal {
            HorizontalDirection::Left => Some(GameAction::MoveLeft),
            HorizontalDirection::Right => Some(GameAction::MoveRight),
            HorizontalDirection::None => {
                self.horizontal_timer.reset();
                None
            }
        };
        if let Some(action) = repeat_action {
            for _ in 0..self.horizontal_timer.update(elapsed_ms) {
                let _ = actions.try_push(action);
            }
        }

        if self.down_held {
            for _ in 0..self.down_timer.update(elapsed_ms) {
                let _ = actions.try_push(GameAction::SoftDrop);
            }
        } else {
            self.down_timer.reset();
        }

        actions
    }

    pub fn reset(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.down_held = false;
        self.last_key_time = Instant::now();
        self.horizontal_timer.reset();
        self.down_timer.reset();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
