//! Game state module - the complete simulation engine
//!
//! Ties together board, shapes, RNG and scoring, and exposes the command
//! set the outer layers drive: movement, rotation, drops, pause, restart,
//! and the gravity tick. Rendering and input live elsewhere; this module is
//! pure state.

use crate::core::scoring::{drop_interval_ms, hard_drop_points, line_clear_points, target_level};
use crate::core::shapes::{spawn_shape, ShapeGrid, KICK_OFFSETS};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::core::{Board, PieceSource};
use crate::types::{GameAction, PieceKind, BASE_DROP_MS, BOARD_WIDTH};

/// The falling piece: its kind, current (possibly rotated) bitmap, and the
/// board coordinate of the bitmap's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of the given kind at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self { kind, shape, x, y: 0 }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    /// Lookahead piece, pre-rolled with the same uniform draw as spawns
    next: Option<PieceKind>,
    pieces: PieceSource,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a fresh, not-yet-started game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            pieces: PieceSource::new(seed),
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            started: false,
            paused: true,
            game_over: false,
        }
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

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup in tests
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Copy the full render/HUD state out
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot {
            active: self.active.map(ActiveSnapshot::from),
            next: self.next,
            score: self.score,
            lines: self.lines,
            level: self.level,
            drop_interval_ms: self.drop_interval_ms,
            started: self.started,
            paused: self.paused,
            game_over: self.game_over,
            ..GameSnapshot::default()
        };
        self.board.write_grid(&mut snap.board);
        snap
    }

    /// Start the game. The first call spawns the first piece; after a game
    /// over this restarts from scratch, matching the start/restart control.
    pub fn start(&mut self) -> bool {
        if !self.started {
            self.started = true;
            self.paused = false;
            self.spawn_piece();
            true
        } else if self.game_over {
            self.restart()
        } else {
            false
        }
    }

    /// Reset everything (score, lines, level, board, lookahead) and start
    pub fn restart(&mut self) -> bool {
        if !self.started {
            return self.start();
        }
        *self = Self::new(self.pieces.state());
        self.start()
    }

    /// Toggle pause. Has no effect before start or after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Every movement/rotation command is a no-op unless the game is
    /// running and a piece is falling. Checked here, not left to callers.
    fn accepts_commands(&self) -> bool {
        self.started && !self.paused && !self.game_over && self.active.is_some()
    }

    /// Spawn the lookahead piece (drawing one on first use) and pre-roll
    /// the following one. A blocked spawn ends the game and leaves the
    /// board untouched.
    fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.pieces.draw(),
        };
        self.next = Some(self.pieces.draw());

        let piece = ActivePiece::spawn(kind);
        if !self.board.placement_valid(&piece.shape, piece.x, piece.y) {
            self.active = None;
            self.game_over = true;
            self.paused = true;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to shift the active piece horizontally
    fn try_shift(&mut self, dx: i8) -> bool {
        if !self.accepts_commands() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.board.placement_valid(&active.shape, active.x + dx, active.y) {
            self.active = Some(ActivePiece {
                x: active.x + dx,
                ..active
            });
            return true;
        }

        false
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Rotate the active piece clockwise, kicking horizontally if needed.
    ///
    /// Offsets are tried in a fixed order (in place, +1, -1, +2, -2); the
    /// first valid one wins. If all collide the piece stays unrotated and
    /// unmoved.
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_commands() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotate_cw();
        for dx in std::iter::once(0).chain(KICK_OFFSETS) {
            if self.board.placement_valid(&rotated, active.x + dx, active.y) {
                self.active = Some(ActivePiece {
                    shape: rotated,
                    x: active.x + dx,
                    ..active
                });
                return true;
            }
        }

        false
    }

    /// Advance the active piece one row, or lock it if it cannot fall.
    ///
    /// Returns true if the piece fell. On lock, merge, line clear and the
    /// next spawn all happen before this returns.
    pub fn soft_drop_step(&mut self) -> bool {
        if !self.accepts_commands() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.board.placement_valid(&active.shape, active.x, active.y + 1) {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            true
        } else {
            self.lock_active();
            false
        }
    }

    /// Drop the active piece to the floor, scoring 2 points per row, then
    /// lock it. Exactly one lock-and-respawn cycle per call.
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_commands() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let mut distance: i8 = 0;
        while self
            .board
            .placement_valid(&active.shape, active.x, active.y + distance + 1)
        {
            distance += 1;
        }

        self.score += hard_drop_points(distance as u32);
        self.active = Some(ActivePiece {
            y: active.y + distance,
            ..active
        });
        self.lock_active();
        true
    }

    /// Merge the active piece into the board, clear lines, spawn the next
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .merge(&active.shape, active.x, active.y, active.kind);
        self.clear_completed_lines();

        if !self.game_over {
            self.spawn_piece();
        }
    }

    /// Remove all complete rows, award points, and advance the level.
    ///
    /// The level rises by at most one per call even if the new line total
    /// crosses several thresholds at once.
    pub fn clear_completed_lines(&mut self) -> usize {
        let cleared = self.board.clear_full_rows().len();
        if cleared == 0 {
            return 0;
        }

        self.lines += cleared as u32;
        self.score += line_clear_points(cleared, self.level);

        if target_level(self.lines) > self.level {
            self.level += 1;
            self.drop_interval_ms = drop_interval_ms(self.level);
        }

        cleared
    }

    /// Gravity driver: accumulate elapsed time and perform one automatic
    /// descent per elapsed drop interval. Interval changes from a level-up
    /// take effect on the next step.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.paused || self.game_over {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms >= self.drop_interval_ms {
            self.drop_timer_ms = 0;
            self.soft_drop_step();
            return true;
        }

        false
    }

    /// Apply a game action from the input layer
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => {
                // soft_drop_step's return means "the piece fell", which is
                // false on a lock; acceptance is the guard check.
                if !self.accepts_commands() {
                    return false;
                }
                self.soft_drop_step();
                true
            }
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
