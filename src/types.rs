//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_INTERVAL_STEP_MS: u32 = 100;
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed per level advance
pub const LINES_PER_LEVEL: u32 = 10;

/// DAS/ARR timing (milliseconds)
pub const DEFAULT_DAS_MS: u32 = 150;
pub const DEFAULT_ARR_MS: u32 = 50;
pub const SOFT_DROP_DAS_MS: u32 = 0;
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// Points per line clear, indexed by number of lines (0-4), before the
/// level multiplier is applied.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per row descended by a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// All piece kinds in canonical order (spawn selection indexes into this)
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

/// Game actions produced by the input layer and consumed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Start,
    Restart,
}

/// Cell on the board (None = empty, Some = filled with the kind whose color
/// it keeps until a line clear removes it)
pub type Cell = Option<PieceKind>;
