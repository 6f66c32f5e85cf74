//! GameView smoke tests: render a snapshot into a framebuffer and check
//! the text that comes out. No terminal involved.

use blockfall::core::{GameSnapshot, GameState};
use blockfall::term::{FrameBuffer, GameView, Viewport};

const VIEW: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
        .collect()
}

fn full_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| row_text(fb, y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_render_draws_border_and_hud() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, VIEW);
    let text = full_text(&fb);

    assert!(text.contains('┌'));
    assert!(text.contains('┘'));
    assert!(text.contains("SCORE"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("LINES"));
    assert!(text.contains("NEXT"));
}

#[test]
fn test_render_shows_start_prompt_before_first_piece() {
    let game = GameState::new(1);
    let fb = GameView::default().render(&game.snapshot(), VIEW);

    assert!(full_text(&fb).contains("PRESS ENTER TO START"));
}

#[test]
fn test_render_shows_pause_overlay() {
    let mut game = GameState::new(1);
    game.start();
    game.toggle_pause();

    let fb = GameView::default().render(&game.snapshot(), VIEW);
    let text = full_text(&fb);

    assert!(text.contains("PAUSED"));
    assert!(!text.contains("PRESS ENTER"));
}

#[test]
fn test_render_shows_game_over_overlay() {
    let mut game = GameState::new(1);
    for y in 0..2 {
        for x in 0..10 {
            game.board_mut().set(x, y, Some(blockfall::types::PieceKind::I));
        }
    }
    game.start();
    assert!(game.game_over());

    let fb = GameView::default().render(&game.snapshot(), VIEW);
    assert!(full_text(&fb).contains("GAME OVER - R TO RESTART"));
}

#[test]
fn test_render_draws_active_piece_blocks() {
    let mut game = GameState::new(1);
    game.start();

    let fb = GameView::default().render(&game.snapshot(), VIEW);
    let blocks = full_text(&fb).matches('█').count();

    // Four board cells at two columns each, plus the next-piece preview.
    assert!(blocks >= 8, "expected piece blocks, found {}", blocks);
}

#[test]
fn test_render_hud_tracks_score() {
    let mut game = GameState::new(1);
    game.start();
    for x in 0..10 {
        game.board_mut().set(x, 19, Some(blockfall::types::PieceKind::L));
    }
    game.clear_completed_lines();
    assert_eq!(game.score(), 100);

    let fb = GameView::default().render(&game.snapshot(), VIEW);
    assert!(full_text(&fb).contains("100"));
}

#[test]
fn test_render_fits_small_viewport_without_panic() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // Smaller than the board frame in both directions.
    let fb = view.render(&snap, Viewport::new(10, 5));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}
