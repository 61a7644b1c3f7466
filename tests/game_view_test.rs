use tui_flappy::assets::{Assets, Rgba, Sprite};
use tui_flappy::core::{FixedGap, Obstacle, Simulation, TickOutcome};
use tui_flappy::term::{canvas::HALF_BLOCK, GameView, Rgb, Viewport};
use tui_flappy::types::{InputEvent, Point};

const SKY: Rgba = Rgba::new(110, 190, 230, 255);
const BIRD: Rgba = Rgba::new(250, 200, 20, 255);
const PIPE: Rgba = Rgba::new(40, 180, 40, 255);

fn solid_assets() -> Assets {
    Assets::from_sprites(
        vec![Sprite::solid(34, 24, BIRD); 3],
        Sprite::solid(52, 400, PIPE),
        Sprite::solid(400, 600, SKY),
    )
    .unwrap()
}

fn sim(assets: &Assets) -> Simulation<FixedGap> {
    Simulation::new(assets.metrics(), FixedGap(300), 0)
}

#[test]
fn term_view_fills_canvas_with_half_blocks() {
    let assets = solid_assets();
    let snap = sim(&assets).snapshot();
    let fb = GameView::default().render(&snap, &assets, Viewport::new(40, 30));

    // scale 0.1: the 400x600 world becomes 40x60 pixels = 40x30 cells.
    let corner = fb.get(0, 29).unwrap();
    assert_eq!(corner.ch, HALF_BLOCK);
    assert_eq!(corner.style.fg, Rgb::from(SKY));
    assert_eq!(corner.style.bg, Rgb::from(SKY));
}

#[test]
fn term_view_draws_actor_over_background() {
    let assets = solid_assets();
    let snap = sim(&assets).snapshot();
    let fb = GameView::default().render(&snap, &assets, Viewport::new(40, 30));

    // Actor spans world y 288..312. Row 14 holds pixel rows 28 (world 285)
    // and 29 (world 295), so only its lower half is the actor.
    let cell = fb.get(9, 14).unwrap();
    assert_eq!(cell.style.fg, Rgb::from(SKY));
    assert_eq!(cell.style.bg, Rgb::from(BIRD));
}

#[test]
fn term_view_draws_both_obstacle_rects() {
    let assets = solid_assets();
    let mut s = sim(&assets);
    let mut o = Obstacle::with_gap_center(s.metrics(), 300);
    o.set_center_x(300.0);
    s.push_obstacle(o);
    let snap = s.snapshot();
    let fb = GameView::default().render(&snap, &assets, Viewport::new(40, 30));

    // Upper rect ends at 225, lower starts at 375, x 274..326.
    assert_eq!(fb.get(30, 5).unwrap().style.fg, Rgb::from(PIPE));
    assert_eq!(fb.get(30, 25).unwrap().style.fg, Rgb::from(PIPE));
    assert_eq!(fb.get(30, 15).unwrap().style.fg, Rgb::from(SKY));
}

#[test]
fn term_view_shows_score() {
    let assets = solid_assets();
    let snap = sim(&assets).snapshot();
    let fb = GameView::default().render(&snap, &assets, Viewport::new(40, 30));

    // (185, 50) -> pixel (18, 5) -> cell (18, 2)
    assert_eq!(fb.get(18, 2).unwrap().ch, '0');
    assert!(!fb.get(18, 2).unwrap().style.bold);
}

#[test]
fn term_view_shows_game_over_text() {
    let assets = solid_assets();
    let mut s = sim(&assets);
    s.actor_mut().place(Point::new(100.0, 5.0));
    s.check_collision();
    let snap = s.snapshot();
    let fb = GameView::default().render(&snap, &assets, Viewport::new(40, 30));

    assert!(fb.row_text(10).contains("Game Over"));
    assert!(fb.get(8, 10).unwrap().style.bold);
    assert!(fb.row_text(15).contains("Press R to restart"));
    assert!(!fb.get(10, 15).unwrap().style.bold);

    // Restarting removes the overlay.
    assert_eq!(s.tick(&[InputEvent::RestartPressed], 0), TickOutcome::Continue);
    let fb = GameView::default().render(&s.snapshot(), &assets, Viewport::new(40, 30));
    assert!(!fb.row_text(10).contains("Game Over"));
}

#[test]
fn term_view_letterboxes_wide_terminals() {
    let assets = solid_assets();
    let snap = sim(&assets).snapshot();
    let fb = GameView::default().render(&snap, &assets, Viewport::new(80, 30));

    // Canvas is 40 cells wide, centered at column 20.
    let outside = fb.get(0, 0).unwrap();
    assert_eq!(outside.ch, ' ');
    assert_eq!(outside.style.bg, Rgb::new(0, 0, 0));
    assert_eq!(fb.get(20, 29).unwrap().ch, HALF_BLOCK);
    assert_eq!(fb.get(60, 29).unwrap().ch, ' ');
}

#[test]
fn term_view_tolerates_tiny_viewport() {
    let assets = solid_assets();
    let snap = sim(&assets).snapshot();
    let fb = GameView::default().render(&snap, &assets, Viewport::new(1, 0));
    assert_eq!(fb.height(), 0);
}
