//! Terminal Flappy Bird runner (default binary).
//!
//! Loads sprites, then runs a fixed-rate loop: drain input, advance the
//! simulation one tick, render a snapshot with diff-based redraws.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;

use tui_flappy::assets::{self, Assets};
use tui_flappy::config::GameConfig;
use tui_flappy::core::{FrameSnapshot, Simulation, SimpleRng, TickOutcome};
use tui_flappy::input::InputPoller;
use tui_flappy::logging;
use tui_flappy::term::{FrameBuffer, GameView, PixelCanvas, TerminalRenderer, Viewport};

fn main() -> ExitCode {
    let config = GameConfig::from_env();
    if let Err(err) = logging::init(config.log_path.as_deref()) {
        eprintln!("warning: {err:#}");
    }

    // Load before touching the terminal so errors stay readable.
    let assets = match Assets::load(&config.assets_dir) {
        Ok(assets) => assets,
        Err(err) => {
            log::error!("asset load failed: {err}");
            eprintln!("error: {err}");
            eprintln!(
                "expected these files in {}:",
                config.assets_dir.display()
            );
            for name in assets::required_files() {
                eprintln!("  {name}");
            }
            return ExitCode::FAILURE;
        }
    };

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config, &assets));

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("fatal: {err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, assets: &Assets) -> Result<()> {
    let clock = Instant::now();
    let now_ms = |clock: &Instant| clock.elapsed().as_millis() as u64;

    let mut sim = Simulation::new(
        assets.metrics(),
        SimpleRng::new(config.seed),
        now_ms(&clock),
    );
    log::info!(
        "starting: seed={} fps={} assets={}",
        config.seed,
        config.fps,
        config.assets_dir.display()
    );

    let view = GameView::default();
    let mut poller = InputPoller::new();
    let mut snapshot = FrameSnapshot::default();
    let mut canvas = PixelCanvas::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = config.frame_duration();
    let mut deadline = Instant::now();

    loop {
        deadline += frame;

        // Input with timeout until the frame deadline.
        let input = poller.poll(deadline.saturating_duration_since(Instant::now()))?;
        if input.resized {
            term.invalidate();
        }

        // Tick.
        if sim.tick(&input.events, now_ms(&clock)) == TickOutcome::Quit {
            log::info!("quit with score {}", sim.score());
            return Ok(());
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        sim.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, assets, Viewport::new(w, h), &mut canvas, &mut fb);
        term.draw_swap(&mut fb)?;

        let now = Instant::now();
        if now < deadline {
            std::thread::sleep(deadline - now);
        } else if now - deadline > frame {
            // Too far behind to catch up; drop the backlog.
            deadline = now;
        }
    }
}
