use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, EnableFocusChange, DisableFocusChange, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::Print,
    terminal, ExecutableCommand, QueueableCommand,
};
use tracing_subscriber::EnvFilter;

use sky_duel::ai::AiDriver;
use sky_duel::assets::{load_assets, Assets};
use sky_duel::audio::{BellSink, SoundSink};
use sky_duel::compute::{advance_frame, apply_action, init_world};
use sky_duel::config::{Args, GameConfig};
use sky_duel::display::{draw_hud, title, BackBuffer};
use sky_duel::input::{Action, KeyState};
use sky_duel::timer::FrameClock;

fn init_logging(config: &GameConfig) -> anyhow::Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until Esc / Ctrl-C.
///
/// Each pass drains pending terminal events, then (while the terminal has
/// focus) samples held keys, advances the world one frame and presents the
/// back-buffer.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    assets: &Assets,
) -> std::io::Result<()> {
    let mut world = init_world();
    let mut ai = AiDriver::new(config.seed, config.seeding);
    let mut keys = KeyState::new();
    let mut clock = FrameClock::new();
    let mut sink = BellSink::default();

    let (cols, rows) = terminal::size()?;
    let mut buffer = BackBuffer::new(cols, rows);
    let mut active = true;
    let mut last_frame_rate: Option<u32> = None;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        clock.tick();

        // ── Drain all pending events (non-blocking) ──────────────────────────
        let mut actions = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => {
                    if let Some(action) = keys.handle(key, frame) {
                        actions.push(action);
                    }
                }
                Event::FocusLost => active = false,
                Event::FocusGained => active = true,
                Event::Resize(c, r) => buffer.resize(c, r),
                _ => {}
            }
        }
        if actions.contains(&Action::Quit) {
            tracing::info!(frame, lives = world.session.lives, score = world.session.score, "quit");
            return Ok(());
        }

        if active {
            if last_frame_rate != Some(clock.frame_rate()) {
                last_frame_rate = Some(clock.frame_rate());
                out.execute(terminal::SetTitle(title(&world.session, clock.frame_rate())))?;
            }

            let input = keys.sample(frame);
            for action in actions {
                apply_action(&mut world, action);
            }
            let outcome = advance_frame(
                &mut world,
                &input,
                clock.time_elapsed(),
                &mut ai,
                &mut buffer,
                &assets.background,
                &config.save_file,
            );
            for cue in outcome.cues {
                sink.play(cue);
            }

            draw_hud(&mut buffer, &world.session, clock.frame_rate());
            buffer.present(out)?;
            if sink.take_bell() {
                out.queue(Print('\x07'))?;
                out.flush()?;
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < config.frame {
            thread::sleep(config.frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = GameConfig::from(Args::parse());
    init_logging(&config)?;

    // Missing art is fatal, and reported before the terminal changes mode.
    let assets = load_assets(&config.assets_dir).context(
        "Failed to initialize properly. Check that the assets directory contains background.txt",
    )?;
    tracing::info!(?config, "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableFocusChange)?;

    // Release events plus bare modifier keys (Ctrl fires for player two).
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES,
        ))
        .is_ok();

    // Blocking reads live on their own thread; the loop only polls the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx, &config, &assets);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableFocusChange);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}
