use std::time::Duration;

use crossterm::style::Color;

use sky_duel::assets::Background;
use sky_duel::compute::init_world;
use sky_duel::display::*;
use sky_duel::entities::{EntityKind, Facing, MovingEntity, Session};
use sky_duel::timer::{FrameClock, Ticker};
use sky_duel::vector::Vec2;

// ── Back-buffer ───────────────────────────────────────────────────────────────

#[test]
fn put_clips_out_of_bounds() {
    let mut b = BackBuffer::new(10, 5);
    b.put(-1, 0, 'x', Color::White);
    b.put(10, 0, 'x', Color::White);
    b.put(3, 2, 'x', Color::White);
    assert_eq!(b.cell(3, 2).unwrap().ch, 'x');
    assert!(b.cell(10, 0).is_none());
}

#[test]
fn reset_clears_every_cell() {
    let mut b = BackBuffer::new(10, 5);
    b.put_str(0, 0, "hello", Color::White);
    b.reset();
    for col in 0..10 {
        assert_eq!(b.cell(col, 0).unwrap().ch, ' ');
    }
}

#[test]
fn world_maps_onto_playfield_rows() {
    let b = BackBuffer::new(80, 24);
    assert_eq!(b.world_to_cell(Vec2::new(0.0, 0.0)), (0, 1));
    assert_eq!(b.world_to_cell(Vec2::new(400.0, 300.0)), (40, 12));
}

#[test]
fn resize_replaces_the_surface() {
    let mut b = BackBuffer::new(10, 5);
    b.resize(20, 8);
    assert_eq!((b.cols(), b.rows()), (20, 8));
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[test]
fn idle_plane_is_drawn_centred() {
    let mut b = BackBuffer::new(80, 24);
    let p = MovingEntity::new(EntityKind::Player, Vec2::new(400.0, 300.0));
    draw_entity(&mut b, &p, Color::White);
    assert_eq!(b.cell(40, 11).unwrap().ch, '▲');
}

#[test]
fn exploding_entity_draws_explosion_instead() {
    let mut b = BackBuffer::new(80, 24);
    let mut p = MovingEntity::new(EntityKind::Player, Vec2::new(400.0, 300.0));
    p.explode();
    draw_entity(&mut b, &p, Color::White);
    assert_eq!(b.cell(40, 12).unwrap().ch, '*');
    assert_ne!(b.cell(40, 11).unwrap().ch, '▲');
}

#[test]
fn bullets_are_hidden_until_fired() {
    let mut b = BackBuffer::new(80, 24);
    let mut p = MovingEntity::new(EntityKind::Player, Vec2::new(400.0, 300.0));
    p.bullets.as_mut().unwrap().slots[0].position = Vec2::new(100.0, 100.0);
    let (col, row) = b.world_to_cell(Vec2::new(100.0, 100.0));

    draw_entity(&mut b, &p, Color::White);
    assert_eq!(b.cell(col, row).unwrap().ch, ' ');

    p.bullets.as_mut().unwrap().in_flight = true;
    draw_entity(&mut b, &p, Color::White);
    assert_eq!(b.cell(col, row).unwrap().ch, '║');
}

#[test]
fn facing_changes_the_glyphs() {
    let mut b = BackBuffer::new(80, 24);
    let mut p = MovingEntity::new(EntityKind::Player, Vec2::new(400.0, 300.0));
    p.face(Facing::Down);
    draw_entity(&mut b, &p, Color::White);
    assert_eq!(b.cell(40, 13).unwrap().ch, '▼');
}

#[test]
fn world_frame_contains_hint_and_hud() {
    let mut b = BackBuffer::new(120, 30);
    let world = init_world();
    let bg = Background::from_text("  .  ").unwrap();
    draw_world(&mut b, &world, &bg);
    draw_hud(&mut b, &world.session, 60);

    let row0: String = (0..120).map(|c| b.cell(c, 0).unwrap().ch).collect();
    assert!(row0.contains("Score:"));
    assert!(row0.contains("60 FPS"));
    assert!(row0.contains("Lives: 10"));

    let last: String = (0..120).map(|c| b.cell(c, 29).unwrap().ch).collect();
    assert!(last.contains("ESC : Quit"));
}

#[test]
fn present_emits_the_buffer_text() {
    let mut b = BackBuffer::new(40, 6);
    draw_hud(&mut b, &Session::default(), 30);
    let mut out: Vec<u8> = Vec::new();
    b.present(&mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("Lives: 10"));
}

#[test]
fn title_reports_rate_lives_and_score() {
    let s = Session { lives: 9, score: 3 };
    assert_eq!(title(&s, 58), "Game : 58 FPS  Lives: 9  Score:3");
}

// ── Timers ────────────────────────────────────────────────────────────────────

#[test]
fn stopped_ticker_never_fires() {
    let mut t = Ticker::new(0.25);
    assert_eq!(t.advance(10.0), 0);
}

#[test]
fn ticker_counts_whole_periods() {
    let mut t = Ticker::new(0.25);
    t.start();
    assert_eq!(t.advance(0.6), 2);
    assert_eq!(t.advance(0.2), 1);
    t.stop();
    assert_eq!(t.advance(1.0), 0);
}

#[test]
fn frame_clock_reports_rate_each_second() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.frame_rate(), 0);
    for _ in 0..4 {
        clock.advance(Duration::from_millis(250));
    }
    assert_eq!(clock.frame_rate(), 4);
    assert_eq!(clock.time_elapsed(), 0.25);
}
