use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

use sky_duel::entities::{Direction, Facing};
use sky_duel::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

#[test]
fn arrows_drive_player_one() {
    let mut keys = KeyState::new();
    keys.handle(press(KeyCode::Up), 1);
    keys.handle(press(KeyCode::Left), 1);
    let input = keys.sample(1);
    assert_eq!(input.player, Direction::FORWARD | Direction::LEFT);
    assert!(input.player2.is_empty());
}

#[test]
fn wasd_drives_player_two_in_either_case() {
    let mut keys = KeyState::new();
    keys.handle(press(KeyCode::Char('W')), 1);
    keys.handle(press(KeyCode::Char('d')), 1);
    let input = keys.sample(1);
    assert_eq!(input.player2, Direction::FORWARD | Direction::RIGHT);
    assert!(input.player.is_empty());
}

#[test]
fn key_stays_held_for_the_hold_window() {
    let mut keys = KeyState::new();
    keys.handle(press(KeyCode::Down), 10);
    assert!(keys.is_held(KeyCode::Down, 10 + HOLD_WINDOW));
    assert!(!keys.is_held(KeyCode::Down, 11 + HOLD_WINDOW));
}

#[test]
fn repeat_refreshes_and_release_drops() {
    let mut keys = KeyState::new();
    keys.handle(press(KeyCode::Right), 1);
    keys.handle(
        KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Repeat),
        8,
    );
    assert!(keys.is_held(KeyCode::Right, 10));

    keys.handle(release(KeyCode::Right), 10);
    assert!(!keys.is_held(KeyCode::Right, 10));
}

#[test]
fn one_shot_actions() {
    let mut keys = KeyState::new();
    assert_eq!(keys.handle(press(KeyCode::Char(' ')), 1), Some(Action::PlayerShoot));
    assert_eq!(
        keys.handle(press(KeyCode::Modifier(ModifierKeyCode::LeftControl)), 1),
        Some(Action::Player2Shoot)
    );
    assert_eq!(keys.handle(press(KeyCode::Enter), 1), Some(Action::ExplodePlayer));
    assert_eq!(keys.handle(press(KeyCode::Char('Q')), 1), Some(Action::ExplodePlayer2));
    assert_eq!(keys.handle(press(KeyCode::Esc), 1), Some(Action::Quit));
    assert_eq!(
        keys.handle(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), 1),
        Some(Action::Quit)
    );
    assert_eq!(keys.handle(press(KeyCode::Up), 1), None);
    assert_eq!(keys.handle(release(KeyCode::Char(' ')), 1), None);
}

#[test]
fn numpad_digits_select_facing() {
    let mut keys = KeyState::new();
    assert_eq!(keys.sample(1).facing, None);

    keys.handle(press(KeyCode::Char('4')), 1);
    assert_eq!(keys.sample(1).facing, Some(Facing::Left));

    keys.handle(press(KeyCode::Char('8')), 1);
    assert_eq!(keys.sample(1).facing, Some(Facing::Up));
}

#[test]
fn save_and_load_keys_are_level_triggered() {
    let mut keys = KeyState::new();
    keys.handle(press(KeyCode::Char('M')), 3);
    let input = keys.sample(4);
    assert!(input.save);
    assert!(!input.load);

    keys.handle(press(KeyCode::Char('l')), 4);
    assert!(keys.sample(5).load);
    assert!(!keys.sample(3 + HOLD_WINDOW + 1).save);
}
