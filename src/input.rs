/// Keyboard polling on top of a terminal event stream.
///
/// Terminals deliver key events, not key state. `KeyState` records the frame
/// on which each key was last pressed or repeated, and treats a key as held
/// while that record is fresh:
/// * Keyboard-enhancement terminals (kitty protocol) send `Release`, which
///   drops the key immediately.
/// * Classic terminals only send repeated `Press` events; keys expire after
///   `HOLD_WINDOW` frames of silence, which is shorter than the OS repeat
///   interval.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

use crate::entities::{Direction, Facing};

/// Frames a key stays "held" after its last press/repeat event.
pub const HOLD_WINDOW: u64 = 4;

/// Edge-triggered actions, handled once per key press (and OS repeat).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    PlayerShoot,
    Player2Shoot,
    ExplodePlayer,
    ExplodePlayer2,
}

/// Level-triggered input sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub player: Direction,
    pub player2: Direction,
    pub facing: Option<Facing>,
    pub save: bool,
    pub load: bool,
}

#[derive(Debug, Default)]
pub struct KeyState {
    key_frame: HashMap<KeyCode, u64>,
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key event seen during `frame`. Returns the edge-triggered
    /// action it maps to, if any.
    pub fn handle(&mut self, event: KeyEvent, frame: u64) -> Option<Action> {
        let code = normalize(event.code);
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(code, frame);
                action_for(code, event.modifiers)
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
                None
            }
        }
    }

    pub fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&normalize(code))
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Sample everything the frame polls as key state.
    pub fn sample(&self, frame: u64) -> FrameInput {
        let held = |code| self.is_held(code, frame);

        let mut player = Direction::NONE;
        if held(KeyCode::Up) {
            player |= Direction::FORWARD;
        }
        if held(KeyCode::Down) {
            player |= Direction::BACKWARD;
        }
        if held(KeyCode::Left) {
            player |= Direction::LEFT;
        }
        if held(KeyCode::Right) {
            player |= Direction::RIGHT;
        }

        let mut player2 = Direction::NONE;
        if held(KeyCode::Char('w')) {
            player2 |= Direction::FORWARD;
        }
        if held(KeyCode::Char('s')) {
            player2 |= Direction::BACKWARD;
        }
        if held(KeyCode::Char('a')) {
            player2 |= Direction::LEFT;
        }
        if held(KeyCode::Char('d')) {
            player2 |= Direction::RIGHT;
        }

        // Later keys win, matching the order the sprite swaps are applied.
        let facing = [
            ('4', Facing::Left),
            ('2', Facing::Down),
            ('6', Facing::Right),
            ('8', Facing::Up),
        ]
        .into_iter()
        .filter(|(c, _)| held(KeyCode::Char(*c)))
        .map(|(_, f)| f)
        .last();

        FrameInput {
            player,
            player2,
            facing,
            save: held(KeyCode::Char('m')),
            load: held(KeyCode::Char('l')),
        }
    }
}

fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::PlayerShoot),
        KeyCode::Modifier(ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl) => {
            Some(Action::Player2Shoot)
        }
        KeyCode::Enter => Some(Action::ExplodePlayer),
        KeyCode::Char('q') => Some(Action::ExplodePlayer2),
        _ => None,
    }
}
