/// Rendering layer — the back-buffer and everything drawn into it.
///
/// Entities draw into a `BackBuffer` of character cells; the host presents
/// it once per frame. World coordinates (800×600) are scaled onto the
/// playfield rows between the HUD (row 0) and the controls hint (last row).

mod sprites;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::assets::Background;
use crate::entities::{MovingEntity, Session, SpriteSet, World, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::vector::Vec2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_FPS: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::White;
const C_PLAYER2: Color = Color::Cyan;
const C_ENEMY: Color = Color::Green;
const C_CRATE: Color = Color::DarkYellow;
const C_HEART: Color = Color::Magenta;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_EXPLOSION: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

const CONTROLS_HINT: &str =
    "←↑↓→ / WASD : Move   SPACE / CTRL : Shoot   2468 : Turn   M/L : Save/Load   ESC : Quit";

// ── Back-buffer ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

/// Off-screen character surface, presented once per frame.
#[derive(Clone, Debug)]
pub struct BackBuffer {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl BackBuffer {
    pub fn new(cols: u16, rows: u16) -> Self {
        BackBuffer {
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        if (cols, rows) != (self.cols, self.rows) {
            *self = BackBuffer::new(cols, rows);
        }
    }

    pub fn reset(&mut self) {
        self.cells.fill(BLANK);
    }

    pub fn cell(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|i| self.cells[i])
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            None
        } else {
            Some(row as usize * self.cols as usize + col as usize)
        }
    }

    /// Write one glyph; out-of-bounds writes are clipped.
    pub fn put(&mut self, col: i32, row: i32, ch: char, color: Color) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = Cell { ch, color };
        }
    }

    /// Write a string left to right. Spaces are transparent.
    pub fn put_str(&mut self, col: i32, row: i32, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            if ch != ' ' {
                self.put(col + i as i32, row, ch, color);
            }
        }
    }

    /// Text rows available to the playfield.
    fn playfield_rows(&self) -> i32 {
        (self.rows as i32 - 2).max(1)
    }

    /// Map a world position onto a cell.
    pub fn world_to_cell(&self, pos: Vec2) -> (i32, i32) {
        let col = (pos.x / SCREEN_WIDTH * self.cols as f64).floor() as i32;
        let row = 1 + (pos.y / SCREEN_HEIGHT * self.playfield_rows() as f64).floor() as i32;
        (col, row)
    }

    /// Draw multi-line art centred on a world position, clipped to the
    /// playfield.
    pub fn draw_art(&mut self, center: Vec2, art: &[&str], color: Color) {
        let (col, row) = self.world_to_cell(center);
        let width = art.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
        let top = row - art.len() as i32 / 2;
        let left = col - width / 2;
        let last_row = self.playfield_rows();
        for (i, line) in art.iter().enumerate() {
            let r = top + i as i32;
            if (1..=last_row).contains(&r) {
                self.put_str(left, r, line, color);
            }
        }
    }

    /// Queue the whole buffer as terminal commands and flush.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            let line = &self.cells[start..start + self.cols as usize];

            // Batch runs of one colour into a single Print.
            let mut run = String::new();
            let mut run_color = Color::Reset;
            // Blanks take whatever colour the run already has.
            for cell in line {
                if cell.ch != ' ' && cell.color != run_color {
                    if !run.is_empty() {
                        out.queue(style::SetForegroundColor(run_color))?;
                        out.queue(Print(&run))?;
                        run.clear();
                    }
                    run_color = cell.color;
                }
                run.push(cell.ch);
            }
            if !run.is_empty() {
                out.queue(style::SetForegroundColor(run_color))?;
                out.queue(Print(&run))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        out.flush()
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Clear the buffer and draw background, entities and the controls hint.
pub fn draw_world(buffer: &mut BackBuffer, world: &World, background: &Background) {
    buffer.reset();
    draw_background(buffer, background, world.background_offset);

    draw_entity(buffer, &world.player, C_PLAYER);
    draw_entity(buffer, &world.player2, C_PLAYER2);
    for crate_ in &world.crates {
        draw_entity(buffer, crate_, C_CRATE);
    }
    draw_entity(buffer, &world.enemy, C_ENEMY);
    draw_entity(buffer, &world.heart, C_HEART);

    draw_controls_hint(buffer);
}

/// Tile the background art over the playfield, shifted down by `offset`
/// world units.
fn draw_background(buffer: &mut BackBuffer, background: &Background, offset: f64) {
    let height = background.height() as i64;
    if height == 0 {
        return;
    }
    let rows = buffer.playfield_rows();
    let shift = (offset / SCREEN_HEIGHT * rows as f64).floor() as i64;
    for r in 0..rows {
        let src = (r as i64 - shift).rem_euclid(height) as usize;
        buffer.put_str(0, r + 1, &background.rows[src], C_BACKGROUND);
    }
}

/// Draw one entity: bullets (while the shooter is intact), then either the
/// sprite or its explosion.
pub fn draw_entity(buffer: &mut BackBuffer, entity: &MovingEntity, color: Color) {
    if let Some(bullets) = &entity.bullets {
        if bullets.in_flight && !entity.is_exploding() {
            let glyph = sprites::bullet(bullets.cannon.direction);
            let bullet_color = match entity.config.sprite {
                SpriteSet::Raider => C_BULLET_ENEMY,
                _ => C_BULLET_PLAYER,
            };
            for slot in &bullets.slots {
                buffer.draw_art(slot.position, &[glyph], bullet_color);
            }
        }
    }

    if entity.is_exploding() {
        let art = sprites::explosion(entity.explosion.frame, entity.explosion.frame_count);
        buffer.draw_art(entity.explosion.position, art, C_EXPLOSION);
    } else {
        let art = sprites::art(entity.config.sprite, entity.facing);
        buffer.draw_art(entity.position(), art, color);
    }
}

// ── HUD (row 0) and hint (last row) ───────────────────────────────────────────

pub fn draw_hud(buffer: &mut BackBuffer, session: &Session, frame_rate: u32) {
    let score = format!("Score: {:>6}", session.score);
    buffer.put_str(1, 0, &score, C_HUD_SCORE);

    let fps = format!("{frame_rate} FPS");
    let fx = (buffer.cols() as i32 / 2) - fps.chars().count() as i32 / 2;
    buffer.put_str(fx, 0, &fps, C_HUD_FPS);

    let lives = format!("Lives: {}", session.lives);
    let lx = buffer.cols() as i32 - lives.chars().count() as i32 - 1;
    buffer.put_str(lx, 0, &lives, C_HUD_LIVES);
}

fn draw_controls_hint(buffer: &mut BackBuffer) {
    let row = buffer.rows() as i32 - 1;
    buffer.put_str(1, row, CONTROLS_HINT, C_HINT);
}

/// Window title text shown by the host.
pub fn title(session: &Session, frame_rate: u32) -> String {
    format!(
        "Game : {frame_rate} FPS  Lives: {}  Score:{}",
        session.lives, session.score
    )
}
