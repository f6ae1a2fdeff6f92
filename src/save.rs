/// Save / load of the two players' positions.
///
/// The file holds two lines, `x y` for player one then player two. Nothing
/// else (lives, score, explosions) is persisted.

use std::fs;
use std::path::Path;

use crate::entities::World;
use crate::error::GameError;
use crate::vector::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SavedPositions {
    pub player: Vec2,
    pub player2: Vec2,
}

impl SavedPositions {
    pub fn capture(world: &World) -> Self {
        SavedPositions {
            player: world.player.position(),
            player2: world.player2.position(),
        }
    }

    pub fn apply(&self, world: &mut World) {
        world.player.sprite.position = self.player;
        world.player2.sprite.position = self.player2;
    }
}

pub fn write_positions(path: &Path, positions: &SavedPositions) -> Result<(), GameError> {
    let text = format!(
        "{} {}\n{} {}\n",
        positions.player.x, positions.player.y, positions.player2.x, positions.player2.y
    );
    fs::write(path, text).map_err(|source| GameError::SaveWrite {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_positions(path: &Path) -> Result<SavedPositions, GameError> {
    let text = fs::read_to_string(path).map_err(|source| GameError::SaveRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_positions(&text).map_err(|detail| GameError::SaveFormat {
        path: path.to_path_buf(),
        detail,
    })
}

fn parse_positions(text: &str) -> Result<SavedPositions, String> {
    let values = text
        .split_whitespace()
        .take(4)
        .map(|tok| tok.parse::<f64>().map_err(|e| format!("{tok:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match values.as_slice() {
        [x1, y1, x2, y2] => Ok(SavedPositions {
            player: Vec2::new(*x1, *y1),
            player2: Vec2::new(*x2, *y2),
        }),
        other => Err(format!("expected 4 numbers, found {}", other.len())),
    }
}

pub fn save_world(path: &Path, world: &World) -> Result<(), GameError> {
    write_positions(path, &SavedPositions::capture(world))
}

pub fn load_into_world(path: &Path, world: &mut World) -> Result<(), GameError> {
    read_positions(path)?.apply(world);
    Ok(())
}
