//! The 7x5 puzzle board.
//!
//! Cells are addressed with `IVec2` (x = column, y = row). Every access goes
//! through [`Board::index`], so an out-of-range cell reads as `None` instead
//! of touching a neighbouring row.

use glam::{IVec2, Vec2};
use rand::Rng;

use crate::levels::Level;

pub const COLUMNS: i32 = 7;
pub const ROWS: i32 = 5;
pub const MAP_SIZE: usize = (COLUMNS * ROWS) as usize;

pub const TILE_SIDE: f32 = 200.0;
pub const TILE_MARGIN: f32 = 8.0;
pub const BOARD_OFFSET: f32 = 24.0;

/// Move directions, clockwise from left. The order matches the mover tile
/// codes 6..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::new(-1, 0),
            Direction::Up => IVec2::new(0, -1),
            Direction::Right => IVec2::new(1, 0),
            Direction::Down => IVec2::new(0, 1),
        }
    }

    /// Up and right moves spin the player counter-clockwise.
    pub fn flips(self) -> bool {
        matches!(self, Direction::Up | Direction::Right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// Plain walkable floor, shade 1..=3.
    Floor(u8),
    Blocked,
    Ice,
    Mover(Direction),
    /// Turns into `Blocked` once the player steps off it.
    Crumbling,
}

impl Tile {
    pub fn from_code(code: u8) -> Tile {
        match code {
            0 => Tile::Empty,
            1..=3 => Tile::Floor(code),
            4 => Tile::Blocked,
            5 => Tile::Ice,
            6 => Tile::Mover(Direction::Left),
            7 => Tile::Mover(Direction::Up),
            8 => Tile::Mover(Direction::Right),
            9 => Tile::Mover(Direction::Down),
            10 => Tile::Crumbling,
            other => {
                log::warn!("Unknown tile code {other}, treating as empty");
                Tile::Empty
            }
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Tile::Empty => 0,
            Tile::Floor(shade) => shade,
            Tile::Blocked => 4,
            Tile::Ice => 5,
            Tile::Mover(Direction::Left) => 6,
            Tile::Mover(Direction::Up) => 7,
            Tile::Mover(Direction::Right) => 8,
            Tile::Mover(Direction::Down) => 9,
            Tile::Crumbling => 10,
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Empty | Tile::Blocked)
    }

    /// Tiles that push the player on instead of letting it rest.
    #[cfg(test)]
    pub fn forces_move(self) -> bool {
        matches!(self, Tile::Ice | Tile::Mover(_))
    }
}

/// Top-left pixel of a board cell.
pub fn cell_position(cell: IVec2) -> Vec2 {
    Vec2::new(
        BOARD_OFFSET + cell.x as f32 * (TILE_SIDE + TILE_MARGIN),
        BOARD_OFFSET + cell.y as f32 * (TILE_SIDE + TILE_MARGIN),
    )
}

/// Floor shade roll: mostly 1, sometimes 2, rarely 3.
pub fn random_shade<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let roll: u32 = rng.gen_range(0..100);
    if roll > 85 {
        3
    } else if roll > 70 {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    tiles: [Tile; MAP_SIZE],
    hats: [bool; MAP_SIZE],
    remaining_hats: u32,
}

impl Board {
    pub fn from_level<R: Rng + ?Sized>(level: &Level, rng: &mut R) -> Self {
        let mut tiles = [Tile::Empty; MAP_SIZE];
        for (tile, &code) in tiles.iter_mut().zip(level.tiles.iter()) {
            *tile = match Tile::from_code(code) {
                Tile::Floor(_) => Tile::Floor(random_shade(rng)),
                other => other,
            };
        }

        let mut hats = [false; MAP_SIZE];
        let mut remaining_hats = 0;
        for &cell in level.hats {
            match Self::index(cell) {
                Some(i) if !hats[i] => {
                    hats[i] = true;
                    remaining_hats += 1;
                }
                Some(_) => {}
                None => log::warn!("Ignoring hat outside the board at {cell}"),
            }
        }

        Self {
            tiles,
            hats,
            remaining_hats,
        }
    }

    pub fn index(cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.x >= COLUMNS || cell.y < 0 || cell.y >= ROWS {
            return None;
        }
        Some((cell.y * COLUMNS + cell.x) as usize)
    }

    pub fn tile(&self, cell: IVec2) -> Option<Tile> {
        Self::index(cell).map(|i| self.tiles[i])
    }

    pub fn set_tile(&mut self, cell: IVec2, tile: Tile) {
        if let Some(i) = Self::index(cell) {
            self.tiles[i] = tile;
        }
    }

    pub fn is_walkable(&self, cell: IVec2) -> bool {
        self.tile(cell).is_some_and(Tile::is_walkable)
    }

    /// Pick up the hat on `cell`, if any.
    pub fn take_hat(&mut self, cell: IVec2) -> bool {
        let Some(i) = Self::index(cell) else {
            return false;
        };
        if !self.hats[i] {
            return false;
        }
        self.hats[i] = false;
        self.remaining_hats -= 1;
        true
    }

    pub fn remaining_hats(&self) -> u32 {
        self.remaining_hats
    }

    /// Called when the player leaves `cell`.
    pub fn crumble(&mut self, cell: IVec2) {
        if self.tile(cell) == Some(Tile::Crumbling) {
            self.set_tile(cell, Tile::Blocked);
        }
    }

    /// Re-roll the shade of every floor tile.
    pub fn reshade<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for tile in self.tiles.iter_mut() {
            if let Tile::Floor(_) = tile {
                *tile = Tile::Floor(random_shade(rng));
            }
        }
    }

    /// Every cell in row-major order with its tile and hat flag.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, Tile, bool)> + '_ {
        (0..MAP_SIZE).map(move |i| {
            let cell = IVec2::new(i as i32 % COLUMNS, i as i32 / COLUMNS);
            (cell, self.tiles[i], self.hats[i])
        })
    }
}
