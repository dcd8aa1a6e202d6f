use super::direction::Direction;

/// Default side length of the square board, in cells
pub const GRID_SIZE: usize = 20;

/// Largest board side accepted from configuration
pub const MAX_GRID_SIZE: usize = 255;

/// Width of one board cell in terminal columns
pub const CELL_WIDTH: u16 = 2;

/// Height of one board cell in terminal rows
pub const CELL_HEIGHT: u16 = 1;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Square board geometry. Carries no game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        let size = i32::try_from(self.size).unwrap_or(i32::MAX);
        pos.x >= 0 && pos.x < size && pos.y >= 0 && pos.y < size
    }

    /// Cell the snake starts from
    pub fn center(&self) -> Position {
        let half = (self.size / 2) as i32;
        Position::new(half, half)
    }

    /// Top-left corner of a cell in screen units, `(x * cell_width, y * cell_height)`.
    /// Saturates at `u16::MAX`; negative coordinates map there too.
    pub fn cell_origin(&self, pos: Position, cell_width: u16, cell_height: u16) -> (u16, u16) {
        let scale = |coord: i32, cell: u16| {
            u16::try_from(coord)
                .unwrap_or(u16::MAX)
                .saturating_mul(cell)
        };
        (scale(pos.x, cell_width), scale(pos.y, cell_height))
    }

    /// Board side in screen units including a one-cell border on each side
    pub fn screen_extent(&self, cell: u16) -> u16 {
        u16::try_from(self.size)
            .unwrap_or(u16::MAX)
            .saturating_mul(cell)
            .saturating_add(2)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}
