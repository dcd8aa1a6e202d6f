use super::grid::Position;

/// Type of collision that ends a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Returns true if `pos` is one of the cells in `body`
pub fn occupied(pos: Position, body: &[Position]) -> bool {
    body.contains(&pos)
}
