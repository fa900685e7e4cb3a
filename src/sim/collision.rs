//! Collision detection for the committed head cell
//!
//! All checks run once per tick against integer cells; the continuous head
//! coordinate never participates. Wall and self collisions kill the snake,
//! a food collision only flags it as eating.

use glam::IVec2;

use super::grid::Board;

/// Head cell outside the board rectangle (bounds themselves are legal)
#[inline]
pub fn hits_wall(board: &Board, head: IVec2) -> bool {
    !board.contains(head)
}

/// Head cell revisits its own body
///
/// The head entry itself and the current tail are excluded: the tail vacates
/// its cell on the same tick the head would occupy it.
pub fn hits_own_body(segments: &[IVec2]) -> bool {
    let Some((&head, rest)) = segments.split_first() else {
        return false;
    };
    let interior = &rest[..rest.len().saturating_sub(1)];
    interior.contains(&head)
}

/// Head cell on the food cell
#[inline]
pub fn hits_food(head: IVec2, food: IVec2) -> bool {
    head == food
}
