//! Snake body: an ordered, head-first run of grid cells.

use std::collections::VecDeque;

use crate::types::{Cell, Direction};

/// The snake's body segments, head first.
///
/// Never empty during play. Membership checks are linear scans; the body
/// caps out at 400 segments on a full board, which is well below the point
/// where a shadow set would pay for itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A single-segment snake at the given cell.
    pub fn new(head: Cell) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(head);
        Self { body }
    }

    pub fn head(&self) -> Cell {
        // Invariant: the body is never empty.
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether any segment occupies the given cell.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Advance one cell in `dir`, keeping length constant.
    pub fn advance(&mut self, dir: Direction) {
        self.body.push_front(self.head().step(dir));
        self.body.pop_back();
    }

    /// Advance one cell in `dir` without dropping the tail (growth).
    pub fn grow(&mut self, dir: Direction) {
        self.body.push_front(self.head().step(dir));
    }

    /// Segments in order, head first.
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_single_segment() {
        let snake = Snake::new(Cell::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(10, 10));
        assert!(snake.occupies(Cell::new(10, 10)));
        assert!(!snake.occupies(Cell::new(9, 10)));
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new(Cell::new(5, 5));
        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert!(!snake.occupies(Cell::new(5, 5)));
    }

    #[test]
    fn test_grow_adds_segment() {
        let mut snake = Snake::new(Cell::new(5, 5));
        snake.grow(Direction::Right);
        snake.grow(Direction::Right);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(7, 5));
        // The original cell is now the tail.
        assert!(snake.occupies(Cell::new(5, 5)));
    }

    #[test]
    fn test_segments_head_first() {
        let mut snake = Snake::new(Cell::new(3, 3));
        snake.grow(Direction::Down);
        snake.grow(Direction::Down);
        let cells: Vec<Cell> = snake.segments().collect();
        assert_eq!(
            cells,
            vec![Cell::new(3, 5), Cell::new(3, 4), Cell::new(3, 3)]
        );
    }
}
