use std::collections::VecDeque;

use crate::board::{Direction, Pos, Size};
use crate::render::{Drawable, Renderer, BOARD_BACKGROUND_COLOR, SNAKE_COLOR};

/// Segments right behind the head that never count as a collision.
///
/// Only cells at this body index or later are compared against the head.
pub const COLLISION_GRACE_SEGMENTS: usize = 4;

#[derive(Debug)]
pub struct Snake {
    grid: Size,
    /// Head first.
    body: VecDeque<Pos>,
    length: usize,
    heading: Direction,
    pending_heading: Option<Direction>,
    /// Tail cell dropped by the last move, kept so the renderer can erase it.
    trimmed: Option<Pos>,
}

impl Snake {
    pub fn new(grid: Size) -> Self {
        Snake {
            grid,
            body: VecDeque::from([grid.center()]),
            length: 1,
            heading: Direction::Right,
            pending_heading: None,
            trimmed: None,
        }
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Pos> {
        &self.body
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending_heading
    }

    pub fn trimmed(&self) -> Option<Pos> {
        self.trimmed
    }

    /// Queues a turn for the next `apply_heading`.
    ///
    /// A turn straight back into the neck is dropped. Otherwise the new turn
    /// replaces whatever was queued before.
    pub fn set_pending_heading(&mut self, direction: Direction) -> bool {
        if direction == self.heading.opposite() {
            return false;
        }
        self.pending_heading = Some(direction);
        true
    }

    pub fn apply_heading(&mut self) {
        if let Some(direction) = self.pending_heading.take() {
            self.heading = direction;
        }
    }

    /// Moves one cell along the current heading, wrapping at the board edges.
    pub fn advance(&mut self) {
        let new_head = self.head().wrapped_add(self.heading.into(), self.grid);
        self.body.push_front(new_head);

        self.trimmed = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.trimmed == Some(head)
            || self
                .body
                .iter()
                .skip(COLLISION_GRACE_SEGMENTS)
                .any(|&segment| segment == head)
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.grid.center());
        self.length = 1;
        self.heading = Direction::Right;
        self.pending_heading = None;
        self.trimmed = None;
    }
}

impl Drawable for Snake {
    fn draw(&self, renderer: &mut dyn Renderer) {
        for &segment in &self.body {
            renderer.draw_cell(segment, SNAKE_COLOR, true);
        }

        if let Some(vacated) = self.trimmed {
            renderer.draw_cell(vacated, BOARD_BACKGROUND_COLOR, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rgb;
    use std::io;

    const GRID: Size = Size {
        width: 32,
        height: 24,
    };

    const SMALL_GRID: Size = Size {
        width: 8,
        height: 8,
    };

    fn turn(snake: &mut Snake, direction: Direction) {
        assert!(snake.set_pending_heading(direction));
        snake.apply_heading();
    }

    #[test]
    fn test_new_snake() {
        let snake = Snake::new(GRID);
        assert_eq!(snake.body(), &VecDeque::from([Pos::new(16, 12)]));
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.pending_heading(), None);
        assert_eq!(snake.trimmed(), None);
    }

    #[test]
    fn test_advance_moves_head_and_trims_tail() {
        let mut snake = Snake::new(GRID);
        snake.advance();

        assert_eq!(snake.head(), Pos::new(17, 12));
        assert_eq!(snake.body().len(), 1);
        assert_eq!(snake.trimmed(), Some(Pos::new(16, 12)));
    }

    #[test]
    fn test_advance_wraps_right_edge_to_zero() {
        let mut snake = Snake::new(GRID);
        for _ in 0..15 {
            snake.advance();
        }
        assert_eq!(snake.head(), Pos::new(31, 12));

        snake.advance();
        assert_eq!(snake.head(), Pos::new(0, 12));
    }

    #[test]
    fn test_advance_stays_on_board_in_every_direction() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut snake = Snake::new(GRID);
            if direction != Direction::Left {
                turn(&mut snake, direction);
            } else {
                turn(&mut snake, Direction::Up);
                turn(&mut snake, Direction::Left);
            }
            for _ in 0..(GRID.width + GRID.height) {
                snake.advance();
                assert!(GRID.contains(snake.head()));
            }
        }
    }

    #[test]
    fn test_length_holds_without_growth() {
        let mut snake = Snake::new(GRID);
        snake.grow();
        snake.grow();
        for _ in 0..2 {
            snake.advance();
        }
        assert_eq!(snake.body().len(), 3);

        for _ in 0..50 {
            snake.advance();
            assert_eq!(snake.body().len(), snake.length());
        }
    }

    #[test]
    fn test_growth_adds_exactly_one_segment() {
        let mut snake = Snake::new(GRID);
        for _ in 0..5 {
            snake.advance();
        }
        assert_eq!(snake.body().len(), 1);

        snake.grow();
        snake.advance();
        assert_eq!(snake.body().len(), 2);
        assert_eq!(snake.trimmed(), None);

        for _ in 0..5 {
            snake.advance();
            assert_eq!(snake.body().len(), 2);
        }
    }

    #[test]
    fn test_grow_does_not_move() {
        let mut snake = Snake::new(GRID);
        snake.grow();
        assert_eq!(snake.length(), 2);
        assert_eq!(snake.body().len(), 1);
        assert_eq!(snake.head(), GRID.center());
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut snake = Snake::new(GRID);
        assert!(!snake.set_pending_heading(Direction::Left));
        assert_eq!(snake.pending_heading(), None);

        assert!(snake.set_pending_heading(Direction::Up));
        assert_eq!(snake.pending_heading(), Some(Direction::Up));

        // Still measured against the current heading, not the queued one
        assert!(!snake.set_pending_heading(Direction::Left));
        assert_eq!(snake.pending_heading(), Some(Direction::Up));

        assert!(snake.set_pending_heading(Direction::Down));
        assert_eq!(snake.pending_heading(), Some(Direction::Down));
    }

    #[test]
    fn test_apply_heading_consumes_pending() {
        let mut snake = Snake::new(GRID);
        snake.set_pending_heading(Direction::Down);
        snake.apply_heading();
        assert_eq!(snake.heading(), Direction::Down);
        assert_eq!(snake.pending_heading(), None);

        snake.apply_heading();
        assert_eq!(snake.heading(), Direction::Down);
    }

    #[test]
    fn test_no_collision_on_straight_line() {
        let mut snake = Snake::new(GRID);
        for _ in 0..6 {
            snake.grow();
        }
        for _ in 0..10 {
            snake.advance();
            assert!(!snake.check_self_collision());
        }
    }

    #[test]
    fn test_tight_loop_collides_and_resets() {
        let mut snake = Snake::new(SMALL_GRID);
        for _ in 0..5 {
            snake.grow();
        }
        for _ in 0..5 {
            snake.advance();
        }
        assert_eq!(snake.length(), 6);
        assert_eq!(snake.body().len(), 6);
        assert_eq!(snake.head(), Pos::new(1, 4));

        turn(&mut snake, Direction::Down);
        snake.advance();
        assert!(!snake.check_self_collision());
        turn(&mut snake, Direction::Left);
        snake.advance();
        assert!(!snake.check_self_collision());
        turn(&mut snake, Direction::Up);
        snake.advance();

        assert_eq!(snake.head(), Pos::new(0, 4));
        assert_eq!(snake.body()[4], Pos::new(0, 4));
        assert!(snake.check_self_collision());

        snake.reset();
        assert_eq!(snake.body(), &VecDeque::from([Pos::new(4, 4)]));
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.pending_heading(), None);
    }

    #[test]
    fn test_collision_with_trimmed_tail() {
        // A four segment snake circling a 2x2 square lands on the cell its tail just left
        let mut snake = Snake::new(SMALL_GRID);
        for _ in 0..3 {
            snake.grow();
        }
        for _ in 0..3 {
            snake.advance();
        }
        turn(&mut snake, Direction::Down);
        snake.advance();
        turn(&mut snake, Direction::Left);
        snake.advance();
        assert!(!snake.check_self_collision());
        turn(&mut snake, Direction::Up);
        snake.advance();

        assert_eq!(snake.body().len(), 4);
        assert_eq!(snake.trimmed(), Some(snake.head()));
        assert!(snake.check_self_collision());
    }

    #[test]
    fn test_recent_segments_are_ignored() {
        let mut snake = Snake::new(SMALL_GRID);
        snake.body = VecDeque::from([
            Pos::new(2, 2),
            Pos::new(2, 3),
            Pos::new(2, 2),
            Pos::new(3, 2),
        ]);
        snake.length = 4;
        assert!(!snake.check_self_collision());

        snake.body.push_back(Pos::new(4, 2));
        snake.body.push_back(Pos::new(2, 2));
        snake.length = 6;
        assert!(snake.check_self_collision());
    }

    #[test]
    fn test_reset_clears_pending_turn() {
        let mut snake = Snake::new(GRID);
        snake.grow();
        snake.set_pending_heading(Direction::Up);
        snake.advance();
        snake.reset();
        assert_eq!(snake.pending_heading(), None);
        assert_eq!(snake.trimmed(), None);
        assert_eq!(snake.length(), 1);
    }

    #[derive(Default)]
    struct Recorder {
        cells: Vec<(Pos, Rgb, bool)>,
    }

    impl Renderer for Recorder {
        fn draw_cell(&mut self, pos: Pos, color: Rgb, bordered: bool) {
            self.cells.push((pos, color, bordered));
        }

        fn clear(&mut self, _color: Rgb) {}

        fn present(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_draw_paints_body_then_erases_trimmed() {
        let mut snake = Snake::new(GRID);
        snake.grow();
        snake.advance();
        snake.advance();

        let mut recorder = Recorder::default();
        snake.draw(&mut recorder);
        assert_eq!(
            recorder.cells,
            vec![
                (Pos::new(18, 12), SNAKE_COLOR, true),
                (Pos::new(17, 12), SNAKE_COLOR, true),
                (Pos::new(16, 12), BOARD_BACKGROUND_COLOR, false),
            ]
        );
    }
}
