use std::io;

use ratatui::{
    backend::Backend,
    prelude::*,
    widgets::{Block, Borders},
};

use crate::board::{Pos, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BOARD_BACKGROUND_COLOR: Rgb = Rgb(0, 0, 0);
pub const BORDER_COLOR: Rgb = Rgb(93, 216, 228);
pub const APPLE_COLOR: Rgb = Rgb(255, 0, 0);
pub const SNAKE_COLOR: Rgb = Rgb(0, 255, 0);

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Drawing surface the game loop paints onto.
///
/// Paint calls only mark cells; nothing becomes visible until `present`.
pub trait Renderer {
    fn draw_cell(&mut self, pos: Pos, color: Rgb, bordered: bool);
    fn clear(&mut self, color: Rgb);
    fn present(&mut self) -> io::Result<()>;
}

pub trait Drawable {
    fn draw(&self, renderer: &mut dyn Renderer);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Paint {
    color: Rgb,
    bordered: bool,
}

/// Every cell keeps its last paint until overwritten or cleared.
#[derive(Debug)]
struct Canvas {
    size: Size,
    cells: Vec<Paint>,
}

impl Canvas {
    fn new(size: Size) -> Self {
        Canvas {
            size,
            cells: vec![
                Paint {
                    color: BOARD_BACKGROUND_COLOR,
                    bordered: false,
                };
                size.area()
            ],
        }
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.size
            .contains(pos)
            .then(|| pos.y as usize * self.size.width as usize + pos.x as usize)
    }

    fn paint(&mut self, pos: Pos, paint: Paint) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = paint;
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.cells.fill(Paint {
            color,
            bordered: false,
        });
    }

    fn get(&self, pos: Pos) -> Option<Paint> {
        self.index(pos).map(|i| self.cells[i])
    }
}

impl Widget for &Canvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..self.size.height {
            for x in 0..self.size.width {
                let Some(paint) = self.get(Pos { x, y }) else {
                    continue;
                };
                // Two columns per cell keeps cells roughly square in a terminal
                let (left, right) = if paint.bordered { ("[", "]") } else { (" ", " ") };
                for (dx, symbol) in [(0, left), (1, right)] {
                    let col = u32::from(area.x) + u32::from(x) * 2 + dx;
                    let row = u32::from(area.y) + u32::from(y);
                    if col >= u32::from(area.right()) || row >= u32::from(area.bottom()) {
                        continue;
                    }
                    // Both are below the area's u16 edges here
                    if let Some(cell) = buf.cell_mut((col as u16, row as u16)) {
                        cell.set_symbol(symbol)
                            .set_fg(BORDER_COLOR.into())
                            .set_bg(paint.color.into());
                    }
                }
            }
        }
    }
}

pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    canvas: Canvas,
    title: String,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, grid: Size, title: impl Into<String>) -> Self {
        TerminalRenderer {
            terminal,
            canvas: Canvas::new(grid),
            title: title.into(),
        }
    }

    /// Terminal cells needed to show the whole board including its frame.
    ///
    /// Saturates at the largest terminal size for boards too big to show.
    pub fn required_area(grid: Size) -> Size {
        Size {
            width: grid.width.saturating_mul(2).saturating_add(2),
            height: grid.height.saturating_add(2),
        }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw_cell(&mut self, pos: Pos, color: Rgb, bordered: bool) {
        self.canvas.paint(pos, Paint { color, bordered });
    }

    fn clear(&mut self, color: Rgb) {
        self.canvas.fill(color);
    }

    fn present(&mut self) -> io::Result<()> {
        let canvas = &self.canvas;
        let title = self.title.as_str();
        self.terminal.draw(|frame| {
            let block = Block::default().title(title).borders(Borders::ALL);
            let inner_area = block.inner(frame.area());
            frame.render_widget(block, frame.area());
            frame.render_widget(canvas, inner_area);
        })?;
        Ok(())
    }
}
