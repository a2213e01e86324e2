/// Character-buffer drawing surface for the terminal
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use spincube_core::Surface;
use std::io::Write;

const EDGE_CHAR: char = '#';

/// A terminal cell grid implementing the core `Surface` trait.
///
/// Lines are plotted with integer Bresenham; plotting clips to the grid, so
/// out-of-bounds pipeline output is simply dropped at the cell level.
pub struct CharSurface {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl CharSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    fn plot(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = EDGE_CHAR;
    }

    #[cfg(test)]
    fn cell(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    /// Flush the grid to the writer as queued crossterm commands.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Cyan))?;
        for y in 0..self.height {
            for x in 0..self.width {
                writer.queue(Print(self.cells[y * self.width + x]))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for CharSurface {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        let (mut x0, mut y0) = (x0.round() as i32, y0.round() as i32);
        let (x1, y1) = (x1.round() as i32, y1.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x0 += sx;
            }
            if doubled <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}
