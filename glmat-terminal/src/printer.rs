/// Colored 4x4 grid output for matrices
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use glmat_core::Matrix4;
use std::io::Write;

/// Prints matrices in math layout (rows across, columns down)
pub struct MatrixPrinter {
    precision: usize,
    width: usize,
}

impl MatrixPrinter {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            width: precision + 7,
        }
    }

    /// Format a single row of `m` without colors
    pub fn format_row(&self, m: &Matrix4, row: usize) -> String {
        (0..4)
            .map(|col| self.format_cell(m.get(row, col)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_cell(&self, value: f32) -> String {
        format!("{:>width$.prec$}", value, width = self.width, prec = self.precision)
    }

    pub fn draw<W: Write>(&self, writer: &mut W, title: &str, m: &Matrix4) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Yellow))?;
        writer.queue(Print(format!("{}\n", title)))?;

        for row in 0..4 {
            for col in 0..4 {
                let value = m.get(row, col);
                writer.queue(SetForegroundColor(cell_color(row, col, value)))?;
                writer.queue(Print(self.format_cell(value)))?;
                if col < 3 {
                    writer.queue(Print(' '))?;
                }
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Default for MatrixPrinter {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Highlight the diagonal and the translation column; dim zeros
fn cell_color(row: usize, col: usize, value: f32) -> Color {
    if !value.is_finite() {
        Color::Red
    } else if value == 0.0 {
        Color::DarkGrey
    } else if row == col {
        Color::Cyan
    } else if col == 3 {
        Color::Green
    } else {
        Color::White
    }
}
