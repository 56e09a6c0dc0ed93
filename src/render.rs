// src/render.rs

//! Glyph rendering of cells as 3 rows of 2 columns each.

use crate::codec::cell::{CELL_WIDTH, Cell};

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub raised: char,
    pub flat: char,
    /// Cells per output line; `0` puts everything on one line.
    pub cells_per_line: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            raised: '●',
            flat: '○',
            cells_per_line: 16,
        }
    }
}

/// Renders `cells` as rows of glyphs. Cells are separated by one blank
/// column, lines of cells by one blank line.
pub fn render_cells(cells: &[Cell], options: &RenderOptions) -> String {
    if cells.is_empty() {
        return String::new();
    }
    let per_line = if options.cells_per_line == 0 {
        cells.len()
    } else {
        options.cells_per_line
    };

    let mut blocks = Vec::with_capacity(cells.len().div_ceil(per_line));
    for line in cells.chunks(per_line) {
        let rows: Vec<String> = (0..CELL_WIDTH / 2)
            .map(|row| {
                line.iter()
                    .map(|&cell| render_row(cell, row, options))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        blocks.push(rows.join("\n"));
    }
    blocks.join("\n\n")
}

fn render_row(cell: Cell, row: usize, options: &RenderOptions) -> String {
    [row * 2, row * 2 + 1]
        .iter()
        .map(|&index| {
            if cell.is_raised(index) {
                options.raised
            } else {
                options.flat
            }
        })
        .collect()
}
