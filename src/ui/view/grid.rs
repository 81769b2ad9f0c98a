use super::{clamp_u16, Layout, View};
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::{Rect, Size};

/// Rows of cells aligned into columns.
///
/// A column is as wide as its widest cell and a row as tall as its tallest.
/// Rows may have different lengths; missing cells take no room.
pub struct Grid {
    rows: Vec<Vec<View>>,
    h_margin: u16,
    align_right: bool,
}

struct Metrics {
    cols: Vec<u16>,
    rows: Vec<u16>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<View>>) -> Self {
        Self {
            rows,
            h_margin: 1,
            align_right: false,
        }
    }

    pub fn h_margin(mut self, margin: u16) -> Self {
        self.h_margin = margin;
        self
    }

    pub fn align_right(mut self, align_right: bool) -> Self {
        self.align_right = align_right;
        self
    }

    fn metrics(&self, rect: Rect) -> Metrics {
        let ncols = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cols = vec![0u16; ncols];
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut row_h = 0u16;
            for (i, cell) in row.iter().enumerate() {
                let size = cell.measure(rect);
                cols[i] = cols[i].max(size.w);
                row_h = row_h.max(size.h);
            }
            rows.push(row_h);
        }
        Metrics { cols, rows }
    }

    fn column_x(&self, cols: &[u16], i: usize) -> u16 {
        let widths: u32 = cols[..i].iter().map(|w| u32::from(*w)).sum();
        clamp_u16(widths + i as u32 * u32::from(self.h_margin))
    }
}

impl Layout for Grid {
    fn measure(&self, rect: Rect) -> Size {
        let m = self.metrics(rect);
        let w = if m.cols.is_empty() {
            0
        } else {
            self.column_x(&m.cols, m.cols.len() - 1)
                .saturating_add(m.cols[m.cols.len() - 1])
        };
        let h: u32 = m.rows.iter().map(|h| u32::from(*h)).sum();
        Size::new(w, clamp_u16(h))
    }

    fn paint(&self, rect: Rect, canvas: &mut Canvas<'_>) {
        let m = self.metrics(rect);
        let mut y = 0u16;
        for (row, row_h) in self.rows.iter().zip(&m.rows) {
            for (i, cell) in row.iter().enumerate() {
                let col_w = m.cols[i];
                let mut x = self.column_x(&m.cols, i);
                let mut w = col_w;
                if self.align_right {
                    let shift = col_w.saturating_sub(cell.measure(rect).w);
                    x = x.saturating_add(shift);
                    w -= shift;
                }
                let area = rect.offset(x, y).clamp_size(Size::new(w, *row_h));
                cell.paint(area, canvas);
            }
            y = y.saturating_add(*row_h);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/view/grid.rs"]
mod tests;
