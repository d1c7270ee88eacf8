//! Grid layout engine (PRD-11).
//!
//! Pure first-fit placement over a row-growable occupancy grid, plus the
//! size-to-footprint tables shared by the generator and the resize endpoint.
//! No I/O happens here; callers decide whether to persist the result.

use serde::{Deserialize, Serialize};

use crate::types::WidgetId;
use crate::widget::WidgetSize;

/// Column count of the profile grid at the standard breakpoint.
pub const DEFAULT_COLUMN_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Size-to-footprint tables
// ---------------------------------------------------------------------------

/// Footprint for a widget being placed for the first time.
///
/// LARGE_SQUARE and WIDE shrink to fit narrow grids; legacy sizes and any
/// future size default to a single cell.
pub fn placement_dims(size: WidgetSize, columns: usize) -> (i32, i32) {
    let c = columns.max(1) as i32;
    match size {
        WidgetSize::SmallSquare => (1, 1),
        WidgetSize::LargeSquare => (2.min(c), 2),
        WidgetSize::Wide => (c.min(3), 1),
        WidgetSize::Long => (1.min(c), 2),
        _ => (1, 1),
    }
}

/// Footprint written when a widget is resized to `size`.
///
/// NOTE: WIDE is 2 columns here but up to 3 at first placement. Stored
/// rectangles exist with both footprints, so the tables stay separate until
/// a data migration normalizes them.
pub fn resize_dims(size: WidgetSize) -> (i32, i32) {
    match size {
        WidgetSize::SmallSquare => (1, 1),
        WidgetSize::LargeSquare => (2, 2),
        WidgetSize::Wide => (2, 1),
        WidgetSize::Long => (1, 2),
        _ => (1, 1),
    }
}

// ---------------------------------------------------------------------------
// Placement types
// ---------------------------------------------------------------------------

/// Rectangle in grid units. `(x, y)` is the top-left cell; columns grow
/// rightward, rows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Placement input: one widget's declared size plus its saved rectangle when
/// it has already been placed. Callers pass slots in widget `position` order.
#[derive(Debug, Clone)]
pub struct LayoutSlot {
    pub id: WidgetId,
    pub size: WidgetSize,
    pub saved: Option<GridRect>,
}

/// Placement output. The widget id serializes under `i`, the field name the
/// editor's grid library expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridItem {
    #[serde(rename = "i")]
    pub id: WidgetId,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

// ---------------------------------------------------------------------------
// Occupancy grid
// ---------------------------------------------------------------------------

/// Rows are allocated on demand; cells outside the column count can still be
/// occupied by saved rectangles, which are honored verbatim.
struct OccupancyGrid {
    rows: Vec<Vec<bool>>,
}

impl OccupancyGrid {
    fn new() -> Self {
        Self { rows: Vec::new() }
    }

    fn is_free(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        for row in y..y + h {
            for col in x..x + w {
                let occupied = self
                    .rows
                    .get(row)
                    .and_then(|cells| cells.get(col))
                    .copied()
                    .unwrap_or(false);
                if occupied {
                    return false;
                }
            }
        }
        true
    }

    fn occupy(&mut self, x: usize, y: usize, w: usize, h: usize) {
        for row in y..y + h {
            if self.rows.len() <= row {
                self.rows.resize_with(row + 1, Vec::new);
            }
            let cells = &mut self.rows[row];
            if cells.len() < x + w {
                cells.resize(x + w, false);
            }
            for cell in cells.iter_mut().take(x + w).skip(x) {
                *cell = true;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Computes a rectangle for every slot.
///
/// Saved rectangles are used verbatim and marked occupied. Unplaced widgets
/// take their footprint from [`placement_dims`] (clamped to the column
/// count), then scan rows from y=0 and columns x=0..=columns-w, taking the
/// first fully free rectangle. Greedy first-fit, row-major, no backtracking:
/// deterministic for a fixed slot order, and later slots never move earlier
/// ones.
///
/// A zero column count is treated as one column.
pub fn compute_layout(slots: &[LayoutSlot], columns: usize) -> Vec<GridItem> {
    let columns = columns.max(1);
    let mut grid = OccupancyGrid::new();
    let mut items = Vec::with_capacity(slots.len());

    for slot in slots {
        if let Some(rect) = slot.saved {
            grid.occupy(
                rect.x.max(0) as usize,
                rect.y.max(0) as usize,
                rect.w.max(0) as usize,
                rect.h.max(0) as usize,
            );
            items.push(GridItem {
                id: slot.id.clone(),
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
            });
            continue;
        }

        let (w, h) = placement_dims(slot.size, columns);
        let w = (w.max(1) as usize).min(columns);
        let h = h.max(1) as usize;

        let (x, y) = first_fit(&grid, columns, w, h);
        grid.occupy(x, y, w, h);
        items.push(GridItem {
            id: slot.id.clone(),
            x: x as i32,
            y: y as i32,
            w: w as i32,
            h: h as i32,
        });
    }

    items
}

/// First (x, y), scanning row-major, where a `w` x `h` rectangle fits.
/// Terminates because rows below every occupied cell are always free.
fn first_fit(grid: &OccupancyGrid, columns: usize, w: usize, h: usize) -> (usize, usize) {
    let mut y = 0;
    loop {
        for x in 0..=columns - w {
            if grid.is_free(x, y, w, h) {
                return (x, y);
            }
        }
        y += 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
