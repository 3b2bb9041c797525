use crate::geometry::{Rect, Size};

/// Occupancy bitmap for one candidate partial layout, one byte per cell.
///
/// Copy-on-write: a placement never mutates an existing mask; it derives
/// a fresh copy via [`GridMask::with_occupied`], so masks referenced by
/// enqueued states stay frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridMask {
    width: u16,
    cells: Box<[u8]>,
}

impl GridMask {
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            cells: vec![0; size.area() as usize].into_boxed_slice(),
        }
    }

    /// True when every cell covered by `rect` is free.
    pub fn is_free(&self, rect: Rect) -> bool {
        for top in rect.top..rect.bottom() {
            for left in rect.left..rect.right() {
                if self.cells[self.index(left, top)] == 1 {
                    return false;
                }
            }
        }
        true
    }

    /// Derive a new mask with `rect`'s cells marked occupied.
    pub fn with_occupied(&self, rect: Rect) -> Self {
        let mut derived = self.clone();
        for top in rect.top..rect.bottom() {
            for left in rect.left..rect.right() {
                derived.cells[(top as usize) * (self.width as usize) + left as usize] = 1;
            }
        }
        derived
    }

    pub fn free_cells(&self) -> u32 {
        self.cells.iter().filter(|&&cell| cell == 0).count() as u32
    }

    fn index(&self, left: u16, top: u16) -> usize {
        (top as usize) * (self.width as usize) + left as usize
    }
}
