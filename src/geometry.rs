use serde::Serialize;

/// Integer grid dimensions measured in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Total cell count of the grid.
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

/// One tile shape from the catalogue, not yet anchored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileShape {
    pub width: u16,
    pub height: u16,
}

impl TileShape {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Width-over-height aspect ratio.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Rectangle anchored within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(left: u16, top: u16, width: u16, height: u16) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> u16 {
        self.left.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    pub fn fits_within(&self, size: Size) -> bool {
        self.right() <= size.width && self.bottom() <= size.height
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}
