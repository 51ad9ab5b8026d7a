use serde::{Deserialize, Serialize};

/// Integer pixel coordinate.
///
/// `x` is the row and `y` the column. Every buffer in this crate is row-major
/// with stride `width`, so a pixel lives at `x * width + y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn is_within(self, height: usize, width: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < height && (self.y as usize) < width
    }

    /// Row-major linear index. The pixel must be non-negative.
    #[inline]
    pub fn linear_index(self, width: usize) -> usize {
        debug_assert!(self.x >= 0 && self.y >= 0, "negative pixel {:?}", self);
        self.x as usize * width + self.y as usize
    }

    #[inline]
    pub fn from_linear_index(index: usize, width: usize) -> Self {
        Self::new((index / width) as i32, (index % width) as i32)
    }

    #[inline]
    pub fn distance_squared(self, other: Pixel) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
