use serde::{Deserialize, Serialize};

/// Single coordinate axis used for surface width, height, and cell positions.
pub type Coord = u16;

/// Count type used for erased-cell and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional size or cell position `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// A pointer position in surface-local units, regardless of the device that produced it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Fraction of a surface that has been erased, as raw cell counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub erased: CellCount,
    pub total: CellCount,
}

impl Coverage {
    pub const fn new(erased: CellCount, total: CellCount) -> Self {
        Self { erased, total }
    }

    /// Erased share in `[0, 1]`. An empty surface counts as fully erased.
    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            f64::from(self.erased) / f64::from(self.total)
        }
    }

    pub const fn is_complete(self) -> bool {
        self.erased >= self.total
    }
}

/// `floor` without `std`, saturating into the `i64` range. NaN maps to 0.
pub(crate) fn floor_i64(value: f64) -> i64 {
    let truncated = value as i64;
    if (truncated as f64) > value {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

/// `ceil` without `std`, saturating into the `i64` range. NaN maps to 0.
pub(crate) fn ceil_i64(value: f64) -> i64 {
    let truncated = value as i64;
    if (truncated as f64) < value {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
