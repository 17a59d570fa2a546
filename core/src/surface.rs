use core::ops::Range;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::{ceil_i64, floor_i64};
use crate::*;

/// Operations a reveal widget needs from whatever holds its cover.
///
/// Implementations own their pixels exclusively; the widget never shares a surface.
pub trait DrawingSurface {
    fn size(&self) -> Coord2;

    /// Covers the whole surface again.
    fn fill(&mut self);

    /// Erases a disc of `radius` around `point`, returning how many cells became uncovered.
    fn stamp_erase(&mut self, point: PointerSample, radius: f64) -> CellCount;

    fn sample_coverage(&self) -> Coverage;

    /// Uncovers the whole surface.
    fn clear(&mut self);
}

/// Binary coverage record, one cell per surface unit. `true` means still covered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverageBuffer {
    cover: Array2<bool>,
}

impl CoverageBuffer {
    pub fn new(size: Coord2) -> Self {
        Self {
            cover: Array2::from_elem(size.to_nd_index(), true),
        }
    }

    pub fn is_covered(&self, coords: Coord2) -> bool {
        self.cover
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    /// Cells whose centre lies inside the brush, clipped to the buffer.
    fn cells_within(
        &self,
        point: PointerSample,
        radius: f64,
    ) -> impl Iterator<Item = Coord2> + use<> {
        let (size_x, size_y) = self.size();
        let usable = point.is_finite() && radius.is_finite() && radius > 0.0;
        let radius_sq = radius * radius;

        let (x_range, y_range) = if usable {
            (
                brush_span(point.x, radius, size_x),
                brush_span(point.y, radius, size_y),
            )
        } else {
            (0..0, 0..0)
        };

        x_range.flat_map(move |x| {
            y_range.clone().filter_map(move |y| {
                let dx = x as f64 + 0.5 - point.x;
                let dy = y as f64 + 0.5 - point.y;
                (dx * dx + dy * dy <= radius_sq).then_some((x as Coord, y as Coord))
            })
        })
    }
}

/// Cell indices along one axis that a brush of `radius` around `centre` can touch.
///
/// Cell `i` spans `[i, i + 1)`, so its centre sits at `i + 0.5`. Bounds are clamped to
/// `[0, extent]` before rounding, so huge or infinite sums stay in range.
fn brush_span(centre: f64, radius: f64, extent: Coord) -> Range<i64> {
    let extent = f64::from(extent);
    let start = floor_i64((centre - radius).clamp(0.0, extent));
    let end = ceil_i64((centre + radius).clamp(0.0, extent));
    start..end
}

impl DrawingSurface for CoverageBuffer {
    fn size(&self) -> Coord2 {
        let dim = self.cover.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    fn fill(&mut self) {
        self.cover.fill(true);
    }

    fn stamp_erase(&mut self, point: PointerSample, radius: f64) -> CellCount {
        let mut erased = 0;
        for coords in self.cells_within(point, radius) {
            let cell = &mut self.cover[coords.to_nd_index()];
            if *cell {
                *cell = false;
                erased += 1;
            }
        }
        erased
    }

    fn sample_coverage(&self) -> Coverage {
        let total = self.cover.len() as CellCount;
        let erased = self.cover.iter().filter(|&&covered| !covered).count() as CellCount;
        Coverage::new(erased, total)
    }

    fn clear(&mut self) {
        self.cover.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn fresh_buffer_is_fully_covered() {
        let buffer = CoverageBuffer::new((300, 120));
        assert_eq!(buffer.size(), (300, 120));
        assert_eq!(buffer.sample_coverage(), Coverage::new(0, 36_000));
    }

    #[test]
    fn centre_stamp_erases_a_disc() {
        let mut buffer = CoverageBuffer::new((300, 120));

        let erased = buffer.stamp_erase(PointerSample::new(150.0, 60.0), 20.0);
        let fraction = buffer.sample_coverage().fraction();
        let expected = PI * 20.0 * 20.0 / (300.0 * 120.0);

        assert_eq!(buffer.sample_coverage().erased, erased);
        assert!((fraction - expected).abs() < 0.002, "fraction = {fraction}");
        assert!(!buffer.is_covered((150, 60)));
        assert!(!buffer.is_covered((150, 41)));
        assert!(buffer.is_covered((150, 39)));
        // A square brush would reach the corner of its bounding box.
        assert!(buffer.is_covered((131, 41)));
    }

    #[test]
    fn repeated_stamp_erases_nothing_new() {
        let mut buffer = CoverageBuffer::new((50, 50));
        let point = PointerSample::new(25.0, 25.0);

        assert!(buffer.stamp_erase(point, 5.0) > 0);
        assert_eq!(buffer.stamp_erase(point, 5.0), 0);
    }

    #[test]
    fn stamp_near_edge_is_clipped() {
        let mut buffer = CoverageBuffer::new((40, 40));

        let erased = buffer.stamp_erase(PointerSample::new(0.0, 0.0), 10.0);

        // Roughly one quarter of the disc lands on the buffer.
        let quarter = PI * 100.0 / 4.0;
        assert!((erased as f64 - quarter).abs() < 10.0, "erased = {erased}");
        assert!(!buffer.is_covered((0, 0)));
    }

    #[test]
    fn stamp_outside_bounds_changes_nothing() {
        let mut buffer = CoverageBuffer::new((300, 120));

        for point in [
            PointerSample::new(-100.0, -100.0),
            PointerSample::new(1000.0, 60.0),
            PointerSample::new(150.0, 500.0),
            PointerSample::new(-20.5, 60.0),
            PointerSample::new(f64::NAN, 60.0),
            PointerSample::new(f64::INFINITY, f64::NEG_INFINITY),
            PointerSample::new(1e300, 60.0),
            PointerSample::new(-1e300, 60.0),
            PointerSample::new(150.0, f64::MAX),
            PointerSample::new(f64::MIN, f64::MIN),
        ] {
            assert_eq!(buffer.stamp_erase(point, 20.0), 0);
        }
        assert_eq!(buffer.sample_coverage().erased, 0);
    }

    #[test]
    fn unusable_radius_changes_nothing() {
        let mut buffer = CoverageBuffer::new((300, 120));
        let centre = PointerSample::new(150.0, 60.0);

        for radius in [0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(buffer.stamp_erase(centre, radius), 0);
        }
        assert_eq!(buffer.sample_coverage().erased, 0);
    }

    #[test]
    fn huge_radius_erases_everything() {
        let mut buffer = CoverageBuffer::new((300, 120));

        let erased = buffer.stamp_erase(PointerSample::new(150.0, 60.0), 1e300);

        assert_eq!(erased, 36_000);
        assert!(buffer.sample_coverage().is_complete());
    }

    #[test]
    fn huge_radius_far_outside_still_reaches_the_buffer() {
        let mut buffer = CoverageBuffer::new((30, 12));

        let erased = buffer.stamp_erase(PointerSample::new(-1e200, 1e200), 1e300);

        assert_eq!(erased, 360);
    }

    #[test]
    fn clear_and_fill_are_total() {
        let mut buffer = CoverageBuffer::new((30, 12));

        buffer.clear();
        assert!(buffer.sample_coverage().is_complete());

        buffer.fill();
        assert_eq!(buffer.sample_coverage().erased, 0);
    }
}
