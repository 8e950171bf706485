//! Rectangle-list regions used for blur shapes and hit masks.

use vello::kurbo::{BezPath, Point, Rect, Shape};

/// A region built from axis-aligned rectangles.
///
/// Supports the two operations the style needs: accumulating rectangles and
/// subtracting rectangles (for the rounded-corner hit-mask carve-out).
/// Rectangles are kept disjoint after subtraction but no merging is
/// attempted; consumers only iterate or convert to a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    /// The empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// A region covering a single rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        let mut region = Self::new();
        region.add_rect(rect);
        region
    }

    /// Add a rectangle to the region. Empty rectangles are ignored.
    pub fn add_rect(&mut self, rect: Rect) {
        if rect.width() > 0.0 && rect.height() > 0.0 {
            self.rects.push(rect);
        }
    }

    /// Remove `cut` from the region.
    pub fn subtract_rect(&mut self, cut: Rect) {
        if cut.width() <= 0.0 || cut.height() <= 0.0 {
            return;
        }
        let mut out = Vec::with_capacity(self.rects.len());
        for r in self.rects.drain(..) {
            let overlap = r.intersect(cut);
            if overlap.width() <= 0.0 || overlap.height() <= 0.0 {
                out.push(r);
                continue;
            }
            // Up to four fragments: above, below, left, right of the cut.
            if overlap.y0 > r.y0 {
                out.push(Rect::new(r.x0, r.y0, r.x1, overlap.y0));
            }
            if overlap.y1 < r.y1 {
                out.push(Rect::new(r.x0, overlap.y1, r.x1, r.y1));
            }
            if overlap.x0 > r.x0 {
                out.push(Rect::new(r.x0, overlap.y0, overlap.x0, overlap.y1));
            }
            if overlap.x1 < r.x1 {
                out.push(Rect::new(overlap.x1, overlap.y0, r.x1, overlap.y1));
            }
        }
        self.rects = out;
    }

    /// Whether the region contains no area.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Whether the point lies inside the region.
    pub fn contains(&self, point: Point) -> bool {
        self.rects.iter().any(|r| r.contains(point))
    }

    /// Total area of the region. Valid because fragments stay disjoint.
    pub fn area(&self) -> f64 {
        self.rects.iter().map(|r| r.area()).sum()
    }

    /// Smallest rectangle covering the region, or a zero rect when empty.
    pub fn bounding_rect(&self) -> Rect {
        let mut iter = self.rects.iter();
        let first = match iter.next() {
            Some(r) => *r,
            None => return Rect::ZERO,
        };
        iter.fold(first, |acc, r| acc.union(*r))
    }

    /// Iterate the rectangles making up the region.
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.rects.iter()
    }

    /// Convert to a fillable path.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for r in &self.rects {
            path.extend(r.path_elements(0.1));
        }
        path
    }
}
