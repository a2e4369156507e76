//! Area arithmetic: interiors, splits and widget constraint enforcement.

use crate::builder::{Axis, SplitSide, SplitSize};
use celldash_core::{Options, Rect};

/// The usable interior of a node: its area minus a one-cell border on each
/// side when present, minus the inner padding.
pub(crate) fn interior_rect(area: Rect, bordered: bool, padding: i32) -> Rect {
    let mut interior = area;
    if bordered {
        interior = interior.inset(1);
    }
    if padding > 0 {
        interior = interior.inset(padding);
    }
    interior
}

fn split_dims(total: i32, size: SplitSize) -> (i32, i32) {
    match size {
        SplitSize::Percent(percent) => {
            let first = total * i32::from(percent) / 100;
            (first, total - first)
        }
        SplitSize::Cells { count, side } => {
            let reserved = count.clamp(0, total.max(0));
            match side {
                SplitSide::First => (reserved, total - reserved),
                SplitSide::Second => (total - reserved, reserved),
            }
        }
    }
}

/// Split an interior rectangle into the two child rectangles.
///
/// A horizontal split divides along the x axis into left and right; a
/// vertical split divides along the y axis into top and bottom. The children
/// always partition the interior exactly.
pub(crate) fn split_rects(interior: Rect, axis: Axis, size: SplitSize) -> (Rect, Rect) {
    match axis {
        Axis::Horizontal => {
            let (first, second) = split_dims(interior.width, size);
            (
                Rect::new(interior.x, interior.y, first, interior.height),
                Rect::new(interior.x + first, interior.y, second, interior.height),
            )
        }
        Axis::Vertical => {
            let (first, second) = split_dims(interior.height, size);
            (
                Rect::new(interior.x, interior.y, interior.width, first),
                Rect::new(interior.x, interior.y + first, interior.width, second),
            )
        }
    }
}

/// Shrink a candidate rectangle to satisfy the widget's declared options.
///
/// The rectangle keeps its top-left corner. It is clamped to `max_size`
/// (zero axis = unbounded), then shrunk to the largest sub-rectangle
/// matching `ratio`, so the result honours both. Returns the rectangle and
/// whether it fell below `min_size` on either axis, in which case the
/// widget must not be drawn and a resize marker is requested instead.
pub(crate) fn apply_constraints(interior: Rect, options: &Options) -> (Rect, bool) {
    let mut rect = interior;

    if options.max_size.width > 0 {
        rect.width = rect.width.min(options.max_size.width);
    }
    if options.max_size.height > 0 {
        rect.height = rect.height.min(options.max_size.height);
    }

    if options.ratio.width > 0 && options.ratio.height > 0 {
        let scale = (rect.width / options.ratio.width)
            .min(rect.height / options.ratio.height)
            .max(0);
        rect.width = scale * options.ratio.width;
        rect.height = scale * options.ratio.height;
    }

    let under_sized =
        rect.width < options.min_size.width || rect.height < options.min_size.height;
    (rect, under_sized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celldash_core::Size;
    use proptest::prelude::*;

    #[test]
    fn test_interior_border_and_padding() {
        let area = Rect::new(0, 0, 10, 8);
        assert_eq!(interior_rect(area, false, 0), area);
        assert_eq!(interior_rect(area, true, 0), Rect::new(1, 1, 8, 6));
        assert_eq!(interior_rect(area, true, 1), Rect::new(2, 2, 6, 4));
    }

    #[test]
    fn test_interior_collapses_when_too_small() {
        let area = Rect::new(0, 0, 2, 2);
        assert!(interior_rect(area, true, 0).is_empty());
    }

    #[test]
    fn test_percent_split_rounds_down() {
        let interior = Rect::new(0, 0, 100, 10);
        let (left, right) = split_rects(interior, Axis::Horizontal, SplitSize::Percent(70));
        assert_eq!(left, Rect::new(0, 0, 70, 10));
        assert_eq!(right, Rect::new(70, 0, 30, 10));

        let (left, right) = split_rects(
            Rect::new(0, 0, 5, 1),
            Axis::Horizontal,
            SplitSize::Percent(50),
        );
        assert_eq!(left.width, 2);
        assert_eq!(right.width, 3);
    }

    #[test]
    fn test_vertical_split() {
        let interior = Rect::new(2, 3, 10, 8);
        let (top, bottom) = split_rects(interior, Axis::Vertical, SplitSize::Percent(25));
        assert_eq!(top, Rect::new(2, 3, 10, 2));
        assert_eq!(bottom, Rect::new(2, 5, 10, 6));
    }

    #[test]
    fn test_cells_split_reserves_side() {
        let interior = Rect::new(0, 0, 10, 4);
        let (left, right) = split_rects(
            interior,
            Axis::Horizontal,
            SplitSize::Cells {
                count: 3,
                side: SplitSide::Second,
            },
        );
        assert_eq!(left.width, 7);
        assert_eq!(right.width, 3);
    }

    #[test]
    fn test_cells_split_clamps_to_interior() {
        let interior = Rect::new(0, 0, 4, 4);
        let (left, right) = split_rects(
            interior,
            Axis::Horizontal,
            SplitSize::Cells {
                count: 9,
                side: SplitSide::First,
            },
        );
        assert_eq!(left.width, 4);
        assert_eq!(right.width, 0);
    }

    #[test]
    fn test_constraints_unconstrained_passthrough() {
        let interior = Rect::new(1, 1, 8, 6);
        let (rect, under) = apply_constraints(interior, &Options::new());
        assert_eq!(rect, interior);
        assert!(!under);
    }

    #[test]
    fn test_constraints_max_clamp() {
        let interior = Rect::new(0, 0, 20, 10);
        let options = Options::new().with_max_size(Size::new(5, 0));
        let (rect, under) = apply_constraints(interior, &options);
        assert_eq!(rect.size(), Size::new(5, 10));
        assert!(!under);
    }

    #[test]
    fn test_constraints_ratio_shrink() {
        let interior = Rect::new(0, 0, 20, 7);
        let options = Options::new().with_ratio(Size::new(2, 1));
        let (rect, under) = apply_constraints(interior, &options);
        assert_eq!(rect.size(), Size::new(14, 7));
        assert!(!under);
        // Top-left is preserved.
        assert_eq!(rect.origin(), interior.origin());
    }

    #[test]
    fn test_constraints_under_min() {
        let interior = Rect::new(0, 0, 3, 3);
        let options = Options::new().with_min_size(Size::new(5, 2));
        let (_, under) = apply_constraints(interior, &options);
        assert!(under);
    }

    proptest! {
        /// Children of a split always partition the interior.
        #[test]
        fn prop_split_partitions(
            width in 0i32..200,
            height in 0i32..200,
            percent in 1u8..=99,
            horizontal in proptest::bool::ANY,
        ) {
            let interior = Rect::new(0, 0, width, height);
            let axis = if horizontal { Axis::Horizontal } else { Axis::Vertical };
            let (a, b) = split_rects(interior, axis, SplitSize::Percent(percent));
            match axis {
                Axis::Horizontal => {
                    prop_assert_eq!(a.width + b.width, width);
                    prop_assert_eq!(a.height, height);
                    prop_assert_eq!(b.height, height);
                    prop_assert_eq!(a.right(), b.x);
                }
                Axis::Vertical => {
                    prop_assert_eq!(a.height + b.height, height);
                    prop_assert_eq!(a.bottom(), b.y);
                }
            }
        }

        /// A cells split reserves exactly `min(n, total)` on its side.
        #[test]
        fn prop_cells_split_reservation(
            width in 0i32..100,
            count in 1i32..150,
            second in proptest::bool::ANY,
        ) {
            let side = if second { SplitSide::Second } else { SplitSide::First };
            let interior = Rect::new(0, 0, width, 5);
            let (a, b) = split_rects(interior, Axis::Horizontal, SplitSize::Cells { count, side });
            let reserved = match side { SplitSide::First => a.width, SplitSide::Second => b.width };
            prop_assert_eq!(reserved, count.min(width));
            prop_assert_eq!(a.width + b.width, width);
        }

        /// The drawn rectangle always satisfies the declared ratio, or the
        /// widget is marked under-sized.
        #[test]
        fn prop_ratio_enforced(
            width in 0i32..60,
            height in 0i32..60,
            rx in 1i32..6,
            ry in 1i32..6,
            min in 0i32..10,
        ) {
            let options = Options::new()
                .with_ratio(Size::new(rx, ry))
                .with_min_size(Size::new(min, min));
            let (rect, under) = apply_constraints(Rect::new(0, 0, width, height), &options);
            prop_assert!(rect.width * ry == rect.height * rx || under);
        }
    }
}
