//! Declarative construction of the container tree.
//!
//! A nested builder produces a single root [`Container`]. Options apply to
//! the node under construction in declaration order; a node carries either a
//! widget or a split, never both. All values are validated when the tree is
//! built, so layout and draw never see bad configuration.

use crate::container::{Container, Node, NodeKind};
use celldash_core::draw::{Align, LineStyle, OverrunMode};
use celldash_core::{CellStyle, Error, Rect, Result, Widget};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The axis a split divides along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Divide along the x axis into left and right children.
    Horizontal,
    /// Divide along the y axis into top and bottom children.
    Vertical,
}

/// Which child of a split a fixed cell count is reserved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitSide {
    /// The left or top child.
    First,
    /// The right or bottom child.
    Second,
}

/// How a split divides its interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitSize {
    /// The first child receives the given percentage (1..=99), rounded
    /// down; the second receives the remainder.
    Percent(u8),
    /// One side receives exactly `count` cells, clamped to the interior.
    Cells {
        /// Number of cells to reserve.
        count: i32,
        /// The side that receives them.
        side: SplitSide,
    },
}

struct SplitSpec {
    axis: Axis,
    size: SplitSize,
    first: ContainerBuilder,
    second: ContainerBuilder,
}

/// Builder for one node of the container tree.
#[derive(Default)]
pub struct ContainerBuilder {
    border: Option<LineStyle>,
    border_style: CellStyle,
    title: Option<String>,
    title_align: Align,
    title_overrun: OverrunMode,
    title_style: CellStyle,
    padding: i32,
    widget: Option<Arc<dyn Widget>>,
    split: Option<Box<SplitSpec>>,
    focused: bool,
}

impl ContainerBuilder {
    /// Start building a node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a border around this node.
    #[must_use]
    pub fn with_border(mut self, line_style: LineStyle) -> Self {
        self.border = Some(line_style);
        self
    }

    /// Set the border's cell style.
    #[must_use]
    pub fn with_border_style(mut self, style: CellStyle) -> Self {
        self.border_style = style;
        self
    }

    /// Overlay a title on the node's top border edge.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title alignment.
    #[must_use]
    pub fn with_title_align(mut self, align: Align) -> Self {
        self.title_align = align;
        self
    }

    /// Set the title overrun policy.
    #[must_use]
    pub fn with_title_overrun(mut self, overrun: OverrunMode) -> Self {
        self.title_overrun = overrun;
        self
    }

    /// Set the title's cell style.
    #[must_use]
    pub fn with_title_style(mut self, style: CellStyle) -> Self {
        self.title_style = style;
        self
    }

    /// Reserve `padding` blank cells inside the border on every side.
    #[must_use]
    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Place a widget in this node, making it a leaf.
    #[must_use]
    pub fn with_widget(mut self, widget: Arc<dyn Widget>) -> Self {
        self.widget = Some(widget);
        self
    }

    /// Give this node keyboard focus initially.
    #[must_use]
    pub fn with_focus(mut self) -> Self {
        self.focused = true;
        self
    }

    /// Split this node along the x axis into left and right children.
    #[must_use]
    pub fn split_horizontal(mut self, size: SplitSize, left: Self, right: Self) -> Self {
        self.split = Some(Box::new(SplitSpec {
            axis: Axis::Horizontal,
            size,
            first: left,
            second: right,
        }));
        self
    }

    /// Split this node along the y axis into top and bottom children.
    #[must_use]
    pub fn split_vertical(mut self, size: SplitSize, top: Self, bottom: Self) -> Self {
        self.split = Some(Box::new(SplitSpec {
            axis: Axis::Vertical,
            size,
            first: top,
            second: bottom,
        }));
        self
    }

    /// Build the container tree.
    ///
    /// Validates every node: a widget and a split are mutually exclusive,
    /// percentages must be in 1..=99, cell counts at least 1, padding
    /// non-negative, widget options well-formed, and at most one node may be
    /// marked focused. When none is, the first leaf holding a widget starts
    /// focused.
    pub fn build(self) -> Result<Container> {
        let mut nodes = Vec::new();
        let mut focus_marks = Vec::new();
        build_node(self, None, &mut nodes, &mut focus_marks)?;

        if focus_marks.len() > 1 {
            return Err(Error::invalid_argument(
                "more than one container node is marked focused",
            ));
        }
        let focused = focus_marks.first().copied().or_else(|| {
            nodes.iter().position(|node| {
                matches!(&node.kind, NodeKind::Leaf { widget: Some(_) })
            })
        });

        Ok(Container::from_parts(nodes, focused))
    }
}

fn build_node(
    builder: ContainerBuilder,
    parent: Option<usize>,
    nodes: &mut Vec<Node>,
    focus_marks: &mut Vec<usize>,
) -> Result<usize> {
    if builder.widget.is_some() && builder.split.is_some() {
        return Err(Error::invalid_argument(
            "a container node cannot hold both a widget and a split",
        ));
    }
    if builder.padding < 0 {
        return Err(Error::invalid_argument(format!(
            "padding must not be negative, got {}",
            builder.padding
        )));
    }
    if let Some(split) = &builder.split {
        match split.size {
            SplitSize::Percent(p) if !(1..=99).contains(&p) => {
                return Err(Error::invalid_argument(format!(
                    "split percentage must be in 1..=99, got {p}"
                )));
            }
            SplitSize::Cells { count, .. } if count < 1 => {
                return Err(Error::invalid_argument(format!(
                    "split cell count must be at least 1, got {count}"
                )));
            }
            _ => {}
        }
    }
    if let Some(widget) = &builder.widget {
        widget.options().validate()?;
    }

    let id = nodes.len();
    nodes.push(Node {
        parent,
        kind: NodeKind::Leaf { widget: None },
        border: builder.border,
        border_style: builder.border_style,
        title: builder.title,
        title_align: builder.title_align,
        title_overrun: builder.title_overrun,
        title_style: builder.title_style,
        padding: builder.padding,
        area: Rect::default(),
        interior: Rect::default(),
        widget_rect: Rect::default(),
        under_sized: false,
    });
    if builder.focused {
        focus_marks.push(id);
    }

    if let Some(split) = builder.split {
        let first = build_node(split.first, Some(id), nodes, focus_marks)?;
        let second = build_node(split.second, Some(id), nodes, focus_marks)?;
        nodes[id].kind = NodeKind::Split {
            axis: split.axis,
            size: split.size,
            first,
            second,
        };
    } else {
        nodes[id].kind = NodeKind::Leaf {
            widget: builder.widget,
        };
    }
    Ok(id)
}
