//! The container tree: layout, drawing and input routing.

use crate::builder::{Axis, SplitSize};
use crate::layout::{apply_constraints, interior_rect, split_rects};
use celldash_core::draw::{draw_border, Align, BorderOptions, LineStyle, OverrunMode};
use celldash_core::{
    CellCanvas, CellStyle, KeyboardEvent, KeyboardScope, MouseButton, MouseEvent, MouseScope,
    Point, Rect, Result, Widget, RESIZE_MARKER_RUNE,
};
use std::sync::Arc;

pub(crate) enum NodeKind {
    Leaf {
        widget: Option<Arc<dyn Widget>>,
    },
    Split {
        axis: Axis,
        size: SplitSize,
        first: usize,
        second: usize,
    },
}

/// One node of the tree, stored in the container's arena. Parent links are
/// indices, so the tree carries no owning cycles.
pub(crate) struct Node {
    pub(crate) parent: Option<usize>,
    pub(crate) kind: NodeKind,
    pub(crate) border: Option<LineStyle>,
    pub(crate) border_style: CellStyle,
    pub(crate) title: Option<String>,
    pub(crate) title_align: Align,
    pub(crate) title_overrun: OverrunMode,
    pub(crate) title_style: CellStyle,
    pub(crate) padding: i32,
    pub(crate) area: Rect,
    pub(crate) interior: Rect,
    pub(crate) widget_rect: Rect,
    pub(crate) under_sized: bool,
}

/// The container tree.
///
/// Built once via [`ContainerBuilder`](crate::ContainerBuilder); laid out
/// and drawn every frame against the current terminal size; routes keyboard
/// events by focus and mouse events by pointer containment.
pub struct Container {
    nodes: Vec<Node>,
    focused: Option<usize>,
}

impl Container {
    pub(crate) fn from_parts(nodes: Vec<Node>, focused: Option<usize>) -> Self {
        Self { nodes, focused }
    }

    /// Recompute every node's area from the root down.
    fn layout_node(&mut self, id: usize, area: Rect) {
        let bordered = self.nodes[id].border.is_some();
        let padding = self.nodes[id].padding;
        self.nodes[id].area = area;
        let interior = interior_rect(area, bordered, padding);
        self.nodes[id].interior = interior;

        let split = match &self.nodes[id].kind {
            NodeKind::Split {
                axis,
                size,
                first,
                second,
            } => Some((*axis, *size, *first, *second)),
            NodeKind::Leaf { .. } => None,
        };
        if let Some((axis, size, first, second)) = split {
            let (first_area, second_area) = split_rects(interior, axis, size);
            self.layout_node(first, first_area);
            self.layout_node(second, second_area);
        }
    }

    /// Lay out the tree to the canvas area and draw every node: borders and
    /// titles first, then each leaf widget on its own canvas, composed back.
    ///
    /// A widget whose constraints the interior cannot satisfy is skipped and
    /// a resize marker is drawn in its place.
    pub fn draw(&mut self, canvas: &mut CellCanvas) -> Result<()> {
        self.layout_node(0, canvas.area());
        for id in 0..self.nodes.len() {
            self.draw_node(id, canvas)?;
        }
        Ok(())
    }

    fn draw_node(&mut self, id: usize, canvas: &mut CellCanvas) -> Result<()> {
        let (border, area, interior) = {
            let node = &self.nodes[id];
            (node.border, node.area, node.interior)
        };

        if let Some(line_style) = border {
            if area.width >= 2 && area.height >= 2 {
                let node = &self.nodes[id];
                let mut options = BorderOptions::new()
                    .with_line_style(line_style)
                    .with_style(node.border_style);
                if let Some(title) = &node.title {
                    options = options
                        .with_title(title.clone())
                        .with_title_align(node.title_align)
                        .with_title_overrun(node.title_overrun)
                        .with_title_style(node.title_style);
                }
                draw_border(canvas, area, &options)?;
            } else if !area.is_empty() {
                canvas.set_cell(area.center(), RESIZE_MARKER_RUNE, CellStyle::new())?;
            }
        }

        let widget = match &self.nodes[id].kind {
            NodeKind::Leaf { widget: Some(w) } => Some(Arc::clone(w)),
            _ => None,
        };
        let Some(widget) = widget else {
            self.nodes[id].widget_rect = Rect::default();
            return Ok(());
        };

        // Snapshot the options immediately before drawing; the canvas is
        // validated against this snapshot, not against earlier reports.
        let options = widget.options();
        let (widget_rect, under_sized) = apply_constraints(interior, &options);
        self.nodes[id].widget_rect = widget_rect;
        self.nodes[id].under_sized = under_sized;

        if under_sized {
            if !interior.is_empty() {
                canvas.set_cell(interior.center(), RESIZE_MARKER_RUNE, CellStyle::new())?;
            }
            return Ok(());
        }
        if widget_rect.is_empty() {
            return Ok(());
        }

        let mut widget_canvas = CellCanvas::from_size(widget_rect.size())?;
        widget.draw(&mut widget_canvas)?;
        widget_canvas.copy_to_at(canvas, widget_rect.origin())
    }

    fn leaf_widget(&self, id: usize) -> Option<&Arc<dyn Widget>> {
        match &self.nodes[id].kind {
            NodeKind::Leaf { widget } => widget.as_ref(),
            NodeKind::Split { .. } => None,
        }
    }

    fn depth(&self, id: usize) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            current = parent;
            depth += 1;
        }
        depth
    }

    /// Deliver a keyboard event: to the focused leaf's widget when it
    /// subscribed with [`KeyboardScope::Focused`], and to every
    /// [`KeyboardScope::Global`] widget regardless of focus.
    pub fn keyboard(&self, event: &KeyboardEvent) -> Result<()> {
        for id in 0..self.nodes.len() {
            let Some(widget) = self.leaf_widget(id) else {
                continue;
            };
            match widget.options().want_keyboard {
                KeyboardScope::Global => widget.keyboard(event)?,
                KeyboardScope::Focused if self.focused == Some(id) => widget.keyboard(event)?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Deliver a mouse event.
    ///
    /// The target is the deepest leaf whose widget canvas contains the
    /// position and whose widget subscribed; coordinates are translated into
    /// that widget's canvas-local frame. [`MouseScope::Global`] widgets
    /// additionally receive every event translated into their own frame,
    /// where out-of-range coordinates indicate an event elsewhere. A left
    /// click also moves focus to the leaf under the pointer.
    pub fn mouse(&mut self, event: &MouseEvent) -> Result<()> {
        if event.button == MouseButton::Left {
            if let Some(id) = self.leaf_at(event.position) {
                self.focused = Some(id);
            }
        }

        let mut target: Option<(usize, usize)> = None;
        for id in 0..self.nodes.len() {
            let Some(widget) = self.leaf_widget(id) else {
                continue;
            };
            if self.nodes[id].widget_rect.contains(event.position)
                && widget.options().want_mouse != MouseScope::None
            {
                let depth = self.depth(id);
                if target.map_or(true, |(best, _)| depth >= best) {
                    target = Some((depth, id));
                }
            }
        }

        if let Some((_, id)) = target {
            let widget = self.leaf_widget(id).expect("target is a leaf with a widget");
            let local = event.position - self.nodes[id].widget_rect.origin();
            widget.mouse(&MouseEvent::new(local, event.button))?;
        }

        for id in 0..self.nodes.len() {
            if target.map(|(_, t)| t) == Some(id) {
                continue;
            }
            let Some(widget) = self.leaf_widget(id) else {
                continue;
            };
            if widget.options().want_mouse == MouseScope::Global {
                let local = event.position - self.nodes[id].widget_rect.origin();
                widget.mouse(&MouseEvent::new(local, event.button))?;
            }
        }
        Ok(())
    }

    fn leaf_at(&self, position: Point) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for id in 0..self.nodes.len() {
            if self.leaf_widget(id).is_none() {
                continue;
            }
            if self.nodes[id].widget_rect.contains(position) {
                let depth = self.depth(id);
                if best.map_or(true, |(d, _)| depth >= d) {
                    best = Some((depth, id));
                }
            }
        }
        best.map(|(_, id)| id)
    }

    /// Move focus to the next leaf holding a widget, in tree order,
    /// wrapping at the end. A no-op when the tree holds no widgets.
    pub fn focus_next(&mut self) {
        let focusable: Vec<usize> = (0..self.nodes.len())
            .filter(|&id| self.leaf_widget(id).is_some())
            .collect();
        if focusable.is_empty() {
            return;
        }
        let next = match self.focused {
            None => focusable[0],
            Some(current) => {
                let position = focusable.iter().position(|&id| id == current);
                match position {
                    Some(index) => focusable[(index + 1) % focusable.len()],
                    None => focusable[0],
                }
            }
        };
        self.focused = Some(next);
    }

    /// Check whether the leaf holding the given widget is focused.
    ///
    /// Intended for tests and focus indicators.
    #[must_use]
    pub fn is_widget_focused(&self, widget: &Arc<dyn Widget>) -> bool {
        self.focused.is_some_and(|id| {
            self.leaf_widget(id)
                .is_some_and(|held| Arc::ptr_eq(held, widget))
        })
    }
}
