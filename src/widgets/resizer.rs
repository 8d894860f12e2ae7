//! Resizer widget: panes separated by draggable handles.
//!
//! The panes share the frame along one axis. Pane `i` owns the span between
//! boundary `i - 1` and boundary `i` of a [`ResizeChain`]; its handle sits at
//! the trailing end of that span. Dragging a handle moves its boundary, and
//! resizing the frame rescales every boundary proportionally.

use crate::config::ResizerConfig;
use crate::error::Result;
use crate::event::gesture::Drag;
use crate::event::input::InputEvent;
use crate::geometry::{Axis, Constraints, Region, Size};
use crate::layout::ResizeChain;
use crate::render::strip::Strip;
use crate::render::Frame;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// HandleBar
// ---------------------------------------------------------------------------

/// Default handle: a line of box-drawing characters across the resize axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleBar {
    axis: Axis,
}

impl HandleBar {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    fn glyph(&self) -> char {
        match self.axis {
            Axis::Horizontal => '│',
            Axis::Vertical => '─',
        }
    }
}

impl Widget for HandleBar {
    fn widget_type(&self) -> &str {
        "HandleBar"
    }

    fn layout(&mut self, frame: &mut Frame) -> Size {
        let size = frame.max();
        let style = frame.theme().handle();
        for y in 0..size.height {
            frame.push(Strip::repeat(y, 0, self.glyph(), size.width, style.clone()));
        }
        size
    }
}

// ---------------------------------------------------------------------------
// Pane
// ---------------------------------------------------------------------------

/// One resizable pane: its content plus an optional custom handle.
pub struct Pane {
    content: Box<dyn Widget>,
    handle: Option<Box<dyn Widget>>,
    /// Handle length along the axis, measured when the chain initializes.
    handle_len: i32,
    drag: Drag,
}

impl Pane {
    pub fn new(content: impl Widget + 'static) -> Self {
        Self {
            content: Box::new(content),
            handle: None,
            handle_len: 0,
            drag: Drag::new(),
        }
    }

    /// Replace the default handle bar (builder pattern).
    ///
    /// The handle's natural length along the axis decides how much of the
    /// pane it occupies. The last pane's handle is never drawn.
    pub fn with_handle(mut self, handle: impl Widget + 'static) -> Self {
        self.handle = Some(Box::new(handle));
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}

impl std::fmt::Debug for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pane")
            .field("content", &self.content.widget_type())
            .field("handle", &self.handle.as_ref().map(|h| h.widget_type().to_owned()))
            .field("handle_len", &self.handle_len)
            .field("drag", &self.drag)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Resizer
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Resizer {
    chain: ResizeChain,
    panes: Vec<Pane>,
    handle_thickness: i32,
}

impl Resizer {
    /// Lay `panes` out along `axis` with the default minimum pane length.
    ///
    /// Fails when `panes` is empty.
    pub fn new(axis: Axis, panes: Vec<Pane>) -> Result<Self> {
        Self::from_config(&ResizerConfig { axis, ..ResizerConfig::default() }, panes)
    }

    pub fn from_config(config: &ResizerConfig, panes: Vec<Pane>) -> Result<Self> {
        let chain = ResizeChain::new(config.axis, panes.len(), config.min_region_length)?;
        Ok(Self {
            chain,
            panes,
            handle_thickness: config.handle_thickness.max(0),
        })
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn chain(&self) -> &ResizeChain {
        &self.chain
    }

    pub fn axis(&self) -> Axis {
        self.chain.axis()
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    /// Rectangle of the handle trailing pane `index`, in local coordinates.
    /// Empty for the last pane and before the first frame.
    pub fn handle_rect(&self, index: usize, cross: i32) -> Region {
        if index + 1 >= self.panes.len() {
            return Region::EMPTY;
        }
        let Ok(bounds) = self.chain.region_bounds(index, cross) else {
            return Region::EMPTY;
        };
        let axis = self.chain.axis();
        let handle_len = self.panes[index].handle_len;
        axis.split(bounds, axis.main(bounds.size()) - handle_len).1
    }

    // ── Frame steps ──────────────────────────────────────────────────

    /// Measure every pane and handle under loose constraints and place the
    /// initial boundaries.
    fn initialize(&mut self, frame: &mut Frame) {
        let size = frame.max();
        let axis = self.chain.axis();
        let loose = Constraints::loose(size);
        let thickness = self.handle_thickness;

        let mut natural = Vec::with_capacity(self.panes.len());
        for pane in &mut self.panes {
            let measured = frame.record(|f| f.with_constraints(loose, |f| pane.content.layout(f)));
            natural.push(axis.main(measured));
            pane.handle_len = match pane.handle.as_mut() {
                Some(handle) => {
                    let measured =
                        frame.record(|f| f.with_constraints(loose, |f| handle.layout(f)));
                    axis.main(measured).max(1)
                }
                None => thickness,
            };
        }

        self.chain.initialize(size, &natural);
    }

    /// Feed this frame's mouse events to every handle; returns whether any
    /// boundary moved.
    fn process_drags(&mut self, frame: &Frame) -> bool {
        let axis = self.chain.axis();
        let cross = axis.cross(frame.max());
        let mut moved = false;

        for event in frame.events() {
            let InputEvent::Mouse(me) = event else {
                continue;
            };
            let pointer = frame.to_local(me);
            for index in 0..self.chain.handle_count() {
                let hit = self.handle_rect(index, cross);
                let anchor = axis.main_coord(hit.offset());
                let Some(delta) = self.panes[index].drag.update(me.kind, pointer, hit, axis, anchor)
                else {
                    continue;
                };
                match self.chain.drag(index, delta) {
                    Ok(changed) => moved |= changed,
                    Err(err) => tracing::warn!(%err, "handle drag rejected"),
                }
            }
        }
        moved
    }
}

impl Widget for Resizer {
    fn widget_type(&self) -> &str {
        "Resizer"
    }

    fn layout(&mut self, frame: &mut Frame) -> Size {
        let size = frame.max();
        let axis = self.chain.axis();

        if let [only] = self.panes.as_mut_slice() {
            frame.layout_in(size.to_region(), |f| only.content.layout(f));
            return size;
        }

        if !self.chain.is_initialized() {
            self.initialize(frame);
        }
        self.chain.resize(size);
        if self.process_drags(frame) {
            frame.invalidate();
        }

        let cross = axis.cross(size);
        let last = self.panes.len() - 1;
        for (index, pane) in self.panes.iter_mut().enumerate() {
            let Ok(bounds) = self.chain.region_bounds(index, cross) else {
                continue;
            };
            let handle_len = if index == last { 0 } else { pane.handle_len };
            let (content, handle) = axis.split(bounds, axis.main(bounds.size()) - handle_len);

            frame.layout_in(content, |f| pane.content.layout(f));
            if index != last && !handle.size().is_empty() {
                frame.layout_in(handle, |f| match pane.handle.as_mut() {
                    Some(custom) => custom.layout(f),
                    None => HandleBar::new(axis).layout(f),
                });
            }
        }
        size
    }
}

// ===========================================================================
// Tests
// ===========================================================================
