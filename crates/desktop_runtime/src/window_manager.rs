//! Per-window geometry: initial placement, drag, resize, maximize, and responsive re-layout.
//!
//! The manager in [`crate::reducer`] only knows which windows are open and how they stack.
//! Everything about where a window sits on screen lives in a [`WindowViewState`] owned by the
//! window view and discarded when the window closes.

use platform_host::Viewport;

use crate::model::{PointerPosition, ResizeEdge, WindowIdentity, WindowRect};

/// Layout constants for the desktop surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopLayoutConfig {
    /// Viewports narrower than this are laid out as mobile.
    pub mobile_breakpoint: i32,
    /// Height reserved for the taskbar along the bottom edge.
    pub taskbar_height: i32,
    /// Gap kept between a freshly placed window and the work-area edge.
    pub margin: i32,
    pub max_width: i32,
    pub max_height: i32,
    /// Per-identity diagonal offset so windows opened together don't overlap exactly.
    pub cascade_step: i32,
    pub min_width: i32,
    pub min_height: i32,
    /// Part of a dragged window that must stay on screen horizontally.
    pub min_visible_width: i32,
    /// Part of a dragged window that must stay on screen vertically.
    pub min_visible_height: i32,
}

impl Default for DesktopLayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
            taskbar_height: 48,
            margin: 40,
            max_width: 900,
            max_height: 620,
            cascade_step: 30,
            min_width: 320,
            min_height: 200,
            min_visible_width: 120,
            min_visible_height: 40,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

impl DesktopLayoutConfig {
    pub fn layout_mode(&self, viewport: Viewport) -> LayoutMode {
        if viewport.width < self.mobile_breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    /// Viewport minus the taskbar strip.
    pub fn work_area(&self, viewport: Viewport) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: viewport.width,
            h: (viewport.height - self.taskbar_height).max(0),
        }
    }

    /// Centered, cascaded, size-capped rect for a window opened on a desktop-sized viewport.
    pub fn initial_rect(&self, id: WindowIdentity, viewport: Viewport) -> WindowRect {
        let area = self.work_area(viewport);
        let w = (area.w - 2 * self.margin)
            .min(self.max_width)
            .max(self.min_width);
        let h = (area.h - 2 * self.margin)
            .min(self.max_height)
            .max(self.min_height);
        let cascade = id.index() as i32 * self.cascade_step;

        WindowRect {
            x: clamp_axis(area.x + (area.w - w) / 2 + cascade, area.x, area.w - w),
            y: clamp_axis(area.y + (area.h - h) / 2 + cascade, area.y, area.h - h),
            w,
            h,
        }
    }

    fn clamp_origin(&self, rect: WindowRect, viewport: Viewport) -> WindowRect {
        WindowRect {
            x: clamp_axis(rect.x, 0, viewport.width - self.min_visible_width),
            y: clamp_axis(rect.y, 0, viewport.height - self.min_visible_height),
            ..rect
        }
    }
}

/// Clamps `value` into `[min, max]`, with `max` floored at `min`.
fn clamp_axis(value: i32, min: i32, max: i32) -> i32 {
    value.clamp(min, max.max(min))
}

/// Applies resize deltas for a given edge/corner drag.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let moves_west = matches!(
        edge,
        ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest
    );
    let moves_east = matches!(
        edge,
        ResizeEdge::East | ResizeEdge::NorthEast | ResizeEdge::SouthEast
    );
    let moves_north = matches!(
        edge,
        ResizeEdge::North | ResizeEdge::NorthEast | ResizeEdge::NorthWest
    );
    let moves_south = matches!(
        edge,
        ResizeEdge::South | ResizeEdge::SouthEast | ResizeEdge::SouthWest
    );

    let mut rect = start;
    if moves_west {
        rect.x += dx;
        rect.w -= dx;
    } else if moves_east {
        rect.w += dx;
    }
    if moves_north {
        rect.y += dy;
        rect.h -= dy;
    } else if moves_south {
        rect.h += dy;
    }
    rect
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// Visible mode of a rendered window. Minimized windows are not rendered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Normal,
    Maximized,
    Dragging,
    Resizing,
}

/// Transient geometry of one open window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowViewState {
    pub id: WindowIdentity,
    /// Normal-mode rect. Kept while maximized so restore has something to return to.
    pub rect: WindowRect,
    pub restore_rect: Option<WindowRect>,
    pub maximized: bool,
    /// Maximized because the viewport went mobile, not because the visitor asked.
    pub forced_maximized: bool,
    pub drag: Option<DragSession>,
    pub resize: Option<ResizeSession>,
    pub viewport: Viewport,
    pub config: DesktopLayoutConfig,
}

impl WindowViewState {
    pub fn initial(id: WindowIdentity, viewport: Viewport, config: DesktopLayoutConfig) -> Self {
        let mobile = config.layout_mode(viewport) == LayoutMode::Mobile;
        Self {
            id,
            rect: config.initial_rect(id, viewport),
            restore_rect: None,
            maximized: mobile,
            forced_maximized: mobile,
            drag: None,
            resize: None,
            viewport,
            config,
        }
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.config.layout_mode(self.viewport)
    }

    pub fn mode(&self) -> WindowMode {
        if self.maximized {
            WindowMode::Maximized
        } else if self.drag.is_some() {
            WindowMode::Dragging
        } else if self.resize.is_some() {
            WindowMode::Resizing
        } else {
            WindowMode::Normal
        }
    }

    /// Rect the frame is rendered at.
    pub fn frame_rect(&self) -> WindowRect {
        if self.maximized {
            self.config.work_area(self.viewport)
        } else {
            self.rect
        }
    }

    pub fn maximize_control_visible(&self) -> bool {
        self.layout_mode() == LayoutMode::Desktop
    }

    fn accepts_gesture(&self) -> bool {
        self.mode() == WindowMode::Normal && self.layout_mode() == LayoutMode::Desktop
    }

    /// Starts a title-bar drag. Returns `false` when the window can't be dragged right now.
    pub fn begin_drag(&mut self, pointer: PointerPosition) -> bool {
        if !self.accepts_gesture() {
            return false;
        }
        self.drag = Some(DragSession {
            pointer_start: pointer,
            rect_start: self.rect,
        });
        true
    }

    pub fn drag_to(&mut self, pointer: PointerPosition) {
        let Some(drag) = self.drag else {
            return;
        };
        let moved = drag.rect_start.offset(
            pointer.x - drag.pointer_start.x,
            pointer.y - drag.pointer_start.y,
        );
        self.rect = self.config.clamp_origin(moved, self.viewport);
    }

    pub fn begin_resize(&mut self, edge: ResizeEdge, pointer: PointerPosition) -> bool {
        if !self.accepts_gesture() {
            return false;
        }
        self.resize = Some(ResizeSession {
            edge,
            pointer_start: pointer,
            rect_start: self.rect,
        });
        true
    }

    pub fn resize_to(&mut self, pointer: PointerPosition) {
        let Some(resize) = self.resize else {
            return;
        };
        let start = resize.rect_start;
        let cfg = self.config;
        let mut rect = resize_rect(
            start,
            resize.edge,
            pointer.x - resize.pointer_start.x,
            pointer.y - resize.pointer_start.y,
        );

        // West/north edges move the origin; pin the opposite edge when a limit is hit.
        let right = start.x + start.w;
        let bottom = start.y + start.h;
        if rect.x != start.x {
            rect.x = rect.x.max(0).min(right - cfg.min_width);
            rect.w = right - rect.x;
        }
        if rect.y != start.y {
            rect.y = rect.y.max(0).min(bottom - cfg.min_height);
            rect.h = bottom - rect.y;
        }
        self.rect = rect.clamped_min(cfg.min_width, cfg.min_height);
    }

    /// Ends any drag or resize in progress. Returns whether one was running.
    pub fn end_gesture(&mut self) -> bool {
        let was_active = self.drag.is_some() || self.resize.is_some();
        self.drag = None;
        self.resize = None;
        was_active
    }

    /// Maximize control and title-bar double-click. Does nothing on mobile layouts.
    pub fn toggle_maximize(&mut self) -> bool {
        if self.layout_mode() == LayoutMode::Mobile {
            return false;
        }
        self.end_gesture();
        if self.maximized {
            if let Some(rect) = self.restore_rect.take() {
                self.rect = rect;
            }
            self.maximized = false;
        } else {
            self.restore_rect = Some(self.rect);
            self.maximized = true;
        }
        self.forced_maximized = false;
        true
    }

    /// Re-evaluates layout after a viewport change. Returns whether a gesture was cancelled.
    pub fn apply_viewport(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        match self.layout_mode() {
            LayoutMode::Mobile => {
                let cancelled = self.end_gesture();
                if !self.maximized {
                    self.restore_rect = Some(self.rect);
                    self.maximized = true;
                    self.forced_maximized = true;
                }
                cancelled
            }
            LayoutMode::Desktop => {
                if self.forced_maximized {
                    self.rect = self
                        .restore_rect
                        .take()
                        .unwrap_or_else(|| self.config.initial_rect(self.id, viewport));
                    self.maximized = false;
                    self.forced_maximized = false;
                }
                self.rect = self.config.clamp_origin(self.rect, viewport);
                false
            }
        }
    }
}
