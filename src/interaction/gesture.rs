use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::ScreenPoint;
use crate::interaction::{ViewportController, ZoomOutcome};

/// Host-assigned identity of one touch/pointer contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One raw pointer event in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pointer: PointerId,
    pub position: ScreenPoint,
}

impl PointerEvent {
    #[must_use]
    pub fn down(pointer: u64, x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down, pointer, x, y)
    }

    #[must_use]
    pub fn moved(pointer: u64, x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, pointer, x, y)
    }

    #[must_use]
    pub fn up(pointer: u64, x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up, pointer, x, y)
    }

    #[must_use]
    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, 0, 0.0, 0.0)
    }

    fn new(kind: PointerEventKind, pointer: u64, x: f64, y: f64) -> Self {
        Self {
            kind,
            pointer: PointerId(pointer),
            position: ScreenPoint::new(x, y),
        }
    }
}

/// Host-configurable gates for gesture-driven navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionInputBehavior {
    /// Enables single-pointer panning.
    pub pan_enabled: bool,
    /// Enables two-pointer pinch zoom.
    pub pinch_enabled: bool,
    /// When set, a pan only arms if the pointer goes down inside the plot
    /// rectangle. Pinch always requires its focal point inside the rectangle.
    #[serde(default)]
    pub pan_requires_plot_start: bool,
}

impl Default for InteractionInputBehavior {
    fn default() -> Self {
        Self {
            pan_enabled: true,
            pinch_enabled: true,
            pan_requires_plot_start: false,
        }
    }
}

/// What the host should do with an event after the interpreter saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventDisposition {
    /// Not handled; outer containers may act on it.
    Ignored,
    /// Handled without a visible change.
    Consumed,
    /// Handled and the viewport moved; a redraw is due.
    ViewportChanged,
}

impl EventDisposition {
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self != Self::Ignored
    }

    #[must_use]
    pub fn needs_redraw(self) -> bool {
        self == Self::ViewportChanged
    }
}

/// Baseline of an accepted pinch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchAnchor {
    pub first: PointerId,
    pub second: PointerId,
    /// Midpoint at pinch begin; every step zooms around it.
    pub focal: ScreenPoint,
    /// Pointer distance at the last non-jitter step.
    pub span: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureState {
    Idle,
    Panning {
        pointer: PointerId,
        last: ScreenPoint,
    },
    /// Two or more pointers are down. `None` means the pinch was rejected at
    /// its start and the remaining moves of this pinch are ignored.
    Pinching { anchor: Option<PinchAnchor> },
}

/// Turns raw pointer events into pan and zoom calls on a [`ViewportController`].
///
/// Single-pointer panning and multi-pointer pinching are mutually exclusive:
/// a second pointer discards pan state, and dropping back to one pointer
/// re-arms panning at that pointer's current position.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    behavior: InteractionInputBehavior,
    pointers: IndexMap<PointerId, ScreenPoint>,
    state: GestureState,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new(InteractionInputBehavior::default())
    }
}

impl GestureInterpreter {
    #[must_use]
    pub fn new(behavior: InteractionInputBehavior) -> Self {
        Self {
            behavior,
            pointers: IndexMap::new(),
            state: GestureState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub fn behavior(&self) -> InteractionInputBehavior {
        self.behavior
    }

    pub fn set_behavior(&mut self, behavior: InteractionInputBehavior) {
        self.behavior = behavior;
        self.reset();
    }

    #[must_use]
    pub fn active_pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Drops all tracking state.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.set_state(GestureState::Idle);
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        viewport: &mut ViewportController,
    ) -> EventDisposition {
        match event.kind {
            PointerEventKind::Down => self.on_down(event.pointer, event.position, viewport),
            PointerEventKind::Move => self.on_move(event.pointer, event.position, viewport),
            PointerEventKind::Up => self.on_up(event.pointer, viewport),
            PointerEventKind::Cancel => {
                let was_active = self.state != GestureState::Idle;
                self.reset();
                if was_active {
                    EventDisposition::Consumed
                } else {
                    EventDisposition::Ignored
                }
            }
        }
    }

    fn on_down(
        &mut self,
        pointer: PointerId,
        position: ScreenPoint,
        viewport: &ViewportController,
    ) -> EventDisposition {
        if self.pointers.is_empty() {
            self.set_state(GestureState::Idle);
        }
        self.pointers.insert(pointer, position);

        if self.pointers.len() == 1 {
            self.arm_pan(pointer, position, viewport, true);
        } else {
            self.begin_pinch(viewport);
        }
        EventDisposition::Consumed
    }

    fn on_move(
        &mut self,
        pointer: PointerId,
        position: ScreenPoint,
        viewport: &mut ViewportController,
    ) -> EventDisposition {
        let Some(slot) = self.pointers.get_mut(&pointer) else {
            return EventDisposition::Ignored;
        };
        *slot = position;

        match self.state {
            GestureState::Idle => EventDisposition::Ignored,
            GestureState::Panning {
                pointer: tracked,
                last,
            } => {
                if tracked != pointer || self.pointers.len() != 1 {
                    return EventDisposition::Ignored;
                }
                self.state = GestureState::Panning {
                    pointer: tracked,
                    last: position,
                };
                if viewport.scale() <= 1.0 {
                    return EventDisposition::Ignored;
                }
                if viewport.apply_pan(position.x - last.x, position.y - last.y) {
                    EventDisposition::ViewportChanged
                } else {
                    EventDisposition::Consumed
                }
            }
            GestureState::Pinching { anchor: None } => EventDisposition::Ignored,
            GestureState::Pinching {
                anchor: Some(anchor),
            } => self.update_pinch(anchor, viewport),
        }
    }

    fn on_up(&mut self, pointer: PointerId, viewport: &ViewportController) -> EventDisposition {
        if self.pointers.shift_remove(&pointer).is_none() {
            return EventDisposition::Ignored;
        }
        let was_active = self.state != GestureState::Idle;

        match self.pointers.len() {
            0 => self.set_state(GestureState::Idle),
            1 => {
                let remaining = self.pointers.first().map(|(&id, &position)| (id, position));
                if let (GestureState::Pinching { .. }, Some((id, position))) =
                    (self.state, remaining)
                {
                    self.arm_pan(id, position, viewport, false);
                }
            }
            _ => self.begin_pinch(viewport),
        }

        if was_active {
            EventDisposition::Consumed
        } else {
            EventDisposition::Ignored
        }
    }

    fn arm_pan(
        &mut self,
        pointer: PointerId,
        position: ScreenPoint,
        viewport: &ViewportController,
        fresh_press: bool,
    ) {
        let allowed = self.behavior.pan_enabled
            && (!fresh_press
                || !self.behavior.pan_requires_plot_start
                || viewport.rect().contains(position));
        if allowed {
            self.set_state(GestureState::Panning {
                pointer,
                last: position,
            });
        } else {
            self.set_state(GestureState::Idle);
        }
    }

    fn begin_pinch(&mut self, viewport: &ViewportController) {
        let anchor = self.pinch_pair().and_then(|(first, a, second, b)| {
            if !self.behavior.pinch_enabled {
                return None;
            }
            let focal = a.midpoint(b);
            if !viewport.rect().contains(focal) {
                debug!(
                    focal_x = focal.x,
                    focal_y = focal.y,
                    "pinch rejected: focal point outside plot"
                );
                return None;
            }
            Some(PinchAnchor {
                first,
                second,
                focal,
                span: a.distance_to(b),
            })
        });
        self.set_state(GestureState::Pinching { anchor });
    }

    fn update_pinch(
        &mut self,
        anchor: PinchAnchor,
        viewport: &mut ViewportController,
    ) -> EventDisposition {
        let (Some(&a), Some(&b)) = (
            self.pointers.get(&anchor.first),
            self.pointers.get(&anchor.second),
        ) else {
            return EventDisposition::Ignored;
        };

        let span = a.distance_to(b);
        let rebased = GestureState::Pinching {
            anchor: Some(PinchAnchor { span, ..anchor }),
        };
        if anchor.span <= 0.0 || span <= 0.0 {
            self.state = rebased;
            return EventDisposition::Consumed;
        }

        // Zoom stays centred on the focal point recorded when the pinch began.
        let outcome = viewport.apply_zoom(anchor.focal, span / anchor.span);
        trace!(?outcome, span, "pinch update");
        // Jitter keeps accumulating against the old span; every other
        // outcome measures the next step from the current one.
        if outcome != ZoomOutcome::Jitter {
            self.state = rebased;
        }

        if outcome.changed() {
            EventDisposition::ViewportChanged
        } else {
            EventDisposition::Consumed
        }
    }

    fn pinch_pair(&self) -> Option<(PointerId, ScreenPoint, PointerId, ScreenPoint)> {
        let mut iter = self.pointers.iter();
        let (&first, &a) = iter.next()?;
        let (&second, &b) = iter.next()?;
        Some((first, a, second, b))
    }

    fn set_state(&mut self, state: GestureState) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&state) {
            debug!(from = ?self.state, to = ?state, "gesture state change");
        }
        self.state = state;
    }
}
