//! Viewport state and the gestures that drive it.

mod gesture;
mod viewport;

pub use gesture::{
    EventDisposition, GestureInterpreter, GestureState, InteractionInputBehavior, PinchAnchor,
    PointerEvent, PointerEventKind, PointerId,
};
pub use viewport::{TranslationBounds, ViewportController, ZoomBehavior, ZoomOutcome};
