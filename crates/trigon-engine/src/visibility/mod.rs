//! Visibility tracking.
//!
//! The frame loop keeps rescheduling itself while the window is off screen,
//! but skips all GPU work. `VisibilityGate` is the single cell holding that
//! decision: the runtime writes it from occlusion events and reads it once
//! per frame, both on the event-loop thread, so no synchronization is needed.

mod gate;

pub use gate::VisibilityGate;
