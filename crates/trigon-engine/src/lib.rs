//! Trigon engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the demo binary: device and
//! surface setup, the window/frame loop, the triangle renderer, and the
//! visibility gate that pauses rendering while the window is off screen.

pub mod core;
pub mod device;
pub mod render;
pub mod time;
pub mod visibility;
pub mod window;

pub mod logging;
