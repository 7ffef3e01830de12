//! Orbit camera for scene navigation.
//!
//! Left-drag orbits around a fixed focus, the scroll wheel dollies within a
//! bounded distance range, and vertical tilt is clamped so the scene is
//! never viewed from below ground. Panning is disabled.

/// Orbit camera resource and controller system.
pub mod viewport_camera;

pub use viewport_camera::{ViewportCamera, camera_controller};
