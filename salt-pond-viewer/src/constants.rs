//! Shared configuration for scene layout, motion, and display colours.

/// Colour pairs and UI palette derived from the visual design.
pub mod palette;

/// Fixed positions, motion parameters, and camera bounds for the scene.
pub mod scene_layout;
