//! 2D overlay: side navigation, per-section content panels, and the
//! physics-formula reference panel.
//!
//! All panel content is static display text keyed off the active section
//! and the selected equation tab; the systems here only route button
//! presses into events and mirror state changes back into the node tree.

/// Bottom content panels for the overview, turbine, and energy sections.
pub mod content_panel;

/// Side navigation with one button per section.
pub mod navigation;

/// Physics-formula reference panel with four equation tabs.
pub mod physics_panel;
