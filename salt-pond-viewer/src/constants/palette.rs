use bevy::color::Color;

// Turbine meshes: (idle, highlighted while the turbine section is active)

pub const TOWER_IDLE: Color = Color::srgb(0.40, 0.40, 0.40);
pub const TOWER_HIGHLIGHT: Color = Color::srgb(0.231, 0.510, 0.965);

pub const NACELLE_IDLE: Color = Color::srgb(0.533, 0.533, 0.533);
pub const NACELLE_HIGHLIGHT: Color = Color::srgb(0.376, 0.647, 0.980);

pub const HUB_IDLE: Color = Color::srgb(0.333, 0.333, 0.333);
pub const HUB_HIGHLIGHT: Color = Color::srgb(0.114, 0.306, 0.847);

pub const BLADE_IDLE: Color = Color::srgba(0.80, 0.80, 0.80, 0.9);
pub const BLADE_HIGHLIGHT: Color = Color::srgba(0.859, 0.918, 0.996, 0.9);

pub const TURBINE_BASE: Color = Color::srgb(0.267, 0.267, 0.267);

// Pond meshes: water and pump highlight while the energy section is active

pub const POND_BASE: Color = Color::srgb(0.545, 0.271, 0.075);

pub const WATER_IDLE: Color = Color::srgba(0.310, 0.765, 0.969, 0.8);
pub const WATER_HIGHLIGHT: Color = Color::srgba(0.024, 0.714, 0.831, 0.8);

pub const SALT_CRYSTAL: Color = Color::srgb(0.973, 0.973, 1.0);

pub const PUMP_IDLE: Color = Color::srgb(0.40, 0.40, 0.40);
pub const PUMP_HIGHLIGHT: Color = Color::srgb(0.937, 0.267, 0.267);

pub const PUMP_HANDLE: Color = Color::srgb(0.20, 0.20, 0.20);

pub const IRRIGATION_CHANNEL: Color = Color::srgba(0.310, 0.765, 0.969, 0.6);

/// Sky backdrop behind the scene
pub const SKY: Color = Color::srgb(0.35, 0.56, 0.86);

// UI palette

pub const PANEL_BACKGROUND: Color = Color::srgba(1.0, 1.0, 1.0, 0.92);
pub const NAV_BACKGROUND: Color = Color::srgba(1.0, 1.0, 1.0, 0.20);

pub const NAV_BUTTON_IDLE: Color = Color::srgba(1.0, 1.0, 1.0, 0.0);
pub const NAV_BUTTON_HOVERED: Color = Color::srgba(1.0, 1.0, 1.0, 0.25);
pub const NAV_BUTTON_ACTIVE: Color = Color::srgb(1.0, 1.0, 1.0);

pub const TAB_IDLE: Color = Color::srgb(0.95, 0.95, 0.96);
pub const TAB_ACTIVE: Color = Color::srgb(0.145, 0.388, 0.922);

pub const TEXT_DARK: Color = Color::srgb(0.12, 0.16, 0.22);
pub const TEXT_LIGHT: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TEXT_ACCENT: Color = Color::srgb(0.145, 0.388, 0.922);
pub const TEXT_MUTED: Color = Color::srgb(0.35, 0.40, 0.45);

pub const FPS_TEXT: Color = Color::srgb(1.0, 0.0, 0.0);
