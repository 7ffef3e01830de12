use bevy::math::Vec3;

/// World offset of the wind turbine assembly
pub const TURBINE_POSITION: Vec3 = Vec3::new(-3.0, 0.0, 0.0);

/// World offset of the salt pond group
pub const POND_POSITION: Vec3 = Vec3::new(3.0, -2.0, 0.0);

/// Blade rotation increment per frame refresh while animation is enabled (radians)
pub const BLADE_SPIN_STEP: f32 = 0.05;

/// Turbine assembly idle bob: `y = base + sin(t * 0.5) * 0.1`
pub const TURBINE_BOB_FREQUENCY: f32 = 0.5;
pub const TURBINE_BOB_AMPLITUDE: f32 = 0.1;

/// Pond water idle bob: `y = base + 0.1 + sin(t * 2) * 0.05`
pub const WATER_BOB_LIFT: f32 = 0.1;
pub const WATER_BOB_FREQUENCY: f32 = 2.0;
pub const WATER_BOB_AMPLITUDE: f32 = 0.05;

/// Pump idle bob: `y = base + 0.5 + sin(t * 3) * 0.1`
pub const PUMP_BOB_LIFT: f32 = 0.5;
pub const PUMP_BOB_FREQUENCY: f32 = 3.0;
pub const PUMP_BOB_AMPLITUDE: f32 = 0.1;

/// Number of energy-flow particles while the energy section is active
pub const ENERGY_PARTICLE_COUNT: usize = 20;

/// Horizontal drift per frame refresh for each energy particle
pub const ENERGY_PARTICLE_STEP: f32 = 0.02;

/// Drift bounds: crossing the upper bound wraps back to the lower bound
pub const ENERGY_PARTICLE_MIN_X: f32 = -6.0;
pub const ENERGY_PARTICLE_MAX_X: f32 = 6.0;

/// Initial horizontal spacing between consecutive particles
pub const ENERGY_PARTICLE_SPACING: f32 = 0.6;

/// Vertical wobble added incrementally each frame: `sin(t * 2 + index) * 0.01`
pub const ENERGY_PARTICLE_WOBBLE_FREQUENCY: f32 = 2.0;
pub const ENERGY_PARTICLE_WOBBLE_STEP: f32 = 0.01;

/// Salt crystals scattered on the pond surface
pub const SALT_CRYSTAL_COUNT: usize = 8;

/// Fixed seed so crystal placement is reproducible across runs and tests
pub const SALT_CRYSTAL_SEED: u64 = 0x5A17;

/// Crystal scatter extents in pond-local space (x, z half-ranges)
pub const SALT_CRYSTAL_SPREAD_X: f32 = 2.0;
pub const SALT_CRYSTAL_SPREAD_Z: f32 = 1.5;

/// Orbit camera dolly limits
pub const CAMERA_MIN_DISTANCE: f32 = 5.0;
pub const CAMERA_MAX_DISTANCE: f32 = 20.0;

/// Pitch limits: never below the ground plane, never fully overhead
pub const CAMERA_MIN_PITCH: f32 = 0.0;
pub const CAMERA_MAX_PITCH: f32 = 1.55;

/// Initial camera framing (matches a viewpoint at (0, 5, 10) looking at origin)
pub const CAMERA_INITIAL_DISTANCE: f32 = 11.18;
pub const CAMERA_INITIAL_PITCH: f32 = 0.4636;
pub const CAMERA_INITIAL_YAW: f32 = 0.0;

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
