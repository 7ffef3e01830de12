//! 3D scene composition: the turbine and pond groups placed at fixed,
//! non-overlapping offsets, section-driven highlighting, and the
//! energy-particle group that exists only while the energy section is
//! active.

/// Energy-flow particle presence and drift.
pub mod energy_flow;

/// Section-keyed colour pairs and the recolour system.
pub mod highlight;

/// Salt pond group: base, water, crystals, pump, irrigation channels.
pub mod pond;

/// Wind turbine group: tower, nacelle, hub, blades, base.
pub mod turbine;
