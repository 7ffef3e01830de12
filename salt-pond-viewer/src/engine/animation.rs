//! Per-frame transform update rules for the animated scene entities.
//!
//! Every rule is a pure function of elapsed time, the two shared flags, and
//! the entity's own previous state, so the motion model is testable without
//! a renderer. Systems in `scene` apply these rules to `Transform`s once per
//! frame refresh.

use bevy::prelude::*;

use crate::constants::scene_layout::{
    BLADE_SPIN_STEP, ENERGY_PARTICLE_MAX_X, ENERGY_PARTICLE_MIN_X, ENERGY_PARTICLE_STEP,
    ENERGY_PARTICLE_WOBBLE_FREQUENCY, ENERGY_PARTICLE_WOBBLE_STEP,
};

/// Sinusoidal idle offset: `sin(t * frequency) * amplitude`.
pub fn bob_offset(elapsed: f32, frequency: f32, amplitude: f32) -> f32 {
    (elapsed * frequency).sin() * amplitude
}

/// Advance the blade rotation angle by one frame refresh.
///
/// The increment is fixed per refresh, not time-scaled; the renderer wraps
/// the accumulated angle implicitly.
pub fn advance_blade_angle(angle: f32, animation_enabled: bool) -> f32 {
    if animation_enabled {
        angle + BLADE_SPIN_STEP
    } else {
        angle
    }
}

/// Advance an energy particle's x-coordinate by one frame refresh.
///
/// Crossing the upper bound wraps to the lower bound (a repeating loop,
/// not a bounce).
pub fn advance_particle_x(x: f32) -> f32 {
    let next = x + ENERGY_PARTICLE_STEP;
    if next > ENERGY_PARTICLE_MAX_X {
        ENERGY_PARTICLE_MIN_X
    } else {
        next
    }
}

/// Incremental vertical wobble for one particle this frame.
///
/// Added to the previous y each refresh rather than evaluated as an absolute
/// function of time, so the accumulated drift depends on refresh cadence.
pub fn particle_wobble(elapsed: f32, index: usize) -> f32 {
    (elapsed * ENERGY_PARTICLE_WOBBLE_FREQUENCY + index as f32).sin() * ENERGY_PARTICLE_WOBBLE_STEP
}

/// Idle bob motion applied every frame regardless of the animation toggle.
///
/// `base_y` is the entity's rest height, `lift` a constant offset above it.
#[derive(Component)]
pub struct BobMotion {
    pub base_y: f32,
    pub lift: f32,
    pub frequency: f32,
    pub amplitude: f32,
}

impl BobMotion {
    pub fn rest_y(base_y: f32, frequency: f32, amplitude: f32) -> Self {
        Self {
            base_y,
            lift: 0.0,
            frequency,
            amplitude,
        }
    }

    pub fn lifted(base_y: f32, lift: f32, frequency: f32, amplitude: f32) -> Self {
        Self {
            base_y,
            lift,
            frequency,
            amplitude,
        }
    }

    /// Vertical position at the given elapsed time.
    pub fn y_at(&self, elapsed: f32) -> f32 {
        self.base_y + self.lift + bob_offset(elapsed, self.frequency, self.amplitude)
    }
}

/// System writing each bobbing entity's vertical position for this frame.
pub fn apply_bob_motion(time: Res<Time>, mut query: Query<(&BobMotion, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (bob, mut transform) in &mut query {
        transform.translation.y = bob.y_at(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::scene_layout::{
        PUMP_BOB_AMPLITUDE, PUMP_BOB_FREQUENCY, PUMP_BOB_LIFT, TURBINE_BOB_AMPLITUDE,
        TURBINE_BOB_FREQUENCY, WATER_BOB_AMPLITUDE, WATER_BOB_FREQUENCY, WATER_BOB_LIFT,
    };

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn turbine_bob_matches_closed_form() {
        let bob = BobMotion::rest_y(0.0, TURBINE_BOB_FREQUENCY, TURBINE_BOB_AMPLITUDE);
        for step in 0..200 {
            let t = step as f32 * 0.1;
            let expected = (t * 0.5).sin() * 0.1;
            assert!((bob.y_at(t) - expected).abs() < TOLERANCE, "t = {t}");
        }
    }

    #[test]
    fn water_bob_matches_closed_form() {
        let bob = BobMotion::lifted(0.0, WATER_BOB_LIFT, WATER_BOB_FREQUENCY, WATER_BOB_AMPLITUDE);
        for step in 0..200 {
            let t = step as f32 * 0.07;
            let expected = 0.1 + (t * 2.0).sin() * 0.05;
            assert!((bob.y_at(t) - expected).abs() < TOLERANCE, "t = {t}");
        }
    }

    #[test]
    fn pump_bob_matches_closed_form() {
        let bob = BobMotion::lifted(0.0, PUMP_BOB_LIFT, PUMP_BOB_FREQUENCY, PUMP_BOB_AMPLITUDE);
        for step in 0..200 {
            let t = step as f32 * 0.07;
            let expected = 0.5 + (t * 3.0).sin() * 0.1;
            assert!((bob.y_at(t) - expected).abs() < TOLERANCE, "t = {t}");
        }
    }

    #[test]
    fn blade_angle_advances_by_fixed_step_while_enabled() {
        let mut angle = 0.0;
        for frame in 1..=100 {
            let next = advance_blade_angle(angle, true);
            assert!(
                (next - angle - BLADE_SPIN_STEP).abs() < TOLERANCE,
                "frame {frame}"
            );
            assert!(next > angle, "angle must strictly increase");
            angle = next;
        }
    }

    #[test]
    fn blade_angle_is_constant_while_disabled() {
        let mut angle = 1.234;
        for _ in 0..100 {
            let next = advance_blade_angle(angle, false);
            assert_eq!(next, angle);
            angle = next;
        }
    }

    #[test]
    fn particle_x_wraps_to_lower_bound_after_crossing_upper_bound() {
        // Just below the bound: one step crosses it and must land exactly
        // on the lower bound.
        let x = ENERGY_PARTICLE_MAX_X - ENERGY_PARTICLE_STEP * 0.5;
        assert_eq!(advance_particle_x(x), ENERGY_PARTICLE_MIN_X);

        // Exactly on the bound also wraps (the bound is exclusive).
        assert_eq!(advance_particle_x(ENERGY_PARTICLE_MAX_X), ENERGY_PARTICLE_MIN_X);
    }

    #[test]
    fn particle_x_advances_by_fixed_step_inside_bounds() {
        let mut x = ENERGY_PARTICLE_MIN_X;
        while x + ENERGY_PARTICLE_STEP <= ENERGY_PARTICLE_MAX_X {
            let next = advance_particle_x(x);
            assert!((next - x - ENERGY_PARTICLE_STEP).abs() < TOLERANCE);
            x = next;
        }
    }

    #[test]
    fn particle_wobble_is_bounded_by_step_amplitude() {
        for index in 0..20 {
            for step in 0..100 {
                let t = step as f32 * 0.13;
                assert!(particle_wobble(t, index).abs() <= ENERGY_PARTICLE_WOBBLE_STEP + TOLERANCE);
            }
        }
    }

    #[test]
    fn particle_wobble_is_phase_shifted_per_index() {
        let t: f32 = 1.0;
        let expected = (t * 2.0 + 7.0).sin() * 0.01;
        assert!((particle_wobble(t, 7) - expected).abs() < TOLERANCE);
    }
}
