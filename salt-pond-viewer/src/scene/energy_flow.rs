use bevy::prelude::*;

use crate::constants::scene_layout::{
    ENERGY_PARTICLE_COUNT, ENERGY_PARTICLE_MIN_X, ENERGY_PARTICLE_SPACING,
};
use crate::engine::animation::{advance_particle_x, particle_wobble};
use crate::section::{Section, SectionState};

/// One energy-flow particle drifting from the turbine towards the pond.
#[derive(Component)]
pub struct EnergyParticle {
    pub index: usize,
}

/// Keep particle presence in sync with the active section.
///
/// The particle group exists only while the energy section is active; on
/// leaving it the entities are despawned rather than hidden.
pub fn sync_energy_particles(
    mut commands: Commands,
    state: Res<SectionState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    particles: Query<Entity, With<EnergyParticle>>,
) {
    if !state.is_changed() {
        return;
    }

    let wanted = state.active() == Section::Energy;
    let present = !particles.is_empty();

    if wanted && !present {
        spawn_particle_group(&mut commands, &mut meshes, &mut materials);
    } else if !wanted && present {
        for entity in &particles {
            commands.entity(entity).despawn();
        }
    }
}

fn spawn_particle_group(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(0.05));

    for index in 0..ENERGY_PARTICLE_COUNT {
        let hue = 60.0 + index as f32 * 10.0;
        let position = Vec3::new(
            ENERGY_PARTICLE_MIN_X + index as f32 * ENERGY_PARTICLE_SPACING,
            1.0 + (index as f32).sin() * 0.5,
            0.0,
        );

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::hsl(hue, 0.8, 0.6),
                emissive: Color::hsl(hue, 0.8, 0.3).to_linear(),
                ..default()
            })),
            Transform::from_translation(position),
            EnergyParticle { index },
        ));
    }
}

/// Drift particles along x with a per-index vertical wobble.
///
/// Runs only while the energy section is active and animation is enabled;
/// each particle reads only its own transform.
pub fn drift_energy_particles(
    time: Res<Time>,
    state: Res<SectionState>,
    mut query: Query<(&EnergyParticle, &mut Transform)>,
) {
    if state.active() != Section::Energy || !state.animation_enabled() {
        return;
    }

    let elapsed = time.elapsed_secs();
    for (particle, mut transform) in &mut query {
        transform.translation.x = advance_particle_x(transform.translation.x);
        transform.translation.y += particle_wobble(elapsed, particle.index);
    }
}
