use bevy::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::constants::{palette, scene_layout};
use crate::engine::animation::BobMotion;
use crate::scene::highlight::Highlightable;
use crate::section::Section;

/// Root of the salt pond group.
#[derive(Component)]
pub struct SaltPond;

/// Bobbing brine surface.
#[derive(Component)]
pub struct WaterSurface;

/// Bobbing water pump.
#[derive(Component)]
pub struct WaterPump;

/// Pond-local crystal offsets drawn from an injected random source.
///
/// Taking the generator as a parameter keeps the scatter reproducible:
/// the same seed always yields the same layout.
pub fn crystal_offsets(rng: &mut impl Rng, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.r#gen::<f32>() - 0.5) * scene_layout::SALT_CRYSTAL_SPREAD_X,
                0.15,
                (rng.r#gen::<f32>() - 0.5) * scene_layout::SALT_CRYSTAL_SPREAD_Z,
            )
        })
        .collect()
}

/// Spawn the salt pond group at its fixed scene offset.
pub fn spawn_salt_pond(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = StdRng::seed_from_u64(scene_layout::SALT_CRYSTAL_SEED);
    let crystals = crystal_offsets(&mut rng, scene_layout::SALT_CRYSTAL_COUNT);

    commands
        .spawn((
            Transform::from_translation(scene_layout::POND_POSITION),
            Visibility::default(),
            SaltPond,
        ))
        .with_children(|parent| {
            // Pond basin
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(3.0, 0.2, 2.0))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette::POND_BASE,
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.0, 0.0),
            ));

            // Brine surface, highlighted while the energy section is active
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(2.8, 0.1, 1.8))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette::WATER_IDLE,
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.1, 0.0),
                WaterSurface,
                BobMotion::lifted(
                    0.0,
                    scene_layout::WATER_BOB_LIFT,
                    scene_layout::WATER_BOB_FREQUENCY,
                    scene_layout::WATER_BOB_AMPLITUDE,
                ),
                Highlightable {
                    section: Section::Energy,
                    base: palette::WATER_IDLE,
                    highlighted: palette::WATER_HIGHLIGHT,
                },
            ));

            // Salt crystals scattered on the surface
            for offset in crystals {
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(0.1, 0.1, 0.1))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: palette::SALT_CRYSTAL,
                        ..default()
                    })),
                    Transform::from_translation(offset),
                ));
            }

            // Water pump, highlighted while the energy section is active
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.1, 0.4))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette::PUMP_IDLE,
                    ..default()
                })),
                Transform::from_xyz(-1.0, 0.5, -0.8),
                WaterPump,
                BobMotion::lifted(
                    0.0,
                    scene_layout::PUMP_BOB_LIFT,
                    scene_layout::PUMP_BOB_FREQUENCY,
                    scene_layout::PUMP_BOB_AMPLITUDE,
                ),
                Highlightable {
                    section: Section::Energy,
                    base: palette::PUMP_IDLE,
                    highlighted: palette::PUMP_HIGHLIGHT,
                },
            ));

            // Pump handle
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.3, 0.05, 0.05))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette::PUMP_HANDLE,
                    ..default()
                })),
                Transform::from_xyz(-1.0, 0.8, -0.8),
            ));

            // Irrigation channels along two pond edges
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(2.5, 0.05, 0.2))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette::IRRIGATION_CHANNEL,
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.05, -1.2),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.2, 0.05, 1.8))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette::IRRIGATION_CHANNEL,
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                })),
                Transform::from_xyz(1.2, 0.05, 0.0),
            ));
        });
}
