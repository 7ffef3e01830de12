use std::f32::consts::PI;

use bevy::prelude::*;

use crate::constants::{palette, scene_layout};
use crate::engine::animation::{BobMotion, advance_blade_angle};
use crate::scene::highlight::Highlightable;
use crate::section::{Section, SectionState};

/// Root of the turbine group; bobs as one unit.
#[derive(Component)]
pub struct TurbineAssembly;

/// Blade group rotating about its local z axis.
#[derive(Component)]
pub struct TurbineBlades {
    pub angle: f32,
}

/// Spawn the wind turbine group at its fixed scene offset.
pub fn spawn_wind_turbine(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let position = scene_layout::TURBINE_POSITION;

    commands
        .spawn((
            Transform::from_translation(position),
            Visibility::default(),
            TurbineAssembly,
            BobMotion::rest_y(
                position.y,
                scene_layout::TURBINE_BOB_FREQUENCY,
                scene_layout::TURBINE_BOB_AMPLITUDE,
            ),
        ))
        .with_children(|parent| {
            // Tower, tapered towards the top
            parent.spawn((
                Mesh3d(meshes.add(ConicalFrustum {
                    radius_top: 0.1,
                    radius_bottom: 0.15,
                    height: 4.0,
                })),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette::TOWER_IDLE,
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.0, 0.0),
                Highlightable {
                    section: Section::Turbine,
                    base: palette::TOWER_IDLE,
                    highlighted: palette::TOWER_HIGHLIGHT,
                },
            ));

            // Nacelle housing
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.6, 0.3, 1.2))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette::NACELLE_IDLE,
                    ..default()
                })),
                Transform::from_xyz(0.0, 2.2, 0.0),
                Highlightable {
                    section: Section::Turbine,
                    base: palette::NACELLE_IDLE,
                    highlighted: palette::NACELLE_HIGHLIGHT,
                },
            ));

            // Hub
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(0.15))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette::HUB_IDLE,
                    ..default()
                })),
                Transform::from_xyz(0.0, 2.2, 0.6),
                Highlightable {
                    section: Section::Turbine,
                    base: palette::HUB_IDLE,
                    highlighted: palette::HUB_HIGHLIGHT,
                },
            ));

            // Blade group: three blades at 120 degree spacing
            parent
                .spawn((
                    Transform::from_xyz(0.0, 2.2, 0.6),
                    Visibility::default(),
                    TurbineBlades { angle: 0.0 },
                ))
                .with_children(|blades| {
                    for blade_index in 0..3 {
                        blades.spawn((
                            Mesh3d(meshes.add(Cuboid::new(0.02, 1.5, 0.1))),
                            MeshMaterial3d(materials.add(StandardMaterial {
                                base_color: palette::BLADE_IDLE,
                                alpha_mode: AlphaMode::Blend,
                                ..default()
                            })),
                            Transform::from_rotation(Quat::from_rotation_z(
                                blade_index as f32 * 2.0 * PI / 3.0,
                            )),
                            Highlightable {
                                section: Section::Turbine,
                                base: palette::BLADE_IDLE,
                                highlighted: palette::BLADE_HIGHLIGHT,
                            },
                        ));
                    }
                });

            // Foundation
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.3, 0.2))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: palette::TURBINE_BASE,
                    ..default()
                })),
                Transform::from_xyz(0.0, -2.2, 0.0),
            ));
        });
}

/// Accumulate blade rotation each frame refresh while animation is enabled.
pub fn spin_turbine_blades(
    state: Res<SectionState>,
    mut query: Query<(&mut TurbineBlades, &mut Transform)>,
) {
    for (mut blades, mut transform) in &mut query {
        blades.angle = advance_blade_angle(blades.angle, state.animation_enabled());
        transform.rotation = Quat::from_rotation_z(blades.angle);
    }
}
