//! Interactive 3D visualisation of wind-to-mechanical-to-potential energy
//! transformation in a traditional salt-pond irrigation setup.
//!
//! A single Bevy application: an orbit-camera scene (wind turbine, salt
//! pond, energy particles), a side navigation switching four content
//! sections, and a physics-formula reference panel. All content is static;
//! per-frame work is limited to cosmetic transform updates.

use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::PresentMode;

pub mod constants;
pub mod engine;
pub mod scene;
pub mod section;
pub mod ui;

use constants::{palette, scene_layout};
use engine::animation::apply_bob_motion;
use engine::camera::{ViewportCamera, camera_controller};
use scene::energy_flow::{drift_energy_particles, sync_energy_particles};
use scene::highlight::apply_section_highlight;
use scene::pond::spawn_salt_pond;
use scene::turbine::{spawn_wind_turbine, spin_turbine_blades};
use section::{
    AnimationToggleEvent, SectionSelectionEvent, SectionState, handle_animation_toggle_events,
    handle_section_selection_events, section_keyboard_shortcuts,
};
use ui::content_panel::{
    animation_toggle_button, spawn_content_panels, update_animation_toggle_label,
    update_section_panels,
};
use ui::navigation::{navigation_buttons, spawn_navigation, style_navigation_buttons};
use ui::physics_panel::{
    EquationTab, equation_tab_buttons, spawn_physics_panel, update_equation_display,
};

/// Create the application with scene, UI, and input systems registered.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default());

    app.insert_resource(ClearColor(palette::SKY))
        .init_resource::<SectionState>()
        .init_resource::<ViewportCamera>()
        .init_resource::<EquationTab>()
        .add_event::<SectionSelectionEvent>()
        .add_event::<AnimationToggleEvent>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                camera_controller,
                section_keyboard_shortcuts,
                navigation_buttons,
                animation_toggle_button,
                equation_tab_buttons,
                handle_section_selection_events,
                handle_animation_toggle_events,
            ),
        )
        .add_systems(
            Update,
            (
                spin_turbine_blades,
                apply_bob_motion,
                sync_energy_particles,
                drift_energy_particles,
                apply_section_highlight,
                update_section_panels,
                update_animation_toggle_label,
                update_equation_display,
                style_navigation_buttons,
                fps_text_update_system,
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Windmill Energy - Salt Pond Irrigation".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Spawn lighting, camera, the 3D scene groups, and the UI overlay.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("Initialising salt-pond windmill scene");

    spawn_lighting(&mut commands);
    spawn_viewport_camera(&mut commands);

    spawn_wind_turbine(&mut commands, &mut meshes, &mut materials);
    spawn_salt_pond(&mut commands, &mut meshes, &mut materials);

    spawn_header(&mut commands);
    spawn_navigation(&mut commands);
    spawn_content_panels(&mut commands);
    spawn_physics_panel(&mut commands);
    spawn_fps_text(&mut commands);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_viewport_camera(commands: &mut Commands) {
    let viewport = ViewportCamera::default();

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: scene_layout::CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(viewport.eye_position())
            .looking_at(viewport.focus_point, Vec3::Y),
    ));
}

fn spawn_header(commands: &mut Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(24.0),
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|header| {
            header.spawn((
                Text::new("Windmill Energy"),
                TextFont {
                    font_size: 34.0,
                    ..default()
                },
                TextColor(palette::TEXT_LIGHT),
            ));
            header.spawn((
                Text::new("Energy Transformation in Salt-Pond Irrigation"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(palette::TEXT_LIGHT),
            ));
        });
}

#[derive(Component)]
struct FpsText;

fn spawn_fps_text(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(palette::FPS_TEXT),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
