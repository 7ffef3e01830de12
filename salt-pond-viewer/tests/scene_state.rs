// Headless integration tests for the section state machine and the
// frame-driven scene updates.
//
// Runs the real systems inside a minimal Bevy app (no window, no GPU):
// asset storages are registered manually so the spawn helpers work, and
// frames are driven with `app.update()`.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;

use salt_pond_viewer::constants::scene_layout::{
    BLADE_SPIN_STEP, ENERGY_PARTICLE_COUNT, ENERGY_PARTICLE_MAX_X, ENERGY_PARTICLE_MIN_X,
};
use salt_pond_viewer::engine::animation::{BobMotion, apply_bob_motion};
use salt_pond_viewer::scene::energy_flow::{
    EnergyParticle, drift_energy_particles, sync_energy_particles,
};
use salt_pond_viewer::scene::highlight::{Highlightable, apply_section_highlight};
use salt_pond_viewer::scene::pond::spawn_salt_pond;
use salt_pond_viewer::scene::turbine::{TurbineBlades, spawn_wind_turbine, spin_turbine_blades};
use salt_pond_viewer::section::{
    AnimationToggleEvent, Section, SectionSelectionEvent, SectionState, SelectionSource,
    handle_animation_toggle_events, handle_section_selection_events,
};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()));
    app.init_asset::<Mesh>();
    app.init_asset::<StandardMaterial>();

    app.init_resource::<SectionState>()
        .add_event::<SectionSelectionEvent>()
        .add_event::<AnimationToggleEvent>()
        .add_systems(
            Startup,
            |mut commands: Commands,
             mut meshes: ResMut<Assets<Mesh>>,
             mut materials: ResMut<Assets<StandardMaterial>>| {
                spawn_wind_turbine(&mut commands, &mut meshes, &mut materials);
                spawn_salt_pond(&mut commands, &mut meshes, &mut materials);
            },
        )
        .add_systems(
            Update,
            (
                handle_section_selection_events,
                handle_animation_toggle_events,
                spin_turbine_blades,
                apply_bob_motion,
                sync_energy_particles,
                drift_energy_particles,
                apply_section_highlight,
            ),
        );
    app
}

fn select_section(app: &mut App, section: Section) {
    app.world_mut().send_event(SectionSelectionEvent {
        section,
        source: SelectionSource::Keyboard,
    });
    // Two frames: one to handle the event, one for dependents to observe
    // the change regardless of in-frame system ordering.
    app.update();
    app.update();
}

fn toggle_animation(app: &mut App) {
    app.world_mut().send_event(AnimationToggleEvent);
    app.update();
    app.update();
}

fn particle_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<EnergyParticle>>()
        .iter(app.world())
        .count()
}

fn blade_angle(app: &mut App) -> f32 {
    let mut query = app.world_mut().query::<&TurbineBlades>();
    query.single(app.world()).unwrap().angle
}

#[test]
fn particles_exist_only_while_energy_section_is_active() {
    let mut app = test_app();
    app.update();
    app.update();
    assert_eq!(particle_count(&mut app), 0, "no particles in overview");

    select_section(&mut app, Section::Energy);
    assert_eq!(particle_count(&mut app), ENERGY_PARTICLE_COUNT);

    select_section(&mut app, Section::Turbine);
    assert_eq!(
        particle_count(&mut app),
        0,
        "particle group must be despawned, not hidden"
    );

    select_section(&mut app, Section::Energy);
    assert_eq!(particle_count(&mut app), ENERGY_PARTICLE_COUNT);
}

#[test]
fn particle_x_wraps_to_lower_bound_in_a_running_app() {
    let mut app = test_app();
    select_section(&mut app, Section::Energy);

    {
        let mut query = app
            .world_mut()
            .query::<(&EnergyParticle, &mut Transform)>();
        for (_, mut transform) in query.iter_mut(app.world_mut()) {
            transform.translation.x = ENERGY_PARTICLE_MAX_X;
        }
    }

    app.update();

    let mut query = app
        .world_mut()
        .query::<(&EnergyParticle, &mut Transform)>();
    for (particle, transform) in query.iter(app.world()) {
        assert_eq!(
            transform.translation.x, ENERGY_PARTICLE_MIN_X,
            "particle {} must wrap exactly to the lower bound",
            particle.index
        );
    }
}

#[test]
fn blade_angle_advances_only_while_animation_is_enabled() {
    let mut app = test_app();
    app.update();

    let before = blade_angle(&mut app);
    for _ in 0..5 {
        app.update();
    }
    let after = blade_angle(&mut app);
    assert!(
        (after - before - 5.0 * BLADE_SPIN_STEP).abs() < 1e-5,
        "one fixed increment per frame while enabled"
    );

    toggle_animation(&mut app);
    let frozen = blade_angle(&mut app);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(blade_angle(&mut app), frozen, "angle constant while paused");

    toggle_animation(&mut app);
    assert!(blade_angle(&mut app) > frozen, "resumes advancing");
}

#[test]
fn idle_bob_continues_while_animation_is_paused() {
    let mut app = test_app();
    app.update();
    toggle_animation(&mut app);
    app.update();

    let elapsed = app.world().resource::<Time>().elapsed_secs();
    let mut query = app.world_mut().query::<(&BobMotion, &Transform)>();
    let mut checked = 0;
    for (bob, transform) in query.iter(app.world()) {
        assert!(
            (transform.translation.y - bob.y_at(elapsed)).abs() < 1e-4,
            "bob position must track elapsed time while paused"
        );
        checked += 1;
    }
    assert!(checked >= 3, "turbine, water, and pump all bob");
}

#[test]
fn selecting_turbine_switches_highlight_colours() {
    let mut app = test_app();
    app.update();
    app.update();

    assert_highlights(&mut app, Section::Overview);
    select_section(&mut app, Section::Turbine);
    assert_highlights(&mut app, Section::Turbine);
    select_section(&mut app, Section::Energy);
    assert_highlights(&mut app, Section::Energy);
}

#[test]
fn end_to_end_section_and_toggle_scenario() {
    let mut app = test_app();
    app.update();
    assert_eq!(
        app.world().resource::<SectionState>().active(),
        Section::Overview
    );
    assert!(app.world().resource::<SectionState>().animation_enabled());

    select_section(&mut app, Section::Turbine);
    assert_eq!(
        app.world().resource::<SectionState>().active(),
        Section::Turbine
    );
    assert_highlights(&mut app, Section::Turbine);

    toggle_animation(&mut app);
    assert!(!app.world().resource::<SectionState>().animation_enabled());
    let frozen = blade_angle(&mut app);
    for _ in 0..4 {
        app.update();
    }
    assert_eq!(blade_angle(&mut app), frozen);
}

/// Every highlightable mesh shows its highlighted colour exactly when its
/// associated section is the active one.
fn assert_highlights(app: &mut App, active: Section) {
    let mut query = app
        .world_mut()
        .query::<(&Highlightable, &MeshMaterial3d<StandardMaterial>)>();
    let expectations: Vec<(Color, Handle<StandardMaterial>)> = query
        .iter(app.world())
        .map(|(highlight, material)| {
            let expected = if highlight.section == active {
                highlight.highlighted
            } else {
                highlight.base
            };
            (expected, material.0.clone())
        })
        .collect();
    assert!(!expectations.is_empty());

    let materials = app.world().resource::<Assets<StandardMaterial>>();
    for (expected, handle) in expectations {
        let material = materials.get(&handle).unwrap();
        assert_eq!(material.base_color, expected);
    }
}
