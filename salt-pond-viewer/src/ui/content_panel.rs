use bevy::prelude::*;

use crate::constants::palette;
use crate::section::{AnimationToggleEvent, Section, SectionState};

/// Root node of a content panel shown while its section is active.
#[derive(Component)]
pub struct SectionPanel(pub Section);

/// Button flipping the shared animation toggle.
#[derive(Component)]
pub struct AnimationToggleButton;

/// Label on the animation toggle, switching between pause and start.
#[derive(Component)]
pub struct AnimationToggleLabel;

const OVERVIEW_BODY: &str = "The windmill converts the kinetic energy of moving air into \
mechanical energy that drives a water pump. The system demonstrates an efficient chain of \
energy transformations in traditional salt farming.";

const OVERVIEW_STAGES: [&str; 4] = [
    "Wind Energy",
    "Mechanical Energy",
    "Potential Energy",
    "Efficiency",
];

const TURBINE_BODY: &str = "The blades capture the kinetic energy of the wind and convert it \
into rotation. That energy is transmitted through the shaft to the water pump.";

const TURBINE_HINT: &str = "Press the button (or space) to control the blade animation";

const ENERGY_CHAIN: [&str; 4] = [
    "Wind kinetic energy \u{2192} blade mechanical energy",
    "Blade mechanical energy \u{2192} shaft mechanical energy",
    "Shaft mechanical energy \u{2192} pump mechanical energy",
    "Pump mechanical energy \u{2192} water potential energy",
];

/// Spawn the three bottom content panels; only the overview starts visible.
pub fn spawn_content_panels(commands: &mut Commands) {
    spawn_panel(commands, Section::Overview, Visibility::Visible, |panel| {
        spawn_heading(panel, "Wind Energy Transformation");
        spawn_body(panel, OVERVIEW_BODY);
        panel
            .spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(16.0),
                margin: UiRect::top(Val::Px(8.0)),
                ..default()
            })
            .with_children(|row| {
                for stage in OVERVIEW_STAGES {
                    row.spawn((
                        Text::new(stage),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(palette::TEXT_ACCENT),
                    ));
                }
            });
    });

    spawn_panel(commands, Section::Turbine, Visibility::Hidden, |panel| {
        spawn_heading(panel, "Windmill Mechanism");
        spawn_body(panel, TURBINE_BODY);
        panel
            .spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(12.0),
                align_items: AlignItems::Center,
                margin: UiRect::top(Val::Px(8.0)),
                ..default()
            })
            .with_children(|row| {
                row.spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(palette::TAB_ACTIVE),
                    BorderRadius::all(Val::Px(8.0)),
                    AnimationToggleButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Pause Animation"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(palette::TEXT_LIGHT),
                        AnimationToggleLabel,
                    ));
                });
                row.spawn((
                    Text::new(TURBINE_HINT),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextColor(palette::TEXT_MUTED),
                ));
            });
    });

    spawn_panel(commands, Section::Energy, Visibility::Hidden, |panel| {
        spawn_heading(panel, "Energy Flow");
        for line in ENERGY_CHAIN {
            panel.spawn((
                Text::new(line),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(palette::TEXT_DARK),
            ));
        }
    });
}

fn spawn_panel(
    commands: &mut Commands,
    section: Section,
    visibility: Visibility,
    content: impl FnOnce(&mut ChildSpawnerCommands),
) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(24.0),
                left: Val::Percent(15.0),
                right: Val::Percent(15.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(palette::PANEL_BACKGROUND),
            BorderRadius::all(Val::Px(16.0)),
            visibility,
            SectionPanel(section),
        ))
        .with_children(content);
}

fn spawn_heading(panel: &mut ChildSpawnerCommands, heading: &str) {
    panel.spawn((
        Text::new(heading),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(palette::TEXT_DARK),
    ));
}

fn spawn_body(panel: &mut ChildSpawnerCommands, body: &str) {
    panel.spawn((
        Text::new(body),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(palette::TEXT_DARK),
    ));
}

/// Show exactly the panel belonging to the active section.
pub fn update_section_panels(
    state: Res<SectionState>,
    mut panels: Query<(&SectionPanel, &mut Visibility)>,
) {
    if !state.is_changed() {
        return;
    }

    for (panel, mut visibility) in &mut panels {
        *visibility = if panel.0 == state.active() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Route toggle button presses into animation toggle events.
pub fn animation_toggle_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<AnimationToggleButton>)>,
    mut toggles: EventWriter<AnimationToggleEvent>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            toggles.write(AnimationToggleEvent);
        }
    }
}

/// Keep the toggle label in sync with the animation flag.
pub fn update_animation_toggle_label(
    state: Res<SectionState>,
    mut labels: Query<&mut Text, With<AnimationToggleLabel>>,
) {
    if !state.is_changed() {
        return;
    }

    for mut label in &mut labels {
        label.0 = if state.animation_enabled() {
            "Pause Animation".to_owned()
        } else {
            "Start Animation".to_owned()
        };
    }
}
