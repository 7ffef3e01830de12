use bevy::prelude::*;

use crate::constants::palette;
use crate::section::{Section, SectionSelectionEvent, SectionState, SelectionSource};

/// Navigation button selecting a section.
#[derive(Component)]
pub struct NavButton(pub Section);

/// Label inside a navigation button.
#[derive(Component)]
pub struct NavButtonLabel(pub Section);

/// Spawn the side navigation: one button per section, right of centre.
pub fn spawn_navigation(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(24.0),
                top: Val::Percent(35.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(palette::NAV_BACKGROUND),
            BorderRadius::all(Val::Px(16.0)),
        ))
        .with_children(|nav| {
            for section in Section::ALL {
                nav.spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(14.0), Val::Px(10.0)),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(palette::NAV_BUTTON_IDLE),
                    BorderRadius::all(Val::Px(12.0)),
                    NavButton(section),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new(section.label()),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(palette::TEXT_LIGHT),
                        NavButtonLabel(section),
                    ));
                });
            }
        });
}

/// Route navigation button presses into section selection events.
pub fn navigation_buttons(
    interactions: Query<(&Interaction, &NavButton), (Changed<Interaction>, With<Button>)>,
    mut selections: EventWriter<SectionSelectionEvent>,
) {
    for (interaction, button) in &interactions {
        if *interaction == Interaction::Pressed {
            selections.write(SectionSelectionEvent {
                section: button.0,
                source: SelectionSource::Pointer,
            });
        }
    }
}

/// Mirror hover state and the active section onto the navigation buttons.
pub fn style_navigation_buttons(
    state: Res<SectionState>,
    mut buttons: Query<(&Interaction, &NavButton, &mut BackgroundColor)>,
    mut labels: Query<(&NavButtonLabel, &mut TextColor)>,
) {
    for (interaction, button, mut background) in &mut buttons {
        *background = if state.active() == button.0 {
            BackgroundColor(palette::NAV_BUTTON_ACTIVE)
        } else if *interaction == Interaction::Hovered {
            BackgroundColor(palette::NAV_BUTTON_HOVERED)
        } else {
            BackgroundColor(palette::NAV_BUTTON_IDLE)
        };
    }

    for (label, mut color) in &mut labels {
        *color = if state.active() == label.0 {
            TextColor(palette::TEXT_ACCENT)
        } else {
            TextColor(palette::TEXT_LIGHT)
        };
    }
}
