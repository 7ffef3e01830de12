use bevy::prelude::*;

use crate::constants::palette;
use crate::section::Section;
use crate::ui::content_panel::SectionPanel;

/// Static textbook formula record displayed by the reference panel.
pub struct PhysicsEquation {
    pub title: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
    pub variables: &'static [(&'static str, &'static str)],
}

/// The four fixed equations, in tab order.
pub const EQUATIONS: [PhysicsEquation; 4] = [
    PhysicsEquation {
        title: "Wind Kinetic Energy",
        formula: "E_k = \u{bd}mv\u{b2}",
        description: "Kinetic energy carried by a moving mass of air",
        variables: &[
            ("E_k", "Kinetic energy (Joule)"),
            ("m", "Air mass (kg)"),
            ("v", "Wind speed (m/s)"),
        ],
    },
    PhysicsEquation {
        title: "Available Wind Power",
        formula: "P = \u{bd}\u{3c1}Av\u{b3}",
        description: "Power available from the wind passing through the rotor",
        variables: &[
            ("P", "Power (Watt)"),
            ("\u{3c1}", "Air density (kg/m\u{b3})"),
            ("A", "Rotor swept area (m\u{b2})"),
            ("v", "Wind speed (m/s)"),
        ],
    },
    PhysicsEquation {
        title: "Water Potential Energy",
        formula: "E_p = mgh",
        description: "Potential energy of water pumped to a given height",
        variables: &[
            ("E_p", "Potential energy (Joule)"),
            ("m", "Water mass (kg)"),
            ("g", "Gravitational acceleration (9.8 m/s\u{b2})"),
            ("h", "Height (m)"),
        ],
    },
    PhysicsEquation {
        title: "System Efficiency",
        formula: "\u{3b7} = (E_out / E_in) \u{d7} 100%",
        description: "Ratio of output energy to input energy",
        variables: &[
            ("\u{3b7}", "Efficiency (%)"),
            ("E_out", "Output energy (Joule)"),
            ("E_in", "Input energy (Joule)"),
        ],
    },
];

/// Worked example shown under the wind-power equation.
pub const WORKED_EXAMPLE_EQUATION: usize = 1;
pub const WORKED_EXAMPLE: &str = "With \u{3c1} = 1.225 kg/m\u{b3}, A = 2 m\u{b2}, and v = 5 m/s:\n\
P = \u{bd} \u{d7} 1.225 \u{d7} 2 \u{d7} 5\u{b3} = \u{bd} \u{d7} 1.225 \u{d7} 2 \u{d7} 125 = 153.125 Watt";

/// Resource holding the selected equation tab.
#[derive(Resource, Default)]
pub struct EquationTab {
    index: usize,
}

impl EquationTab {
    /// Select tab `index`; out-of-range indices are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= EQUATIONS.len() || index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn equation(&self) -> &'static PhysicsEquation {
        &EQUATIONS[self.index]
    }
}

/// Tab button selecting an equation.
#[derive(Component)]
pub struct EquationTabButton(pub usize);

/// Label inside a tab button.
#[derive(Component)]
pub struct EquationTabLabel(pub usize);

/// Text field of the equation display, rewritten on tab change.
#[derive(Component)]
pub enum EquationField {
    Title,
    Formula,
    Description,
    Variable(usize),
    WorkedExample,
}

/// Maximum variable rows across all equations; unused rows are collapsed.
const VARIABLE_ROWS: usize = 4;

/// Spawn the physics reference panel; visible only in the physics section.
pub fn spawn_physics_panel(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(25.0),
                right: Val::Percent(25.0),
                top: Val::Percent(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(24.0)),
                ..default()
            },
            BackgroundColor(palette::PANEL_BACKGROUND),
            BorderRadius::all(Val::Px(20.0)),
            Visibility::Hidden,
            SectionPanel(Section::Physics),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("Physics Equations"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(palette::TEXT_DARK),
            ));

            // Tab row
            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(8.0),
                    margin: UiRect::vertical(Val::Px(6.0)),
                    ..default()
                })
                .with_children(|tabs| {
                    for (index, equation) in EQUATIONS.iter().enumerate() {
                        tabs.spawn((
                            Button,
                            Node {
                                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                                ..default()
                            },
                            BackgroundColor(if index == 0 {
                                palette::TAB_ACTIVE
                            } else {
                                palette::TAB_IDLE
                            }),
                            BorderRadius::all(Val::Px(8.0)),
                            EquationTabButton(index),
                        ))
                        .with_children(|tab| {
                            tab.spawn((
                                Text::new(equation.title),
                                TextFont {
                                    font_size: 12.0,
                                    ..default()
                                },
                                TextColor(if index == 0 {
                                    palette::TEXT_LIGHT
                                } else {
                                    palette::TEXT_MUTED
                                }),
                                EquationTabLabel(index),
                            ));
                        });
                    }
                });

            spawn_field(panel, EquationField::Title, 20.0, palette::TEXT_DARK);
            spawn_field(panel, EquationField::Formula, 30.0, palette::TEXT_ACCENT);
            spawn_field(panel, EquationField::Description, 14.0, palette::TEXT_MUTED);

            panel.spawn((
                Text::new("Variables:"),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(palette::TEXT_DARK),
            ));
            for row in 0..VARIABLE_ROWS {
                spawn_field(panel, EquationField::Variable(row), 14.0, palette::TEXT_DARK);
            }

            spawn_field(panel, EquationField::WorkedExample, 13.0, palette::TEXT_MUTED);
        });
}

fn spawn_field(
    panel: &mut ChildSpawnerCommands,
    field: EquationField,
    font_size: f32,
    color: Color,
) {
    panel.spawn((
        Text::new(""),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
        Node::default(),
        field,
    ));
}

/// Route tab button presses into the selection resource.
pub fn equation_tab_buttons(
    interactions: Query<(&Interaction, &EquationTabButton), (Changed<Interaction>, With<Button>)>,
    mut tab: ResMut<EquationTab>,
) {
    for (interaction, button) in &interactions {
        if *interaction == Interaction::Pressed && tab.select(button.0) {
            info!("Equation tab selected: {}", tab.equation().title);
        }
    }
}

/// Rewrite the equation display whenever the selected tab changes.
pub fn update_equation_display(
    tab: Res<EquationTab>,
    mut fields: Query<(&mut Text, &mut Node, &EquationField)>,
    mut tab_buttons: Query<(&EquationTabButton, &mut BackgroundColor)>,
    mut tab_labels: Query<(&EquationTabLabel, &mut TextColor)>,
) {
    if !tab.is_changed() {
        return;
    }

    let equation = tab.equation();
    for (mut text, mut node, field) in &mut fields {
        match field {
            EquationField::Title => text.0 = equation.title.to_owned(),
            EquationField::Formula => text.0 = equation.formula.to_owned(),
            EquationField::Description => text.0 = equation.description.to_owned(),
            EquationField::Variable(row) => {
                if let Some((symbol, meaning)) = equation.variables.get(*row) {
                    text.0 = format!("{symbol} = {meaning}");
                    node.display = Display::Flex;
                } else {
                    text.0.clear();
                    node.display = Display::None;
                }
            }
            EquationField::WorkedExample => {
                if tab.index() == WORKED_EXAMPLE_EQUATION {
                    text.0 = WORKED_EXAMPLE.to_owned();
                    node.display = Display::Flex;
                } else {
                    text.0.clear();
                    node.display = Display::None;
                }
            }
        }
    }

    for (button, mut background) in &mut tab_buttons {
        *background = if button.0 == tab.index() {
            BackgroundColor(palette::TAB_ACTIVE)
        } else {
            BackgroundColor(palette::TAB_IDLE)
        };
    }
    for (label, mut color) in &mut tab_labels {
        *color = if label.0 == tab.index() {
            TextColor(palette::TEXT_LIGHT)
        } else {
            TextColor(palette::TEXT_MUTED)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_fixed_equations_in_tab_order() {
        assert_eq!(EQUATIONS.len(), 4);
        let titles: Vec<_> = EQUATIONS.iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            vec![
                "Wind Kinetic Energy",
                "Available Wind Power",
                "Water Potential Energy",
                "System Efficiency",
            ]
        );
    }

    #[test]
    fn wind_power_equation_exposes_expected_tuple() {
        let mut tab = EquationTab::default();
        assert!(tab.select(1));
        let equation = tab.equation();
        assert_eq!(equation.formula, "P = \u{bd}\u{3c1}Av\u{b3}");
        let symbols: Vec<_> = equation.variables.iter().map(|(s, _)| *s).collect();
        assert_eq!(symbols, vec!["P", "\u{3c1}", "A", "v"]);
    }

    #[test]
    fn every_tab_selects_its_own_record() {
        for index in 0..EQUATIONS.len() {
            let mut tab = EquationTab::default();
            tab.select(index);
            assert_eq!(tab.index(), index);
            assert_eq!(tab.equation().title, EQUATIONS[index].title);
            assert_eq!(tab.equation().formula, EQUATIONS[index].formula);
        }
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut tab = EquationTab::default();
        tab.select(2);
        assert!(!tab.select(EQUATIONS.len()));
        assert_eq!(tab.index(), 2);
    }

    #[test]
    fn variable_lists_fit_the_reserved_rows() {
        for equation in &EQUATIONS {
            assert!(!equation.variables.is_empty());
            assert!(equation.variables.len() <= VARIABLE_ROWS);
        }
    }

    #[test]
    fn worked_example_belongs_to_the_wind_power_tab() {
        assert_eq!(EQUATIONS[WORKED_EXAMPLE_EQUATION].title, "Available Wind Power");
        assert!(WORKED_EXAMPLE.contains("153.125"));
    }
}
