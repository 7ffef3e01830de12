use bevy::prelude::*;

/// Enumeration of the topical views selectable from the side navigation.
///
/// Exactly one section is active at any time. The active section drives
/// 3D highlighting, energy-particle presence, and which content panel is
/// shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Overview,
    Turbine,
    Energy,
    Physics,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Turbine,
        Section::Energy,
        Section::Physics,
    ];

    /// Navigation label shown on the section button.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Turbine => "Wind Turbine",
            Section::Energy => "Energy Flow",
            Section::Physics => "Physics",
        }
    }
}

/// Resource holding the active section and the process-wide animation toggle.
///
/// Mutated only through [`SectionState::set_section`] and
/// [`SectionState::toggle_animation`]; every other component reads it.
#[derive(Resource)]
pub struct SectionState {
    active: Section,
    animation_enabled: bool,
}

impl Default for SectionState {
    fn default() -> Self {
        Self {
            active: Section::default(),
            animation_enabled: true,
        }
    }
}

impl SectionState {
    /// Replace the active section unconditionally.
    ///
    /// Returns whether the active section actually changed.
    pub fn set_section(&mut self, section: Section) -> bool {
        if self.active == section {
            return false;
        }
        self.active = section;
        true
    }

    /// Flip the animation toggle, returning the new value.
    pub fn toggle_animation(&mut self) -> bool {
        self.animation_enabled = !self.animation_enabled;
        self.animation_enabled
    }

    /// Currently active section.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Whether gated per-frame motion (blade spin, particle drift) runs.
    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }
}

/// Source of a selection for logging and debugging.
#[derive(Debug, Clone, Copy)]
pub enum SelectionSource {
    Pointer,
    Keyboard,
}

/// Event fired when a section is selected via button press or keyboard.
#[derive(Event)]
pub struct SectionSelectionEvent {
    pub section: Section,
    pub source: SelectionSource,
}

/// Event fired when the animation toggle is pressed.
#[derive(Event)]
pub struct AnimationToggleEvent;

/// System applying section selection events to the shared state.
pub fn handle_section_selection_events(
    mut events: EventReader<SectionSelectionEvent>,
    mut state: ResMut<SectionState>,
) {
    for event in events.read() {
        if state.set_section(event.section) {
            info!(
                "Section activated: {} (via {:?})",
                event.section.label(),
                event.source
            );
        }
    }
}

/// System applying animation toggle events to the shared state.
pub fn handle_animation_toggle_events(
    mut events: EventReader<AnimationToggleEvent>,
    mut state: ResMut<SectionState>,
) {
    for _ in events.read() {
        let enabled = state.toggle_animation();
        info!(
            "Animation {}",
            if enabled { "resumed" } else { "paused" }
        );
    }
}

/// Keyboard shortcuts: digits 1-4 select sections, space toggles animation.
pub fn section_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selections: EventWriter<SectionSelectionEvent>,
    mut toggles: EventWriter<AnimationToggleEvent>,
) {
    let bindings = [
        (KeyCode::Digit1, Section::Overview),
        (KeyCode::Digit2, Section::Turbine),
        (KeyCode::Digit3, Section::Energy),
        (KeyCode::Digit4, Section::Physics),
    ];

    for (key, section) in bindings {
        if keyboard.just_pressed(key) {
            selections.write(SectionSelectionEvent {
                section,
                source: SelectionSource::Keyboard,
            });
        }
    }

    if keyboard.just_pressed(KeyCode::Space) {
        toggles.write(AnimationToggleEvent);
    }
}
