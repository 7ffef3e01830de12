use bevy::prelude::*;

use crate::section::SectionState;

/// Colour pair keyed off the active section.
///
/// The entity renders with `highlighted` while its associated section is
/// active and with `base` otherwise. Alpha is baked into both colours so
/// translucent meshes keep their opacity when recoloured.
#[derive(Component)]
pub struct Highlightable {
    pub section: crate::section::Section,
    pub base: Color,
    pub highlighted: Color,
}

/// Recolour highlightable meshes whenever the active section changes.
///
/// Each highlightable mesh owns its material instance, so mutating the
/// asset affects exactly one entity.
pub fn apply_section_highlight(
    state: Res<SectionState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    query: Query<(&Highlightable, &MeshMaterial3d<StandardMaterial>)>,
) {
    if !state.is_changed() {
        return;
    }

    for (highlight, material_handle) in &query {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = if state.active() == highlight.section {
                highlight.highlighted
            } else {
                highlight.base
            };
        }
    }
}
