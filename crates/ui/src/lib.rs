use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use town::map_state::MapState;

pub mod debug_overlay;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<debug_overlay::DebugOverlayVisible>()
            .add_systems(Startup, theme::apply_town_theme)
            .add_systems(
                Update,
                (
                    debug_overlay::toggle_debug_overlay,
                    debug_overlay::debug_overlay_ui,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                debug_overlay::map_error_ui.run_if(in_state(MapState::Failed)),
            );
    }
}
