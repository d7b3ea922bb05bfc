//! In-game debug text: camera position, player coordinates, the collision
//! state and the last lot the player bumped into. F3 toggles it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::coords::world_to_pixel;
use rendering::player::Player;
use town::collision::{CollisionState, CollisionTrigger, LastLotReport, LotReport};
use town::map_state::{MapLoadError, MapState};

use crate::theme;

#[derive(Resource)]
pub struct DebugOverlayVisible(pub bool);

impl Default for DebugOverlayVisible {
    fn default() -> Self {
        Self(true)
    }
}

pub fn toggle_debug_overlay(keys: Res<ButtonInput<KeyCode>>, mut visible: ResMut<DebugOverlayVisible>) {
    if keys.just_pressed(KeyCode::F3) {
        visible.0 = !visible.0;
    }
}

pub fn collision_label(state: CollisionState) -> (&'static str, egui::Color32) {
    match state {
        CollisionState::Colliding => ("colliding", theme::COLLIDING),
        CollisionState::NotColliding => ("clear", theme::NOT_COLLIDING),
    }
}

pub fn report_text(report: Option<&LotReport>) -> String {
    match report {
        Some(r) => format!(
            "#{} {} \"{}\"",
            r.index,
            r.kind.label(),
            r.designation.as_deref().unwrap_or("-")
        ),
        None => "none yet".to_string(),
    }
}

pub fn debug_overlay_ui(
    mut contexts: EguiContexts,
    visible: Res<DebugOverlayVisible>,
    state: Res<State<MapState>>,
    trigger: Res<CollisionTrigger>,
    last: Res<LastLotReport>,
    cameras: Query<&Transform, With<Camera2d>>,
    players: Query<&Player>,
) {
    if !visible.0 {
        return;
    }

    egui::Window::new("Debug")
        .default_width(240.0)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
        .show(contexts.ctx_mut(), |ui| {
            egui::Grid::new("debug_overlay_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Map:");
                    ui.label(format!("{:?}", state.get()));
                    ui.end_row();

                    ui.label("Camera:");
                    match cameras.get_single() {
                        Ok(t) => {
                            let p = world_to_pixel(t.translation);
                            ui.label(format!("{:.0}, {:.0}", p.x, p.y));
                        }
                        Err(_) => {
                            ui.colored_label(theme::TEXT_MUTED, "-");
                        }
                    }
                    ui.end_row();

                    ui.label("Player:");
                    match players.get_single() {
                        Ok(player) => {
                            let p = player.top_left.floor();
                            ui.label(format!("{}, {}", p.x, p.y));
                        }
                        Err(_) => {
                            ui.colored_label(theme::TEXT_MUTED, "-");
                        }
                    }
                    ui.end_row();

                    ui.label("Contact:");
                    let (text, color) = collision_label(trigger.state);
                    ui.colored_label(color, format!("{text} ({} frames)", trigger.contact_frames));
                    ui.end_row();

                    ui.label("Last lot:");
                    ui.label(report_text(last.0.as_ref()));
                    ui.end_row();
                });
        });
}

/// Centered message when the map documents could not be loaded.
pub fn map_error_ui(mut contexts: EguiContexts, load_error: Res<MapLoadError>) {
    let message = load_error.0.as_deref().unwrap_or("unknown error");

    egui::Window::new("map_error_window")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(360.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Map failed to load")
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_HEADING),
                );
                ui.add_space(8.0);
                ui.colored_label(theme::ERROR, message);
            });
        });
}
