use bevy_egui::{egui, EguiContexts};

pub const FONT_HEADING: f32 = 18.0;
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(235, 225, 200);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(150, 150, 160);
pub const COLLIDING: egui::Color32 = egui::Color32::from_rgb(230, 120, 70);
pub const NOT_COLLIDING: egui::Color32 = egui::Color32::from_rgb(110, 190, 110);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);

pub fn apply_town_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgba_unmultiplied(28, 32, 26, 220);
    let inactive = egui::Color32::from_rgb(50, 58, 48);
    let hover = egui::Color32::from_rgb(72, 86, 66);

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;

    // egui 0.31+ uses CornerRadius with u8 values
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);

    ctx.set_style(style);
}
