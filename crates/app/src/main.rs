use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

mod map_files;
mod web_map;

const LOG_FILTER: &str = "wgpu=error,naga=warn,town=debug,rendering=info";

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Townwalk".to_string(),
                    resolution: (1024.0, 768.0).into(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: LOG_FILTER.to_string(),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    });

    add_map_source(&mut app);

    app.add_plugins((
        town::TownPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    app.run();
}

#[cfg(not(target_arch = "wasm32"))]
fn add_map_source(app: &mut App) {
    let root = map_files::asset_root();
    app.insert_resource(map_files::load_params(&root))
        .insert_resource(map_files::MapPaths::from_env())
        .add_systems(Startup, map_files::load_map_from_disk);
}

#[cfg(target_arch = "wasm32")]
fn add_map_source(app: &mut App) {
    use town::map_state::MapState;

    app.insert_resource(web_map::WebMapSources::from_query())
        .init_resource::<web_map::WebMapLoadBuffer>()
        .add_systems(Startup, web_map::begin_web_map_load)
        .add_systems(
            Update,
            web_map::poll_web_map_load.run_if(in_state(MapState::Loading)),
        );
}
