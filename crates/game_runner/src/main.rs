use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::window::{
    PresentMode, Window, WindowPlugin, WindowResizeConstraints, WindowResolution,
};
use life_core::{HudPlugin, LifeSimPlugin};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

const MAX_WIDTH: f32 = 1200.0;
const MAX_HEIGHT: f32 = 1080.0;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let mut app = App::new();
    configure_default_plugins(&mut app);
    app.add_plugins((LifeSimPlugin, HudPlugin));
    app.run();
}

fn configure_default_plugins(app: &mut App) {
    #[cfg(target_arch = "wasm32")]
    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            canvas: Some("#bevy-canvas".into()),
            fit_canvas_to_parent: true,
            present_mode: PresentMode::AutoVsync,
            resize_constraints: WindowResizeConstraints {
                max_width: MAX_WIDTH,
                max_height: MAX_HEIGHT,
                ..default()
            },
            ..default()
        }),
        ..default()
    };

    #[cfg(not(target_arch = "wasm32"))]
    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: "Life Sim".into(),
            present_mode: PresentMode::Fifo,
            resolution: WindowResolution::new(MAX_WIDTH, 800.0),
            resize_constraints: WindowResizeConstraints {
                max_width: MAX_WIDTH,
                max_height: MAX_HEIGHT,
                ..default()
            },
            resizable: true,
            ..default()
        }),
        ..default()
    };

    let mut plugins = DefaultPlugins.set(window_plugin);

    #[cfg(target_arch = "wasm32")]
    {
        plugins = plugins.set(AssetPlugin {
            file_path: "assets".into(),
            ..default()
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        plugins = plugins.set(AssetPlugin {
            watch_for_changes_override: Some(true),
            ..default()
        });
    }

    app.add_plugins(plugins);
}
