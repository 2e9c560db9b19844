use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

use rendering::session::ViewerSession;

mod launch_config;
mod layout_dump;
mod screenshot;

use launch_config::LaunchConfig;

fn main() {
    let mut app = App::new();

    // Logging first so override warnings are visible; the windowing plugins
    // are only added once we know a window is wanted.
    app.add_plugins(LogPlugin::default());
    let config = LaunchConfig::load();

    if config.print_layout {
        match layout_dump::layout_json(&config.request) {
            Ok(json) => println!("{json}"),
            Err(err) => error!("{err}"),
        }
        return;
    }

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Floorcraft".to_string(),
                    resolution: (1280.0, 720.0).into(),
                    present_mode: PresentMode::AutoVsync,
                    canvas: Some("#floorcraft-canvas".to_string()),
                    fit_canvas_to_parent: true,
                    ..default()
                }),
                ..default()
            })
            .disable::<LogPlugin>(),
    );

    // The building keeps spinning, so redraw every frame.
    app.insert_resource(WinitSettings::game())
        .add_plugins((rendering::RenderingPlugin, ui::UiPlugin))
        .insert_resource(ViewerSession::new(config.request));

    if let Some(path) = config.screenshot {
        info!("Screenshot mode: writing {path}");
        app.insert_resource(screenshot::ScreenshotRequest::new(path))
            .add_systems(Update, screenshot::drive_screenshot);
    }

    app.run();
}
