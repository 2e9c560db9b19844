use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

/// Frames to wait before capturing so meshes, labels and the egui panel
/// have settled.
const SETTLE_FRAMES: u32 = 30;
/// Frames to keep running after the capture so the file gets written.
const SAVE_FRAMES: u32 = 20;

#[derive(Resource, Debug)]
pub struct ScreenshotRequest {
    path: String,
    frame: u32,
    taken: bool,
}

impl ScreenshotRequest {
    pub fn new(path: String) -> Self {
        Self {
            path,
            frame: 0,
            taken: false,
        }
    }
}

pub fn drive_screenshot(
    mut commands: Commands,
    mut request: ResMut<ScreenshotRequest>,
    mut exit: EventWriter<AppExit>,
) {
    request.frame += 1;

    if !request.taken {
        if request.frame >= SETTLE_FRAMES {
            commands
                .spawn(Screenshot::primary_window())
                .observe(save_to_disk(request.path.clone()));
            request.taken = true;
        }
        return;
    }

    if request.frame >= SETTLE_FRAMES + SAVE_FRAMES {
        exit.send(AppExit::Success);
    }
}
