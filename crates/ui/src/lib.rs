use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod control_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<control_panel::ControlPanelForm>()
            .add_systems(
                Startup,
                (theme::apply_light_theme, control_panel::sync_form_from_session),
            )
            .add_systems(
                Update,
                (
                    control_panel::control_panel_ui,
                    control_panel::control_keybinds,
                ),
            );
    }
}
