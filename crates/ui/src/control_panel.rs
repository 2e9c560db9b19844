//! Side panel with the building inputs and viewer commands.
//!
//! - Floor and bedroom counts (validated before anything is generated)
//! - Structural columns toggle
//! - Generate / pause-resume rotation buttons, also on `G` / `Space`
//! - Plot advisory and the matching floor-plan drawing

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use planner::advisory::plot_advisory;
use planner::floor_plan::{floor_plan_image, NO_FLOOR_PLAN};
use planner::{BuildRequest, PlanError};
use rendering::session::{GenerateBuilding, ToggleRotation, ViewerSession};

// =============================================================================
// Resources
// =============================================================================

/// Raw text of the form fields, kept as typed so bad input can be reported.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControlPanelForm {
    pub floors: String,
    pub bedrooms: String,
    pub columns: bool,
    pub plot_area: String,
    pub room_count: String,
    /// Validation message from the last generate attempt.
    pub error: Option<String>,
}

impl Default for ControlPanelForm {
    fn default() -> Self {
        Self::from_request(&BuildRequest::default())
    }
}

impl ControlPanelForm {
    pub fn from_request(request: &BuildRequest) -> Self {
        Self {
            floors: request.floors.to_string(),
            bedrooms: request.bedrooms.to_string(),
            columns: request.columns,
            plot_area: "0.15".to_string(),
            room_count: "5".to_string(),
            error: None,
        }
    }

    pub fn request(&self) -> Result<BuildRequest, PlanError> {
        BuildRequest::parse(&self.floors, &self.bedrooms, self.columns)
    }

    /// Advisory for the plot fields, or `None` while they don't parse.
    pub fn advisory(&self) -> Option<&'static str> {
        let area: f32 = self.plot_area.trim().parse().ok()?;
        let rooms: u32 = self.room_count.trim().parse().ok()?;
        Some(plot_advisory(area, rooms).message())
    }

    /// Floor-plan drawing path for the typed bedroom count, or the
    /// "not available" message.
    pub fn floor_plan(&self) -> &'static str {
        self.bedrooms
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(floor_plan_image)
            .unwrap_or(NO_FLOOR_PLAN)
    }

    /// Validates the form and queues a rebuild. Invalid input is kept in
    /// `error` instead.
    pub fn submit(&mut self, generate: &mut EventWriter<GenerateBuilding>) {
        match self.request() {
            Ok(request) => {
                self.error = None;
                generate.send(GenerateBuilding(request));
            }
            Err(err) => {
                warn!("Invalid building input: {err}");
                self.error = Some(err.to_string());
            }
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Startup system: show the session's initial request in the form.
pub fn sync_form_from_session(session: Res<ViewerSession>, mut form: ResMut<ControlPanelForm>) {
    *form = ControlPanelForm::from_request(&session.request);
}

fn labeled_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).desired_width(60.0));
    });
}

/// Renders the control panel.
pub fn control_panel_ui(
    mut contexts: EguiContexts,
    mut form: ResMut<ControlPanelForm>,
    session: Res<ViewerSession>,
    mut generate: EventWriter<GenerateBuilding>,
    mut toggle: EventWriter<ToggleRotation>,
) {
    egui::SidePanel::left("control_panel")
        .resizable(false)
        .default_width(230.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Building");
            ui.separator();

            labeled_field(ui, "Floors:", &mut form.floors);
            labeled_field(ui, "Bedrooms:", &mut form.bedrooms);
            ui.checkbox(&mut form.columns, "Structural columns");

            ui.horizontal(|ui| {
                if ui.button("Generate").clicked() {
                    form.submit(&mut generate);
                }
                let rotate_label = if session.rotation.is_rotating() {
                    "Pause rotation"
                } else {
                    "Resume rotation"
                };
                if ui.button(rotate_label).clicked() {
                    toggle.send(ToggleRotation);
                }
            });

            if let Some(error) = &form.error {
                ui.colored_label(egui::Color32::from_rgb(198, 40, 40), error);
            }
            ui.label(session.status.message());

            ui.separator();
            ui.heading("Plot check");
            labeled_field(ui, "Plot area:", &mut form.plot_area);
            labeled_field(ui, "Rooms:", &mut form.room_count);
            match form.advisory() {
                Some(advice) => ui.strong(advice),
                None => ui.weak("Enter a plot area and room count"),
            };

            ui.separator();
            ui.heading("Floor plan");
            ui.label(form.floor_plan());

            ui.separator();
            ui.weak("Left drag: orbit · Right drag: pan · Wheel: zoom");
            ui.weak("G: generate · Space: pause/resume");
        });
}

/// G generates from the current form, Space toggles rotation.
pub fn control_keybinds(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut form: ResMut<ControlPanelForm>,
    mut generate: EventWriter<GenerateBuilding>,
    mut toggle: EventWriter<ToggleRotation>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keys.just_pressed(KeyCode::KeyG) {
        form.submit(&mut generate);
    }
    if keys.just_pressed(KeyCode::Space) {
        toggle.send(ToggleRotation);
    }
}
