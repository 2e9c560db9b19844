//! Viewer session: the one place that owns the displayed building.
//!
//! UI and launch code never touch the scene directly; they send
//! [`GenerateBuilding`] / [`ToggleRotation`] events and the systems here
//! apply them to the [`ViewerSession`] resource.

use bevy::prelude::*;

use planner::{BuildRequest, Building, Dimensions, PlanError};

use crate::building_meshes::spawn_building;
use crate::rotation::RotationState;

/// Request a full rebuild with the given parameters.
#[derive(Event, Debug, Clone, Copy)]
pub struct GenerateBuilding(pub BuildRequest);

/// Flip between rotating and paused.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ToggleRotation;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStatus {
    #[default]
    Empty,
    Built {
        floors: u32,
        rooms: usize,
        /// Ground to top of the roof slab.
        height: f32,
    },
    /// The last request was rejected; the previous building is still shown.
    Rejected(String),
}

impl SessionStatus {
    pub fn message(&self) -> String {
        match self {
            SessionStatus::Empty => "No building generated yet".to_string(),
            SessionStatus::Built {
                floors,
                rooms,
                height,
            } => format!("Generated {floors} floor(s), {rooms} rooms, {height:.1} m tall"),
            SessionStatus::Rejected(reason) => reason.clone(),
        }
    }
}

#[derive(Resource, Debug)]
pub struct ViewerSession {
    /// Last request that produced a building.
    pub request: BuildRequest,
    pub dimensions: Dimensions,
    pub rotation: RotationState,
    pub status: SessionStatus,
    building: Option<Building>,
    root: Option<Entity>,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(BuildRequest::default())
    }
}

impl ViewerSession {
    pub fn new(request: BuildRequest) -> Self {
        Self {
            request,
            dimensions: Dimensions::default(),
            rotation: RotationState::default(),
            status: SessionStatus::default(),
            building: None,
            root: None,
        }
    }

    pub fn building(&self) -> Option<&Building> {
        self.building.as_ref()
    }

    pub fn root(&self) -> Option<Entity> {
        self.root
    }

    /// Detaches and despawns the previous subtree (if any) and records the
    /// new one. Returns the despawned root.
    pub fn replace_building(
        &mut self,
        commands: &mut Commands,
        building: Building,
        root: Entity,
    ) -> Option<Entity> {
        let old = self.root.replace(root);
        if let Some(old) = old {
            commands.entity(old).despawn_recursive();
        }
        self.status = SessionStatus::Built {
            floors: building.request.floors,
            rooms: building.room_count(),
            height: building.height(),
        };
        self.request = building.request;
        self.building = Some(building);
        old
    }

    pub fn reject(&mut self, err: &PlanError) {
        self.status = SessionStatus::Rejected(err.to_string());
    }

    pub fn toggle_rotation(&mut self) -> RotationState {
        self.rotation = self.rotation.toggled();
        self.rotation
    }
}

/// System: send the session's initial request once at startup.
pub fn request_initial_building(
    session: Res<ViewerSession>,
    mut events: EventWriter<GenerateBuilding>,
) {
    events.send(GenerateBuilding(session.request));
}

/// System: rebuild the building for each generate request.
///
/// Only the last valid request of a frame ends up on screen; earlier ones are
/// replaced within the same run.
pub fn handle_generate_requests(
    mut commands: Commands,
    mut events: EventReader<GenerateBuilding>,
    mut session: ResMut<ViewerSession>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for GenerateBuilding(request) in events.read() {
        match Building::generate(request, session.dimensions) {
            Ok(building) => {
                let root = spawn_building(&mut commands, &mut meshes, &mut materials, &building);
                info!(
                    "Generated building: {} floors, {} bedrooms, {} rooms, {} fixtures",
                    request.floors,
                    request.bedrooms,
                    building.room_count(),
                    building.fixture_count()
                );
                session.replace_building(&mut commands, building, root);
            }
            Err(err) => {
                warn!("Rejected building request {request:?}: {err}");
                session.reject(&err);
            }
        }
    }
}

/// System: apply rotation toggles.
pub fn handle_toggle_rotation(
    mut events: EventReader<ToggleRotation>,
    mut session: ResMut<ViewerSession>,
) {
    for _ in events.read() {
        let state = session.toggle_rotation();
        debug!("Rotation {}", state.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building_meshes::{BuildingElement, BuildingRoot};
    use crate::palette::ElementKind;
    use crate::room_labels::{
        cleanup_orphan_room_labels, spawn_room_labels, RoomLabel, RoomLabelAnchor,
    };
    use crate::rotation::{spin_building, BuildingSpin, ROTATION_STEP};

    /// Headless app with the asset storage the mesh builder writes into.
    fn session_test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default(), HierarchyPlugin));
        app.init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .init_resource::<ViewerSession>()
            .add_event::<GenerateBuilding>()
            .add_event::<ToggleRotation>()
            .add_systems(
                Update,
                (handle_toggle_rotation, handle_generate_requests, spin_building).chain(),
            )
            .add_systems(
                Update,
                (spawn_room_labels, cleanup_orphan_room_labels).after(handle_generate_requests),
            );
        app
    }

    fn generate(app: &mut App, floors: u32, bedrooms: u32) {
        app.world_mut().send_event(GenerateBuilding(BuildRequest {
            floors,
            bedrooms,
            columns: false,
        }));
        app.update();
    }

    fn roots(app: &mut App) -> Vec<Entity> {
        let mut q = app.world_mut().query_filtered::<Entity, With<BuildingRoot>>();
        q.iter(app.world()).collect()
    }

    fn label_anchors(app: &mut App) -> Vec<Entity> {
        let mut q = app.world_mut().query::<&RoomLabel>();
        q.iter(app.world()).map(|l| l.anchor).collect()
    }

    fn element_count(app: &mut App, kind: ElementKind) -> usize {
        let mut q = app.world_mut().query::<&BuildingElement>();
        q.iter(app.world()).filter(|e| e.0 == kind).count()
    }

    #[test]
    fn test_generate_spawns_single_root() {
        let mut app = session_test_app();
        generate(&mut app, 2, 3);

        let roots = roots(&mut app);
        assert_eq!(roots.len(), 1);
        let session = app.world().resource::<ViewerSession>();
        assert_eq!(session.root(), Some(roots[0]));
        let SessionStatus::Built {
            floors,
            rooms,
            height,
        } = session.status
        else {
            panic!("expected a built status, got {:?}", session.status);
        };
        assert_eq!((floors, rooms), (2, 12));
        assert!((height - 6.65).abs() < 1e-4);
        let message = session.status.message();
        assert!(message.starts_with("Generated 2 floor(s), 12 rooms, 6."), "{message}");
        assert!(message.ends_with(" m tall"), "{message}");
        assert_eq!(element_count(&mut app, ElementKind::Bedroom), 6);
        assert_eq!(element_count(&mut app, ElementKind::Roof), 1);
    }

    #[test]
    fn test_regenerate_replaces_previous_subtree() {
        let mut app = session_test_app();
        generate(&mut app, 3, 2);
        let first = roots(&mut app)[0];

        generate(&mut app, 1, 4);
        let roots = roots(&mut app);
        assert_eq!(roots.len(), 1);
        assert_ne!(roots[0], first);
        assert!(!app.world().entities().contains(first));
        assert_eq!(element_count(&mut app, ElementKind::FloorSlab), 1);
        assert_eq!(element_count(&mut app, ElementKind::Bedroom), 4);
    }

    #[test]
    fn test_regenerate_same_request_is_idempotent() {
        let mut app = session_test_app();
        generate(&mut app, 2, 3);
        let first = app.world().resource::<ViewerSession>().building().cloned();
        generate(&mut app, 2, 3);
        let second = app.world().resource::<ViewerSession>().building().cloned();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejected_request_keeps_building() {
        let mut app = session_test_app();
        generate(&mut app, 2, 3);
        let root = roots(&mut app)[0];

        generate(&mut app, 2, 0);
        let session = app.world().resource::<ViewerSession>();
        assert!(matches!(session.status, SessionStatus::Rejected(_)));
        assert_eq!(session.root(), Some(root));
        assert_eq!(session.request.bedrooms, 3);
        assert_eq!(roots(&mut app), vec![root]);
    }

    #[test]
    fn test_building_spins_until_paused() {
        let mut app = session_test_app();
        generate(&mut app, 1, 2);
        let root = roots(&mut app)[0];
        let yaw_after_first = app.world().get::<BuildingSpin>(root).unwrap().yaw;

        app.update();
        let yaw = app.world().get::<BuildingSpin>(root).unwrap().yaw;
        assert!((yaw - yaw_after_first - ROTATION_STEP).abs() < 1e-6);

        app.world_mut().send_event(ToggleRotation);
        app.update();
        app.update();
        let paused_yaw = app.world().get::<BuildingSpin>(root).unwrap().yaw;
        assert_eq!(paused_yaw, yaw);
        assert_eq!(
            app.world().resource::<ViewerSession>().rotation,
            RotationState::Paused
        );

        app.world_mut().send_event(ToggleRotation);
        app.update();
        assert_eq!(
            app.world().resource::<ViewerSession>().rotation,
            RotationState::Rotating
        );
        let resumed = app.world().get::<BuildingSpin>(root).unwrap().yaw;
        assert!((resumed - yaw - ROTATION_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_regenerate_leaves_no_stale_labels() {
        let mut app = session_test_app();
        generate(&mut app, 2, 3);
        assert_eq!(label_anchors(&mut app).len(), 12);

        generate(&mut app, 1, 2);
        let anchors = label_anchors(&mut app);
        assert_eq!(anchors.len(), 5);
        for anchor in anchors {
            assert!(
                app.world().get::<RoomLabelAnchor>(anchor).is_some(),
                "label points at despawned anchor {anchor:?}"
            );
        }
    }
}
