//! Room name labels that always face the camera.
//!
//! Label anchors live inside the building subtree so they rotate with it.
//! Each anchor gets a UI text node that is moved every frame to the anchor's
//! projected screen position.

use bevy::prelude::*;

use crate::building_meshes::BuildingRoot;
use crate::palette::LABEL_COLOR;

const LABEL_FONT_SIZE: f32 = 14.0;
/// Fixed node width so the text can be centered on the anchor.
const LABEL_WIDTH: f32 = 140.0;

/// Point in the building subtree where a room label hangs.
#[derive(Component, Debug, Clone)]
pub struct RoomLabelAnchor {
    pub text: String,
}

/// Screen-space text node following a [`RoomLabelAnchor`].
#[derive(Component)]
pub struct RoomLabel {
    pub anchor: Entity,
}

/// System: create a text node for every new anchor.
pub fn spawn_room_labels(
    mut commands: Commands,
    anchors: Query<(Entity, &RoomLabelAnchor), Added<RoomLabelAnchor>>,
) {
    for (entity, anchor) in &anchors {
        commands.spawn((
            Text::new(anchor.text.clone()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(LABEL_COLOR),
            TextLayout::new_with_justify(JustifyText::Center),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(LABEL_WIDTH),
                ..default()
            },
            // Hidden until the first projection places it.
            Visibility::Hidden,
            RoomLabel { anchor: entity },
        ));
    }
}

/// Top-left corner of a label node centered on `screen`.
fn label_origin(screen: Vec2) -> Vec2 {
    Vec2::new(screen.x - LABEL_WIDTH / 2.0, screen.y - LABEL_FONT_SIZE / 2.0)
}

/// World position of an anchor given the transform of the building root it
/// hangs from. Anchors without a root are already in world space.
pub fn anchor_world_position(root: Option<&Transform>, anchor: &Transform) -> Vec3 {
    match root {
        Some(root) => root.transform_point(anchor.translation),
        None => anchor.translation,
    }
}

/// System: move labels to their anchors' screen positions.
///
/// Composes the root and camera transforms written during `Update` so the
/// labels land in this frame's UI layout instead of trailing by one frame.
pub fn position_room_labels(
    cameras: Query<(&Camera, &Transform), With<Camera3d>>,
    anchors: Query<(&Transform, Option<&Parent>), With<RoomLabelAnchor>>,
    roots: Query<&Transform, (With<BuildingRoot>, Without<RoomLabelAnchor>)>,
    mut labels: Query<(&RoomLabel, &mut Node, &mut Visibility)>,
) {
    let camera = cameras
        .get_single()
        .ok()
        .map(|(camera, transform)| (camera, GlobalTransform::from(*transform)));

    for (label, mut node, mut visibility) in &mut labels {
        let screen = anchors.get(label.anchor).ok().and_then(|(anchor, parent)| {
            let (camera, camera_transform) = camera.as_ref()?;
            let root = parent.and_then(|p| roots.get(p.get()).ok());
            camera
                .world_to_viewport(camera_transform, anchor_world_position(root, anchor))
                .ok()
        });
        match screen {
            Some(screen) => {
                let origin = label_origin(screen);
                node.left = Val::Px(origin.x);
                node.top = Val::Px(origin.y);
                *visibility = Visibility::Inherited;
            }
            // Anchor despawned, no camera yet, or behind the camera.
            None => *visibility = Visibility::Hidden,
        }
    }
}

/// System: remove labels whose anchor went away with a replaced building.
pub fn cleanup_orphan_room_labels(
    mut commands: Commands,
    labels: Query<(Entity, &RoomLabel)>,
    anchors: Query<(), With<RoomLabelAnchor>>,
) {
    for (entity, label) in &labels {
        if anchors.get(label.anchor).is_err() {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_origin_centers_node() {
        let origin = label_origin(Vec2::new(400.0, 300.0));
        assert_eq!(origin.x, 400.0 - LABEL_WIDTH / 2.0);
        assert_eq!(origin.y, 300.0 - LABEL_FONT_SIZE / 2.0);
    }

    #[test]
    fn test_anchor_follows_root_rotation() {
        let root = Transform::from_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        let anchor = Transform::from_xyz(1.0, 3.4, 0.0);
        let world = anchor_world_position(Some(&root), &anchor);
        assert!((world - Vec3::new(0.0, 3.4, -1.0)).length() < 1e-5, "{world}");
        assert_eq!(anchor_world_position(None, &anchor), anchor.translation);
    }

    #[test]
    fn test_label_with_missing_anchor_is_hidden() {
        let mut app = App::new();
        app.add_systems(Update, position_room_labels);

        let gone = app.world_mut().spawn_empty().id();
        app.world_mut().despawn(gone);
        let label = app
            .world_mut()
            .spawn((
                RoomLabel { anchor: gone },
                Node::default(),
                Visibility::Inherited,
            ))
            .id();
        app.update();

        assert_eq!(
            app.world().get::<Visibility>(label),
            Some(&Visibility::Hidden)
        );
    }

    #[test]
    fn test_labels_follow_anchor_lifecycle() {
        let mut app = App::new();
        app.add_systems(Update, (spawn_room_labels, cleanup_orphan_room_labels).chain());

        let anchor = app
            .world_mut()
            .spawn(RoomLabelAnchor {
                text: "Kitchen".to_string(),
            })
            .id();
        app.update();

        let mut labels = app.world_mut().query::<(&RoomLabel, &Text)>();
        let found: Vec<(Entity, String)> = labels
            .iter(app.world())
            .map(|(l, t)| (l.anchor, t.0.clone()))
            .collect();
        assert_eq!(found, vec![(anchor, "Kitchen".to_string())]);

        app.world_mut().despawn(anchor);
        app.update();

        let mut labels = app.world_mut().query::<&RoomLabel>();
        assert_eq!(labels.iter(app.world()).count(), 0);
    }
}
