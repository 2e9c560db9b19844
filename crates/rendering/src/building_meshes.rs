//! Turns a generated [`Building`] into renderable entities.
//!
//! [`building_primitives`] is a pure mapping from layout data to shapes and
//! label anchors; [`spawn_building`] instantiates that mapping under a single
//! root entity so the whole building can be detached in one despawn.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use planner::{Block, Building, Fixture};

use crate::palette::{ElementKind, OUTLINE_COLOR, ROOM_OPACITY};
use crate::room_labels::RoomLabelAnchor;
use crate::rotation::BuildingSpin;

/// Marker for the root entity of the current building subtree.
#[derive(Component)]
pub struct BuildingRoot;

/// Tags each mesh entity with the element it represents.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingElement(pub ElementKind);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cuboid(Vec3),
    Cylinder { radius: f32, height: f32 },
}

/// One mesh to spawn, positioned relative to the building root.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub kind: ElementKind,
    pub shape: Shape,
    pub translation: Vec3,
    /// Draw a dark wireframe box around the shape.
    pub outlined: bool,
}

impl Primitive {
    fn block(kind: ElementKind, block: &Block) -> Self {
        Self {
            kind,
            shape: Shape::Cuboid(block.size),
            translation: block.center,
            outlined: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub text: String,
    pub position: Vec3,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildingMeshPlan {
    pub primitives: Vec<Primitive>,
    pub labels: Vec<LabelSpec>,
}

/// Maps every slab, room and fixture of `building` to a primitive, and every
/// room to a label anchor above it.
pub fn building_primitives(building: &Building) -> BuildingMeshPlan {
    let mut plan = BuildingMeshPlan::default();

    for floor in &building.floors {
        plan.primitives
            .push(Primitive::block(ElementKind::FloorSlab, &floor.slab));

        for room in &floor.rooms {
            plan.primitives.push(Primitive {
                outlined: true,
                ..Primitive::block(room.kind.into(), &room.block())
            });
            plan.labels.push(LabelSpec {
                text: room.name.clone(),
                position: room.label_anchor(),
            });
        }

        for fixture in &floor.fixtures {
            let kind = ElementKind::from(fixture.kind());
            match fixture {
                Fixture::Door(block) | Fixture::Balcony(block) => {
                    plan.primitives.push(Primitive::block(kind, block));
                }
                Fixture::Staircase(steps) => {
                    plan.primitives
                        .extend(steps.iter().map(|step| Primitive::block(kind, step)));
                }
                Fixture::Column(column) => plan.primitives.push(Primitive {
                    kind,
                    shape: Shape::Cylinder {
                        radius: column.radius,
                        height: column.height,
                    },
                    translation: column.center(),
                    outlined: false,
                }),
            }
        }
    }

    plan.primitives
        .push(Primitive::block(ElementKind::Roof, &building.roof));
    plan
}

fn element_material(kind: ElementKind) -> StandardMaterial {
    if kind.is_translucent() {
        StandardMaterial {
            base_color: kind.color().with_alpha(ROOM_OPACITY),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.9,
            ..default()
        }
    } else {
        StandardMaterial {
            base_color: kind.color(),
            perceptual_roughness: 0.8,
            ..default()
        }
    }
}

fn shape_mesh(shape: Shape) -> Mesh {
    match shape {
        Shape::Cuboid(size) => Cuboid::from_size(size).into(),
        Shape::Cylinder { radius, height } => Cylinder::new(radius, height)
            .mesh()
            .resolution(16)
            .build(),
    }
}

/// Line-list mesh tracing the 12 edges of a box centered on the origin.
pub fn box_outline_mesh(size: Vec3) -> Mesh {
    let h = size / 2.0;
    let corners: Vec<[f32; 3]> = (0..8)
        .map(|i| {
            [
                if i & 1 == 0 { -h.x } else { h.x },
                if i & 2 == 0 { -h.y } else { h.y },
                if i & 4 == 0 { -h.z } else { h.z },
            ]
        })
        .collect();
    let normals = vec![[0.0, 1.0, 0.0]; corners.len()];

    // Each pair of corner indices differing in exactly one bit is an edge.
    let mut indices = Vec::with_capacity(24);
    for a in 0u32..8 {
        for bit in [1u32, 2, 4] {
            let b = a | bit;
            if b != a {
                indices.extend([a, b]);
            }
        }
    }

    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, corners)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_indices(Indices::U32(indices))
}

/// Spawns the full building subtree and returns its root entity.
///
/// The caller owns replacing any previous subtree; see
/// [`crate::session::ViewerSession::replace_building`].
pub fn spawn_building(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    building: &Building,
) -> Entity {
    let plan = building_primitives(building);

    let mut palette: HashMap<ElementKind, Handle<StandardMaterial>> = HashMap::new();
    let outline_material = materials.add(StandardMaterial {
        base_color: OUTLINE_COLOR,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            BuildingRoot,
            BuildingSpin::default(),
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for primitive in &plan.primitives {
                let material = palette
                    .entry(primitive.kind)
                    .or_insert_with(|| materials.add(element_material(primitive.kind)))
                    .clone();

                parent.spawn((
                    BuildingElement(primitive.kind),
                    Mesh3d(meshes.add(shape_mesh(primitive.shape))),
                    MeshMaterial3d(material),
                    Transform::from_translation(primitive.translation),
                ));

                if let (true, Shape::Cuboid(size)) = (primitive.outlined, primitive.shape) {
                    parent.spawn((
                        Mesh3d(meshes.add(box_outline_mesh(size))),
                        MeshMaterial3d(outline_material.clone()),
                        Transform::from_translation(primitive.translation),
                    ));
                }
            }

            for label in &plan.labels {
                parent.spawn((
                    RoomLabelAnchor {
                        text: label.text.clone(),
                    },
                    Transform::from_translation(label.position),
                    Visibility::default(),
                ));
            }
        })
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner::{BuildRequest, Dimensions};

    fn building(floors: u32, bedrooms: u32, columns: bool) -> Building {
        let request = BuildRequest {
            floors,
            bedrooms,
            columns,
        };
        Building::generate(&request, Dimensions::default()).unwrap()
    }

    fn count(plan: &BuildingMeshPlan, kind: ElementKind) -> usize {
        plan.primitives.iter().filter(|p| p.kind == kind).count()
    }

    #[test]
    fn test_primitive_counts() {
        let plan = building_primitives(&building(2, 3, false));
        assert_eq!(count(&plan, ElementKind::FloorSlab), 2);
        assert_eq!(count(&plan, ElementKind::Roof), 1);
        assert_eq!(count(&plan, ElementKind::LivingRoom), 2);
        assert_eq!(count(&plan, ElementKind::Bedroom), 6);
        assert_eq!(count(&plan, ElementKind::Door), 2);
        assert_eq!(count(&plan, ElementKind::StairStep), 16);
        assert_eq!(count(&plan, ElementKind::Balcony), 2);
        assert_eq!(count(&plan, ElementKind::Column), 0);
        assert_eq!(plan.labels.len(), 12);
    }

    #[test]
    fn test_columns_become_cylinders() {
        let plan = building_primitives(&building(1, 2, true));
        let columns: Vec<&Primitive> = plan
            .primitives
            .iter()
            .filter(|p| p.kind == ElementKind::Column)
            .collect();
        assert_eq!(columns.len(), 12);
        assert!(columns
            .iter()
            .all(|p| matches!(p.shape, Shape::Cylinder { .. }) && !p.outlined));
    }

    #[test]
    fn test_labels_sit_above_rooms() {
        let b = building(1, 2, false);
        let plan = building_primitives(&b);
        for (room, label) in b.floors[0].rooms.iter().zip(&plan.labels) {
            assert_eq!(label.text, room.name);
            assert_eq!(label.position.x, room.x);
            assert_eq!(label.position.z, room.z);
            assert!(label.position.y > room.base_y + room.height);
        }
    }

    #[test]
    fn test_only_rooms_are_outlined() {
        let plan = building_primitives(&building(1, 4, true));
        for p in &plan.primitives {
            assert_eq!(p.outlined, p.kind.is_translucent(), "{:?}", p.kind);
        }
    }

    #[test]
    fn test_primitives_are_deterministic() {
        let a = building_primitives(&building(3, 5, true));
        let b = building_primitives(&building(3, 5, true));
        assert_eq!(a, b);
    }

    #[test]
    fn test_outline_mesh_has_twelve_edges() {
        let mesh = box_outline_mesh(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(mesh.count_vertices(), 8);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("outline mesh should use u32 indices");
        };
        assert_eq!(indices.len(), 24);
    }
}
