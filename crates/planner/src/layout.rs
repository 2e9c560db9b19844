//! Fixed room template for one floor.
//!
//! The floor plate is split into three rows along Z:
//!
//! ```text
//!   -Z (back)   | Bedroom 1 | Bedroom 2 | ... | Bedroom N |
//!    0 (core)       | Kitchen |       | Washroom |
//!   +Z (front)  |            Living Room                  |
//!                              [door]
//! ```
//!
//! Rooms never overlap because every offset comes from the constants in
//! [`crate::config`]; [`Dimensions::validate`] rejects envelopes too shallow
//! for the rows to stay apart. Fixtures are placed by fixed formulas, except
//! the main door which follows the Living Room placement it is handed.

use bevy::math::{Rect, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::{
    BALCONY_DEPTH, BALCONY_LIFT, BALCONY_THICKNESS, BEDROOM_GUTTER, COLUMN_EDGE_INSET,
    COLUMN_RADIUS, CORE_ROOM_DEPTH, CORE_ROOM_OFFSET, CORE_ROOM_WIDTH, DOOR_HEIGHT,
    DOOR_OFFSET, DOOR_THICKNESS, DOOR_WIDTH, MAX_BEDROOMS, MIN_BEDROOMS, ROOM_HEIGHT,
    ROOM_LIFT, ROW_DEPTH, ROW_INSET, SIDE_MARGIN, SLAB_THICKNESS, STAIR_LIFT, STAIR_RISE,
    STAIR_RUN, STAIR_SIDE_OFFSET, STAIR_START_Z, STAIR_STEPS, STAIR_STEP_SIZE,
};
use crate::geometry::{Block, Column, Dimensions};
use crate::plan_error::PlanError;
use crate::request::BEDROOMS_FIELD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    LivingRoom,
    Kitchen,
    Washroom,
    Bedroom,
}

/// A named rectangular room volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub kind: RoomKind,
    /// Center on the ground plane: `x` and `z`.
    pub x: f32,
    pub z: f32,
    /// Elevation of the room's floor.
    pub base_y: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

impl Room {
    pub fn block(&self) -> Block {
        Block::new(
            Vec3::new(self.x, self.base_y + self.height / 2.0, self.z),
            Vec3::new(self.width, self.height, self.depth),
        )
    }

    pub fn footprint(&self) -> Rect {
        self.block().footprint()
    }

    /// Point just above the room's ceiling where its name label hangs.
    pub fn label_anchor(&self) -> Vec3 {
        Vec3::new(self.x, self.base_y + self.height + 0.3, self.z)
    }

    fn raised(&self, dy: f32) -> Self {
        Self {
            base_y: self.base_y + dy,
            ..self.clone()
        }
    }
}

/// Where the Living Room ended up; fixture placement depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub z: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureKind {
    Door,
    Staircase,
    Balcony,
    Column,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fixture {
    Door(Block),
    /// Steps ordered from the bottom of the flight to the top.
    Staircase(Vec<Block>),
    Balcony(Block),
    Column(Column),
}

impl Fixture {
    pub fn kind(&self) -> FixtureKind {
        match self {
            Fixture::Door(_) => FixtureKind::Door,
            Fixture::Staircase(_) => FixtureKind::Staircase,
            Fixture::Balcony(_) => FixtureKind::Balcony,
            Fixture::Column(_) => FixtureKind::Column,
        }
    }

    pub fn raised(&self, dy: f32) -> Self {
        match self {
            Fixture::Door(b) => Fixture::Door(b.raised(dy)),
            Fixture::Staircase(steps) => {
                Fixture::Staircase(steps.iter().map(|s| s.raised(dy)).collect())
            }
            Fixture::Balcony(b) => Fixture::Balcony(b.raised(dy)),
            Fixture::Column(c) => Fixture::Column(c.raised(dy)),
        }
    }
}

/// Rooms of one floor plus the Living Room placement they produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomPlan {
    pub rooms: Vec<Room>,
    pub living_room: Placement,
}

/// Everything standing on one floor slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorLayout {
    pub index: u32,
    pub base_y: f32,
    pub slab: Block,
    pub rooms: Vec<Room>,
    pub living_room: Placement,
    pub fixtures: Vec<Fixture>,
}

impl FloorLayout {
    pub fn rooms_of(&self, kind: RoomKind) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |r| r.kind == kind)
    }

    pub fn living_room(&self) -> Option<&Room> {
        self.rooms_of(RoomKind::LivingRoom).next()
    }

    pub fn door(&self) -> Option<&Block> {
        self.fixtures.iter().find_map(|f| match f {
            Fixture::Door(b) => Some(b),
            _ => None,
        })
    }

    /// Same floor moved up by `dy`, keeping its index.
    pub fn raised(&self, dy: f32) -> Self {
        Self {
            index: self.index,
            base_y: self.base_y + dy,
            slab: self.slab.raised(dy),
            rooms: self.rooms.iter().map(|r| r.raised(dy)).collect(),
            living_room: self.living_room,
            fixtures: self.fixtures.iter().map(|f| f.raised(dy)).collect(),
        }
    }
}

/// Width of one bedroom slot in the back row.
pub fn bedroom_slot_width(dims: &Dimensions, bedrooms: u32) -> f32 {
    (dims.width - SIDE_MARGIN) / bedrooms as f32
}

/// Places the named rooms for a floor whose slab sits at `base_y`.
pub fn place_rooms(dims: &Dimensions, bedrooms: u32, base_y: f32) -> Result<RoomPlan, PlanError> {
    if !(MIN_BEDROOMS..=MAX_BEDROOMS).contains(&bedrooms) {
        return Err(PlanError::OutOfRange {
            field: BEDROOMS_FIELD,
            value: bedrooms as i64,
            min: MIN_BEDROOMS,
            max: MAX_BEDROOMS,
        });
    }
    let slot = bedroom_slot_width(dims, bedrooms);
    if slot <= BEDROOM_GUTTER {
        return Err(PlanError::BedroomsDoNotFit {
            width: dims.width,
            bedrooms,
        });
    }

    let room_base = base_y + ROOM_LIFT;
    let front_z = dims.half_depth() - ROW_INSET;
    let back_z = -dims.half_depth() + ROW_INSET;
    let row_width = dims.width - SIDE_MARGIN;

    let living_room = Placement {
        x: 0.0,
        z: front_z,
        width: row_width,
    };

    let room = |name: String, kind, x, z, width, depth| Room {
        name,
        kind,
        x,
        z,
        base_y: room_base,
        width,
        depth,
        height: ROOM_HEIGHT,
    };

    let mut rooms = Vec::with_capacity(3 + bedrooms as usize);
    rooms.push(room(
        "Living Room".to_string(),
        RoomKind::LivingRoom,
        living_room.x,
        living_room.z,
        living_room.width,
        ROW_DEPTH,
    ));
    rooms.push(room(
        "Kitchen".to_string(),
        RoomKind::Kitchen,
        -CORE_ROOM_OFFSET,
        0.0,
        CORE_ROOM_WIDTH,
        CORE_ROOM_DEPTH,
    ));
    rooms.push(room(
        "Washroom".to_string(),
        RoomKind::Washroom,
        CORE_ROOM_OFFSET,
        0.0,
        CORE_ROOM_WIDTH,
        CORE_ROOM_DEPTH,
    ));

    for i in 0..bedrooms {
        let x = -row_width / 2.0 + slot / 2.0 + i as f32 * slot;
        rooms.push(room(
            format!("Bedroom {}", i + 1),
            RoomKind::Bedroom,
            x,
            back_z,
            slot - BEDROOM_GUTTER,
            ROW_DEPTH,
        ));
    }

    Ok(RoomPlan { rooms, living_room })
}

/// Places the door, staircase, balcony and (optionally) columns.
///
/// The door is centered on `living_room.x`; everything else depends only on
/// the envelope and `base_y`.
pub fn place_fixtures(
    dims: &Dimensions,
    base_y: f32,
    living_room: &Placement,
    columns: bool,
) -> Vec<Fixture> {
    let half_w = dims.half_width();
    let half_d = dims.half_depth();

    let mut fixtures = Vec::with_capacity(if columns { 15 } else { 3 });

    fixtures.push(Fixture::Door(Block::new(
        Vec3::new(living_room.x, base_y + DOOR_HEIGHT / 2.0, half_d + DOOR_OFFSET),
        Vec3::new(DOOR_WIDTH, DOOR_HEIGHT, DOOR_THICKNESS),
    )));

    let steps = (0..STAIR_STEPS)
        .map(|i| {
            Block::new(
                Vec3::new(
                    -half_w - STAIR_SIDE_OFFSET,
                    base_y + STAIR_LIFT + i as f32 * STAIR_RISE,
                    STAIR_START_Z + i as f32 * STAIR_RUN,
                ),
                Vec3::from_array(STAIR_STEP_SIZE),
            )
        })
        .collect();
    fixtures.push(Fixture::Staircase(steps));

    fixtures.push(Fixture::Balcony(Block::new(
        Vec3::new(0.0, base_y + BALCONY_LIFT, half_d + BALCONY_DEPTH / 2.0),
        Vec3::new(dims.width - SIDE_MARGIN, BALCONY_THICKNESS, BALCONY_DEPTH),
    )));

    if columns {
        let xs = [
            -half_w + COLUMN_EDGE_INSET,
            -dims.width / 4.0,
            dims.width / 4.0,
            half_w - COLUMN_EDGE_INSET,
        ];
        let zs = [-half_d + COLUMN_EDGE_INSET, 0.0, half_d - COLUMN_EDGE_INSET];
        for x in xs {
            for z in zs {
                fixtures.push(Fixture::Column(Column {
                    base: Vec3::new(x, base_y, z),
                    radius: COLUMN_RADIUS,
                    height: dims.floor_height,
                }));
            }
        }
    }

    fixtures
}

/// Lays out floor `index`: slab, rooms and fixtures, all offset by the
/// floor's base elevation.
pub fn layout_floor(
    dims: &Dimensions,
    bedrooms: u32,
    index: u32,
    columns: bool,
) -> Result<FloorLayout, PlanError> {
    dims.validate()?;
    let base_y = dims.base_y(index);
    let plan = place_rooms(dims, bedrooms, base_y)?;
    let fixtures = place_fixtures(dims, base_y, &plan.living_room, columns);

    Ok(FloorLayout {
        index,
        base_y,
        slab: Block::new(
            Vec3::new(0.0, base_y, 0.0),
            Vec3::new(dims.width, SLAB_THICKNESS, dims.depth),
        ),
        rooms: plan.rooms,
        living_room: plan.living_room,
        fixtures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::footprints_overlap;

    const EPS: f32 = 1e-4;

    fn default_floor(bedrooms: u32) -> FloorLayout {
        layout_floor(&Dimensions::default(), bedrooms, 0, false).unwrap()
    }

    #[test]
    fn test_reference_layout_three_bedrooms() {
        let floor = default_floor(3);

        let living = floor.living_room().unwrap();
        assert!((living.z - 4.0).abs() < EPS);
        assert!((living.width - 14.0).abs() < EPS);
        assert_eq!(living.x, 0.0);

        let beds: Vec<&Room> = floor.rooms_of(RoomKind::Bedroom).collect();
        assert_eq!(beds.len(), 3);
        let expected_x = [-14.0 / 3.0, 0.0, 14.0 / 3.0];
        for (bed, x) in beds.iter().zip(expected_x) {
            assert!((bed.width - (14.0 / 3.0 - 0.5)).abs() < EPS);
            assert!((bed.x - x).abs() < EPS, "bedroom at {} expected {x}", bed.x);
            assert!((bed.z + 4.0).abs() < EPS);
        }
    }

    #[test]
    fn test_room_order_and_names() {
        let floor = default_floor(2);
        let names: Vec<&str> = floor.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Living Room", "Kitchen", "Washroom", "Bedroom 1", "Bedroom 2"]
        );
    }

    #[test]
    fn test_zero_bedrooms_rejected() {
        let err = layout_floor(&Dimensions::default(), 0, 0, false).unwrap_err();
        assert!(matches!(err, PlanError::OutOfRange { value: 0, .. }));
    }

    #[test]
    fn test_too_many_bedrooms_for_width() {
        let dims = Dimensions::new(5.0, 14.0, 3.2).unwrap();
        let err = place_rooms(&dims, 4, 0.0).unwrap_err();
        assert!(matches!(err, PlanError::BedroomsDoNotFit { bedrooms: 4, .. }));
    }

    #[test]
    fn test_rooms_do_not_overlap_default() {
        for bedrooms in MIN_BEDROOMS..=MAX_BEDROOMS {
            let floor = default_floor(bedrooms);
            for (i, a) in floor.rooms.iter().enumerate() {
                for b in &floor.rooms[i + 1..] {
                    assert!(
                        !footprints_overlap(a.footprint(), b.footprint()),
                        "{} overlaps {} with {bedrooms} bedrooms",
                        a.name,
                        b.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_door_follows_living_room_placement() {
        let dims = Dimensions::default();
        let shifted = Placement {
            x: 2.5,
            z: 4.0,
            width: 10.0,
        };
        let fixtures = place_fixtures(&dims, 0.0, &shifted, false);
        let Fixture::Door(door) = &fixtures[0] else {
            panic!("first fixture should be the door");
        };
        assert_eq!(door.center.x, 2.5);
        assert!((door.center.y - 1.2).abs() < EPS);
        assert!((door.center.z - 7.2).abs() < EPS);
    }

    #[test]
    fn test_staircase_steps_climb() {
        let living_room = Placement {
            x: 0.0,
            z: 4.0,
            width: 14.0,
        };
        let fixtures = place_fixtures(&Dimensions::default(), 0.0, &living_room, false);
        let Some(Fixture::Staircase(steps)) = fixtures.get(1) else {
            panic!("second fixture should be the staircase");
        };
        assert_eq!(steps.len(), STAIR_STEPS);
        assert!((steps[0].center.x + 11.5).abs() < EPS);
        assert!((steps[0].center.y - 0.2).abs() < EPS);
        for pair in steps.windows(2) {
            assert!(pair[1].center.y > pair[0].center.y);
            assert!(pair[1].center.z > pair[0].center.z);
        }
    }

    #[test]
    fn test_balcony_in_front_of_building() {
        let floor = default_floor(3);
        let balcony = floor
            .fixtures
            .iter()
            .find_map(|f| match f {
                Fixture::Balcony(b) => Some(b),
                _ => None,
            })
            .unwrap();
        assert!((balcony.center.z - 8.0).abs() < EPS);
        assert!((balcony.size.x - 14.0).abs() < EPS);
    }

    #[test]
    fn test_columns_only_when_requested() {
        let dims = Dimensions::default();
        let without = layout_floor(&dims, 2, 1, false).unwrap();
        assert!(without
            .fixtures
            .iter()
            .all(|f| f.kind() != FixtureKind::Column));

        let with = layout_floor(&dims, 2, 1, true).unwrap();
        let columns: Vec<&Column> = with
            .fixtures
            .iter()
            .filter_map(|f| match f {
                Fixture::Column(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(columns.len(), 12);
        for c in columns {
            assert!((c.base.y - 3.2).abs() < EPS);
            assert!((c.height - 3.2).abs() < EPS);
        }
    }

    #[test]
    fn test_floor_raised_matches_upper_floor() {
        let dims = Dimensions::default();
        let ground = layout_floor(&dims, 4, 0, true).unwrap();
        let third = layout_floor(&dims, 4, 2, true).unwrap();
        let raised = ground.raised(dims.base_y(2));
        assert_eq!(raised.rooms.len(), third.rooms.len());
        for (a, b) in raised.rooms.iter().zip(&third.rooms) {
            assert!((a.base_y - b.base_y).abs() < EPS);
            assert_eq!(a.x, b.x);
            assert_eq!(a.z, b.z);
        }
        assert!((raised.slab.center.y - third.slab.center.y).abs() < EPS);
    }
}
