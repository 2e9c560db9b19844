//! Fixed color per building element kind.

use bevy::prelude::*;
use planner::{FixtureKind, RoomKind};

/// Every kind of renderable building element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    FloorSlab,
    Roof,
    LivingRoom,
    Kitchen,
    Washroom,
    Bedroom,
    Door,
    StairStep,
    Balcony,
    Column,
}

impl ElementKind {
    pub const ALL: [ElementKind; 10] = [
        ElementKind::FloorSlab,
        ElementKind::Roof,
        ElementKind::LivingRoom,
        ElementKind::Kitchen,
        ElementKind::Washroom,
        ElementKind::Bedroom,
        ElementKind::Door,
        ElementKind::StairStep,
        ElementKind::Balcony,
        ElementKind::Column,
    ];

    pub fn color(self) -> Color {
        match self {
            ElementKind::FloorSlab => Color::srgb_u8(0xb0, 0xbe, 0xc5),
            ElementKind::Roof => Color::srgb_u8(0x7b, 0x1f, 0xa2),
            ElementKind::LivingRoom => Color::srgb_u8(0x81, 0xd4, 0xfa),
            ElementKind::Kitchen => Color::srgb_u8(0xff, 0xf5, 0x9d),
            ElementKind::Washroom => Color::srgb_u8(0xb3, 0x9d, 0xdb),
            ElementKind::Bedroom => Color::srgb_u8(0xf8, 0xbb, 0xd0),
            ElementKind::Door => Color::srgb_u8(0x5d, 0x40, 0x37),
            ElementKind::StairStep => Color::srgb_u8(0x8d, 0x6e, 0x63),
            ElementKind::Balcony => Color::srgb_u8(0x9e, 0x9e, 0x9e),
            ElementKind::Column => Color::srgb_u8(0x45, 0x5a, 0x64),
        }
    }

    /// Rooms are drawn see-through so the floor beneath stays readable.
    pub fn is_translucent(self) -> bool {
        matches!(
            self,
            ElementKind::LivingRoom
                | ElementKind::Kitchen
                | ElementKind::Washroom
                | ElementKind::Bedroom
        )
    }
}

impl From<RoomKind> for ElementKind {
    fn from(kind: RoomKind) -> Self {
        match kind {
            RoomKind::LivingRoom => ElementKind::LivingRoom,
            RoomKind::Kitchen => ElementKind::Kitchen,
            RoomKind::Washroom => ElementKind::Washroom,
            RoomKind::Bedroom => ElementKind::Bedroom,
        }
    }
}

impl From<FixtureKind> for ElementKind {
    fn from(kind: FixtureKind) -> Self {
        match kind {
            FixtureKind::Door => ElementKind::Door,
            FixtureKind::Staircase => ElementKind::StairStep,
            FixtureKind::Balcony => ElementKind::Balcony,
            FixtureKind::Column => ElementKind::Column,
        }
    }
}

pub const ROOM_OPACITY: f32 = 0.9;
pub const OUTLINE_COLOR: Color = Color::srgb(0.2, 0.22, 0.25);

pub const BACKGROUND_COLOR: Color = Color::srgb(0.961, 0.969, 0.980);
pub const GROUND_COLOR: Color = Color::srgb(0.878, 0.878, 0.878);
pub const GRID_COLOR: Color = Color::srgb(0.7, 0.7, 0.7);
pub const LABEL_COLOR: Color = Color::srgb(0.1, 0.1, 0.12);
