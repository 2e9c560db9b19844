//! Procedural layout for the building viewer: validated inputs in,
//! room and fixture geometry out. Nothing here touches rendering.

pub mod advisory;
pub mod building;
pub mod config;
pub mod floor_plan;
pub mod geometry;
pub mod layout;
pub mod plan_error;
pub mod request;

pub use building::Building;
pub use geometry::{Block, Column, Dimensions};
pub use layout::{Fixture, FixtureKind, FloorLayout, Placement, Room, RoomKind};
pub use plan_error::PlanError;
pub use request::BuildRequest;
