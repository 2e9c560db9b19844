//! Building dimensions and layout template constants.

/// Footprint width of the building along X.
pub const BUILDING_WIDTH: f32 = 18.0;
/// Footprint depth of the building along Z.
pub const BUILDING_DEPTH: f32 = 14.0;
/// Vertical distance between consecutive floor slabs.
pub const FLOOR_HEIGHT: f32 = 3.2;

pub const SLAB_THICKNESS: f32 = 0.4;
pub const ROOF_THICKNESS: f32 = 0.5;

// =============================================================================
// Room template
// =============================================================================

/// Width taken off the full building width by the front and back room rows.
pub const SIDE_MARGIN: f32 = 4.0;
/// Distance from the front/back edge to the center of the front/back row.
pub const ROW_INSET: f32 = 3.0;
/// Depth of the front (living) and back (bedroom) rows.
pub const ROW_DEPTH: f32 = 4.0;

pub const CORE_ROOM_WIDTH: f32 = 5.0;
pub const CORE_ROOM_DEPTH: f32 = 3.5;
/// Kitchen sits at `-CORE_ROOM_OFFSET`, washroom at `+CORE_ROOM_OFFSET`.
pub const CORE_ROOM_OFFSET: f32 = 4.0;

/// Each bedroom is narrower than its slot by this much.
pub const BEDROOM_GUTTER: f32 = 0.5;

pub const ROOM_HEIGHT: f32 = 3.0;
/// Rooms float slightly above the slab so their bases don't z-fight with it.
pub const ROOM_LIFT: f32 = 0.1;

/// Smallest depth at which the front, core and back rows stay apart.
pub const MIN_DEPTH: f32 = 2.0 * (ROW_INSET + ROW_DEPTH / 2.0 + CORE_ROOM_DEPTH / 2.0);

// =============================================================================
// Fixtures
// =============================================================================

pub const DOOR_WIDTH: f32 = 1.2;
pub const DOOR_HEIGHT: f32 = 2.4;
pub const DOOR_THICKNESS: f32 = 0.2;
/// How far the door stands proud of the front edge.
pub const DOOR_OFFSET: f32 = 0.2;

pub const STAIR_STEPS: usize = 8;
pub const STAIR_STEP_SIZE: [f32; 3] = [3.0, 0.3, 1.0];
pub const STAIR_RISE: f32 = 0.35;
pub const STAIR_RUN: f32 = 0.6;
/// Gap between the left edge of the building and the staircase center.
pub const STAIR_SIDE_OFFSET: f32 = 2.5;
pub const STAIR_START_Z: f32 = -2.0;
pub const STAIR_LIFT: f32 = 0.2;

pub const BALCONY_THICKNESS: f32 = 0.3;
pub const BALCONY_DEPTH: f32 = 2.0;
pub const BALCONY_LIFT: f32 = 0.2;

pub const COLUMN_RADIUS: f32 = 0.3;
/// Columns sit this far in from the slab edges.
pub const COLUMN_EDGE_INSET: f32 = 1.0;

// =============================================================================
// Input limits
// =============================================================================

pub const MIN_FLOORS: u32 = 1;
pub const MAX_FLOORS: u32 = 20;
pub const MIN_BEDROOMS: u32 = 1;
pub const MAX_BEDROOMS: u32 = 8;

pub const DEFAULT_FLOORS: u32 = 2;
pub const DEFAULT_BEDROOMS: u32 = 3;
