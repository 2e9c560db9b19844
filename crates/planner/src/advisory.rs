//! Plot feasibility hint shown next to the input form.
//!
//! Independent of the room template: it only looks at the plot area and the
//! requested room count.

/// Minimum plot area for a three-bedroom layout.
pub const THREE_BHK_MIN_AREA: f32 = 0.15;
/// Minimum total room count for a three-bedroom layout.
pub const THREE_BHK_MIN_ROOMS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    ThreeBhkFeasible,
    TwoBhkRecommended,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::ThreeBhkFeasible => "3BHK feasible",
            Advisory::TwoBhkRecommended => "2BHK recommended",
        }
    }
}

pub fn plot_advisory(area: f32, rooms: u32) -> Advisory {
    if area >= THREE_BHK_MIN_AREA && rooms >= THREE_BHK_MIN_ROOMS {
        Advisory::ThreeBhkFeasible
    } else {
        Advisory::TwoBhkRecommended
    }
}
