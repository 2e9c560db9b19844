/// Shown when no reference drawing exists for a bedroom count.
pub const NO_FLOOR_PLAN: &str = "No floor plan available";

/// Path of the static floor-plan drawing for `bedrooms`, if one exists.
pub fn floor_plan_image(bedrooms: u32) -> Option<&'static str> {
    match bedrooms {
        1 => Some("images/1bhk.png"),
        2 => Some("images/2bhk.png"),
        3 => Some("images/3bhk.png"),
        4 => Some("images/4bhk.png"),
        _ => None,
    }
}
