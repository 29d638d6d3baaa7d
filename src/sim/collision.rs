//! Collision detection for the player circle against obstacle rectangles
//!
//! The world is axis-aligned, so the whole broad phase is a closest-point
//! clamp per rectangle: clamp the circle center into the rectangle, then
//! compare the squared distance to the squared radius.

use glam::Vec2;

use super::state::Obstacle;

/// An axis-aligned rectangle (origin at top-left, y growing downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle with non-positive extent occupies no area
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// Closest-point test between a circle and a rectangle.
///
/// Touching exactly (distance equal to the radius) does not count as a
/// collision, and an empty rectangle never collides.
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> bool {
    if rect.is_empty() {
        return false;
    }
    let nearest = Vec2::new(
        center.x.clamp(rect.x, rect.x + rect.w),
        center.y.clamp(rect.y, rect.y + rect.h),
    );
    center.distance_squared(nearest) < radius * radius
}

/// The two blocking rectangles of an obstacle at its current gap position:
/// viewport top down to the gap's upper edge, and the gap's lower edge down
/// to the viewport bottom. Either may come out empty when the gap reaches a
/// viewport edge.
pub fn obstacle_rects(ob: &Obstacle, view_height: f32) -> (Rect, Rect) {
    let gap_top = ob.gap_center - ob.gap / 2.0;
    let gap_bottom = ob.gap_center + ob.gap / 2.0;
    (
        Rect::new(ob.x, 0.0, ob.width, gap_top),
        Rect::new(ob.x, gap_bottom, ob.width, view_height - gap_bottom),
    )
}
