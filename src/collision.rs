/// Collision queries and movement resolution for the maze core
///
/// This module provides the circle-based collision system shared by the
/// player and the pursuers. Walls are axis-aligned rectangles in the XZ
/// plane (`WallSegment`), moving things are circles, and movement is
/// resolved one axis at a time so that a diagonal push into a wall
/// degrades into sliding along it instead of stopping dead.
///
/// # Architecture
///
/// - `CircleCollider` trait: Implemented by entities that collide as a
///   circle in the XZ plane (player, pursuers)
/// - Intersection functions: Pure, stateless circle-vs-rect and
///   circle-vs-circle tests
/// - `resolve_movement`: The single movement-blocking policy every moving
///   entity goes through
use crate::geometry::WallSegment;

/// Trait for entities that occupy a circle in the XZ plane.
///
/// Both the player and the pursuers implement this, which lets the capture
/// check work over either side without caring which concrete type it has.
pub trait CircleCollider {
    /// XZ center of the collision circle.
    fn center(&self) -> (f32, f32);

    /// Radius of the collision circle.
    fn radius(&self) -> f32;
}

/// Checks whether a circle intersects an axis-aligned wall rectangle.
///
/// # Algorithm
///
/// Clamp the circle center to the rectangle bounds to find the nearest
/// point on the rectangle, then compare the squared distance to that point
/// against the squared radius. The test is boundary-inclusive: a circle
/// exactly touching the rectangle counts as intersecting.
pub fn circle_intersects_rect(
    center_x: f32,
    center_z: f32,
    radius: f32,
    rect: &WallSegment,
) -> bool {
    let nearest_x = center_x.clamp(rect.x, rect.x + rect.width);
    let nearest_z = center_z.clamp(rect.z, rect.z + rect.depth);
    let dx = center_x - nearest_x;
    let dz = center_z - nearest_z;
    dx * dx + dz * dz <= radius * radius
}

/// Checks whether two circles in the XZ plane intersect (boundary-inclusive).
pub fn circle_intersects_circle(
    center1: (f32, f32),
    radius1: f32,
    center2: (f32, f32),
    radius2: f32,
) -> bool {
    let dx = center1.0 - center2.0;
    let dz = center1.1 - center2.1;
    let radius_sum = radius1 + radius2;
    dx * dx + dz * dz <= radius_sum * radius_sum
}

/// Checks whether two circle colliders intersect.
pub fn colliders_intersect(a: &impl CircleCollider, b: &impl CircleCollider) -> bool {
    circle_intersects_circle(a.center(), a.radius(), b.center(), b.radius())
}

/// Checks a circle against every wall segment.
///
/// This is the sole movement-blocking predicate: a position is valid iff
/// this returns false. O(segments) per call, which for a w x h maze is at
/// most `2wh + w + h` rectangles.
pub fn collides_any(center_x: f32, center_z: f32, radius: f32, segments: &[WallSegment]) -> bool {
    segments
        .iter()
        .any(|segment| circle_intersects_rect(center_x, center_z, radius, segment))
}

/// Resolves a movement step against the walls, one axis at a time.
///
/// The X displacement is attempted alone and accepted only if the moved
/// circle is collision-free; then the Z displacement is attempted from the
/// (possibly updated) position. Splitting the axes is what produces
/// sliding: a diagonal move into a wall keeps its along-wall component.
///
/// # Returns
///
/// The final XZ position after both attempts.
pub fn resolve_movement(
    x: f32,
    z: f32,
    step_x: f32,
    step_z: f32,
    radius: f32,
    segments: &[WallSegment],
) -> (f32, f32) {
    let mut out_x = x;
    let mut out_z = z;

    if !collides_any(out_x + step_x, out_z, radius, segments) {
        out_x += step_x;
    }

    if !collides_any(out_x, out_z + step_z, radius, segments) {
        out_z += step_z;
    }

    (out_x, out_z)
}
