//! Pure point maps used by the figure transforms.
//!
//! Each function takes the pivot explicitly, so a figure reads its root
//! position once and then maps every node through the same function.

use crate::types::Point;
use glam::Vec2;

/// Rotates `p` about `pivot` by `angle` radians, counter-clockwise for
/// positive angles in a y-up frame.
#[inline]
pub fn rotate_about(p: Point, pivot: Point, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    let d = p - pivot;
    pivot + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Scales the offset of `p` from `pivot` by `factor`.
#[inline]
pub fn scale_about(p: Point, pivot: Point, factor: f32) -> Point {
    pivot + (p - pivot) * factor
}

/// Mirrors `p` across the line through `pivot` at orientation `angle`.
///
/// The frame is first rotated by `-angle`, the x offset from the pivot is
/// negated, and the frame is rotated back. With `angle == 0` this mirrors
/// across the vertical line through the pivot.
#[inline]
pub fn reflect_about(p: Point, pivot: Point, angle: f32) -> Point {
    let aligned = rotate_about(p, pivot, -angle);
    let mirrored = Point::new(2.0 * pivot.x - aligned.x, aligned.y);
    rotate_about(mirrored, pivot, angle)
}

#[inline]
pub fn translate(p: Point, offset: Vec2) -> Point {
    p + offset
}
