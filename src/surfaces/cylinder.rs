use crate::ray::Ray;

use nalgebra::{Point3, Vector3};

/// Nearest forward intersection of `ray` with the infinite cylinder of the
/// given radius around the line through `center` along the unit vector `axis`.
///
/// The quadratic is set up from cross products with the axis, so a ray
/// parallel to the axis (zero leading coefficient) never intersects.
pub(super) fn intersect(
    ray: &Ray,
    center: &Point3<f64>,
    axis: &Vector3<f64>,
    radius: f64,
) -> Option<f64> {
    let dir_cross = ray.direction.cross(axis);
    let a = dir_cross.norm_squared();
    if a == 0.0 {
        return None;
    }
    let offset_cross = (ray.origin - center).cross(axis);
    let b = 2.0 * dir_cross.dot(&offset_cross);
    let c = offset_cross.norm_squared() - radius * radius;
    let det = b * b - 4.0 * a * c;
    if det < 0.0 {
        return None;
    }
    let root = det.sqrt();
    let near = (-b - root) / (2.0 * a);
    let far = (-b + root) / (2.0 * a);
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}
