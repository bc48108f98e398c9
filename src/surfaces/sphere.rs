use crate::ray::Ray;

use nalgebra::Point3;

/// Nearest forward intersection of `ray` with the sphere around `center`.
///
/// When the origin is inside, the exit point (far root) is returned.
pub(super) fn intersect(ray: &Ray, center: &Point3<f64>, radius: f64) -> Option<f64> {
    let offset = ray.origin - center;
    let mid = -ray.direction.dot(&offset);
    let discriminant = mid * mid - offset.norm_squared() + radius * radius;
    if discriminant < 0.0 {
        return None;
    }
    let half_chord = discriminant.sqrt();
    let near = mid - half_chord;
    let far = mid + half_chord;
    if far < 0.0 {
        None
    } else if near < 0.0 {
        Some(far)
    } else {
        Some(near)
    }
}
