use crate::ray::Ray;

use nalgebra::{Point3, Vector3};

/// Nearest forward intersection of `ray` with the cone of the given half-angle
/// opening from `tip` around the unit vector `axis`.
///
/// The quadratic describes both nappes; two-root hits are filtered to the real
/// nappe by requiring the hit point to lie ahead of the tip along the axis. A
/// tangential double root is returned unfiltered when it is not behind the
/// origin.
pub(super) fn intersect(
    ray: &Ray,
    tip: &Point3<f64>,
    axis: &Vector3<f64>,
    half_angle: f64,
) -> Option<f64> {
    let cos_sq = half_angle.cos().powi(2);
    let offset = ray.origin - tip;
    let dir_axis = ray.direction.dot(axis);
    let offset_axis = offset.dot(axis);
    let a = dir_axis * dir_axis - cos_sq;
    let b = 2.0 * (dir_axis * offset_axis - ray.direction.dot(&offset) * cos_sq);
    let c = offset_axis * offset_axis - offset.norm_squared() * cos_sq;

    if a == 0.0 {
        // Ray parallel to the slant: the quadratic degrades to b*t + c = 0.
        if b == 0.0 {
            return None;
        }
        let t = -c / b;
        if t >= 0.0 && on_real_nappe(ray, t, tip, axis) {
            return Some(t);
        }
        return None;
    }

    let det = b * b - 4.0 * a * c;
    if det < 0.0 {
        return None;
    }
    if det == 0.0 {
        let t = -b / (2.0 * a);
        return if t >= 0.0 { Some(t) } else { None };
    }

    let root = det.sqrt();
    let mut nearest = None;
    for &t in &[(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)] {
        if t >= 0.0 && on_real_nappe(ray, t, tip, axis) {
            nearest = match nearest {
                Some(best) if best <= t => Some(best),
                _ => Some(t),
            };
        }
    }
    nearest
}

fn on_real_nappe(ray: &Ray, t: f64, tip: &Point3<f64>, axis: &Vector3<f64>) -> bool {
    (ray.point_at(t) - tip).dot(axis) > 0.0
}
