use crate::ray::Ray;

use nalgebra::{Point3, Vector3};

/// Nearest forward intersection of `ray` with the plane through `point` with
/// unit normal `normal`.
///
/// A parallel ray yields no event, even when it lies in the plane.
pub(super) fn intersect(ray: &Ray, point: &Point3<f64>, normal: &Vector3<f64>) -> Option<f64> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < std::f64::EPSILON {
        return None;
    }
    let t = (point - ray.origin).dot(normal) / denom;
    if t < 0.0 || !t.is_finite() {
        None
    } else {
        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use crate::ray::Ray;
    use crate::region::Sense;
    use crate::surfaces::{BoundaryKind, Surface};

    use nalgebra::{Point3, Vector3};

    fn yz_plane() -> Surface {
        Surface::plane(
            Point3::new(-5.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            BoundaryKind::Transmission,
        )
        .unwrap()
    }

    #[test]
    fn ray_intersects_plane() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, 0.0, 1.0));
        if let None = yz_plane().intersect(&r) {
            panic!("Intersection failed.");
        }
    }

    #[test]
    fn ray_does_not_intersect_plane_behind_it() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 0.0, 1.0));
        if let Some(_) = yz_plane().intersect(&r) {
            panic!("Intersection passed.");
        }
    }

    #[test]
    fn parallel_ray_misses() {
        let p = Surface::plane(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            BoundaryKind::Transmission,
        )
        .unwrap();
        let r = Ray::new(Point3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(p.intersect(&r), None);
    }

    #[test]
    fn ray_lying_in_plane_is_no_event() {
        let p = Surface::plane(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            BoundaryKind::Transmission,
        )
        .unwrap();
        let r = Ray::new(Point3::new(1.0, -2.0, 0.0), Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(p.intersect(&r), None);
    }

    #[test]
    fn intersection_point_is_on_plane() {
        let target = yz_plane();
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, 0.0, 1.0));
        let t = target.intersect(&r).unwrap();
        assert!(target.evaluate(&r.point_at(t)).abs() < 1e-9);
    }

    #[test]
    fn halfspace_sign_follows_the_normal() {
        let target = yz_plane();
        assert_eq!(target.halfspace(&Point3::new(0.0, 7.0, -3.0)), Sense::Positive);
        assert_eq!(target.halfspace(&Point3::new(-6.0, 0.0, 0.0)), Sense::Negative);
        // On-surface points belong to the closed inside.
        assert_eq!(target.halfspace(&Point3::new(-5.0, 1.0, 2.0)), Sense::Negative);
    }
}
