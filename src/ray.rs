use nalgebra::{Point3, Vector3};

/// A ray, consisting of a start point and direction
///
/// This is the basic ray struct used to define things like a particle track
/// crossing a cell or a line of sight reflected off a mirror plane.
#[derive(Clone, Debug)]
pub struct Ray {
    /// The start point of the ray
    pub origin: Point3<f64>,

    /// The direction the ray goes in.
    ///
    /// This vector should always be kept normalized
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Ray {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Return the point on the ray that is `t` units from the start
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }

    /// Create a new ray by moving the original ray along its direction by `amount`
    ///
    /// `amount` is normally a very small number. This function is useful for ensuring
    /// that rounding errors don't leave the origin sitting exactly on a surface it
    /// just crossed.
    pub fn bias(&self, amount: f64) -> Ray {
        Ray::new(self.origin + self.direction * amount, self.direction)
    }

    /// Mirror the ray's direction across `normal`, keeping the origin.
    ///
    /// The output direction is unit-magnitude provided the input direction and
    /// `normal` are.
    pub fn reflect_across(&self, normal: &Vector3<f64>) -> Ray {
        Ray {
            origin: self.origin,
            direction: self.direction - normal * (2.0 * self.direction.dot(normal)),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;
    use quickcheck::{Arbitrary, Gen};

    impl Arbitrary for Ray {
        fn arbitrary<G: Gen>(g: &mut G) -> Ray {
            let origin = <Point3<f64> as Arbitrary>::arbitrary(g);
            let mut direction = <Vector3<f64> as Arbitrary>::arbitrary(g);
            if direction.norm() < 1e-6 {
                direction = Vector3::x();
            }
            Ray::new(origin, direction)
        }
    }

    #[quickcheck]
    fn t0_is_origin(ray: Ray) -> bool {
        ray.point_at(0.0) == ray.origin
    }

    #[quickcheck]
    fn t1_is_origin_plus_direction(ray: Ray) -> bool {
        ray.point_at(1.0) == ray.origin + ray.direction
    }

    #[quickcheck]
    fn points_are_colinear(ray: Ray, t1: f64, t2: f64, t3: f64) -> bool {
        let p1 = ray.point_at(t1);
        let p2 = ray.point_at(t2);
        let p3 = ray.point_at(t3);
        let epsilon = [t1, t2, t3, ray.origin[0], ray.origin[1], ray.origin[2]]
            .iter()
            .fold(0.0f64, |a, &b| a.max(b.abs()))
            * std::f64::EPSILON
            * 256.0f64;
        (p2 - p1).cross(&(p3 - p2)).norm() < epsilon
    }

    #[quickcheck]
    fn t_is_distance(ray: Ray, t: f64) -> bool {
        (ray.point_at(t) - ray.origin).norm() - t.abs() < 0.0000000001
    }

    #[test]
    fn reflection_reverses_normal_component() {
        let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let reflected = ray.reflect_across(&Vector3::new(1.0, 0.0, 0.0));
        assert!((reflected.direction - Vector3::new(-1.0, 0.0, 0.0)).norm() < 1e-12);
        assert_eq!(reflected.origin, ray.origin);
    }

    #[test]
    fn reflection_preserves_tangential_component() {
        let ray = Ray::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, -1.0, 0.0),
        );
        let reflected = ray.reflect_across(&Vector3::new(0.0, 1.0, 0.0));
        let expected = Vector3::new(1.0, 1.0, 0.0).normalize();
        assert!((reflected.direction - expected).norm() < 1e-12);
    }

    #[quickcheck]
    fn reflecting_twice_restores_direction(ray: Ray, normal: Vector3<f64>) -> TestResult {
        if normal.norm() < 1e-6 {
            return TestResult::discard();
        }
        let normal = normal.normalize();
        let twice = ray.reflect_across(&normal).reflect_across(&normal);
        TestResult::from_bool((twice.direction - ray.direction).norm() < 1e-9)
    }

    #[quickcheck]
    fn reflection_preserves_magnitude(ray: Ray, normal: Vector3<f64>) -> TestResult {
        if normal.norm() < 1e-6 {
            return TestResult::discard();
        }
        let normal = normal.normalize();
        let reflected = ray.reflect_across(&normal);
        TestResult::from_bool((reflected.direction.norm() - 1.0).abs() < 1e-9)
    }
}
