use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::region::Sense;

use nalgebra::{Point3, Vector3};

pub mod plane;

pub mod sphere;

pub mod cylinder;

pub mod cone;

/// What happens when a ray crosses a surface.
///
/// `Transmission` continues the walk into the neighboring cell, `Vacuum`
/// terminates it, and `Reflective` mirrors the ray back into the current cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    Transmission,
    Vacuum,
    Reflective,
}

impl Default for BoundaryKind {
    fn default() -> BoundaryKind {
        BoundaryKind::Transmission
    }
}

impl BoundaryKind {
    /// Canonicalize a human-facing boundary name.
    ///
    /// Unknown names fall back to `Transmission`.
    pub fn from_name(name: &str) -> BoundaryKind {
        match name {
            "reflective" => BoundaryKind::Reflective,
            "vacuum" => BoundaryKind::Vacuum,
            _ => BoundaryKind::Transmission,
        }
    }
}

/// An analytic surface bounding a half-space.
///
/// Surfaces are immutable after construction and shared by the regions that
/// cite them. Directions (`normal`, `axis`) are unit vectors; the constructors
/// normalize their input and reject degenerate values.
#[derive(Clone, Debug, PartialEq)]
pub enum Surface {
    Plane {
        point: Point3<f64>,
        normal: Vector3<f64>,
        boundary: BoundaryKind,
    },
    Sphere {
        center: Point3<f64>,
        radius: f64,
        boundary: BoundaryKind,
    },
    InfCylinder {
        center: Point3<f64>,
        axis: Vector3<f64>,
        radius: f64,
        boundary: BoundaryKind,
    },
    Cone {
        tip: Point3<f64>,
        /// Points into the real nappe.
        axis: Vector3<f64>,
        half_angle: f64,
        boundary: BoundaryKind,
    },
}

fn unitize(direction: Vector3<f64>) -> Result<Vector3<f64>> {
    let norm = direction.norm();
    if norm == 0.0 || !norm.is_finite() {
        return Err(Error::DegenerateDirection);
    }
    Ok(direction / norm)
}

fn check_radius(radius: f64) -> Result<()> {
    if radius > 0.0 {
        Ok(())
    } else {
        Err(Error::NonPositiveRadius(radius))
    }
}

fn reject_reflective(boundary: BoundaryKind) -> Result<()> {
    if boundary == BoundaryKind::Reflective {
        Err(Error::ReflectiveUnsupported)
    } else {
        Ok(())
    }
}

impl Surface {
    /// A plane through `point` with the given normal. Any boundary kind is
    /// accepted; planes are the only surface with a defined reflection.
    pub fn plane(
        point: Point3<f64>,
        normal: Vector3<f64>,
        boundary: BoundaryKind,
    ) -> Result<Surface> {
        Ok(Surface::Plane {
            point,
            normal: unitize(normal)?,
            boundary,
        })
    }

    pub fn sphere(center: Point3<f64>, radius: f64, boundary: BoundaryKind) -> Result<Surface> {
        check_radius(radius)?;
        reject_reflective(boundary)?;
        Ok(Surface::Sphere {
            center,
            radius,
            boundary,
        })
    }

    /// An infinite cylinder around the line through `center` along `axis`.
    pub fn infinite_cylinder(
        center: Point3<f64>,
        axis: Vector3<f64>,
        radius: f64,
        boundary: BoundaryKind,
    ) -> Result<Surface> {
        check_radius(radius)?;
        reject_reflective(boundary)?;
        Ok(Surface::InfCylinder {
            center,
            axis: unitize(axis)?,
            radius,
            boundary,
        })
    }

    /// A cone with apex `tip`, opening by `half_angle` around `axis`.
    ///
    /// `axis` points into the real nappe; `half_angle` must lie strictly
    /// between 0 and pi/2.
    pub fn cone(
        tip: Point3<f64>,
        axis: Vector3<f64>,
        half_angle: f64,
        boundary: BoundaryKind,
    ) -> Result<Surface> {
        if !(half_angle > 0.0 && half_angle < std::f64::consts::FRAC_PI_2) {
            return Err(Error::HalfAngleOutOfRange(half_angle));
        }
        reject_reflective(boundary)?;
        Ok(Surface::Cone {
            tip,
            axis: unitize(axis)?,
            half_angle,
            boundary,
        })
    }

    pub fn boundary(&self) -> BoundaryKind {
        match self {
            Surface::Plane { boundary, .. }
            | Surface::Sphere { boundary, .. }
            | Surface::InfCylinder { boundary, .. }
            | Surface::Cone { boundary, .. } => *boundary,
        }
    }

    /// Signed half-space function: negative strictly inside the surface, zero
    /// on it, positive outside.
    ///
    /// For cones "inside" is the interior of both nappes; compose with a plane
    /// region through the tip to cut away the shadow nappe.
    pub fn evaluate(&self, point: &Point3<f64>) -> f64 {
        match self {
            Surface::Plane {
                point: plane_point,
                normal,
                ..
            } => normal.dot(&(point - plane_point)),
            Surface::Sphere { center, radius, .. } => {
                (point - center).norm_squared() - radius * radius
            }
            Surface::InfCylinder {
                center,
                axis,
                radius,
                ..
            } => (point - center).cross(axis).norm_squared() - radius * radius,
            Surface::Cone {
                tip,
                axis,
                half_angle,
                ..
            } => {
                let tip_to_point = point - tip;
                let cos_sq = half_angle.cos().powi(2);
                tip_to_point.norm_squared() * cos_sq - tip_to_point.dot(axis).powi(2)
            }
        }
    }

    /// Which side of the surface `point` lies on.
    ///
    /// Points exactly on the surface are reported as `Sense::Negative`, the
    /// closed inside.
    pub fn halfspace(&self, point: &Point3<f64>) -> Sense {
        Sense::of(self.evaluate(point))
    }

    /// Parametric distance to the nearest intersection of `ray` with the
    /// surface that is not behind the ray's origin, or `None` when the ray
    /// misses.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Surface::Plane { point, normal, .. } => plane::intersect(ray, point, normal),
            Surface::Sphere { center, radius, .. } => sphere::intersect(ray, center, *radius),
            Surface::InfCylinder {
                center,
                axis,
                radius,
                ..
            } => cylinder::intersect(ray, center, axis, *radius),
            Surface::Cone {
                tip,
                axis,
                half_angle,
                ..
            } => cone::intersect(ray, tip, axis, *half_angle),
        }
    }
}
