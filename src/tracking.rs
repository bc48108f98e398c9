use crate::ray::Ray;
use crate::region::Region;
use crate::surfaces::{BoundaryKind, Surface};

use tracing::trace;

/// Distance a ray origin is pushed past a crossed surface, so that half-space
/// queries at the new origin land unambiguously on the exit side.
///
/// Fixed; scenes with coordinate magnitudes much above 1e6 would need a
/// larger bump.
pub const RAY_BUMP: f64 = 1e-9;

/// The result of advancing a ray to the next surface of its cell.
#[derive(Clone, Debug)]
pub struct Crossing {
    /// The ray just past the crossed surface. For a reflective boundary the
    /// direction is mirrored and the origin backed off the surface along it.
    pub ray: Ray,

    /// Index of the crossed region in the cell's region list.
    pub region: usize,

    /// Boundary condition of the crossed surface. `Transmission` callers
    /// re-resolve the cell at the new origin; `Vacuum` callers stop.
    pub boundary: BoundaryKind,
}

/// Mirror `ray` across a plane's normal, keeping the origin.
///
/// Reflection is only defined for planes; any other surface yields `None`.
pub fn reflect(ray: &Ray, plane: &Surface) -> Option<Ray> {
    match plane {
        Surface::Plane { normal, .. } => Some(ray.reflect_across(normal)),
        _ => None,
    }
}

/// Advance `ray` across the nearest surface of the cell whose regions are
/// given.
///
/// Every region is tested; the minimum non-negative intersection distance
/// wins, with ties resolving to the earlier index. Returns `None` when no
/// region is hit, which cannot happen for a ray inside a closed cell.
pub fn find_intersection(ray: &Ray, regions: &[Region]) -> Option<Crossing> {
    let mut nearest: Option<(usize, f64)> = None;
    for (index, region) in regions.iter().enumerate() {
        if let Some(distance) = region.surface.intersect(ray) {
            // Strictly-less keeps the earlier region on ties.
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }
    }
    let (index, distance) = nearest?;
    let surface = &regions[index].surface;
    let boundary = surface.boundary();

    let advanced = Ray::new(ray.point_at(distance + RAY_BUMP), ray.direction);
    let advanced = match boundary {
        BoundaryKind::Reflective => reflect(&advanced, surface)?.bias(2.0 * RAY_BUMP),
        BoundaryKind::Vacuum | BoundaryKind::Transmission => advanced,
    };
    trace!(region = index, distance, boundary = ?boundary, "ray crossed surface");
    Some(Crossing {
        ray: advanced,
        region: index,
        boundary,
    })
}
