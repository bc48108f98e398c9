use crate::error::Result;
use crate::expr::Expr;
use crate::region::Region;

use nalgebra::Point3;

/// A volume of the scene: an ordered list of half-space regions combined by a
/// Boolean definition over their indices.
///
/// Cells of a geometry are trusted to tile the bounding box without overlap;
/// the kernel never checks this.
#[derive(Clone, Debug)]
pub struct Cell {
    pub regions: Vec<Region>,
    pub definition: Expr,
}

impl Cell {
    /// Build a cell from a pre-built definition tree.
    ///
    /// Fails when the definition references a region index outside `regions`.
    pub fn new(regions: Vec<Region>, definition: Expr) -> Result<Cell> {
        definition.validate(regions.len())?;
        Ok(Cell {
            regions,
            definition,
        })
    }

    /// Build a cell from an infix definition such as `"0 ^ ~1"`.
    pub fn from_expression(regions: Vec<Region>, definition: &str) -> Result<Cell> {
        Cell::new(regions, Expr::parse(definition)?)
    }

    /// True when `point` lies inside this cell's volume.
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        self.definition.evaluate(point, &self.regions)
    }
}
