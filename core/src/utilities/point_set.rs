use std::fmt;

use crate::utilities::error::{ClusterError, Result};
use crate::utilities::structs::Point;
use crate::utilities::utilities::first_non_finite;
use crate::utilities::validation::{validate_contents, validate_dimension, validate_shape};

/// Append-only collection of fixed-length vectors.
///
/// Every accessor hands out either an owned copy or a shared borrow, so the
/// stored points can only change through [`PointSet::append`].
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    dimension: usize,
    points: Vec<Point>,
}

impl PointSet {
    pub fn new(dimension: usize) -> Result<Self> {
        validate_dimension(dimension)?;
        Ok(Self {
            dimension,
            points: Vec::new(),
        })
    }

    /// Copies `contents` in. An explicitly supplied collection must be
    /// non-empty; use [`PointSet::new`] for an empty set.
    pub fn with_contents<P: AsRef<[f64]>>(dimension: usize, contents: &[P]) -> Result<Self> {
        validate_dimension(dimension)?;
        validate_contents(contents, dimension)?;
        Ok(Self {
            dimension,
            points: contents.iter().map(|p| p.as_ref().to_vec()).collect(),
        })
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, i: usize) -> Result<Point> {
        self.point(i).map(<[f64]>::to_vec).ok_or(ClusterError::Index {
            index: i,
            size: self.size(),
        })
    }

    /// Borrowed view of point `i`. This aliases the stored data; take
    /// [`PointSet::get`] for an independent copy.
    #[inline]
    pub fn point(&self, i: usize) -> Option<&[f64]> {
        self.points.get(i).map(Vec::as_slice)
    }

    pub fn append(&mut self, p: &[f64]) -> Result<()> {
        validate_shape(p, self.dimension)?;
        if let Some(col) = first_non_finite(p) {
            return Err(ClusterError::Argument(format!(
                "component {col} is not a finite number"
            )));
        }
        self.points.push(p.to_vec());
        Ok(())
    }

    pub fn all(&self) -> Vec<Point> {
        self.points.clone()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.points.iter().map(Vec::as_slice)
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.points)
    }
}
