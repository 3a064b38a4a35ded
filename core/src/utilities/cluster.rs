use std::fmt;

use crate::utilities::error::{ClusterError, Result};
use crate::utilities::point_set::PointSet;
use crate::utilities::structs::{ClusterReport, Point, Tolerance};
use crate::utilities::utilities::{all_close, euclidean, first_non_finite, mean};
use crate::utilities::validation::validate_shape;

/// A subset of a [`PointSet`], stored as indices, plus a centroid.
///
/// The point set is borrowed, never owned or mutated. Membership is kept in
/// insertion order and holds each index at most once.
#[derive(Clone, Debug)]
pub struct Cluster<'a> {
    points: &'a PointSet,
    centroid: Point,
    members: Vec<usize>,
    tolerance: Tolerance,
}

impl<'a> Cluster<'a> {
    pub fn new(points: &'a PointSet, centroid: &[f64]) -> Result<Self> {
        validate_shape(centroid, points.dimension())?;
        if let Some(col) = first_non_finite(centroid) {
            return Err(ClusterError::Construction(format!(
                "centroid component {col} is not a finite number"
            )));
        }
        Ok(Self {
            points,
            centroid: centroid.to_vec(),
            members: Vec::new(),
            tolerance: Tolerance::default(),
        })
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[inline]
    pub fn centroid(&self) -> &[f64] {
        &self.centroid
    }

    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Adding an index that is already a member is a no-op.
    pub fn add_member(&mut self, index: usize) -> Result<()> {
        if index >= self.points.size() {
            return Err(ClusterError::Index {
                index,
                size: self.points.size(),
            });
        }
        if !self.members.contains(&index) {
            self.members.push(index);
        }
        Ok(())
    }

    // Partition visits each index once after `clear`, so the duplicate scan
    // in `add_member` is skipped there.
    #[inline]
    pub(crate) fn assign(&mut self, index: usize) {
        debug_assert!(index < self.points.size());
        debug_assert!(!self.members.contains(&index));
        self.members.push(index);
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn contents(&self) -> Vec<Point> {
        self.members
            .iter()
            .filter_map(|&i| self.points.point(i).map(<[f64]>::to_vec))
            .collect()
    }

    pub fn distance_to(&self, point: &[f64]) -> Result<f64> {
        validate_shape(point, self.centroid.len())?;
        Ok(euclidean(&self.centroid, point))
    }

    /// Moves the centroid to the mean of the members and reports whether it
    /// stayed put within tolerance. An empty cluster keeps its centroid and
    /// reports `true`.
    pub fn update_centroid(&mut self) -> bool {
        if self.members.is_empty() {
            return true;
        }
        let refs: Vec<&[f64]> = self
            .members
            .iter()
            .filter_map(|&i| self.points.point(i))
            .collect();
        let next = mean(&refs);
        let unchanged = all_close(&next, &self.centroid, self.tolerance);
        self.centroid = next;
        unchanged
    }

    pub fn report(&self) -> ClusterReport {
        ClusterReport {
            centroid: self.centroid.clone(),
            members: self.members.clone(),
        }
    }
}

impl fmt::Display for Cluster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.centroid)
    }
}
