use std::fmt;

use rand::Rng;
use rand::seq::index::sample;
use tracing::{debug, trace};

use crate::utilities::cluster::Cluster;
use crate::utilities::error::Result;
use crate::utilities::point_set::PointSet;
use crate::utilities::structs::{ClusterOptions, ClusterReport, RunSummary, Tolerance};
use crate::utilities::utilities::euclidean;
use crate::utilities::validation::{
    validate_k, validate_seed_indices, validate_shape, validate_tolerance,
};

/// `k` clusters over one [`PointSet`], driven by Lloyd's algorithm.
///
/// Clusters that lose every point stay empty with their last centroid; they
/// are never reseeded or split.
#[derive(Clone, Debug)]
pub struct ClusterGroup<'a> {
    points: &'a PointSet,
    clusters: Vec<Cluster<'a>>,
}

impl<'a> ClusterGroup<'a> {
    /// Seeds from `seed_indices` when given, otherwise draws `k` distinct
    /// points through `rng`.
    pub fn new<R: Rng + ?Sized>(
        points: &'a PointSet,
        k: usize,
        seed_indices: Option<&[usize]>,
        rng: &mut R,
    ) -> Result<Self> {
        Self::build(points, k, seed_indices, Tolerance::default(), rng)
    }

    pub fn with_seeds(points: &'a PointSet, seed_indices: &[usize]) -> Result<Self> {
        validate_k(seed_indices.len(), points.size())?;
        validate_seed_indices(seed_indices, seed_indices.len(), points.size())?;
        Self::from_seeds(points, seed_indices, Tolerance::default())
    }

    pub fn with_options<R: Rng + ?Sized>(
        points: &'a PointSet,
        options: &ClusterOptions,
        rng: &mut R,
    ) -> Result<Self> {
        Self::build(
            points,
            options.k,
            options.seed_indices.as_deref(),
            options.tolerance,
            rng,
        )
    }

    fn build<R: Rng + ?Sized>(
        points: &'a PointSet,
        k: usize,
        seed_indices: Option<&[usize]>,
        tolerance: Tolerance,
        rng: &mut R,
    ) -> Result<Self> {
        validate_k(k, points.size())?;
        validate_tolerance(tolerance)?;
        match seed_indices {
            Some(seeds) => {
                validate_seed_indices(seeds, k, points.size())?;
                Self::from_seeds(points, seeds, tolerance)
            }
            None => {
                let seeds = sample(rng, points.size(), k).into_vec();
                debug!(k, seeds = ?seeds, "random centroid seeds");
                Self::from_seeds(points, &seeds, tolerance)
            }
        }
    }

    fn from_seeds(points: &'a PointSet, seeds: &[usize], tolerance: Tolerance) -> Result<Self> {
        let mut clusters = Vec::with_capacity(seeds.len());
        for &i in seeds {
            let centroid = points.get(i)?;
            clusters.push(Cluster::new(points, &centroid)?.with_tolerance(tolerance));
        }
        Ok(Self { points, clusters })
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.clusters.len()
    }

    #[inline]
    pub fn clusters(&self) -> &[Cluster<'a>] {
        &self.clusters
    }

    /// Index of the cluster whose centroid is closest to `point`. Ties go to
    /// the earlier cluster.
    pub fn nearest_cluster(&self, point: &[f64]) -> Result<usize> {
        validate_shape(point, self.points.dimension())?;
        Ok(self.nearest(point))
    }

    fn nearest(&self, point: &[f64]) -> usize {
        let mut idx = 0usize;
        let mut best = f64::INFINITY;
        for (j, c) in self.clusters.iter().enumerate() {
            let d = euclidean(c.centroid(), point);
            if j == 0 || d < best {
                best = d;
                idx = j;
            }
        }
        idx
    }

    fn partition(&mut self) {
        for c in self.clusters.iter_mut() {
            c.clear();
        }
        let points = self.points;
        for (i, p) in points.iter().enumerate() {
            let j = self.nearest(p);
            self.clusters[j].assign(i);
        }
    }

    fn update(&mut self) -> bool {
        let mut converged = true;
        for c in self.clusters.iter_mut() {
            converged &= c.update_centroid();
        }
        converged
    }

    /// One partition + update round. Returns `true` when no centroid moved.
    pub fn step(&mut self) -> bool {
        self.partition();
        self.update()
    }

    pub fn run(&mut self, max_steps: usize) -> RunSummary {
        let mut summary = RunSummary::default();
        while summary.steps < max_steps {
            let converged = self.step();
            summary.steps += 1;
            trace!(step = summary.steps, converged, "k-means round");
            if converged {
                summary.converged = true;
                break;
            }
        }
        debug!(
            k = self.k(),
            steps = summary.steps,
            converged = summary.converged,
            empty_clusters = self.clusters.iter().filter(|c| c.is_empty()).count(),
            "k-means run finished"
        );
        summary
    }

    /// Cluster index for every point, read from the current memberships.
    /// Points not yet partitioned map to their nearest centroid.
    pub fn labels(&self) -> Vec<usize> {
        let mut labels = vec![usize::MAX; self.points.size()];
        for (j, c) in self.clusters.iter().enumerate() {
            for &i in c.members() {
                labels[i] = j;
            }
        }
        for (i, l) in labels.iter_mut().enumerate() {
            if *l == usize::MAX {
                if let Some(p) = self.points.point(i) {
                    *l = self.nearest(p);
                }
            }
        }
        labels
    }

    pub fn reports(&self) -> Vec<ClusterReport> {
        self.clusters.iter().map(Cluster::report).collect()
    }
}

impl fmt::Display for ClusterGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (j, c) in self.clusters.iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}
