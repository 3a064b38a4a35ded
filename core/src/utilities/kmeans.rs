use rand::Rng;

use crate::utilities::cluster_group::ClusterGroup;
use crate::utilities::error::Result;
use crate::utilities::point_set::PointSet;
use crate::utilities::structs::{ClusterOptions, KMeansResult};

pub fn kmeans<R: Rng + ?Sized>(
    points: &PointSet,
    options: &ClusterOptions,
    rng: &mut R,
) -> Result<KMeansResult> {
    let mut group = ClusterGroup::with_options(points, options, rng)?;
    let summary = group.run(options.max_steps);
    Ok(KMeansResult {
        clusters: group.reports(),
        labels: group.labels(),
        steps: summary.steps,
        converged: summary.converged,
    })
}
