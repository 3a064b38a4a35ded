pub mod cluster;
pub use cluster::Cluster;

pub mod cluster_group;
pub use cluster_group::ClusterGroup;

pub mod error;
pub use error::{ClusterError, Result};

pub mod kmeans;
pub use kmeans::kmeans;

pub mod point_set;
pub use point_set::PointSet;

pub mod structs;
pub use structs::{ClusterOptions, ClusterReport, KMeansResult, Point, RunSummary, Tolerance};

pub mod utilities;
pub use utilities::{all_close, euclidean, mean};

pub mod validation;
