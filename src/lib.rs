//! Fixed-budget k-means.
//!
//! `lloyd` clusters dense `f32` vectors into `k` groups by alternating nearest-centroid
//! assignment and centroid recomputation for a fixed number of iterations.
//!
//! The public API lives under [`cluster`]:
//! - [`Kmeans`]: random uniform seeding in `[-1, 1]^d`, then Lloyd iterations
//! - [`Metric`]: the two supported (mean-normalized) distances

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Clustering, Kmeans, KmeansFit, Metric};
pub use error::{Error, Result};
