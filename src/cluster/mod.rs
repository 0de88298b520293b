//! Clustering algorithms for grouping similar vectors.
//!
//! ## K-means
//!
//! Assign each point to the nearest centroid, then move every centroid to the mean of
//! its points. Repeat for a fixed number of iterations.
//!
//! **Objective** (for [`Metric::Euclidean`]): minimize the within-cluster mean squared
//! difference:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} (1/d) ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - You know k in advance
//! - Inputs live roughly in `[-1, 1]^d`, where centroids are initialized
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{Clustering, Kmeans, Metric};
//!
//! let data = vec![
//!     vec![0.9, 0.9],
//!     vec![0.8, 0.9],
//!     vec![-0.9, -0.8],
//!     vec![-0.9, -0.9],
//! ];
//!
//! let model = Kmeans::new(2)
//!     .with_metric(Metric::Manhattan)
//!     .with_max_iter(10)
//!     .with_seed(42);
//! let labels = model.fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), data.len());
//! assert!(labels.iter().all(|&l| l < 2));
//! ```

mod kmeans;
mod metric;
mod traits;

pub use kmeans::{Kmeans, KmeansFit};
pub use metric::Metric;
pub use traits::Clustering;
