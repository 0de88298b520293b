//! K-means with a fixed iteration budget.
//!
//! # Lloyd's Algorithm
//!
//! 1. Draw k centroids uniformly from `[-1, 1]^d`
//! 2. **Assign**: each point goes to its nearest centroid
//! 3. **Update**: each centroid moves to the mean of its assigned points
//! 4. Repeat steps 2-3 exactly `max_iter` times
//!
//! There is no convergence test: the loop always spends its full budget, and the
//! returned labels are the ones computed in the last iteration.
//!
//! # Empty Clusters
//!
//! A cluster that attracts no points keeps its previous centroid, bit for bit. It is
//! never re-seeded or dropped. With `k > n` some clusters therefore stay at their
//! random starting position for the whole run.
//!
//! # Zero Iterations
//!
//! `max_iter = 0` is valid. No assignment pass runs, so the returned label vector is
//! empty and the centroids are the initial random draw.
//!
//! # Ties
//!
//! A point equidistant from several centroids goes to the lowest cluster index.

use super::metric::Metric;
use super::traits::Clustering;
use crate::error::{Error, Result};
use rand::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Number of assignment/update iterations to run.
    max_iter: usize,
    /// Distance used for assignment.
    metric: Metric,
    /// Random seed for centroid initialization.
    seed: Option<u64>,
}

/// Output of [`Kmeans::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    /// Cluster label per input point, in input order. Empty when no iteration ran.
    pub labels: Vec<usize>,
    /// Final centroids, one per cluster index.
    pub centroids: Vec<Vec<f32>>,
    /// Number of iterations performed.
    ///
    /// There is no early stopping, so this always echoes the configured `max_iter`.
    pub iterations: usize,
}

impl Kmeans {
    /// Create a new K-means clusterer with `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            metric: Metric::default(),
            seed: None,
        }
    }

    /// Set the iteration budget.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configured distance metric.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The configured iteration budget.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Cluster `data` and return it unchanged together with the final labels.
    pub fn run<'a>(&self, data: &'a [Vec<f32>]) -> Result<(&'a [Vec<f32>], Vec<usize>)> {
        let fit = self.fit(data)?;
        Ok((data, fit.labels))
    }

    /// Cluster `data`, drawing initial centroids from the configured seed.
    ///
    /// Without a seed the thread-local generator is used.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmeansFit> {
        match self.seed {
            Some(s) => self.fit_with_rng(data, &mut StdRng::seed_from_u64(s)),
            None => self.fit_with_rng(data, &mut rand::rng()),
        }
    }

    /// Cluster `data`, drawing initial centroids from `rng`.
    ///
    /// The configured seed is ignored.
    pub fn fit_with_rng<R: Rng>(&self, data: &[Vec<f32>], rng: &mut R) -> Result<KmeansFit> {
        let d = self.validate(data)?;

        log::debug!(
            "kmeans: n={} d={} k={} metric={:?} max_iter={}",
            data.len(),
            d,
            self.k,
            self.metric,
            self.max_iter
        );

        let mut centroids = initialize(d, self.k, rng);
        let labels = lloyd(data, &mut centroids, self.max_iter, self.metric)?;

        log::debug!("kmeans: finished {} iterations", self.max_iter);

        Ok(KmeansFit {
            labels,
            centroids,
            iterations: self.max_iter,
        })
    }

    /// Check parameters and dataset shape, returning the dimension.
    fn validate(&self, data: &[Vec<f32>]) -> Result<usize> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        let Some(first) = data.first() else {
            return Err(Error::InvalidParameter {
                name: "data",
                message: "must contain at least one vector",
            });
        };

        let d = first.len();
        if d == 0 {
            return Err(Error::InvalidParameter {
                name: "dimension",
                message: "must be at least 1",
            });
        }
        for point in data.iter().skip(1) {
            if point.len() != d {
                return Err(Error::DimensionMismatch {
                    expected: d,
                    found: point.len(),
                });
            }
        }
        Ok(d)
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Draw `k` centroids of dimension `d`, each component uniform in `[-1, 1]`.
///
/// Duplicates are possible and are kept.
pub(crate) fn initialize<R: Rng>(d: usize, k: usize, rng: &mut R) -> Vec<Vec<f32>> {
    (0..k)
        .map(|_| (0..d).map(|_| rng.random_range(-1.0f32..=1.0)).collect())
        .collect()
}

/// Index of the centroid closest to `point`; lowest index wins ties.
pub(crate) fn nearest_centroid(
    point: &[f32],
    centroids: &[Vec<f32>],
    metric: Metric,
) -> Result<usize> {
    if centroids.is_empty() {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }

    let mut best_cluster = 0;
    let mut best_dist = f32::INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let dist = metric.distance(point, centroid)?;
        // Strict comparison keeps the first minimum.
        if dist < best_dist {
            best_dist = dist;
            best_cluster = c;
        }
    }
    Ok(best_cluster)
}

/// Per-dimension mean of `members`, or `None` when there are no members.
pub(crate) fn recompute_centroid(members: &[&[f32]]) -> Option<Vec<f32>> {
    let first = members.first()?;
    let mut sum = vec![0.0f32; first.len()];
    for m in members {
        for (s, x) in sum.iter_mut().zip(m.iter()) {
            *s += x;
        }
    }
    let count = members.len() as f32;
    for s in &mut sum {
        *s /= count;
    }
    Some(sum)
}

/// Run `max_iter` assignment/update passes starting from `centroids`.
///
/// `centroids` is updated in place; the labels of the last pass are returned.
pub(crate) fn lloyd(
    data: &[Vec<f32>],
    centroids: &mut [Vec<f32>],
    max_iter: usize,
    metric: Metric,
) -> Result<Vec<usize>> {
    let k = centroids.len();
    let mut labels = Vec::new();

    for iter in 0..max_iter {
        // Assignment reads the current centroids only.
        let current: &[Vec<f32>] = &*centroids;

        #[cfg(feature = "parallel")]
        let assigned = data
            .par_iter()
            .map(|point| nearest_centroid(point, current, metric))
            .collect::<Result<Vec<usize>>>()?;

        #[cfg(not(feature = "parallel"))]
        let assigned = data
            .iter()
            .map(|point| nearest_centroid(point, current, metric))
            .collect::<Result<Vec<usize>>>()?;

        labels = assigned;

        let mut members: Vec<Vec<&[f32]>> = vec![Vec::new(); k];
        for (point, &c) in data.iter().zip(labels.iter()) {
            members[c].push(point.as_slice());
        }

        let mut empty = 0usize;
        for (centroid, group) in centroids.iter_mut().zip(members.iter()) {
            match recompute_centroid(group) {
                Some(mean) => *centroid = mean,
                None => empty += 1,
            }
        }

        log::trace!("kmeans: iteration {} done, {} empty clusters", iter, empty);
    }

    Ok(labels)
}
