//! K-means on a small random dataset in [-1, 1]^3, with both metrics.
//!
//! Run with `RUST_LOG=trace cargo run --example clustering` to see per-iteration logs.

use lloyd::{Kmeans, Metric};
use rand::prelude::*;

fn main() -> lloyd::Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(2024);
    let data: Vec<Vec<f32>> = (0..12)
        .map(|_| (0..3).map(|_| rng.random_range(-1.0f32..=1.0)).collect())
        .collect();

    for metric in [Metric::Manhattan, Metric::Euclidean] {
        let fit = Kmeans::new(3)
            .with_metric(metric)
            .with_max_iter(10)
            .with_seed(42)
            .fit(&data)?;

        println!("=== K-means (k=3, {:?}) ===", metric);
        for (i, label) in fit.labels.iter().enumerate() {
            let p = &data[i];
            println!(
                "  point {:2} ({:5.2}, {:5.2}, {:5.2}) => cluster {}",
                i, p[0], p[1], p[2], label
            );
        }
        for (c, centroid) in fit.centroids.iter().enumerate() {
            println!("  centroid {} = {:?}", c, centroid);
        }
        println!();
    }

    Ok(())
}
