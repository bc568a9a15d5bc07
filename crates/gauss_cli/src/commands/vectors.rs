//! `vectors` command

use std::path::Path;

use gauss_core::vectors::{generate, VectorConfig};
use tracing::info;

use crate::Result;

/// Generate conformance vectors as JSON, to `output` or stdout
pub fn run(vector_config: &VectorConfig, output: Option<&Path>) -> Result<()> {
    info!(
        "Generating vectors: {} z points, {} central points, {} tail decades",
        vector_config.z_points, vector_config.central_points, vector_config.tail_decades
    );
    let vectors = generate(vector_config)?;
    let json = serde_json::to_string_pretty(&vectors)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(
                "Wrote {} forward and {} quantile vectors to {}",
                vectors.forward.len(),
                vectors.quantiles.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
