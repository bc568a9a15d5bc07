//! `metadata` command

use gauss_core::metadata::metadata;
use gauss_core::types::SignedFixed;
use tracing::info;

use crate::config::CliConfig;
use crate::output::emit;
use crate::Result;

fn decimal(raw: u128) -> SignedFixed {
    SignedFixed::positive(raw)
}

/// Print build parameters and coefficient table fingerprints
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Reporting kernel metadata");
    let meta = metadata();
    emit(config.format, &meta, || {
        let mut lines = vec![
            format!("{} {}", meta.name, meta.version),
            format!("precision:    {} (scale {})", meta.precision_class, meta.scale),
            format!("max |z|:      {}", decimal(meta.max_z)),
            format!("eps:          {}", decimal(meta.eps)),
            format!("central:      [{}, {}]", decimal(meta.p_low), decimal(meta.p_high)),
            format!("newton steps: {}", meta.newton_steps),
            format!("min density:  {}", decimal(meta.min_density)),
        ];
        for table in &meta.tables {
            lines.push(format!(
                "table {:<12} {}/{}  {}",
                table.set.name(),
                table.numerator_degree,
                table.denominator_degree,
                table.checksum
            ));
        }
        lines.join("\n")
    })
}
