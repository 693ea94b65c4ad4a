// Bin export for backups and migration between instances

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::services::BinService;
use crate::types::internal::Bin;

/// Export every bin, newest first, as pretty-printed JSON
///
/// # Arguments
/// * `bin_service` - Source of the bins
/// * `output` - Destination file; stdout when `None`
///
/// # Returns
/// * `Ok(usize)` - Number of bins written
/// * `Err(...)` - Loading or writing failed
pub async fn export_bins(
    bin_service: &BinService,
    output: Option<&Path>,
) -> Result<usize, Box<dyn std::error::Error>> {
    let bins = bin_service.list_bins().await?;

    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_bins(&bins, BufWriter::new(file))?;
            eprintln!("✓ Exported {} bins to {}", bins.len(), path.display());
        }
        None => {
            write_bins(&bins, io::stdout().lock())?;
        }
    }

    Ok(bins.len())
}

/// Serialize bins as a JSON array followed by a newline
pub fn write_bins<W: Write>(bins: &[Bin], mut writer: W) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut writer, bins)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
