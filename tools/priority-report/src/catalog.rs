use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use transit_priority::{builtin, Segment, SegmentCatalog};

/// Parse a JSON array of segments and validate it into a catalog
pub fn parse_catalog(reader: impl Read) -> Result<SegmentCatalog> {
    let segments: Vec<Segment> =
        serde_json::from_reader(reader).context("Failed to parse segments")?;

    log::debug!("Parsed {} segments", segments.len());

    SegmentCatalog::from_segments(segments).context("Segment catalog failed validation")
}

pub fn read_catalog(path: &Path) -> Result<SegmentCatalog> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    parse_catalog(BufReader::new(file)).with_context(|| format!("Bad catalog {}", path.display()))
}

/// The supplied catalog, or the built-in bus spine
pub fn load_catalog(path: Option<&Path>) -> Result<SegmentCatalog> {
    match path {
        Some(path) => read_catalog(path),
        None => {
            log::debug!("Using built-in bus spine");
            builtin::bus_spine_catalog().context("Built-in catalog failed validation")
        }
    }
}
