use std::io::Write;

use serde::Serialize;

use crate::application::use_cases::catalog_loader::CatalogLoad;
use crate::application::use_cases::placement::PlacementSink;
use crate::domain::catalog::StarPlacement;
use crate::domain::error::Result;

/// Writes one JSON object per placed star
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PlacementSink for JsonLinesSink<W> {
    fn place(&mut self, placement: &StarPlacement) -> Result<()> {
        serde_json::to_writer(&mut self.writer, placement)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects placements in memory
#[derive(Debug, Default)]
pub struct VecSink {
    pub placements: Vec<StarPlacement>,
}

impl PlacementSink for VecSink {
    fn place(&mut self, placement: &StarPlacement) -> Result<()> {
        self.placements.push(placement.clone());
        Ok(())
    }
}

/// Summary printed when no output file is requested
#[derive(Debug, Serialize)]
pub struct LoadSummary {
    pub source: String,
    pub coordinate_systems: String,
    pub data_rows: usize,
    pub records: usize,
    pub placed: usize,
    pub unplaceable: usize,
    pub skipped_by_cap: usize,
    pub warnings: Vec<String>,
    pub processing_time_ms: u64,
}

impl LoadSummary {
    pub fn new(source: String, load: &CatalogLoad) -> Self {
        Self {
            source,
            coordinate_systems: load
                .support
                .map_or_else(|| "none".to_string(), |support| support.describe()),
            data_rows: load.data_rows,
            records: load.records.len(),
            placed: load.placed_count(),
            unplaceable: load.unplaceable_count(),
            skipped_by_cap: load.skipped_by_cap,
            warnings: load.warning_messages(),
            processing_time_ms: load.processing_time_ms,
        }
    }
}
