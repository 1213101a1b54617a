// ============================================================
// PLACEMENT HAND-OFF
// ============================================================
// Deliver placed stars to a renderer or exporter

use crate::application::use_cases::catalog_loader::CatalogLoad;
use crate::domain::catalog::StarPlacement;
use crate::domain::error::Result;
use tracing::info;

/// Downstream consumer of placed stars (scene instancing, export, ...)
pub trait PlacementSink {
    fn place(&mut self, placement: &StarPlacement) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Hand every placeable record to `sink`; unplaceable ones are skipped.
///
/// Returns the number of stars handed over.
pub fn hand_off(load: &CatalogLoad, sink: &mut dyn PlacementSink) -> Result<usize> {
    let mut count = 0;
    for placement in load.placed() {
        sink.place(placement)?;
        count += 1;
    }
    sink.finish()?;
    info!(count, "Star placements handed off");
    Ok(count)
}
