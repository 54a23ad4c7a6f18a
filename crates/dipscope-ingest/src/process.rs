//! Turning a raw batch into combined records

use crate::date::resolve_year;
use dipscope_domain::document::keys;
use dipscope_domain::{merge_records, CombinedRecord, Document, DocumentBatch, MergeStats, RawDocument};
use tracing::info;

/// Primary document with its year resolved from `datum`
pub fn primary_document(raw: &RawDocument) -> Document {
    let year = resolve_year(raw.text(keys::DATE).as_deref());
    Document::primary(raw, year)
}

/// Related document with its year resolved from `aktualisiert`
pub fn related_document(raw: &RawDocument) -> Document {
    let year = resolve_year(raw.text(keys::UPDATED).as_deref());
    Document::related(raw, year)
}

/// Process both streams and merge them
pub fn combine_batch(batch: &DocumentBatch) -> (Vec<CombinedRecord>, MergeStats) {
    let primary: Vec<Document> = batch.primary.iter().map(primary_document).collect();
    let related: Vec<Document> = batch.related.iter().map(related_document).collect();

    let (records, stats) = merge_records(primary, related);
    info!(
        "Combined {} records: {} primary ({} merged), {} orphaned processes",
        records.len(),
        stats.primary,
        stats.merged,
        stats.orphans
    );
    (records, stats)
}
