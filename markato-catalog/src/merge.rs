use markato_shared::{ImportSummary, NewProduct, ProductItem};

use crate::product::{dedup_key, generate_id};

/// Result of reconciling a batch of candidates against the master catalog
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The full catalog after the merge, in stable order (existing entries
    /// first, additions appended in input order)
    pub master: Vec<ProductItem>,
    pub summary: ImportSummary,
}

/// Deduplicating upsert-merge of `candidates` into `current`.
///
/// Entries match on the normalized (name, brand) key. A matching entry is
/// overwritten only when the candidate's price is strictly higher or its
/// `last_updated` is strictly newer; its identifier is always preserved and
/// its `last_updated` becomes `now`. Anything else is skipped unchanged.
/// Unmatched candidates get a fresh identifier and are appended.
///
/// Re-running the same batch against its own output only produces skips,
/// so imports are idempotent.
pub fn reconcile(current: &[ProductItem], candidates: Vec<NewProduct>, now: &str) -> MergeOutcome {
    let mut master = current.to_vec();
    let mut summary = ImportSummary {
        total: candidates.len(),
        ..ImportSummary::default()
    };

    for candidate in candidates {
        let key = dedup_key(&candidate.name, &candidate.brand);
        match master.iter_mut().find(|p| dedup_key(&p.name, &p.brand) == key) {
            Some(existing) => {
                let price_raised = candidate.original_price > existing.original_price;
                let newer = candidate.last_updated.as_str() > existing.last_updated.as_str();
                if price_raised || newer {
                    existing.name = candidate.name;
                    existing.brand = candidate.brand;
                    existing.original_price = candidate.original_price;
                    existing.currency = candidate.currency;
                    existing.source = candidate.source;
                    existing.last_updated = now.to_string();
                    summary.updated += 1;
                } else {
                    summary.skipped += 1;
                }
            }
            None => {
                master.push(ProductItem {
                    id: generate_id(),
                    name: candidate.name,
                    brand: candidate.brand,
                    original_price: candidate.original_price,
                    currency: candidate.currency,
                    source: candidate.source,
                    last_updated: now.to_string(),
                });
                summary.added += 1;
            }
        }
    }

    MergeOutcome { master, summary }
}
