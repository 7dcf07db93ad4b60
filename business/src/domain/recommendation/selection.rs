use std::collections::HashSet;

use rand::Rng;
use rand::seq::index;

use crate::domain::shared::value_objects::ProductId;

/// Picks up to `max` distinct products from `catalog` that are not in `excluded`.
///
/// Duplicate catalog entries count once. Sampling is uniform and without
/// replacement, so the returned order carries no meaning.
pub fn select_recommendations<R>(
    catalog: &[ProductId],
    excluded: &HashSet<ProductId>,
    max: usize,
    rng: &mut R,
) -> Vec<ProductId>
where
    R: Rng + ?Sized,
{
    let mut seen: HashSet<&ProductId> = HashSet::with_capacity(catalog.len());
    let candidates: Vec<&ProductId> = catalog
        .iter()
        .filter(|id| !excluded.contains(*id) && seen.insert(*id))
        .collect();

    let amount = max.min(candidates.len());
    if amount == 0 {
        return Vec::new();
    }

    index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i].clone())
        .collect()
}
