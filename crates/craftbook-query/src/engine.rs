//! Query engine over a catalog store.

use std::sync::Arc;

use craftbook_catalog::{CatalogStore, InMemoryCatalog};
use craftbook_core::{normalize_material, CraftError, CraftItem, Difficulty, Result, TimeEstimate};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::report::{CraftDetails, CraftSummary, TimeLine, TimeReport};

/// Read-only queries over a shared catalog.
///
/// Every operation is a pure function of its arguments and the catalog, so
/// one engine can serve any number of concurrent callers.
#[derive(Clone)]
pub struct QueryEngine {
    catalog: Arc<dyn CatalogStore>,
}

impl QueryEngine {
    /// Create an engine over the given store.
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Create an engine over the built-in sample dataset.
    pub fn sample() -> Result<Self> {
        Ok(Self::new(Arc::new(InMemoryCatalog::sample()?)))
    }

    /// The underlying store.
    pub fn catalog(&self) -> &dyn CatalogStore {
        self.catalog.as_ref()
    }

    /// Look up a craft by exact id.
    pub fn get(&self, id: &str) -> Result<&CraftItem> {
        self.catalog.get(id)
    }

    /// All crafts in catalog order.
    pub fn all(&self) -> &[CraftItem] {
        self.catalog.all()
    }

    /// Summaries of all crafts in catalog order.
    pub fn list_crafts(&self) -> Vec<CraftSummary<'_>> {
        self.all().iter().map(CraftSummary::from).collect()
    }

    /// Full details for one craft.
    pub fn craft_details(&self, id: &str) -> Result<CraftDetails<'_>> {
        self.get(id).map(CraftDetails::from)
    }

    /// Crafts whose category equals `category`, ignoring case.
    ///
    /// Categories are open-ended: an unknown category is an empty result.
    pub fn find_by_category(&self, category: &str) -> Vec<&CraftItem> {
        let matches: Vec<&CraftItem> = self
            .all()
            .iter()
            .filter(|item| item.in_category(category))
            .collect();

        debug!("category '{}' matched {} crafts", category, matches.len());
        matches
    }

    /// Crafts at the given difficulty.
    ///
    /// Fails with `InvalidArgument` unless `difficulty` is one of easy,
    /// medium or hard (ignoring case).
    pub fn find_by_difficulty(&self, difficulty: &str) -> Result<Vec<&CraftItem>> {
        let level: Difficulty = difficulty.parse().map_err(|e| {
            warn!("rejected difficulty '{}'", difficulty);
            e
        })?;

        let matches: Vec<&CraftItem> = self
            .all()
            .iter()
            .filter(|item| item.difficulty == level)
            .collect();

        debug!("difficulty {} matched {} crafts", level, matches.len());
        Ok(matches)
    }

    /// Crafts that can be made entirely from `available` materials.
    ///
    /// An item matches only if every material it requires is listed; a
    /// partial overlap is not a match.
    pub fn find_by_materials<I, S>(&self, available: I) -> Vec<&CraftItem>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let available: Vec<String> = available
            .into_iter()
            .map(|m| normalize_material(m.as_ref()))
            .filter(|m| !m.is_empty())
            .collect();

        let matches: Vec<&CraftItem> = self
            .all()
            .iter()
            .filter(|item| item.can_make_with(&available))
            .collect();

        debug!(
            "{} available materials matched {} crafts",
            available.len(),
            matches.len()
        );
        matches
    }

    /// A uniformly random craft, using the thread-local generator.
    pub fn random_item(&self) -> Result<&CraftItem> {
        self.random_item_with(&mut rand::thread_rng())
    }

    /// A uniformly random craft drawn with `rng`.
    pub fn random_item_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&CraftItem> {
        self.all().choose(rng).ok_or(CraftError::EmptyCatalog)
    }

    /// Full details for a random craft.
    pub fn random_details(&self) -> Result<CraftDetails<'_>> {
        self.random_item().map(CraftDetails::from)
    }

    /// Total time for the requested crafts.
    ///
    /// Duplicated ids count once per occurrence. Fails with `NotFound` on the
    /// first id missing from the catalog, and with `TimeOverflow` if the total
    /// does not fit in a `u32`; an empty request is zero minutes.
    pub fn estimate_time<S: AsRef<str>>(&self, ids: &[S]) -> Result<TimeEstimate> {
        Ok(self.estimate_breakdown(ids)?.total)
    }

    /// Total time plus a per-item breakdown in request order.
    pub fn estimate_breakdown<S: AsRef<str>>(&self, ids: &[S]) -> Result<TimeReport<'_>> {
        let mut lines = Vec::with_capacity(ids.len());
        for id in ids {
            let item = self.get(id.as_ref()).map_err(|e| {
                warn!("time estimate rejected: {}", e);
                e
            })?;
            lines.push(TimeLine {
                id: &item.id,
                name: &item.name,
                time_estimate: item.time_estimate,
            });
        }

        let report = TimeReport::new(lines).map_err(|e| {
            warn!("time estimate rejected: {}", e);
            e
        })?;
        debug!(
            "estimated {} for {} crafts",
            report.total_display,
            report.items.len()
        );
        Ok(report)
    }
}
