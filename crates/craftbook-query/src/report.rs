//! Structured results returned to tool hosts.

use craftbook_core::{CraftItem, Difficulty, Result, TimeEstimate};
use serde::Serialize;

/// Listing view of a craft, without instructions or tips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CraftSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub difficulty: Difficulty,
    pub time_estimate: TimeEstimate,
    /// Human-readable form of `time_estimate`.
    pub time_required: String,
}

impl<'a> From<&'a CraftItem> for CraftSummary<'a> {
    fn from(item: &'a CraftItem) -> Self {
        Self {
            id: &item.id,
            name: &item.name,
            description: &item.description,
            category: &item.category,
            difficulty: item.difficulty,
            time_estimate: item.time_estimate,
            time_required: item.time_estimate.to_string(),
        }
    }
}

/// Full view of a craft, including materials, instructions and tips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CraftDetails<'a> {
    #[serde(flatten)]
    pub item: &'a CraftItem,
    pub time_required: String,
}

impl<'a> From<&'a CraftItem> for CraftDetails<'a> {
    fn from(item: &'a CraftItem) -> Self {
        Self {
            item,
            time_required: item.time_estimate.to_string(),
        }
    }
}

/// One requested craft's contribution to a time estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeLine<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub time_estimate: TimeEstimate,
}

/// Aggregate time estimate with a per-item breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeReport<'a> {
    /// Contributions in request order, duplicates included.
    pub items: Vec<TimeLine<'a>>,
    pub total: TimeEstimate,
    /// Human-readable form of `total`.
    pub total_display: String,
    /// Upper bound of `total` in hours.
    pub total_hours: f64,
}

impl<'a> TimeReport<'a> {
    /// Fails with `TimeOverflow` if the total does not fit.
    pub(crate) fn new(items: Vec<TimeLine<'a>>) -> Result<Self> {
        let total = TimeEstimate::total(items.iter().map(|line| line.time_estimate))?;
        Ok(Self {
            items,
            total,
            total_display: total.to_string(),
            total_hours: total.max_hours(),
        })
    }
}
