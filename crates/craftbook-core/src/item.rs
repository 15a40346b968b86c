//! Craft item record and builder.
//!
//! A [`CraftItem`] is immutable once it enters a catalog. Items are either
//! built in code through [`CraftItemBuilder`] or deserialized and then passed
//! through [`CraftItem::normalized`] and [`CraftItem::validate`] at ingestion.

use serde::{Deserialize, Serialize};

use crate::error::{CraftError, Result};
use crate::types::{Difficulty, TimeEstimate};

/// One craft project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftItem {
    /// Unique, stable identifier (e.g., "origami_crane").
    pub id: String,

    /// Display name.
    pub name: String,

    /// One-line summary of the project.
    #[serde(default)]
    pub description: String,

    /// Open-ended category (e.g., "origami", "jewelry").
    pub category: String,

    /// Difficulty level.
    pub difficulty: Difficulty,

    /// Required materials, normalized and de-duplicated.
    pub materials: Vec<String>,

    /// Time needed to complete the project.
    pub time_estimate: TimeEstimate,

    /// Ordered steps.
    #[serde(default)]
    pub instructions: Vec<String>,

    /// Free-text tips, in authoring order.
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Normalize a material name for comparison: trimmed, lowercased, with
/// internal whitespace collapsed to single spaces.
pub fn normalize_material(material: &str) -> String {
    material
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_materials<I, S>(materials: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for material in materials {
        let normalized = normalize_material(material.as_ref());
        if !normalized.is_empty() && !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    out
}

impl CraftItem {
    /// Create a new CraftItemBuilder.
    pub fn builder() -> CraftItemBuilder {
        CraftItemBuilder::new()
    }

    /// Normalize free-form fields the way ingestion expects.
    pub fn normalized(mut self) -> Self {
        self.id = self.id.trim().to_string();
        self.category = self.category.trim().to_string();
        self.materials = normalize_materials(&self.materials);
        self.time_estimate =
            TimeEstimate::from_bounds(self.time_estimate.min(), self.time_estimate.max());
        self
    }

    /// Validate the item.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(CraftError::invalid_catalog(message));

        if self.id.trim().is_empty() {
            return invalid("craft id cannot be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return invalid(format!("craft '{}' has an empty name", self.id));
        }
        if self.category.trim().is_empty() {
            return invalid(format!("craft '{}' has an empty category", self.id));
        }
        if self.materials.is_empty() {
            return invalid(format!("craft '{}' lists no materials", self.id));
        }
        if !self.time_estimate.is_valid() {
            return invalid(format!(
                "craft '{}' has time range {}-{} with minimum above maximum",
                self.id,
                self.time_estimate.min(),
                self.time_estimate.max()
            ));
        }

        Ok(())
    }

    /// Returns true if this item's category equals `category`, ignoring case.
    /// The query is not trimmed.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Returns true if every required material appears in `available`.
    ///
    /// `available` must already be normalized.
    pub fn can_make_with(&self, available: &[String]) -> bool {
        self.materials.iter().all(|m| available.contains(m))
    }
}

/// Builder for creating CraftItems with a fluent API.
#[derive(Debug, Default)]
pub struct CraftItemBuilder {
    id: Option<String>,
    name: Option<String>,
    description: String,
    category: Option<String>,
    difficulty: Option<Difficulty>,
    materials: Vec<String>,
    time_estimate: Option<Result<TimeEstimate>>,
    instructions: Vec<String>,
    tips: Vec<String>,
}

impl CraftItemBuilder {
    /// Create a new CraftItemBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the difficulty.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Add a required material.
    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.materials.push(material.into());
        self
    }

    /// Add several required materials.
    pub fn materials<I, S>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.materials.extend(materials.into_iter().map(Into::into));
        self
    }

    /// Set a fixed time estimate in minutes.
    pub fn minutes(mut self, minutes: u32) -> Self {
        self.time_estimate = Some(Ok(TimeEstimate::fixed(minutes)));
        self
    }

    /// Set a ranged time estimate in minutes. An inverted range fails in
    /// [`Self::build`].
    pub fn minutes_range(mut self, min: u32, max: u32) -> Self {
        self.time_estimate = Some(TimeEstimate::range(min, max));
        self
    }

    /// Append an instruction step.
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Append several instruction steps.
    pub fn steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions.extend(steps.into_iter().map(Into::into));
        self
    }

    /// Append a tip.
    pub fn tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }

    /// Append several tips.
    pub fn tips<I, S>(mut self, tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tips.extend(tips.into_iter().map(Into::into));
        self
    }

    /// Build the CraftItem.
    pub fn build(self) -> Result<CraftItem> {
        let id = self
            .id
            .ok_or_else(|| CraftError::invalid_catalog("craft id is required"))?;
        let missing = |field: &str| {
            CraftError::invalid_catalog(format!("craft '{}' is missing {}", id, field))
        };

        let time_estimate = self
            .time_estimate
            .ok_or_else(|| missing("a time estimate"))?
            .map_err(|e| CraftError::invalid_catalog(format!("craft '{}': {}", id, e)))?;

        let item = CraftItem {
            name: self.name.ok_or_else(|| missing("a name"))?,
            description: self.description,
            category: self.category.ok_or_else(|| missing("a category"))?,
            difficulty: self.difficulty.ok_or_else(|| missing("a difficulty"))?,
            materials: self.materials,
            time_estimate,
            instructions: self.instructions,
            tips: self.tips,
            id: id.clone(),
        }
        .normalized();

        item.validate()?;
        Ok(item)
    }
}
