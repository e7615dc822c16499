//! Grouping of benchmark records into report categories.
//!
//! Classification is driven by an ordered rule table: each rule names a
//! category and a set of substrings, and a record belongs to the first rule
//! with a substring contained in its name. Records matching no rule fall into
//! [`Category::Other`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::MeasurementRecord;

/// Report category, in report order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Core,
    Network,
    Config,
    Memory,
    Other,
}

impl Category {
    /// All categories in the order they appear in a report.
    pub const ALL: [Category; 5] = [
        Category::Core,
        Category::Network,
        Category::Config,
        Category::Memory,
        Category::Other,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Core => "Core",
            Category::Network => "Network",
            Category::Config => "Config",
            Category::Memory => "Memory",
            Category::Other => "Other",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the classification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: Category,
    pub patterns: Vec<String>,
}

impl CategoryRule {
    /// Creates a rule assigning names containing any of `patterns` to `category`.
    pub fn new<I, S>(category: Category, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `name` contains one of the rule's patterns.
    ///
    /// Matching is case-sensitive.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| name.contains(p.as_str()))
    }
}

/// Ordered rule table mapping benchmark names to categories.
///
/// # Example
///
/// ```
/// use benchreport::{Category, Classifier};
///
/// let classifier = Classifier::default();
/// assert_eq!(classifier.category_of("BM_PlayerRegistry_Insert"), Category::Core);
/// assert_eq!(classifier.category_of("BM_ProtobufEncode"), Category::Network);
/// assert_eq!(classifier.category_of("BM_Startup"), Category::Other);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    rules: Vec<CategoryRule>,
}

impl Classifier {
    /// Creates a classifier from an ordered rule table.
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Returns the rule table.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Returns the category of the first rule matching `name`.
    pub fn category_of(&self, name: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.matches(name))
            .map(|rule| rule.category)
            .unwrap_or(Category::Other)
    }

    /// Partitions records by category, keeping input order within each.
    pub fn classify<'a>(&self, records: &'a [MeasurementRecord]) -> Classification<'a> {
        let mut buckets: [Vec<&'a MeasurementRecord>; 5] = Default::default();
        for record in records {
            buckets[self.category_of(&record.name).index()].push(record);
        }
        Classification { buckets }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(vec![
            CategoryRule::new(Category::Core, ["PlayerRegistry"]),
            CategoryRule::new(Category::Network, ["Protobuf", "Batch", "Serialization"]),
            CategoryRule::new(Category::Config, ["Config"]),
            CategoryRule::new(Category::Memory, ["Memory"]),
        ])
    }
}

/// Records grouped by category.
#[derive(Debug, Clone, Default)]
pub struct Classification<'a> {
    buckets: [Vec<&'a MeasurementRecord>; 5],
}

impl<'a> Classification<'a> {
    /// Returns the records assigned to `category`, in input order.
    pub fn get(&self, category: Category) -> &[&'a MeasurementRecord] {
        &self.buckets[category.index()]
    }

    /// Iterates over all categories in report order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[&'a MeasurementRecord])> + '_ {
        Category::ALL
            .iter()
            .map(move |&category| (category, self.get(category)))
    }

    /// Returns the total number of classified records.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns true if no records were classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions records with the default rule table.
pub fn classify(records: &[MeasurementRecord]) -> Classification<'_> {
    Classifier::default().classify(records)
}
