//! Resource Analyzer - Partitions a resource list along the three survey axes.

use std::collections::HashMap;
use std::fmt;

use super::Resource;

/// Key under which resources missing an axis value are grouped.
pub const UNDEFINED_AXIS_KEY: &str = "undefined";

/// One of the resource attributes that drive question generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Category,
    Price,
    Format,
}

impl Axis {
    /// Reads this axis off a resource, if present.
    pub fn value_of<'r>(&self, resource: &'r Resource) -> Option<&'r str> {
        match self {
            Axis::Category => resource.category.as_deref(),
            Axis::Price => resource.price.as_deref(),
            Axis::Format => resource.format.as_deref(),
        }
    }

    /// Grouping key for a resource: its value, or [`UNDEFINED_AXIS_KEY`].
    pub fn key_of<'r>(&self, resource: &'r Resource) -> &'r str {
        self.value_of(resource).unwrap_or(UNDEFINED_AXIS_KEY)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::Category => "category",
            Axis::Price => "price",
            Axis::Format => "format",
        };
        write!(f, "{}", s)
    }
}

/// Distinct values of one axis plus the resources sharing each value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisPartition<'a> {
    axis: Axis,
    values: Vec<String>,
    groups: HashMap<String, Vec<&'a Resource>>,
}

impl<'a> AxisPartition<'a> {
    fn build(axis: Axis, resources: &'a [Resource]) -> Self {
        let mut values = Vec::new();
        let mut groups: HashMap<String, Vec<&'a Resource>> = HashMap::new();

        for resource in resources {
            let key = axis.key_of(resource);
            match groups.get_mut(key) {
                Some(group) => group.push(resource),
                None => {
                    values.push(key.to_string());
                    groups.insert(key.to_string(), vec![resource]);
                }
            }
        }

        Self {
            axis,
            values,
            groups,
        }
    }

    /// The axis this partition was built for.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Distinct values in order of first appearance.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Resources whose axis value equals `value`, in original order.
    pub fn group(&self, value: &str) -> &[&'a Resource] {
        self.groups.get(value).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Checks whether `value` was observed.
    pub fn contains(&self, value: &str) -> bool {
        self.groups.contains_key(value)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no resources were analyzed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of analyzing a resource list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceAnalysis<'a> {
    pub categories: AxisPartition<'a>,
    pub prices: AxisPartition<'a>,
    pub formats: AxisPartition<'a>,
}

impl<'a> ResourceAnalysis<'a> {
    /// Returns the partition for the given axis.
    pub fn partition(&self, axis: Axis) -> &AxisPartition<'a> {
        match axis {
            Axis::Category => &self.categories,
            Axis::Price => &self.prices,
            Axis::Format => &self.formats,
        }
    }
}

/// Stateless resource analysis.
pub struct ResourceAnalyzer;

impl ResourceAnalyzer {
    /// Partitions `resources` along category, price and format.
    ///
    /// # Edge Cases
    /// - Empty list: every partition is empty
    /// - Missing axis value: grouped under [`UNDEFINED_AXIS_KEY`]
    pub fn analyze(resources: &[Resource]) -> ResourceAnalysis<'_> {
        ResourceAnalysis {
            categories: AxisPartition::build(Axis::Category, resources),
            prices: AxisPartition::build(Axis::Price, resources),
            formats: AxisPartition::build(Axis::Format, resources),
        }
    }
}
