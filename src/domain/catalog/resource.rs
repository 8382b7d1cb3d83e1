//! Resource records and the catalog document that carries them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

use crate::domain::foundation::ValidationError;

/// Price tier tag that marks a resource as free.
pub const FREE_TIER: &str = "free";

/// Experience requirement of a resource.
///
/// Catalogs write either a single tag (`"beginner"`) or an ordered ladder
/// (`["advanced", "intermediate"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Experience {
    Level(String),
    Ladder(Vec<String>),
}

impl Experience {
    /// The tier a rule can require.
    ///
    /// For a ladder only the first entry counts; later entries are not
    /// matchable. An empty tag is no requirement at all.
    pub fn primary(&self) -> Option<&str> {
        let tier = match self {
            Experience::Level(level) => Some(level.as_str()),
            Experience::Ladder(levels) => levels.first().map(String::as_str),
        };
        tier.filter(|tier| !tier.is_empty())
    }
}

/// Optional requirement bag attached to a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Experience>,

    /// Keys the engine does not interpret, kept so a saved catalog
    /// round-trips.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Reads an explicit `null` as the field's default, same as an absent key.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One promotable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub requirements: Requirements,
    #[serde(default, deserialize_with = "null_to_default")]
    pub tags: Vec<String>,
}

impl Resource {
    /// Creates a resource with the three axis tags set and everything else empty.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            url: String::new(),
            price: Some(price.into()),
            format: Some(format.into()),
            category: Some(category.into()),
            requirements: Requirements::default(),
            tags: Vec::new(),
        }
    }

    /// Sets display name and url.
    pub fn with_link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.name = name.into();
        self.url = url.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the experience requirement.
    pub fn with_experience(mut self, experience: Experience) -> Self {
        self.requirements.experience = Some(experience);
        self
    }

    /// True when the price tier is the free tier.
    pub fn is_free(&self) -> bool {
        self.price.as_deref() == Some(FREE_TIER)
    }

    /// Primary experience tier, if the resource declares one.
    pub fn experience(&self) -> Option<&str> {
        self.requirements.experience.as_ref().and_then(Experience::primary)
    }
}

/// The resource store document: `{ owner, resources, links }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub resources: Vec<Resource>,
    /// Opaque link entries handed back to rendering untouched.
    #[serde(default, deserialize_with = "null_to_default")]
    pub links: Vec<Value>,
}

impl ResourceCatalog {
    /// Creates a catalog with no owner and no links.
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            owner: None,
            resources,
            links: Vec::new(),
        }
    }

    /// Catalog written on first start when no resource file exists yet.
    pub fn sample() -> Self {
        let starter = Resource {
            id: "starter".to_string(),
            name: "Getting Started Guide".to_string(),
            description: "Free guide to get you started".to_string(),
            url: "https://example.com/guide".to_string(),
            price: Some(FREE_TIER.to_string()),
            format: Some("checklist".to_string()),
            category: Some("learning".to_string()),
            requirements: Requirements::default(),
            tags: vec!["free".to_string(), "starter".to_string()],
        };

        Self {
            owner: Some("demo".to_string()),
            resources: vec![starter],
            links: Vec::new(),
        }
    }

    /// Checks that every resource has a non-empty, unique id.
    ///
    /// An empty resource list is valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for (index, resource) in self.resources.iter().enumerate() {
            let field = format!("resources[{}].id", index);
            if resource.id.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
            if !seen.insert(resource.id.as_str()) {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("duplicate id '{}'", resource.id),
                ));
            }
        }
        Ok(())
    }
}
