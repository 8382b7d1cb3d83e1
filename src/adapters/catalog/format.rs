//! Catalog document encoding and fingerprinting.

use sha2::{Digest, Sha256};
use std::path::Path;

use crate::domain::catalog::ResourceCatalog;
use crate::ports::SourceError;

/// Serialization format of a stored catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFormat {
    #[default]
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from a file extension; anything but `.yaml`/`.yml`
    /// is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                CatalogFormat::Yaml
            }
            _ => CatalogFormat::Json,
        }
    }

    /// Parses and validates a catalog document.
    pub fn parse(&self, content: &str) -> Result<ResourceCatalog, SourceError> {
        let catalog: ResourceCatalog = match self {
            CatalogFormat::Json => serde_json::from_str(content)
                .map_err(|e| SourceError::Malformed(e.to_string()))?,
            CatalogFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| SourceError::Malformed(e.to_string()))?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Renders a catalog document.
    pub fn render(&self, catalog: &ResourceCatalog) -> Result<String, SourceError> {
        match self {
            CatalogFormat::Json => serde_json::to_string_pretty(catalog)
                .map_err(|e| SourceError::SerializationFailed(e.to_string())),
            CatalogFormat::Yaml => serde_yaml::to_string(catalog)
                .map_err(|e| SourceError::SerializationFailed(e.to_string())),
        }
    }
}

/// Hex SHA-256 of a stored document.
pub fn content_fingerprint(content: &str) -> String {
    format!("{:x}", Sha256::digest(content.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Experience;

    #[test]
    fn format_from_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("a/resources.json")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("resources.YAML")), CatalogFormat::Yaml);
        assert_eq!(CatalogFormat::from_path(Path::new("resources.yml")), CatalogFormat::Yaml);
        assert_eq!(CatalogFormat::from_path(Path::new("resources")), CatalogFormat::Json);
    }

    #[test]
    fn parse_yaml_catalog() {
        let yaml = r#"
owner: demo
resources:
  - id: trading_tools
    name: Trading Tools
    url: https://example.com/tools
    price: 1k_10k
    format: tools
    category: trading
    requirements:
      experience: [advanced, intermediate]
links:
  - label: Blog
    url: https://blog.example.com
"#;
        let catalog = CatalogFormat::Yaml.parse(yaml).unwrap();

        assert_eq!(catalog.owner.as_deref(), Some("demo"));
        assert_eq!(catalog.resources.len(), 1);
        assert_eq!(
            catalog.resources[0].requirements.experience,
            Some(Experience::Ladder(vec![
                "advanced".to_string(),
                "intermediate".to_string()
            ]))
        );
        assert_eq!(catalog.links.len(), 1);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = CatalogFormat::Json.parse("{ not json").unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn parse_treats_null_fields_as_absent() {
        let json = r#"{
            "resources": [{
                "id": "a",
                "name": null,
                "description": null,
                "url": null,
                "price": null,
                "format": "course",
                "category": "crypto",
                "requirements": null,
                "tags": null
            }],
            "links": null
        }"#;
        let catalog = CatalogFormat::Json.parse(json).unwrap();

        let resource = &catalog.resources[0];
        assert_eq!(resource.name, "");
        assert_eq!(resource.url, "");
        assert_eq!(resource.price, None);
        assert_eq!(resource.requirements.experience, None);
        assert!(resource.tags.is_empty());
        assert!(catalog.links.is_empty());
    }

    #[test]
    fn parse_rejects_invalid_catalog() {
        let json = r#"{ "resources": [ { "id": "" } ] }"#;
        let err = CatalogFormat::Json.parse(json).unwrap_err();
        assert!(matches!(err, SourceError::Invalid(_)));
    }

    #[test]
    fn render_then_parse_preserves_catalog() {
        let catalog = ResourceCatalog::sample();
        for format in [CatalogFormat::Json, CatalogFormat::Yaml] {
            let text = format.render(&catalog).unwrap();
            assert_eq!(format.parse(&text).unwrap(), catalog);
        }
    }

    #[test]
    fn fingerprint_is_stable_and_content_sensitive() {
        assert_eq!(content_fingerprint("abc"), content_fingerprint("abc"));
        assert_ne!(content_fingerprint("abc"), content_fingerprint("abd"));
        assert_eq!(content_fingerprint("").len(), 64);
    }
}
