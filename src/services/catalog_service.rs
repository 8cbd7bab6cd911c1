use opml::{Outline, OPML};

use crate::catalog::{Category, Source, SourceCatalog};
use crate::errors::{DigestError, DigestResult};

const LOOSE_CATEGORY: &str = "default";

/// Converts source catalogs to and from OPML.
pub struct CatalogService;

impl CatalogService {
    /// Build a catalog from OPML content.
    ///
    /// Outlines with children become categories; feed outlines at the top
    /// level go into one category named after the document title.
    pub fn import_opml(content: &str) -> DigestResult<SourceCatalog> {
        let opml = OPML::from_str(content).map_err(|e| DigestError::OpmlParse(e.to_string()))?;

        let loose_name = opml
            .head
            .as_ref()
            .and_then(|h| h.title.clone())
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| LOOSE_CATEGORY.to_string());

        let mut loose = Vec::new();
        let mut categories = Vec::new();

        for outline in &opml.body.outlines {
            if let Some(source) = Self::source_from_outline(outline) {
                loose.push(source);
            } else if !outline.outlines.is_empty() {
                let sources = Self::extract_sources(&outline.outlines);
                if !sources.is_empty() {
                    categories.push(Category::new(Self::outline_name(outline), sources));
                }
            }
        }

        if !loose.is_empty() {
            categories.insert(0, Category::new(loose_name, loose));
        }

        SourceCatalog::new(categories).validated()
    }

    /// Recursively collect feed outlines, flattening nested folders
    fn extract_sources(outlines: &[Outline]) -> Vec<Source> {
        let mut sources = Vec::new();

        for outline in outlines {
            if let Some(source) = Self::source_from_outline(outline) {
                sources.push(source);
            }
            sources.extend(Self::extract_sources(&outline.outlines));
        }

        sources
    }

    fn source_from_outline(outline: &Outline) -> Option<Source> {
        let url = outline.xml_url.as_deref().filter(|u| !u.is_empty())?;
        Some(Source::new(Self::outline_name(outline), url))
    }

    fn outline_name(outline: &Outline) -> String {
        outline
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| outline.text.clone())
    }

    /// Export a catalog as OPML, one folder outline per category
    pub fn export_opml(catalog: &SourceCatalog) -> DigestResult<String> {
        let mut opml = OPML::default();
        opml.head = Some(opml::Head {
            title: Some("RSS Digest Sources".to_string()),
            ..Default::default()
        });

        for category in &catalog.categories {
            let children = category
                .sources
                .iter()
                .map(|source| Outline {
                    text: source.name.clone(),
                    r#type: Some("rss".to_string()),
                    xml_url: Some(source.url.clone()),
                    title: Some(source.name.clone()),
                    ..Default::default()
                })
                .collect();

            opml.body.outlines.push(Outline {
                text: category.name.clone(),
                title: Some(category.name.clone()),
                outlines: children,
                ..Default::default()
            });
        }

        opml.to_string()
            .map_err(|e| DigestError::OpmlParse(e.to_string()))
    }
}
