//! EPUB extractor implementation

use super::html::html_to_text;
use crate::error::ConversionError;
use crate::types::Segment;
use epub::doc::{EpubDoc, NavPoint};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Extractor for EPUB 2/3 format
///
/// Chapters follow the spine (reading order). Each chapter is titled from
/// the table of contents, falling back to its spine id.
pub struct EpubExtractor;

impl EpubExtractor {
    pub fn new() -> Self {
        Self
    }

    fn open(path: &Path) -> Result<EpubDoc<BufReader<File>>, ConversionError> {
        let file = File::open(path)?;
        EpubDoc::from_reader(BufReader::new(file))
            .map_err(|e| ConversionError::InvalidEpub(e.to_string()))
    }
}

impl Default for EpubExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Extractor for EpubExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<Segment>, ConversionError> {
        let mut doc = Self::open(path)?;

        if doc.spine.is_empty() {
            return Err(ConversionError::NoChapters);
        }

        let toc: Vec<(String, String)> = doc.toc.iter().flat_map(flatten_toc).collect();
        let spine: Vec<String> = doc.spine.iter().map(|item| item.idref.clone()).collect();

        // The archive reader needs `&mut`, so markup is fetched in order first
        let mut raw = Vec::with_capacity(spine.len());
        for id in spine {
            let resource_path = doc.resources.get(&id).map(|item| item.path.clone());
            let title = resolve_title(resource_path.as_deref(), &id, &toc);
            let (markup, _mime) = doc
                .get_resource_str(&id)
                .ok_or_else(|| ConversionError::MissingChapter(id.clone()))?;
            raw.push((id, title, markup));
        }

        // Order-preserving collect keeps segments in spine order
        let segments: Vec<Segment> = raw
            .into_par_iter()
            .map(|(id, title, markup)| {
                let text = html_to_text(&markup);
                debug!(chapter = %id, chars = text.len(), "Parsed chapter");
                Segment::chapter(id, title, text)
            })
            .collect();

        debug!(path = %path.display(), chapters = segments.len(), "Extracted EPUB text");
        Ok(segments)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["epub"]
    }
}

/// Flatten a TOC tree to (href without fragment, label) pairs, depth first
fn flatten_toc(nav: &NavPoint) -> Vec<(String, String)> {
    let href = nav.content.to_string_lossy();
    let href = href.split('#').next().unwrap_or_default().to_string();

    let mut result = vec![(href, nav.label.trim().to_string())];
    for child in &nav.children {
        result.extend(flatten_toc(child));
    }
    result
}

/// Pick a title for a spine item
///
/// Prefers the TOC entry pointing at the item's resource, then one whose file
/// stem equals the spine id, then the spine id itself.
fn resolve_title(resource_path: Option<&Path>, idref: &str, toc: &[(String, String)]) -> String {
    let labelled = |entry: &&(String, String)| !entry.1.is_empty();

    if let Some(resource) = resource_path {
        if let Some((_, title)) = toc
            .iter()
            .filter(labelled)
            .find(|(href, _)| Path::new(href) == resource)
        {
            return title.clone();
        }
    }

    toc.iter()
        .filter(labelled)
        .find(|(href, _)| {
            Path::new(href)
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|stem| stem == idref)
                .unwrap_or(false)
        })
        .map(|(_, title)| title.clone())
        .unwrap_or_else(|| idref.to_string())
}
