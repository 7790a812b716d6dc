// Content tree - the regions shown in the scrollable content host
use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::TargetId;

const BUILTIN_CONTENT: &str = include_str!("../../assets/portfolio.toml");

/// One block of static markup inside a region.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Bullets { items: Vec<String> },
    Image { path: String, alt: String },
    Link { label: String, url: String },
    Contact { label: String, value: String },
}

/// A file offered by the download affordance while its region is active.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Download {
    pub label: String,
    pub path: PathBuf,
}

/// A screen of content, addressable by the same id as its navigation target.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContentRegion {
    pub id: TargetId,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<Download>,
}

/// Top-level entry of the content tree. A component groups regions supplied
/// by a nested section; lookups go exactly one level into it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentNode {
    Region(ContentRegion),
    Component {
        name: String,
        regions: Vec<ContentRegion>,
    },
}

impl ContentNode {
    pub fn regions(&self) -> &[ContentRegion] {
        match self {
            ContentNode::Region(region) => std::slice::from_ref(region),
            ContentNode::Component { regions, .. } => regions,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
struct ContentFile {
    nodes: Vec<ContentNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Content {
    pub nodes: Vec<ContentNode>,
    /// Directory that relative image and download paths resolve against
    pub base_dir: PathBuf,
}

impl Content {
    /// The portfolio bundled with the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::parse(BUILTIN_CONTENT, PathBuf::from("."))
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let contents = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::parse(&contents, base_dir)
    }

    pub fn parse(contents: &str, base_dir: PathBuf) -> Result<Self, ContentError> {
        let file: ContentFile = toml::from_str(contents)?;

        let mut seen = HashSet::new();
        for region in file.nodes.iter().flat_map(ContentNode::regions) {
            if !seen.insert(region.id.clone()) {
                return Err(ContentError::DuplicateRegion(region.id.to_string()));
            }
        }

        Ok(Self {
            nodes: file.nodes,
            base_dir,
        })
    }

    /// Regions in display order, nested components flattened one level.
    pub fn regions(&self) -> impl Iterator<Item = &ContentRegion> {
        self.nodes.iter().flat_map(ContentNode::regions)
    }

    pub fn region(&self, id: &TargetId) -> Option<&ContentRegion> {
        self.regions().find(|r| &r.id == id)
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: &str = r#"
        [[nodes]]
        kind = "region"
        id = "home"

        [[nodes.blocks]]
        type = "heading"
        level = 1
        text = "Hello"

        [[nodes]]
        kind = "component"
        name = "resume-section"

        [[nodes.regions]]
        id = "resume"
        download = { label = "Download", path = "cv.pdf" }

        [[nodes.regions.blocks]]
        type = "bullets"
        items = ["a", "b"]
    "#;

    #[test]
    fn test_builtin_content_covers_default_targets() {
        let content = Content::builtin().expect("builtin content parses");
        for target in crate::model::default_targets() {
            assert!(content.region(&target.id).is_some(), "missing {}", target.id);
        }
    }

    #[test]
    fn test_builtin_resume_offers_download() {
        let content = Content::builtin().expect("builtin content parses");
        let resume = content.region(&TargetId::new("screen-2")).expect("resume region");
        assert!(resume.download.is_some());
        let home = content.region(&TargetId::new("screen-1")).expect("home region");
        assert!(home.download.is_none());
    }

    #[test]
    fn test_parse_nested_component() {
        let content = Content::parse(NESTED, PathBuf::from("/srv/site")).expect("parses");
        assert_eq!(content.nodes.len(), 2);
        assert!(matches!(&content.nodes[1], ContentNode::Component { name, .. } if name == "resume-section"));

        let ids: Vec<_> = content.regions().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["home", "resume"]);

        let resume = content.region(&TargetId::new("resume")).expect("nested region");
        assert_eq!(resume.blocks, vec![Block::Bullets { items: vec!["a".into(), "b".into()] }]);
        let download = resume.download.as_ref().expect("download");
        assert_eq!(content.resolve(&download.path), PathBuf::from("/srv/site/cv.pdf"));
    }

    #[test]
    fn test_duplicate_region_rejected() {
        let doubled = r#"
            [[nodes]]
            kind = "region"
            id = "home"

            [[nodes]]
            kind = "component"
            name = "again"

            [[nodes.regions]]
            id = "home"
        "#;
        let result = Content::parse(doubled, PathBuf::from("."));
        assert!(matches!(result, Err(ContentError::DuplicateRegion(id)) if id == "home"));
    }

    #[test]
    fn test_load_from_file_sets_base_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("content.toml");
        fs::write(&path, NESTED).expect("write content");

        let content = Content::load(&path).expect("loads");
        assert_eq!(content.base_dir, dir.path());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Content::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ContentError::Io { .. })));
    }
}
