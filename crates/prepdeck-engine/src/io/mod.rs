use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::models::{TopicId, TopicRecord, TopicTree};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Failed to parse topic record {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Read and deserialize one topic record
pub fn read_record(
    relative_path: &RelativePath,
    content_root: &Path,
) -> Result<TopicRecord, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let raw = fs::read_to_string(&absolute_path)?;
    toml::from_str(&raw).map_err(|source| IoError::Parse {
        path: absolute_path,
        source,
    })
}

/// Scan for topic record files, returned relative to the content root and sorted
pub fn scan_record_files(content_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
            continue;
        }

        let Ok(stripped) = path.strip_prefix(root) else {
            continue;
        };
        match RelativePathBuf::from_path(stripped) {
            Ok(relative) if TopicId::from_record_path(&relative).is_some() => files.push(relative),
            Ok(_) => {}
            Err(e) => log::warn!("Skipping {}: {e}", path.display()),
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

/// All topic records under a content root, with the outline built from them.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    root: PathBuf,
    records: BTreeMap<TopicId, TopicRecord>,
    tree: TopicTree,
}

impl ContentRepository {
    /// Loads every record under `root`. A malformed record fails the whole load.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, IoError> {
        let root = root.into();
        let files = scan_record_files(&root)?;
        log::debug!("Found {} topic records under {}", files.len(), root.display());

        let mut records = BTreeMap::new();
        for relative in files {
            let Some(id) = TopicId::from_record_path(&relative) else {
                continue;
            };
            let record = read_record(&relative, &root)?;
            log::debug!("Loaded topic {id}");
            records.insert(id, record);
        }

        let repo = Self::from_records(root, records);
        log::info!("Loaded {} topics from {}", repo.len(), repo.root.display());
        Ok(repo)
    }

    /// Builds a repository from records already in memory.
    pub fn from_records(
        root: impl Into<PathBuf>,
        records: impl IntoIterator<Item = (TopicId, TopicRecord)>,
    ) -> Self {
        let root = root.into();
        let records: BTreeMap<TopicId, TopicRecord> = records.into_iter().collect();
        let root_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Topics".to_string());
        let tree = TopicTree::build(
            root_name,
            records
                .iter()
                .map(|(id, record)| (id.clone(), record.title.clone())),
        );
        Self {
            root,
            records,
            tree,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get(&self, id: &TopicId) -> Option<&TopicRecord> {
        self.records.get(id)
    }

    /// Topic ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &TopicId> {
        self.records.keys()
    }

    pub fn records(&self) -> impl Iterator<Item = (&TopicId, &TopicRecord)> {
        self.records.iter()
    }

    pub fn tree(&self) -> &TopicTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut TopicTree {
        &mut self.tree
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
