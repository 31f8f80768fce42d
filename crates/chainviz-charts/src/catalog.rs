//! Dataset catalog over a directory of chunk files.
//!
//! Each dataset is stored as one or more chunks named
//! `<name>.<index>.<extension>`, e.g. `blocks.0.parquet`, `blocks.1.parquet`.
//! The name itself may contain dots; the index is always the second-to-last
//! segment.

use chainviz_common::{ChainvizError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Splits a chunk file name into dataset name and chunk index.
///
/// Returns `None` unless the name ends in `.<index>.<ext>` with a numeric
/// index and a non-empty dataset name.
pub fn split_chunk_name<'a>(file_name: &'a str, ext: &str) -> Option<(&'a str, usize)> {
    let mut parts = file_name.rsplitn(3, '.');
    if parts.next()? != ext {
        return None;
    }
    let index = parts.next()?.parse().ok()?;
    let name = parts.next().filter(|name| !name.is_empty())?;
    Some((name, index))
}

/// The chunks making up one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetInfo {
    /// Dataset name.
    pub name: String,
    /// `(index, file name)` pairs, ascending by index.
    pub chunks: Vec<(usize, String)>,
    /// Highest chunk index, or 0 when there are no chunks.
    pub max: usize,
}

impl DatasetInfo {
    /// Creates the info, sorting chunks by index.
    pub fn new(name: impl Into<String>, mut chunks: Vec<(usize, String)>) -> Self {
        chunks.sort();
        let max = chunks.last().map(|(index, _)| *index).unwrap_or_default();
        Self {
            name: name.into(),
            chunks,
            max,
        }
    }

    /// Whether the dataset has no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Catalog of datasets stored in one directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
    extension: String,
}

impl Catalog {
    /// Creates a catalog over `dir` for chunks ending in `.<extension>`.
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Directory scanned for chunks.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Chunk file extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Lists every dataset in the directory, sorted by name.
    #[instrument(level = "info", skip(self), fields(dir = %self.dir.display()))]
    pub async fn list(&self) -> Result<Vec<DatasetInfo>> {
        let mut grouped = BTreeMap::<String, Vec<(usize, String)>>::new();
        for (name, index, file_name) in self.scan().await? {
            grouped.entry(name).or_default().push((index, file_name));
        }

        Ok(grouped
            .into_iter()
            .map(|(name, chunks)| DatasetInfo::new(name, chunks))
            .collect())
    }

    /// Collects the chunks of the dataset called exactly `name`.
    ///
    /// An unknown name yields an empty [`DatasetInfo`].
    #[instrument(level = "info", skip(self), fields(dir = %self.dir.display()))]
    pub async fn info(&self, name: &str) -> Result<DatasetInfo> {
        let chunks = self
            .scan()
            .await?
            .into_iter()
            .filter(|(chunk_name, _, _)| chunk_name == name)
            .map(|(_, index, file_name)| (index, file_name))
            .collect();
        Ok(DatasetInfo::new(name, chunks))
    }

    /// Like [`Catalog::info`], but fails when the dataset has no chunks.
    pub async fn require(&self, name: &str) -> Result<DatasetInfo> {
        let info = self.info(name).await?;
        if info.is_empty() {
            return Err(ChainvizError::empty_dataset(name));
        }
        Ok(info)
    }

    /// Full paths of the dataset's chunks, in chunk order.
    pub fn chunk_paths(&self, info: &DatasetInfo) -> Vec<PathBuf> {
        info.chunks
            .iter()
            .map(|(_, file_name)| self.dir.join(file_name))
            .collect()
    }

    async fn scan(&self) -> Result<Vec<(String, usize, String)>> {
        let mut found = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if let Some((name, index)) = split_chunk_name(&file_name, &self.extension) {
                debug!(file = %file_name, name, index, "found chunk");
                found.push((name.to_string(), index, file_name.clone()));
            }
        }

        Ok(found)
    }
}
