use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("Cannot read server list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered, immutable list of server URLs as they appeared in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList(Vec<String>);

impl TargetList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TargetList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Reads the server list at `path`. The file is closed before returning.
pub fn load_targets(path: &Path) -> Result<TargetList, TargetError> {
    let content = std::fs::read_to_string(path).map_err(|source| TargetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_targets(&content))
}

/// Any of `\n`, `\r\n` or a lone `\r` ends a line.
pub fn parse_targets(content: &str) -> TargetList {
    content
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
