//! DKIM selector set loading.

use std::path::Path;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::DEFAULT_SELECTORS;
use crate::error_handling::InputError;

/// Ordered, read-only list of DKIM selectors probed for every domain.
///
/// Order only affects which selector tends to be reported first when several
/// match; it never changes the found / not-found verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSet {
    selectors: Vec<String>,
}

impl SelectorSet {
    /// The ten built-in selectors.
    pub fn defaults() -> Self {
        Self {
            selectors: DEFAULT_SELECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-in selectors followed by `extra`, trimmed, blanks skipped.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::defaults();
        set.selectors.extend(
            extra
                .into_iter()
                .map(|s| s.as_ref().trim().to_string())
                .filter(|s| !s.is_empty()),
        );
        set
    }

    /// A set with exactly these selectors, no defaults.
    pub fn from_selectors<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// Selectors in probe order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }

    /// Selectors as a slice, in probe order.
    pub fn as_slice(&self) -> &[String] {
        &self.selectors
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// True if there are no selectors to probe.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Reads a selector file (one selector per line) and appends it to the defaults.
///
/// # Errors
///
/// `InputError::SelectorFile` if the file cannot be opened or read.
pub async fn read_selector_file(path: &Path) -> Result<SelectorSet, InputError> {
    let to_error = |source| InputError::SelectorFile {
        path: path.to_path_buf(),
        source,
    };
    let file = tokio::fs::File::open(path).await.map_err(to_error)?;
    let mut lines = BufReader::new(file).lines();
    let mut extra = Vec::new();
    while let Some(line) = lines.next_line().await.map_err(to_error)? {
        extra.push(line);
    }
    Ok(SelectorSet::with_extra(extra))
}

/// Loads the effective selector set.
///
/// Without a path this is exactly the defaults. A selector file that cannot
/// be read is reported and the defaults are used; the scan still runs.
pub async fn load_selectors(path: Option<&Path>) -> SelectorSet {
    let Some(path) = path else {
        return SelectorSet::defaults();
    };
    match read_selector_file(path).await {
        Ok(set) => {
            info!(
                "Loaded {} extra DKIM selector(s) from {}",
                set.len() - DEFAULT_SELECTORS.len(),
                path.display()
            );
            set
        }
        Err(e) => {
            warn!("{e}. Falling back to default selectors.");
            SelectorSet::defaults()
        }
    }
}
