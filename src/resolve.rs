use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// The directory all url paths are resolved against. Canonicalized once at
/// startup and immutable for the life of the process.
#[derive(Clone, Debug)]
pub struct ServedRoot(PathBuf);

impl ServedRoot {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        Ok(Self(path.as_ref().canonicalize()?))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    /// Meaningful for files only; listings ignore it for directories.
    pub size: u64,
}

pub enum ResolvedTarget {
    File { path: PathBuf, size: u64 },
    Directory { path: PathBuf, entries: Vec<DirEntry> },
    Missing,
}

/// Maps a url path onto the served root. Anything that cannot be stat'ed,
/// including paths whose `..` segments would climb out of the root, is
/// `Missing`. Races between this stat and a later read are the caller's
/// concern.
pub async fn resolve(url_path: &str, root: &ServedRoot) -> ResolvedTarget {
    let relative = match sanitize(url_path) {
        Some(relative) => relative,
        None => return ResolvedTarget::Missing,
    };
    let path = root.as_path().join(relative);

    let metadata = match fs::metadata(&path).await {
        Ok(metadata) => metadata,
        Err(_) => return ResolvedTarget::Missing,
    };

    if metadata.is_dir() {
        match read_entries(&path).await {
            Ok(entries) => ResolvedTarget::Directory { path, entries },
            Err(_) => ResolvedTarget::Missing,
        }
    } else {
        ResolvedTarget::File {
            path,
            size: metadata.len(),
        }
    }
}

/// Lexically normalizes a url path into a root-relative one. `None` means
/// the path tried to escape the root.
fn sanitize(url_path: &str) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in Path::new(url_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(segment) => normalized.push(segment),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(normalized)
}

/// Immediate children in whatever order the filesystem hands them back.
async fn read_entries(path: &Path) -> Result<Vec<DirEntry>, io::Error> {
    let mut dir = fs::read_dir(path).await?;
    let mut entries = Vec::new();
    while let Some(entry) = dir.next_entry().await? {
        let metadata = entry.metadata().await?;
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
        });
    }
    Ok(entries)
}
