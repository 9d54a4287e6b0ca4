//! Content route scanning.
//!
//! Walks the content directory and computes the set of routes the markdown
//! sources provide, so the navigation topology can be checked against what
//! actually exists on disk.

use std::path::{Path, PathBuf};

use anyhow::Result;
use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::utils::route::normalize_route;

/// Scan the content directory and return the routes it provides.
///
/// - `guide/installation.md` provides `/guide/installation`
/// - `guide/index.md` provides `/guide`
/// - `index.md` provides `/`
///
/// Routes are normalized (no trailing slash, root stays "/").
pub fn collect_routes(content_dir: &Path) -> Result<FxHashSet<String>> {
    let files: Vec<PathBuf> = WalkDir::new(content_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();

    Ok(files
        .par_iter()
        .filter_map(|path| route_for(path, content_dir))
        .collect())
}

/// Map a markdown source path to the route it provides.
fn route_for(path: &Path, content_dir: &Path) -> Option<String> {
    let rel = path.strip_prefix(content_dir).ok()?;
    let mut parts = rel
        .iter()
        .map(|c| c.to_str())
        .collect::<Option<Vec<_>>>()?;

    let file = parts.pop()?;
    let stem = file.strip_suffix(".md")?;
    if stem != "index" {
        parts.push(stem);
    }

    let route = format!("/{}", parts.join("/"));
    Some(normalize_route(&route).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# page\n").unwrap();
    }

    #[test]
    fn test_route_for_index_and_pages() {
        let dir = Path::new("/site/docs");
        assert_eq!(route_for(&dir.join("index.md"), dir).unwrap(), "/");
        assert_eq!(route_for(&dir.join("guide/index.md"), dir).unwrap(), "/guide");
        assert_eq!(
            route_for(&dir.join("guide/installation.md"), dir).unwrap(),
            "/guide/installation"
        );
    }

    #[test]
    fn test_route_for_non_markdown() {
        let dir = Path::new("/site/docs");
        assert!(route_for(&dir.join("assets/logo.png"), dir).is_none());
    }

    #[test]
    fn test_collect_routes() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "index.md");
        write(temp.path(), "guide/index.md");
        write(temp.path(), "guide/installation.md");
        write(temp.path(), "notes.txt"); // not a page

        let routes = collect_routes(temp.path()).unwrap();
        assert_eq!(routes.len(), 3);
        assert!(routes.contains("/"));
        assert!(routes.contains("/guide"));
        assert!(routes.contains("/guide/installation"));
    }

    #[test]
    fn test_collect_routes_empty_dir() {
        let temp = TempDir::new().unwrap();
        let routes = collect_routes(temp.path()).unwrap();
        assert!(routes.is_empty());
    }
}
