//! Repository tree listing.

use log::{debug, trace, warn};
use std::path::Path;
use walkdir::WalkDir;

/// Lists regular files under `repo_path`, relative to it, with `/` separators.
///
/// Hidden entries (names starting with `.`) are skipped along with everything
/// below them. Output is sorted by path components so it is stable between
/// runs. Entries that cannot be read are logged and skipped; names that are
/// not valid UTF-8 are kept in lossy form.
pub fn list_files(repo_path: &Path) -> Vec<String> {
    debug!("Listing files in repository: {:?}", repo_path);
    let mut files = Vec::new();

    let walker = WalkDir::new(repo_path)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Never prune the root itself, even if its name is hidden.
            e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.')
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry while listing files: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(repo_path) else {
            continue;
        };
        let path_str = match relative.to_str() {
            Some(path) => path.to_string(),
            None => {
                let lossy = relative.to_string_lossy().into_owned();
                warn!("Path {:?} is not valid UTF-8, listing it as '{}'", relative, lossy);
                lossy
            }
        };
        files.push(path_str.replace('\\', "/"));
    }

    debug!("Found {} files in repository", files.len());
    trace!("Files: {:?}", files);
    files
}
