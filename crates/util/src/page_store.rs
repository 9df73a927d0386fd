//! Page document discovery and loading.
//!
//! Resolution order: an explicit path (CLI flag) wins, then the
//! `MARQUEE_PAGE` environment variable, then the standard configuration
//! directory (`~/.config/marquee/page.yaml` on most platforms), and finally
//! the embedded default page. Explicitly requested files must parse and
//! their errors surface to the caller, while a broken discovered file only
//! logs a warning and falls back to the default.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use thiserror::Error;
use tracing::warn;

use marquee_types::PageSpec;

/// Environment variable allowing callers to override the page file path.
pub const PAGE_PATH_ENV: &str = "MARQUEE_PAGE";

/// Default filename for the page document.
pub const PAGE_FILE_NAME: &str = "page.yaml";

/// Built-in page shipped inside the binary.
const EMBEDDED_PAGE: &str = include_str!("default_page.yaml");

/// Error surfaced when reading or parsing a page document fails.
#[derive(Debug, Error)]
pub enum PageStoreError {
    /// I/O failure (for example, a missing file or permissions).
    #[error("page I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid YAML for a page.
    #[error("page parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Path of the page file in the user's configuration directory, when one
/// can be determined.
pub fn default_page_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("marquee").join(PAGE_FILE_NAME))
}

/// Parses the page embedded in the binary.
pub fn embedded_default_page() -> Result<PageSpec, PageStoreError> {
    Ok(serde_yaml::from_str(EMBEDDED_PAGE)?)
}

/// Loads the page document following the documented resolution order.
///
/// `explicit` is the CLI-provided path; when present it must load, and any
/// failure is returned. Discovered locations degrade silently to the
/// embedded default so a broken user file never prevents the page from
/// rendering.
pub fn load_page(explicit: Option<&Path>) -> Result<PageSpec, PageStoreError> {
    if let Some(path) = explicit {
        return read_page(path);
    }

    if let Ok(env_path) = env::var(PAGE_PATH_ENV)
        && !env_path.trim().is_empty()
    {
        return read_page(Path::new(env_path.trim()));
    }

    if let Some(path) = default_page_path()
        && path.exists()
    {
        match read_page(&path) {
            Ok(page) => return Ok(page),
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring unreadable page file");
            }
        }
    }

    embedded_default_page()
}

fn read_page(path: &Path) -> Result<PageSpec, PageStoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_default_parses_and_has_all_sections() {
        let page = embedded_default_page().expect("embedded page must parse");
        assert!(!page.title.is_empty());
        assert!(page.hero.is_some());
        let workflow = page.workflow.expect("workflow section");
        assert!(workflow.loop_enabled);
        assert!(!workflow.steps.is_empty());
        let counters = page.counters.expect("counters section");
        assert!(!counters.counters.is_empty());
        assert!(page.closing.is_some());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "title: From file").expect("write");
        let page = load_page(Some(file.path())).expect("load explicit page");
        assert_eq!(page.title, "From file");
    }

    #[test]
    fn explicit_path_errors_surface() {
        let missing = Path::new("/nonexistent/marquee-page.yaml");
        assert!(matches!(load_page(Some(missing)), Err(PageStoreError::Io(_))));

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "title: [unclosed").expect("write");
        assert!(matches!(
            load_page(Some(file.path())),
            Err(PageStoreError::Parse(_))
        ));
    }

    #[test]
    fn env_override_is_honored() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "title: From env").expect("write");
        let path = file.path().to_string_lossy().to_string();
        temp_env::with_var(PAGE_PATH_ENV, Some(path.as_str()), || {
            let page = load_page(None).expect("load env page");
            assert_eq!(page.title, "From env");
        });
    }

    #[test]
    fn falls_back_to_embedded_default() {
        temp_env::with_var(PAGE_PATH_ENV, None::<&str>, || {
            // No explicit path and (in the common test environment) no user
            // page file; the embedded default must come back.
            let page = load_page(None).expect("load default page");
            assert!(!page.title.is_empty());
        });
    }
}
