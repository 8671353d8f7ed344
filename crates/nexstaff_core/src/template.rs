//! Shared-fragment template loading.
//!
//! # Responsibility
//! - Load text templates (footer, shared chrome) relative to a site root.
//! - Substitute the `{{path}}` placeholder with a page-depth path prefix.
//! - Recover from load failures with a fixed inline fallback fragment.
//!
//! # Invariants
//! - `load_or_default` never fails; a broken template source degrades to the
//!   fallback fragment, not to an empty container.
//! - Placeholder substitution tolerates whitespace inside the token.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

static PATH_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*path\s*\}\}").expect("valid path token regex"));

/// Inline fallback used when the shared footer template cannot be loaded.
pub const FOOTER_FALLBACK: &str = "<footer class=\"site-footer\">\
<p>&copy; NexStaff Staffing Agency. All rights reserved.</p>\
</footer>";

pub type TemplateResult<T> = Result<T, TemplateError>;

/// Template load failure. Only surfaced by the strict `try_load` path;
/// `load_or_default` recovers locally.
#[derive(Debug)]
pub enum TemplateError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for TemplateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to load template `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for TemplateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Computes the relative prefix from a page `depth` levels below the site
/// root back up to the root (`0 -> ""`, `2 -> "../../"`).
pub fn path_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Replaces every `{{path}}` token in `template` with `prefix`.
pub fn apply_path_prefix(template: &str, prefix: &str) -> String {
    PATH_TOKEN_RE.replace_all(template, prefix).into_owned()
}

/// Loads shared fragments from a site root directory.
pub struct TemplateLoader {
    base_dir: PathBuf,
}

impl TemplateLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Reads a template by site-relative path and substitutes the path
    /// prefix.
    ///
    /// # Errors
    /// - `TemplateError::Io` when the template file cannot be read.
    pub fn try_load(&self, relative: impl AsRef<Path>, prefix: &str) -> TemplateResult<String> {
        let path = self.base_dir.join(relative.as_ref());
        let raw = std::fs::read_to_string(&path).map_err(|source| TemplateError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(apply_path_prefix(&raw, prefix))
    }

    /// Like `try_load`, but degrades to `fallback` on any load failure so
    /// the caller's container is never left empty.
    pub fn load_or_default(
        &self,
        relative: impl AsRef<Path>,
        prefix: &str,
        fallback: &str,
    ) -> String {
        let relative = relative.as_ref();
        match self.try_load(relative, prefix) {
            Ok(fragment) => fragment,
            Err(err) => {
                warn!(
                    "event=template_load module=template status=fallback template={} error={}",
                    relative.display(),
                    err
                );
                apply_path_prefix(fallback, prefix)
            }
        }
    }

    /// Loads the shared site footer, falling back to [`FOOTER_FALLBACK`].
    pub fn footer(&self, prefix: &str) -> String {
        self.load_or_default("templates/footer.html", prefix, FOOTER_FALLBACK)
    }
}
