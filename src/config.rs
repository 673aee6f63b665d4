use std::path::PathBuf;

/// Middleware configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory the page templates live in
    pub folder_path: String,
    /// Extension appended to the request path when looking up a template
    pub file_ext: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder_path: "views/static".to_string(),
            file_ext: "tera".to_string(),
        }
    }
}

impl Config {
    /// Build a configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            folder_path: std::env::var("SEMI_STATIC_DIR")
                .unwrap_or_else(|_| "views/static".to_string()),
            file_ext: std::env::var("SEMI_STATIC_EXT").unwrap_or_else(|_| "tera".to_string()),
        }
    }

    /// Candidate template file for a request path:
    /// `{folder_path}{uri_path}.{file_ext}`.
    ///
    /// The request path keeps its leading slash and is not normalized or
    /// percent-decoded, so `..` segments compose verbatim and can point
    /// outside `folder_path`.
    pub fn candidate_path(&self, uri_path: &str) -> PathBuf {
        PathBuf::from(format!("{}{}.{}", self.folder_path, uri_path, self.file_ext))
    }
}
