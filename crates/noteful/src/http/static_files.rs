use super::response::ApiResponse;
use notefulapp::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.html";

/// Serves files from a directory for GET requests that match no API route.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `Ok(None)` when the path does not name a servable file.
    pub fn serve(&self, request_path: &str) -> Result<Option<ApiResponse>> {
        let Some(path) = self.resolve(request_path) else {
            return Ok(None);
        };

        let data = fs::read(&path)?;
        Ok(Some(ApiResponse::raw(200, content_type(&path), data)))
    }

    fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let mut path = self.root.clone();
        for raw in request_path.split('/').filter(|s| !s.is_empty()) {
            let segment = urlencoding::decode(raw).ok()?;
            if segment == ".."
                || segment == "."
                || segment.contains(['/', '\\', '\0'])
            {
                return None;
            }
            path.push(&*segment);
        }

        if path.is_dir() {
            path.push(INDEX_FILE);
        }
        path.is_file().then_some(path)
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
