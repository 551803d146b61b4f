//! # HTTP Layer
//!
//! Everything that knows about requests and responses lives here:
//!
//! - [`request`] / [`response`]: transport-independent request and response values
//! - [`router`]: the `(method, pattern) → handler` table
//! - [`handlers`]: the five notes endpoints
//! - [`static_files`]: fallback file serving for non-API GETs
//! - [`server`]: the `tiny_http` loop that feeds requests into an [`App`]
//!
//! [`App`] is the composition point. It owns the API facade (and through it the
//! store), so the server loop is the only thing holding mutable access and requests
//! are applied one at a time.

pub mod handlers;
pub mod request;
pub mod response;
pub mod router;
pub mod server;
pub mod static_files;

use notefulapp::api::NotefulApi;
use notefulapp::store::NoteStore;
use request::{ApiRequest, Method};
use response::ApiResponse;
use router::Router;
use static_files::StaticFiles;
use std::path::PathBuf;

pub struct App<S: NoteStore> {
    api: NotefulApi<S>,
    router: Router<S>,
    static_files: Option<StaticFiles>,
}

impl<S: NoteStore> App<S> {
    pub fn new(api: NotefulApi<S>) -> Self {
        Self {
            api,
            router: handlers::routes(),
            static_files: None,
        }
    }

    pub fn with_static_files(mut self, root: impl Into<PathBuf>) -> Self {
        self.static_files = Some(StaticFiles::new(root));
        self
    }

    /// Route table first, then static files for GET and HEAD, then the JSON 404.
    pub fn handle(&mut self, req: &ApiRequest) -> ApiResponse {
        if let Some(response) = self.router.dispatch(&mut self.api, req) {
            return response;
        }

        if matches!(req.method, Method::Get | Method::Head) {
            if let Some(files) = &self.static_files {
                match files.serve(&req.path) {
                    Ok(Some(response)) => return response,
                    Ok(None) => {}
                    Err(err) => return ApiResponse::from_error(&err),
                }
            }
        }

        ApiResponse::not_found()
    }

    pub fn api(&self) -> &NotefulApi<S> {
        &self.api
    }
}
