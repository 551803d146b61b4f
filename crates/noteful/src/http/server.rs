//! Blocking `tiny_http` server loop.
//!
//! Requests are pulled off the listener one at a time and handled to completion
//! before the next one is read, so the [`App`] (and the store inside it) is only
//! ever touched from the loop thread.

use super::request::{ApiRequest, Method};
use super::response::ApiResponse;
use super::App;
use anyhow::{anyhow, Result};
use log::{error, info, warn};
use notefulapp::error::NotefulError;
use notefulapp::store::NoteStore;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Handle for stopping a running server from another thread.
#[derive(Clone)]
pub struct ShutdownHandle {
    server: Arc<Server>,
}

impl ShutdownHandle {
    /// Unblock the serve loop. The request in flight, if any, still completes.
    pub fn shutdown(&self) {
        self.server.unblock();
    }
}

pub struct NotefulServer<S: NoteStore> {
    server: Arc<Server>,
    app: App<S>,
    max_body_bytes: usize,
}

impl<S: NoteStore> NotefulServer<S> {
    pub fn bind(addr: &str, app: App<S>, max_body_bytes: usize) -> Result<Self> {
        let server = Server::http(addr).map_err(|e| anyhow!("failed to bind {addr}: {e}"))?;
        Ok(Self {
            server: Arc::new(server),
            app,
            max_body_bytes,
        })
    }

    /// Actual address bound, which differs from the requested one for port 0.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            server: Arc::clone(&self.server),
        }
    }

    /// Serve until [`ShutdownHandle::shutdown`] is called.
    pub fn run(mut self) -> Result<()> {
        let server = Arc::clone(&self.server);
        for request in server.incoming_requests() {
            self.serve_one(request);
        }
        info!("event=server_stop");
        Ok(())
    }

    fn serve_one(&mut self, mut request: Request) {
        let started = Instant::now();
        let method = Method::from(request.method().to_string().as_str());
        let target = request.url().to_string();

        let response = match read_body(&mut request, self.max_body_bytes) {
            Ok(body) => self.app.handle(&ApiRequest::new(method.clone(), &target, body)),
            Err(err) => ApiResponse::from_error(&err),
        };

        let status = response.status;
        if response.is_server_error() {
            error!(
                "event=request_failed method={} path={} status={} body={}",
                method,
                target,
                status,
                String::from_utf8_lossy(&response.body)
            );
        }

        if let Err(err) = request.respond(into_tiny_response(response)) {
            warn!(
                "event=respond_failed method={} path={} err={}",
                method, target, err
            );
        }

        info!(
            "event=request method={} path={} status={} elapsed_ms={}",
            method,
            target,
            status,
            started.elapsed().as_millis()
        );
    }
}

fn read_body(request: &mut Request, limit: usize) -> notefulapp::error::Result<Vec<u8>> {
    if request.body_length().is_some_and(|len| len > limit) {
        return Err(NotefulError::PayloadTooLarge { limit });
    }

    let mut body = Vec::new();
    request
        .as_reader()
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut body)?;

    if body.len() > limit {
        return Err(NotefulError::PayloadTooLarge { limit });
    }
    Ok(body)
}

fn into_tiny_response(response: ApiResponse) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut out = Response::from_data(response.body).with_status_code(StatusCode(response.status));
    for (name, value) in &response.headers {
        match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(header) => out.add_header(header),
            Err(()) => warn!("event=bad_header name={}", name),
        }
    }
    out
}
