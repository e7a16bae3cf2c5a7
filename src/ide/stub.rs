// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-process stand-in for the IDE web server, used by unit tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::{EndpointConfig, DEFAULT_BASE_PATH};

pub(crate) fn new_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().enable_all().build().expect("tokio runtime")
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
    pub user_agent: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Default)]
struct StubState {
    routes: Mutex<HashMap<(String, String), (u16, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Records every request; unregistered routes answer 404.
pub(crate) struct StubIde {
    addr: SocketAddr,
    state: Arc<StubState>,
    server: JoinHandle<()>,
}

impl StubIde {
    pub(crate) async fn start() -> Self {
        let state = Arc::new(StubState::default());
        let router = Router::new().fallback(record).with_state(state.clone());
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.expect("bind stub IDE");
        let addr = listener.local_addr().expect("stub IDE addr");
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Self { addr, state, server }
    }

    pub(crate) fn config(&self) -> EndpointConfig {
        EndpointConfig::with_port(self.addr.port()).with_host("127.0.0.1")
    }

    /// `path` is relative to the API base path, e.g. `/mcp/selected_text`.
    pub(crate) fn respond(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.state
            .routes
            .lock()
            .expect("stub routes")
            .insert((method.to_owned(), path.to_owned()), (status, body.into()));
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("stub requests").clone()
    }
}

impl Drop for StubIde {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn record(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header_value = |name: header::HeaderName| {
        headers.get(name).and_then(|value| value.to_str().ok()).map(str::to_owned)
    };
    state.requests.lock().expect("stub requests").push(RecordedRequest {
        method: method.as_str().to_owned(),
        path: uri.path().to_owned(),
        body,
        user_agent: header_value(header::USER_AGENT),
        content_type: header_value(header::CONTENT_TYPE),
    });

    let route = uri.path().strip_prefix(DEFAULT_BASE_PATH).unwrap_or(uri.path()).to_owned();
    let routes = state.routes.lock().expect("stub routes");
    match routes.get(&(method.as_str().to_owned(), route)) {
        Some((status, body)) => {
            (StatusCode::from_u16(*status).expect("stub status"), body.clone())
        }
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}
