//! HTTP surface: generated feeds plus the static public directory with SPA fallback.

use crate::config::SiteSettings;
use crate::error::{FolioError, Result};
use crate::feed::{render_rss, render_sitemap};
use crate::model::Article;
use crate::storage::ArticleStore;
use axum::{
    Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

pub const SPA_SHELL: &str = "index.html";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ArticleStore>,
    pub site: Arc<SiteSettings>,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(store: ArticleStore, site: SiteSettings, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(store),
            site: Arc::new(site),
            public_dir: public_dir.into(),
        }
    }
}

async fn healthz_handler() -> &'static str {
    "ok"
}

/// Load the index on the blocking pool; the store reads files with `std::fs`.
async fn load_articles(store: Arc<ArticleStore>) -> Arc<Vec<Article>> {
    match tokio::task::spawn_blocking(move || store.articles()).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!(error = %e, "Article index task failed");
            Arc::new(Vec::new())
        }
    }
}

async fn rss_handler(State(state): State<AppState>) -> impl IntoResponse {
    let articles = load_articles(Arc::clone(&state.store)).await;
    let body = render_rss(&state.site, &articles, Utc::now());
    ([(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")], body)
}

async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    let articles = load_articles(Arc::clone(&state.store)).await;
    let body = render_sitemap(&state.site, &articles, Utc::now().date_naive());
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], body)
}

pub fn build_router(state: AppState) -> Router {
    // Unknown paths get the shell with 200 so client-side routing can take over
    let shell = ServeFile::new(state.public_dir.join(SPA_SHELL));
    let static_files = ServeDir::new(&state.public_dir).fallback(shell);

    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/rss.xml", get(rss_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .fallback_service(static_files)
        .with_state(state)
}

async fn wait_for_shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Resolve `host:port` to a bind address; `host` may be an IP literal or a hostname.
pub async fn resolve_listen_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let mut addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| FolioError::Config(format!("Cannot resolve listen host '{}': {}", host, e)))?;
    addrs
        .next()
        .ok_or_else(|| FolioError::Config(format!("Listen host '{}' has no addresses", host)))
}

pub async fn run_server(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| FolioError::Config(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!(%addr, public = %state.public_dir.display(), "Serving blog");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;
    Ok(())
}
