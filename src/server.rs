use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Method,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::data_backend::{
    page_renderer::{render_error_page, render_menu_page},
    view_model::{build_day_cards, local_today},
};
use crate::data_types::{Strictness, Theme};
use crate::errors::ProxyError;
use crate::shared_main::shutdown_signal;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    theme: Option<String>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // only the proxy is reachable cross-origin
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(Any);

    let api = Router::new()
        .route("/api/menu", get(menu_proxy_handler))
        .layer(cors);

    Router::new()
        .route("/", get(menu_page_handler))
        .merge(api)
        .with_state(state)
}

pub async fn menu_page_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Html<String> {
    // a bad preference never costs the visitor the page
    let theme = match params {
        Ok(Query(params)) => Theme::from_param(params.theme.as_deref()),
        Err(e) => {
            log::debug!("Ignoring unreadable page query: {}", e);
            Theme::System
        }
    };

    match state.page_cache.get_or_fetch(&state.fetcher).await {
        Ok(menus) => {
            let cards = build_day_cards(&menus, local_today());
            Html(render_menu_page(&cards, theme))
        }
        Err(e) => {
            log::error!("Error fetching menu data: {}", e);
            Html(render_error_page(&e.user_message(), theme))
        }
    }
}

pub async fn menu_proxy_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ProxyError> {
    let json = state.fetcher.fetch_menu_json(Strictness::Proxy).await?;
    Ok(Json(json))
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = build_router(state.clone());

    let address = state.config.address();
    let listener = TcpListener::bind(&address).await?;
    log::info!("Serving menu on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}
