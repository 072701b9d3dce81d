//! Route definitions for the page service.
//!
//! ## Routes
//!
//! - `GET /` - Redirect to `/home`
//! - `GET /home` - Landing page
//! - `GET /features` - Feature catalog
//! - `GET /specs` - Technical specifications
//! - `GET /contacts` - Contact form
//!
//! Anything else renders an HTML 404 page.

mod pages;


use axum::Router;
use axum::response::Redirect;
use axum::routing::get;

use crate::error::not_found;
use crate::render::Page;
use crate::state::PagesState;

/// Build the page router.
pub fn router(state: PagesState) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route(Page::Home.path(), get(pages::home))
        .route(Page::Features.path(), get(pages::features))
        .route(Page::Specs.path(), get(pages::specs))
        .route(Page::Contacts.path(), get(pages::contacts))
        .fallback(not_found)
        .with_state(state)
}

/// Pages plus the full JSON API under `/api`, served from one listener.
pub fn app(api: nova_serve::AppState, pages: PagesState) -> Router {
    nova_serve::router(api).merge(router(pages))
}

async fn root_redirect() -> Redirect {
    Redirect::to(Page::Home.path())
}
