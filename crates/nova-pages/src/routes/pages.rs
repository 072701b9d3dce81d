//! Page handlers.

use axum::extract::State;
use maud::Markup;

use crate::render::{Page, render_page};
use crate::state::PagesState;

pub async fn home(State(state): State<PagesState>) -> Markup {
    render_page(Page::Home, &state.config)
}

pub async fn features(State(state): State<PagesState>) -> Markup {
    render_page(Page::Features, &state.config)
}

pub async fn specs(State(state): State<PagesState>) -> Markup {
    render_page(Page::Specs, &state.config)
}

pub async fn contacts(State(state): State<PagesState>) -> Markup {
    render_page(Page::Contacts, &state.config)
}
