use axum::{
    routing::{get, get_service, post},
    Extension, Router,
};
use std::path::Path;
use std::sync::Arc;
use tera::Tera;
use tower_http::services::ServeDir;

use crate::{
    features::dictionary::Dictionary,
    handlers::{api, edit, lookup, pages},
};

pub fn app_router(dictionary: Arc<Dictionary>, templates: Arc<Tera>, static_dir: &Path) -> Router {
    // JSON API
    let api_router = Router::new()
        .route("/words", post(api::create_word))
        .route("/words/{token}", get(api::get_word))
        .route("/words/{token}/definitions", post(api::append_definition))
        .route("/words/{token}/synonyms", post(api::add_synonyms))
        .route("/search", get(api::search))
        .with_state(dictionary.clone());

    // HTML pages
    let page_router = Router::new()
        .route("/search", get(lookup::search_page).post(lookup::handle_search))
        .route("/definitions/{word}", get(lookup::show_definitions))
        .route("/search_all", get(lookup::search_all_page).post(lookup::handle_search_all))
        .route("/add_word", get(edit::add_word_page).post(edit::handle_add_word))
        .route(
            "/add_definition",
            get(edit::add_definition_page).post(edit::handle_add_definition),
        )
        .route(
            "/add_synonyms",
            get(edit::add_synonyms_page).post(edit::handle_add_synonyms),
        )
        .with_state(dictionary);

    Router::new()
        .route("/", get(pages::home))
        .route("/goodbye", get(pages::goodbye))
        .merge(page_router)
        .nest("/api", api_router)
        .nest_service("/static", get_service(ServeDir::new(static_dir)))
        .layer(Extension(templates))
}
