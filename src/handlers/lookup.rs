use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Extension,
};
use std::sync::Arc;
use tera::{Context, Tera};
use validator::Validate;

use crate::{
    data::models::{DictionaryError, SearchForm},
    features::dictionary::Dictionary,
    utils::{definitions_path, render_template},
};

pub async fn search_page(Extension(templates): Extension<Arc<Tera>>) -> impl IntoResponse {
    render_template(&templates, "search_word.html", Context::new())
}

pub async fn handle_search(
    State(dictionary): State<Arc<Dictionary>>,
    Extension(templates): Extension<Arc<Tera>>,
    Form(form): Form<SearchForm>,
) -> Response {
    let user_input = form.search_term.trim();

    let error_msg = match form.validate() {
        Err(e) => DictionaryError::from(e).to_string(),
        Ok(()) => match dictionary.resolve_key(user_input) {
            Some(word) => return Redirect::to(&definitions_path(&word)).into_response(),
            None => DictionaryError::NotFound(user_input.to_string()).to_string(),
        },
    };

    let mut context = Context::new();
    context.insert("error_msg", &error_msg);
    render_template(&templates, "search_word.html", context).into_response()
}

pub async fn show_definitions(
    State(dictionary): State<Arc<Dictionary>>,
    Extension(templates): Extension<Arc<Tera>>,
    Path(word): Path<String>,
) -> Response {
    let Some(data) = dictionary.get_entry(&word) else {
        return (
            StatusCode::NOT_FOUND,
            format!("'{}' not found in the dictionary.", word),
        )
            .into_response();
    };

    let mut context = Context::new();
    context.insert("word", &word);
    context.insert("data", &data);
    render_template(&templates, "show_definitions.html", context).into_response()
}

pub async fn search_all_page(Extension(templates): Extension<Arc<Tera>>) -> impl IntoResponse {
    render_template(&templates, "search_all.html", Context::new())
}

pub async fn handle_search_all(
    State(dictionary): State<Arc<Dictionary>>,
    Extension(templates): Extension<Arc<Tera>>,
    Form(form): Form<SearchForm>,
) -> Response {
    if let Err(e) = form.validate() {
        let mut context = Context::new();
        context.insert("error_msg", &DictionaryError::from(e).to_string());
        return render_template(&templates, "search_all.html", context).into_response();
    }

    let term = form.search_term.trim().to_lowercase();
    let results = dictionary.search_contains(&term);

    let mut context = Context::new();
    context.insert("results", &results);
    context.insert("search_term", &term);
    render_template(&templates, "search_all_results.html", context).into_response()
}
