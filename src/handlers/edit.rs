use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse},
    Extension,
};
use std::sync::Arc;
use tera::{Context, Tera};
use validator::Validate;

use super::run_blocking;
use crate::{
    data::models::{AddDefinitionForm, AddSynonymsForm, AddWordForm, Result},
    features::dictionary::Dictionary,
    utils::{render_message, render_template},
};

pub async fn add_word_page(Extension(templates): Extension<Arc<Tera>>) -> impl IntoResponse {
    render_template(&templates, "add_word.html", Context::new())
}

pub async fn handle_add_word(
    State(dictionary): State<Arc<Dictionary>>,
    Extension(templates): Extension<Arc<Tera>>,
    Form(form): Form<AddWordForm>,
) -> Html<String> {
    let message = match run_blocking(&dictionary, move |d| add_word(d, &form)).await {
        Ok(word) => format!("Word '{}' added successfully.", word),
        Err(e) => e.to_string(),
    };
    render_message(&templates, &message)
}

fn add_word(dictionary: &Dictionary, form: &AddWordForm) -> Result<String> {
    form.validate()?;
    dictionary.create_word(&form.new_word, &form.new_definition)
}

pub async fn add_definition_page(
    Extension(templates): Extension<Arc<Tera>>,
) -> impl IntoResponse {
    render_template(&templates, "add_definition.html", Context::new())
}

pub async fn handle_add_definition(
    State(dictionary): State<Arc<Dictionary>>,
    Extension(templates): Extension<Arc<Tera>>,
    Form(form): Form<AddDefinitionForm>,
) -> Html<String> {
    let message = match run_blocking(&dictionary, move |d| add_definition(d, &form)).await {
        Ok(word) => format!("New definition added for '{}'.", word),
        Err(e) => e.to_string(),
    };
    render_message(&templates, &message)
}

fn add_definition(dictionary: &Dictionary, form: &AddDefinitionForm) -> Result<String> {
    form.validate()?;
    dictionary.append_definition(&form.existing_word, &form.new_definition)
}

pub async fn add_synonyms_page(Extension(templates): Extension<Arc<Tera>>) -> impl IntoResponse {
    render_template(&templates, "add_synonyms.html", Context::new())
}

pub async fn handle_add_synonyms(
    State(dictionary): State<Arc<Dictionary>>,
    Extension(templates): Extension<Arc<Tera>>,
    Form(form): Form<AddSynonymsForm>,
) -> Html<String> {
    let message = match run_blocking(&dictionary, move |d| add_synonyms(d, &form)).await {
        Ok(word) => format!("Synonyms added for '{}'.", word),
        Err(e) => e.to_string(),
    };
    render_message(&templates, &message)
}

fn add_synonyms(dictionary: &Dictionary, form: &AddSynonymsForm) -> Result<String> {
    form.validate()?;
    dictionary.add_synonyms(&form.existing_word, &form.new_synonyms)
}
