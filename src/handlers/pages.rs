use axum::{response::IntoResponse, Extension};
use std::sync::Arc;
use tera::{Context, Tera};

use crate::utils::{random_phrase, render_template};

const GREETINGS: [&str; 4] = ["Good day", "How are you?", "What's up?", "Hail and Well Met!"];
const GOODBYES: [&str; 5] = ["Adieu", "See ya!", "Goodbye", "Have a great day", "Bye!"];

pub async fn home(Extension(templates): Extension<Arc<Tera>>) -> impl IntoResponse {
    let mut context = Context::new();
    context.insert("greeting", random_phrase(&GREETINGS));
    render_template(&templates, "index.html", context)
}

pub async fn goodbye() -> &'static str {
    random_phrase(&GOODBYES)
}
