use axum::response::Html;
use rand::seq::SliceRandom;
use tera::{Context, Tera};

pub fn render_template(tera: &Tera, template_name: &str, context: Context) -> Html<String> {
    Html(tera.render(template_name, &context).unwrap_or_else(|e| {
        log::error!("Failed to render {}: {}", template_name, e);
        format!("Error rendering template: {}", template_name)
    }))
}

pub fn render_message(tera: &Tera, message: &str) -> Html<String> {
    let mut context = Context::new();
    context.insert("message", message);
    render_template(tera, "success.html", context)
}

pub fn random_phrase(phrases: &[&'static str]) -> &'static str {
    phrases
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

/// Path of the definitions page for `word`, percent-encoded.
pub fn definitions_path(word: &str) -> String {
    match url::Url::parse("http://localhost/definitions/") {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push(word);
            }
            url.path().to_string()
        }
        Err(_) => format!("/definitions/{}", word),
    }
}
