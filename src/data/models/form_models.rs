use serde::Deserialize;
use validator::Validate;

// Form structs
#[derive(Debug, Deserialize, Validate)]
pub struct SearchForm {
    #[validate(length(max = 100, message = "Search term must be at most 100 characters"))]
    pub search_term: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddWordForm {
    #[validate(length(min = 1, max = 100, message = "Word must be 1 to 100 characters"))]
    pub new_word: String,
    #[validate(length(min = 1, max = 2000, message = "Definition must be 1 to 2000 characters"))]
    pub new_definition: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddDefinitionForm {
    #[validate(length(min = 1, max = 100, message = "Word must be 1 to 100 characters"))]
    pub existing_word: String,
    #[validate(length(min = 1, max = 2000, message = "Definition must be 1 to 2000 characters"))]
    pub new_definition: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddSynonymsForm {
    #[validate(length(min = 1, max = 100, message = "Word must be 1 to 100 characters"))]
    pub existing_word: String,
    #[validate(length(min = 1, max = 1000, message = "Synonym list must be 1 to 1000 characters"))]
    pub new_synonyms: String,
}

// JSON request bodies
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWordRequest {
    #[validate(length(min = 1, max = 100, message = "Word must be 1 to 100 characters"))]
    pub word: String,
    #[validate(length(min = 1, max = 2000, message = "Definition must be 1 to 2000 characters"))]
    pub definition: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AppendDefinitionRequest {
    #[validate(length(min = 1, max = 2000, message = "Definition must be 1 to 2000 characters"))]
    pub definition: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddSynonymsRequest {
    #[validate(length(min = 1, max = 1000, message = "Synonym list must be 1 to 1000 characters"))]
    pub synonyms: String,
}
