pub mod dictionary_models;
pub mod error_models;
pub mod form_models;
pub mod search_models;

pub use dictionary_models::{Entry, Table};
pub use error_models::{DictionaryError, Result};
pub use form_models::{
    AddDefinitionForm, AddSynonymsForm, AddSynonymsRequest, AddWordForm,
    AppendDefinitionRequest, CreateWordRequest, SearchForm,
};
pub use search_models::{ApiResponse, SearchParams, SearchResult, WordView};
