use validator::ValidationErrors;

use crate::data::models::DictionaryError;

impl From<ValidationErrors> for DictionaryError {
    fn from(err: ValidationErrors) -> Self {
        DictionaryError::Validation(err.to_string())
    }
}
