//! Form state module

mod field;
mod form_state;

pub use field::FieldId;
pub use form_state::{ContactForm, FormData};
