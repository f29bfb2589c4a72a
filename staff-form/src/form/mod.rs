//! Form model: fields, validation and the reducer.

mod field;
mod render;
mod state;
mod validate;

pub use field::Field;
pub use state::{FormAction, FormFields, FormMode, FormPhase, FormState};
pub use validate::{FieldErrors, is_valid_email, validate};
