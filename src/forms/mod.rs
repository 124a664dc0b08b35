//! Form values, touched flags and validation shared by every editor dialog

pub mod state;
pub mod validate;

pub use state::{FieldErrors, FieldKind, FieldSpec, FormModel, FormState};
pub use validate::Rules;
