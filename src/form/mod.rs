//! Contact form model: fields, values, validation, and the state holder.
//!
//! The model has no knowledge of the terminal. The `ui` module renders a
//! [`ContactForm`] and the `input` module translates terminal events into
//! calls on it.

mod field;
mod state;
pub mod validation;
mod values;

pub use field::Field;
pub use state::{ContactForm, Focus, FormPhase, SubmitOutcome};
pub use validation::{FormErrors, ValidationError};
pub use values::{FormValues, SubmittedValues};
