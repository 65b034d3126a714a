pub mod form;
pub mod values;

pub use form::{parse_form, FormInput};
pub use values::parse_number;
