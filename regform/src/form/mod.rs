pub(crate) mod data;
mod errors;
mod field;
mod registry;

pub use data::{FormData, FormInput};
pub use errors::{FieldError, FieldErrorKind, FieldErrors};
pub use field::FieldName;
pub use registry::{FieldRegistry, MemoryFieldRegistry};
