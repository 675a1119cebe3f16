pub use crate::cli::{command::Command, run::run_app};
pub use crate::domain::{
    handlers::{self, normalize, CommandError, UNIVERSAL_ERROR_MESSAGE},
    Contact, ContactStore,
};
pub use crate::errors::AppError;
pub use crate::parser::parse_input;
