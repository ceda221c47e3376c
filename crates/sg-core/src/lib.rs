pub mod error;
pub mod types;
pub mod value;

pub use error::ScriptGuardError;
pub use types::*;
pub use value::*;
