pub mod catfact;
pub mod source;

pub use catfact::{CatFactClient, DEFAULT_FACT_BASE_URL};
pub use source::{FactError, FactSource};
