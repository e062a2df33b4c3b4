pub mod index_registry;
pub mod schema;
pub mod validation;

pub use index_registry::{IndexRegistry, IndexScope};
pub use schema::check_shape;
pub use validation::{validate_bundle, ValidationReport};
