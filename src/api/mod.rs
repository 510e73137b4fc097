pub mod endpoint;
pub mod registrar;
pub mod schema;
