// Composition helpers shared by the route handlers
pub mod assembler;
pub mod links;

pub use assembler::build_create_payload;
