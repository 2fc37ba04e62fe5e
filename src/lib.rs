pub mod io;
pub mod observability;
pub mod pantry_spec;
pub mod render;
