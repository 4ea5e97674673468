//! Domain layer

pub mod value_objects;
pub mod draft;
pub mod feedback;
