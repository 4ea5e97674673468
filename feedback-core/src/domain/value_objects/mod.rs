//! Value Objects module
//!
//! Closed vocabularies and validated primitives of a feedback response.

pub mod department;
pub mod language;
pub mod phone;
pub mod ratings;

pub use department::{Department, UnknownDepartment};
pub use language::{Gender, Language, UnknownCode};
pub use phone::{is_valid_phone, normalize_phone};
pub use ratings::{RatingDimension, Ratings, MAX_RATING};
