//! DTO modules that bridge services with templates.

pub mod editor;
pub mod landing;
pub mod properties;
