pub mod content_field;

pub use content_field::ContentField;
