pub mod widget;

pub use widget::{EditorWidget, InMemoryWidget};
