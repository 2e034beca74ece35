pub mod types;

pub use types::Viewport;
