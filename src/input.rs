pub mod discover;
pub mod input_render;
mod input_state;
pub mod loader;
mod source;

pub use discover::{Discovery, discover};
pub use input_state::InputState;
pub use loader::{LoadResult, load_all, load_source};
pub use source::Source;
