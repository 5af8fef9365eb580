pub mod chunk;
pub mod outline;
pub mod page;
pub mod token_estimate;

pub use chunk::{Chunk, ChunkSet};
pub use outline::{OutlineEntry, TitlePath};
pub use page::Page;
