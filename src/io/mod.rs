//! I/O layer: decoding the source collage (`reader`) and encoding the
//! cropped halves (`writers`).
pub mod reader;
pub use reader::open_collage;

pub mod writers;
pub use writers::save_image;
