mod image_io;
mod pdf;
mod types;

pub use image_io::{load_image, open_image};
pub use pdf::{render_pdf_bytes, save_pdf, write_pdf};
pub use types::*;
