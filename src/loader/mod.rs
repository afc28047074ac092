pub mod sample_loader;

pub use sample_loader::{decode, decode_file};
