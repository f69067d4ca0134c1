use std::path::PathBuf;
use crate::models::bitmap::TemporaryBitmap;

#[derive(Clone, Debug)]
pub struct BinarizeInput {
    pub input_path: PathBuf,
    pub threshold: u8,
}

#[derive(Debug)]
pub struct BinarizeOutput {
    pub bitmap: TemporaryBitmap,
    pub width: u32,
    pub height: u32,
}
