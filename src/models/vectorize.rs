use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct VectorizeInput {
    pub bitmap_path: PathBuf,
    pub output_path: PathBuf,
    pub executable: PathBuf,
    pub fill_color: String,
}

#[derive(Debug, Default)]
pub struct VectorizeOutput {
    // 返回碼為 0 時 potrace 仍可能輸出警告
    pub warnings: Vec<String>,
}
