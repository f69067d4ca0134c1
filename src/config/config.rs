use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::{ConversionError, Result};

// 固定的轉換策略，不從輸入推算
pub const THRESHOLD: u8 = 128;
pub const FILL_COLOR: &str = "#000000";
pub const OUTPUT_BASE_NAME: &str = "convert";
pub const OUTPUT_EXTENSION: &str = ".dxf";
pub const INPUT_EXTENSION: &str = "png";
pub const TEMP_BITMAP_SUFFIX: &str = ".bmp";
pub const POTRACE_DIR: &str = "potrace";
pub const MAX_NAME_ATTEMPTS: u32 = 100_000;
pub const DIAGNOSTIC_TAIL_LINES: usize = 5;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "png_to_dxf",
    about = "將 PNG 圖片轉換為填充的 DXF 向量檔",
    long_about = "將一個或多個 PNG 檔案拖拽到程式圖示上即可轉換。\n圖片會先以固定門檻 128 轉為黑白，再交由 potrace 向量化。\nDXF 檔案儲存在與原 PNG 相同的目錄下，檔名為 convert.dxf，若已存在則自動加上數字編號。"
)]
pub struct Cli {
    /// 要轉換的 PNG 檔案
    pub inputs: Vec<PathBuf>,
    /// 指定 potrace 執行檔路徑（預設為程式目錄下的 potrace/potrace）
    #[arg(long)]
    pub potrace: Option<PathBuf>,
    /// 將所有 DXF 輸出至此目錄，而非各 PNG 所在目錄
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    #[arg(long, default_value = "warn", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    /// 結束前不等待 Enter
    #[arg(long, default_value_t = false)]
    pub no_pause: bool,
    /// 有任何檔案失敗時以狀態碼 1 結束
    #[arg(long, default_value_t = false)]
    pub strict_exit: bool,
}

pub fn validate_input_path(input: &Path) -> Result<&Path> {
    if !input.exists() {
        return Err(ConversionError::InputNotFound(input.to_path_buf()));
    }
    Ok(input)
}

pub fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(INPUT_EXTENSION))
        .unwrap_or(false)
}

pub fn validate_input_format(input: &Path) -> Result<&Path> {
    if !has_input_extension(input) {
        return Err(ConversionError::InputFormat(input.to_path_buf()));
    }
    Ok(input)
}

// 存在性先於格式檢查，兩者都在解碼之前完成
pub fn validate_input(input: &Path) -> Result<&Path> {
    validate_input_path(input)?;
    validate_input_format(input)
}
