use std::path::{Path, PathBuf};
use log::info;
use crate::config::config::{MAX_NAME_ATTEMPTS, TEMP_BITMAP_SUFFIX};
use crate::error::{ConversionError, Result};
use crate::utils::utils::generate_uniqueness_token;

/// 回傳目錄中尚不存在的檔案路徑：先試 `base_name + extension`，
/// 已存在則依序試 `base_name1`、`base_name2`… 。只查詢，不建立檔案。
///
/// # 參數
/// - directory: 目標目錄，空路徑代表目前工作目錄
/// - base_name: 檔名主體，例如 `convert`
/// - extension: 含前導點的副檔名，例如 `.dxf`
pub fn resolve_unique_path(directory: &Path, base_name: &str, extension: &str) -> Result<PathBuf> {
    let candidate = directory.join(format!("{}{}", base_name, extension));
    if !candidate.exists() {
        return Ok(candidate);
    }

    for counter in 1..=MAX_NAME_ATTEMPTS {
        let candidate = directory.join(format!("{}{}{}", base_name, counter, extension));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(ConversionError::PathExhausted {
        directory: directory.to_path_buf(),
        base_name: base_name.to_string(),
        attempts: MAX_NAME_ATTEMPTS,
    })
}

pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string())
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

// 暫存點陣圖放在輸入檔旁，避免跨檔案系統或權限問題
pub fn temp_bitmap_path(input_path: &Path) -> Result<PathBuf> {
    let dir = input_path.parent().unwrap_or_else(|| Path::new(""));
    let stem = file_stem(input_path);
    for _ in 0..MAX_NAME_ATTEMPTS {
        let candidate = dir.join(format!(
            "{}_temp_{}{}",
            stem,
            generate_uniqueness_token(),
            TEMP_BITMAP_SUFFIX
        ));
        if !candidate.exists() {
            info!("暫存檔：{}", candidate.display());
            return Ok(candidate);
        }
    }
    Err(ConversionError::PathExhausted {
        directory: dir.to_path_buf(),
        base_name: format!("{}_temp_", stem),
        attempts: MAX_NAME_ATTEMPTS,
    })
}
