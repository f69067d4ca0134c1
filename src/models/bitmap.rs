use std::fs;
use std::path::{Path, PathBuf};
use log::{info, warn};

/// 單次轉換專用的暫存點陣圖。
///
/// 檔案在值被丟棄時刪除，不論轉換成功與否；刪除失敗只記錄警告。
#[derive(Debug)]
pub struct TemporaryBitmap {
    path: PathBuf,
}

impl TemporaryBitmap {
    pub fn new(path: PathBuf) -> Self {
        TemporaryBitmap { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TemporaryBitmap {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => info!("已刪除暫存檔：{}", self.path.display()),
            Err(e) => warn!("無法刪除暫存檔 {}：{}", self.path.display(), e),
        }
    }
}
