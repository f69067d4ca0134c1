use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

// 單一檔案轉換過程中可能發生的錯誤，全部在批次層級回收
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("輸入檔案未找到：'{}'", .0.display())]
    InputNotFound(PathBuf),

    #[error("檔案 '{}' 不是 PNG 格式，已跳過", .0.display())]
    InputFormat(PathBuf),

    #[error("無法載入圖片 '{}'：{source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("無法寫入暫存點陣圖 '{}'：{source}", .path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "未找到 potrace 執行檔 '{}'{}。請確認已安裝 potrace，並放在程式目錄下的 potrace 資料夾，或以 --potrace 指定路徑",
        .path.display(),
        .code.map(|c| format!("（返回碼 {}）", c)).unwrap_or_default()
    )]
    ExecutableNotFound {
        path: PathBuf,
        // 無法啟動程序時沒有返回碼
        code: Option<i32>,
        diagnostics: Vec<String>,
    },

    #[error("執行 potrace 失敗（返回碼 {code}）")]
    Vectorize { code: i32, diagnostics: Vec<String> },

    #[error(
        "在 '{}' 中嘗試 {attempts} 次後仍無法為 '{base_name}' 產生不重複的檔名",
        .directory.display()
    )]
    PathExhausted {
        directory: PathBuf,
        base_name: String,
        attempts: u32,
    },

    #[error("處理檔案時發生意外錯誤：{0}")]
    Unexpected(#[from] io::Error),
}

impl ConversionError {
    /// 外部工具留下的診斷訊息（僅 potrace 相關錯誤有）
    pub fn diagnostics(&self) -> &[String] {
        match self {
            ConversionError::ExecutableNotFound { diagnostics, .. }
            | ConversionError::Vectorize { diagnostics, .. } => diagnostics,
            _ => &[],
        }
    }
}
