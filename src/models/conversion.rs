use std::path::{Path, PathBuf};
use crate::error::ConversionError;

#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
}

impl ConversionRequest {
    /// 未指定輸出目錄時，DXF 與輸入檔放在同一目錄
    pub fn new(input_path: &Path, output_dir: Option<&Path>) -> Self {
        let output_dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input_path.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        ConversionRequest {
            input_path: input_path.to_path_buf(),
            output_dir,
        }
    }
}

#[derive(Debug)]
pub struct ConversionResult {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub error: Option<ConversionError>,
    pub warnings: Vec<String>,
}

impl ConversionResult {
    pub fn succeeded(request: &ConversionRequest, output_path: PathBuf, warnings: Vec<String>) -> Self {
        ConversionResult {
            input_path: request.input_path.clone(),
            output_path: Some(output_path),
            error: None,
            warnings,
        }
    }

    pub fn failed(request: &ConversionRequest, output_path: Option<PathBuf>, error: ConversionError) -> Self {
        ConversionResult {
            input_path: request.input_path.clone(),
            output_path,
            error: Some(error),
            warnings: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub success_count: usize,
    pub fail_count: usize,
}

impl BatchSummary {
    pub fn record(&mut self, result: &ConversionResult) {
        if result.is_success() {
            self.success_count += 1;
        } else {
            self.fail_count += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.success_count + self.fail_count
    }
}
