use std::fs;
use std::path::Path;
use std::process::Command;
use log::{info, warn};
use regex::RegexSet;
use crate::config::config::DIAGNOSTIC_TAIL_LINES;
use crate::error::{ConversionError, Result};
use crate::models::vectorize::{VectorizeInput, VectorizeOutput};
use crate::service::traits::i_service::VectorizeServiceTrait;
use crate::utils::utils::tail_lines;

// shell 回報「找不到指令」時常見的返回碼
const COMMAND_NOT_FOUND_CODE: i32 = 127;

fn not_found_signatures() -> RegexSet {
    RegexSet::new([
        r"(?i)no such file or directory",
        r"(?i)not found",
        r"(?i)is not recognized as an internal or external command",
        r"不是內部或外部命令",
        r"不是内部或外部命令",
    ])
    .unwrap_or_else(|e| {
        warn!("無效的錯誤特徵模式: {}，使用空集作為回退", e);
        RegexSet::empty()
    })
}

pub struct PotraceService {
    not_found: RegexSet,
}

impl PotraceService {
    pub fn new() -> Self {
        PotraceService {
            not_found: not_found_signatures(),
        }
    }

    fn looks_like_missing_executable(&self, code: i32, stderr: &str) -> bool {
        code == COMMAND_NOT_FOUND_CODE || self.not_found.is_match(stderr)
    }
}

impl Default for PotraceService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_command(input: &VectorizeInput) -> Command {
    let mut cmd = Command::new(&input.executable);
    cmd.args(["-b", "dxf", "-o"])
        .arg(&input.output_path)
        .args(["--fillcolor", input.fill_color.as_str(), "--"])
        .arg(&input.bitmap_path);
    cmd
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

impl VectorizeServiceTrait for PotraceService {
    fn vectorize(&self, input: VectorizeInput) -> Result<VectorizeOutput> {
        ensure_parent_dir(&input.output_path)?;

        let mut cmd = build_command(&input);
        info!("執行向量化：{:?}", cmd);
        let output = cmd.output().map_err(|e| ConversionError::ExecutableNotFound {
            path: input.executable.clone(),
            code: None,
            diagnostics: vec![e.to_string()],
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            info!("potrace 輸出：{}", stdout.trim());
        }

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let diagnostics = tail_lines(&stderr, DIAGNOSTIC_TAIL_LINES);
            if self.looks_like_missing_executable(code, &stderr) {
                return Err(ConversionError::ExecutableNotFound {
                    path: input.executable.clone(),
                    code: Some(code),
                    diagnostics,
                });
            }
            return Err(ConversionError::Vectorize { code, diagnostics });
        }

        let warnings: Vec<String> = stderr
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect();
        for line in &warnings {
            warn!("potrace 警告：{}", line);
        }
        Ok(VectorizeOutput { warnings })
    }
}
