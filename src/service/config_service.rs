use std::io;
use std::path::{Path, PathBuf};
use crate::config::config::POTRACE_DIR;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

/// potrace 隨程式一起發佈，位於 `<search_root>/potrace/potrace[.exe]`
pub fn default_potrace_path(search_root: &Path) -> PathBuf {
    search_root
        .join(POTRACE_DIR)
        .join(format!("potrace{}", std::env::consts::EXE_SUFFIX))
}

// 預設配置適配器（拖拽檔案時使用）
pub struct DefaultConfigAdapter {
    inputs: Vec<PathBuf>,
    search_root: PathBuf,
}

impl DefaultConfigAdapter {
    pub fn new(inputs: Vec<PathBuf>, search_root: PathBuf) -> Self {
        DefaultConfigAdapter { inputs, search_root }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            inputs: self.inputs.clone(),
            potrace_path: default_potrace_path(&self.search_root),
            output_dir: None, // 與輸入同目錄
            no_progress: false,
            pause_on_exit: true,
            strict_exit: false,
        })
    }
}
