use std::io;
use std::path::PathBuf;

// 應用配置結構體，由配置適配器組裝後明確傳入批次流程
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inputs: Vec<PathBuf>,
    pub potrace_path: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub no_progress: bool,
    pub pause_on_exit: bool,
    pub strict_exit: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
