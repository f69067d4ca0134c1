use std::io;
use std::path::{Path, PathBuf};
use clap::Parser;
use crate::action::interactive::{pause_before_exit, print_dxf_reminder, print_usage};
use crate::config::config::Cli;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::BatchSummary;
use crate::service::config_service::{default_potrace_path, ConfigService, DefaultConfigAdapter};
use crate::service::image::ImageService;
use crate::service::potrace::PotraceService;
use crate::utils::utils::setup_logging;

#[derive(Debug)]
pub enum Invocation {
    Usage,
    Convert(Cli),
    // 參數錯誤或 --help/--version，由 clap 產生訊息
    Rejected(clap::Error),
}

/// 沒有任何參數（例如直接雙擊程式）時只顯示用法
pub fn parse_invocation(args: Vec<String>) -> Invocation {
    if args.len() <= 1 {
        return Invocation::Usage;
    }
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return Invocation::Rejected(e),
    };
    if cli.inputs.is_empty() {
        Invocation::Usage
    } else {
        Invocation::Convert(cli)
    }
}

/// 回傳程式的結束狀態碼
pub fn process_args(args: Vec<String>, search_root: &Path) -> io::Result<i32> {
    match parse_invocation(args) {
        Invocation::Usage => {
            print_usage();
            pause_before_exit();
            Ok(0)
        }
        Invocation::Convert(cli) => process_cli_mode(cli, search_root),
        Invocation::Rejected(e) => {
            e.print()?;
            // 拖拽啟動時視窗會立即關閉，錯誤訊息需等使用者確認
            if e.use_stderr() {
                pause_before_exit();
            }
            Ok(e.exit_code())
        }
    }
}

pub fn process_cli_mode(cli: Cli, search_root: &Path) -> io::Result<i32> {
    setup_logging(&cli.log_level)?;

    // 只有路徑時使用拖拽預設值
    let is_default_config = cli.potrace.is_none()
        && cli.output_dir.is_none()
        && !cli.no_progress
        && !cli.no_pause
        && !cli.strict_exit;

    let config_port: Box<dyn ConfigPort> = if is_default_config {
        log::info!("未提供選項參數，使用預設配置");
        Box::new(DefaultConfigAdapter::new(cli.inputs.clone(), search_root.to_path_buf()))
    } else {
        Box::new(CliConfigAdapter::new(cli, search_root.to_path_buf()))
    };
    let config = ConfigService::new(config_port).get_config()?;

    println!("開始批次處理拖拽的檔案...");
    println!("將使用 Potrace: {}", config.potrace_path.display());
    println!("------------------------------");

    let facade = ConversionFacade::new(
        config,
        Box::new(ImageService::new()),
        Box::new(PotraceService::new()),
    );
    let summary = facade.run_batch(&facade.config().inputs);
    print_dxf_reminder();

    if facade.config().pause_on_exit {
        pause_before_exit();
    }
    Ok(exit_code(&summary, facade.config().strict_exit))
}

// 預設永遠回傳 0，與拖拽使用情境一致；--strict-exit 時反映失敗
pub fn exit_code(summary: &BatchSummary, strict_exit: bool) -> i32 {
    if strict_exit && summary.fail_count > 0 {
        1
    } else {
        0
    }
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
    search_root: PathBuf,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli, search_root: PathBuf) -> Self {
        CliConfigAdapter { cli, search_root }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        if let Some(dir) = &self.cli.output_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("輸出路徑 '{}' 不是目錄", dir.display()),
                ));
            }
        }

        let potrace_path = self
            .cli
            .potrace
            .clone()
            .unwrap_or_else(|| default_potrace_path(&self.search_root));

        Ok(AppConfig {
            inputs: self.cli.inputs.clone(),
            potrace_path,
            output_dir: self.cli.output_dir.clone(),
            no_progress: self.cli.no_progress,
            pause_on_exit: !self.cli.no_pause,
            strict_exit: self.cli.strict_exit,
        })
    }
}
