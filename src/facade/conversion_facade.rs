use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::config::config::{validate_input, FILL_COLOR, OUTPUT_BASE_NAME, OUTPUT_EXTENSION, THRESHOLD};
use crate::config::ports::AppConfig;
use crate::error::Result;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{BatchSummary, ConversionRequest, ConversionResult};
use crate::models::image::BinarizeInput;
use crate::models::vectorize::VectorizeInput;
use crate::service::traits::i_service::{ImageServiceTrait, VectorizeServiceTrait};
use crate::utils::file::{file_name, resolve_unique_path};
use crate::utils::utils::create_progress_bar;

const SEPARATOR: &str = "------------------------------";

pub struct ConversionFacade {
    config: AppConfig,
    image_service: Box<dyn ImageServiceTrait>,
    vectorize_service: Box<dyn VectorizeServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        config: AppConfig,
        image_service: Box<dyn ImageServiceTrait>,
        vectorize_service: Box<dyn VectorizeServiceTrait>,
    ) -> Self {
        ConversionFacade {
            config,
            image_service,
            vectorize_service,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn run_batch(&self, inputs: &[PathBuf]) -> BatchSummary {
        let total = inputs.len();
        info!("開始批次處理 {} 個檔案，potrace：{}", total, self.config.potrace_path.display());
        let pm = create_progress_bar(total as u64, self.config.no_progress);
        let mut summary = BatchSummary::default();

        for (index, input_path) in inputs.iter().enumerate() {
            pm.update(index as u64, &format!("處理檔案 {}/{}：{}", index + 1, total, file_name(input_path)));
            pm.suspend(|| print_header(input_path));

            let request = ConversionRequest::new(input_path, self.config.output_dir.as_deref());
            let result = self.convert(&request);
            pm.suspend(|| print_report(&result));
            summary.record(&result);
        }

        pm.update(total as u64, "處理完成");
        pm.finish(summary.success_count, summary.fail_count);
        print_summary(&summary);
        summary
    }

    fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        let resolved = validate_input(&request.input_path)
            .and_then(|_| resolve_unique_path(&request.output_dir, OUTPUT_BASE_NAME, OUTPUT_EXTENSION));
        let output_path = match resolved {
            Ok(path) => path,
            Err(e) => {
                debug!("處理檔案 {} 失敗: {}", request.input_path.display(), e);
                return ConversionResult::failed(request, None, e);
            }
        };

        match self.binarize_and_vectorize(&request.input_path, &output_path) {
            Ok(warnings) => ConversionResult::succeeded(request, output_path, warnings),
            Err(e) => {
                debug!("處理檔案 {} 失敗: {}", request.input_path.display(), e);
                ConversionResult::failed(request, Some(output_path), e)
            }
        }
    }
}

impl ConversionFacade {
    // 暫存點陣圖在此函式結束時丟棄，不論向量化結果
    fn binarize_and_vectorize(&self, input_path: &Path, output_path: &Path) -> Result<Vec<String>> {
        let binarized = self.image_service.binarize(BinarizeInput {
            input_path: input_path.to_path_buf(),
            threshold: THRESHOLD,
        })?;

        let vectorized = self.vectorize_service.vectorize(VectorizeInput {
            bitmap_path: binarized.bitmap.path().to_path_buf(),
            output_path: output_path.to_path_buf(),
            executable: self.config.potrace_path.clone(),
            fill_color: FILL_COLOR.to_string(),
        })?;
        Ok(vectorized.warnings)
    }
}

fn print_header(input_path: &Path) {
    println!("\n開始處理: {}", file_name(input_path));
    println!("  輸入: {}", input_path.display());
}

fn print_report(result: &ConversionResult) {
    if let Some(output_path) = &result.output_path {
        println!("  輸出 DXF: {}", output_path.display());
    }
    match &result.error {
        None => {
            if !result.warnings.is_empty() {
                println!("  Potrace 警告信息:");
                println!("  {}", result.warnings.join("\n  "));
            }
            let output_name = result.output_path.as_deref().map(file_name).unwrap_or_default();
            println!("成功轉換: {} -> {}", file_name(&result.input_path), output_name);
        }
        Some(e) => {
            println!("  錯誤: {}", e);
            let diagnostics = e.diagnostics();
            if !diagnostics.is_empty() {
                println!("  Potrace 輸出:");
                println!("  {}", diagnostics.join("\n  "));
            }
            println!("轉換失敗: {}", file_name(&result.input_path));
        }
    }
    println!("{}", SEPARATOR);
}

fn print_summary(summary: &BatchSummary) {
    println!("\n批次處理完成。");
    println!(
        "總計: {} 個檔案成功轉換, {} 個檔案失敗。",
        summary.success_count, summary.fail_count
    );
}
