use std::path::PathBuf;
use crate::models::conversion::{BatchSummary, ConversionRequest, ConversionResult};

// Facade 接口，負責協調批次轉換流程
pub trait ConversionFacadeTrait {
    /// 依序轉換所有輸入，單一檔案失敗不會中斷批次
    /// # 參數
    /// - inputs: 使用者提供的檔案路徑，依原順序處理
    /// # 回傳
    /// - 成功與失敗的計數，兩者相加等於輸入數量
    fn run_batch(&self, inputs: &[PathBuf]) -> BatchSummary;

    /// 轉換單一檔案，暫存點陣圖在返回前已刪除
    fn convert(&self, request: &ConversionRequest) -> ConversionResult;
}
