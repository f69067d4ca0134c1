use crate::error::Result;
use crate::models::image::{BinarizeInput, BinarizeOutput};
use crate::models::vectorize::{VectorizeInput, VectorizeOutput};

// Image 服務接口，負責黑白化
pub trait ImageServiceTrait {
    /// 載入圖片並轉為黑白點陣圖
    /// # 參數
    /// - input: 輸入圖片路徑與門檻值
    /// # 回傳
    /// - 成功時返回暫存點陣圖（丟棄時自動刪除），失敗時返回轉換錯誤
    fn binarize(&self, input: BinarizeInput) -> Result<BinarizeOutput>;
}

// Vectorize 服務接口，負責呼叫外部向量化工具
pub trait VectorizeServiceTrait {
    /// 將點陣圖向量化為 DXF
    /// # 參數
    /// - input: 點陣圖、輸出路徑、執行檔與填充色
    /// # 回傳
    /// - 成功時返回工具的警告訊息，返回碼非 0 時返回轉換錯誤
    fn vectorize(&self, input: VectorizeInput) -> Result<VectorizeOutput>;
}
