use dialoguer::Input;

pub fn print_usage() {
    println!("請將一個或多個 PNG 檔案拖拽到此程式圖示上進行轉換。");
    println!("\n程式會自動將轉換後的 DXF 檔案儲存在與原 PNG 檔案相同的目錄下，");
    println!("檔名為 convert.dxf，如果已存在則自動加上數字編號。");
    println!("\n也可從命令列執行：png_to_dxf [選項] <PNG 檔案>...，使用 --help 查看所有選項。");
}

pub fn print_dxf_reminder() {
    println!("\n提醒：產生的 DXF 檔案需要使用 CAD 軟體（如 AutoCAD）或");
    println!("專用轉換器（如 ODA File Converter）來檢視或轉換為 DWG 檔案。");
}

// 拖拽啟動時視窗會在程式結束後立即關閉，先等使用者確認
pub fn pause_before_exit() {
    let result = Input::<String>::new()
        .with_prompt("按 Enter 鍵退出")
        .allow_empty(true)
        .interact_text();
    if let Err(e) = result {
        log::debug!("略過等待輸入：{}", e);
    }
}
