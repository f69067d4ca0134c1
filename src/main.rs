use std::io;
use std::path::PathBuf;

use png_to_dxf::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    // potrace 隨程式發佈，以執行檔所在目錄為搜尋根目錄
    let search_root = std::env::current_exe()?
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();
    let code = process_args(args, &search_root)?;
    log::info!("程式執行完成，結束狀態碼：{}", code);
    std::process::exit(code);
}
