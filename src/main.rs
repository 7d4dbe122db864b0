//! # qycalc - 光化学量子产率计算器
//!
//! 由激发波长、消光系数、入射功率和 t90 估算一级光反应的量子产率 Φ。
//!
//! ## 子命令
//! - `gui`    - 计算器窗口（默认）
//! - `calc`   - 单次计算
//! - `prompt` - 终端交互式表单
//! - `refs`   - 说明文字与参考文献
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── gui/       (eframe 窗口)
//!   │     ├── shell/     (表单状态与用户动作)
//!   │     ├── photochem/ (解析与计算)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod gui;
mod models;
mod photochem;
mod shell;
mod utils;

use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let command = Cli::resolve();

    if let Err(e) = commands::run(command) {
        // 计算错误的文字已作为结果输出，这里只设置退出码
        if !e.is_calculation_error() {
            utils::output::print_error(&format!("{}", e));
        }
        std::process::exit(1);
    }
}
