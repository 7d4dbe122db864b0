//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `shell/`, `photochem/`, `gui/`, `utils/`
//! - 子模块: calc, gui, prompt, refs

pub mod calc;
pub mod gui;
pub mod prompt;
pub mod refs;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Gui(args) => gui::execute(args),
        Commands::Calc(args) => calc::execute(args),
        Commands::Prompt(args) => prompt::execute(args),
        Commands::Refs(args) => refs::execute(args),
    }
}
