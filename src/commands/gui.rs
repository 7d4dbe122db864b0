//! # gui 命令实现
//!
//! 启动 eframe 窗口。
//!
//! ## 依赖关系
//! - 使用 `cli/gui.rs` 定义的 GuiArgs
//! - 使用 `gui/` 模块

use crate::cli::gui::GuiArgs;
use crate::error::Result;
use crate::gui;
use crate::photochem::BoundPolicy;

/// 执行 gui 命令
pub fn execute(args: GuiArgs) -> Result<()> {
    gui::run(BoundPolicy::from_strict(args.bound.strict))
}
