//! # gui 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/gui.rs`

use super::BoundArgs;
use clap::Args;

/// gui 子命令参数
#[derive(Args, Debug)]
pub struct GuiArgs {
    #[command(flatten)]
    pub bound: BoundArgs,
}
