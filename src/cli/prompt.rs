//! # prompt 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/prompt.rs`

use super::BoundArgs;
use clap::Args;

/// prompt 子命令参数
#[derive(Args, Debug)]
pub struct PromptArgs {
    #[command(flatten)]
    pub bound: BoundArgs,

    /// Copy the result to the system clipboard when done
    #[arg(long, default_value_t = false)]
    pub copy: bool,
}
