//! # refs 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/refs.rs`

use crate::photochem::Reference;
use clap::Args;

/// refs 子命令参数
#[derive(Args, Debug)]
pub struct RefsArgs {
    /// Open one of the cited papers in the default web browser
    #[arg(long, value_enum)]
    pub open: Option<Reference>,
}
