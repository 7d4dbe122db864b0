//! # calc 子命令 CLI 定义
//!
//! 单次计算：四个测量值以文本形式接收，解析规则与窗口输入框一致。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calc.rs`

use super::BoundArgs;
use clap::Args;

/// calc 子命令参数
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Excitation wavelength (nm)
    #[arg(short, long, allow_hyphen_values = true)]
    pub wavelength: String,

    /// Molar extinction coefficient (M⁻¹cm⁻¹)
    #[arg(short, long, allow_hyphen_values = true)]
    pub epsilon: String,

    /// Incident power (mW·cm⁻²)
    #[arg(short, long, allow_hyphen_values = true)]
    pub power: String,

    /// t90 time constant
    #[arg(short, long, allow_hyphen_values = true)]
    pub t90: String,

    #[command(flatten)]
    pub bound: BoundArgs,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print only the displayed value
    #[arg(short, long, default_value_t = false, conflicts_with = "json")]
    pub quiet: bool,

    /// Copy the displayed value to the system clipboard
    #[arg(long, default_value_t = false)]
    pub copy: bool,
}
