//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `gui`: 打开计算器窗口（无子命令时的默认行为）
//! - `calc`: 单次计算
//! - `prompt`: 终端交互式表单
//! - `refs`: 说明文字与参考文献
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: calc, gui, prompt, refs

pub mod calc;
pub mod gui;
pub mod prompt;
pub mod refs;

use clap::{Args, CommandFactory, Parser, Subcommand};
use std::ffi::OsString;

/// qycalc - 光化学量子产率计算器
#[derive(Parser)]
#[command(name = "qycalc")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Quantum yield calculator for first-order photoreactions", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Open the calculator window (default)
    Gui(gui::GuiArgs),

    /// Calculate a quantum yield from four measurements
    Calc(calc::CalcArgs),

    /// Enter the four measurements interactively in the terminal
    Prompt(prompt::PromptArgs),

    /// Show the derivation and open the cited papers
    Refs(refs::RefsArgs),
}

impl Cli {
    /// 解析命令行并给出要执行的子命令
    ///
    /// 没有子命令时按 `<bin> gui` 重新解析，`gui` 的参数（含 `QYCALC_STRICT`）
    /// 仍由 clap 填充。
    pub fn try_resolve_from<I, T>(args: I) -> clap::error::Result<Commands>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if let Some(command) = Cli::try_parse_from(args.iter().cloned())?.command {
            return Ok(command);
        }

        let bin = args.first().cloned().unwrap_or_else(|| OsString::from("qycalc"));
        match Cli::try_parse_from([bin, OsString::from("gui")])?.command {
            Some(command) => Ok(command),
            None => Err(Cli::command().error(
                clap::error::ErrorKind::MissingSubcommand,
                "no subcommand given",
            )),
        }
    }

    /// 解析进程参数，出错时由 clap 打印帮助/错误并退出
    pub fn resolve() -> Commands {
        Self::try_resolve_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }
}

/// Φ 上限相关的公共参数
#[derive(Args, Debug, Clone, Copy)]
pub struct BoundArgs {
    /// Also reject quantum yields greater than 1
    #[arg(long, env = "QYCALC_STRICT", default_value_t = false)]
    pub strict: bool,
}
