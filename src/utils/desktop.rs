//! # 系统剪贴板与默认浏览器
//!
//! 终端模式下通过平台自带的外部命令完成复制和打开链接；
//! 窗口模式由 egui 自己处理，不经过这里。
//!
//! ## 依赖关系
//! - 被 `commands/calc.rs`, `commands/prompt.rs`, `commands/refs.rs` 使用
//! - 实现 `shell/form.rs` 的 `Clipboard` / `LinkOpener`

use crate::error::{QyError, Result};
use crate::shell::{Clipboard, LinkOpener};

use std::io::{ErrorKind, Write};
use std::process::{Child, Command, Stdio};

/// 外部命令及其固定参数
#[derive(Debug, Clone, Copy)]
struct ExternalTool {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const CLIPBOARD_TOOLS: &[ExternalTool] = &[ExternalTool {
    program: "pbcopy",
    args: &[],
}];

#[cfg(windows)]
const CLIPBOARD_TOOLS: &[ExternalTool] = &[ExternalTool {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", windows)))]
const CLIPBOARD_TOOLS: &[ExternalTool] = &[
    ExternalTool {
        program: "wl-copy",
        args: &[],
    },
    ExternalTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ExternalTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

#[cfg(target_os = "macos")]
const BROWSER_TOOL: ExternalTool = ExternalTool {
    program: "open",
    args: &[],
};

#[cfg(windows)]
const BROWSER_TOOL: ExternalTool = ExternalTool {
    program: "cmd",
    args: &["/C", "start", ""],
};

#[cfg(not(any(target_os = "macos", windows)))]
const BROWSER_TOOL: ExternalTool = ExternalTool {
    program: "xdg-open",
    args: &[],
};

/// 系统剪贴板（依次尝试可用的复制命令）
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        for tool in CLIPBOARD_TOOLS {
            match pipe_to(tool, text) {
                Err(QyError::CommandNotFound { .. }) => continue,
                other => return other,
            }
        }
        Err(QyError::CommandNotFound {
            command: CLIPBOARD_TOOLS
                .iter()
                .map(|t| t.program)
                .collect::<Vec<_>>()
                .join(" / "),
        })
    }
}

/// 系统默认浏览器
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<()> {
        launch(&BROWSER_TOOL, url)
    }
}

/// 启动外部命令
///
/// stdout/stderr 不能接管道：xclip、浏览器会留下持有管道的后台进程。
fn spawn_detached(tool: &ExternalTool, extra: Option<&str>, stdin: Stdio) -> Result<Child> {
    let mut command = Command::new(tool.program);
    command.args(tool.args);
    if let Some(arg) = extra {
        command.arg(arg);
    }
    command
        .stdin(stdin)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => QyError::CommandNotFound {
                command: tool.program.to_string(),
            },
            _ => QyError::CommandFailed {
                command: tool.program.to_string(),
                stderr: e.to_string(),
            },
        })
}

/// 等待命令本身退出（不等待其派生的后台进程）
fn wait_success(tool: &ExternalTool, mut child: Child) -> Result<()> {
    let status = child.wait().map_err(|e| QyError::CommandFailed {
        command: tool.program.to_string(),
        stderr: e.to_string(),
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(QyError::CommandFailed {
            command: tool.program.to_string(),
            stderr: format!("exited with {}", status),
        })
    }
}

/// 以 URL 为最后一个参数调用打开命令
fn launch(tool: &ExternalTool, url: &str) -> Result<()> {
    let child = spawn_detached(tool, Some(url), Stdio::null())?;
    wait_success(tool, child)
}

/// 把文本写入外部命令的 stdin
fn pipe_to(tool: &ExternalTool, text: &str) -> Result<()> {
    let mut child = spawn_detached(tool, None, Stdio::piped())?;

    // stdin 在块结束时关闭，命令才能读到 EOF
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| QyError::CommandFailed {
                command: tool.program.to_string(),
                stderr: e.to_string(),
            })?;
    }

    wait_success(tool, child)
}
