//! # 统一错误处理模块
//!
//! 定义 qycalc 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 量子产率结果校验失败
///
/// `Display` 输出不带 `Error: ` 前缀，前缀由展示层统一添加。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Quantum yield cannot be negative. Maybe check your units?")]
    Negative,

    #[error("Quantum yield cannot be greater than 1. Maybe check your units?")]
    AboveUnity,

    #[error("Quantum yield is undefined for these inputs. Maybe check for zero values?")]
    Undefined,
}

/// qycalc 统一错误类型
#[derive(Error, Debug)]
pub enum QyError {
    // ─────────────────────────────────────────────────────────────
    // 计算错误
    // ─────────────────────────────────────────────────────────────
    /// 任一输入无法解析为实数（不区分具体字段）
    #[error("Invalid Input")]
    InvalidInput,

    #[error("Error: {0}")]
    Validation(#[from] ValidationFailure),

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read from terminal")]
    TerminalError(#[source] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Window error: {0}")]
    GuiError(String),
}

impl QyError {
    /// 是否为计算本身的错误（解析或校验失败）
    ///
    /// 这类错误的 `Display` 就是结果框里应显示的文字。
    pub fn is_calculation_error(&self) -> bool {
        matches!(self, QyError::InvalidInput | QyError::Validation(_))
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, QyError>;
