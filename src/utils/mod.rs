//! # 工具函数模块
//!
//! 提供美化输出、系统剪贴板和浏览器调用等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, desktop

pub mod desktop;
pub mod output;
