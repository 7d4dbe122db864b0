//! # 展示层外壳
//!
//! 与具体界面工具包无关的表单状态和三个用户动作：
//! 计算、复制结果、打开参考文献。
//!
//! ## 依赖关系
//! - 被 `gui/` 和 `commands/` 使用
//! - 使用 `photochem/` 进行解析和计算
//! - 子模块: form

pub mod form;

pub use form::{CalculatorForm, Clipboard, LinkOpener};
