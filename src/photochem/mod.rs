//! # 光化学计算模块
//!
//! 提供量子产率计算功能。
//!
//! ## 子模块
//! - `constants`: 物理常数
//! - `evaluator`: 量子产率公式
//! - `parse`: 数值输入解析
//! - `references`: 说明文字与参考文献
//!
//! ## 依赖关系
//! - 被 `shell/`, `gui/` 和 `commands/` 使用
//! - 使用 `models/quantum_yield.rs`

pub mod constants;
pub mod evaluator;
pub mod parse;
pub mod references;

pub use evaluator::{BoundPolicy, QuantumYieldEvaluator};
pub use parse::parse_input;
pub use references::Reference;
