//! # 数据模型模块
//!
//! 定义量子产率计算的输入和结果数据模型。
//!
//! ## 依赖关系
//! - 被 `photochem/`, `shell/` 和 `commands/` 使用
//! - 子模块: quantum_yield

pub mod quantum_yield;

pub use quantum_yield::{QuantumYieldInput, QuantumYieldResult};
