//! # 物理常数
//!
//! 量子产率公式中固定使用的常数。数值精度与历史计算结果保持一致，
//! 不要替换为 CODATA 最新值（c 和 N_A 均为截断值）。

/// Planck 常数 (J·s)
pub const PLANCK: f64 = 6.62607015e-34;

/// 光速 (m/s)
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Avogadro 常数 (mol⁻¹)
pub const AVOGADRO: f64 = 6.022e23;

/// nm -> m
pub const NM_TO_M: f64 = 1e-9;

/// mW -> W 的除数
pub const MILLI: f64 = 1000.0;
