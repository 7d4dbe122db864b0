//! # 量子产率数据模型
//!
//! 单次计算的输入与结果，生命周期仅限一次“计算”操作。
//!
//! ## 依赖关系
//! - 被 `photochem/evaluator.rs` 产生和消费
//! - 被 `shell/`, `commands/` 用于展示

use serde::Serialize;

/// 量子产率计算输入
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantumYieldInput {
    /// 激发波长 (nm)
    pub wavelength_nm: f64,

    /// 摩尔消光系数 (M⁻¹cm⁻¹)
    pub epsilon: f64,

    /// 入射功率密度 (mW·cm⁻²)
    #[serde(rename = "power_mW_per_cm2")]
    pub power_mw_per_cm2: f64,

    /// t90 时间常数
    pub t90: f64,
}

impl QuantumYieldInput {
    pub fn new(wavelength_nm: f64, epsilon: f64, power_mw_per_cm2: f64, t90: f64) -> Self {
        QuantumYieldInput {
            wavelength_nm,
            epsilon,
            power_mw_per_cm2,
            t90,
        }
    }
}

/// 量子产率计算结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantumYieldResult {
    /// 量子产率 Φ（未舍入）
    pub value: f64,

    /// 单光子能量 (J)
    pub photon_energy_j: f64,

    /// 光子摩尔通量 (mol photons/s)
    pub photon_flux: f64,
}

impl QuantumYieldResult {
    /// 显示值：保留 4 位小数
    pub fn display_value(&self) -> String {
        format!("{:.4}", self.value)
    }

    /// Φ 是否超出物理上限 1
    pub fn exceeds_unity(&self) -> bool {
        self.value > 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(value: f64) -> QuantumYieldResult {
        QuantumYieldResult {
            value,
            photon_energy_j: 0.0,
            photon_flux: 0.0,
        }
    }

    #[test]
    fn test_display_value_four_decimals() {
        assert_eq!(result(0.029557181069111114).display_value(), "0.0296");
        assert_eq!(result(2.957e-5).display_value(), "0.0000");
        assert_eq!(result(2250.123746802631).display_value(), "2250.1237");
        assert_eq!(result(1.0).display_value(), "1.0000");
    }

    #[test]
    fn test_display_does_not_round_value() {
        let r = result(0.123456789);
        assert_eq!(r.display_value(), "0.1235");
        assert_eq!(r.value, 0.123456789);
    }

    #[test]
    fn test_exceeds_unity() {
        assert!(!result(1.0).exceeds_unity());
        assert!(result(1.0001).exceeds_unity());
    }

    #[test]
    fn test_input_serializes_with_unit_names() {
        let input = QuantumYieldInput::new(450.0, 15000.0, 10.0, 60.0);
        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["wavelength_nm"], 450.0);
        assert_eq!(json["power_mW_per_cm2"], 10.0);
    }
}
