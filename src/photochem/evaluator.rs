//! # 量子产率计算器
//!
//! 由波长、消光系数、入射功率和 t90 计算量子产率 Φ。
//!
//! ## 算法
//! 1. λ (m) = λ (nm) × 1e-9
//! 2. E_photon = h·c / λ
//! 3. I = P / (1000 · E_photon · N_A)      光子摩尔通量
//! 4. Φ = 1 / (I · ε · t90 · 1000)
//!
//! 运算顺序必须保持不变，以保证浮点结果逐位一致。
//!
//! ## 参考
//! - C. A. Parker, Proc. R. Soc. Lond. A 220 (1956)
//! - Bader et al., J. Org. Chem. 84 (2019)
//!
//! ## 依赖关系
//! - 被 `shell/` 和 `commands/` 调用
//! - 使用 `models/quantum_yield.rs` 的输入输出结构
//! - 使用 `photochem/constants.rs`

use crate::error::ValidationFailure;
use crate::models::{QuantumYieldInput, QuantumYieldResult};
use crate::photochem::constants::{AVOGADRO, MILLI, NM_TO_M, PLANCK, SPEED_OF_LIGHT};

/// Φ 上限处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundPolicy {
    /// 只拒绝负值，Φ > 1 照常输出
    #[default]
    Lenient,
    /// 同时拒绝 Φ > 1
    Strict,
}

impl BoundPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            BoundPolicy::Strict
        } else {
            BoundPolicy::Lenient
        }
    }
}

/// 单光子能量 (J)
pub fn photon_energy(wavelength_nm: f64) -> f64 {
    let wavelength_m = wavelength_nm * NM_TO_M;
    PLANCK * SPEED_OF_LIGHT / wavelength_m
}

/// 光子摩尔通量 (mol photons/s)
pub fn photon_flux(power_mw_per_cm2: f64, photon_energy_j: f64) -> f64 {
    power_mw_per_cm2 / (MILLI * photon_energy_j * AVOGADRO)
}

/// 量子产率计算器
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantumYieldEvaluator {
    bound: BoundPolicy,
}

impl QuantumYieldEvaluator {
    /// 创建新的计算器
    pub fn new(bound: BoundPolicy) -> Self {
        Self { bound }
    }

    pub fn bound(&self) -> BoundPolicy {
        self.bound
    }

    /// 计算量子产率
    ///
    /// 非有限结果（零输入、nan/inf 传播）返回 `Undefined`，先于符号检查。
    pub fn evaluate(
        &self,
        input: &QuantumYieldInput,
    ) -> std::result::Result<QuantumYieldResult, ValidationFailure> {
        let photon_energy_j = photon_energy(input.wavelength_nm);
        let flux = photon_flux(input.power_mw_per_cm2, photon_energy_j);
        let value = 1.0 / (flux * input.epsilon * input.t90 * MILLI);

        if !value.is_finite() {
            return Err(ValidationFailure::Undefined);
        }
        if value < 0.0 {
            return Err(ValidationFailure::Negative);
        }
        if self.bound == BoundPolicy::Strict && value > 1.0 {
            return Err(ValidationFailure::AboveUnity);
        }

        Ok(QuantumYieldResult {
            value,
            photon_energy_j,
            photon_flux: flux,
        })
    }
}
