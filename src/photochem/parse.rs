//! # 数值输入解析
//!
//! 把文本框/命令行中的字符串解析为实数。接受的写法：
//! - 前后空白忽略
//! - 可选正负号，十进制数字，数字之间可有单个下划线（`1_000`）
//! - 可省略整数或小数部分之一（`5.`、`.5`），可带指数（`1e-3`）
//! - `inf` / `infinity` / `nan`（不区分大小写）
//!
//! 其余一律视为无效输入，且不指明是哪个字段出错。
//!
//! ## 依赖关系
//! - 被 `shell/form.rs` 和 `commands/` 使用
//! - 使用 `regex` crate

use crate::error::{QyError, Result};
use crate::models::QuantumYieldInput;

use regex::Regex;
use std::sync::LazyLock;

static REAL_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[+-]?(?:(?i:infinity|inf|nan)|(?:[0-9](?:_?[0-9])*(?:\.(?:[0-9](?:_?[0-9])*)?)?|\.[0-9](?:_?[0-9])*)(?:[eE][+-]?[0-9](?:_?[0-9])*)?)$",
    )
    .expect("real number pattern is valid")
});

/// 解析单个实数
pub fn parse_real(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if !REAL_NUMBER.is_match(trimmed) {
        return Err(QyError::InvalidInput);
    }
    trimmed
        .replace('_', "")
        .parse::<f64>()
        .map_err(|_| QyError::InvalidInput)
}

/// 解析四个输入字段（波长、消光系数、功率、t90）
///
/// 四个字段全部解析成功后才返回；任一失败都是同一个 `InvalidInput`。
pub fn parse_input(
    wavelength: &str,
    epsilon: &str,
    power: &str,
    t90: &str,
) -> Result<QuantumYieldInput> {
    Ok(QuantumYieldInput::new(
        parse_real(wavelength)?,
        parse_real(epsilon)?,
        parse_real(power)?,
        parse_real(t90)?,
    ))
}
