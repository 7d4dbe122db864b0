//! # 计算表单
//!
//! 保存四个输入框和结果框的文本。界面层只负责把控件内容写入/读出
//! `CalculatorForm`，计算逻辑通过显式参数传递完成。
//!
//! ## 依赖关系
//! - 被 `gui/app.rs`, `commands/prompt.rs` 使用
//! - 使用 `photochem/` 的解析器和计算器

use crate::error::Result;
use crate::models::{QuantumYieldInput, QuantumYieldResult};
use crate::photochem::{parse_input, BoundPolicy, QuantumYieldEvaluator, Reference};

/// 剪贴板
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// 外部链接打开方式（默认浏览器）
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// 计算表单状态
#[derive(Debug, Clone, Default)]
pub struct CalculatorForm {
    /// 波长 (nm)
    pub wavelength: String,
    /// 消光系数 (M⁻¹cm⁻¹)
    pub epsilon: String,
    /// 功率 (mW·cm⁻²)
    pub power: String,
    /// t90
    pub t90: String,

    result: String,
    last: Option<QuantumYieldResult>,
    evaluator: QuantumYieldEvaluator,
}

impl CalculatorForm {
    pub fn new(bound: BoundPolicy) -> Self {
        Self {
            evaluator: QuantumYieldEvaluator::new(bound),
            ..Default::default()
        }
    }

    /// 用当前输入创建表单（终端模式）
    pub fn with_fields(
        bound: BoundPolicy,
        wavelength: impl Into<String>,
        epsilon: impl Into<String>,
        power: impl Into<String>,
        t90: impl Into<String>,
    ) -> Self {
        Self {
            wavelength: wavelength.into(),
            epsilon: epsilon.into(),
            power: power.into(),
            t90: t90.into(),
            ..Self::new(bound)
        }
    }

    pub fn bound(&self) -> BoundPolicy {
        self.evaluator.bound()
    }

    /// 解析当前输入并计算，不修改表单
    pub fn calculate(&self) -> Result<QuantumYieldResult> {
        let input = parse_input(&self.wavelength, &self.epsilon, &self.power, &self.t90)?;
        Ok(self.evaluator.evaluate(&input)?)
    }

    /// 计算并更新结果框，同时返回完整结果供终端模式展示
    pub fn submit(&mut self) -> Result<QuantumYieldResult> {
        let outcome = self.calculate();
        self.result = match &outcome {
            Ok(result) => result.display_value(),
            Err(e) => e.to_string(),
        };
        self.last = outcome.as_ref().ok().copied();
        outcome
    }

    /// “Calculate” 按钮：计算并把显示文字写入结果框
    pub fn on_calculate(&mut self) -> &str {
        let _ = self.submit();
        &self.result
    }

    /// 当前输入解析后的值（任一字段无效时为 `None`）
    pub fn parsed_input(&self) -> Option<QuantumYieldInput> {
        parse_input(&self.wavelength, &self.epsilon, &self.power, &self.t90).ok()
    }

    /// 结果框当前内容
    pub fn result(&self) -> &str {
        &self.result
    }

    /// 上一次成功计算的完整结果（失败后清空）
    pub fn last_result(&self) -> Option<&QuantumYieldResult> {
        self.last.as_ref()
    }

    /// “Copy Result” 按钮：原样复制结果框内容，不做校验
    pub fn on_copy_result<C: Clipboard + ?Sized>(&self, clipboard: &mut C) -> Result<()> {
        clipboard.set_text(&self.result)
    }

    /// 点击文献链接
    pub fn on_open_reference<O: LinkOpener + ?Sized>(
        &self,
        reference: Reference,
        opener: &mut O,
    ) -> Result<()> {
        opener.open(reference.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        contents: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.contents.push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        urls: Vec<String>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&mut self, url: &str) -> Result<()> {
            self.urls.push(url.to_string());
            Ok(())
        }
    }

    fn form(w: &str, e: &str, p: &str, t: &str) -> CalculatorForm {
        CalculatorForm::with_fields(BoundPolicy::Lenient, w, e, p, t)
    }

    #[test]
    fn test_calculate_success() {
        let mut f = form("450", "15000", "10", "60");
        assert_eq!(f.on_calculate(), "0.0296");
        assert_eq!(f.result(), "0.0296");
    }

    #[test]
    fn test_calculate_invalid_input() {
        for i in 0..4 {
            let mut fields = ["450", "15000", "10", "60"];
            fields[i] = "abc";
            let mut f = form(fields[0], fields[1], fields[2], fields[3]);
            assert_eq!(f.on_calculate(), "Invalid Input");
        }
    }

    #[test]
    fn test_calculate_negative() {
        let mut f = form("450", "15000", "10", "-60");
        assert_eq!(
            f.on_calculate(),
            "Error: Quantum yield cannot be negative. Maybe check your units?"
        );
    }

    #[test]
    fn test_strict_bound_message() {
        let mut f = CalculatorForm::with_fields(BoundPolicy::Strict, "532", "100", "1", "1");
        assert_eq!(
            f.on_calculate(),
            "Error: Quantum yield cannot be greater than 1. Maybe check your units?"
        );
    }

    #[test]
    fn test_submit_returns_breakdown() {
        let mut f = form("450", "15000", "10", "60");
        let result = f.submit().unwrap();
        assert!((result.photon_flux - 3.759191746036579e-8).abs() < 1e-18);
        assert_eq!(f.result(), "0.0296");
        assert!(f.parsed_input().is_some());
    }

    #[test]
    fn test_last_result_cleared_on_failure() {
        let mut f = form("450", "15000", "10", "60");
        f.on_calculate();
        assert!(f.last_result().is_some());
        f.t90 = "-60".to_string();
        f.on_calculate();
        assert!(f.last_result().is_none());
    }

    #[test]
    fn test_parsed_input_none_when_invalid() {
        let f = form("450", "n/a", "10", "60");
        assert!(f.parsed_input().is_none());
    }

    #[test]
    fn test_result_replaced_on_recalculate() {
        let mut f = form("abc", "15000", "10", "60");
        assert_eq!(f.on_calculate(), "Invalid Input");
        f.wavelength = "450".to_string();
        assert_eq!(f.on_calculate(), "0.0296");
    }

    #[test]
    fn test_calculate_idempotent() {
        let mut f = form("365", "5000", "1", "120");
        let first = f.on_calculate().to_string();
        for _ in 0..3 {
            assert_eq!(f.on_calculate(), first);
        }
    }

    #[test]
    fn test_copy_result_verbatim() {
        let mut f = form("450", "15000", "10", "60");
        f.on_calculate();
        let mut clipboard = RecordingClipboard::default();
        f.on_copy_result(&mut clipboard).unwrap();
        assert_eq!(clipboard.contents, vec!["0.0296".to_string()]);
    }

    #[test]
    fn test_copy_before_calculate_copies_empty() {
        let f = CalculatorForm::new(BoundPolicy::Lenient);
        let mut clipboard = RecordingClipboard::default();
        f.on_copy_result(&mut clipboard).unwrap();
        assert_eq!(clipboard.contents, vec![String::new()]);
    }

    #[test]
    fn test_copy_error_text_verbatim() {
        let mut f = form("x", "", "", "");
        f.on_calculate();
        let mut clipboard = RecordingClipboard::default();
        f.on_copy_result(&mut clipboard).unwrap();
        assert_eq!(clipboard.contents[0], "Invalid Input");
    }

    #[test]
    fn test_open_reference_passes_fixed_url() {
        let f = CalculatorForm::new(BoundPolicy::Lenient);
        let mut opener = RecordingOpener::default();
        f.on_open_reference(Reference::Parker, &mut opener).unwrap();
        f.on_open_reference(Reference::Bader, &mut opener).unwrap();
        assert_eq!(
            opener.urls,
            vec![
                "https://royalsocietypublishing.org/doi/10.1098/rspa.1956.0102".to_string(),
                "https://pubs.acs.org/doi/10.1021/acs.joc.9b02751".to_string(),
            ]
        );
    }
}
