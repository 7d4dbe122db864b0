//! # 参考文献与说明文字
//!
//! 窗口右侧说明栏和 `refs` 子命令共用的静态内容。
//!
//! ## 依赖关系
//! - 被 `gui/app.rs`, `shell/form.rs`, `commands/refs.rs` 使用

use clap::ValueEnum;

/// 引用文献
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Reference {
    /// Parker, 1956 (Proc. R. Soc. Lond. A)
    Parker,
    /// Bader et al., 2019 (J. Org. Chem.)
    Bader,
}

impl Reference {
    pub const ALL: [Reference; 2] = [Reference::Parker, Reference::Bader];

    /// 正文中显示的链接文字
    pub fn label(&self) -> &'static str {
        match self {
            Reference::Parker => "Parker, 1956",
            Reference::Bader => "Bader et al., 2019",
        }
    }

    /// 固定 URL
    pub fn url(&self) -> &'static str {
        match self {
            Reference::Parker => "https://royalsocietypublishing.org/doi/10.1098/rspa.1956.0102",
            Reference::Bader => "https://pubs.acs.org/doi/10.1021/acs.joc.9b02751",
        }
    }

    pub fn doi(&self) -> &'static str {
        match self {
            Reference::Parker => "10.1098/rspa.1956.0102",
            Reference::Bader => "10.1021/acs.joc.9b02751",
        }
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reference::Parker => write!(f, "parker"),
            Reference::Bader => write!(f, "bader"),
        }
    }
}

/// 说明文字片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// 普通段落文字
    Text(&'static str),
    /// 可点击的文献链接
    Link(Reference),
    /// 居中显示的公式
    Formula(&'static str),
}

/// 说明栏标题
pub const EXPLANATION_TITLE: &str = "Estimating Quantum Yield";

/// 说明栏全文，按显示顺序排列
pub const EXPLANATION: &[Segment] = &[
    Segment::Text("This calculator estimates quantum yield using the derivation originally described in "),
    Segment::Link(Reference::Parker),
    Segment::Text(" and more clearly explained in "),
    Segment::Link(Reference::Bader),
    Segment::Text(".\n\n"),
    Segment::Text("Quantum yield (Φ) is a ratio representation of photon conversion efficiency (via fluorescence, bond breaking, etc).\n\n"),
    Segment::Formula("Φ = number of reaction events/number of photons absorbed"),
    Segment::Text("As long as the photoreaction follows first-order kinetics with rate constant k [s⁻¹], quantum yield can be expressed as:\n\n"),
    Segment::Formula("Φ = k/Iε"),
    Segment::Text("where Iε is the moles of incident photons multiplied by the extinction coefficient. k must be converted to k' to match the log₁₀ units of absorbance:\n\n"),
    Segment::Formula("k' = k/2.303"),
    Segment::Text("k' is the same as 1/t90 (obtained by solving for t₉₀ in the first order reaction equation). Substituting this relationship into the equation for Φ gives:\n\n"),
    Segment::Formula("Φ = (Iεt₉₀)⁻¹"),
];

/// 纯文本形式的说明（终端输出用）
pub fn explanation_plain_text() -> String {
    let mut out = String::new();
    for segment in EXPLANATION {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Link(reference) => out.push_str(reference.label()),
            Segment::Formula(formula) => {
                out.push_str("    ");
                out.push_str(formula);
                out.push_str("\n\n");
            }
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_urls() {
        assert_eq!(
            Reference::Parker.url(),
            "https://royalsocietypublishing.org/doi/10.1098/rspa.1956.0102"
        );
        assert_eq!(
            Reference::Bader.url(),
            "https://pubs.acs.org/doi/10.1021/acs.joc.9b02751"
        );
        for reference in Reference::ALL {
            assert!(reference.url().ends_with(reference.doi()));
        }
    }

    #[test]
    fn test_explanation_links_both_references() {
        let links: Vec<_> = EXPLANATION
            .iter()
            .filter_map(|s| match s {
                Segment::Link(r) => Some(*r),
                _ => None,
            })
            .collect();
        assert_eq!(links, vec![Reference::Parker, Reference::Bader]);
    }

    #[test]
    fn test_plain_text_contains_labels_and_formulas() {
        let text = explanation_plain_text();
        assert!(text.starts_with("This calculator estimates quantum yield"));
        assert!(text.contains("Parker, 1956"));
        assert!(text.contains("Bader et al., 2019"));
        assert!(text.contains("Φ = k/Iε"));
        assert!(text.ends_with("Φ = (Iεt₉₀)⁻¹"));
    }
}
