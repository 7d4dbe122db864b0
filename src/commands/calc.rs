//! # calc 命令实现
//!
//! 从命令行参数完成一次量子产率计算。
//!
//! ## 功能
//! - 输出与窗口结果框完全一致的显示文字
//! - 打印输入与中间量表格（光子能量、光子通量）
//! - 可选 JSON 输出和复制到剪贴板
//!
//! ## 依赖关系
//! - 使用 `cli/calc.rs` 定义的 CalcArgs
//! - 使用 `shell/form.rs` 完成解析、计算和复制
//! - 使用 `utils/desktop.rs` 访问系统剪贴板

use crate::cli::calc::CalcArgs;
use crate::error::Result;
use crate::models::{QuantumYieldInput, QuantumYieldResult};
use crate::photochem::BoundPolicy;
use crate::shell::CalculatorForm;
use crate::utils::desktop::SystemClipboard;
use crate::utils::output;

use serde::Serialize;

/// JSON 输出结构
#[derive(Debug, Serialize)]
struct CalcReport<'a> {
    input: Option<QuantumYieldInput>,
    result: Option<QuantumYieldResult>,
    display: &'a str,
    error: Option<String>,
}

/// 执行 calc 命令
pub fn execute(args: CalcArgs) -> Result<()> {
    let bound = BoundPolicy::from_strict(args.bound.strict);
    let mut form = CalculatorForm::with_fields(
        bound,
        args.wavelength.as_str(),
        args.epsilon.as_str(),
        args.power.as_str(),
        args.t90.as_str(),
    );
    let outcome = form.submit();

    if args.json {
        println!("{}", render_json(&form, &outcome)?);
    } else if args.quiet {
        println!("{}", form.result());
    } else {
        print_report(&form, &outcome);
    }

    if args.copy {
        form.on_copy_result(&mut SystemClipboard)?;
        if !args.json && !args.quiet {
            output::print_success(&format!("Copied '{}' to clipboard", form.result()));
        }
    }

    outcome.map(|_| ())
}

/// 生成 JSON 报告
fn render_json(form: &CalculatorForm, outcome: &Result<QuantumYieldResult>) -> Result<String> {
    let report = CalcReport {
        input: form.parsed_input(),
        result: outcome.as_ref().ok().copied(),
        display: form.result(),
        error: outcome.as_ref().err().map(|e| e.to_string()),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// 打印人类可读的报告
fn print_report(form: &CalculatorForm, outcome: &Result<QuantumYieldResult>) {
    output::print_header("Quantum Yield Calculation");

    if let Some(input) = form.parsed_input() {
        print_breakdown_table(&input, outcome.as_ref().ok());
    }

    output::print_result("Quantum Yield", form.result());

    if let Ok(result) = outcome {
        if result.exceeds_unity() && form.bound() == BoundPolicy::Lenient {
            output::print_warning(
                "Quantum yield is greater than 1, which is not physically meaningful. Maybe check your units? (use --strict to reject)",
            );
        }
    }
}

/// 打印输入与中间量表格
fn print_breakdown_table(input: &QuantumYieldInput, result: Option<&QuantumYieldResult>) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Quantity")]
        quantity: &'static str,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Unit")]
        unit: &'static str,
    }

    let mut rows = vec![
        Row {
            quantity: "Wavelength",
            value: format!("{}", input.wavelength_nm),
            unit: "nm",
        },
        Row {
            quantity: "Extinction coefficient (ε)",
            value: format!("{}", input.epsilon),
            unit: "M⁻¹cm⁻¹",
        },
        Row {
            quantity: "Power",
            value: format!("{}", input.power_mw_per_cm2),
            unit: "mW·cm⁻²",
        },
        Row {
            quantity: "t₉₀",
            value: format!("{}", input.t90),
            unit: "",
        },
    ];

    if let Some(r) = result {
        rows.push(Row {
            quantity: "Photon energy",
            value: format!("{:.4e}", r.photon_energy_j),
            unit: "J",
        });
        rows.push(Row {
            quantity: "Photon flux (I)",
            value: format!("{:.4e}", r.photon_flux),
            unit: "mol photons/s",
        });
        rows.push(Row {
            quantity: "Φ (unrounded)",
            value: format!("{}", r.value),
            unit: "",
        });
    }

    println!("{}\n", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(
        w: &str,
        e: &str,
        p: &str,
        t: &str,
    ) -> (CalculatorForm, Result<QuantumYieldResult>) {
        let mut form = CalculatorForm::with_fields(BoundPolicy::Lenient, w, e, p, t);
        let outcome = form.submit();
        (form, outcome)
    }

    #[test]
    fn test_json_success_payload() {
        let (form, outcome) = submitted("450", "15000", "10", "60");
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&form, &outcome).unwrap()).unwrap();
        assert_eq!(json["display"], "0.0296");
        assert_eq!(json["input"]["wavelength_nm"], 450.0);
        assert_eq!(json["input"]["t90"], 60.0);
        assert!((json["result"]["value"].as_f64().unwrap() - 0.029557181069111114).abs() < 1e-15);
        assert!(json["error"].is_null());
    }

    #[test]
    fn test_json_invalid_input_payload() {
        let (form, outcome) = submitted("abc", "15000", "10", "60");
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&form, &outcome).unwrap()).unwrap();
        assert_eq!(json["display"], "Invalid Input");
        assert_eq!(json["error"], "Invalid Input");
        assert!(json["input"].is_null());
        assert!(json["result"].is_null());
    }

    #[test]
    fn test_json_negative_payload_keeps_input() {
        let (form, outcome) = submitted("450", "15000", "10", "-60");
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&form, &outcome).unwrap()).unwrap();
        assert_eq!(json["input"]["t90"], -60.0);
        assert!(json["result"].is_null());
        assert_eq!(
            json["display"],
            "Error: Quantum yield cannot be negative. Maybe check your units?"
        );
    }
}
