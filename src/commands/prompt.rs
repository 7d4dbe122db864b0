//! # prompt 命令实现
//!
//! 终端版的计算表单：依次读取四个输入，计算一次并显示结果。
//!
//! ## 依赖关系
//! - 使用 `cli/prompt.rs` 定义的 PromptArgs
//! - 使用 `shell/form.rs` 的 CalculatorForm
//! - 使用 `console` crate 读取终端输入

use crate::cli::prompt::PromptArgs;
use crate::error::{QyError, Result};
use crate::photochem::BoundPolicy;
use crate::shell::CalculatorForm;
use crate::utils::desktop::SystemClipboard;
use crate::utils::output;

use console::{style, Term};

/// 表单字段标签（与窗口一致）
const FIELD_LABELS: [&str; 4] = [
    "Wavelength (nm)",
    "Extinction coefficient (M⁻¹cm⁻¹)",
    "Power (mWcm⁻²)",
    "t₉₀",
];

/// 执行 prompt 命令
pub fn execute(args: PromptArgs) -> Result<()> {
    let term = Term::stdout();
    output::print_header("Quantum Yield Calculator");

    if let Some(warning) = terminal_warning(term.is_term()) {
        output::print_warning(warning);
    }

    let mut values: [String; 4] = Default::default();
    for (label, value) in FIELD_LABELS.iter().zip(values.iter_mut()) {
        term.write_str(&format!("{} ", style(format!("{}:", label)).bold()))
            .map_err(QyError::TerminalError)?;
        *value = term.read_line().map_err(QyError::TerminalError)?;
    }

    let [wavelength, epsilon, power, t90] = values;
    let mut form = CalculatorForm::with_fields(
        BoundPolicy::from_strict(args.bound.strict),
        wavelength,
        epsilon,
        power,
        t90,
    );
    let outcome = form.submit();

    println!();
    output::print_result("Quantum Yield", form.result());

    if args.copy {
        form.on_copy_result(&mut SystemClipboard)?;
        output::print_success(&format!("Copied '{}' to clipboard", form.result()));
    }

    outcome.map(|_| ())
}

/// 非终端时 `Term::read_line` 直接返回空串，需要提示用户
fn terminal_warning(is_term: bool) -> Option<&'static str> {
    if is_term {
        None
    } else {
        Some("stdout is not a terminal; input cannot be read and the result will be 'Invalid Input'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warns_only_without_terminal() {
        assert!(terminal_warning(true).is_none());
        let warning = terminal_warning(false).unwrap();
        assert!(warning.contains("not a terminal"));
        assert!(warning.contains("Invalid Input"));
    }
}
