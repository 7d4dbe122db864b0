//! # refs 命令实现
//!
//! 在终端打印说明文字和两篇参考文献，可选用默认浏览器打开其中一篇。
//!
//! ## 依赖关系
//! - 使用 `cli/refs.rs` 定义的 RefsArgs
//! - 使用 `photochem/references.rs` 的静态内容
//! - 使用 `utils/desktop.rs` 打开浏览器

use crate::cli::refs::RefsArgs;
use crate::error::Result;
use crate::photochem::references::{self, Reference, EXPLANATION_TITLE};
use crate::shell::LinkOpener;
use crate::utils::desktop::SystemBrowser;
use crate::utils::output;

/// 执行 refs 命令
pub fn execute(args: RefsArgs) -> Result<()> {
    if let Some(reference) = args.open {
        output::print_info(&format!("Opening {} in browser", reference.label()));
        SystemBrowser.open(reference.url())?;
        output::print_success(reference.url());
        return Ok(());
    }

    output::print_header(EXPLANATION_TITLE);
    println!("{}\n", references::explanation_plain_text());

    output::print_separator();
    for reference in Reference::ALL {
        output::print_link(
            &format!("{} (doi:{})", reference.label(), reference.doi()),
            reference.url(),
        );
    }
    println!();
    output::print_info("Use `qycalc refs --open parker|bader` to open a paper");

    Ok(())
}
