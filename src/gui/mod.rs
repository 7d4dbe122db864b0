//! # 桌面窗口模块
//!
//! 基于 eframe/egui 的计算器窗口。
//!
//! ## 子模块
//! - `app`: 窗口状态与绘制
//!
//! ## 依赖关系
//! - 被 `commands/gui.rs` 调用
//! - 使用 `shell/` 的表单状态

pub mod app;

pub use app::QyCalcApp;

use crate::error::{QyError, Result};
use crate::photochem::BoundPolicy;

use eframe::egui;

/// 窗口标题
pub const WINDOW_TITLE: &str = "Quantum Yield Calculator v1.0";

/// 打开窗口并运行事件循环，直到窗口关闭
pub fn run(bound: BoundPolicy) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([800.0, 550.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(QyCalcApp::new(bound)))),
    )
    .map_err(|e| QyError::GuiError(e.to_string()))
}
