//! # 计算器窗口
//!
//! 左侧为四个输入框、Calculate 按钮、只读结果框和 Copy Result 按钮；
//! 右侧为说明文字和两个文献链接。
//!
//! 剪贴板和浏览器由 egui 负责（`Context::copy_text` / `Context::open_url`）。
//!
//! ## 依赖关系
//! - 被 `gui/mod.rs` 创建
//! - 使用 `shell/form.rs` 的 CalculatorForm
//! - 使用 `photochem/references.rs` 的说明文字

use crate::error::Result;
use crate::photochem::references::{Segment, EXPLANATION, EXPLANATION_TITLE};
use crate::photochem::{BoundPolicy, Reference};
use crate::shell::{CalculatorForm, Clipboard, LinkOpener};

use eframe::egui;

/// egui 剪贴板
struct EguiClipboard<'a>(&'a egui::Context);

impl Clipboard for EguiClipboard<'_> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.0.copy_text(text.to_string());
        Ok(())
    }
}

/// egui 打开链接（新标签页）
struct EguiLinkOpener<'a>(&'a egui::Context);

impl LinkOpener for EguiLinkOpener<'_> {
    fn open(&mut self, url: &str) -> Result<()> {
        self.0.open_url(egui::OpenUrl::new_tab(url));
        Ok(())
    }
}

/// 说明栏的排版块
#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    /// 同一段落内连续排列的文字和链接
    Paragraph(Vec<Segment>),
    /// 居中公式
    Formula(&'static str),
}

/// 把说明文字片段切分为段落和公式
fn layout_blocks(segments: &[Segment]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for segment in segments {
        match *segment {
            Segment::Text(text) => {
                let body = text.trim_end_matches('\n');
                if !body.is_empty() {
                    current.push(Segment::Text(body));
                }
                if text.ends_with("\n\n") && !current.is_empty() {
                    blocks.push(Block::Paragraph(std::mem::take(&mut current)));
                }
            }
            Segment::Link(_) => current.push(*segment),
            Segment::Formula(formula) => {
                if !current.is_empty() {
                    blocks.push(Block::Paragraph(std::mem::take(&mut current)));
                }
                blocks.push(Block::Formula(formula));
            }
        }
    }
    if !current.is_empty() {
        blocks.push(Block::Paragraph(current));
    }

    blocks
}

/// 计算器窗口状态
pub struct QyCalcApp {
    form: CalculatorForm,
    blocks: Vec<Block>,
}

impl QyCalcApp {
    pub fn new(bound: BoundPolicy) -> Self {
        Self {
            form: CalculatorForm::new(bound),
            blocks: layout_blocks(EXPLANATION),
        }
    }

    /// 上一次结果 Φ > 1（宽松模式下给出提示）
    fn above_unity(&self) -> bool {
        self.form
            .last_result()
            .is_some_and(|r| r.exceeds_unity())
    }

    /// 左侧输入区
    fn inputs_ui(&mut self, ui: &mut egui::Ui) {
        let mut submitted = false;

        egui::Grid::new("input_grid")
            .num_columns(2)
            .spacing([8.0, 10.0])
            .show(ui, |ui| {
                let fields: [(&str, &mut String); 4] = [
                    ("Wavelength (nm)", &mut self.form.wavelength),
                    ("Extinction coefficient (M⁻¹cm⁻¹)", &mut self.form.epsilon),
                    ("Power (mWcm⁻²)", &mut self.form.power),
                    ("t₉₀", &mut self.form.t90),
                ];
                for (label, value) in fields {
                    ui.label(label);
                    let response = ui.add(egui::TextEdit::singleline(value).desired_width(110.0));
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submitted = true;
                    }
                    ui.end_row();
                }
            });

        ui.add_space(15.0);
        let button = egui::Button::new("Calculate").min_size(egui::vec2(ui.available_width(), 0.0));
        if ui.add(button).clicked() {
            submitted = true;
        }
        if submitted {
            self.form.on_calculate();
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label("Quantum Yield: ");
            let mut shown: &str = self.form.result();
            ui.add(egui::TextEdit::singleline(&mut shown).desired_width(110.0));
            if ui.button("Copy Result").clicked() {
                self.form.on_copy_result(&mut EguiClipboard(ui.ctx())).ok();
            }
        });

        if self.above_unity() {
            ui.add_space(6.0);
            ui.colored_label(
                ui.visuals().warn_fg_color,
                "Quantum yield is greater than 1. Maybe check your units?",
            );
        }
    }

    /// 右侧说明区
    fn explanation_ui(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong(EXPLANATION_TITLE);
            ui.add_space(8.0);

            let mut clicked: Option<Reference> = None;
            for block in &self.blocks {
                match block {
                    Block::Paragraph(segments) => {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing.x = 0.0;
                            for segment in segments {
                                match segment {
                                    Segment::Text(text) => {
                                        ui.label(*text);
                                    }
                                    Segment::Link(reference) => {
                                        if ui.link(reference.label()).clicked() {
                                            clicked = Some(*reference);
                                        }
                                    }
                                    Segment::Formula(formula) => {
                                        ui.label(*formula);
                                    }
                                }
                            }
                        });
                    }
                    Block::Formula(formula) => {
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new(*formula).strong());
                        });
                    }
                }
                ui.add_space(8.0);
            }

            if let Some(reference) = clicked {
                self.form
                    .on_open_reference(reference, &mut EguiLinkOpener(ui.ctx()))
                    .ok();
            }
        });
    }
}

impl eframe::App for QyCalcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("input_panel")
            .resizable(false)
            .exact_width(380.0)
            .show(ctx, |ui| {
                ui.add_space(20.0);
                self.inputs_ui(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(12.0);
                self.explanation_ui(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_blocks_paragraphs_and_formulas() {
        let blocks = layout_blocks(EXPLANATION);
        let formulas = blocks
            .iter()
            .filter(|b| matches!(b, Block::Formula(_)))
            .count();
        assert_eq!(formulas, 4);
        assert_eq!(blocks.len(), 9);
        assert_eq!(blocks.last(), Some(&Block::Formula("Φ = (Iεt₉₀)⁻¹")));
    }

    #[test]
    fn test_layout_blocks_links_stay_inline() {
        let blocks = layout_blocks(EXPLANATION);
        match &blocks[0] {
            Block::Paragraph(segments) => {
                assert_eq!(segments.len(), 5);
                assert_eq!(segments[1], Segment::Link(Reference::Parker));
                assert_eq!(segments[3], Segment::Link(Reference::Bader));
                assert_eq!(segments[4], Segment::Text("."));
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_app_flags_above_unity_only_on_success() {
        let mut app = QyCalcApp::new(BoundPolicy::Lenient);
        app.form.wavelength = "532".into();
        app.form.epsilon = "100".into();
        app.form.power = "1".into();
        app.form.t90 = "1".into();
        app.form.on_calculate();
        assert!(app.above_unity());
        assert_eq!(app.form.result(), "2250.1237");

        app.form.t90 = "abc".into();
        app.form.on_calculate();
        assert!(!app.above_unity());
        assert_eq!(app.form.result(), "Invalid Input");
    }
}
