//! Cadvas 演示程序
//! 使用 eframe 作为应用框架，在画布上绘制图形和尺寸标注

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use cadvas_core::item::Item;
use cadvas_core::math::Point2;
use cadvas_core::measure::Measure;
use cadvas_core::shapes::{BoxShape, Circle, Polygon, Segment};
use cadvas_core::style::CadvasStyle;
use cadvas_egui::{CadvasWidget, PlotConfig};

/// 样式文件路径的环境变量
const STYLE_ENV: &str = "CADVAS_STYLE";

/// 演示应用
struct CadvasApp {
    widget: CadvasWidget,
    style: CadvasStyle,
}

impl CadvasApp {
    fn new(style: CadvasStyle) -> Self {
        let mut app = Self {
            widget: CadvasWidget::new(PlotConfig::default()),
            style,
        };
        app.create_demo_content();
        app
    }

    fn add(&mut self, item: impl Into<Item>, bounds: bool) {
        let item = item.into().styled(&self.style);
        self.widget.add(item, bounds);
    }

    fn create_demo_content(&mut self) {
        self.add(Segment::new(Point2::new(0.0, 1.0), Point2::new(10.0, 1.0)), true);
        self.add(Segment::new(Point2::new(0.0, 5.0), Point2::new(10.0, 1.0)), true);
        self.add(Measure::new(Point2::new(0.0, 5.0), Point2::new(0.0, 1.0)), false);
        self.add(BoxShape::new(Point2::new(1.0, 1.0), Point2::new(3.0, 10.0)), true);
        self.add(Circle::new(Point2::new(6.0, 6.0), 2.0), true);
        self.add(
            Polygon::new([
                Point2::new(-6.0, 0.0),
                Point2::new(-2.0, 0.0),
                Point2::new(-2.0, 4.0),
                Point2::new(-6.0, 6.0),
            ]),
            true,
        );
        self.add(
            Measure::with_offset(Point2::new(-6.0, 0.0), Point2::new(-2.0, 0.0), -1.0),
            false,
        );

        for i in 0..100 {
            let i = i as f64;
            self.add(
                Measure::new(Point2::new(i, i + 5.0), Point2::new(i + 3.0, 3.0 * i)),
                false,
            );
        }

        info!("Created {} demo items", self.widget.cadvas().len());
    }
}

impl eframe::App for CadvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Zoom to fit").clicked() {
                    self.widget.auto_range();
                }
                if ui.button("Clear").clicked() {
                    self.widget.clear();
                }
                if ui.button("Reload demo").clicked() {
                    self.widget.clear();
                    self.create_demo_content();
                }
                ui.separator();
                ui.label(format!("{} items", self.widget.cadvas().len()));
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.widget.show(ui);
            });
    }
}

/// 读取样式：命令行第一个参数优先，其次是环境变量
fn load_style() -> CadvasStyle {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(STYLE_ENV).ok())
        .map(PathBuf::from);

    let Some(path) = path else {
        return CadvasStyle::default();
    };

    match CadvasStyle::from_json_file(&path) {
        Ok(style) => {
            info!("Loaded style from: {}", path.display());
            style
        }
        Err(e) => {
            error!("Failed to load style {}: {}", path.display(), e);
            CadvasStyle::default()
        }
    }
}

fn main() -> Result<()> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    info!("Starting Cadvas demo...");

    let style = load_style();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Cadvas"),
        ..Default::default()
    };

    eframe::run_native(
        "Cadvas",
        native_options,
        Box::new(move |_cc| Ok(Box::new(CadvasApp::new(style)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
