//! 画布控件
//!
//! 把 [`Cadvas`] 容器接到 egui 绘图画布上：视口范围变化时刷新所有画布项，
//! 单击转发给画布项。

use crate::canvas::PlotCanvas;
use crate::config::PlotConfig;
use cadvas_core::item::Item;
use cadvas_core::scene::Cadvas;
use egui::{Response, Ui};

/// 画布控件
#[derive(Debug, Clone)]
pub struct CadvasWidget {
    cadvas: Cadvas<PlotCanvas>,
}

impl CadvasWidget {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            cadvas: Cadvas::new(PlotCanvas::new(config)),
        }
    }

    /// 添加画布项
    pub fn add(&mut self, item: impl Into<Item>, bounds: bool) {
        self.cadvas.add(item, bounds);
    }

    /// 移除所有画布项
    pub fn clear(&mut self) {
        self.cadvas.clear();
    }

    /// 缩放到所有参与范围计算的画布项
    pub fn auto_range(&mut self) -> bool {
        self.cadvas.canvas_mut().auto_range()
    }

    pub fn cadvas(&self) -> &Cadvas<PlotCanvas> {
        &self.cadvas
    }

    pub fn cadvas_mut(&mut self) -> &mut Cadvas<PlotCanvas> {
        &mut self.cadvas
    }

    /// 显示控件，占满可用区域
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let plot = self.cadvas.canvas_mut().interact(ui);

        if plot.range_changed {
            self.cadvas.range_changed();
        }
        if let Some(point) = plot.clicked {
            self.cadvas.click(point);
        }

        self.cadvas.canvas().paint(&plot.painter, plot.response.rect);
        plot.response
    }
}

impl Default for CadvasWidget {
    fn default() -> Self {
        Self::new(PlotConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadvas_core::canvas::Canvas;
    use cadvas_core::math::Point2;
    use cadvas_core::measure::Measure;
    use cadvas_core::shapes::Segment;

    #[test]
    fn test_pan_hides_measure_after_range_change() {
        let mut widget = CadvasWidget::default();
        widget.add(Measure::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)), false);
        widget.add(Segment::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)), false);

        let canvas = widget.cadvas_mut().canvas_mut();
        assert!(canvas.take_range_changed());
        widget.cadvas_mut().range_changed();
        assert_eq!(widget.cadvas().canvas().store().visible_count(), 7);

        // 默认视口宽 800 单位，以原点为中心；向左拖动 400 像素后 x = 0 移出视口
        let canvas = widget.cadvas_mut().canvas_mut();
        canvas.camera_mut().pan_screen(cadvas_core::math::Vector2::new(-400.5, 0.0));
        assert!(canvas.take_range_changed());
        assert!(canvas.view_rect().left() > 0.0);
        widget.cadvas_mut().range_changed();

        // 线段不受视口影响
        assert_eq!(widget.cadvas().canvas().store().visible_count(), 1);
    }
}
