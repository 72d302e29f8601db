//! egui 绘图画布
//!
//! 实现 [`Canvas`]：保存图元、维护相机、处理平移缩放，
//! 并在可见矩形变化时报告范围变化。

use crate::camera::Camera2D;
use crate::config::PlotConfig;
use crate::paint::{paint_primitive, to_color32, ScreenMapper};
use cadvas_core::canvas::{Canvas, PrimitiveStore};
use cadvas_core::math::{Point2, Vector2, ViewRect};
use cadvas_core::primitive::{Primitive, PrimitiveId};
use cadvas_core::properties::Color;
use egui::{Painter, PointerButton, Rect, Response, Sense, Ui};
use tracing::{debug, info};

/// 一帧交互的结果
pub struct PlotResponse {
    pub response: Response,
    pub painter: Painter,
    /// 可见矩形自上一帧起发生了变化
    pub range_changed: bool,
    /// 单击位置（世界坐标）
    pub clicked: Option<Point2>,
}

/// 一帧内的指针点击
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerClick {
    /// 单击，位置为世界坐标
    Single(Point2),
    /// 双击
    Double,
}

/// egui 绘图画布
#[derive(Debug, Clone)]
pub struct PlotCanvas {
    store: PrimitiveStore,
    camera: Camera2D,
    config: PlotConfig,
    last_view: Option<ViewRect>,
    auto_range_pending: bool,
}

impl PlotCanvas {
    pub fn new(config: PlotConfig) -> Self {
        let mut camera = Camera2D::default();
        camera.min_zoom = config.min_zoom;
        camera.max_zoom = config.max_zoom;
        Self {
            store: PrimitiveStore::new(),
            camera,
            config,
            last_view: None,
            auto_range_pending: config.auto_range_on_start,
        }
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.camera
    }

    pub fn store(&self) -> &PrimitiveStore {
        &self.store
    }

    /// 缩放到所有参与范围计算的图元，没有这样的图元时返回 false
    pub fn auto_range(&mut self) -> bool {
        match self.store.bounds() {
            Some(bounds) => {
                self.camera
                    .zoom_to_fit(&bounds, self.config.auto_range_padding);
                info!(
                    "Auto range to ({:.3}, {:.3})-({:.3}, {:.3})",
                    bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
                );
                true
            }
            None => false,
        }
    }

    /// 比较当前可见矩形与上次记录值，变化时返回 true 并更新记录
    pub fn take_range_changed(&mut self) -> bool {
        let view = self.camera.visible_rect();
        if self.last_view == Some(view) {
            return false;
        }
        self.last_view = Some(view);
        true
    }

    /// 处理一次点击：双击自动缩放并吞掉点击，单击返回世界坐标
    pub fn resolve_click(&mut self, click: PointerClick) -> Option<Point2> {
        match click {
            PointerClick::Double => {
                self.auto_range();
                None
            }
            PointerClick::Single(point) => Some(point),
        }
    }

    /// 分配控件区域并处理平移、缩放和点击
    pub fn interact(&mut self, ui: &mut Ui) -> PlotResponse {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        self.camera
            .set_viewport(rect.width() as f64, rect.height() as f64);

        if self.auto_range_pending && self.auto_range() {
            self.auto_range_pending = false;
        }

        // 滚轮缩放
        let scroll = ui.input(|i| i.raw_scroll_delta);
        if scroll.y.abs() > 0.0 && response.hovered() {
            if let Some(pos) = response.hover_pos() {
                let factor = if scroll.y > 0.0 {
                    self.config.zoom_step
                } else {
                    1.0 / self.config.zoom_step
                };
                let local = pos - rect.min;
                self.camera
                    .zoom_at(Point2::new(local.x as f64, local.y as f64), factor);
            }
        }

        // 左键或中键拖动平移
        if response.dragged_by(PointerButton::Primary) || response.dragged_by(PointerButton::Middle) {
            let delta = response.drag_delta();
            self.camera
                .pan_screen(Vector2::new(delta.x as f64, delta.y as f64));
        }

        // 双击的第二次按下同样会触发 clicked()
        let click = if response.double_clicked() {
            Some(PointerClick::Double)
        } else if response.clicked() {
            response.interact_pointer_pos().map(|pos| {
                let mapper = ScreenMapper {
                    camera: &self.camera,
                    rect,
                };
                PointerClick::Single(mapper.to_world(pos))
            })
        } else {
            None
        };
        let clicked = click.and_then(|click| self.resolve_click(click));

        let range_changed = self.take_range_changed();
        if range_changed {
            debug!("View range changed: {:?}", self.last_view);
        }

        PlotResponse {
            response,
            painter,
            range_changed,
            clicked,
        }
    }

    /// 绘制背景和所有可见图元
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, to_color32(self.config.background));

        let mapper = ScreenMapper {
            camera: &self.camera,
            rect,
        };
        for entry in self.store.iter().filter(|e| e.visible) {
            paint_primitive(painter, &mapper, &entry.primitive, self.config.label_size);
        }
    }
}

impl Default for PlotCanvas {
    fn default() -> Self {
        Self::new(PlotConfig::default())
    }
}

impl Canvas for PlotCanvas {
    fn add(&mut self, primitive: Primitive, bounds: bool) -> PrimitiveId {
        self.store.add(primitive, bounds)
    }

    fn set_visible(&mut self, id: PrimitiveId, visible: bool) {
        self.store.set_visible(id, visible);
    }

    fn set_fill(&mut self, id: PrimitiveId, fill: Color) {
        self.store.set_fill(id, fill);
    }

    fn view_rect(&self) -> ViewRect {
        self.camera.visible_rect()
    }

    fn polygon_contains(&self, id: PrimitiveId, point: &Point2) -> bool {
        self.store.polygon_contains(id, point)
    }

    fn clear(&mut self) {
        self.store.clear();
        self.auto_range_pending = self.config.auto_range_on_start;
    }
}
