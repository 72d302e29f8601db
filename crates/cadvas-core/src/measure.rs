//! 尺寸标注（Measure）
//!
//! 由两个端点和偏移距离推导出：
//! - 平行于端点连线、沿垂直方向偏移的标注线
//! - 偏移后两端的箭头
//! - 原端点到偏移端点的两条延伸线
//! - 位于偏移中点、随连线方向旋转的距离文本
//!
//! 视口变化时，只有两个端点都在可见矩形内才显示整个标注。

use crate::canvas::Canvas;
use crate::error::MeasureError;
use crate::math::{in_view, rotate90, BoundingBox2, Point2, Vector2};
use crate::primitive::{Arrow, Primitive, PrimitiveId, TextLabel};
use crate::style::MeasureStyle;
use tracing::{debug, warn};

/// 渲染后持有的图元句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureHandles {
    pub line: PrimitiveId,
    pub start_arrow: PrimitiveId,
    pub end_arrow: PrimitiveId,
    pub start_connector: PrimitiveId,
    pub end_connector: PrimitiveId,
    pub label: PrimitiveId,
}

impl MeasureHandles {
    pub fn all(&self) -> [PrimitiveId; 6] {
        [
            self.line,
            self.start_arrow,
            self.end_arrow,
            self.start_connector,
            self.end_connector,
            self.label,
        ]
    }
}

/// 尺寸标注
#[derive(Debug, Clone)]
pub struct Measure {
    start: Point2,
    end: Point2,
    offset: f64,
    distance: f64,
    direction: Vector2,
    offset_vector: Vector2,
    midpoint: Point2,
    angle: f64,
    valid: bool,
    visible: bool,
    style: MeasureStyle,
    handles: Option<MeasureHandles>,
}

impl Measure {
    /// 创建无偏移的标注
    ///
    /// 两端点重合时记录警告并返回不绘制任何内容的标注。
    pub fn new(start: Point2, end: Point2) -> Self {
        Self::with_offset(start, end, 0.0)
    }

    /// 创建带偏移的标注
    pub fn with_offset(start: Point2, end: Point2, offset: f64) -> Self {
        Self::try_with_offset(start, end, offset).unwrap_or_else(|e| {
            warn!("{}; the measure is disabled", e);
            Self::inert(start, end, offset)
        })
    }

    /// 创建无偏移的标注，两端点重合时返回错误
    pub fn try_new(start: Point2, end: Point2) -> Result<Self, MeasureError> {
        Self::try_with_offset(start, end, 0.0)
    }

    /// 创建带偏移的标注，两端点重合时返回错误
    pub fn try_with_offset(start: Point2, end: Point2, offset: f64) -> Result<Self, MeasureError> {
        let delta = start - end;
        let distance = delta.norm();
        if distance == 0.0 {
            return Err(MeasureError::ZeroLength {
                x: start.x,
                y: start.y,
            });
        }

        let direction = delta / distance;
        let offset_vector = rotate90(direction) * offset;
        let midpoint = nalgebra::center(&start, &end) + offset_vector;
        // -0.0 会让 atan2 得到 -180
        let angle = (delta.y + 0.0).atan2(delta.x).to_degrees();

        Ok(Self {
            start,
            end,
            offset,
            distance,
            direction,
            offset_vector,
            midpoint,
            angle,
            valid: true,
            visible: true,
            style: MeasureStyle::default(),
            handles: None,
        })
    }

    fn inert(start: Point2, end: Point2, offset: f64) -> Self {
        Self {
            start,
            end,
            offset,
            distance: 0.0,
            direction: Vector2::zeros(),
            offset_vector: Vector2::zeros(),
            midpoint: start,
            angle: 0.0,
            valid: false,
            visible: false,
            style: MeasureStyle::default(),
            handles: None,
        }
    }

    /// 使用指定样式
    pub fn with_style(mut self, style: MeasureStyle) -> Self {
        self.style = style;
        self
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// 由终点指向起点的单位向量
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    pub fn offset_vector(&self) -> Vector2 {
        self.offset_vector
    }

    /// 偏移后的中点，即文本位置
    pub fn midpoint(&self) -> Point2 {
        self.midpoint
    }

    /// 终点指向起点的方向角（度），范围 (-180, 180]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// 最近一次刷新后的可见状态
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn style(&self) -> &MeasureStyle {
        &self.style
    }

    pub fn handles(&self) -> Option<&MeasureHandles> {
        self.handles.as_ref()
    }

    /// 偏移后的标注线端点
    pub fn offset_line(&self) -> (Point2, Point2) {
        (self.start + self.offset_vector, self.end + self.offset_vector)
    }

    /// 起点箭头朝向
    pub fn start_arrow_angle(&self) -> f64 {
        180.0 - self.angle
    }

    /// 终点箭头朝向
    pub fn end_arrow_angle(&self) -> f64 {
        -self.angle
    }

    /// 文本旋转角度，保证文字不倒置
    pub fn label_angle(&self) -> f64 {
        if self.angle > 90.0 || self.angle < -90.0 {
            self.angle - 180.0
        } else {
            self.angle
        }
    }

    /// 距离文本
    pub fn label_text(&self) -> String {
        self.style.format_distance(self.distance)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox2> {
        if !self.valid {
            return None;
        }
        let (a, b) = self.offset_line();
        Some(BoundingBox2::from_points([self.start, self.end, a, b]))
    }

    /// 在画布上创建标注图元
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, bounds: bool) {
        if !self.valid {
            return;
        }

        let pen = self.style.pen();
        let (line_start, line_end) = self.offset_line();

        let line = canvas.add(
            Primitive::Line {
                start: line_start,
                end: line_end,
                pen,
            },
            bounds,
        );

        let start_arrow = canvas.add(
            Primitive::Arrow(Arrow {
                tip: line_start,
                angle: self.start_arrow_angle(),
                head: self.style.arrow,
                pen,
            }),
            bounds,
        );
        let end_arrow = canvas.add(
            Primitive::Arrow(Arrow {
                tip: line_end,
                angle: self.end_arrow_angle(),
                head: self.style.arrow,
                pen,
            }),
            bounds,
        );

        let start_connector = canvas.add(
            Primitive::Line {
                start: self.start,
                end: line_start,
                pen,
            },
            bounds,
        );
        let end_connector = canvas.add(
            Primitive::Line {
                start: self.end,
                end: line_end,
                pen,
            },
            bounds,
        );

        let label = canvas.add(
            Primitive::Text(TextLabel {
                text: self.label_text(),
                position: self.midpoint,
                angle: self.label_angle(),
                color: self.style.color,
                fill: Some(self.style.text_fill),
            }),
            bounds,
        );

        debug!(
            "Rendered measure {:.3} between ({}, {}) and ({}, {})",
            self.distance, self.start.x, self.start.y, self.end.x, self.end.y
        );

        self.handles = Some(MeasureHandles {
            line,
            start_arrow,
            end_arrow,
            start_connector,
            end_connector,
            label,
        });
    }

    /// 根据当前可见矩形更新可见性
    pub fn refresh<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        if !self.valid {
            return;
        }
        let Some(handles) = self.handles else {
            return;
        };

        let view = canvas.view_rect();
        let visible = in_view(&self.start, &view) && in_view(&self.end, &view);
        self.visible = visible;

        for id in handles.all() {
            canvas.set_visible(id, visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::MemoryCanvas;
    use crate::math::{approx_eq, points_approx_eq, ViewRect};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn test_vertical_measure() {
        let m = Measure::new(p(0.0, 5.0), p(0.0, 1.0));
        assert!(m.is_valid());
        assert!(approx_eq(m.distance(), 4.0));
        assert!(points_approx_eq(&m.midpoint(), &p(0.0, 3.0)));
        assert!(approx_eq(m.angle(), 90.0));
        assert_eq!(m.label_text(), "4.00");
    }

    #[test]
    fn test_offset_measure() {
        let m = Measure::with_offset(p(4.0, 1.0), p(2.0, 1.0), 0.5);
        assert!(approx_eq(m.direction().x, 1.0));
        assert!(approx_eq(m.direction().y, 0.0));
        assert!(approx_eq(m.offset_vector().x, 0.0));
        assert!(approx_eq(m.offset_vector().y, 0.5));
        assert!(points_approx_eq(&m.midpoint(), &p(3.0, 1.5)));

        let (a, b) = m.offset_line();
        assert!(points_approx_eq(&a, &p(4.0, 1.5)));
        assert!(points_approx_eq(&b, &p(2.0, 1.5)));
    }

    #[test]
    fn test_distance_symmetric() {
        let cases = [
            (p(0.0, 0.0), p(3.0, 4.0)),
            (p(-2.5, 7.0), p(1.0, -1.0)),
            (p(1e3, 1e-3), p(-1e3, 2.0)),
        ];
        for (a, b) in cases {
            let forward = Measure::new(a, b);
            let backward = Measure::new(b, a);
            assert!(approx_eq(forward.distance(), (a - b).norm()));
            assert!(approx_eq(forward.distance(), backward.distance()));
        }
    }

    #[test]
    fn test_zero_offset_line_matches_segment() {
        let m = Measure::new(p(1.0, 2.0), p(-3.0, 6.0));
        let (a, b) = m.offset_line();
        assert!(points_approx_eq(&a, &m.start()));
        assert!(points_approx_eq(&b, &m.end()));
    }

    #[test]
    fn test_angle_range() {
        // 终点指向起点的方向为 -x，角度应为 180 而不是 -180
        let m = Measure::new(p(0.0, 0.0), p(1.0, 0.0));
        assert!(approx_eq(m.angle(), 180.0));

        // 负零 y 分量
        let m = Measure::new(p(0.0, -0.0), p(1.0, 0.0));
        assert!(approx_eq(m.angle(), 180.0));
        assert!(approx_eq(m.label_angle(), 0.0));
        assert!(approx_eq(m.label_angle(), 0.0));

        let m = Measure::new(p(0.0, 0.0), p(1.0, 1.0));
        assert!(approx_eq(m.angle(), -135.0));
        assert!(approx_eq(m.label_angle(), -315.0));

        let m = Measure::new(p(1.0, 1.0), p(0.0, 0.0));
        assert!(approx_eq(m.angle(), 45.0));
        assert!(approx_eq(m.label_angle(), 45.0));
    }

    #[test]
    fn test_arrows_point_outward() {
        let m = Measure::with_offset(p(3.0, 4.0), p(-1.0, 0.5), 1.0);
        let mut canvas = MemoryCanvas::default();
        m.clone().render(&mut canvas, false);

        let arrows: Vec<Arrow> = canvas
            .store()
            .iter()
            .filter_map(|e| match e.primitive {
                Primitive::Arrow(a) => Some(a),
                _ => None,
            })
            .collect();
        assert_eq!(arrows.len(), 2);

        let start_dir = arrows[0].direction();
        let end_dir = arrows[1].direction();
        assert!((start_dir - m.direction()).norm() < 1e-9);
        assert!((end_dir + m.direction()).norm() < 1e-9);
    }

    #[test]
    fn test_render_creates_all_primitives() {
        let mut m = Measure::with_offset(p(0.0, 0.0), p(4.0, 0.0), -1.0);
        let mut canvas = MemoryCanvas::default();
        m.render(&mut canvas, true);

        let handles = *m.handles().unwrap();
        assert_eq!(canvas.store().len(), 6);

        let label = &canvas.store().get(handles.label).unwrap().primitive;
        match label {
            Primitive::Text(t) => {
                assert_eq!(t.text, "4.00");
                assert!(points_approx_eq(&t.position, &m.midpoint()));
                assert_eq!(t.color, m.style().color);
            }
            other => panic!("expected text label, got {}", other.type_name()),
        }

        match canvas.store().get(handles.start_connector).unwrap().primitive {
            Primitive::Line { start, end, .. } => {
                assert!(points_approx_eq(&start, &p(0.0, 0.0)));
                assert!(points_approx_eq(&end, &p(0.0, 1.0)));
            }
            ref other => panic!("expected line, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_zero_length_is_inert() {
        let mut m = Measure::with_offset(p(2.0, 2.0), p(2.0, 2.0), 1.0);
        assert!(!m.is_valid());
        assert!(m.bounding_box().is_none());

        let mut canvas = MemoryCanvas::default();
        m.render(&mut canvas, true);
        m.refresh(&mut canvas);
        assert!(canvas.store().is_empty());
        assert!(m.handles().is_none());

        assert_eq!(
            Measure::try_new(p(2.0, 2.0), p(2.0, 2.0)).unwrap_err(),
            MeasureError::ZeroLength { x: 2.0, y: 2.0 }
        );
    }

    #[test]
    fn test_refresh_visibility() {
        let mut m = Measure::with_offset(p(0.0, 0.0), p(5.0, 5.0), 1.0);
        let mut canvas = MemoryCanvas::new(ViewRect::new(-1.0, -1.0, 10.0, 10.0));
        m.render(&mut canvas, false);

        m.refresh(&mut canvas);
        assert!(m.is_visible());
        assert_eq!(canvas.store().visible_count(), 6);

        // 右上端点移出视口
        canvas.set_view_rect(ViewRect::new(-1.0, -1.0, 5.5, 5.5));
        m.refresh(&mut canvas);
        assert!(!m.is_visible());
        assert_eq!(canvas.store().visible_count(), 0);

        // 端点正好在边界上
        canvas.set_view_rect(ViewRect::new(0.0, 0.0, 5.0, 5.0));
        m.refresh(&mut canvas);
        assert!(m.is_visible());
        assert_eq!(canvas.store().visible_count(), 6);
    }

    #[test]
    fn test_refresh_before_render_is_noop() {
        let mut m = Measure::new(p(0.0, 0.0), p(1.0, 0.0));
        let mut canvas = MemoryCanvas::default();
        m.refresh(&mut canvas);
        assert!(canvas.store().is_empty());
    }
}
