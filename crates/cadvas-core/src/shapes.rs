//! 基本图形项
//!
//! 每个图形只包装一个画布图元，没有随视口变化的状态。

use crate::canvas::Canvas;
use crate::math::{BoundingBox2, Point2, Vector2};
use crate::primitive::{Primitive, PrimitiveId};
use crate::properties::{Color, Pen};
use crate::style::PolygonStyle;

/// 线段
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
    pub pen: Pen,
    handle: Option<PrimitiveId>,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            pen: Pen::default(),
            handle: None,
        }
    }

    pub fn with_pen(mut self, pen: Pen) -> Self {
        self.pen = pen;
        self
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    pub fn handle(&self) -> Option<PrimitiveId> {
        self.handle
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::from_points([self.start, self.end])
    }

    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, bounds: bool) {
        self.handle = Some(canvas.add(
            Primitive::Line {
                start: self.start,
                end: self.end,
                pen: self.pen,
            },
            bounds,
        ));
    }

    pub fn refresh<C: Canvas + ?Sized>(&mut self, _canvas: &mut C) {}
}

/// 轴对齐矩形框
///
/// 宽高直接由两个角点相减得到，不做归一化。
#[derive(Debug, Clone)]
pub struct BoxShape {
    pub lower_left: Point2,
    pub upper_right: Point2,
    pub pen: Pen,
    handle: Option<PrimitiveId>,
}

impl BoxShape {
    pub fn new(lower_left: Point2, upper_right: Point2) -> Self {
        Self {
            lower_left,
            upper_right,
            pen: Pen::default(),
            handle: None,
        }
    }

    pub fn with_pen(mut self, pen: Pen) -> Self {
        self.pen = pen;
        self
    }

    pub fn width(&self) -> f64 {
        self.upper_right.x - self.lower_left.x
    }

    pub fn height(&self) -> f64 {
        self.upper_right.y - self.lower_left.y
    }

    pub fn handle(&self) -> Option<PrimitiveId> {
        self.handle
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::from_points([self.lower_left, self.upper_right])
    }

    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, bounds: bool) {
        self.handle = Some(canvas.add(
            Primitive::Rect {
                origin: self.lower_left,
                width: self.width(),
                height: self.height(),
                pen: self.pen,
            },
            bounds,
        ));
    }

    pub fn refresh<C: Canvas + ?Sized>(&mut self, _canvas: &mut C) {}
}

/// 圆
#[derive(Debug, Clone)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
    pub pen: Pen,
    handle: Option<PrimitiveId>,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius,
            pen: Pen::default(),
            handle: None,
        }
    }

    pub fn with_pen(mut self, pen: Pen) -> Self {
        self.pen = pen;
        self
    }

    pub fn handle(&self) -> Option<PrimitiveId> {
        self.handle
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        let r = Vector2::new(self.radius.abs(), self.radius.abs());
        BoundingBox2::new(self.center - r, self.center + r)
    }

    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, bounds: bool) {
        self.handle = Some(canvas.add(
            Primitive::Ellipse {
                center: self.center,
                radius_x: self.radius,
                radius_y: self.radius,
                pen: self.pen,
            },
            bounds,
        ));
    }

    pub fn refresh<C: Canvas + ?Sized>(&mut self, _canvas: &mut C) {}
}

/// 填充多边形
///
/// 点击多边形内部时在常规填充色和高亮色之间切换。
#[derive(Debug, Clone)]
pub struct Polygon {
    pub points: Vec<Point2>,
    pub style: PolygonStyle,
    highlighted: bool,
    handle: Option<PrimitiveId>,
}

impl Polygon {
    pub fn new(points: impl IntoIterator<Item = Point2>) -> Self {
        Self {
            points: points.into_iter().collect(),
            style: PolygonStyle::default(),
            highlighted: false,
            handle: None,
        }
    }

    pub fn with_style(mut self, style: PolygonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn handle(&self) -> Option<PrimitiveId> {
        self.handle
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// 当前填充色
    pub fn fill(&self) -> Color {
        if self.highlighted {
            self.style.highlight
        } else {
            self.style.fill
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox2> {
        if self.points.is_empty() {
            None
        } else {
            Some(BoundingBox2::from_points(self.points.iter().copied()))
        }
    }

    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, bounds: bool) {
        self.handle = Some(canvas.add(
            Primitive::Polygon {
                points: self.points.clone(),
                pen: self.style.pen,
                fill: self.fill(),
            },
            bounds,
        ));
    }

    pub fn refresh<C: Canvas + ?Sized>(&mut self, _canvas: &mut C) {}

    /// 处理点击，点在多边形内时切换填充色并返回 true
    pub fn click<C: Canvas + ?Sized>(&mut self, canvas: &mut C, point: &Point2) -> bool {
        let Some(id) = self.handle else {
            return false;
        };
        if !canvas.polygon_contains(id, point) {
            return false;
        }

        self.highlighted = !self.highlighted;
        canvas.set_fill(id, self.fill());
        true
    }
}
