//! 画布图元
//!
//! 图元是画布实际持有和绘制的对象，几何使用世界坐标。
//! 标注项在渲染时创建图元，之后只通过 [`PrimitiveId`] 引用它们。

use crate::math::{BoundingBox2, Point2, Vector2};
use crate::properties::{Color, Pen};
use crate::style::ArrowHead;
use serde::{Deserialize, Serialize};

/// 图元句柄，由画布分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PrimitiveId(pub u64);

/// 文本标签，以中心点为锚点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    pub position: Point2,
    /// 逆时针旋转角度（度）
    pub angle: f64,
    pub color: Color,
    /// 背景填充
    pub fill: Option<Color>,
}

/// 箭头
///
/// 方向约定：0° 指向 -x，角度增大时箭头在屏幕上顺时针旋转。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    /// 箭头尖端位置
    pub tip: Point2,
    /// 朝向（度）
    pub angle: f64,
    pub head: ArrowHead,
    pub pen: Pen,
}

impl Arrow {
    /// 箭头所指的世界方向（单位向量，y 轴向上）
    pub fn direction(&self) -> Vector2 {
        let a = self.angle.to_radians();
        Vector2::new(-a.cos(), a.sin())
    }
}

/// 图元
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line {
        start: Point2,
        end: Point2,
        pen: Pen,
    },
    /// 以 `origin` 为角点的矩形，宽高可以为负
    Rect {
        origin: Point2,
        width: f64,
        height: f64,
        pen: Pen,
    },
    Polygon {
        points: Vec<Point2>,
        pen: Pen,
        fill: Color,
    },
    Ellipse {
        center: Point2,
        radius_x: f64,
        radius_y: f64,
        pen: Pen,
    },
    Text(TextLabel),
    Arrow(Arrow),
}

impl Primitive {
    /// 图元类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Line { .. } => "Line",
            Primitive::Rect { .. } => "Rect",
            Primitive::Polygon { .. } => "Polygon",
            Primitive::Ellipse { .. } => "Ellipse",
            Primitive::Text(_) => "Text",
            Primitive::Arrow(_) => "Arrow",
        }
    }

    /// 世界坐标包围盒
    ///
    /// 文字和箭头的屏幕尺寸与缩放无关，只计入锚点。
    pub fn bounding_box(&self) -> Option<BoundingBox2> {
        match self {
            Primitive::Line { start, end, .. } => Some(BoundingBox2::from_points([*start, *end])),
            Primitive::Rect {
                origin,
                width,
                height,
                ..
            } => Some(BoundingBox2::from_points([
                *origin,
                Point2::new(origin.x + width, origin.y + height),
            ])),
            Primitive::Polygon { points, .. } => {
                if points.is_empty() {
                    None
                } else {
                    Some(BoundingBox2::from_points(points.iter().copied()))
                }
            }
            Primitive::Ellipse {
                center,
                radius_x,
                radius_y,
                ..
            } => {
                let r = Vector2::new(radius_x.abs(), radius_y.abs());
                Some(BoundingBox2::new(*center - r, *center + r))
            }
            Primitive::Text(label) => Some(BoundingBox2::new(label.position, label.position)),
            Primitive::Arrow(arrow) => Some(BoundingBox2::new(arrow.tip, arrow.tip)),
        }
    }
}

/// 点是否在多边形内（奇偶规则）
pub fn polygon_contains_point(points: &[Point2], point: &Point2) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let pi = points[i];
        let pj = points[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_arrow_direction() {
        let arrow = |angle| Arrow {
            tip: Point2::origin(),
            angle,
            head: ArrowHead::default(),
            pen: Pen::default(),
        };

        let left = arrow(0.0).direction();
        assert!(approx_eq(left.x, -1.0) && approx_eq(left.y, 0.0));

        let up = arrow(90.0).direction();
        assert!(approx_eq(up.x, 0.0) && approx_eq(up.y, 1.0));

        let right = arrow(180.0).direction();
        assert!(approx_eq(right.x, 1.0) && right.y.abs() < 1e-9);
    }

    #[test]
    fn test_rect_bounds_with_negative_size() {
        let rect = Primitive::Rect {
            origin: Point2::new(3.0, 10.0),
            width: -2.0,
            height: -9.0,
            pen: Pen::default(),
        };
        let bbox = rect.bounding_box().unwrap();
        assert!(approx_eq(bbox.min.x, 1.0));
        assert!(approx_eq(bbox.min.y, 1.0));
        assert!(approx_eq(bbox.max.x, 3.0));
        assert!(approx_eq(bbox.max.y, 10.0));
    }

    #[test]
    fn test_polygon_contains_point() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        assert!(polygon_contains_point(&square, &Point2::new(2.0, 2.0)));
        assert!(!polygon_contains_point(&square, &Point2::new(5.0, 2.0)));
        assert!(!polygon_contains_point(&square[..2], &Point2::new(2.0, 0.0)));

        // 凹多边形
        let notch = [
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(6.0, 6.0),
            Point2::new(3.0, 2.0),
            Point2::new(0.0, 6.0),
        ];
        assert!(polygon_contains_point(&notch, &Point2::new(1.0, 1.0)));
        assert!(!polygon_contains_point(&notch, &Point2::new(3.0, 4.0)));
    }
}
