//! 数学基础类型
//!
//! 基于 nalgebra 提供的向量和点类型的别名，以及视口矩形。

use nalgebra as na;
use serde::{Deserialize, Serialize};

/// 2D点类型
pub type Point2 = na::Point2<f64>;

/// 2D向量类型
pub type Vector2 = na::Vector2<f64>;

/// 数值容差，用于几何比较
pub const EPSILON: f64 = 1e-10;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 判断两个2D点是否近似相等
#[inline]
pub fn points_approx_eq(a: &Point2, b: &Point2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

/// 向量逆时针旋转90度
#[inline]
pub fn rotate90(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// 2D包围盒
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2 {
    pub min: Point2,
    pub max: Point2,
}

impl BoundingBox2 {
    /// 创建新的包围盒
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// 创建空的包围盒（无效状态）
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::MAX, f64::MAX),
            max: Point2::new(f64::MIN, f64::MIN),
        }
    }

    /// 是否为空（未包含任何点）
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// 从点集创建包围盒
    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Self {
        let mut bbox = Self::empty();
        for p in points {
            bbox.expand_to_include(&p);
        }
        bbox
    }

    /// 扩展包围盒以包含指定点
    pub fn expand_to_include(&mut self, point: &Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// 合并两个包围盒
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// 获取中心点
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// 获取宽度
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// 获取高度
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// 视口可见矩形
///
/// 沿用绘图工具包的矩形约定：`top` 是较小的 y 值，
/// `bottom = top + height` 是较大的 y 值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// 由两个角点创建（自动归一化）
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// 判断点是否在视口内
///
/// 四条边分别比较，边界上的点视为可见。
pub fn in_view(point: &Point2, rect: &ViewRect) -> bool {
    if point.x < rect.left() {
        return false;
    }
    if point.x > rect.right() {
        return false;
    }
    if point.y > rect.bottom() {
        return false;
    }
    if point.y < rect.top() {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let bbox = BoundingBox2::from_points([
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(-5.0, 8.0),
        ]);

        assert!(approx_eq(bbox.min.x, -5.0));
        assert!(approx_eq(bbox.min.y, 0.0));
        assert!(approx_eq(bbox.max.x, 10.0));
        assert!(approx_eq(bbox.max.y, 8.0));
        assert!(!bbox.is_empty());
        assert!(BoundingBox2::empty().is_empty());
    }

    #[test]
    fn test_view_rect_edges() {
        let rect = ViewRect::new(-1.0, 2.0, 4.0, 3.0);
        assert!(approx_eq(rect.left(), -1.0));
        assert!(approx_eq(rect.right(), 3.0));
        assert!(approx_eq(rect.top(), 2.0));
        assert!(approx_eq(rect.bottom(), 5.0));

        let flipped = ViewRect::from_corners(Point2::new(3.0, 5.0), Point2::new(-1.0, 2.0));
        assert_eq!(flipped, rect);
    }

    #[test]
    fn test_in_view_borders() {
        let rect = ViewRect::new(0.0, 0.0, 10.0, 10.0);

        assert!(in_view(&Point2::new(5.0, 5.0), &rect));
        assert!(in_view(&Point2::new(0.0, 0.0), &rect));
        assert!(in_view(&Point2::new(10.0, 10.0), &rect));
        assert!(!in_view(&Point2::new(-0.001, 5.0), &rect));
        assert!(!in_view(&Point2::new(10.001, 5.0), &rect));
        assert!(!in_view(&Point2::new(5.0, -0.001), &rect));
        assert!(!in_view(&Point2::new(5.0, 10.001), &rect));
    }

    #[test]
    fn test_rotate90() {
        let v = rotate90(Vector2::new(1.0, 0.0));
        assert!(approx_eq(v.x, 0.0));
        assert!(approx_eq(v.y, 1.0));
    }
}
