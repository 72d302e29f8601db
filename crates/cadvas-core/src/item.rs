//! 画布项
//!
//! 图形种类是固定的，用枚举分发 `render` / `refresh`。

use crate::canvas::Canvas;
use crate::math::{BoundingBox2, Point2};
use crate::measure::Measure;
use crate::shapes::{BoxShape, Circle, Polygon, Segment};
use crate::style::CadvasStyle;

/// 画布项
#[derive(Debug, Clone)]
pub enum Item {
    Segment(Segment),
    Box(BoxShape),
    Polygon(Polygon),
    Circle(Circle),
    Measure(Measure),
}

impl Item {
    /// 在画布上创建图元，只调用一次
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C, bounds: bool) {
        match self {
            Item::Segment(s) => s.render(canvas, bounds),
            Item::Box(b) => b.render(canvas, bounds),
            Item::Polygon(p) => p.render(canvas, bounds),
            Item::Circle(c) => c.render(canvas, bounds),
            Item::Measure(m) => m.render(canvas, bounds),
        }
    }

    /// 视口变化后更新图元
    pub fn refresh<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        match self {
            Item::Segment(s) => s.refresh(canvas),
            Item::Box(b) => b.refresh(canvas),
            Item::Polygon(p) => p.refresh(canvas),
            Item::Circle(c) => c.refresh(canvas),
            Item::Measure(m) => m.refresh(canvas),
        }
    }

    /// 处理点击，返回是否被该项消费
    pub fn click<C: Canvas + ?Sized>(&mut self, canvas: &mut C, point: &Point2) -> bool {
        match self {
            Item::Polygon(p) => p.click(canvas, point),
            _ => false,
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox2> {
        match self {
            Item::Segment(s) => Some(s.bounding_box()),
            Item::Box(b) => Some(b.bounding_box()),
            Item::Polygon(p) => p.bounding_box(),
            Item::Circle(c) => Some(c.bounding_box()),
            Item::Measure(m) => m.bounding_box(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Item::Segment(_) => "Segment",
            Item::Box(_) => "Box",
            Item::Polygon(_) => "Polygon",
            Item::Circle(_) => "Circle",
            Item::Measure(_) => "Measure",
        }
    }

    /// 套用整体样式
    pub fn styled(self, style: &CadvasStyle) -> Self {
        match self {
            Item::Segment(s) => Item::Segment(s.with_pen(style.pen)),
            Item::Box(b) => Item::Box(b.with_pen(style.pen)),
            Item::Polygon(p) => Item::Polygon(p.with_style(style.polygon)),
            Item::Circle(c) => Item::Circle(c.with_pen(style.pen)),
            Item::Measure(m) => Item::Measure(m.with_style(style.measure)),
        }
    }
}

impl From<Segment> for Item {
    fn from(s: Segment) -> Self {
        Item::Segment(s)
    }
}

impl From<BoxShape> for Item {
    fn from(b: BoxShape) -> Self {
        Item::Box(b)
    }
}

impl From<Polygon> for Item {
    fn from(p: Polygon) -> Self {
        Item::Polygon(p)
    }
}

impl From<Circle> for Item {
    fn from(c: Circle) -> Self {
        Item::Circle(c)
    }
}

impl From<Measure> for Item {
    fn from(m: Measure) -> Self {
        Item::Measure(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Color;

    #[test]
    fn test_styled_applies_to_variant() {
        let mut style = CadvasStyle::default();
        style.pen.color = Color::BLUE;
        style.measure.color = Color::RED;

        let seg = Item::from(Segment::new(Point2::origin(), Point2::new(1.0, 0.0))).styled(&style);
        let Item::Segment(seg) = seg else {
            panic!("expected segment");
        };
        assert_eq!(seg.pen.color, Color::BLUE);

        let m = Item::from(Measure::new(Point2::origin(), Point2::new(1.0, 0.0))).styled(&style);
        let Item::Measure(m) = m else {
            panic!("expected measure");
        };
        assert_eq!(m.style().color, Color::RED);
    }

    #[test]
    fn test_bounding_box_of_inert_measure() {
        let item = Item::from(Measure::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0)));
        assert!(item.bounding_box().is_none());
        assert_eq!(item.type_name(), "Measure");
    }
}
