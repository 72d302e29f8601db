//! 画布容器
//!
//! 持有画布和按插入顺序排列的画布项，视口范围变化时依次刷新所有项。

use crate::canvas::Canvas;
use crate::item::Item;
use crate::math::{BoundingBox2, Point2};
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct Placed {
    item: Item,
    bounds: bool,
}

/// 画布容器
#[derive(Debug, Clone)]
pub struct Cadvas<C: Canvas> {
    canvas: C,
    items: Vec<Placed>,
}

impl<C: Canvas> Cadvas<C> {
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            items: Vec::new(),
        }
    }

    /// 渲染并添加画布项
    pub fn add(&mut self, item: impl Into<Item>, bounds: bool) {
        let mut item = item.into();
        item.render(&mut self.canvas, bounds);
        debug!("Added {} (#{})", item.type_name(), self.items.len());
        self.items.push(Placed { item, bounds });
    }

    /// 移除所有画布项并清空画布
    pub fn clear(&mut self) {
        info!("Clearing {} items", self.items.len());
        self.items.clear();
        self.canvas.clear();
    }

    /// 视口范围变化通知
    pub fn range_changed(&mut self) {
        for placed in &mut self.items {
            placed.item.refresh(&mut self.canvas);
        }
    }

    /// 转发世界坐标点击，从最上层开始，直到某项消费该点击
    pub fn click(&mut self, point: Point2) -> bool {
        for placed in self.items.iter_mut().rev() {
            if placed.item.click(&mut self.canvas, &point) {
                debug!(
                    "{} consumed click at ({:.3}, {:.3})",
                    placed.item.type_name(),
                    point.x,
                    point.y
                );
                return true;
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().map(|p| &p.item)
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// 参与范围计算的画布项的总包围盒
    pub fn bounds(&self) -> Option<BoundingBox2> {
        self.items
            .iter()
            .filter(|p| p.bounds)
            .filter_map(|p| p.item.bounding_box())
            .reduce(|a, b| a.union(&b))
    }
}

impl<C: Canvas + Default> Default for Cadvas<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}
