//! 画布协作接口
//!
//! 标注项只通过 [`Canvas`] 与宿主绘图视口交互：添加图元、切换可见性、
//! 查询当前可见矩形。[`PrimitiveStore`] 是各画布实现共用的图元存储，
//! [`MemoryCanvas`] 是不依赖界面的实现。

use crate::math::{BoundingBox2, Point2, ViewRect};
use crate::primitive::{polygon_contains_point, Primitive, PrimitiveId};
use crate::properties::Color;

/// 宿主绘图画布
pub trait Canvas {
    /// 添加图元；`bounds` 为 false 时该图元不参与自动范围计算
    fn add(&mut self, primitive: Primitive, bounds: bool) -> PrimitiveId;

    /// 设置图元可见性
    fn set_visible(&mut self, id: PrimitiveId, visible: bool);

    /// 设置多边形填充色，对其他图元无效
    fn set_fill(&mut self, id: PrimitiveId, fill: Color);

    /// 当前可见的世界矩形
    fn view_rect(&self) -> ViewRect;

    /// 多边形图元是否包含指定点
    fn polygon_contains(&self, id: PrimitiveId, point: &Point2) -> bool;

    /// 移除所有图元
    fn clear(&mut self);
}

/// 存储中的一个图元
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveEntry {
    pub id: PrimitiveId,
    pub primitive: Primitive,
    pub visible: bool,
    /// 是否参与自动范围计算
    pub bounds: bool,
}

/// 图元存储
///
/// 句柄单调递增且在 `clear` 后不复用，因此条目始终按句柄有序。
#[derive(Debug, Clone, Default)]
pub struct PrimitiveStore {
    entries: Vec<PrimitiveEntry>,
    next_id: u64,
}

impl PrimitiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, primitive: Primitive, bounds: bool) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.entries.push(PrimitiveEntry {
            id,
            primitive,
            visible: true,
            bounds,
        });
        id
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&PrimitiveEntry> {
        self.entries
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|index| &self.entries[index])
    }

    pub fn get_mut(&mut self, id: PrimitiveId) -> Option<&mut PrimitiveEntry> {
        match self.entries.binary_search_by_key(&id, |e| e.id) {
            Ok(index) => Some(&mut self.entries[index]),
            Err(_) => None,
        }
    }

    pub fn set_visible(&mut self, id: PrimitiveId, visible: bool) {
        match self.get_mut(id) {
            Some(entry) => entry.visible = visible,
            None => tracing::debug!("set_visible on unknown primitive {:?}", id),
        }
    }

    pub fn set_fill(&mut self, id: PrimitiveId, fill: Color) {
        if let Some(PrimitiveEntry {
            primitive: Primitive::Polygon { fill: current, .. },
            ..
        }) = self.get_mut(id)
        {
            *current = fill;
        }
    }

    pub fn polygon_contains(&self, id: PrimitiveId, point: &Point2) -> bool {
        match self.get(id) {
            Some(PrimitiveEntry {
                primitive: Primitive::Polygon { points, .. },
                visible: true,
                ..
            }) => polygon_contains_point(points, point),
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrimitiveEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 可见图元数量
    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.visible).count()
    }

    /// 参与自动范围计算的图元的总包围盒
    pub fn bounds(&self) -> Option<BoundingBox2> {
        self.entries
            .iter()
            .filter(|e| e.bounds)
            .filter_map(|e| e.primitive.bounding_box())
            .reduce(|a, b| a.union(&b))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// 内存画布
///
/// 可见矩形由调用方设置，用于无界面场景和测试。
#[derive(Debug, Clone)]
pub struct MemoryCanvas {
    store: PrimitiveStore,
    view: ViewRect,
}

impl MemoryCanvas {
    pub fn new(view: ViewRect) -> Self {
        Self {
            store: PrimitiveStore::new(),
            view,
        }
    }

    pub fn set_view_rect(&mut self, view: ViewRect) {
        self.view = view;
    }

    pub fn store(&self) -> &PrimitiveStore {
        &self.store
    }
}

impl Default for MemoryCanvas {
    fn default() -> Self {
        Self::new(ViewRect::new(-10.0, -10.0, 20.0, 20.0))
    }
}

impl Canvas for MemoryCanvas {
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
        self.view
    }

    fn polygon_contains(&self, id: PrimitiveId, point: &Point2) -> bool {
        self.store.polygon_contains(id, point)
    }

    fn clear(&mut self) {
        self.store.clear();
    }
}
