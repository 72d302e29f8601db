//! Cadvas 核心
//!
//! 在可平移缩放的2D绘图画布上叠加 CAD 风格的图形和尺寸标注。
//!
//! # 架构设计
//!
//! - `Item`: 画布项（线段、矩形框、多边形、圆、尺寸标注）
//! - `Canvas`: 宿主绘图画布需要提供的能力
//! - `Cadvas`: 持有画布和画布项，在视口变化时刷新所有项
//!
//! # 示例
//!
//! ```rust
//! use cadvas_core::prelude::*;
//!
//! let mut cadvas = Cadvas::new(MemoryCanvas::default());
//! cadvas.add(Segment::new(Point2::new(0.0, 1.0), Point2::new(10.0, 1.0)), false);
//! cadvas.add(Measure::new(Point2::new(0.0, 5.0), Point2::new(0.0, 1.0)), false);
//!
//! // 视口变化后刷新标注可见性
//! cadvas.range_changed();
//! ```

pub mod canvas;
pub mod error;
pub mod item;
pub mod math;
pub mod measure;
pub mod primitive;
pub mod properties;
pub mod scene;
pub mod shapes;
pub mod style;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::canvas::{Canvas, MemoryCanvas, PrimitiveStore};
    pub use crate::error::{MeasureError, StyleError};
    pub use crate::item::Item;
    pub use crate::math::{in_view, BoundingBox2, Point2, Vector2, ViewRect};
    pub use crate::measure::Measure;
    pub use crate::primitive::{Arrow, Primitive, PrimitiveId, TextLabel};
    pub use crate::properties::{Color, Pen};
    pub use crate::scene::Cadvas;
    pub use crate::shapes::{BoxShape, Circle, Polygon, Segment};
    pub use crate::style::{ArrowHead, CadvasStyle, MeasureStyle, PolygonStyle};
}
