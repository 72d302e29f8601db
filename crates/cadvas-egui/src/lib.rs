//! Cadvas egui 画布
//!
//! 基于 egui 的可平移缩放绘图视口。
//!
//! # 交互
//!
//! - **左键/中键拖动**：平移
//! - **滚轮**：以光标为中心缩放
//! - **双击**：缩放到全部参与范围计算的图元
//! - **单击**：转发给画布项（多边形切换填充色）

pub mod camera;
pub mod canvas;
pub mod config;
pub mod paint;
pub mod widget;

pub use camera::Camera2D;
pub use canvas::{PlotCanvas, PlotResponse, PointerClick};
pub use config::PlotConfig;
pub use widget::CadvasWidget;
