//! 绘图视口配置

use cadvas_core::properties::Color;
use serde::{Deserialize, Serialize};

/// 绘图视口配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// 背景色
    pub background: Color,
    /// 第一次有可用范围时自动缩放到全部图元
    pub auto_range_on_start: bool,
    /// 自动缩放时四周留白（像素）
    pub auto_range_padding: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// 每格滚轮的缩放倍数
    pub zoom_step: f64,
    /// 标签字号（像素）
    pub label_size: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            background: Color::PAPER,
            auto_range_on_start: true,
            auto_range_padding: 20.0,
            min_zoom: 0.001,
            max_zoom: 10000.0,
            zoom_step: 1.1,
            label_size: 13.0,
        }
    }
}
