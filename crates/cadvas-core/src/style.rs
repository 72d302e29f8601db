//! 绘制样式
//!
//! 所有字段都有默认值，JSON 中缺失的字段回退到默认样式。

use crate::error::StyleError;
use crate::properties::{Color, Pen};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 箭头形状（角度单位为度，长度单位为像素）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowHead {
    /// 箭头尖端张角
    pub tip_angle: f64,
    /// 箭头底边夹角
    pub base_angle: f64,
    /// 箭头长度
    pub head_len: f64,
}

impl Default for ArrowHead {
    fn default() -> Self {
        Self {
            tip_angle: 30.0,
            base_angle: 20.0,
            head_len: 10.0,
        }
    }
}

/// 多边形样式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonStyle {
    pub pen: Pen,
    /// 常规填充色
    pub fill: Color,
    /// 点击后切换的填充色
    pub highlight: Color,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            pen: Pen::default(),
            fill: Color::with_alpha(100, 149, 237, 120),
            highlight: Color::with_alpha(255, 165, 0, 160),
        }
    }
}

/// 尺寸标注样式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureStyle {
    /// 标注线、箭头和文字颜色
    pub color: Color,
    /// 线宽（像素）
    pub width: f32,
    pub arrow: ArrowHead,
    /// 文字背景色
    pub text_fill: Color,
    /// 距离小数位数
    pub precision: usize,
}

impl MeasureStyle {
    pub fn pen(&self) -> Pen {
        Pen::new(self.color, self.width)
    }

    /// 格式化距离文本
    pub fn format_distance(&self, distance: f64) -> String {
        format!("{:.*}", self.precision, distance)
    }
}

impl Default for MeasureStyle {
    fn default() -> Self {
        Self {
            color: Color::MEASURE,
            width: 1.0,
            arrow: ArrowHead::default(),
            text_fill: Color::PAPER,
            precision: 2,
        }
    }
}

/// 画布整体样式
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadvasStyle {
    /// 线段、矩形和圆的画笔
    pub pen: Pen,
    pub polygon: PolygonStyle,
    pub measure: MeasureStyle,
}

impl CadvasStyle {
    /// 从 JSON 字符串加载
    pub fn from_json_str(json: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 文件加载
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String, StyleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
