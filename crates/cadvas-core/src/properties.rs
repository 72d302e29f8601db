//! 视觉属性定义
//!
//! 包含颜色和画笔。

use serde::{Deserialize, Serialize};

/// RGBA颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 从十六进制值创建（如 0xFF0000 表示红色）
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub const RED: Color = Color::new(255, 0, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// 尺寸标注颜色
    pub const MEASURE: Color = Color::new(0, 200, 150);

    /// 画布背景（近白色）
    pub const PAPER: Color = Color::new(254, 254, 254);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// 画笔
///
/// 宽度以屏幕像素计，不随缩放变化。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pen {
    pub color: Color,
    pub width: f32,
}

impl Pen {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex(0x00C896), Color::MEASURE);
        assert_eq!(Color::from_hex(0xFF0000), Color::RED);
    }

    #[test]
    fn test_color_alpha_defaults_to_opaque() {
        let color: Color = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
        assert_eq!(color, Color::new(1, 2, 3));
        assert!(!color.is_transparent());
    }
}
