//! 图元绘制
//!
//! 把世界坐标图元转换为 egui 形状。画笔宽度、箭头和文字尺寸以像素计，
//! 不随缩放变化。

use crate::camera::Camera2D;
use cadvas_core::math::Point2;
use cadvas_core::primitive::{Arrow, Primitive, TextLabel};
use cadvas_core::properties::{Color, Pen};
use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

/// 转换为 egui 颜色
pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn to_stroke(pen: &Pen) -> Stroke {
    Stroke::new(pen.width, to_color32(pen.color))
}

/// 世界坐标到控件内屏幕坐标的映射
pub struct ScreenMapper<'a> {
    pub camera: &'a Camera2D,
    pub rect: Rect,
}

impl ScreenMapper<'_> {
    pub fn to_screen(&self, world: Point2) -> Pos2 {
        let p = self.camera.world_to_screen(world);
        Pos2::new(self.rect.min.x + p.x as f32, self.rect.min.y + p.y as f32)
    }

    pub fn to_world(&self, screen: Pos2) -> Point2 {
        self.camera.screen_to_world(Point2::new(
            (screen.x - self.rect.min.x) as f64,
            (screen.y - self.rect.min.y) as f64,
        ))
    }

    fn scale(&self, length: f64) -> f32 {
        (length * self.camera.zoom) as f32
    }
}

/// 绘制单个图元
pub fn paint_primitive(painter: &Painter, mapper: &ScreenMapper<'_>, primitive: &Primitive, label_size: f32) {
    match primitive {
        Primitive::Line { start, end, pen } => {
            painter.line_segment([mapper.to_screen(*start), mapper.to_screen(*end)], to_stroke(pen));
        }
        Primitive::Rect {
            origin,
            width,
            height,
            pen,
        } => {
            let corners = vec![
                mapper.to_screen(*origin),
                mapper.to_screen(Point2::new(origin.x + width, origin.y)),
                mapper.to_screen(Point2::new(origin.x + width, origin.y + height)),
                mapper.to_screen(Point2::new(origin.x, origin.y + height)),
            ];
            painter.add(Shape::closed_line(corners, to_stroke(pen)));
        }
        Primitive::Polygon { points, pen, fill } => {
            if points.len() < 2 {
                return;
            }
            let screen: Vec<Pos2> = points.iter().map(|p| mapper.to_screen(*p)).collect();
            if points.len() >= 3 && !fill.is_transparent() {
                // egui 只能正确填充凸多边形
                painter.add(Shape::convex_polygon(screen.clone(), to_color32(*fill), Stroke::NONE));
            }
            painter.add(Shape::closed_line(screen, to_stroke(pen)));
        }
        Primitive::Ellipse {
            center,
            radius_x,
            radius_y,
            pen,
        } => {
            let radius = Vec2::new(mapper.scale(radius_x.abs()), mapper.scale(radius_y.abs()));
            painter.add(Shape::ellipse_stroke(mapper.to_screen(*center), radius, to_stroke(pen)));
        }
        Primitive::Text(label) => paint_label(painter, mapper, label, label_size),
        Primitive::Arrow(arrow) => paint_arrow(painter, mapper, arrow),
    }
}

/// 绘制旋转文本，锚点为文本中心
fn paint_label(painter: &Painter, mapper: &ScreenMapper<'_>, label: &TextLabel, size: f32) {
    let color = to_color32(label.color);
    let galley = painter.layout_no_wrap(label.text.clone(), FontId::proportional(size), color);

    // 世界坐标逆时针 = 屏幕顺时针取反
    let rot = Rot2::from_angle(-(label.angle.to_radians() as f32));
    let center = mapper.to_screen(label.position);
    let half = galley.size() / 2.0;

    if let Some(fill) = label.fill {
        let pad = Vec2::splat(2.0);
        let corners: Vec<Pos2> = [
            Vec2::new(-half.x - pad.x, -half.y - pad.y),
            Vec2::new(half.x + pad.x, -half.y - pad.y),
            Vec2::new(half.x + pad.x, half.y + pad.y),
            Vec2::new(-half.x - pad.x, half.y + pad.y),
        ]
        .iter()
        .map(|c| center + rot * *c)
        .collect();
        painter.add(Shape::convex_polygon(corners, to_color32(fill), Stroke::NONE));
    }

    let top_left = center - rot * half;
    painter.add(TextShape::new(top_left, galley, color).with_angle(rot.angle()));
}

/// 绘制空心箭头，尖端位于图元位置
fn paint_arrow(painter: &Painter, mapper: &ScreenMapper<'_>, arrow: &Arrow) {
    let tip = mapper.to_screen(arrow.tip);
    let dir = arrow.direction();
    // 屏幕 y 轴向下
    let forward = Vec2::new(dir.x as f32, -dir.y as f32);
    let side = forward.rot90();

    let head_len = arrow.head.head_len as f32;
    let half_width = head_len * (arrow.head.tip_angle.to_radians() as f32 / 2.0).tan();
    let notch = (half_width * (arrow.head.base_angle.to_radians() as f32 / 2.0).tan()).clamp(0.0, head_len);

    let back = tip - forward * head_len;
    let points = vec![
        tip,
        back + side * half_width,
        back + forward * notch,
        back - side * half_width,
    ];
    painter.add(Shape::closed_line(points, to_stroke(&arrow.pen)));
}
