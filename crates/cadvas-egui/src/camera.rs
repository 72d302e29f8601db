//! 2D相机
//!
//! 处理平移、缩放和视口变换。屏幕坐标以控件左上角为原点，y 轴向下；
//! 世界坐标 y 轴向上。

use cadvas_core::math::{BoundingBox2, Point2, Vector2, ViewRect};

/// 2D相机
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// 相机中心位置（世界坐标）
    pub center: Point2,

    /// 缩放级别（像素/单位）
    pub zoom: f64,

    /// 视口宽度（像素）
    pub viewport_width: f64,

    /// 视口高度（像素）
    pub viewport_height: f64,

    /// 最小缩放
    pub min_zoom: f64,

    /// 最大缩放
    pub max_zoom: f64,
}

impl Camera2D {
    /// 创建新的相机
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            center: Point2::origin(),
            zoom: 1.0,
            viewport_width,
            viewport_height,
            min_zoom: 0.001,
            max_zoom: 10000.0,
        }
    }

    /// 更新视口大小
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// 按屏幕像素位移平移（拖动方向与内容移动方向一致）
    pub fn pan_screen(&mut self, delta: Vector2) {
        self.center.x -= delta.x / self.zoom;
        self.center.y += delta.y / self.zoom;
    }

    /// 缩放相机（以指定屏幕点为中心）
    pub fn zoom_at(&mut self, screen_point: Point2, factor: f64) {
        let world_before = self.screen_to_world(screen_point);

        self.zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);

        let world_after = self.screen_to_world(screen_point);
        self.center += world_before - world_after;
    }

    /// 缩放到指定区域，`padding` 为四周留白像素
    pub fn zoom_to_fit(&mut self, bbox: &BoundingBox2, padding: f64) {
        let usable_width = (self.viewport_width - padding * 2.0).max(1.0);
        let usable_height = (self.viewport_height - padding * 2.0).max(1.0);

        let zoom_x = usable_width / bbox.width().max(f64::EPSILON);
        let zoom_y = usable_height / bbox.height().max(f64::EPSILON);

        self.zoom = zoom_x.min(zoom_y).clamp(self.min_zoom, self.max_zoom);
        self.center = bbox.center();
    }

    /// 屏幕坐标转世界坐标
    pub fn screen_to_world(&self, screen: Point2) -> Point2 {
        let x = (screen.x - self.viewport_width / 2.0) / self.zoom + self.center.x;
        let y = (self.viewport_height / 2.0 - screen.y) / self.zoom + self.center.y;
        Point2::new(x, y)
    }

    /// 世界坐标转屏幕坐标
    pub fn world_to_screen(&self, world: Point2) -> Point2 {
        let x = (world.x - self.center.x) * self.zoom + self.viewport_width / 2.0;
        let y = self.viewport_height / 2.0 - (world.y - self.center.y) * self.zoom;
        Point2::new(x, y)
    }

    /// 获取当前可见的世界区域
    pub fn visible_rect(&self) -> ViewRect {
        let half_width = self.viewport_width / 2.0 / self.zoom;
        let half_height = self.viewport_height / 2.0 / self.zoom;

        ViewRect::new(
            self.center.x - half_width,
            self.center.y - half_height,
            half_width * 2.0,
            half_height * 2.0,
        )
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadvas_core::math::{approx_eq, points_approx_eq};

    #[test]
    fn test_coordinate_conversion() {
        let mut camera = Camera2D::new(800.0, 600.0);
        camera.center = Point2::new(12.0, -3.0);
        camera.zoom = 2.5;

        let world = Point2::new(100.0, 50.0);
        let screen = camera.world_to_screen(world);
        let back = camera.screen_to_world(screen);

        assert!(points_approx_eq(&world, &back));
    }

    #[test]
    fn test_y_axis_points_up() {
        let camera = Camera2D::new(800.0, 600.0);
        let top = camera.screen_to_world(Point2::new(400.0, 0.0));
        let bottom = camera.screen_to_world(Point2::new(400.0, 600.0));
        assert!(top.y > bottom.y);
    }

    #[test]
    fn test_zoom_at_keeps_point_fixed() {
        let mut camera = Camera2D::new(800.0, 600.0);
        let cursor = Point2::new(200.0, 150.0);
        let before = camera.screen_to_world(cursor);

        camera.zoom_at(cursor, 1.1);
        let after = camera.screen_to_world(cursor);

        assert!(approx_eq(camera.zoom, 1.1));
        assert!((before - after).norm() < 1e-9);
    }

    #[test]
    fn test_pan_screen_moves_content_with_cursor() {
        let mut camera = Camera2D::new(800.0, 600.0);
        camera.zoom = 2.0;
        let world = Point2::new(10.0, 10.0);
        let before = camera.world_to_screen(world);

        camera.pan_screen(Vector2::new(30.0, -20.0));
        let after = camera.world_to_screen(world);

        assert!(approx_eq(after.x - before.x, 30.0));
        assert!(approx_eq(after.y - before.y, -20.0));
    }

    #[test]
    fn test_zoom_to_fit_and_visible_rect() {
        let mut camera = Camera2D::new(800.0, 600.0);
        let bbox = BoundingBox2::new(Point2::new(0.0, 0.0), Point2::new(40.0, 10.0));
        camera.zoom_to_fit(&bbox, 0.0);

        assert!(approx_eq(camera.zoom, 20.0));
        let view = camera.visible_rect();
        assert!(approx_eq(view.left(), 0.0));
        assert!(approx_eq(view.right(), 40.0));
        assert!(approx_eq(view.top(), 5.0 - 15.0));
        assert!(approx_eq(view.bottom(), 5.0 + 15.0));
    }
}
