use crate::resources::Texture;
use glam::{DVec2, UVec2};
use std::cell::RefCell;
use std::rc::Rc;

/// 由绘制列表与脚本句柄共同持有的精灵
pub type SharedSprite = Rc<RefCell<Sprite>>;

/// 整数矩形 (纹理子区域)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// 覆盖整张纹理的矩形
    pub fn from_size(size: UVec2) -> Self {
        Self::new(
            0,
            0,
            i32::try_from(size.x).unwrap_or(i32::MAX),
            i32::try_from(size.y).unwrap_or(i32::MAX),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// 可绘制精灵
///
/// 旋转以角度保存，始终规范化到 `[0, 360)`。
#[derive(Debug, Clone)]
pub struct Sprite {
    position: DVec2,
    origin: DVec2,
    scale: DVec2,
    rotation: f64,
    texture_rect: IntRect,
    texture: Option<Rc<Texture>>,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            origin: DVec2::ZERO,
            scale: DVec2::ONE,
            rotation: 0.0,
            texture_rect: IntRect::default(),
            texture: None,
        }
    }
}

impl Sprite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedSprite {
        Rc::new(RefCell::new(self))
    }

    /// 绑定纹理；子区域为空时重置为整张纹理
    pub fn set_texture(&mut self, texture: Rc<Texture>) {
        if self.texture_rect.is_empty() {
            self.texture_rect = IntRect::from_size(texture.size());
        }
        self.texture = Some(texture);
    }

    pub fn texture(&self) -> Option<&Rc<Texture>> {
        self.texture.as_ref()
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    /// 平移
    pub fn translate(&mut self, offset: DVec2) {
        self.position += offset;
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: DVec2) {
        self.origin = origin;
    }

    pub fn scale(&self) -> DVec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: DVec2) {
        self.scale = scale;
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// 设置绝对旋转角度
    pub fn set_rotation(&mut self, degrees: f64) {
        let normalized = degrees.rem_euclid(360.0);
        // rem_euclid 对极小的负数可能返回 360.0
        self.rotation = if normalized >= 360.0 { 0.0 } else { normalized };
    }

    pub fn texture_rect(&self) -> IntRect {
        self.texture_rect
    }

    pub fn set_texture_rect(&mut self, rect: IntRect) {
        self.texture_rect = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sprite() {
        let sprite = Sprite::new();
        assert_eq!(sprite.scale(), DVec2::ONE);
        assert_eq!(sprite.rotation(), 0.0);
        assert!(sprite.texture().is_none());
        assert!(sprite.texture_rect().is_empty());
    }

    #[test]
    fn test_set_texture_resets_empty_rect() {
        let mut sprite = Sprite::new();
        sprite.set_texture(Rc::new(Texture::blank("a", 32, 16)));
        assert_eq!(sprite.texture_rect(), IntRect::new(0, 0, 32, 16));

        // 已设置的子区域在换纹理时保留
        sprite.set_texture_rect(IntRect::new(4, 4, 8, 8));
        sprite.set_texture(Rc::new(Texture::blank("b", 64, 64)));
        assert_eq!(sprite.texture_rect(), IntRect::new(4, 4, 8, 8));
    }

    #[test]
    fn test_rotation_normalized() {
        let mut sprite = Sprite::new();
        sprite.set_rotation(45.0);
        assert_eq!(sprite.rotation(), 45.0);
        sprite.set_rotation(-90.0);
        assert_eq!(sprite.rotation(), 270.0);
        sprite.set_rotation(720.0);
        assert_eq!(sprite.rotation(), 0.0);
    }

    #[test]
    fn test_translate() {
        let mut sprite = Sprite::new();
        sprite.set_position(DVec2::new(10.0, 20.0));
        sprite.translate(DVec2::new(-5.0, 2.5));
        assert_eq!(sprite.position(), DVec2::new(5.0, 22.5));
    }
}
