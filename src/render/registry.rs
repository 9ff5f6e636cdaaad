use super::sprite::SharedSprite;
use std::cell::RefCell;
use std::rc::Rc;

/// 每帧绘制的对象集合
///
/// 成员关系是集合语义：同一个精灵重复注册不会产生第二个条目。
pub trait DrawableRegistry {
    fn register(&self, sprite: &SharedSprite);
    fn deregister(&self, sprite: &SharedSprite);
    fn contains(&self, sprite: &SharedSprite) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 按注册顺序绘制的精灵列表
#[derive(Debug, Default)]
pub struct DrawList {
    sprites: RefCell<Vec<SharedSprite>>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前帧需要绘制的精灵（按注册顺序）
    pub fn snapshot(&self) -> Vec<SharedSprite> {
        self.sprites.borrow().clone()
    }
}

impl DrawableRegistry for DrawList {
    fn register(&self, sprite: &SharedSprite) {
        let mut sprites = self.sprites.borrow_mut();
        if sprites.iter().any(|s| Rc::ptr_eq(s, sprite)) {
            tracing::warn!(target: "render", "Sprite already registered for drawing");
            return;
        }
        sprites.push(Rc::clone(sprite));
    }

    fn deregister(&self, sprite: &SharedSprite) {
        self.sprites.borrow_mut().retain(|s| !Rc::ptr_eq(s, sprite));
    }

    fn contains(&self, sprite: &SharedSprite) -> bool {
        self.sprites.borrow().iter().any(|s| Rc::ptr_eq(s, sprite))
    }

    fn len(&self) -> usize {
        self.sprites.borrow().len()
    }
}
