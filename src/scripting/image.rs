//! `game.newImage()` 返回的图像句柄
//!
//! 句柄持有一个精灵和它绑定的纹理。`displayed` 为真当且仅当精灵在绘制列表中；
//! 每次状态切换都同步维护这一点，句柄被回收时也会先从绘制列表中移除。

use super::args::{Args, Arity};
use crate::core::error::{AssetResult, BindingError, BindingResult};
use crate::render::{DrawableRegistry, IntRect, SharedSprite, Sprite};
use crate::resources::TextureLoader;
use glam::{DVec2, UVec2};
use mlua::{MetaMethod, MultiValue, UserData, UserDataMethods};
use std::rc::Rc;

pub struct ImageHandle {
    sprite: SharedSprite,
    displayed: bool,
    drawables: Rc<dyn DrawableRegistry>,
    textures: Rc<dyn TextureLoader>,
}

impl ImageHandle {
    /// 未绑定纹理、未显示的新句柄
    pub fn new(drawables: Rc<dyn DrawableRegistry>, textures: Rc<dyn TextureLoader>) -> Self {
        Self {
            sprite: Sprite::new().into_shared(),
            displayed: false,
            drawables,
            textures,
        }
    }

    pub fn sprite(&self) -> &SharedSprite {
        &self.sprite
    }

    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    /// 加载纹理并绑定到精灵，旧纹理的引用随之释放
    pub fn load(&mut self, name: &str) -> AssetResult<()> {
        let texture = self.textures.load(name)?;
        self.sprite.borrow_mut().set_texture(texture);
        Ok(())
    }

    /// 切换显示状态；重复设置同一状态不会重复注册
    pub fn set_displayed(&mut self, displayed: bool) {
        match (self.displayed, displayed) {
            (false, true) => self.drawables.register(&self.sprite),
            (true, false) => self.drawables.deregister(&self.sprite),
            _ => return,
        }
        self.displayed = displayed;
    }

    pub fn texture_size(&self) -> BindingResult<UVec2> {
        self.sprite
            .borrow()
            .texture()
            .map(|texture| texture.size())
            .ok_or(BindingError::NoTexture {
                operation: "image:size",
            })
    }
}

impl Drop for ImageHandle {
    fn drop(&mut self) {
        if self.displayed {
            self.drawables.deregister(&self.sprite);
            self.displayed = false;
        }
        tracing::trace!(target: "scripting", "Image handle freed");
    }
}

impl UserData for ImageHandle {
    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        // image:load( name )
        methods.add_method_mut("load", |lua, this, args: MultiValue| {
            let args = Args::for_method(lua, "image:load", args, Arity::Exact(1))?;
            let name = args.non_empty_string(0)?;
            this.load(&name)?;
            Ok(())
        });

        // image:display( flag )
        methods.add_method_mut("display", |lua, this, args: MultiValue| {
            let args = Args::for_method(lua, "image:display", args, Arity::Exact(1))?;
            this.set_displayed(args.boolean(0)?);
            Ok(())
        });

        // image:move( dx, dy )
        methods.add_method_mut("move", |lua, this, args: MultiValue| {
            let args = Args::for_method(lua, "image:move", args, Arity::Exact(2))?;
            let offset = DVec2::new(args.number(0)?, args.number(1)?);
            this.sprite.borrow_mut().translate(offset);
            Ok(())
        });

        // image:origin() / image:origin( x, y )
        methods.add_method_mut("origin", |lua, this, args: MultiValue| {
            let args = Args::for_method(lua, "image:origin", args, Arity::OneOf(&[0, 2]))?;
            let mut sprite = this.sprite.borrow_mut();
            if args.len() == 2 {
                sprite.set_origin(DVec2::new(args.number(0)?, args.number(1)?));
            }
            let origin = sprite.origin();
            Ok((origin.x, origin.y))
        });

        // image:position() / image:position( x, y )
        methods.add_method_mut("position", |lua, this, args: MultiValue| {
            let args = Args::for_method(lua, "image:position", args, Arity::OneOf(&[0, 2]))?;
            let mut sprite = this.sprite.borrow_mut();
            if args.len() == 2 {
                sprite.set_position(DVec2::new(args.number(0)?, args.number(1)?));
            }
            let position = sprite.position();
            Ok((position.x, position.y))
        });

        // image:rotate() / image:rotate( degrees )
        // 设置的是绝对角度
        methods.add_method_mut("rotate", |lua, this, args: MultiValue| {
            let args = Args::for_method(lua, "image:rotate", args, Arity::OneOf(&[0, 1]))?;
            let mut sprite = this.sprite.borrow_mut();
            if args.len() == 1 {
                sprite.set_rotation(args.number(0)?);
            }
            Ok(sprite.rotation())
        });

        // image:scale() / image:scale( x, y )
        methods.add_method_mut("scale", |lua, this, args: MultiValue| {
            let args = Args::for_method(lua, "image:scale", args, Arity::OneOf(&[0, 2]))?;
            let mut sprite = this.sprite.borrow_mut();
            if args.len() == 2 {
                sprite.set_scale(DVec2::new(args.number(0)?, args.number(1)?));
            }
            let scale = sprite.scale();
            Ok((scale.x, scale.y))
        });

        // image:size() -> width, height
        methods.add_method("size", |lua, this, args: MultiValue| {
            Args::for_method(lua, "image:size", args, Arity::Exact(0))?;
            let size = this.texture_size()?;
            Ok((size.x, size.y))
        });

        // image:subrect() / image:subrect( x, y, w, h )
        methods.add_method_mut("subrect", |lua, this, args: MultiValue| {
            let args = Args::for_method(lua, "image:subrect", args, Arity::OneOf(&[0, 4]))?;
            let mut sprite = this.sprite.borrow_mut();
            if args.len() == 4 {
                sprite.set_texture_rect(IntRect::new(
                    args.int32(0)?,
                    args.int32(1)?,
                    args.int32(2)?,
                    args.int32(3)?,
                ));
            }
            let rect = sprite.texture_rect();
            Ok((rect.left, rect.top, rect.width, rect.height))
        });

        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            let sprite = this.sprite.borrow();
            let texture = sprite.texture().map(|t| t.name()).unwrap_or("<none>");
            Ok(format!(
                "game.image({}, displayed={})",
                texture, this.displayed
            ))
        });
    }
}
