//! `game` 命名空间：图像、对话框、屏幕尺寸

use super::args::{Args, Arity};
use super::image::ImageHandle;
use super::services::EngineServices;
use mlua::{Lua, MultiValue};
use std::rc::Rc;

pub fn register(lua: &Lua, services: &EngineServices) -> mlua::Result<()> {
    let game = lua.create_table()?;

    // game.newImage()
    let drawables = Rc::clone(&services.drawables);
    let textures = Rc::clone(&services.textures);
    game.set(
        "newImage",
        lua.create_function(move |lua, args: MultiValue| {
            Args::for_function(lua, "game.newImage", args, Arity::Exact(0))?;
            lua.create_userdata(ImageHandle::new(
                Rc::clone(&drawables),
                Rc::clone(&textures),
            ))
        })?,
    )?;

    // game.showText( text [, speaker ] )
    let dialogue = Rc::clone(&services.dialogue);
    game.set(
        "showText",
        lua.create_function(move |lua, args: MultiValue| {
            let args = Args::for_function(lua, "game.showText", args, Arity::Range(1, 2))?;
            let text = args.string(0)?;
            let speaker = args.opt_string(1, "")?;
            dialogue.show_text(&text, &speaker);
            Ok(())
        })?,
    )?;

    // game.screen() -> width, height
    let screen = services.screen;
    game.set(
        "screen",
        lua.create_function(move |lua, args: MultiValue| {
            Args::for_function(lua, "game.screen", args, Arity::Exact(0))?;
            Ok((screen.width, screen.height))
        })?,
    )?;

    lua.globals().set("game", game)
}
