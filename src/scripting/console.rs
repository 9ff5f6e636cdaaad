//! `console` 命名空间

use super::args::{Args, Arity};
use super::hook::LuaCommand;
use super::services::EngineServices;
use crate::console::ConsoleColor;
use mlua::{Lua, MultiValue};
use std::rc::Rc;

pub fn register(lua: &Lua, services: &EngineServices) -> mlua::Result<()> {
    let table = lua.create_table()?;

    // console.write( str [, color ] )
    // 颜色缺省或不是数字时使用 INFO
    let console = Rc::clone(&services.console);
    table.set(
        "write",
        lua.create_function(move |lua, args: MultiValue| {
            let args = Args::for_function(lua, "console.write", args, Arity::Range(1, 2))?;
            let text = args.string(0)?;
            let color = args
                .opt_number(1)
                .map(ConsoleColor::from_code)
                .unwrap_or(ConsoleColor::INFO);
            console.write_line(&text, color);
            Ok(())
        })?,
    )?;

    // console.execute( str )
    let console = Rc::clone(&services.console);
    table.set(
        "execute",
        lua.create_function(move |lua, args: MultiValue| {
            let args = Args::for_function(lua, "console.execute", args, Arity::Exact(1))?;
            console.execute(&args.string(0)?);
            Ok(())
        })?,
    )?;

    // console.hook( name, callback )
    let console = Rc::clone(&services.console);
    table.set(
        "hook",
        lua.create_function(move |lua, args: MultiValue| {
            let args = Args::for_function(lua, "console.hook", args, Arity::Exact(2))?;
            let name = args.strict_string(0)?;
            // 命令行切分后不可能得到的名字永远无法被调用
            if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '"') {
                return Err(args.type_error(0, "command name").into());
            }
            let callback = args.callable(1)?;

            let command = LuaCommand::new(lua, name.as_str(), callback)?;
            console.add_command(Box::new(command));
            console.info(&format!("Lua: hooked console function {}", name));
            tracing::info!(target: "scripting", name = %name, "Console hook registered");
            Ok(())
        })?,
    )?;

    lua.globals().set("console", table)
}
