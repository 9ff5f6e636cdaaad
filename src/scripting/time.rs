//! `time` 命名空间，每次调用都重新查询时钟

use super::args::{Args, Arity};
use super::services::EngineServices;
use mlua::{Lua, MultiValue};
use std::rc::Rc;

pub fn register(lua: &Lua, services: &EngineServices) -> mlua::Result<()> {
    let table = lua.create_table()?;

    // time.date() -> day, season, year
    let clock = Rc::clone(&services.clock);
    table.set(
        "date",
        lua.create_function(move |lua, args: MultiValue| {
            Args::for_function(lua, "time.date", args, Arity::Exact(0))?;
            let date = clock.current_date();
            Ok((date.day, date.season.ordinal(), date.year))
        })?,
    )?;

    // time.hour() -> hour, minute
    let clock = Rc::clone(&services.clock);
    table.set(
        "hour",
        lua.create_function(move |lua, args: MultiValue| {
            Args::for_function(lua, "time.hour", args, Arity::Exact(0))?;
            let now = clock.current_time();
            Ok((now.hour, now.minute))
        })?,
    )?;

    lua.globals().set("time", table)
}
