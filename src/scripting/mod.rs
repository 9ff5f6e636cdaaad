//! Lua 脚本绑定
//!
//! 向解释器注册 `game`、`console`、`time` 三个全局命名空间。绑定层不拥有任何
//! 引擎服务，只通过 [`EngineServices`] 中的接口访问它们。

pub mod args;
pub mod console;
pub mod game;
pub mod hook;
pub mod image;
pub mod services;
pub mod time;


pub use args::{Args, Arity};
pub use hook::{CallbackRef, LuaChunkCommand, LuaCommand};
pub use image::ImageHandle;
pub use services::{EngineServices, StandaloneServices};

use crate::core::error::{ScriptError, ScriptResult};
use mlua::{FromLuaMulti, Lua};
use std::path::Path;

/// 在已有解释器上注册全部命名空间
pub fn install(lua: &Lua, services: &EngineServices) -> mlua::Result<()> {
    game::register(lua, services)?;
    console::register(lua, services)?;
    time::register(lua, services)?;
    tracing::debug!(target: "scripting", "Script namespaces installed");
    Ok(())
}

/// 创建注册好全部命名空间的新解释器
pub fn new_state(services: &EngineServices) -> mlua::Result<Lua> {
    let lua = Lua::new();
    install(&lua, services)?;
    Ok(lua)
}

/// 持有解释器与其服务的脚本宿主
pub struct ScriptHost {
    lua: Lua,
    services: EngineServices,
}

impl ScriptHost {
    /// 创建解释器、注册命名空间，并在控制台上挂接 `lua` 命令
    pub fn new(services: EngineServices) -> ScriptResult<Self> {
        let lua = new_state(&services)
            .map_err(|err| ScriptError::InvalidBinding(err.to_string()))?;
        services
            .console
            .add_command(Box::new(LuaChunkCommand::new(&lua)));

        tracing::info!(target: "scripting", "Script host ready");
        Ok(Self { lua, services })
    }

    pub fn lua(&self) -> &Lua {
        &self.lua
    }

    pub fn services(&self) -> &EngineServices {
        &self.services
    }

    /// 执行一段代码，`name` 出现在错误信息中
    pub fn exec(&self, name: &str, source: &str) -> ScriptResult<()> {
        self.lua
            .load(source)
            .set_name(format!("={}", name))
            .exec()?;
        Ok(())
    }

    /// 求值表达式或代码块
    pub fn eval<R: FromLuaMulti>(&self, source: &str) -> ScriptResult<R> {
        Ok(self.lua.load(source).eval::<R>()?)
    }

    pub fn run_file(&self, path: impl AsRef<Path>) -> ScriptResult<()> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ScriptError::NotFound(path.display().to_string()));
        }
        let source = std::fs::read_to_string(path).map_err(mlua::Error::external)?;

        tracing::info!(target: "scripting", path = %path.display(), "Running script");
        self.lua
            .load(source.as_str())
            .set_name(format!("@{}", path.display()))
            .exec()?;
        Ok(())
    }

    /// 完整回收两轮，让刚被回收的句柄的析构也执行完
    pub fn collect_garbage(&self) -> ScriptResult<()> {
        self.lua.gc_collect()?;
        self.lua.gc_collect()?;
        Ok(())
    }
}
