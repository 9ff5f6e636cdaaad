//! 由脚本回调实现的控制台命令

use crate::console::{Command, Console};
use mlua::{Function, Lua, RegistryKey, Variadic, WeakLua};

/// 保存在解释器注册表中的回调引用
///
/// 创建时获取注册表引用，`Drop` 时释放；只持有解释器的弱引用。
pub struct CallbackRef {
    lua: WeakLua,
    key: Option<RegistryKey>,
}

impl CallbackRef {
    pub fn acquire(lua: &Lua, callback: Function) -> mlua::Result<Self> {
        Ok(Self {
            lua: lua.weak(),
            key: Some(lua.create_registry_value(callback)?),
        })
    }

    /// 以字符串位置参数调用回调
    pub fn call(&self, args: &[String]) -> mlua::Result<()> {
        let lua = self
            .lua
            .try_upgrade()
            .ok_or_else(|| mlua::Error::RuntimeError("Lua state has been closed".to_string()))?;
        let key = self
            .key
            .as_ref()
            .ok_or_else(|| mlua::Error::RuntimeError("callback already released".to_string()))?;

        let callback: Function = lua.registry_value(key)?;
        callback.call::<()>(args.iter().cloned().collect::<Variadic<String>>())
    }

    /// 释放注册表引用；解释器已关闭时什么也不做
    fn release(&mut self) {
        let Some(key) = self.key.take() else {
            return;
        };
        if let Some(lua) = self.lua.try_upgrade() {
            if let Err(err) = lua.remove_registry_value(key) {
                tracing::warn!(target: "scripting", %err, "Failed to release callback");
            }
        }
    }
}

impl Drop for CallbackRef {
    fn drop(&mut self) {
        self.release();
    }
}

/// `console.hook(name, callback)` 注册的命令
///
/// 回调抛出的错误写入控制台错误流，不再向上传播。
pub struct LuaCommand {
    name: String,
    callback: CallbackRef,
}

impl LuaCommand {
    pub fn new(lua: &Lua, name: impl Into<String>, callback: Function) -> mlua::Result<Self> {
        Ok(Self {
            name: name.into(),
            callback: CallbackRef::acquire(lua, callback)?,
        })
    }
}

impl Command for LuaCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self, console: &dyn Console) {
        console.info(&format!("{}: script command", self.name));
    }

    fn execute(&self, console: &dyn Console, args: &[String]) {
        if let Err(err) = self.callback.call(args) {
            tracing::warn!(target: "scripting", command = %self.name, %err, "Console hook failed");
            console.error(&err.to_string());
        }
    }
}

impl Drop for LuaCommand {
    fn drop(&mut self) {
        tracing::debug!(target: "scripting", command = %self.name, "Console hook removed");
    }
}

/// `lua <chunk>`：把命令行剩余部分作为 Lua 代码执行
pub struct LuaChunkCommand {
    lua: WeakLua,
}

impl LuaChunkCommand {
    pub const NAME: &'static str = "lua";

    pub fn new(lua: &Lua) -> Self {
        Self { lua: lua.weak() }
    }
}

impl Command for LuaChunkCommand {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn min_args(&self) -> usize {
        1
    }

    fn raw_arguments(&self) -> bool {
        true
    }

    fn help(&self, console: &dyn Console) {
        console.info("lua <code>: run a line of Lua");
    }

    fn execute(&self, console: &dyn Console, args: &[String]) {
        let Some(lua) = self.lua.try_upgrade() else {
            console.error("Lua state has been closed");
            return;
        };
        let source = args.join(" ");
        if let Err(err) = lua.load(source.as_str()).set_name("=console").exec() {
            console.error(&err.to_string());
        }
    }
}
