//! 统一错误处理模块
//!
//! 提供脚本桥接层范围内的统一错误类型定义
//!
//! ## 错误类型分层
//!
//! - **参数错误** (`BindingError`): 绑定调用的参数个数或类型不匹配，脚本可以用 `pcall` 捕获
//! - **资源错误** (`AssetError`): 纹理加载失败，原样传递给脚本
//! - **控制台错误** (`ConsoleError`): 命令解析与分发失败，写入控制台错误流
//! - **脚本错误** (`ScriptError`): 宿主侧执行脚本失败
//!
//! `EngineError` 汇总以上所有错误，供二进制入口使用。

use crate::config::ConfigError;
use thiserror::Error;

/// 引擎核心错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 资源管理错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("Asset name must not be empty")]
    EmptyName,

    #[error("Asset name must stay inside the asset root: {name}")]
    OutsideRoot { name: String },

    #[error("Asset not found: {path}")]
    NotFound { path: String },

    #[error("Failed to load asset: {path}, reason: {reason}")]
    LoadFailed { path: String, reason: String },
}

/// 脚本系统错误
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Script not found: {0}")]
    NotFound(String),

    #[error("Invalid script binding: {0}")]
    InvalidBinding(String),

    #[error("Script runtime error: {0}")]
    Lua(#[from] mlua::Error),
}

/// 绑定调用的参数错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindingError {
    #[error("bad argument count to '{operation}' (expected {expected}, got {got})")]
    Arity {
        operation: &'static str,
        expected: String,
        got: usize,
    },

    #[error("bad argument #{position} to '{operation}' ({expected} expected, got {got})")]
    Type {
        operation: &'static str,
        position: usize,
        expected: &'static str,
        got: String,
    },

    #[error("'{operation}' requires a loaded texture")]
    NoTexture { operation: &'static str },
}

/// 控制台命令错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command '{command}' expects at least {min} argument(s), got {got}")]
    MissingArguments {
        command: String,
        min: usize,
        got: usize,
    },
}

impl From<BindingError> for mlua::Error {
    fn from(err: BindingError) -> Self {
        mlua::Error::external(err)
    }
}

impl From<AssetError> for mlua::Error {
    fn from(err: AssetError) -> Self {
        mlua::Error::external(err)
    }
}

/// 引擎结果类型别名
pub type EngineResult<T> = Result<T, EngineError>;
pub type AssetResult<T> = Result<T, AssetError>;
pub type ScriptResult<T> = Result<T, ScriptError>;
pub type BindingResult<T> = Result<T, BindingError>;
pub type ConsoleResult<T> = Result<T, ConsoleError>;
