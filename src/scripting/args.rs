//! 绑定调用的参数校验
//!
//! 每个绑定声明自己接受的参数个数 ([`Arity`])，在产生任何副作用之前检查；
//! 类型转换交给解释器本身完成，规则与 `luaL_check*` 一致：数字接受数字字符串
//! （包括十六进制），整数接受有精确整数值的浮点数，字符串接受数字。

use crate::core::error::{BindingError, BindingResult};
use mlua::{Function, Lua, MultiValue, Value};
use std::fmt;

/// 允许的参数个数（方法调用不计接收者）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Range(usize, usize),
    OneOf(&'static [usize]),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::Range(lo, hi) => (lo..=hi).contains(&count),
            Arity::OneOf(counts) => counts.contains(&count),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::Range(lo, hi) => write!(f, "{}-{}", lo, hi),
            Arity::OneOf(counts) => {
                let parts: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
                f.write_str(&parts.join(" or "))
            }
        }
    }
}

/// 已通过个数检查的参数列表
pub struct Args {
    lua: Lua,
    operation: &'static str,
    /// 方法调用时接收者占据 #1
    offset: usize,
    values: Vec<Value>,
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("operation", &self.operation)
            .field("offset", &self.offset)
            .field("values", &self.values)
            .finish()
    }
}

impl Args {
    /// 普通函数 (`game.showText(...)`)
    pub fn for_function(
        lua: &Lua,
        operation: &'static str,
        values: MultiValue,
        arity: Arity,
    ) -> BindingResult<Self> {
        Self::check(lua, operation, 0, values, arity)
    }

    /// 句柄方法 (`image:origin(...)`)
    pub fn for_method(
        lua: &Lua,
        operation: &'static str,
        values: MultiValue,
        arity: Arity,
    ) -> BindingResult<Self> {
        Self::check(lua, operation, 1, values, arity)
    }

    fn check(
        lua: &Lua,
        operation: &'static str,
        offset: usize,
        values: MultiValue,
        arity: Arity,
    ) -> BindingResult<Self> {
        let values: Vec<Value> = values.into_iter().collect();
        if !arity.accepts(values.len()) {
            return Err(BindingError::Arity {
                operation,
                expected: arity.to_string(),
                got: values.len(),
            });
        }
        Ok(Self {
            lua: lua.clone(),
            operation,
            offset,
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 第 `index` 个参数（从0开始）的类型错误
    pub fn type_error(&self, index: usize, expected: &'static str) -> BindingError {
        BindingError::Type {
            operation: self.operation,
            position: index + 1 + self.offset,
            expected,
            got: self
                .values
                .get(index)
                .map(|v| v.type_name())
                .unwrap_or("no value")
                .to_string(),
        }
    }

    fn value(&self, index: usize) -> Value {
        self.values.get(index).cloned().unwrap_or(Value::Nil)
    }

    pub fn number(&self, index: usize) -> BindingResult<f64> {
        self.opt_number(index)
            .ok_or_else(|| self.type_error(index, "number"))
    }

    /// 数值参数；缺失或不是数字时返回 `None`
    pub fn opt_number(&self, index: usize) -> Option<f64> {
        self.lua.coerce_number(self.value(index)).ok().flatten()
    }

    pub fn integer(&self, index: usize) -> BindingResult<i64> {
        self.lua
            .coerce_integer(self.value(index))
            .ok()
            .flatten()
            .ok_or_else(|| self.type_error(index, "integer"))
    }

    pub fn int32(&self, index: usize) -> BindingResult<i32> {
        let value = self.integer(index)?;
        i32::try_from(value).map_err(|_| self.type_error(index, "32-bit integer"))
    }

    pub fn string(&self, index: usize) -> BindingResult<String> {
        self.lua
            .coerce_string(self.value(index))
            .ok()
            .flatten()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| self.type_error(index, "string"))
    }

    /// 缺失或为 nil 时使用默认值
    pub fn opt_string(&self, index: usize, default: &str) -> BindingResult<String> {
        match self.values.get(index) {
            None | Some(Value::Nil) => Ok(default.to_string()),
            Some(_) => self.string(index),
        }
    }

    /// 非空字符串（接受数字）
    pub fn non_empty_string(&self, index: usize) -> BindingResult<String> {
        let text = self.string(index)?;
        if text.is_empty() {
            return Err(BindingError::Type {
                operation: self.operation,
                position: index + 1 + self.offset,
                expected: "non-empty string",
                got: "empty string".to_string(),
            });
        }
        Ok(text)
    }

    /// 只接受真正的字符串，不做数字转换
    pub fn strict_string(&self, index: usize) -> BindingResult<String> {
        match self.values.get(index) {
            Some(Value::String(s)) => Ok(s.to_string_lossy().to_string()),
            _ => Err(self.type_error(index, "string")),
        }
    }

    pub fn boolean(&self, index: usize) -> BindingResult<bool> {
        match self.values.get(index) {
            Some(Value::Boolean(b)) => Ok(*b),
            _ => Err(self.type_error(index, "boolean")),
        }
    }

    pub fn callable(&self, index: usize) -> BindingResult<Function> {
        match self.values.get(index) {
            Some(Value::Function(f)) => Ok(f.clone()),
            _ => Err(self.type_error(index, "function")),
        }
    }
}
