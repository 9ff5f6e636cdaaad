use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 控制台配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// 回滚缓冲区保留的最大行数
    pub max_lines: usize,

    /// 命令历史条数
    pub history: usize,

    /// 是否注册内置命令 (help / echo / clear)
    pub builtins: bool,
}

impl_default!(ConsoleConfig {
    max_lines: 256,
    history: 64,
    builtins: true,
});

impl ConsoleConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_lines == 0 {
            return Err(ConfigError::ValidationError(
                "Console must keep at least one line".to_string(),
            ));
        }
        Ok(())
    }
}
