use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 显示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 屏幕分辨率，脚本通过 `game.screen()` 读取
    pub screen: ScreenSize,
}

impl_default!(DisplayConfig {
    screen: ScreenSize::default(),
});

impl DisplayConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::ValidationError(
                "Invalid screen size".to_string(),
            ));
        }
        Ok(())
    }
}

/// 屏幕尺寸（像素）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    /// 宽度
    pub width: u32,
    /// 高度
    pub height: u32,
}

impl_default!(ScreenSize {
    width: 640,
    height: 480,
});
