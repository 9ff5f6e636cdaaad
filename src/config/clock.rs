use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::time::{Season, DAYS_PER_SEASON};
use serde::{Deserialize, Serialize};

/// 游戏内时钟的起始时间
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// 起始年份（从1开始）
    pub year: u32,
    /// 起始季节
    pub season: Season,
    /// 起始日期 (1-30)
    pub day: u8,
    /// 起始小时 (0-23)
    pub hour: u8,
    /// 起始分钟 (0-59)
    pub minute: u8,
}

impl_default!(ClockConfig {
    year: 1,
    season: Season::Spring,
    day: 1,
    hour: 6,
    minute: 0,
});

impl ClockConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.year == 0 {
            return Err(ConfigError::ValidationError("Year starts at 1".to_string()));
        }
        if self.day == 0 || u32::from(self.day) > DAYS_PER_SEASON {
            return Err(ConfigError::ValidationError(format!(
                "Day must be within 1-{}",
                DAYS_PER_SEASON
            )));
        }
        if self.hour > 23 || self.minute > 59 {
            return Err(ConfigError::ValidationError(
                "Invalid start time of day".to_string(),
            ));
        }
        Ok(())
    }
}
