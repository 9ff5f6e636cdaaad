//! 游戏内日历与时钟
//!
//! 每个季节30天，每年4个季节。脚本通过 `time.date()` / `time.hour()`
//! 读取当前时间，每次调用都会重新查询 [`Clock`]。

pub mod calendar;

pub use calendar::GameClock;

use serde::{Deserialize, Serialize};
use std::fmt;

/// 每季天数
pub const DAYS_PER_SEASON: u32 = 30;
/// 每年季节数
pub const SEASONS_PER_YEAR: u32 = 4;
pub const MINUTES_PER_HOUR: u32 = 60;
pub const HOURS_PER_DAY: u32 = 24;

/// 季节
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// 按序号 (0-3) 取季节，超出范围时取模
    pub fn from_ordinal(ordinal: u32) -> Self {
        match ordinal % SEASONS_PER_YEAR {
            0 => Season::Spring,
            1 => Season::Summer,
            2 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        };
        f.write_str(name)
    }
}

/// 游戏内日期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDate {
    /// 1-30
    pub day: u8,
    pub season: Season,
    /// 从1开始
    pub year: u32,
}

/// 一天中的时刻
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
}

/// 时间服务
pub trait Clock {
    fn current_date(&self) -> GameDate;
    fn current_time(&self) -> TimeOfDay;
}
