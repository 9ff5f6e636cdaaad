use super::{
    Clock, GameDate, Season, TimeOfDay, DAYS_PER_SEASON, HOURS_PER_DAY, MINUTES_PER_HOUR,
    SEASONS_PER_YEAR,
};
use crate::config::ClockConfig;
use std::cell::Cell;

const MINUTES_PER_DAY: u64 = (MINUTES_PER_HOUR * HOURS_PER_DAY) as u64;
const MINUTES_PER_SEASON: u64 = MINUTES_PER_DAY * DAYS_PER_SEASON as u64;
const MINUTES_PER_YEAR: u64 = MINUTES_PER_SEASON * SEASONS_PER_YEAR as u64;

/// 以分钟计数的游戏时钟
///
/// 更新循环调用 [`GameClock::advance`] 推进时间；所有日期字段都从总分钟数推导。
#[derive(Debug, Default)]
pub struct GameClock {
    elapsed: Cell<u64>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从配置的起始时间创建时钟
    pub fn from_config(config: &ClockConfig) -> Self {
        let years = u64::from(config.year.saturating_sub(1));
        let days = u64::from(config.day.saturating_sub(1));
        let elapsed = years * MINUTES_PER_YEAR
            + u64::from(config.season.ordinal()) * MINUTES_PER_SEASON
            + days * MINUTES_PER_DAY
            + u64::from(config.hour) * u64::from(MINUTES_PER_HOUR)
            + u64::from(config.minute);

        Self {
            elapsed: Cell::new(elapsed),
        }
    }

    /// 推进若干分钟
    pub fn advance(&self, minutes: u64) {
        self.elapsed.set(self.elapsed.get().saturating_add(minutes));
    }
}

impl Clock for GameClock {
    fn current_date(&self) -> GameDate {
        let elapsed = self.elapsed.get();
        let day = (elapsed % MINUTES_PER_SEASON) / MINUTES_PER_DAY + 1;
        let season = (elapsed % MINUTES_PER_YEAR) / MINUTES_PER_SEASON;
        let year = elapsed / MINUTES_PER_YEAR + 1;

        GameDate {
            day: day as u8,
            season: Season::from_ordinal(season as u32),
            year: u32::try_from(year).unwrap_or(u32::MAX),
        }
    }

    fn current_time(&self) -> TimeOfDay {
        let minutes_today = self.elapsed.get() % MINUTES_PER_DAY;
        TimeOfDay {
            hour: (minutes_today / u64::from(MINUTES_PER_HOUR)) as u8,
            minute: (minutes_today % u64::from(MINUTES_PER_HOUR)) as u8,
        }
    }
}
