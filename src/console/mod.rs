//! 游戏内控制台
//!
//! 面向行的输出缓冲区加上命令表。脚本绑定层只依赖 [`Console`] 与
//! [`Command`] 两个接口，具体实现见 [`CommandConsole`]。

pub mod command_console;

pub use command_console::{split_command_line, CommandConsole};

/// 控制台颜色，按 `0xRRGGBBAA` 打包
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsoleColor(pub u32);

impl ConsoleColor {
    pub const TEXT: Self = Self(0xFFFF_FFFF);
    pub const INFO: Self = Self(0x80C0_FFFF);
    pub const WARNING: Self = Self(0xFFD0_40FF);
    pub const ERROR: Self = Self(0xFF50_50FF);

    /// 脚本传入的数值颜色码；超出范围的值会被截断
    pub fn from_code(code: f64) -> Self {
        Self(code as u32)
    }

    pub fn rgba(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// 回滚缓冲区中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub text: String,
    pub color: ConsoleColor,
}

/// 控制台输出与命令分发接口
pub trait Console {
    /// 以指定颜色追加一行
    fn write_line(&self, text: &str, color: ConsoleColor);

    fn info(&self, text: &str) {
        self.write_line(text, ConsoleColor::INFO);
    }

    /// 写入错误流
    fn error(&self, text: &str) {
        self.write_line(text, ConsoleColor::ERROR);
    }

    /// 像交互输入一样执行一行命令；失败信息写入错误流
    fn execute(&self, line: &str);

    /// 注册命令，控制台获得其所有权
    fn add_command(&self, command: Box<dyn Command>);

    /// 移除最近注册的同名命令
    fn remove_command(&self, name: &str) -> bool;
}

/// 控制台命令
pub trait Command {
    fn name(&self) -> &str;

    /// 最少参数个数（不含命令名）
    fn min_args(&self) -> usize {
        0
    }

    /// 为真时命令名之后的整行原样作为唯一参数传入
    fn raw_arguments(&self) -> bool {
        false
    }

    fn help(&self, console: &dyn Console) {
        console.info(&format!("usage: {}", self.name()));
    }

    fn execute(&self, console: &dyn Console, args: &[String]);
}
