//! UI 系统模块
//!
//! 目前只包含对话框：脚本通过 `game.showText` 推送文本，界面层逐条取出显示。

pub mod dialogue;

pub use dialogue::{DialogueBox, DialogueLine, DialogueQueue};
