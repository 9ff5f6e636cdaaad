use std::cell::RefCell;
use std::collections::VecDeque;

/// 对话框显示接口
pub trait DialogueBox {
    /// 显示一段文本；`speaker` 为空表示旁白
    fn show_text(&self, text: &str, speaker: &str);
}

/// 一条待显示的对话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}

/// 先进先出的对话队列
#[derive(Debug, Default)]
pub struct DialogueQueue {
    pending: RefCell<VecDeque<DialogueLine>>,
}

impl DialogueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出下一条对话（玩家确认后调用）
    pub fn advance(&self) -> Option<DialogueLine> {
        self.pending.borrow_mut().pop_front()
    }

    /// 当前正在显示的对话
    pub fn current(&self) -> Option<DialogueLine> {
        self.pending.borrow().front().cloned()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl DialogueBox for DialogueQueue {
    fn show_text(&self, text: &str, speaker: &str) {
        tracing::debug!(target: "ui", speaker, text, "Dialogue queued");
        self.pending.borrow_mut().push_back(DialogueLine {
            speaker: speaker.to_string(),
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialogue_fifo() {
        let queue = DialogueQueue::new();
        queue.show_text("Hello there.", "Twilight");
        queue.show_text("...", "");

        assert_eq!(queue.pending(), 2);
        assert_eq!(queue.current().unwrap().speaker, "Twilight");

        let first = queue.advance().unwrap();
        assert_eq!(first.text, "Hello there.");
        let second = queue.advance().unwrap();
        assert!(second.speaker.is_empty());
        assert!(queue.advance().is_none());
    }
}
