use super::{Command, Console, ConsoleColor, ConsoleLine};
use crate::config::ConsoleConfig;
use crate::core::error::{ConsoleError, ConsoleResult};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

const BUILTINS: [(&str, &str); 3] = [
    ("help", "help [command]: list commands or show help for one"),
    ("echo", "echo <message>: print a message"),
    ("clear", "clear: clear console output"),
];

/// 带命令表的控制台
///
/// 分发命令时不持有任何内部借用，因此命令（包括脚本钩子）可以在执行中
/// 写控制台、注册或移除命令。
pub struct CommandConsole {
    /// 回滚缓冲区
    lines: RefCell<VecDeque<ConsoleLine>>,
    max_lines: usize,
    /// 累计写入行数
    written: Cell<u64>,
    /// 命令表，按注册顺序保存
    commands: RefCell<Vec<Rc<dyn Command>>>,
    /// 命令历史
    history: RefCell<VecDeque<String>>,
    max_history: usize,
    builtins: bool,
}

impl CommandConsole {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            lines: RefCell::new(VecDeque::new()),
            max_lines: config.max_lines.max(1),
            written: Cell::new(0),
            commands: RefCell::new(Vec::new()),
            history: RefCell::new(VecDeque::new()),
            max_history: config.history,
            builtins: config.builtins,
        }
    }

    /// 缓冲区中的全部行
    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.lines.borrow().iter().cloned().collect()
    }

    /// 自累计写入数 `mark` 之后写入、且仍在缓冲区中的行
    pub fn lines_since(&self, mark: u64) -> Vec<ConsoleLine> {
        let lines = self.lines.borrow();
        let first_seq = self.written.get() - lines.len() as u64;
        let skip = mark.saturating_sub(first_seq) as usize;
        lines.iter().skip(skip).cloned().collect()
    }

    /// 累计写入行数（不受清屏与淘汰影响）
    pub fn written(&self) -> u64 {
        self.written.get()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().iter().cloned().collect()
    }

    /// 已注册命令名（不含内置命令），同名命令只列一次
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .commands
            .borrow()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// 解析并执行一行命令
    pub fn dispatch(&self, line: &str) -> ConsoleResult<()> {
        let mut tokens = split_command_line(line);
        if tokens.is_empty() {
            return Err(ConsoleError::Empty);
        }
        self.remember(line);

        let name = tokens.remove(0);
        let mut args = tokens;

        if let Some(command) = self.find(&name) {
            if command.raw_arguments() {
                args = raw_remainder(line).into_iter().collect();
            }
            if args.len() < command.min_args() {
                return Err(ConsoleError::MissingArguments {
                    command: name,
                    min: command.min_args(),
                    got: args.len(),
                });
            }
            tracing::debug!(target: "console", command = %name, args = args.len(), "Executing command");
            command.execute(self, &args);
            return Ok(());
        }

        if self.builtins && self.run_builtin(&name, &args) {
            return Ok(());
        }

        Err(ConsoleError::UnknownCommand(name))
    }

    /// 最近注册的同名命令优先响应
    fn find(&self, name: &str) -> Option<Rc<dyn Command>> {
        self.commands
            .borrow()
            .iter()
            .rev()
            .find(|c| c.name() == name)
            .cloned()
    }

    fn remember(&self, line: &str) {
        if self.max_history == 0 {
            return;
        }
        let mut history = self.history.borrow_mut();
        history.push_back(line.to_string());
        while history.len() > self.max_history {
            history.pop_front();
        }
    }

    fn run_builtin(&self, name: &str, args: &[String]) -> bool {
        match name {
            "help" => {
                match args.first() {
                    Some(topic) => self.show_help(topic),
                    None => {
                        let mut names: Vec<String> =
                            BUILTINS.iter().map(|(n, _)| n.to_string()).collect();
                        names.extend(self.command_names());
                        names.sort();
                        names.dedup();
                        self.info(&format!("Available commands: {}", names.join(", ")));
                    }
                }
                true
            }
            "echo" => {
                self.write_line(&args.join(" "), ConsoleColor::TEXT);
                true
            }
            "clear" => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    fn show_help(&self, topic: &str) {
        if let Some(command) = self.find(topic) {
            command.help(self);
        } else if let Some((_, text)) = BUILTINS.iter().find(|(n, _)| *n == topic) {
            self.info(text);
        } else {
            self.error(&ConsoleError::UnknownCommand(topic.to_string()).to_string());
        }
    }
}

impl Console for CommandConsole {
    fn write_line(&self, text: &str, color: ConsoleColor) {
        let mut lines = self.lines.borrow_mut();
        lines.push_back(ConsoleLine {
            text: text.to_string(),
            color,
        });
        while lines.len() > self.max_lines {
            lines.pop_front();
        }
        self.written.set(self.written.get() + 1);
    }

    fn execute(&self, line: &str) {
        match self.dispatch(line) {
            Ok(()) | Err(ConsoleError::Empty) => {}
            Err(err) => {
                tracing::debug!(target: "console", %err, "Command failed");
                self.error(&err.to_string());
            }
        }
    }

    fn add_command(&self, command: Box<dyn Command>) {
        tracing::debug!(target: "console", name = command.name(), "Command registered");
        if self.find(command.name()).is_some() {
            self.write_line(
                &format!("Command '{}' shadows an earlier registration", command.name()),
                ConsoleColor::WARNING,
            );
        }
        self.commands.borrow_mut().push(Rc::from(command));
    }

    fn remove_command(&self, name: &str) -> bool {
        // 先取出再释放，命令的 Drop 可能会回到控制台
        let removed = {
            let mut commands = self.commands.borrow_mut();
            commands
                .iter()
                .rposition(|c| c.name() == name)
                .map(|index| commands.remove(index))
        };
        removed.is_some()
    }
}

/// 命令名之后的原始文本；为空时返回 `None`
fn raw_remainder(line: &str) -> Option<String> {
    line.trim()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim().to_string())
        .filter(|rest| !rest.is_empty())
}

/// 按空白切分命令行，双引号内的空白不切分
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        name: &'static str,
        min: usize,
        calls: Rc<RefCell<Vec<Vec<String>>>>,
    }

    impl Command for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn min_args(&self) -> usize {
            self.min
        }

        fn execute(&self, console: &dyn Console, args: &[String]) {
            self.calls.borrow_mut().push(args.to_vec());
            console.info(&format!("{} ran", self.name));
        }
    }

    fn recorder(name: &'static str, min: usize) -> (Box<Recorder>, Rc<RefCell<Vec<Vec<String>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let command = Box::new(Recorder {
            name,
            min,
            calls: Rc::clone(&calls),
        });
        (command, calls)
    }

    fn console() -> CommandConsole {
        CommandConsole::new(&ConsoleConfig::default())
    }

    #[test]
    fn test_split_command_line() {
        assert_eq!(split_command_line("foo a  b"), vec!["foo", "a", "b"]);
        assert_eq!(
            split_command_line(r#"say "hello world" !"#),
            vec!["say", "hello world", "!"]
        );
        assert_eq!(split_command_line(r#"set name """#), vec!["set", "name", ""]);
        assert!(split_command_line("   ").is_empty());
    }

    #[test]
    fn test_dispatch_passes_arguments_in_order() {
        let console = console();
        let (command, calls) = recorder("foo", 0);
        console.add_command(command);

        console.execute("foo a b");
        assert_eq!(calls.borrow().as_slice(), &[vec!["a".to_string(), "b".to_string()]]);
        assert_eq!(console.lines().last().unwrap().text, "foo ran");
    }

    #[test]
    fn test_unknown_command_writes_error() {
        let console = console();
        console.execute("nope");
        let lines = console.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].color, ConsoleColor::ERROR);
        assert!(lines[0].text.contains("nope"));
    }

    #[test]
    fn test_min_args_enforced() {
        let console = console();
        let (command, calls) = recorder("warp", 2);
        console.add_command(command);

        assert_eq!(
            console.dispatch("warp 1"),
            Err(ConsoleError::MissingArguments {
                command: "warp".to_string(),
                min: 2,
                got: 1
            })
        );
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_last_registered_responds_first() {
        let console = console();
        let (old, old_calls) = recorder("dup", 0);
        let (new, new_calls) = recorder("dup", 0);
        console.add_command(old);
        console.add_command(new);

        let warning = console.lines().pop().unwrap();
        assert_eq!(warning.color, ConsoleColor::WARNING);
        assert!(warning.text.contains("dup"));

        console.execute("dup");
        assert!(old_calls.borrow().is_empty());
        assert_eq!(new_calls.borrow().len(), 1);

        assert!(console.remove_command("dup"));
        console.execute("dup");
        assert_eq!(old_calls.borrow().len(), 1);
        assert!(console.remove_command("dup"));
        assert!(!console.remove_command("dup"));
    }

    struct Raw(Rc<RefCell<Vec<String>>>);

    impl Command for Raw {
        fn name(&self) -> &str {
            "raw"
        }

        fn raw_arguments(&self) -> bool {
            true
        }

        fn execute(&self, _console: &dyn Console, args: &[String]) {
            self.0.borrow_mut().extend(args.iter().cloned());
        }
    }

    #[test]
    fn test_raw_arguments_keep_quotes() {
        let console = console();
        let seen = Rc::new(RefCell::new(Vec::new()));
        console.add_command(Box::new(Raw(Rc::clone(&seen))));

        console.execute(r#"raw  print("a  b")  "#);
        assert_eq!(seen.borrow().as_slice(), &[r#"print("a  b")"#.to_string()]);
    }

    #[test]
    fn test_builtins() {
        let console = console();
        console.execute("echo hi there");
        assert_eq!(console.lines().last().unwrap().text, "hi there");

        console.execute("help");
        assert!(console.lines().last().unwrap().text.contains("echo"));

        console.execute("clear");
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_builtins_disabled() {
        let config = ConsoleConfig {
            builtins: false,
            ..ConsoleConfig::default()
        };
        let console = CommandConsole::new(&config);
        assert!(matches!(
            console.dispatch("echo x"),
            Err(ConsoleError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_scrollback_bounded() {
        let config = ConsoleConfig {
            max_lines: 3,
            ..ConsoleConfig::default()
        };
        let console = CommandConsole::new(&config);
        for i in 0..5 {
            console.info(&format!("line {}", i));
        }

        let texts: Vec<String> = console.lines().into_iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["line 2", "line 3", "line 4"]);
        assert_eq!(console.written(), 5);
        assert_eq!(console.lines_since(4).len(), 1);
        assert_eq!(console.lines_since(0).len(), 3);
    }

    #[test]
    fn test_history_bounded() {
        let config = ConsoleConfig {
            history: 2,
            ..ConsoleConfig::default()
        };
        let console = CommandConsole::new(&config);
        console.execute("echo 1");
        console.execute("echo 2");
        console.execute("echo 3");
        assert_eq!(console.history(), vec!["echo 2", "echo 3"]);
    }

    #[test]
    fn test_color_code() {
        assert_eq!(ConsoleColor::from_code(255.0), ConsoleColor(255));
        assert_eq!(ConsoleColor::ERROR.rgba(), [0xFF, 0x50, 0x50, 0xFF]);
    }
}
