use game_script_bridge::config::EngineConfig;
use game_script_bridge::console::Console;
use game_script_bridge::core::{init_logging, EngineResult};
use game_script_bridge::scripting::{ScriptHost, StandaloneServices};
use std::io::{self, BufRead, Write};

fn main() {
    if let Err(e) = run() {
        eprintln!("game-script failed: {}", e);
        std::process::exit(1);
    }
}

/// 依次运行命令行给出的脚本，然后从标准输入逐行读取控制台命令
fn run() -> EngineResult<()> {
    let mut config = EngineConfig::load_or_default();
    config.apply_env_overrides();
    config.validate()?;
    init_logging(&config.logging)?;

    let standalone = StandaloneServices::from_config(&config);
    let host = ScriptHost::new(standalone.services())?;

    for path in std::env::args().skip(1) {
        let mark = standalone.console.written();
        host.run_file(&path)?;
        host.collect_garbage()?;
        flush_output(&standalone, mark);
    }

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let mark = standalone.console.written();
        standalone.console.execute(&line);
        // 每条命令推进一分钟游戏时间
        standalone.clock.advance(1);
        flush_output(&standalone, mark);
        prompt()?;
    }

    tracing::info!(target: "engine", "Console input closed");
    Ok(())
}

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

/// 打印新增的控制台行与待显示的对话
fn flush_output(standalone: &StandaloneServices, mark: u64) {
    for line in standalone.console.lines_since(mark) {
        println!("{}", line.text);
    }
    while let Some(line) = standalone.dialogue.advance() {
        if line.speaker.is_empty() {
            println!("  \"{}\"", line.text);
        } else {
            println!("  {}: \"{}\"", line.speaker, line.text);
        }
    }
}
