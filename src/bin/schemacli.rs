use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use streamsql_types::config::ShellConfig;
use streamsql_types::debugger::{Component, get_debug_level, set_debug_level};
use streamsql_types::frontend::{Command, Reply};
use streamsql_types::{schema_error, schema_info};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = ShellConfig::from_env().with_args(&args);
    set_debug_level(config.debug_level);

    let mut editor = DefaultEditor::new().context("failed to start line editor")?;

    println!("streamsql schema shell");
    println!("Type 'help' for commands. Ctrl+D to exit");
    schema_info!(Component::Shell, "log level {}", get_debug_level().label());
    schema_info!(Component::Shell, "config: {:?}", config);

    loop {
        let line = match editor.readline("schema> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read input"),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        editor.add_history_entry(line)?;

        match Command::parse(line).and_then(|cmd| cmd.run(&config.format)) {
            Ok(Reply::Text(text)) => println!("{text}"),
            Ok(Reply::Quit) => break,
            Err(e) => {
                schema_error!(Component::Shell, "{:?}", e);
                println!("{e}");
            }
        }
    }

    Ok(())
}
