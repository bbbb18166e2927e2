extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io;
use std::sync::Arc;
use tinybasic::mach::{Console, Runtime};

pub fn main() {
    if let Err(error) = main_loop() {
        eprintln!("{}", error);
    }
}

fn main_loop() -> io::Result<()> {
    let command = Arc::new(Interface::new("tinybasic")?);
    let input = Interface::new("input")?;
    input.set_report_signal(Signal::Interrupt, true);
    let mut console = TermConsole {
        command: command.clone(),
        input,
    };
    let mut runtime = Runtime::new();
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.is_empty() {
            continue;
        }
        if string == "QUIT" {
            break;
        }
        if let Err(error) = runtime.enter(&string, &mut console) {
            command.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(error.to_string())
            ))?;
        }
        command.add_history_unique(string);
    }
    Ok(())
}

/// The real terminal. Program output goes through the command
/// interface; INPUT replies are read on their own interface so
/// they get their own history.
struct TermConsole {
    command: Arc<Interface<DefaultTerminal>>,
    input: Interface<DefaultTerminal>,
}

impl Console for TermConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.command.write_fmt(format_args!("{}\n", text))
    }

    fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.input.set_prompt(prompt)?;
        match self.input.read_line()? {
            ReadResult::Input(reply) => {
                self.input.add_history_unique(reply.clone());
                Ok(Some(reply))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}
