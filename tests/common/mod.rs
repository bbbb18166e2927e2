use std::collections::VecDeque;
use tinybasic::mach::{Console, Runtime};

struct TestConsole {
    replies: VecDeque<String>,
    output: String,
}

impl Console for TestConsole {
    fn print(&mut self, text: &str) -> std::io::Result<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn input(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.output.push_str(prompt);
        Ok(self.replies.pop_front())
    }
}

/// Feed each line to a fresh interpreter and return the whole
/// transcript, error messages folded in the way the terminal
/// front end prints them.
pub fn session(lines: &[&str]) -> String {
    session_with_input(lines, &[])
}

pub fn session_with_input(lines: &[&str], replies: &[&str]) -> String {
    let mut console = TestConsole {
        replies: replies.iter().map(|s| s.to_string()).collect(),
        output: String::new(),
    };
    let mut runtime = Runtime::new();
    for line in lines {
        if let Err(error) = runtime.enter(line, &mut console) {
            console.output.push_str(&format!("{}\n", error));
        }
    }
    console.output
}
