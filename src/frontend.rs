use crate::backend::TagList;
use crate::structs::Operator;
use std::io::{self, BufRead, Write};

/// Line-oriented driver for the tag list, used by the native build.
pub struct Frontend {
    tags: TagList,
    do_print: bool,
    quit: bool,
    /// Pending `Formula: ...` line from the last `calc`
    message: Option<String>,
}

impl Default for Frontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend {
    pub fn new() -> Self {
        Self::with_tags(TagList::new())
    }

    pub fn with_tags(tags: TagList) -> Self {
        Self {
            tags,
            do_print: true,
            quit: false,
            message: None,
        }
    }

    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }

    pub fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.do_print {
            return Ok(());
        }
        for (index, tag) in self.tags.iter().enumerate() {
            writeln!(out, "[{}] {:?}", index, tag)?;
        }
        let palette: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
        writeln!(out, "operators: {}", palette.join(" "))
    }

    fn parse_index(arg: &str) -> Option<usize> {
        arg.trim().parse::<usize>().ok()
    }

    /// Runs one command against the tag list. Returns false if the command is
    /// unknown or the tag list rejected it.
    pub fn run_command(&mut self, input: &str) -> bool {
        if let Ok(op) = input.trim().parse::<Operator>() {
            self.tags = self.tags.with_operator(op);
            log::debug!("appended operator {}", op);
            return true;
        }

        let (cmd, rest) = match input.split_once(' ') {
            Some((cmd, rest)) if !rest.trim().is_empty() => (cmd, Some(rest)),
            Some((cmd, _)) => (cmd, None),
            None => (input.trim(), None),
        };

        match (cmd, rest) {
            ("add", None) => {
                self.tags = self.tags.with_blank_tag();
                log::debug!("appended blank tag, {} tags", self.tags.len());
                true
            }
            ("edit", Some(args)) => {
                // text is everything after the first space following the index
                let (index, text) = match args.split_once(' ') {
                    Some((index, text)) => (index, text),
                    None => (args, ""),
                };
                let Some(index) = Self::parse_index(index) else {
                    return false;
                };
                match self.tags.with_tag(index, text) {
                    Ok(tags) => {
                        self.tags = tags;
                        log::debug!("edited tag {}", index);
                        true
                    }
                    Err(e) => {
                        log::warn!("edit rejected: {}", e);
                        false
                    }
                }
            }
            ("delete", Some(arg)) => {
                let Some(index) = Self::parse_index(arg) else {
                    return false;
                };
                match self.tags.without_tag(index) {
                    Ok(tags) => {
                        self.tags = tags;
                        log::debug!("deleted tag {}", index);
                        true
                    }
                    Err(e) => {
                        log::warn!("delete rejected: {}", e);
                        false
                    }
                }
            }
            ("calc", None) => {
                self.message = Some(self.tags.display_message());
                true
            }
            ("disable_output", None) => {
                self.do_print = false;
                true
            }
            ("enable_output", None) => {
                self.do_print = true;
                true
            }
            ("q", None) => {
                self.quit = true;
                true
            }
            _ => false,
        }
    }

    /// Reads commands from `input` until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        self.print_board(out)?;
        let mut line = String::new();
        while !self.quit {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let cmd = line.trim_end_matches(['\n', '\r']);
            if cmd.trim().is_empty() {
                continue;
            }

            let status = if self.run_command(cmd) {
                "ok"
            } else {
                "invalid command"
            };
            writeln!(out, "{}", status)?;
            if let Some(message) = self.take_message() {
                writeln!(out, "{}", message)?;
            }
            if !self.quit {
                self.print_board(out)?;
            }
        }
        Ok(())
    }
}
