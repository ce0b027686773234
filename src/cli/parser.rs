// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

use tinyid::configuration::CONFIG_FILE;

pub const USAGE: &str = "Usage: tinyid-cli [--size <n>] [--alphabet <symbols>] [--count <n>]
                  [--json] [--insecure] [--config <path>] [--quiet]
       tinyid-cli shell
       tinyid-cli help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub size: usize,
    pub alphabet: Option<String>,
    pub count: usize,
    pub json: bool,
    pub insecure: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            size: 0,
            alphabet: None,
            count: 1,
            json: false,
            insecure: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Generate(GenerateOptions),
    Shell,
    Help,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config_path: String,
    pub quiet: bool,
    pub command: ParsedCommand,
}

/// Parses process arguments, without the program name.
pub fn parse_args(args: &[String]) -> Invocation {
    let mut config_path = CONFIG_FILE.to_string();
    let mut quiet = false;
    let mut rest = Vec::with_capacity(args.len());

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => config_path = path.clone(),
                None => {
                    return Invocation {
                        config_path,
                        quiet,
                        command: ParsedCommand::Error("--config requires a path".to_string()),
                    };
                }
            },
            "--quiet" | "-q" => quiet = true,
            _ => rest.push(arg.clone()),
        }
    }

    let command = match rest.first().map(String::as_str) {
        Some("shell") if rest.len() == 1 => ParsedCommand::Shell,
        Some("help") | Some("--help") | Some("-h") => ParsedCommand::Help,
        _ => parse_words(&rest),
    };

    Invocation { config_path, quiet, command }
}

/// Parses one line typed into the interactive shell.
pub fn parse_command_line(input: &str) -> Option<ParsedCommand> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let words = match split_words(input) {
        Some(words) => words,
        None => return Some(ParsedCommand::Error("Unterminated quote".to_string())),
    };

    match words[0].as_str() {
        "help" => Some(ParsedCommand::Help),
        "gen" | "generate" => Some(parse_words(&words[1..])),
        command => Some(ParsedCommand::Error(format!("Unknown command: {}", command))),
    }
}

fn parse_words(words: &[String]) -> ParsedCommand {
    let mut options = GenerateOptions::default();

    let mut iter = words.iter();
    while let Some(word) = iter.next() {
        match word.as_str() {
            "--size" | "-s" => match iter.next().map(|v| v.parse::<usize>()) {
                Some(Ok(size)) => options.size = size,
                _ => {
                    return ParsedCommand::Error(
                        "--size requires a non-negative integer".to_string(),
                    );
                }
            },
            "--count" | "-n" => match iter.next().map(|v| v.parse::<usize>()) {
                Some(Ok(count)) if count > 0 => options.count = count,
                _ => return ParsedCommand::Error("--count requires a positive integer".to_string()),
            },
            "--alphabet" | "-a" => match iter.next() {
                Some(alphabet) => options.alphabet = Some(alphabet.clone()),
                None => return ParsedCommand::Error("--alphabet requires a value".to_string()),
            },
            "--json" => options.json = true,
            "--insecure" => options.insecure = true,
            other => return ParsedCommand::Error(format!("Unknown argument: {}", other)),
        }
    }

    ParsedCommand::Generate(options)
}

fn split_words(input: &str) -> Option<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }

    if in_quotes {
        return None;
    }
    if has_word {
        words.push(current);
    }

    Some(words)
}
