// Copyright (c) 2025, TheByteSlayer, Tinyid
// Short, URL-safe and collision-resistant random identifiers, written in Rust.

mod call;
mod parser;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use call::execute_command;
use parser::{parse_args, parse_command_line, ParsedCommand, USAGE};
use tinyid::GeneratorConfig;
use tracing::{error, info};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = parse_args(&args);

    if !invocation.quiet {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    }

    let config = match GeneratorConfig::load(&invocation.config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load {}: {}", invocation.config_path, e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match invocation.command {
        ParsedCommand::Generate(options) => {
            if execute_command(&options, &config) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        ParsedCommand::Shell => {
            run_shell(&config);
            ExitCode::SUCCESS
        }
        ParsedCommand::Help => {
            println!("{}", USAGE);
            ExitCode::SUCCESS
        }
        ParsedCommand::Error(msg) => {
            eprintln!("{}", msg);
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}

fn run_shell(config: &GeneratorConfig) {
    info!("Interactive mode, type 'gen [options]', 'help' or 'exit'");

    let stdin = io::stdin();
    loop {
        print!("tinyid> ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                let input = input.trim();
                if input == "exit" || input == "quit" {
                    break;
                }

                match parse_command_line(input) {
                    Some(ParsedCommand::Generate(options)) => {
                        execute_command(&options, config);
                    }
                    Some(ParsedCommand::Help) => {
                        println!(
                            "gen [--size <n>] [--alphabet <symbols>] [--count <n>] [--json] \
                             [--insecure]"
                        );
                    }
                    Some(ParsedCommand::Shell) => {}
                    Some(ParsedCommand::Error(msg)) => {
                        println!("{}", msg);
                    }
                    None => {}
                }
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }
}
