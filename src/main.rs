// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::path::Path;
use std::process::ExitCode;

use greeting_action::config::build_task;
use greeting_action::config::consts::CONFIG_PATH_ENV;
use greeting_action::engine::run_guarded;
use greeting_action::host::github::{
    EnvInputs, GithubOutputs, WorkflowCommandReporter, WriterConsole,
};
use greeting_action::observability::init_tracing;
use greeting_action::traits::FailureReporter;

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.yaml]", program);
    eprintln!("       Without a config file, {} is consulted, then the built-in greeting task.", CONFIG_PATH_ENV);
    eprintln!("Example: {} configs/hello-time.yaml", program);
}

fn main() -> ExitCode {
    init_tracing();

    // panics are turned into failures by run_guarded; keep the default hook's
    // backtrace noise out of the step log
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "Panic during task run");
    }));

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("greeting-action");

    if args.len() > 2 {
        print_usage(program);
        return ExitCode::FAILURE;
    }
    if matches!(args.get(1).map(String::as_str), Some("-h" | "--help")) {
        print_usage(program);
        return ExitCode::SUCCESS;
    }

    let mut reporter = WorkflowCommandReporter::stdout();

    let config_arg = args.get(1).map(Path::new);
    let config_env = env::var_os(CONFIG_PATH_ENV);

    let task = match build_task(config_arg, config_env.as_deref()) {
        Ok(task) => task,
        Err(e) => {
            reporter.set_failed(&format!("{:#}", e));
            return reporter.exit_code();
        }
    };

    let inputs = EnvInputs::from_env();
    let mut outputs = GithubOutputs::from_env();
    let mut console = WriterConsole::stdout();

    let outcome = run_guarded(task.as_ref(), &inputs, &mut outputs, &mut console);
    outcome.report(&mut reporter);

    reporter.exit_code()
}
