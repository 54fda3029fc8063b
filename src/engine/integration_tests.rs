use chrono::NaiveTime;

use crate::config::{InputConfig, TaskConfig};
use crate::engine::{run, run_guarded, Outcome};
use crate::host::github::{EnvInputs, GithubOutputs, WorkflowCommandReporter, WriterConsole};
use crate::host::memory::{FixedClock, MemoryConsole, MemoryInputs, MemoryOutputs, RecordingReporter};
use crate::host::stub::{BrokenConsole, FailingOutputs, PanickingOutputs};
use crate::tasks::{GreetingTask, HelloTimeTask, TaskFactory};

/// End-to-end runs of both tasks against in-memory and runner capabilities
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_for_ada() {
        let inputs = MemoryInputs::new().with("name", "Ada");
        let mut outputs = MemoryOutputs::default();
        let mut console = MemoryConsole::default();
        let mut reporter = RecordingReporter::default();

        let outcome = run(&GreetingTask::default(), &inputs, &mut outputs, &mut console);
        outcome.report(&mut reporter);

        let expected = "Hello, Ada! Welcome to your custom GitHub Action.";
        assert_eq!(
            outcome,
            Outcome::Success {
                key: "greeting".to_string(),
                value: expected.to_string(),
            }
        );
        assert_eq!(outputs.entries, vec![("greeting".to_string(), expected.to_string())]);
        assert_eq!(console.lines, vec![expected.to_string()]);
        assert!(reporter.failures.is_empty());
    }

    #[test]
    fn test_log_and_output_never_diverge() {
        let task = GreetingTask::default();
        for name in ["Grace", "Linus Torvalds", "名前", "a%b:c,d", "x"] {
            let inputs = MemoryInputs::new().with("name", name);
            let mut outputs = MemoryOutputs::default();
            let mut console = MemoryConsole::default();

            run(&task, &inputs, &mut outputs, &mut console);

            assert_eq!(console.lines.len(), 1);
            assert_eq!(outputs.get("greeting"), Some(console.lines[0].as_str()));
            assert!(console.lines[0].contains(name));
        }
    }

    #[test]
    fn test_absent_input_is_deterministic() {
        let task = GreetingTask::default();
        let inputs = MemoryInputs::new();

        let mut first = MemoryOutputs::default();
        let mut second = MemoryOutputs::default();
        let first_outcome = run(&task, &inputs, &mut first, &mut MemoryConsole::default());
        let second_outcome = run(&task, &inputs, &mut second, &mut MemoryConsole::default());

        assert_eq!(first_outcome, second_outcome);
        assert_eq!(
            first.get("greeting"),
            Some("Hello, ! Welcome to your custom GitHub Action.")
        );
    }

    #[test]
    fn test_publish_failure_is_reported_once() {
        let inputs = MemoryInputs::new().with("name", "Ada");
        let mut outputs = FailingOutputs::default();
        let mut console = MemoryConsole::default();
        let mut reporter = RecordingReporter::default();

        let outcome = run(&GreetingTask::default(), &inputs, &mut outputs, &mut console);
        outcome.report(&mut reporter);

        assert_eq!(outputs.calls, 1);
        assert_eq!(reporter.failures.len(), 1);
        assert_eq!(
            reporter.failures[0],
            "Failed to set output 'greeting': output set is read-only"
        );
    }

    #[test]
    fn test_log_failure_skips_publish() {
        let inputs = MemoryInputs::new().with("name", "Ada");
        let mut outputs = FailingOutputs::default();
        let mut console = BrokenConsole;

        let outcome = run(&GreetingTask::default(), &inputs, &mut outputs, &mut console);

        assert_eq!(outputs.calls, 0);
        match outcome {
            Outcome::Failure { description } => {
                assert!(description.contains("stdout closed"));
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_required_input_missing_stops_before_logging() {
        let config = TaskConfig {
            input: InputConfig {
                required: true,
                ..InputConfig::default()
            },
            ..TaskConfig::greeting()
        };
        let task = TaskFactory::create_task(&config).unwrap();
        let mut outputs = MemoryOutputs::default();
        let mut console = MemoryConsole::default();
        let mut reporter = RecordingReporter::default();

        let outcome = run(task.as_ref(), &MemoryInputs::new(), &mut outputs, &mut console);
        outcome.report(&mut reporter);

        assert!(console.lines.is_empty());
        assert!(outputs.entries.is_empty());
        assert_eq!(
            reporter.failures,
            vec!["Input required and not supplied: name".to_string()]
        );
    }

    #[test]
    fn test_panic_in_capability_becomes_failure() {
        let inputs = MemoryInputs::new().with("name", "Ada");
        let mut outputs = PanickingOutputs;
        let mut console = MemoryConsole::default();
        let mut reporter = RecordingReporter::default();

        let outcome = run_guarded(&GreetingTask::default(), &inputs, &mut outputs, &mut console);
        outcome.report(&mut reporter);

        assert_eq!(
            reporter.failures,
            vec!["Task 'greeting' panicked: output store unavailable".to_string()]
        );
        // the log step ran before the panic
        assert_eq!(console.lines.len(), 1);
    }

    #[test]
    fn test_run_guarded_passes_success_through() {
        let inputs = MemoryInputs::new().with("name", "Ada");
        let mut outputs = MemoryOutputs::default();

        let outcome = run_guarded(
            &GreetingTask::default(),
            &inputs,
            &mut outputs,
            &mut MemoryConsole::default(),
        );

        assert!(outcome.is_success());
    }

    #[test]
    fn test_hello_time_without_input() {
        let task = HelloTimeTask::default();
        let mut outputs = MemoryOutputs::default();
        let mut console = MemoryConsole::default();
        let mut reporter = RecordingReporter::default();

        let outcome = run(&task, &MemoryInputs::new(), &mut outputs, &mut console);
        outcome.report(&mut reporter);

        assert!(reporter.failures.is_empty());
        assert_eq!(console.lines, vec!["Hello !".to_string()]);

        let time = outputs.get("time").unwrap();
        let (time_of_day, zone) = time.split_once(" GMT").unwrap();
        assert!(NaiveTime::parse_from_str(time_of_day, "%H:%M:%S").is_ok());
        assert_eq!(zone.len(), "+0000".len());
    }

    #[test]
    fn test_hello_time_output_ignores_input() {
        let clock = FixedClock::parse("2025-07-04T16:20:00+00:00").unwrap();
        let task = HelloTimeTask::with_clock(Box::new(clock));

        let mut published = Vec::new();
        for who in ["Mona", "Hubot", ""] {
            let inputs = MemoryInputs::new().with("who-to-greet", who);
            let mut outputs = MemoryOutputs::default();
            let mut console = MemoryConsole::default();

            run(&task, &inputs, &mut outputs, &mut console);

            assert_eq!(console.lines, vec![format!("Hello {}!", who)]);
            published.push(outputs.get("time").unwrap().to_string());
        }

        assert!(published.iter().all(|v| v == "16:20:00 GMT+0000"));
    }

    /// Full runner wiring: env inputs, GITHUB_OUTPUT file, stdout console
    #[test]
    fn test_runner_capabilities_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let output_file = dir.path().join("github_output");
        std::fs::write(&output_file, "").unwrap();

        let inputs = EnvInputs::from_vars([("INPUT_NAME", " Ada ")]);
        let mut outputs = GithubOutputs::new(Some(output_file.clone()), Vec::new());
        let mut console = WriterConsole::new(Vec::new());
        let mut reporter = WorkflowCommandReporter::new(Vec::new());

        let task = TaskFactory::create_task(&TaskConfig::greeting()).unwrap();
        let outcome = run_guarded(task.as_ref(), &inputs, &mut outputs, &mut console);
        outcome.report(&mut reporter);

        let expected = "Hello, Ada! Welcome to your custom GitHub Action.";
        assert!(!reporter.has_failed());
        assert!(reporter.into_inner().is_empty());
        assert_eq!(
            String::from_utf8(console.into_inner()).unwrap(),
            format!("{}\n", expected)
        );

        let content = std::fs::read_to_string(&output_file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("greeting<<ghadelimiter_"));
        assert_eq!(lines[1], expected);
    }

    #[test]
    fn test_runner_failure_emits_error_command() {
        let config = TaskConfig {
            input: InputConfig {
                required: true,
                ..InputConfig::default()
            },
            ..TaskConfig::hello_time()
        };
        let task = TaskFactory::create_task(&config).unwrap();

        let inputs = EnvInputs::from_vars(Vec::<(String, String)>::new());
        let mut outputs = GithubOutputs::new(None, Vec::new());
        let mut console = WriterConsole::new(Vec::new());
        let mut reporter = WorkflowCommandReporter::new(Vec::new());

        let outcome = run_guarded(task.as_ref(), &inputs, &mut outputs, &mut console);
        outcome.report(&mut reporter);

        assert!(reporter.has_failed());
        assert!(outputs.into_inner().is_empty());
        assert_eq!(
            String::from_utf8(reporter.into_inner()).unwrap(),
            "::error::Input required and not supplied: who-to-greet\n"
        );
    }
}
