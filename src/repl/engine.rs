//! # Engine
//!
//! The interactive command loop. One pass reads a keyword, routes it, runs
//! the handler and comes back to the prompt:
//!
//! ```text
//! Prompting ──▶ Dispatching(cmd) ──▶ Executing(cmd) ──▶ Prompting
//!     │                │
//!     │ (input closed) └──▶ Terminated (EXIT)
//!     └──────────────────▶ Terminated
//! ```

use crate::repl::commands::{help_command, run_data_command, Command, COMMAND_NAMES};
use crate::repl::io::{LineReader, Output};
use crate::repl::services::Transport;

pub const UNRECOGNIZED_VALUE: &str = "An unrecognized value was provided.";

/// Where the loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Prompting,
    Dispatching(Command),
    Executing(Command),
    Terminated,
}

/// The command loop over a reader, an output sink and a transport
pub struct Engine<R: LineReader, O: Output, T: Transport> {
    reader: R,
    output: O,
    transport: T,
    state: EngineState,
}

impl<R: LineReader, O: Output, T: Transport> Engine<R, O, T> {
    pub fn new(reader: R, output: O, transport: T) -> Self {
        Self {
            reader,
            output,
            transport,
            state: EngineState::Prompting,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_parts(self) -> (R, O, T) {
        (self.reader, self.output, self.transport)
    }

    /// Run until EXIT (or until the input closes)
    pub fn run(&mut self) {
        while self.state != EngineState::Terminated {
            self.step();
        }
        tracing::debug!("Engine terminated");
    }

    /// Perform one state transition and return the new state
    pub fn step(&mut self) -> EngineState {
        let current = self.state;
        self.state = match current {
            EngineState::Prompting => self.prompt(),
            EngineState::Dispatching(command) => Self::dispatch(command),
            EngineState::Executing(command) => {
                self.execute(command);
                EngineState::Prompting
            }
            EngineState::Terminated => EngineState::Terminated,
        };
        self.state
    }

    fn prompt(&mut self) -> EngineState {
        // Remind the operator where requests are going
        let reminder = format!("Using {}", self.transport.endpoint().url());
        self.output.general(&reminder);

        match self.retrieve_command() {
            Some(command) => EngineState::Dispatching(command),
            None if self.reader.is_closed() => {
                tracing::debug!("Input closed, leaving the command loop");
                EngineState::Terminated
            }
            None => EngineState::Prompting,
        }
    }

    /// Show the menu and read one keyword. `None` when nothing could be read.
    pub fn retrieve_command(&mut self) -> Option<Command> {
        self.output.general(&format!(
            "\nPlease provide one of the following:\n{COMMAND_NAMES}"
        ));
        self.output.general("Do note that this is not case sensitive.");

        match self.reader.read("Your Command") {
            Ok(token) => {
                let command = Command::parse(&token);
                tracing::debug!("Read command token '{}' as {}", token, command);
                Some(command)
            }
            Err(e) => {
                tracing::warn!("Failed to read command: {}", e);
                self.output.error(UNRECOGNIZED_VALUE);
                None
            }
        }
    }

    fn dispatch(command: Command) -> EngineState {
        match command {
            Command::Exit => EngineState::Terminated,
            Command::Skip => EngineState::Prompting,
            _ => EngineState::Executing(command),
        }
    }

    fn execute(&mut self, command: Command) {
        if command == Command::Help {
            help_command(&mut self.reader, &mut self.output);
        } else if let Some(handler) = command.data_command() {
            run_data_command(handler, &mut self.reader, &self.transport, &mut self.output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::io::{MockLineReader, OutputLine, RecordingOutput};
    use crate::repl::services::mock::MockTransport;
    use crate::repl::services::{Endpoint, Outcome, Verb};

    fn engine(
        answers: Vec<Option<&str>>,
        transport: MockTransport,
    ) -> Engine<MockLineReader, RecordingOutput, MockTransport> {
        let reader = MockLineReader::scripted(answers.into_iter().map(|a| a.map(str::to_string)));
        Engine::new(reader, RecordingOutput::new(), transport)
    }

    fn ok(status: u16, body: &str) -> MockTransport {
        MockTransport::always(Outcome::Response {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn lowercase_exit_should_terminate_after_one_prompt() {
        let mut engine = engine(vec![Some("exit")], ok(200, ""));
        engine.run();

        assert_eq!(engine.state(), EngineState::Terminated);
        assert_eq!(engine.reader().prompts(), ["Your Command"]);
        assert_eq!(engine.transport().request_count(), 0);
        assert!(engine.output().errors().is_empty());
    }

    #[test]
    fn prompt_should_show_endpoint_and_menu() {
        let transport = ok(200, "").with_endpoint(Endpoint::new("https://", "db.local", "8443"));
        let mut engine = engine(vec![Some("EXIT")], transport);
        engine.run();

        assert_eq!(
            engine.output().generals(),
            [
                "Using https://db.local:8443/",
                "\nPlease provide one of the following:\nGET, POST, UPDATE, DELETE, HELP, EXIT",
                "Do note that this is not case sensitive.",
            ]
        );
    }

    #[test]
    fn states_should_follow_prompt_dispatch_execute_cycle() {
        let mut engine = engine(
            vec![Some("get"), Some("Books"), Some("Title"), Some("is"), Some("Dune"), Some("exit")],
            ok(200, "[]"),
        );

        assert_eq!(engine.state(), EngineState::Prompting);
        assert_eq!(engine.step(), EngineState::Dispatching(Command::Get));
        assert_eq!(engine.step(), EngineState::Executing(Command::Get));
        assert_eq!(engine.step(), EngineState::Prompting);
        assert_eq!(engine.step(), EngineState::Dispatching(Command::Exit));
        assert_eq!(engine.step(), EngineState::Terminated);
        assert_eq!(engine.step(), EngineState::Terminated);
    }

    #[test]
    fn unknown_command_should_reprompt_silently() {
        let mut engine = engine(vec![Some("dance"), Some("exit")], ok(200, ""));
        engine.run();

        assert_eq!(engine.reader().read_count(), 2);
        assert!(engine.output().errors().is_empty());
        assert_eq!(engine.transport().request_count(), 0);
    }

    #[test]
    fn read_failure_should_report_and_reprompt() {
        let mut engine = engine(vec![None, Some("exit")], ok(200, ""));

        assert_eq!(engine.step(), EngineState::Prompting);
        assert_eq!(engine.output().errors(), [UNRECOGNIZED_VALUE]);

        engine.run();
        assert_eq!(engine.reader().read_count(), 2);
        assert_eq!(engine.output().errors(), [UNRECOGNIZED_VALUE]);
    }

    #[test]
    fn closed_input_should_terminate_loop() {
        let mut engine = engine(vec![Some("help"), Some("get")], ok(200, ""));
        engine.run();

        assert_eq!(engine.state(), EngineState::Terminated);
        assert_eq!(engine.output().errors(), [UNRECOGNIZED_VALUE]);
    }

    #[test]
    fn get_should_send_envelope_and_show_success() {
        let mut engine = engine(
            vec![
                Some("GET"),
                Some("Electrical Components"),
                Some("Item"),
                Some("is"),
                Some("LED"),
                Some("exit"),
            ],
            ok(200, "[[\"LED\"]]"),
        );
        engine.run();

        let requests = engine.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].verb, Verb::Get);
        assert_eq!(requests[0].envelope.from(), ["Electrical Components"]);
        assert_eq!(engine.output().successes(), ["200 : [[\"LED\"]]"]);
    }

    #[test]
    fn help_should_run_inside_loop() {
        let mut engine = engine(vec![Some("help"), Some("bogus"), Some("exit")], ok(200, ""));
        engine.run();

        assert_eq!(engine.reader().prompts(), ["Your Command", "Gather Info On", "Your Command"]);
        assert!(engine
            .output()
            .lines()
            .contains(&OutputLine::Error("The command provided was not recognized".to_string())));
    }
}
