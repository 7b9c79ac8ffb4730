// inktags-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for this crate's unit tests and when the "test-mocks" feature is enabled.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{InkscapeRunner, Invocation, QUERY_ALL_FLAG, RunOutput};
use crate::error::CoreResult;

/// Scripted result for one kind of invocation.
#[derive(Debug, Clone)]
struct MockResponse {
    code: Option<i32>,
    stdout: String,
}

/// Mock implementation of `InkscapeRunner`.
///
/// Query invocations (`--query-all`) return the configured query output.
/// Batch invocations pop exit codes from a queue and succeed once it is empty.
/// Every invocation is recorded.
#[derive(Clone, Default)]
pub struct MockInkscapeRunner {
    query_response: Rc<RefCell<Option<MockResponse>>>,
    batch_exit_codes: Rc<RefCell<VecDeque<i32>>>,
    received_calls: Rc<RefCell<Vec<Invocation>>>,
}

impl MockInkscapeRunner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Query output returned with exit code 0.
    pub fn with_query_output(self, stdout: &str) -> Self {
        self.set_query_response(Some(0), stdout);
        self
    }

    pub fn set_query_response(&self, code: Option<i32>, stdout: &str) {
        *self.query_response.borrow_mut() = Some(MockResponse {
            code,
            stdout: stdout.to_string(),
        });
    }

    /// Queues exit codes for successive batch invocations.
    pub fn push_batch_exit_codes(&self, codes: &[i32]) {
        self.batch_exit_codes.borrow_mut().extend(codes);
    }

    pub fn get_received_calls(&self) -> Vec<Invocation> {
        self.received_calls.borrow().clone()
    }

    /// The `--actions=` argument of each recorded batch invocation, prefix removed.
    pub fn received_action_scripts(&self) -> Vec<String> {
        self.received_calls
            .borrow()
            .iter()
            .filter_map(|inv| {
                inv.args.iter().find_map(|arg| {
                    arg.to_str()
                        .and_then(|a| a.strip_prefix("--actions="))
                        .map(str::to_string)
                })
            })
            .collect()
    }
}

impl InkscapeRunner for MockInkscapeRunner {
    fn run(&self, invocation: &Invocation) -> CoreResult<RunOutput> {
        self.received_calls.borrow_mut().push(invocation.clone());

        let is_query = invocation.args.iter().any(|a| a == QUERY_ALL_FLAG);
        if is_query {
            let response = self.query_response.borrow().clone().unwrap_or(MockResponse {
                code: Some(0),
                stdout: String::new(),
            });
            log::info!("MockInkscapeRunner: answering query with {} bytes", response.stdout.len());
            return Ok(RunOutput {
                code: response.code,
                stdout: response.stdout,
            });
        }

        let code = self.batch_exit_codes.borrow_mut().pop_front().unwrap_or(0);
        log::info!("MockInkscapeRunner: batch invocation exits with {code}");
        Ok(RunOutput {
            code: Some(code),
            stdout: String::new(),
        })
    }
}
