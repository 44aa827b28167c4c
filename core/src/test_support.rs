//! Test doubles shared by module tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::ai::{GenerateRequest, TextGenerator};
use crate::error::{AiError, AiResult};

/// Gateway that answers from a script and records every request.
///
/// Once the script runs out, `exhausted` is returned for every call.
pub(crate) struct ScriptedGateway {
    script: RefCell<VecDeque<AiResult<String>>>,
    exhausted: AiError,
    requests: RefCell<Vec<GenerateRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new(script: impl IntoIterator<Item = AiResult<String>>) -> Self {
        Self {
            script: RefCell::new(script.into_iter().collect()),
            exhausted: AiError::ApiError("script exhausted".into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn replying<const N: usize>(texts: [&str; N]) -> Self {
        Self::new(texts.map(|t| Ok(t.to_string())))
    }

    /// Every call fails with `error`.
    pub(crate) fn failing(error: AiError) -> Self {
        Self {
            exhausted: error,
            ..Self::new([])
        }
    }

    pub(crate) fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.prompt.clone()).collect()
    }
}

impl TextGenerator for ScriptedGateway {
    async fn generate(&self, request: &GenerateRequest) -> AiResult<String> {
        self.requests.borrow_mut().push(request.clone());
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(self.exhausted.clone()))
    }
}
