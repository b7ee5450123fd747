use async_trait::async_trait;
use murmur_llm::{GenerateOptions, LlmClient, LlmError};
use parking_lot::Mutex;

/// Client returning one fixed response for every call.
#[derive(Debug, Clone)]
pub struct FixedLlm {
    response: String,
    model_name: String,
    api_key: Option<String>,
}

impl FixedLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            model_name: "fixed-llm".to_string(),
            api_key: Some("sk-test-0000000000".to_string()),
        }
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }
}

#[async_trait]
impl LlmClient for FixedLlm {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    async fn generate(
        &self,
        _system: &str,
        _user: &str,
        _options: GenerateOptions,
    ) -> Result<String, LlmError> {
        Ok(self.response.clone())
    }
}

/// Client recording the prompts and options of its last call.
pub struct RecordingLlm {
    response: String,
    pub last_system: Mutex<Option<String>>,
    pub last_user: Mutex<Option<String>>,
    pub last_options: Mutex<Option<GenerateOptions>>,
}

impl RecordingLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            last_system: Mutex::new(None),
            last_user: Mutex::new(None),
            last_options: Mutex::new(None),
        }
    }
}

#[async_trait]
impl LlmClient for RecordingLlm {
    fn model_name(&self) -> &str {
        "recording-llm"
    }

    fn api_key(&self) -> Option<&str> {
        Some("sk-test-0000000000")
    }

    async fn generate(
        &self,
        system: &str,
        user: &str,
        options: GenerateOptions,
    ) -> Result<String, LlmError> {
        *self.last_system.lock() = Some(system.to_string());
        *self.last_user.lock() = Some(user.to_string());
        *self.last_options.lock() = Some(options);
        Ok(self.response.clone())
    }
}

/// Client failing every call with a provider error.
#[derive(Debug, Clone)]
pub struct FailingLlm {
    message: String,
}

impl FailingLlm {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl LlmClient for FailingLlm {
    fn model_name(&self) -> &str {
        "failing-llm"
    }

    async fn generate(
        &self,
        _system: &str,
        _user: &str,
        _options: GenerateOptions,
    ) -> Result<String, LlmError> {
        Err(LlmError::Provider(self.message.clone()))
    }
}
