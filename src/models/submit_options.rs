use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitOptions {
    /// Page hosting the form. Relative actions resolve against it and it defines the origin.
    pub page_url: Option<String>,
    /// 0 disables the timeout
    pub timeout_secs: u64,
    /// Sent only with same-origin requests
    pub cookie: Option<String>,
    pub user_agent: Option<String>,
}
