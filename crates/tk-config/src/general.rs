//! General application configuration.

use serde::{Deserialize, Serialize};
use tk_core::enums::Priority;
use tk_core::page::DEFAULT_PAGE_SIZE;

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Records per page for list commands.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Priority given to tasks created without one.
    #[serde(default)]
    pub default_priority: Priority,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_priority: Priority::default(),
        }
    }
}
