use anyhow::Context;
use tk_config::TkConfig;
use tk_db::service::TaskService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TaskService,
    pub config: TkConfig,
}

impl AppContext {
    /// Open the configured database, creating its directory when needed.
    pub async fn init(config: TkConfig) -> anyhow::Result<Self> {
        config.validate()?;

        if let Some(dir) = config.database.parent_dir() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let service = TaskService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self { service, config })
    }

    /// Page size for list commands.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.config.general.page_size
    }
}
