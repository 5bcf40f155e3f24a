use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use crate::config::config_manager::{process_env, ConfigManager};
use crate::enums::commands::Commands;
use crate::enums::search_outcome::SearchOutcome;
use crate::errors::{CodequestError, CodequestResult, ErrorHandler};
use crate::services::http_search_client::HttpSearchClient;
use crate::services::query_dispatcher::QueryDispatcher;
use crate::services::terminal_frontend::TerminalFrontend;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> CodequestResult<ExitCode> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Search { query, endpoint, save } => self.search_command(query, endpoint, save).await,
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn search_command(&self, query: Option<String>, endpoint: Option<String>, save: Option<PathBuf>) -> CodequestResult<ExitCode> {
        let mut config = ConfigManager::load(self.config_path.as_deref(), &process_env)?;

        if let Some(endpoint) = endpoint {
            config.api.base_url = endpoint;
        }
        if let Some(save) = save {
            config.output.save_dir = Some(save);
        }

        // Key problems surface here, before the user is asked anything.
        let settings = ConfigManager::resolve_settings(&config, &process_env)?;
        log::info!("🔍 Searching via {}", settings.endpoint.base_url());

        let client = HttpSearchClient::new(&settings)?;
        let frontend = TerminalFrontend::new(&settings.output);
        let dispatcher = QueryDispatcher::new(client, frontend);

        let outcome = match query {
            Some(query) => dispatcher.dispatch(Some(query)).await,
            None => dispatcher.run().await,
        };

        match &outcome {
            SearchOutcome::Displayed(document) => log::info!("✅ Displayed answer {}", document.id),
            SearchOutcome::NoResults => log::info!("📭 No results"),
            SearchOutcome::Cancelled => log::info!("⏭️ No question asked"),
            SearchOutcome::Failed(e) => log::info!("❌ Search failed: {e}"),
        }

        Ok(if outcome.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
    }

    fn init_command(&self) -> CodequestResult<ExitCode> {
        log::info!("🚀 Initializing codequest configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        println!("✅ Created sample config at: {}", path.display());
        println!("🔧 Run 'codequest validate' to check your configuration.");

        Ok(ExitCode::SUCCESS)
    }

    fn validate_command(&self) -> CodequestResult<ExitCode> {
        log::info!("🔍 Validating codequest configuration...");

        let config = ConfigManager::load(self.config_path.as_deref(), &process_env)?;

        if let Err(errors) = ConfigManager::validate_config(&config, &process_env) {
            ErrorHandler::handle_error(&CodequestError::MultipleErrors {
                errors,
                context: "configuration validation".to_string(),
            });
            return Ok(ExitCode::FAILURE);
        }

        let settings = ConfigManager::resolve_settings(&config, &process_env)?;
        println!("✅ Configuration is valid");
        println!("   🌐 Endpoint: {}", settings.endpoint.base_url());
        println!(
            "   🔑 API key ({} header): {}",
            settings.api_key_header.as_str(),
            if settings.api_key.is_empty() { "empty" } else { "set" }
        );
        if let Some(dir) = &settings.output.save_dir {
            println!("   💾 Saving answers to: {}", dir.display());
        }

        Ok(ExitCode::SUCCESS)
    }
}
