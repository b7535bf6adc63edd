use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::editor_action::EditorAction;
use crate::enums::github_action::GitHubAction;
use crate::enums::github_command::GithubCommand;
use crate::enums::github_panel::GitHubPanel;
use crate::errors::{SpacesError, SpacesResult};
use crate::helpers::url_helper::UrlHelper;
use crate::logger::notification_logger::NotificationLogger;
use crate::services::editor_controller::EditorController;
use crate::services::github_client::GitHubClient;
use crate::services::github_controller::GitHubController;
use crate::services::http_client::SpacesHttpClient;
use crate::services::site_creator::SiteCreator;
use crate::services::sites_client::SitesClient;
use crate::structs::config::config::Config;
use crate::structs::github::create_repo_request::CreateRepoRequest;
use crate::traits::notifier::Notifier;
use crate::traits::preview_sink::PreviewSink;
use crate::ui::file_preview::FilePreview;
use crate::ui::preview_server::PreviewServer;
use crate::ui::shared_preview::SharedPreview;
use crate::ui::system_clipboard::SystemClipboard;
use crate::ui::terminal_confirmer::TerminalConfirmer;
use crate::workers::editor_session::EditorSession;
use crate::workers::github_session::GitHubSession;
use crate::workers::site_watcher::SiteWatcher;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> SpacesResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::New { name } => self.new_command(&name).await,
            Commands::Pull { page, dir } => self.pull_command(&page, &dir).await,
            Commands::Save { page, file, dir } => self.save_command(&page, &file, &dir).await,
            Commands::Deploy { page, dir, file, copy } => {
                self.deploy_command(&page, &dir, file, copy).await
            }
            Commands::Preview { page, dir, out } => self.preview_command(&page, dir, out).await,
            Commands::Watch { page, dir, autosave, no_browser } => {
                self.watch_command(&page, &dir, autosave, no_browser).await
            }
            Commands::Github { page, action } => self.github_command(&page, action).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> SpacesResult<()> {
        log::info!("🚀 Initializing spaces configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔑 Export your session cookie as SPACES_SESSION to authenticate.");
                log::info!("🔧 Run 'spaces validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {e}");
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> SpacesResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = Self::load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("🌐 Server: {}", config.server.base_url);
                log::info!("📄 Files: {}", config.editor.files.join(", "));
                if config.server.session_cookie().is_none() {
                    log::warn!("⚠️ ${} is not set, requests will be anonymous", config.server.session_cookie_env);
                }
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("  • {error}");
                }
                Err(SpacesError::config_error(
                    &format!("{} configuration problem(s) found", errors.len()),
                    None,
                    Some("Edit ~/.spaces/config.toml and run 'spaces validate' again"),
                ))
            }
        }
    }

    async fn new_command(&self, name: &str) -> SpacesResult<()> {
        let config = Self::load_config()?;
        let sites = SitesClient::new(SpacesHttpClient::new(&config.server)?);

        let editor_path = SiteCreator::create(&sites, name).await?;
        println!("{}", UrlHelper::join(&config.server.base_url, &editor_path));
        Ok(())
    }

    async fn pull_command(&self, page: &str, dir: &Path) -> SpacesResult<()> {
        let config = Self::load_config()?;
        let notifier = Arc::new(NotificationLogger::new());
        let mut session = Self::editor_session(&config, page, Arc::clone(&notifier), Arc::new(SharedPreview::new()))?;

        log::info!("⬇️  Pulling site {}", session.controller().site_id());
        session.dispatch(EditorAction::LoadAll);
        session.settle().await;

        tokio::fs::create_dir_all(dir).await?;
        let files = session.controller().files();
        let writes = files
            .names()
            .iter()
            .filter_map(|name| files.get(name).map(|content| tokio::fs::write(dir.join(name), content)));
        let written = futures::future::try_join_all(writes).await?.len();
        log::info!("📁 Wrote {written} file(s) to {}", dir.display());

        Self::check_notifications(&notifier, "pull")
    }

    async fn save_command(&self, page: &str, file: &str, dir: &Path) -> SpacesResult<()> {
        let config = Self::load_config()?;
        let notifier = Arc::new(NotificationLogger::new());
        let mut session = Self::editor_session(&config, page, Arc::clone(&notifier), Arc::new(SharedPreview::new()))?;

        let content = Self::read_local(dir, file).await?;
        session.dispatch(EditorAction::SwitchFile(file.to_string()));
        session.dispatch(EditorAction::Edit(content));
        session.dispatch(EditorAction::Save);
        session.settle().await;

        Self::check_notifications(&notifier, "save")
    }

    async fn deploy_command(&self, page: &str, dir: &Path, file: Option<String>, copy: bool) -> SpacesResult<()> {
        let config = Self::load_config()?;
        let notifier = Arc::new(NotificationLogger::new());
        let mut session = Self::editor_session(&config, page, Arc::clone(&notifier), Arc::new(SharedPreview::new()))?;

        let file = file.unwrap_or_else(|| config.editor.default_file.clone());
        let content = Self::read_local(dir, &file).await?;
        session.dispatch(EditorAction::SwitchFile(file));
        session.dispatch(EditorAction::Edit(content));
        session.dispatch(EditorAction::Deploy);
        session.settle().await;

        let Some(modal) = session.controller().deploy_modal() else {
            return Self::check_notifications(&notifier, "deploy");
        };
        println!("{}", modal.url);

        if copy {
            session.dispatch(EditorAction::CopyDeployUrl);
        }
        session.dispatch(EditorAction::CloseDeployModal);

        Self::check_notifications(&notifier, "deploy")
    }

    async fn preview_command(&self, page: &str, dir: Option<PathBuf>, out: Option<PathBuf>) -> SpacesResult<()> {
        let config = Self::load_config()?;
        let notifier = Arc::new(NotificationLogger::new());
        let shared = SharedPreview::new();
        let sink: Arc<dyn PreviewSink> = match &out {
            Some(path) => Arc::new(FilePreview::new(path.clone())),
            None => Arc::new(shared.clone()),
        };
        let mut session = Self::editor_session(&config, page, Arc::clone(&notifier), sink)?;

        match &dir {
            Some(dir) => Self::seed_from_dir(&mut session, &config, dir).await?,
            None => {
                session.dispatch(EditorAction::LoadAll);
                session.settle().await;
            }
        }
        session.dispatch(EditorAction::UpdatePreview);

        if let Some(path) = out {
            log::info!("🖼️  Preview written to {}", path.display());
            return Self::check_notifications(&notifier, "preview");
        }

        let mut server = PreviewServer::new(shared);
        server.start(config.preview.port).await?;
        if let Some(url) = server.url() {
            Self::announce_preview(&url, config.preview.open_browser);
        }

        log::info!("⌨️  Press Ctrl+C to stop");
        tokio::signal::ctrl_c().await?;
        server.shutdown()
    }

    async fn watch_command(&self, page: &str, dir: &Path, autosave: bool, no_browser: bool) -> SpacesResult<()> {
        let config = Self::load_config()?;
        let notifier = Arc::new(NotificationLogger::new());
        let shared = SharedPreview::new();
        let mut session = Self::editor_session(&config, page, Arc::clone(&notifier), Arc::new(shared.clone()))?;

        session.dispatch(EditorAction::LoadAll);
        session.settle().await;
        Self::seed_from_dir(&mut session, &config, dir).await?;
        session.dispatch(EditorAction::UpdatePreview);

        let mut server = PreviewServer::new(shared);
        server.start(config.preview.port).await?;
        if let Some(url) = server.url() {
            Self::announce_preview(&url, config.preview.open_browser && !no_browser);
        }

        let _watcher = SiteWatcher::start(dir, config.editor.files.clone(), session.sender(), autosave)?;
        log::info!("⌨️  Press Ctrl+C to stop");

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                running = session.step() => {
                    if !running {
                        break;
                    }
                }
            }
        }

        log::info!("⏳ Waiting for outstanding requests...");
        session.settle().await;
        server.shutdown()
    }

    async fn github_command(&self, page: &str, action: GithubCommand) -> SpacesResult<()> {
        let config = Self::load_config()?;
        let notifier = Arc::new(NotificationLogger::new());
        let assume_yes = matches!(action, GithubCommand::Disconnect { yes: true });

        let github = GitHubClient::new(SpacesHttpClient::new(&config.server)?);
        let notifications: Arc<dyn Notifier> = notifier.clone();
        let controller = GitHubController::new(UrlHelper::normalize_page(page))
            .with_dismiss_after(config.notifications.dismiss_after());
        let mut session = GitHubSession::new(
            controller,
            Arc::new(github),
            notifications,
            Arc::new(TerminalConfirmer::new(assume_yes)),
        )
        .with_dismiss_after(config.notifications.dismiss_after());

        session.run(GitHubAction::Open).await;

        match action {
            GithubCommand::Status => {}
            GithubCommand::Login => {
                let url = session.login_url();
                println!("{url}");
                if let Err(e) = webbrowser::open(&url) {
                    log::warn!("⚠️ Could not open browser: {e}");
                }
                return Ok(());
            }
            GithubCommand::Create { name, description, public } => {
                if Self::expect_panel(&session, "create a repository", |p| matches!(p, GitHubPanel::RepoSetupForm)) {
                    session
                        .run(GitHubAction::SubmitCreateRepo(CreateRepoRequest {
                            name,
                            description,
                            private: !public,
                        }))
                        .await;
                }
            }
            GithubCommand::Push { message, content_file } => {
                if Self::expect_panel(&session, "push", |p| matches!(p, GitHubPanel::PushPanel(_))) {
                    let editor_content = match content_file {
                        Some(path) => Some(tokio::fs::read_to_string(&path).await?),
                        None => None,
                    };
                    session.run(GitHubAction::SubmitPush { message, editor_content }).await;
                }
            }
            GithubCommand::Disconnect { .. } => {
                if Self::expect_panel(&session, "disconnect", |p| matches!(p, GitHubPanel::PushPanel(_))) {
                    session.run(GitHubAction::RequestDisconnect).await;
                }
            }
        }

        if session.reloads() > 0 {
            session.run(GitHubAction::Open).await;
        }
        Self::print_panel(&session);

        Self::check_notifications(&notifier, "github")
    }

    fn expect_panel(session: &GitHubSession, operation: &str, accepts: impl Fn(&GitHubPanel) -> bool) -> bool {
        let panel = session.controller().panel();
        if accepts(panel) {
            return true;
        }
        if panel.is_open() {
            log::warn!("⚠️ Cannot {operation} from the current GitHub state");
        }
        false
    }

    fn print_panel(session: &GitHubSession) {
        match session.controller().panel() {
            GitHubPanel::Closed | GitHubPanel::Loading => {}
            GitHubPanel::ConnectPrompt => {
                println!("🔌 Not connected to GitHub. Run 'spaces github <page> login' and sign in.");
                println!("   {}", session.login_url());
            }
            GitHubPanel::RepoSetupForm => {
                println!("📦 Connected to GitHub, no repository linked yet.");
                println!("   Run 'spaces github <page> create <name>' to create one.");
            }
            GitHubPanel::PushPanel(info) => {
                println!("🔗 Linked to {} ({})", info.repo_name, info.repo_url);
            }
        }
    }

    fn editor_session(
        config: &Config,
        page: &str,
        notifier: Arc<NotificationLogger>,
        preview: Arc<dyn PreviewSink>,
    ) -> SpacesResult<EditorSession> {
        let site_id = UrlHelper::site_id_from_path(&UrlHelper::normalize_page(page))?;
        let sites = SitesClient::new(SpacesHttpClient::new(&config.server)?);
        let controller = EditorController::new(site_id, &config.editor)
            .with_dismiss_after(config.notifications.dismiss_after());

        Ok(EditorSession::new(
            controller,
            Arc::new(sites),
            notifier,
            preview,
            Arc::new(SystemClipboard),
        ))
    }

    /// Feeds every configured file present in `dir` through the editor, then
    /// returns to the default file.
    async fn seed_from_dir(session: &mut EditorSession, config: &Config, dir: &Path) -> SpacesResult<()> {
        for name in &config.editor.files {
            let path = dir.join(name);
            if !path.exists() {
                continue;
            }
            let content = tokio::fs::read_to_string(&path).await?;
            session.dispatch(EditorAction::SwitchFile(name.clone()));
            session.dispatch(EditorAction::Edit(content));
        }
        session.dispatch(EditorAction::SwitchFile(config.editor.default_file.clone()));
        Ok(())
    }

    async fn read_local(dir: &Path, file: &str) -> SpacesResult<String> {
        let path = dir.join(file);
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            SpacesError::validation_error(file, &format!("Could not read {}: {e}", path.display()))
        })
    }

    fn announce_preview(url: &str, open_browser: bool) {
        println!("🌐 Preview at {url}");
        if open_browser {
            if let Err(e) = webbrowser::open(url) {
                log::warn!("⚠️ Could not open browser: {e}");
            }
        }
    }

    fn load_config() -> SpacesResult<Config> {
        let config = ConfigManager::load().map_err(|e| {
            log::error!("❌ Failed to load configuration: {e}");
            log::error!("💡 Run 'spaces init' to create a configuration file.");
            e
        })?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("  • {error}");
            }
            return Err(SpacesError::config_error(
                "Invalid configuration",
                None,
                Some("Run 'spaces validate' for details"),
            ));
        }
        Ok(config)
    }

    fn check_notifications(notifier: &NotificationLogger, operation: &str) -> SpacesResult<()> {
        match notifier.error_count() {
            0 => Ok(()),
            count => Err(SpacesError::system_error(operation, &format!("{count} error(s) reported"))),
        }
    }
}
