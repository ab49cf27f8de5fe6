// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

use clap::{Args, Parser, Subcommand, ValueEnum};
use cms_properties::launcher::{launch, LaunchContext, LauncherRegistry};
use cms_properties::logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use cms_properties::messages::keys::UPLOAD_BUNDLE;
use cms_properties::messages::{MessageCatalog, MessageContainer};
use cms_properties::property::{
    convert_ids_to_paths, convert_paths_to_ids, convert_properties_to_client_format,
    merge_defaults, property_info, property_info_json, validate_resource_properties,
    widget_configuration_json, RuleType,
};
use cms_properties::resource::{InMemoryRepository, RenderMode, RequestContext, ResourceLookup};
use cms_properties::upload::{RepositoryUploadService, UploadService};
use cms_properties::user_config::{self, UserConfig};
use cms_properties::xml::{read_properties, save_properties, Element};
use color_eyre::eyre::{eyre, Result, WrapErr};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// cms-properties - property helper, launchers and upload checks for an
/// XML-content resource repository
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable JSON log format
    #[arg(long, env = "CMS_PROPERTIES_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "CMS_PROPERTIES_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.cms-properties/logs)
    #[arg(long, env = "CMS_PROPERTIES_LOG_DIR")]
    log_dir: Option<String>,

    /// User config file (default: ~/.cms-properties/config.toml)
    #[arg(long, env = "CMS_PROPERTIES_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct RepoArgs {
    /// Repository file (TOML) holding resources, sitemap and content types
    #[arg(long, env = "CMS_PROPERTIES_REPO")]
    repo: PathBuf,

    /// Root path of the current site, e.g. /sites/default
    #[arg(long, env = "CMS_PROPERTIES_SITE_ROOT", default_value = "")]
    site_root: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Target {
    /// Site paths
    Client,
    /// Structure ids
    Server,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a KEY:VALUE|KEY:VALUE widget configuration
    WidgetConf { configuration: String },

    /// Show the resolved property configuration of a resource
    PropertyInfo {
        #[command(flatten)]
        repo: RepoArgs,
        path: String,
    },

    /// Convert a vfslist value between structure ids and site paths
    Convert {
        #[command(flatten)]
        repo: RepoArgs,
        #[arg(long, value_enum)]
        to: Target,
        value: String,
    },

    /// Read the properties stored in an XML content element
    ReadProperties { file: PathBuf },

    /// Store the properties of a resource into an XML content element
    SaveProperties {
        #[command(flatten)]
        repo: RepoArgs,
        /// Site path of the resource whose type configures the properties
        #[arg(long)]
        resource: String,
        /// XML file holding the element to update
        #[arg(long)]
        file: PathBuf,
        /// NAME=VALUE to set; may be repeated
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
        /// Fill unset properties with their configured defaults
        #[arg(long)]
        with_defaults: bool,
        /// Print the resulting XML instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Render a resource the way its launcher would
    Launch {
        #[command(flatten)]
        repo: RepoArgs,
        path: String,
        /// Render for a static export
        #[arg(long)]
        export: bool,
    },

    /// Check file names against an upload target folder
    CheckUpload {
        #[command(flatten)]
        repo: RepoArgs,
        /// Target folder (default: from the user config)
        #[arg(long)]
        folder: Option<String>,
        names: Vec<String>,
    },

    /// Print a message bundle
    Messages {
        #[arg(long)]
        bundle: Option<String>,
    },
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got {s:?}"))
}

/// Domain failures are reported with their localised text.
fn report(
    catalog: &MessageCatalog,
    message: Option<&MessageContainer>,
    err: &dyn std::fmt::Display,
) -> color_eyre::Report {
    message.map_or_else(|| eyre!("{err}"), |m| eyre!(catalog.localize(m)))
}

fn load_repo(
    args: &RepoArgs,
    user_cfg: &UserConfig,
) -> Result<(InMemoryRepository, RequestContext)> {
    let repo = InMemoryRepository::load(&args.repo)
        .wrap_err_with(|| format!("Failed to load repository {}", args.repo.display()))?;
    let ctx = RequestContext::new(&args.site_root).with_locale(&user_cfg.messages.locale);
    Ok((repo, ctx))
}

fn build_catalog(user_cfg: &UserConfig) -> Result<MessageCatalog> {
    let catalog = MessageCatalog::builtin(&user_cfg.messages.locale);
    match &user_cfg.messages.dir {
        Some(dir) => Ok(catalog.with_overrides_from(dir)?),
        None => Ok(catalog),
    }
}

fn property_info_command(
    args: &RepoArgs,
    path: &str,
    user_cfg: &UserConfig,
    catalog: &MessageCatalog,
) -> Result<Value> {
    let (repo, ctx) = load_repo(args, user_cfg)?;
    let resource = repo
        .read_resource(&ctx, path)
        .map_err(|e| report(catalog, e.message(), &e))?;
    property_info_json(&repo, &ctx, &resource).map_err(|e| report(catalog, e.message(), &e))
}

fn convert_command(
    args: &RepoArgs,
    to: Target,
    value: &str,
    user_cfg: &UserConfig,
) -> Result<Value> {
    let (repo, ctx) = load_repo(args, user_cfg)?;
    let converted = match to {
        Target::Client => convert_ids_to_paths(&repo, &ctx, Some(value)),
        Target::Server => convert_paths_to_ids(&repo, &ctx, Some(value)),
    };
    Ok(json!({ "value": converted }))
}

fn read_properties_command(file: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(file)
        .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
    let element = Element::parse(&content)?;
    Ok(json!(read_properties(&element)?))
}

struct SaveRequest<'a> {
    resource: &'a str,
    file: &'a Path,
    set: &'a [(String, String)],
    with_defaults: bool,
    dry_run: bool,
}

fn save_properties_command(
    args: &RepoArgs,
    request: &SaveRequest<'_>,
    user_cfg: &UserConfig,
    catalog: &MessageCatalog,
) -> Result<Value> {
    let (repo, ctx) = load_repo(args, user_cfg)?;
    let resource = repo
        .read_resource(&ctx, request.resource)
        .map_err(|e| report(catalog, e.message(), &e))?;
    let configs = property_info(&repo, &ctx, &resource)
        .map_err(|e| report(catalog, e.message(), &e))?;

    let content = std::fs::read_to_string(request.file)
        .wrap_err_with(|| format!("Failed to read {}", request.file.display()))?;
    let mut element = Element::parse(&content)?;
    let mut properties =
        read_properties(&element).map_err(|e| report(catalog, e.message(), &e))?;
    properties.extend(request.set.iter().cloned());
    if request.with_defaults {
        properties = merge_defaults(&repo, &repo, &ctx, &resource, &properties);
    }

    let violations = validate_resource_properties(&repo, &ctx, &resource, &properties)
        .map_err(|e| report(catalog, e.message(), &e))?;
    if let Some(error) = violations.iter().find(|v| v.rule_type == RuleType::Error) {
        return Err(eyre!("Property {}: {}", error.name, error.message));
    }
    for warning in &violations {
        warn!(property = %warning.name, "{}", warning.message);
    }

    save_properties(&repo, &ctx, &mut element, &properties, &configs);
    let xml = element.to_xml()?;
    if !request.dry_run {
        std::fs::write(request.file, &xml)?;
        info!(file = %request.file.display(), "Properties saved");
    }

    let stored = read_properties(&element)?;
    Ok(json!({
        "properties": convert_properties_to_client_format(&repo, &ctx, &stored, &configs),
        "warnings": violations,
        "xml": request.dry_run.then_some(xml),
    }))
}

fn launch_command(
    args: &RepoArgs,
    path: &str,
    export: bool,
    user_cfg: &UserConfig,
    catalog: &MessageCatalog,
) -> Result<Value> {
    let (repo, ctx) = load_repo(args, user_cfg)?;
    let mode = if export || user_cfg.launcher.export {
        RenderMode::Export
    } else {
        RenderMode::Online
    };
    let ctx = ctx.with_mode(mode);
    let mut registry = LauncherRegistry::builtin();
    registry.extend(&user_cfg.launcher.types);

    let resource = repo
        .read_resource(&ctx, path)
        .map_err(|e| report(catalog, e.message(), &e))?;
    let launch_ctx = LaunchContext::new(&repo, &registry, &ctx);
    let response = launch(&launch_ctx, &resource).map_err(|e| report(catalog, e.message(), &e))?;

    let headers: Map<String, Value> = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                Value::String(value.to_str().unwrap_or_default().to_string()),
            )
        })
        .collect();
    Ok(json!({
        "status": response.status().as_u16(),
        "headers": headers,
        "body": String::from_utf8_lossy(response.body()),
    }))
}

async fn check_upload_command(
    args: &RepoArgs,
    folder: Option<&str>,
    names: &[String],
    user_cfg: &UserConfig,
    catalog: &Arc<MessageCatalog>,
) -> Result<Value> {
    let (repo, ctx) = load_repo(args, user_cfg)?;
    let folder = folder.unwrap_or(&user_cfg.upload.target_folder);
    let service = RepositoryUploadService::new(
        Arc::new(repo),
        ctx,
        user_cfg.upload.clone(),
        Arc::clone(catalog),
    );
    let bean = service
        .check_upload_files(names, folder)
        .await
        .map_err(|e| report(catalog, e.message(), &e))?;
    Ok(serde_json::to_value(bean)?)
}

fn messages_command(bundle: Option<&str>, catalog: &MessageCatalog) -> Result<Value> {
    let name = bundle.unwrap_or(UPLOAD_BUNDLE);
    let bundle = catalog.bundle(name).ok_or_else(|| {
        eyre!(
            "Unknown bundle {name}; known bundles: {}",
            catalog.bundle_names().join(", ")
        )
    })?;
    let messages: Map<String, Value> = bundle
        .keys()
        .into_iter()
        .map(|key| (key.to_string(), Value::String(bundle.key(key))))
        .collect();
    Ok(json!({
        "bundle": bundle.name,
        "locale": bundle.locale,
        "messages": messages,
    }))
}

async fn run(
    command: &Command,
    user_cfg: &UserConfig,
    catalog: &Arc<MessageCatalog>,
) -> Result<Value> {
    match command {
        Command::WidgetConf { configuration } => Ok(widget_configuration_json(configuration)),
        Command::PropertyInfo { repo, path } => {
            property_info_command(repo, path, user_cfg, catalog)
        }
        Command::Convert { repo, to, value } => convert_command(repo, *to, value, user_cfg),
        Command::ReadProperties { file } => read_properties_command(file),
        Command::SaveProperties {
            repo,
            resource,
            file,
            set,
            with_defaults,
            dry_run,
        } => {
            let request = SaveRequest {
                resource,
                file,
                set,
                with_defaults: *with_defaults,
                dry_run: *dry_run,
            };
            save_properties_command(repo, &request, user_cfg, catalog)
        }
        Command::Launch { repo, path, export } => {
            launch_command(repo, path, *export, user_cfg, catalog)
        }
        Command::CheckUpload { repo, folder, names } => {
            check_upload_command(repo, folder.as_deref(), names, user_cfg, catalog).await
        }
        Command::Messages { bundle } => messages_command(bundle.as_deref(), catalog),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let cli = Cli::parse();

    let log_dir = cli
        .log_dir
        .as_deref()
        .map_or_else(|| LogConfig::default().log_dir, PathBuf::from);
    let log_file = log_dir.join(LOG_FILENAME);
    let log_config = LogConfig {
        log_dir,
        json_format: cli.log_json,
        rotation: parse_rotation(&cli.log_rotation),
        ..LogConfig::default()
    };
    if let Err(e) = init_logging(log_config) {
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        return Err(e);
    }

    // The user config is optional; a broken one is reported and ignored.
    let loaded = match &cli.config {
        Some(path) => user_config::load_user_config_from(path),
        None => user_config::load_user_config(),
    };
    let user_cfg = loaded.unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let catalog = Arc::new(build_catalog(&user_cfg)?);
    info!(locale = %catalog.locale(), command = ?cli.command, "Running command");

    let output = run(&cli.command, &user_cfg, &catalog).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
