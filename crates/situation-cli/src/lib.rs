//! Situation Update Resolver CLI
//!
//! Loads a content snapshot, resolves the update field of one node, and
//! renders it as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use content_store::InMemoryStore;
use situation_model::{LangCode, NodeId};
use situation_resolver::{
    AlertLevelResolver, FixedLocale, LocaleResolver, ResolverConfig, SituationUpdateField,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(name = "situation-resolve")]
#[command(about = "Resolve the alert-level update shown on a situation node")]
pub struct Args {
    /// JSON snapshot of levels, windows, regions, updates and nodes
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Node to resolve
    #[arg(long)]
    pub node: u64,

    /// Locale for translated content (defaults to the configured locale)
    #[arg(long)]
    pub locale: Option<String>,

    /// Optional configuration file (TOML, YAML or JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Initialize logging at the given level name
pub fn init_logging(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    // A subscriber may already be installed when embedded
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Resolve the requested node and render the result as pretty JSON
///
/// Prints `null` when the node has no update to show.
pub fn run(args: &Args, config: ResolverConfig) -> Result<String> {
    let locale: FixedLocale = match &args.locale {
        Some(code) => FixedLocale(LangCode::new(code).context("invalid --locale")?),
        None => FixedLocale(config.locale()?),
    };

    let store = InMemoryStore::load_snapshot(&args.snapshot)
        .with_context(|| format!("failed to load snapshot {}", args.snapshot.display()))?;

    let node = store
        .node(NodeId(args.node))?
        .with_context(|| format!("node {} not found in snapshot", args.node))?;

    let resolver = AlertLevelResolver::new(config);
    let field = SituationUpdateField::new(node, locale.current_locale());
    let update = field.get(&store, &resolver)?;

    match update {
        Some(update) => info!("Node {} shows a {} update", args.node, update.level),
        None => info!("Node {} has no update to show", args.node),
    }

    Ok(serde_json::to_string_pretty(&update)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "levels": [{"id": 2, "level_value": "orange"}, {"id": 5, "level_value": "red"}],
        "windows": [{"id": 3, "valid_from": "2021-03-01", "valid_to": "2021-03-14",
                     "next_level": 5}],
        "regions": [{"id": 7, "name": "Nord", "current_level": 2, "next_validity": 3}],
        "updates": [{"id": 11, "from_level": 2, "to_level": 5,
                     "content": [{"text": "B"}], "translations": {"fr": [{"text": "B-fr"}]}}],
        "nodes": [{"id": 100, "bundle": "situation", "region": 7, "updates": [11]},
                  {"id": 101, "bundle": "situation", "updates": [11]}]
    }"#;

    fn snapshot_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        file
    }

    fn args(snapshot: &tempfile::NamedTempFile, node: u64, locale: Option<&str>) -> Args {
        Args {
            snapshot: snapshot.path().to_path_buf(),
            node,
            locale: locale.map(str::to_string),
            config: None,
        }
    }

    #[test]
    fn test_renders_translated_update() {
        let file = snapshot_file();
        let output = run(&args(&file, 100, Some("fr")), ResolverConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "text": "B-fr",
                "level": "red",
                "validFrom": "2021-03-01",
                "validTo": "2021-03-14"
            })
        );
    }

    #[test]
    fn test_falls_back_to_configured_locale() {
        let file = snapshot_file();
        let config = ResolverConfig {
            default_locale: "fr".to_string(),
            ..Default::default()
        };
        let output = run(&args(&file, 100, None), config).unwrap();
        assert!(output.contains("B-fr"));
    }

    #[test]
    fn test_no_update_renders_null() {
        let file = snapshot_file();
        let output = run(&args(&file, 101, None), ResolverConfig::default()).unwrap();
        assert_eq!(output, "null");
    }

    #[test]
    fn test_unknown_node_is_an_error() {
        let file = snapshot_file();
        let err = run(&args(&file, 404, None), ResolverConfig::default()).unwrap_err();
        assert!(err.to_string().contains("node 404 not found"));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "situation-resolve",
            "--snapshot",
            "snap.json",
            "--node",
            "100",
            "--locale",
            "fr",
        ])
        .unwrap();
        assert_eq!(args.node, 100);
        assert_eq!(args.locale.as_deref(), Some("fr"));
        assert!(args.config.is_none());
    }
}
