//! site-i18n command line
//!
//! Resolve keys, localize paths and inspect translation coverage from a shell.

use std::collections::HashMap;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use url::Url;

use site_i18n::{
    config::Settings,
    i18n::{alternate_paths, DetectionMode, I18n, LanguageSignals, TranslationParams},
    utils::logging,
};

#[derive(Parser, Debug)]
#[command(name = "site-i18n", version, about = "Translation lookup for static websites")]
struct Cli {
    /// Configuration file name (without extension is fine)
    #[arg(long, default_value = "config")]
    config: String,

    /// Use the translations compiled into the binary
    #[arg(long)]
    bundled: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a translation key for a page URL
    Resolve {
        /// Page URL, e.g. https://example.com/nb/about
        url: String,
        /// Translation key, e.g. nav.home
        key: String,
        /// Where the language is read from
        #[arg(long, value_enum, default_value_t = Mode::Path)]
        mode: Mode,
        /// Placeholder values as name=value
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// Print every item of a list entry
        #[arg(long)]
        all: bool,
    },
    /// Rewrite a path for another language
    Localize {
        path: String,
        /// Target language
        #[arg(long)]
        to: String,
        /// Current language; detected from the path when omitted
        #[arg(long)]
        from: Option<String>,
    },
    /// List supported languages and the page in each of them
    Languages {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Show key counts and untranslated keys per language
    Stats {
        /// List the missing keys
        #[arg(long)]
        verbose: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Path,
    Query,
}

impl From<Mode> for DetectionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Path => DetectionMode::Path,
            Mode::Query => DetectionMode::Query,
        }
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

fn parse_page_url(raw: &str) -> site_i18n::Result<Url> {
    Ok(Url::parse(raw)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_file(&cli.config)?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    let i18n = if cli.bundled {
        I18n::bundled(&settings.i18n)?
    } else {
        info!("Loading translations from {}", settings.i18n.translations_dir);
        I18n::load(&settings.i18n).await?
    };

    match cli.command {
        Command::Resolve { url, key, mode, params, all } => {
            let page = parse_page_url(&url)?;
            let language = i18n.detector().detect_from_url(&page, mode.into());
            if all {
                for item in i18n.resolver().get_all(&language, &key) {
                    println!("{}", item);
                }
            } else {
                let params: TranslationParams = params.into_iter().collect::<HashMap<_, _>>();
                let params = (!params.is_empty()).then_some(&params);
                println!("{}", i18n.t(&key, &language, params));
            }
        }
        Command::Localize { path, to, from } => {
            let languages = i18n.languages();
            let target = languages.require(&to)?;
            let current = match from {
                Some(code) => languages.require(&code)?,
                None => i18n.detector().resolve(&LanguageSignals::new().with_path(&path)),
            };
            println!("{}", i18n.localize(&path, &target, &current));
        }
        Command::Languages { path } => {
            let languages = i18n.languages();
            let current = i18n.detector().resolve(&LanguageSignals::new().with_path(&path));
            for (language, localized) in alternate_paths(languages, &path, &current) {
                let marker = if languages.is_default(&language) { "*" } else { " " };
                println!("{} {:<4} {:<16} {}", marker, language, languages.display_name(&language), localized);
            }
        }
        Command::Stats { verbose } => {
            let stats = i18n.resolver().stats();
            println!("{}", serde_json::to_string_pretty(&stats)?);
            if verbose {
                for language in i18n.languages().iter() {
                    let missing = i18n.resolver().missing_keys(language);
                    if missing.is_empty() {
                        continue;
                    }
                    warn!(language = %language, count = missing.len(), "Untranslated keys");
                    for key in missing {
                        println!("{}: {}", language, key);
                    }
                }
            }
        }
    }

    Ok(())
}
