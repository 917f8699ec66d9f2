use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use influence_seo::{Config, ContentRecord, ContentType, Generator, Language};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(help = "The content record, as YAML or JSON. `-` reads stdin.")]
    content: String,
    #[arg(short = 't', long = "type", default_value = "blog", help = "blog, project or led")]
    content_type: ContentType,
    #[arg(short, long, default_value = "ru", help = "ru, uz or en")]
    lang: Language,
    #[arg(short, long, help = "YAML config file")]
    config: Option<PathBuf>,
    #[arg(long, help = "Overrides the canonical base URL")]
    base_url: Option<String>,
    #[arg(short, long, help = "Print JSON-LD structured data instead of meta tags")]
    structured: bool,
}

fn read_content(source: &str) -> anyhow::Result<ContentRecord> {
    let raw = if source == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read `{}`", source))?
    };

    serde_yaml::from_str(&raw).with_context(|| format!("`{}` is not a valid content record", source))
}

fn main() -> anyhow::Result<()> {
    // Initialize Logging.
    let log_environ = env_logger::Env::new()
        .filter("INFLUENCE_SEO_LOG")
        .write_style("INFLUENCE_SEO_LOG_STYLE");
    let mut log_builder = env_logger::Builder::new();

    log_builder.filter_level(log::LevelFilter::Info);
    log_builder.parse_env(log_environ);
    log_builder.init();

    // Parse Arguments.
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("Failed to load config {:?}", path))?,
        None => Config::default(),
    };
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url);
    }

    log::info!("Describing `{}` as {} ({})", args.content, args.content_type, args.lang);

    let content = read_content(&args.content)?;
    let generator = Generator::new(config);

    let out = if args.structured {
        generator
            .structured_data(&content, args.content_type, args.lang)
            .to_json_ld_pretty()?
    } else {
        serde_json::to_string_pretty(&generator.seo_meta(&content, args.content_type, args.lang))?
    };

    println!("{}", out);

    Ok(())
}
