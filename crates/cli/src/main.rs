//! botodocs CLI
//!
//! Command-line interface for generating the markdown reference site from
//! botocore and boto3 data directories.

use anyhow::{bail, Context, Result};
use botodocs_common::{ServiceCatalog, SiteConfig};
use botodocs_generator::{find_all_shapes, DocsGenerator};
use botodocs_parser::BotocoreLoader;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "botodocs")]
#[command(version, about = "Generate a markdown reference site for the AWS Python SDK", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the documentation site
    #[command(after_help = "EXAMPLES:\n  \
        # Document every service, resources included\n  \
        botodocs generate \\\n    \
        --data-dir ~/botocore/botocore/data \\\n    \
        --resources-dir ~/boto3/boto3/data \\\n    \
        --output ./docs\n\n  \
        # Only S3 and SQS, with settings from a config file\n  \
        botodocs generate \\\n    \
        --data-dir ~/botocore/botocore/data \\\n    \
        --config botodocs.yaml \\\n    \
        --services s3,sqs")]
    Generate {
        /// botocore `data/` directory
        #[arg(short, long)]
        data_dir: PathBuf,

        /// boto3 `data/` directory, enables resource pages
        #[arg(short, long)]
        resources_dir: Option<PathBuf>,

        /// Output directory (doc root)
        #[arg(short, long, default_value = "./docs")]
        output: PathBuf,

        /// Site configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Comma-separated list of services to include
        #[arg(long, value_delimiter = ',')]
        services: Option<Vec<String>>,

        /// Comma-separated list of services to exclude
        #[arg(long, value_delimiter = ',')]
        exclude: Option<Vec<String>>,

        /// SDK version announced on the overview page
        #[arg(long)]
        sdk_version: Option<String>,
    },

    /// List the services found in a botocore data directory
    List {
        /// botocore `data/` directory
        #[arg(short, long)]
        data_dir: PathBuf,
    },

    /// Load one service and summarize what would be documented
    Inspect {
        /// botocore `data/` directory
        #[arg(short, long)]
        data_dir: PathBuf,

        /// boto3 `data/` directory
        #[arg(short, long)]
        resources_dir: Option<PathBuf>,

        /// Service name, e.g. "s3"
        service: String,
    },
}

/// Site settings after applying command-line overrides
struct GenerateOptions<'a> {
    config: Option<&'a Path>,
    services: Option<&'a [String]>,
    exclude: Option<&'a [String]>,
    sdk_version: Option<&'a str>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            data_dir,
            resources_dir,
            output,
            config,
            services,
            exclude,
            sdk_version,
        } => {
            let options = GenerateOptions {
                config: config.as_deref(),
                services: services.as_deref(),
                exclude: exclude.as_deref(),
                sdk_version: sdk_version.as_deref(),
            };
            let site_config = build_site_config(&options)?;
            let loader = build_loader(&data_dir, resources_dir.as_deref());
            generate_command(&loader, site_config, &output, cli.verbose)?;
        }
        Commands::List { data_dir } => {
            list_command(&BotocoreLoader::new(data_dir), cli.verbose)?;
        }
        Commands::Inspect {
            data_dir,
            resources_dir,
            service,
        } => {
            let loader = build_loader(&data_dir, resources_dir.as_deref());
            inspect_command(&loader, &service, cli.verbose)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the `--verbose` default
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn build_loader(data_dir: &Path, resources_dir: Option<&Path>) -> BotocoreLoader {
    let loader = BotocoreLoader::new(data_dir);
    match resources_dir {
        Some(dir) => loader.with_resources_dir(dir),
        None => loader,
    }
}

fn build_site_config(options: &GenerateOptions) -> Result<SiteConfig> {
    let mut config = match options.config {
        Some(path) => {
            debug!(path = %path.display(), "loading site config");
            SiteConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => SiteConfig::default(),
    };

    if let Some(services) = options.services {
        config.include = services.to_vec();
    }
    if let Some(exclude) = options.exclude {
        config.exclude.extend(exclude.iter().cloned());
    }
    if let Some(version) = options.sdk_version {
        config.sdk_version = version.to_string();
    }

    Ok(config)
}

fn generate_command(
    catalog: &dyn ServiceCatalog,
    config: SiteConfig,
    output: &Path,
    verbose: bool,
) -> Result<()> {
    println!(
        "{} Generating {} docs into: {}",
        "→".cyan(),
        config.sdk_name,
        output.display()
    );

    if verbose {
        println!("  SDK version: {}", config.sdk_version);
        println!("  Stubs package: {}", config.stubs_package);
        if !config.include.is_empty() {
            println!("  Include: {}", config.include.join(", "));
        }
        if !config.exclude.is_empty() {
            println!("  Exclude: {}", config.exclude.join(", "));
        }
    }

    let generator = DocsGenerator::new(config).context("Failed to create generator")?;
    let summary = generator
        .generate_site(catalog, output)
        .context("Failed to generate documentation")?;

    for (service, reason) in &summary.skipped {
        eprintln!("{} Skipped {}: {}", "⚠".yellow(), service.yellow(), reason);
    }
    if summary.services.is_empty() {
        bail!("No services were documented");
    }

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("  Services: {}", summary.services.len().to_string().yellow());
    println!("  Files written: {}", summary.files_written);
    if verbose {
        for service in &summary.services {
            println!("  • {}", service.cyan());
        }
    }
    println!("\n{}", "Next steps:".bold());
    println!("  1. Review the site in {}", output.display());
    println!("  2. Serve it: docsify serve {}", output.display());

    Ok(())
}

fn list_command(catalog: &dyn ServiceCatalog, verbose: bool) -> Result<()> {
    let names = catalog
        .service_names()
        .context("Failed to list services")?;

    println!("{} Found {} services", "✓".green(), names.len());
    for name in &names {
        if verbose {
            match catalog.load_service(name) {
                Ok(service) => println!(
                    "  • {} ({}, {} operations)",
                    name.cyan(),
                    service.model.metadata.display_name(),
                    service.model.operations.len()
                ),
                Err(e) => println!("  • {} {}", name.cyan(), format!("({})", e).red()),
            }
        } else {
            println!("  • {}", name);
        }
    }

    Ok(())
}

fn inspect_command(catalog: &dyn ServiceCatalog, name: &str, verbose: bool) -> Result<()> {
    println!("{} Loading service: {}", "→".cyan(), name);
    let service = catalog
        .load_service(name)
        .with_context(|| format!("Failed to load service {}", name))?;

    let metadata = &service.model.metadata;
    let graph = &service.model.shapes;
    let roots: Vec<_> = graph.ids().collect();
    let data_types = find_all_shapes(graph, &roots);

    println!("\n{}", "✓ Load successful!".green().bold());
    println!("\n{}", "Service:".bold());
    println!("  Name: {}", metadata.display_name().yellow());
    println!("  Class: {}", metadata.class_name());
    println!("  API version: {}", metadata.api_version);
    println!("  Path: {}", service.service_path());
    println!("  Operations: {}", service.model.operations.len());
    println!("  Shapes: {} ({} documented as data types)", graph.len(), data_types.len());
    println!("  Paginators: {}", service.paginators.len());
    println!("  Waiters: {}", service.waiters.len());
    match &service.resources {
        Some(resources) => println!(
            "  Resources: {} ({} sub-resources)",
            resources.resources.len(),
            resources.service.sub_resources.len()
        ),
        None => println!("  Resources: none"),
    }

    if verbose {
        println!("\n{}", "Operations:".bold());
        for operation in &service.model.operations {
            let marker = if operation.deprecated { " (deprecated)" } else { "" };
            println!("  • {}{}", operation.name.cyan(), marker);
        }
        println!("\n{}", "Data types:".bold());
        for id in &data_types {
            let shape = graph.get(*id);
            println!("  • {} ({})", shape.name, shape.type_name());
        }
    }

    Ok(())
}
