use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fieldkit::{FormDocument, IdSource, InputKind, RandomIds, SequentialIds};
use fieldkit_html::HtmlOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "fieldkit")]
#[command(version)]
#[command(about = "Render labeled form inputs from a descriptor file")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every field of a .toml or .json descriptor
    Render {
        /// Descriptor file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Indent the HTML output
        #[arg(long)]
        pretty: bool,

        /// Use sequential ids instead of random ones
        #[arg(long)]
        stable_ids: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the input kinds a descriptor may use
    Kinds,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Html,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for rendered output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    match args.command {
        Command::Render {
            file,
            format,
            pretty,
            stable_ids,
            output,
        } => render(&file, format, pretty, stable_ids, output.as_deref()),
        Command::Kinds => {
            print!("{}", kinds_listing());
            Ok(())
        }
    }
}

fn render(
    file: &std::path::Path,
    format: Format,
    pretty: bool,
    stable_ids: bool,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let doc = FormDocument::read_from_file(file)
        .with_context(|| format!("failed to load {}", file.display()))?;

    let mut ids: Box<dyn IdSource> = if stable_ids {
        Box::new(SequentialIds::new())
    } else {
        Box::new(RandomIds)
    };

    let rendered = doc
        .render_all(ids.as_mut())
        .with_context(|| format!("failed to render {}", file.display()))?;
    let elements: Vec<_> = rendered.into_iter().map(|r| r.element).collect();

    let text = match format {
        Format::Html => {
            let options = if pretty {
                HtmlOptions::pretty()
            } else {
                HtmlOptions::compact()
            };
            fieldkit_html::fragments_to_html(&elements, &options)
        }
        Format::Json => serde_json::to_string_pretty(&elements)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", text))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), fields = elements.len(), "wrote rendered form");
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn kinds_listing() -> String {
    InputKind::ALL
        .iter()
        .map(|kind| {
            let status = if kind.is_supported() {
                "supported"
            } else {
                "unsupported"
            };
            format!("{:<10} {}\n", kind, status)
        })
        .collect()
}
