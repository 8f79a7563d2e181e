use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use tagforge::{Document, Element, Render, RenderConfig, Result, Section};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file path (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Omit the space in attribute-less tags when printing
    #[arg(short, long)]
    compact: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let document = match args.output {
        Some(path) => {
            info!("Writing sample document to {}", path.display());
            Document::with_output(path)
        }
        None => Document::new(),
    };
    let has_output = document.output().is_some();

    let document = document.build(populate)?;

    if !has_output {
        let config = if args.compact {
            RenderConfig::compact()
        } else {
            RenderConfig::default()
        };
        println!("{}", document.render_with(&config));
    }

    Ok(())
}

fn populate(doc: &mut Document) {
    let head = Section::new("head").build(|head| {
        head.append(Element::new("title").with_text("hello"));
    });
    doc.append(head);

    let body = Section::new("body").build(|body| {
        body.append(
            Element::new("h1")
                .with_classes(["main-text"])
                .with_text("Test"),
        );

        let div = Element::new("div")
            .with_classes(["container", "container-fluid"])
            .with_attribute("id", "lead")
            .build(|div| {
                div.append(Element::new("p").with_text("another test"))
                    .append(Element::new("img").void().with_attribute("src", "/icon.png"));
            });
        body.append(div);
    });
    doc.append(body);
}
