use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncReadExt;

use recipe_card::{
    parse, render, CardConfig, HtmlFileSink, ImageRef, MemoryTemplateStore, RenderSink,
    TemplateStore,
};

/// Fill an HTML recipe card template from free-form recipe text
#[derive(Parser, Debug)]
#[command(name = "recipe-card", version, about)]
struct Args {
    /// Recipe text file, or `-` to read stdin
    #[arg(required_unless_present = "list_templates")]
    recipe: Option<PathBuf>,

    /// HTML template file
    #[arg(long, conflicts_with = "template_name")]
    template: Option<PathBuf>,

    /// Name of a stored template (defaults to the configured template)
    #[arg(long)]
    template_name: Option<String>,

    /// Recipe image file, embedded as a data URI
    #[arg(long, conflicts_with = "image_url")]
    image: Option<PathBuf>,

    /// Hosted recipe image URL
    #[arg(long)]
    image_url: Option<String>,

    /// Logo image file, embedded as a data URI
    #[arg(long, conflicts_with = "logo_url")]
    logo: Option<PathBuf>,

    /// Hosted logo URL
    #[arg(long)]
    logo_url: Option<String>,

    /// Write the card here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the parsed recipe as JSON instead of rendering
    #[arg(long)]
    json: bool,

    /// Only report placeholders missing from the template
    #[arg(long)]
    check: bool,

    /// List stored templates and exit
    #[arg(long)]
    list_templates: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = CardConfig::load()?;
    debug!("{:#?}", config);

    let store = MemoryTemplateStore::new();
    if let Some(dir) = &config.templates_dir {
        store.load_dir(dir).await?;
    }

    if args.list_templates {
        for template in store.list().await? {
            println!("{}\t{}", template.id, template.name);
        }
        return Ok(());
    }

    let (template_id, template) = match (&args.template, &args.template_name) {
        (Some(path), _) => (None, fs::read_to_string(path).await?),
        (None, Some(name)) => {
            let stored = store.find_by_name(name).await?;
            (Some(stored.id), stored.html)
        }
        (None, None) => {
            let stored = store.find_by_name(&config.default_template).await?;
            (Some(stored.id), stored.html)
        }
    };

    if args.check {
        let missing = recipe_card::missing_placeholders(&template, &config.required_placeholders);
        if missing.is_empty() {
            println!("Template contains all required placeholders");
        } else {
            println!("Missing placeholders: {}", format_keys(&missing));
        }
        return Ok(());
    }

    let recipe = args
        .recipe
        .as_deref()
        .ok_or("Please provide a recipe text file as an argument")?;
    let text = read_recipe(recipe).await?;
    let record = parse(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let image = image_ref(args.image.as_deref(), args.image_url, config.max_image_bytes).await?;
    let logo = image_ref(args.logo.as_deref(), args.logo_url, config.max_image_bytes).await?;

    let resolution = render(
        &template,
        &record,
        image.as_ref(),
        logo.as_ref(),
        &config.required_placeholders,
    );
    if !resolution.missing_placeholders.is_empty() {
        eprintln!(
            "Missing placeholders in this template: {}",
            format_keys(&resolution.missing_placeholders)
        );
    }

    if let Some(id) = template_id {
        store.record_generation(id, &resolution.html).await?;
    }

    match args.output {
        Some(path) => {
            let written = HtmlFileSink::new(path).render(&resolution.html).await?;
            info!("Card for '{}' saved to {}", record.title, written.display());
        }
        None => println!("{}", resolution.html),
    }

    Ok(())
}

async fn read_recipe(path: &Path) -> Result<String, std::io::Error> {
    if path == Path::new("-") {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        Ok(text)
    } else {
        fs::read_to_string(path).await
    }
}

async fn image_ref(
    file: Option<&Path>,
    url: Option<String>,
    max_bytes: u64,
) -> Result<Option<ImageRef>, recipe_card::CardError> {
    match (file, url) {
        (Some(path), _) => Ok(Some(ImageRef::from_file(path, max_bytes).await?)),
        (None, Some(url)) => Ok(Some(ImageRef::from_url(url))),
        (None, None) => Ok(None),
    }
}

fn format_keys(keys: &[String]) -> String {
    keys.iter()
        .map(|key| format!("{{{{{key}}}}}"))
        .collect::<Vec<_>>()
        .join(", ")
}
