use crate::{cli::value::KeyValuePair, command::Command, payload::GenerationPayload};
use anyhow::Context;
use clap::Parser;
use libpngmeta::TextKeyword;
use std::{fs, path::PathBuf};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct EmbedCommand {
    #[arg(help = "Source image")]
    image: PathBuf,
    #[arg(short, long, help = "Write the result here instead of in place")]
    output: Option<PathBuf>,
    #[arg(
        long,
        default_value = TextKeyword::BananaPro.keyword(),
        help = "Text chunk keyword"
    )]
    keyword: String,
    #[arg(
        long,
        conflicts_with_all = ["prompt", "lighting", "scene", "view", "set"],
        help = "Embed this JSON payload verbatim"
    )]
    json: Option<String>,
    #[arg(long, help = "Generation prompt")]
    prompt: Option<String>,
    #[arg(long, help = "Lighting description")]
    lighting: Option<String>,
    #[arg(long, help = "Scene description")]
    scene: Option<String>,
    #[arg(long, help = "Camera view description")]
    view: Option<String>,
    #[arg(long = "set", value_name = "KEY=VALUE", help = "Additional payload field")]
    set: Vec<KeyValuePair>,
}

impl Command for EmbedCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        embed_metadata(self)
    }
}

fn embed_metadata(args: EmbedCommand) -> anyhow::Result<()> {
    let text = match args.json {
        Some(json) => {
            serde_json::from_str::<serde_json::Value>(&json)
                .context("payload is not valid JSON")?;
            json
        }
        None => {
            let mut payload = GenerationPayload {
                prompt: args.prompt,
                lighting: args.lighting,
                scene: args.scene,
                view: args.view,
                ..Default::default()
            };
            for KeyValuePair(key, value) in args.set {
                payload.extra.insert(key, serde_json::Value::String(value));
            }
            serde_json::to_string(&payload)?
        }
    };
    let image = fs::read(&args.image)
        .with_context(|| format!("failed to read {}", args.image.display()))?;
    let embedded = libpngmeta::embed_text(&image, &args.keyword, &text)
        .with_context(|| format!("{} is not an embeddable PNG image", args.image.display()))?;
    let output = args.output.as_ref().unwrap_or(&args.image);
    fs::write(output, embedded)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!(
        "embedded {} payload bytes into {}",
        text.len(),
        output.display()
    );
    Ok(())
}
