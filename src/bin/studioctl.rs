use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use studio_gateway::characters;
use studio_gateway::studio::{HttpTransport, MemoryBlobStore, Mode, Prefill, SelectedImage, Studio};
use studio_gateway::Config;

#[derive(Parser, Debug)]
#[command(name = "studioctl", about = "CLI for the Studio Gateway", version)]
struct Cli {
    /// Override STUDIO_URL
    #[arg(global = true, long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one Studio generation against the gateway
    Generate {
        /// image, video or remix
        #[arg(long)]
        mode: Option<Mode>,
        #[arg(long)]
        prompt: Option<String>,
        /// Studio link or query string to prefill from, e.g. `mode=remix&character=nova&seed=20251201`.
        /// Explicit flags win over values from the query.
        #[arg(long, value_name = "QUERY")]
        query: Option<String>,
        #[arg(long)]
        character: Option<String>,
        /// 4:5, 16:9 or 1:1
        #[arg(long)]
        aspect: Option<String>,
        #[arg(long)]
        seed: Option<i64>,
        #[arg(long)]
        steps: Option<u32>,
        #[arg(long)]
        guidance: Option<f64>,
        /// Remix strength in [0, 1]
        #[arg(long)]
        strength: Option<f64>,
        /// Source image for remix mode
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,
        /// Where to save the generated media
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Print the gateway health report
    Health,
    /// Show a character profile and its studio links
    Profile {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Config::dotenv_load();
    let cli = Cli::parse();
    let server = cli.server.unwrap_or_else(Config::studio_url);

    match cli.command {
        Commands::Generate {
            mode, prompt, query, character, aspect,
            seed, steps, guidance, strength,
            image, out,
        } => {
            let store = Arc::new(MemoryBlobStore::new());
            let mut studio = Studio::new(HttpTransport::new(server), store.clone());

            if let Some(q) = query {
                Prefill::from_query(&q).apply(&mut studio.settings);
            }
            let s = &mut studio.settings;
            if let Some(v) = mode { s.mode = v; }
            if let Some(v) = prompt { s.prompt = v; }
            if let Some(v) = character { s.character = Some(v); }
            if let Some(v) = aspect { s.aspect = v; }
            if let Some(v) = seed { s.seed = Some(v); }
            if let Some(v) = steps { s.steps = v; }
            if let Some(v) = guidance { s.guidance = v; }
            if let Some(v) = strength { s.strength = v; }

            if let Some(path) = image {
                let bytes = tokio::fs::read(&path).await?;
                studio.set_base_image(Some(SelectedImage {
                    file_name: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "image.png".to_string()),
                    media_type: guess_image_type(&path).to_string(),
                    bytes: bytes.into(),
                }));
            }

            if !studio.can_generate() {
                if studio.settings.prompt.trim().is_empty() {
                    eprintln!("A prompt is required (--prompt or prompt= in --query)");
                } else {
                    eprintln!("Remix mode needs a source image (--image <PATH>)");
                }
                std::process::exit(2);
            }

            let result = match studio.generate().await {
                Some(result) => result.clone(),
                None => std::process::exit(2),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);

            match result.media_url().and_then(|url| store.get(url)) {
                Some(blob) => {
                    let ext = blob.media_type.split('/').nth(1).unwrap_or("bin");
                    let path = out.unwrap_or_else(|| PathBuf::from(format!("{}.{}", result.id, ext)));
                    tokio::fs::write(&path, &blob.bytes).await?;
                    println!("Saved {} ({} bytes, {})", path.display(), blob.bytes.len(), blob.media_type);
                    Ok(())
                }
                None => {
                    eprintln!("Error: {}", result.error().unwrap_or("Generation failed"));
                    std::process::exit(1);
                }
            }
        }
        Commands::Health => {
            let transport = HttpTransport::new(server);
            let v = transport.health().await.map_err(|e| {
                eprintln!("Error: {}", e);
                e
            })?;
            println!("{}", serde_json::to_string_pretty(&v)?);
            Ok(())
        }
        Commands::Profile { id } => {
            let Some(p) = characters::profile(&id) else {
                eprintln!("Unknown character '{}'. Known: {}", id, known_ids());
                std::process::exit(1);
            };
            println!("{} ({})", p.name, p.id);
            println!("  {}", p.tagline);
            println!("  style:   {}", p.identity.style);
            println!("  vibe:    {}", p.personality.vibe);
            println!("  seed:    {}", p.consistency.suggested_seed);
            println!("  keyword: {}", p.consistency.embedding_keyword);
            let name = p.display_name();
            println!("Generate with {}: {}", name, p.studio_url(Mode::Image, None));
            println!("Remix {}: {}", name, p.studio_url(Mode::Remix, None));
            Ok(())
        }
    }
}

fn known_ids() -> String {
    characters::all().iter().map(|p| p.id).collect::<Vec<_>>().join(", ")
}

fn guess_image_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/png",
    }
}
