use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cropper_client::config::{BASE_URL_ENV, DEFAULT_BASE_URL};
use cropper_client::{ApiClient, ClientConfig, DirectorySaver, FilePayload, Preset};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Parser)]
#[command(name = "cropper", about = "Upload, download and manage presets on a cropper backend")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Upload a file and print its download URL
    Upload { path: PathBuf },
    /// Fetch a stored file to a path, or stdout
    Get {
        name: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch a stored file and save it under its own name
    Download {
        name: String,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Store the presets from a JSON array file
    SetPreset { file: PathBuf },
    /// Print every stored preset
    GetPreset,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let client = ApiClient::new(ClientConfig::new(cli.base_url));

    match cli.command {
        Command::Upload { path } => {
            let file = FilePayload::from_path(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let url = client.upload_file(Some(&file)).await?;
            println!("{}", url);
        }
        Command::Get { name, output } => {
            let blob = client.get_file(&name).await?;
            match output {
                Some(path) => tokio::fs::write(&path, &blob)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => {
                    let mut stdout = tokio::io::stdout();
                    stdout.write_all(&blob).await?;
                    stdout.flush().await?;
                }
            }
        }
        Command::Download { name, out_dir } => {
            let saver = DirectorySaver::new(out_dir);
            match client.download_file(&name, &saver).await {
                Some(path) => println!("{}", path.display()),
                None => bail!("Nothing was saved for {}", name),
            }
        }
        Command::SetPreset { file } => {
            let raw = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let presets: Vec<Preset> = serde_json::from_slice(&raw)
                .with_context(|| format!("{} is not a JSON array", file.display()))?;
            let reply = client.set_preset(&presets).await?;
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Command::GetPreset => {
            let presets = client.get_preset().await?;
            println!("{}", serde_json::to_string_pretty(&presets)?);
        }
    }

    Ok(())
}
