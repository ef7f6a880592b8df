use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mi_playlist::{open_file_store, Entry, JsonFileGateway, SnapshotGateway, StoreConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mi-playlist")]
#[command(about = "Manage a personal playlist of music videos", long_about = None)]
struct Args {
    /// Path to the playlist snapshot file
    #[arg(short = 's', long, global = true, default_value = "playlist.json")]
    snapshot: PathBuf,

    /// Start with an empty playlist instead of the example videos
    #[arg(long, global = true)]
    no_seed: bool,

    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List videos in playlist order
    List {
        /// Only show favorites
        #[arg(short = 'f', long)]
        favorites: bool,
    },

    /// Show a single video
    Show { id: u64 },

    /// Add a video
    Add { title: String, link: String },

    /// Remove a video
    Remove { id: u64 },

    /// Like a video
    Like { id: u64 },

    /// Mark or unmark a video as favorite
    Favorite { id: u64 },

    /// Print playlist totals
    Stats,

    /// Delete the snapshot file
    Reset,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = StoreConfig::default().with_snapshot_path(args.snapshot);
    if args.no_seed {
        config = config.without_seed();
    }

    // Reset must not open the store, opening would recreate the snapshot
    if let Command::Reset = args.command {
        let gateway = JsonFileGateway::new(config.resolved_snapshot_path());
        if gateway.erase() {
            println!("Playlist snapshot removed: {}", gateway.path().display());
        } else {
            println!("No playlist snapshot at {}", gateway.path().display());
        }
        return Ok(());
    }

    let store = open_file_store(&config);
    log::info!("Playlist loaded: {} videos", store.count());

    match args.command {
        Command::List { favorites } => {
            let entries = if favorites {
                store.list_favorites()
            } else {
                store.list_all()
            };
            if entries.is_empty() {
                println!("The playlist is empty");
            }
            for entry in &entries {
                println!("{}", entry);
            }
        }

        Command::Show { id } => {
            let entry = store
                .find_by_id(id)
                .with_context(|| format!("No video with id {}", id))?;
            print_details(&entry);
        }

        Command::Add { title, link } => {
            let entry = store
                .add(&title, &link)
                .context("Could not add the video")?;
            println!("Video added with id {}", entry.id);
        }

        Command::Remove { id } => {
            ensure_found(store.remove(id), id)?;
            println!("Video removed");
        }

        Command::Like { id } => {
            ensure_found(store.increment_like(id), id)?;
            println!("Like added");
        }

        Command::Favorite { id } => {
            ensure_found(store.toggle_favorite(id), id)?;
            println!("Favorite status updated");
        }

        Command::Stats => {
            let summary = store.summary();
            println!("Videos:    {}", summary.total);
            println!("Favorites: {}", summary.favorites);
            println!("Likes:     {}", summary.total_likes);
            println!("Snapshot:  {}", store.gateway().location());
        }

        // Handled above
        Command::Reset => {}
    }

    Ok(())
}

fn ensure_found(found: bool, id: u64) -> Result<()> {
    if !found {
        anyhow::bail!("No video with id {}", id);
    }
    Ok(())
}

fn print_details(entry: &Entry) {
    println!("Id:       {}", entry.id);
    println!("Title:    {}", entry.title);
    println!("Link:     {}", entry.link);
    println!("Likes:    {}", entry.like_count);
    println!("Favorite: {}", if entry.is_favorite { "yes" } else { "no" });
    if let Some(embed) = entry.embed_url() {
        println!("Embed:    {}", embed);
    }
    if let Some(thumbnail) = entry.thumbnail_url() {
        println!("Preview:  {}", thumbnail);
    }
}
