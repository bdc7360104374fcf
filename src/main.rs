//! songdb CLI application entry point
//!
//! Command-line front end for the songdb catalog. Every query loads the song
//! store into a shared catalog, runs one operation through a [`Session`] and
//! prints the protocol listing on stdout. Summaries go to stderr and are
//! suppressed with `--quiet`.
//!
//! # Usage
//!
//! ```bash
//! # Store songs
//! songdb insert rock/a.mp3 -t artist=AC/DC -t title="Hells Bells" --time 312
//! songdb insert rock/b.mp3
//!
//! # Query
//! songdb search artist ac
//! songdb find -r rock artist AC/DC
//! songdb list album artist AC/DC
//! songdb count rock
//!
//! # Populate
//! songdb add rock
//! songdb playlistadd party rock
//! songdb playlistdelete party
//! ```
//!
//! # Configuration
//!
//! On first run a default configuration is written to the user's config
//! directory (`~/.config/songdb/config.toml` on Linux). `SONGDB_*` environment
//! variables override it and `RUST_LOG` overrides its `log_level`.

use chrono::Utc;
use colored::Colorize;
use songdb::{
    SongdbError,
    catalog::{SharedCatalog, Song},
    cli::{Cli, Commands, QueryArgs, parse_tag},
    config::SongdbConfig,
    db::Database,
    ops::Session,
    output,
    playlist::{self, PlayQueue, PlaylistInfo, PlaylistVector, StoredPlaylist},
};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type Result<T> = std::result::Result<T, SongdbError>;

/// Initialise logging on stderr so listings on stdout stay clean
fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Load the whole song store into a fresh query session
fn open_session(db: &Database) -> Result<Session> {
    let catalog = db.load_catalog()?;
    Ok(Session::new(SharedCatalog::new(catalog)))
}

/// Print a summary line on stderr unless quiet
fn summary(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}

fn handle_insert(db: &Database, url: &str, tags: &[String], time: Option<u32>, quiet: bool) -> Result<()> {
    let tag = parse_tag(tags, time).map_err(SongdbError::InvalidInput)?;
    let replaced = db.insert_song(&Song::new(url, tag))?;
    db.flush()?;

    let verb = if replaced { "Updated" } else { "Inserted" };
    summary(&format!("{} {url}", verb.green()), quiet);
    Ok(())
}

fn handle_delete(db: &Database, url: &str, quiet: bool) -> Result<()> {
    if !db.remove_song(url)? {
        return Err(SongdbError::InvalidInput(format!("Song \"{url}\" is not in the database")));
    }
    db.flush()?;

    summary(&format!("{} {url}", "Deleted".yellow()), quiet);
    Ok(())
}

fn handle_query(db: &Database, query: &QueryArgs, exact: bool, quiet: bool) -> Result<()> {
    let session = open_session(db)?;
    let mut out = io::stdout().lock();
    let root = query.root.as_deref();

    let matched = if exact {
        session.find(root, &query.tokens, &mut out)?
    } else {
        session.search(root, &query.tokens, &mut out)?
    };
    out.flush()?;

    summary(&output::count_line("matches", matched as u64, false), quiet);
    Ok(())
}

fn handle_list(db: &Database, tag: &str, tokens: &[String], quiet: bool) -> Result<()> {
    let session = open_session(db)?;
    let mut out = io::stdout().lock();

    let values = session.list_unique(tag, tokens, &mut out)?;
    out.flush()?;

    summary(&output::count_line("values", values as u64, false), quiet);
    Ok(())
}

fn handle_listing(db: &Database, root: Option<&str>, full_info: bool) -> Result<()> {
    let session = open_session(db)?;
    let mut out = io::stdout().lock();

    if full_info {
        session.print_info_all(root, &mut out)?;
    } else {
        session.print_all(root, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn handle_add(db: &Database, config: &SongdbConfig, root: Option<&str>, quiet: bool) -> Result<()> {
    let session = open_session(db)?;
    let mut queue = PlayQueue::load(&config.queue_file, config.max_queue_length)?;

    // A full queue keeps the songs appended before the failure
    let result = session.add_all(root, &mut queue);
    save_queue(&queue, &config.queue_file)?;
    let added = result?;

    summary(
        &format!("{} {added} song(s), queue length {}", "Added".green(), queue.len()),
        quiet,
    );
    Ok(())
}

fn handle_playlistadd(
    db: &Database,
    config: &SongdbConfig,
    name: &str,
    root: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let session = open_session(db)?;
    let mut stored = StoredPlaylist::open(&config.playlist_directory, name)?;

    // Nothing reaches the playlist file or the metadata unless the walk succeeds
    session.add_all(root, &mut stored)?;
    let added = stored.finish()?;

    let meta_path = config.playlist_meta_path();
    let mut playlists = load_playlists(&meta_path)?;
    playlists.update_or_insert(PlaylistInfo::new(name).with_mtime(Utc::now()));
    save_playlists(&meta_path, &playlists)?;

    summary(&format!("{} {added} song(s) to {}", "Added".green(), name.bold()), quiet);
    Ok(())
}

fn handle_playlistdelete(config: &SongdbConfig, name: &str, quiet: bool) -> Result<()> {
    let removed_file = playlist::stored::delete(&config.playlist_directory, name)?;

    let meta_path = config.playlist_meta_path();
    let mut playlists = load_playlists(&meta_path)?;
    let removed_entry = playlists.remove(name).is_some();
    if removed_entry {
        save_playlists(&meta_path, &playlists)?;
    }

    if !removed_file && !removed_entry {
        return Err(SongdbError::InvalidInput(format!("No playlist named \"{name}\"")));
    }
    if removed_file != removed_entry {
        tracing::warn!(
            playlist = name,
            removed_file,
            removed_entry,
            "playlist file and metadata were out of sync"
        );
    }

    summary(&format!("{} {}", "Deleted".yellow(), name.bold()), quiet);
    Ok(())
}

fn handle_playlists(config: &SongdbConfig) -> Result<()> {
    let playlists = load_playlists(&config.playlist_meta_path())?;
    let mut out = io::stdout().lock();

    for info in &playlists {
        output::write_playlist_info(&mut out, info)?;
    }
    out.flush()?;
    Ok(())
}

fn handle_queue(config: &SongdbConfig, clear: bool, quiet: bool) -> Result<()> {
    let mut queue = PlayQueue::load(&config.queue_file, config.max_queue_length)?;

    if clear {
        let removed = queue.len();
        queue.clear();
        save_queue(&queue, &config.queue_file)?;
        summary(&format!("{} {removed} song(s)", "Cleared".yellow()), quiet);
        return Ok(());
    }

    let mut out = io::stdout().lock();
    for (position, url) in queue.urls().iter().enumerate() {
        writeln!(out, "{position}:file: {url}")?;
    }
    out.flush()?;
    Ok(())
}

fn save_queue(queue: &PlayQueue, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    queue.save(path)?;
    Ok(())
}

/// Read playlist metadata; a missing file means no playlists
fn load_playlists(path: &Path) -> Result<PlaylistVector> {
    if !path.exists() {
        return Ok(PlaylistVector::new());
    }
    let reader = BufReader::new(File::open(path)?);
    Ok(playlist::meta::load(reader)?)
}

fn save_playlists(path: &Path, playlists: &PlaylistVector) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    playlist::meta::save(&mut writer, playlists)?;
    writer.flush()?;
    Ok(())
}

fn run(cli: Cli, config: &SongdbConfig) -> Result<()> {
    let quiet = cli.quiet || config.quiet;

    // Playlist listing and the queue never touch the song store
    match &cli.command {
        Commands::Playlists => return handle_playlists(config),
        Commands::Playlistdelete { name } => return handle_playlistdelete(config, name, quiet),
        Commands::Queue { clear } => return handle_queue(config, *clear, quiet),
        _ => {}
    }

    let db_path = cli.db.as_deref().unwrap_or(&config.database);
    let db = Database::open(db_path)?;
    tracing::debug!(path = %db_path.display(), songs = db.count(), "opened song store");

    match &cli.command {
        Commands::Insert { url, tags, time } => handle_insert(&db, url, tags, *time, quiet),
        Commands::Delete { url } => handle_delete(&db, url, quiet),
        Commands::Search { query } => handle_query(&db, query, false, quiet),
        Commands::Find { query } => handle_query(&db, query, true, quiet),
        Commands::Count { root } => {
            let songs = open_session(&db)?.count(root.as_deref())?;
            println!("{}", output::count_line("songs", songs, quiet));
            Ok(())
        }
        Commands::Playtime { root } => {
            let seconds = open_session(&db)?.sum_duration(root.as_deref())?;
            println!("{}", output::duration_line("playtime", seconds, quiet));
            Ok(())
        }
        Commands::List { tag, tokens } => handle_list(&db, tag, tokens, quiet),
        Commands::Listall { root } => handle_listing(&db, root.as_deref(), false),
        Commands::Listallinfo { root } => handle_listing(&db, root.as_deref(), true),
        Commands::Add { root } => handle_add(&db, config, root.as_deref(), quiet),
        Commands::Playlistadd { name, root } => handle_playlistadd(&db, config, name, root.as_deref(), quiet),
        Commands::Playlists | Commands::Playlistdelete { .. } | Commands::Queue { .. } => unreachable!(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config = match SongdbConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), SongdbError::from(e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_level);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
