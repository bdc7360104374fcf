//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for songdb using the `clap` crate.
//! Catalog queries take the protocol's flat `key value` token lists, so a
//! search reads `songdb search artist "ac/dc" album highway`.
//!
//! # Commands
//!
//! - **insert** / **delete**: maintain the song store
//! - **search** / **find**: substring and exact locate queries
//! - **count** / **playtime**: aggregate a subtree
//! - **list**: distinct values of one tag type
//! - **listall** / **listallinfo**: dump a subtree
//! - **add** / **playlistadd**: populate the queue or a stored playlist
//! - **playlistdelete**: remove a stored playlist
//! - **playlists** / **queue**: show stored playlists and the queue

use crate::catalog::{Tag, TagType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "songdb")]
#[command(about = "A music catalog with tag-based queries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Song store to use instead of the configured one
    #[arg(long = "db", value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Store a song, replacing any record with the same URL
    Insert {
        /// Song URL relative to the music root
        url: String,

        /// Tag item as TYPE=VALUE (can specify multiple: -t artist=X -t album=Y)
        #[arg(short = 't', long = "tag", value_name = "TYPE=VALUE")]
        tags: Vec<String>,

        /// Duration in seconds
        #[arg(long = "time", value_name = "SECONDS")]
        time: Option<u32>,
    },

    /// Remove a song from the store
    #[command(visible_alias = "rm")]
    Delete {
        url: String,
    },

    /// Case-insensitive substring search
    #[command(visible_alias = "s")]
    Search {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Exact-match search
    #[command(visible_alias = "f")]
    Find {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Count songs under a directory
    Count {
        root: Option<String>,
    },

    /// Total known duration of songs under a directory
    Playtime {
        root: Option<String>,
    },

    /// List distinct values of a tag type
    #[command(visible_alias = "l")]
    List {
        /// Tag type to enumerate (`file` lists URLs)
        #[arg(value_name = "TYPE")]
        tag: String,

        /// Optional exact-match filter as key/value pairs
        #[arg(value_name = "TOKENS")]
        tokens: Vec<String>,
    },

    /// Print every directory and song URL under a directory
    Listall {
        root: Option<String>,
    },

    /// Print every directory and full song record under a directory
    Listallinfo {
        root: Option<String>,
    },

    /// Append every song under a directory to the play queue
    Add {
        root: Option<String>,
    },

    /// Append every song under a directory to a stored playlist
    Playlistadd {
        name: String,
        root: Option<String>,
    },

    /// Delete a stored playlist and its metadata entry
    Playlistdelete {
        name: String,
    },

    /// Show stored playlists
    Playlists,

    /// Show the play queue
    Queue {
        /// Empty the queue instead of printing it
        #[arg(long)]
        clear: bool,
    },
}

/// Arguments shared by `search` and `find`
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    /// Directory to search under (default: whole catalog)
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root: Option<String>,

    /// Criteria as key/value pairs
    #[arg(value_name = "TOKENS", required = true, num_args = 1..)]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Build a tag from `TYPE=VALUE` arguments and an optional duration
///
/// Returns `None` when neither items nor a duration are given, so untagged
/// songs stay untagged.
///
/// # Errors
///
/// Returns the offending argument when it has no `=` or names an unknown
/// tag type.
pub fn parse_tag(items: &[String], time: Option<u32>) -> Result<Option<Tag>, String> {
    if items.is_empty() && time.is_none() {
        return Ok(None);
    }

    let mut tag = Tag::new();
    for item in items {
        let (kind, value) = item
            .split_once('=')
            .ok_or_else(|| format!("expected TYPE=VALUE, got \"{item}\""))?;
        let kind = TagType::from_name(kind.trim())
            .ok_or_else(|| format!("unsupported tag type \"{}\"", kind.trim()))?;
        tag = tag.with(kind, value);
    }
    tag.duration = time;
    Ok(Some(tag))
}
