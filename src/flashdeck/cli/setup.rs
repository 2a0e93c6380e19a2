use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashdeck", bin_name = "flashdeck", version)]
#[command(about = "Flashcard decks and study sessions in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the deck file (default: $FLASHDECK_DATA_DIR, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List decks, optionally filtered by name
    #[command(alias = "ls")]
    List {
        /// Case-insensitive part of a deck name
        filter: Option<String>,
    },

    /// Create a new deck
    #[command(alias = "n")]
    New {
        /// Name of the deck
        name: String,

        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Show a deck with its cards
    #[command(alias = "v")]
    Show {
        /// Deck position, id prefix or name
        deck: String,
    },

    /// Rename a deck or change its description
    #[command(alias = "e")]
    Edit {
        /// Deck position, id prefix or name
        deck: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a deck and all of its cards
    #[command(alias = "rm")]
    Delete {
        /// Deck position, id prefix or name
        deck: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a card to a deck
    #[command(alias = "a")]
    Add {
        /// Deck position, id prefix or name
        deck: String,

        /// Question side
        front: String,

        /// Answer side
        back: String,
    },

    /// List the cards of a deck
    Cards {
        /// Deck position, id prefix or name
        deck: String,
    },

    /// Change the front or back of a card
    EditCard {
        /// Deck position, id prefix or name
        deck: String,

        /// Card position or id prefix
        card: String,

        /// New question side
        #[arg(long)]
        front: Option<String>,

        /// New answer side
        #[arg(long)]
        back: Option<String>,
    },

    /// Delete a card
    #[command(alias = "rm-card")]
    DeleteCard {
        /// Deck position, id prefix or name
        deck: String,

        /// Card position or id prefix
        card: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Attach a media file reference (image, audio, ...) to a card
    Attach {
        /// Deck position, id prefix or name
        deck: String,

        /// Card position or id prefix
        card: String,

        /// Media type, e.g. image or audio
        media_type: String,

        /// Path to the media file
        path: String,
    },

    /// Show answer statistics for a deck
    Stats {
        /// Deck position, id prefix or name
        deck: String,
    },

    /// Study a deck: cards come in random order
    #[command(alias = "s")]
    Study {
        /// Deck position, id prefix or name
        deck: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (decks-file, study-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
