use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for dev builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "edughana", version = get_version())]
#[command(about = "Browse the EduGhana learning catalog from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Fetch from the remote portal API instead of the local catalog
    #[arg(short, long, global = true)]
    pub remote: bool,

    /// Directory holding a catalog.json snapshot
    #[arg(long, global = true, value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    /// Bearer token for authenticated remote requests
    /// (falls back to the EDUGHANA_TOKEN environment variable)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List educational levels
    #[command(alias = "lv")]
    Levels,

    /// List subjects
    #[command(alias = "sub")]
    Subjects,

    /// Browse curriculum resources
    #[command(alias = "res")]
    Resources {
        /// Search term over titles and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by subject (id or name)
        #[arg(long)]
        subject: Option<String>,

        /// Filter by educational level (id, name or slug)
        #[arg(long)]
        level: Option<String>,

        /// Filter by kind (lesson-note, past-question, textbook, curriculum)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Browse lesson notes
    #[command(alias = "ln")]
    Notes {
        /// Search term over titles and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by subject (id or name)
        #[arg(long)]
        subject: Option<String>,

        /// Filter by educational level (id, name or slug)
        #[arg(long)]
        level: Option<String>,
    },

    /// Browse assessments, mock exams and quizzes
    #[command(alias = "am")]
    Assessments {
        /// Search term over titles and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by subject (id or name)
        #[arg(long)]
        subject: Option<String>,

        /// Filter by educational level (id, name or slug)
        #[arg(long)]
        level: Option<String>,

        /// Filter by kind (mock-exam, practice-test, quiz, ...)
        #[arg(short, long)]
        kind: Option<String>,

        /// Filter by difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Browse licensure and aptitude tests
    Tests {
        /// Restrict to one test type (licensure, aptitude)
        #[arg(long = "type", value_name = "TYPE")]
        test_type: Option<String>,

        /// Search term over titles and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by subject (id or name)
        #[arg(long)]
        subject: Option<String>,

        /// Filter by educational level (id, name or slug)
        #[arg(long)]
        level: Option<String>,
    },

    /// Education news and alerts
    News {
        /// Search term over titles and article bodies
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by category (e.g. "Examination News")
        #[arg(long)]
        category: Option<String>,

        /// Filter by source (e.g. "Ghana Education Service (GES)")
        #[arg(long)]
        source: Option<String>,

        /// Featured stories only
        #[arg(long)]
        featured: bool,
    },

    /// Log in to the portal and print a session token
    Login {
        /// Account email
        email: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Get or set configuration (api-base-url, catalog-dir)
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
