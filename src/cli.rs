use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(
    about = "Print a directory tree and the files ending in a suffix",
    long_about = None
)]
pub struct Cli {
    /// Root directory to scan
    pub path: String,

    /// File name suffix to search for (exact, case-sensitive)
    #[arg(short, long, default_value = "cmake")]
    pub suffix: String,

    /// Levels of non-leaf subdirectories to include in the search
    #[arg(short = 'L', long, default_value_t = 10)]
    pub depth: usize,

    /// Levels of the tree to print (never more than 5)
    #[arg(short, long, default_value_t = dirtree::MAX_RENDER_DEPTH)]
    pub render_depth: usize,

    /// Skip printing the tree, only list matching files
    #[arg(long)]
    pub no_tree: bool,

    #[arg(short, long, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}
