use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "scenedeck")]
#[command(author, version, about)]
#[command(long_about = "An animated full-screen scene presentation.\n\n\
    Every slide is a procedural animation; navigate with the arrow keys,\n\
    space, enter, backspace, home/end or a horizontal swipe.\n\n\
    Examples:\n  \
    scenedeck                     Launch presentation (fullscreen)\n  \
    scenedeck --windowed          Launch in a window\n  \
    scenedeck --link '#slide=4'   Open a deep link\n  \
    scenedeck list                List the slides")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Start from a location token such as 'slide=4' or '#slide=4'
    #[arg(long, global = false, conflicts_with = "slide")]
    pub link: Option<String>,

    /// Seed scene randomness for reproducible visuals
    #[arg(long, global = false)]
    pub seed: Option<u64>,

    /// Do not read or write the remembered slide
    #[arg(long, global = false)]
    pub no_resume: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// List the slides in presentation order
    List,

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, transition.fade_in_frames)
        key: String,

        /// Value to set
        value: String,
    },

    /// Print the configuration file path
    Path,
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// How the first slide is chosen at launch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
    pub windowed: bool,
    pub slide: Option<usize>,
    pub link: Option<String>,
    pub seed: Option<u64>,
    pub resume: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::List) => crate::commands::list::run(),
            Some(Commands::Version) => {
                println!("scenedeck {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => crate::app::run(LaunchOptions {
                windowed: self.windowed,
                slide: self.slide,
                link: self.link,
                seed: self.seed,
                resume: !self.no_resume,
            }),
        }
    }
}
