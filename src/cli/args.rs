use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "ritmo")]
#[command(about = "A habit tracker for the terminal")]
#[command(long_about = "ritmo - a habit tracker for the terminal

Track daily and weekly habits, build streaks, and see where your
consistency actually goes. Habits live in four categories (health,
fitness, productivity, personal); completions are logged per calendar
day and every statistic is derived from that log.

QUICK START:
  ritmo add \"Morning run #fitness daily x1\"    Add a habit
  ritmo done run                                Mark it done today
  ritmo today                                   See today's progress
  ritmo stats                                   Full dashboard

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  ritmo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// When omitted, the config file's general.default_output applies.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quick add a habit with natural language
    ///
    /// Parses natural language input to create a habit with a category,
    /// goal frequency, and target in one line.
    ///
    /// # Examples
    ///
    ///   ritmo add "Morning run #fitness daily x1"
    ///   ritmo add "Gym #fitness weekly x3 // leg day counts double"
    ///   ritmo add "Read 20 pages" --category personal
    ///
    /// # Supported Patterns
    ///
    ///   Category:   #health #fitness #productivity #personal
    ///   Frequency:  daily, weekly, every day, every week
    ///   Target:     x1, x3 (completions per period)
    ///   Notes:      // description at the end
    ///
    /// Without a category the habit is filed under 'personal'.
    #[command(alias = "a")]
    Add(AddArgs),

    /// List all habits
    ///
    /// Shows every habit with its category, current streak, and goal.
    /// A leading [x] marks habits already completed today.
    ///
    /// # Examples
    ///
    ///   ritmo list                    List everything
    ///   ritmo ls --category fitness   Only fitness habits
    ///   ritmo list -o json            Output as JSON for scripting
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show today's habits and progress
    ///
    /// Like 'list', but leads with a one-line summary of how many habits
    /// are done today and the current week's completion rate.
    ///
    /// # Examples
    ///
    ///   ritmo today        Today's checklist
    ///   ritmo t            Short alias
    #[command(alias = "t")]
    Today,

    /// Show one habit in detail
    ///
    /// Accepts a habit id, an exact name, or a unique name fragment.
    ///
    /// # Examples
    ///
    ///   ritmo show run
    ///   ritmo show morning-run-18d2a
    Show(HabitArg),

    /// Mark a habit completed
    ///
    /// Logs a completion for today (or for --date) and recomputes the
    /// habit's streak from the updated log.
    ///
    /// # Examples
    ///
    ///   ritmo done run                    Mark for today
    ///   ritmo done run --date yesterday   Backfill a missed day
    ///   ritmo d gym --date "2 days ago"
    #[command(alias = "d")]
    Done(MarkArgs),

    /// Un-mark a habit completion
    ///
    /// Removes a logged completion (today's by default) and recomputes
    /// the streak - un-marking an earlier day can shorten or zero it.
    ///
    /// # Examples
    ///
    ///   ritmo undone run
    ///   ritmo undone run --date monday
    Undone(MarkArgs),

    /// Edit a habit's fields
    ///
    /// Only the flags you pass change; everything else stays as it is.
    ///
    /// # Examples
    ///
    ///   ritmo edit run --name "Evening run"
    ///   ritmo edit gym --frequency weekly --target 4
    Edit(EditArgs),

    /// Delete a habit and its completion log
    ///
    /// # Examples
    ///
    ///   ritmo remove run
    ///   ritmo rm gym
    #[command(alias = "rm")]
    Remove(HabitArg),

    /// Statistics and analytics
    ///
    /// Run without a subcommand for the full dashboard.
    ///
    /// # Examples
    ///
    ///   ritmo stats              Full dashboard
    ///   ritmo stats insights     Observations about your data
    ///   ritmo stats heatmap      Completion heatmap
    Stats(StatsArgs),

    /// Show achievements and earned points
    ///
    /// Milestone badges unlocked by streaks, total completions, perfect
    /// days, and category mastery. Locked achievements show real progress
    /// toward their requirement.
    #[command(alias = "ach")]
    Achievements,

    /// Show this week's and month's challenges
    ///
    /// Challenge windows follow the calendar; progress is computed from
    /// your completion log.
    Challenges,

    /// Show the quote of the day
    Quote,

    /// Interactively pick habits to toggle
    ///
    /// Opens a fuzzy finder over your habits; selected habits get
    /// today's completion toggled.
    ///
    /// # Examples
    ///
    ///   ritmo pick            Toggle one habit
    ///   ritmo pick --multi    Toggle several at once (Tab to select)
    Pick(PickArgs),

    /// Open the interactive habit board
    ///
    /// A full-screen terminal UI: j/k to move, space to toggle today's
    /// completion, q to quit.
    #[command(alias = "ui")]
    Tui,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   ritmo completions zsh > ~/.zsh/completions/_ritmo
    ///   source <(ritmo completions bash)
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

/// Arguments for quick add.
#[derive(Args)]
pub struct AddArgs {
    /// Natural language habit description
    pub text: String,

    /// Category (overrides a #tag in the text)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Description (overrides // notes in the text)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Goal frequency: daily or weekly
    #[arg(short, long)]
    pub frequency: Option<String>,

    /// Goal target per period (must be at least 1)
    #[arg(short, long)]
    pub target: Option<u32>,

    /// Parse and show the habit without saving it
    #[arg(long)]
    pub parse_only: bool,
}

/// Arguments for list.
#[derive(Args)]
pub struct ListArgs {
    /// Only show habits in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// A habit selector: id, exact name, or unique name fragment.
#[derive(Args)]
pub struct HabitArg {
    /// Habit id, name, or name fragment
    pub habit: String,
}

/// Arguments for done/undone.
#[derive(Args)]
pub struct MarkArgs {
    /// Habit id, name, or name fragment
    pub habit: String,

    /// Day to mark: today, yesterday, '3 days ago', a weekday, or
    /// YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for edit.
#[derive(Args)]
pub struct EditArgs {
    /// Habit id, name, or name fragment
    pub habit: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New goal frequency: daily or weekly
    #[arg(long)]
    pub frequency: Option<String>,

    /// New goal target per period (must be at least 1)
    #[arg(long)]
    pub target: Option<u32>,
}

/// Arguments for stats.
#[derive(Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: Option<StatsCommands>,
}

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Full statistics dashboard (default)
    Dashboard,
    /// Compact summary: totals, streaks, weekly/monthly completion
    Summary,
    /// Observations about your habit data
    Insights,
    /// Daily and weekly completion trends
    Trends,
    /// Per-category breakdown
    Categories,
    /// Completion heatmap
    Heatmap {
        /// Number of weeks to show (defaults to config stats.heatmap_weeks)
        #[arg(long)]
        weeks: Option<usize>,
    },
}

/// Arguments for pick.
#[derive(Args)]
pub struct PickArgs {
    /// Allow selecting multiple habits (Tab to toggle)
    #[arg(short, long)]
    pub multi: bool,

    /// Initial filter query
    pub query: Option<String>,
}
