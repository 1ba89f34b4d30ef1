use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use catalog::{
    Catalog, ChannelNotifier, ConnectionCounter, Notification, ProfileId, ProfilePresenter,
    Severity, JOB_TYPES,
};
use deck::{ReleaseOutcome, SwipeConfig, SwipeDecision};
use session::{
    App, Collaborators, Metric, MetricView, NetworkSnapshot, ThemeStore, DEFAULT_FEED_SEED,
    REACTIONS,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::info;

/// glassnet - professional network demo, driven from the terminal
#[derive(Parser)]
#[command(name = "glassnet")]
#[command(about = "Swipe through profiles, filter jobs and browse the feed", long_about = None)]
struct Cli {
    /// Directory with profiles.json / jobs.json / feed.json / nearby.json
    /// (built-in demo data when omitted)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Preferences file (default: ~/.glassnet/preferences.json)
    #[arg(long)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Press {
    Skip,
    Connect,
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Connections,
    Activity,
    Jobs,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Connections => Metric::Connections,
            MetricArg::Activity => Metric::Activity,
            MetricArg::Jobs => Metric::Jobs,
        }
    }
}

/// Parse `POST_ID:TEXT`
fn parse_post_text(raw: &str) -> Result<(u32, String), String> {
    let (id, text) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected POST_ID:TEXT, got '{raw}'"))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid post id '{id}'"))?;
    Ok((id, text.to_string()))
}

#[derive(Subcommand)]
enum Commands {
    /// Replay drag releases (or button presses) against the profile deck
    Swipe {
        /// Release offsets, negative skips and positive connects
        #[arg(long, allow_hyphen_values = true)]
        offset: Vec<f64>,

        /// Button presses, applied after the offsets
        #[arg(long, value_enum)]
        press: Vec<Press>,

        /// Start the deck over at the end
        #[arg(long)]
        reset: bool,
    },

    /// List jobs matching the given filters
    Jobs {
        #[arg(long)]
        role: Vec<String>,

        #[arg(long)]
        skill: Vec<String>,

        #[arg(long = "job-type")]
        job_type: Vec<String>,

        /// Show the available filter tokens
        #[arg(long)]
        facets: bool,

        /// Apply for these jobs before listing
        #[arg(long)]
        apply: Vec<u32>,
    },

    /// Apply for a job
    Apply {
        #[arg(long)]
        job_id: u32,
    },

    /// Show the feed
    Feed {
        /// Seed for initial like counts
        #[arg(long, default_value_t = DEFAULT_FEED_SEED)]
        seed: u64,

        /// Posts to like before printing
        #[arg(long)]
        like: Vec<u32>,

        /// React to a post, as POST_ID:EMOJI
        #[arg(long, value_parser = parse_post_text)]
        react: Vec<(u32, String)>,

        /// Comment on a post, as POST_ID:TEXT
        #[arg(long, value_parser = parse_post_text)]
        comment: Vec<(u32, String)>,
    },

    /// Show professionals nearby
    Nearby {
        /// Send connection requests
        #[arg(long)]
        connect: Vec<u32>,

        /// Change the current location first
        #[arg(long)]
        location: Option<String>,

        /// Widen the search radius
        #[arg(long)]
        expand: bool,
    },

    /// Show the profile insights dashboard
    Insights {
        #[arg(long, value_enum, default_value = "connections")]
        metric: MetricArg,
    },

    /// Show or toggle the theme preference
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

/// Prints the profile detail view.
struct ConsolePresenter {
    catalog: Arc<Catalog>,
}

impl ProfilePresenter for ConsolePresenter {
    fn show_profile(&self, id: ProfileId) {
        let Some(profile) = self.catalog.profile(id) else {
            return;
        };
        println!("{}", profile.full_name.bold().blue());
        println!("{}{} at {}", "• ".green(), profile.title, profile.company);
        println!("{}{}", "• ".green(), profile.location);
        println!("{}{} years exp.", "• ".green(), profile.experience);
        println!(
            "{}{} mutual connections",
            "• ".green(),
            profile.mutual_connections
        );
        println!("{}Skills: {}", "• ".cyan(), profile.skills.join(", "));
        println!("  {}", profile.bio);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Theme { toggle } => handle_theme(cli.prefs, toggle),
        command => run_app(cli.data_dir, command).await,
    }
}

/// Build the app and dispatch every command that needs it.
async fn run_app(data_dir: Option<PathBuf>, command: Commands) -> Result<()> {
    let catalog = Arc::new(match &data_dir {
        Some(dir) => Catalog::load_from_dir(dir)
            .with_context(|| format!("Failed to load catalog from {}", dir.display()))?,
        None => Catalog::seed(),
    });
    info!("Catalog ready ({} profiles)", catalog.profiles().len());

    let (notifier, rx) = ChannelNotifier::new();
    let printer = spawn_toast_printer(rx);

    let feed_seed = match &command {
        Commands::Feed { seed, .. } => *seed,
        _ => DEFAULT_FEED_SEED,
    };
    let mut app = App::new(
        catalog.clone(),
        SwipeConfig::default(),
        Collaborators {
            notifier: Arc::new(notifier),
            presenter: Arc::new(ConsolePresenter { catalog }),
            connections: ConnectionCounter::new(),
        },
        feed_seed,
    )?;

    // Dispatch to appropriate command handler
    match command {
        Commands::Swipe {
            offset,
            press,
            reset,
        } => handle_swipe(&app, offset, press, reset).await,
        Commands::Jobs {
            role,
            skill,
            job_type,
            facets,
            apply,
        } => handle_jobs(&mut app, role, skill, job_type, facets, apply),
        Commands::Apply { job_id } => {
            if !app.jobs.apply(job_id) {
                println!("No job with id {}", job_id);
            }
        }
        Commands::Feed {
            like,
            react,
            comment,
            ..
        } => handle_feed(&mut app, like, react, comment),
        Commands::Nearby {
            connect,
            location,
            expand,
        } => handle_nearby(&mut app, connect, location, expand),
        Commands::Insights { metric } => handle_insights(&mut app, metric.into()),
        Commands::Theme { .. } => {}
    }

    // Dropping the app closes the notification channel
    drop(app);
    printer.await.context("Toast printer panicked")?;
    Ok(())
}

fn spawn_toast_printer(mut rx: UnboundedReceiver<Notification>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(n) = rx.recv().await {
            let title = match n.severity {
                Severity::Default => n.title.green().bold(),
                Severity::Destructive => n.title.red().bold(),
            };
            println!("[{}] {}", title, n.description);
        }
    })
}

/// Handle the 'swipe' command
async fn handle_swipe(app: &App, offsets: Vec<f64>, presses: Vec<Press>, reset: bool) {
    print_snapshot(&app.network.snapshot());

    for offset in offsets {
        let outcome = app.network.release(offset);
        println!("release {:>7.1} -> {}", offset, describe(outcome));
        app.network.wait_idle().await;
    }

    for press in presses {
        match press {
            Press::Info => {
                if !app.network.show_detail() {
                    println!("No profile on top");
                }
            }
            Press::Skip | Press::Connect => {
                let decision = match press {
                    Press::Skip => SwipeDecision::Skip,
                    _ => SwipeDecision::Connect,
                };
                let outcome = app.network.press(decision);
                println!("press {:?} -> {}", decision, describe(outcome));
                app.network.wait_idle().await;
            }
        }
    }

    if reset {
        app.network.reset();
    }
    print_snapshot(&app.network.snapshot());
}

fn describe(outcome: ReleaseOutcome) -> String {
    match outcome {
        ReleaseOutcome::Ignored => "ignored".dimmed().to_string(),
        ReleaseOutcome::Returned => "returned to center".yellow().to_string(),
        ReleaseOutcome::Committed { decision, .. } => match decision {
            SwipeDecision::Skip => "skip".red().to_string(),
            SwipeDecision::Connect => "connect".green().to_string(),
            SwipeDecision::Cancel => "cancel".yellow().to_string(),
        },
    }
}

fn print_snapshot(snap: &NetworkSnapshot) {
    println!(
        "{} {}  {} {}  {} {}",
        "Connections:".bold(),
        snap.connections.to_string().cyan(),
        "Profile Views:".bold(),
        snap.profile_views.to_string().cyan(),
        "Remaining:".bold(),
        snap.remaining
    );
    if snap.cards.is_empty() {
        println!("{}", "You're all caught up!".bold().green());
    } else {
        let cards: Vec<String> = snap.cards.iter().map(|id| format!("#{id}")).collect();
        println!("Cards on top: {}", cards.join(" over "));
    }
}

/// Handle the 'jobs' command
fn handle_jobs(
    app: &mut App,
    roles: Vec<String>,
    skills: Vec<String>,
    job_types: Vec<String>,
    facets: bool,
    apply: Vec<u32>,
) {
    if facets {
        println!("{} {}", "Roles:".bold(), app.catalog().role_tokens().join(", "));
        println!("{} {}", "Skills:".bold(), app.catalog().skill_tokens().join(", "));
        println!("{} {}", "Job types:".bold(), JOB_TYPES.join(", "));
    }

    for role in &roles {
        app.jobs.toggle_role(role);
    }
    for skill in &skills {
        app.jobs.toggle_skill(skill);
    }
    for job_type in &job_types {
        app.jobs.toggle_job_type(job_type);
    }

    for job_id in apply {
        if !app.jobs.apply(job_id) && !app.jobs.has_applied(job_id) {
            println!("No job with id {}", job_id);
        }
    }

    let visible = app.jobs.visible();
    if visible.is_empty() {
        println!("{}", "No jobs match your filters".yellow());
        return;
    }
    println!("{}", format!("{} jobs:", visible.len()).bold().blue());
    for job in visible {
        let remote = if job.is_remote { " (remote)" } else { "" };
        let applied = if app.jobs.has_applied(job.id) {
            " ✓ Applied".green().to_string()
        } else {
            String::new()
        };
        println!(
            "{}. {} at {} - {}{} [{}] {}{}",
            job.id.to_string().green(),
            job.title,
            job.company,
            job.location,
            remote,
            job.job_type,
            job.salary,
            applied
        );
        println!(
            "   {} | {} applicants | posted {} days ago",
            job.skills.join(", "),
            job.applicants,
            job.posted_days_ago
        );
    }
}

/// Handle the 'feed' command
fn handle_feed(
    app: &mut App,
    likes: Vec<u32>,
    reactions: Vec<(u32, String)>,
    comments: Vec<(u32, String)>,
) {
    for post_id in likes {
        if app.feed.toggle_like(post_id).is_none() {
            println!("No post with id {}", post_id);
        }
    }
    for (post_id, emoji) in reactions {
        if app.feed.react(post_id, &emoji).is_none() {
            println!(
                "Cannot react {} to post {} (reactions: {})",
                emoji,
                post_id,
                REACTIONS.join(" ")
            );
        }
    }
    for (post_id, text) in comments {
        if !app.feed.add_comment(post_id, &text) {
            println!("Comment on post {} rejected", post_id);
        }
    }
    for entry in app.feed.entries() {
        let heart = if entry.liked { "♥".red() } else { "♡".normal() };
        println!(
            "{} {} ({}h ago)",
            entry.author.full_name.bold(),
            entry.author.title.dimmed(),
            entry.post.hours_ago
        );
        println!("  {}", entry.post.content);
        println!("  {} {}", heart, entry.likes);
        for comment in &entry.comments {
            println!("  {} {}", "💬".dimmed(), comment);
        }
    }
}

/// Handle the 'nearby' command
fn handle_nearby(app: &mut App, connect: Vec<u32>, location: Option<String>, expand: bool) {
    if let Some(location) = location {
        app.nearby.change_location(&location);
    }
    if expand {
        app.nearby.expand_search();
    }
    println!("{} {}", "Near".bold(), app.nearby.location());
    for professional in app.nearby.professionals() {
        println!(
            "{}. {} - {} ({})",
            professional.id.to_string().green(),
            professional.name,
            professional.title,
            professional.distance
        );
    }
    for id in connect {
        if !app.nearby.connect(id) {
            if app.nearby.is_pending(id) {
                println!("Request to {} already pending", id);
            } else {
                println!("No professional with id {}", id);
            }
        }
    }
    println!("{} {}", "Connections:".bold(), app.connections());
}

/// Handle the 'insights' command
fn handle_insights(app: &mut App, metric: Metric) {
    app.insights.select(metric);
    let headline = app.insights.headline();
    println!(
        "{} {}  {} {}  {} {}%  {} {}",
        "Connections:".bold(),
        headline.connections.to_string().cyan(),
        "Profile Views:".bold(),
        headline.profile_views.to_string().cyan(),
        "Profile Strength:".bold(),
        headline.profile_strength,
        "Job Applications:".bold(),
        headline.job_applications
    );

    match app.insights.view() {
        MetricView::Connections {
            growth,
            skills,
            recommended,
        } => {
            println!("{}", "Network Growth".bold().blue());
            for point in growth {
                println!("  {:<4} {}", point.month, point.connections);
            }
            println!("{}", "Top Skills".bold().blue());
            for share in skills {
                println!("  {:<12} {}", share.skill, share.value);
            }
            println!("{}", "Connection Recommendations".bold().blue());
            for profile in recommended {
                println!("  {} - {}", profile.full_name, profile.title.dimmed());
            }
        }
        MetricView::Activity { weekly, recent } => {
            println!("{}", "Weekly Activity".bold().blue());
            for day in weekly {
                println!(
                    "  {} views {:>3}  connections {}",
                    day.day, day.views, day.connections
                );
            }
            println!("{}", "Recent Activity".bold().blue());
            for event in recent {
                println!("  {} {}", event.description, event.when.dimmed());
            }
        }
        MetricView::Jobs {
            matches,
            statuses,
            latest_update,
            recommended,
        } => {
            println!("{}", "Job Matches".bold().blue());
            for tally in matches {
                println!("  {:<14} {}", tally.label, tally.count);
            }
            println!("{}", "Application Status".bold().blue());
            for tally in statuses {
                println!("  {:<14} {}", tally.label, tally.count);
            }
            println!("{} {}", "Latest Update:".bold(), latest_update);
            println!("{}", "Recommended Jobs".bold().blue());
            for job in recommended {
                println!("  {} at {}", job.title, job.company.dimmed());
            }
        }
    }
}

/// Handle the 'theme' command
fn handle_theme(prefs: Option<PathBuf>, toggle: bool) -> Result<()> {
    let path = match prefs {
        Some(path) => path,
        None => dirs::home_dir()
            .context("Cannot locate home directory; pass --prefs")?
            .join(".glassnet")
            .join("preferences.json"),
    };
    let mut store = ThemeStore::open(&path)?;
    if toggle {
        store.toggle()?;
    }
    println!("Theme: {}", store.theme().to_string().bold());
    Ok(())
}
