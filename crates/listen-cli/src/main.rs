//! Listen Agent - skills installer for AI coding assistants
//!
//! Usage:
//!   listen-agent setup                # Create skills/, templates/ and listen-agent.toml
//!   listen-agent create <name>        # Scaffold a new skill
//!   listen-agent list                 # Show available skills
//!   listen-agent init --ai cursor     # Install skills for an assistant

mod interactive;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use console::{Term, style};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use listen_core::client::{AssistantSelection, detect_assistants, valid_identifiers};
use listen_core::commands::{
    CreateCommand, InstallCommand, InstallOptions, InstallOutcome, ListCommand, ListOutcome,
    SetupCommand, SkillTemplate,
};
use listen_core::config::CONFIG_FILE;
use listen_core::context::AppContext;
use listen_core::install::InstallReport;

use crate::interactive::AssistantPrompt;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "listen-agent", version)]
#[command(about = "Manage and install agent skills for AI coding assistants", long_about = None)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up the skills framework in the project
    Setup,

    /// Install the project's skills into AI assistant folders
    Init(InitArgs),

    /// List available skills
    List {
        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        format: OutputFormat,
    },

    /// Create a new skill
    Create {
        /// Skill name, used as its directory name
        name: String,

        /// Skill template (basic, advanced); defaults to the configured template
        #[arg(short, long)]
        template: Option<SkillTemplate>,
    },
}

#[derive(Args)]
struct InitArgs {
    /// AI assistant to install for, or `all`
    ///
    /// Prompts when omitted and a terminal is attached.
    #[arg(short, long, value_name = "ID")]
    ai: Option<AssistantSelection>,

    /// Overwrite skills that are already installed
    #[arg(short, long)]
    force: bool,

    /// Only install these skills (repeatable)
    #[arg(short, long = "skill", value_name = "NAME")]
    skills: Vec<String>,

    /// Never prompt; use the configured or detected assistant
    #[arg(short = 'y', long)]
    yes: bool,

    /// Output format
    #[arg(short = 'o', long, default_value = "table")]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listen_core=warn,listen_agent=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let project_root = match cli.project {
        Some(path) => path,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };
    let ctx = AppContext::load(project_root)
        .await
        .context("Failed to load listen-agent.toml")?;
    tracing::debug!(
        project = %ctx.project_root().display(),
        skills_dir = %ctx.skills_dir().display(),
        "loaded project context"
    );

    match cli.command {
        Commands::Setup => run_setup(ctx).await,
        Commands::Init(args) => run_init(ctx, args).await,
        Commands::List { format } => run_list(ctx, format).await,
        Commands::Create { name, template } => run_create(ctx, &name, template).await,
    }
}

async fn run_setup(ctx: AppContext) -> Result<()> {
    output::title("Listen Agent Skills Framework Setup");

    let report = SetupCommand::new(ctx).execute().await?;

    if !report.created.is_empty() {
        output::info("Created structure:");
        for path in &report.created {
            output::added(&display_entry(path));
        }
    }
    for path in &report.existing {
        output::info(&format!("{} already exists, left unchanged", path.display()));
    }

    println!();
    output::success("Listen Agent Skills Framework setup complete!");
    output::next_steps(&[
        "Create your first skill: listen-agent create my-skill",
        "List available skills: listen-agent list",
        "Install skills to AI assistants: listen-agent init",
    ]);
    Ok(())
}

async fn run_init(ctx: AppContext, args: InitArgs) -> Result<()> {
    let json = args.format == OutputFormat::Json;
    if !json {
        output::title("Listen Agent Skills Installer");
    }

    let outcome = match resolve_selection(&ctx, &args).await? {
        Some(selection) => {
            if !json {
                output::info(&format!(
                    "Installing skills for: {}",
                    style(selection.label()).cyan()
                ));
            }
            let options = InstallOptions::new(selection)
                .with_force(args.force)
                .with_skills(args.skills);
            InstallCommand::new(ctx).execute(&options).await?
        }
        None => InstallOutcome::Cancelled,
    };

    if json {
        return output::print_json(&outcome);
    }

    match &outcome {
        InstallOutcome::MissingSkillsDir { path } => {
            output::error(&format!("No skills directory found at {}", path.display()));
            output::info("Run `listen-agent setup` to create one.");
        }
        InstallOutcome::Cancelled => output::warn("Installation cancelled"),
        InstallOutcome::NoSkills => {
            output::warn("No skills found to install");
            output::info("Create skills first using: listen-agent create <skill-name>");
        }
        InstallOutcome::Completed {
            report,
            unknown_skills,
        } => {
            for name in unknown_skills {
                output::warn(&format!("Skill '{}' not found, skipped", name));
            }
            print_install_report(report);
        }
    }
    Ok(())
}

/// Explicit `--ai`, then the prompt, then config and detection.
async fn resolve_selection(
    ctx: &AppContext,
    args: &InitArgs,
) -> Result<Option<AssistantSelection>> {
    if let Some(selection) = args.ai {
        return Ok(Some(selection));
    }

    let detection = detect_assistants(ctx.project_root()).await;
    let fallback = ctx.config().default_assistant;

    if !args.yes && Term::stdout().is_term() {
        return AssistantPrompt::new(detection, fallback).collect();
    }

    fallback.or(detection.suggested).map(Some).ok_or_else(|| {
        anyhow::anyhow!(
            "No AI assistant selected. Pass --ai <ID> (valid: {}) or set default_assistant in {}",
            valid_identifiers(),
            CONFIG_FILE
        )
    })
}

fn print_install_report(report: &InstallReport) {
    if !report.installed.is_empty() {
        println!();
        output::info("Installed skills:");
        for result in &report.installed {
            output::added(&format!(
                "{} → {}",
                result.name,
                result.target_path.display()
            ));
            for warning in &result.warnings {
                println!("    {} {}", style("⚠").yellow(), warning);
            }
        }
    }

    println!();
    if report.is_empty() {
        output::info("Nothing to install; every skill is already up to date (use --force to overwrite)");
    } else {
        output::success(&format!(
            "{} installed successfully!",
            output::plural(report.installed.len(), "skill")
        ));
    }
    if report.skipped > 0 {
        output::info(&format!(
            "{} skipped (already installed)",
            output::plural(report.skipped, "destination")
        ));
    }
    if report.unsupported > 0 {
        output::info(&format!(
            "{} skipped (skill does not target the assistant)",
            output::plural(report.unsupported, "destination")
        ));
    }
    let warnings = report.warning_count();
    if warnings > 0 {
        output::warn(&format!(
            "{} while copying resources",
            output::plural(warnings, "warning")
        ));
    }

    if !report.is_empty() {
        output::next_steps(&[
            "Restart your AI coding assistant",
            "Skills are now available in your AI assistant",
        ]);
    }
}

async fn run_list(ctx: AppContext, format: OutputFormat) -> Result<()> {
    let outcome = ListCommand::new(ctx).execute().await?;

    if format == OutputFormat::Json {
        return output::print_json(&outcome);
    }

    output::title("Available Agent Skills");
    match outcome {
        ListOutcome::MissingSkillsDir { path } => {
            output::warn(&format!(
                "No skills directory found at {}. Run `listen-agent setup` first.",
                path.display()
            ));
        }
        ListOutcome::Skills { skills } if skills.is_empty() => {
            output::info("No skills found. Create your first skill with `listen-agent create <name>`");
        }
        ListOutcome::Skills { skills } => {
            for skill in &skills {
                println!("{}", style(format!("📦 {}", skill.name)).bold().cyan());
                println!("   {} {}", style("Version:").dim(), skill.version);
                if !skill.description.is_empty() {
                    println!("   {} {}", style("Description:").dim(), skill.description);
                }
                if !skill.author.is_empty() {
                    println!("   {} {}", style("Author:").dim(), skill.author);
                }
                if !skill.tags.is_empty() {
                    println!("   {} {}", style("Tags:").dim(), skill.tags.join(", "));
                }
                println!("   {} {}", style("AI Types:").dim(), skill.targets);
                println!();
            }
            output::success(&format!("Found {}", output::plural(skills.len(), "skill")));
        }
    }
    Ok(())
}

async fn run_create(ctx: AppContext, name: &str, template: Option<SkillTemplate>) -> Result<()> {
    output::title(&format!("Creating Agent Skill: {name}"));

    let report = CreateCommand::new(ctx).execute(name, template).await?;

    output::success(&format!("Skill '{}' created successfully!", report.name));
    println!();
    println!("{}", style("Created files:").bold());
    for path in &report.files {
        output::added(&path.display().to_string());
    }
    if report.used_project_template {
        output::info(&format!("SKILL.md body taken from the project's {} template", report.template));
    }

    let edit = format!(
        "Edit {} to define your skill",
        report.skill_dir.join("SKILL.md").display()
    );
    output::next_steps(&[edit.as_str(), "Install it with: listen-agent init"]);
    Ok(())
}

/// Setup entries other than the config file are directories.
fn display_entry(path: &std::path::Path) -> String {
    if path.as_os_str() == CONFIG_FILE {
        path.display().to_string()
    } else {
        format!("{}/", path.display())
    }
}
