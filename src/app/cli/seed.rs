//! Seed command implementation.

use std::path::PathBuf;

use crate::adapters::ConfirmationPolicy;
use crate::app::api::{self, SeedOptions};
use crate::domain::{AppError, DeploymentTarget, FileReport, FileStatus, RunSummary, TargetId};

pub struct SeedArgs {
    pub root: PathBuf,
    pub target: Option<DeploymentTarget>,
    pub config: Option<PathBuf>,
    pub yes: bool,
    pub no_input: bool,
    pub json: bool,
}

pub fn run_seed(args: SeedArgs) -> Result<i32, AppError> {
    let confirmation = if args.yes {
        ConfirmationPolicy::AssumeYes
    } else if args.no_input {
        ConfirmationPolicy::AssumeNo
    } else {
        ConfirmationPolicy::Interactive
    };
    let options = SeedOptions { target: args.target };

    let summary = api::seed_at(args.root, args.config.as_deref(), &options, confirmation)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| AppError::Internal(format!("Failed to serialize summary: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", render_summary(&summary));
    }

    Ok(summary.exit_status().code())
}

fn render_summary(summary: &RunSummary) -> String {
    let mut out = format!("Seeding {} deployment files\n", summary.target);
    for report in &summary.files {
        out.push_str(&render_report(report));
    }

    if summary.files.iter().any(|f| f.target == TargetId::DotEnv && f.status.wrote_file()) {
        out.push_str(
            "⚠️ .env now holds a new POSTGRES_PASSWORD. An existing PostgreSQL volume keeps its old password; recreate it or change the password in the database.\n",
        );
    }
    out.push_str(&format!(
        "ℹ️ Database password fingerprint: {}\n",
        summary.database_password_fingerprint
    ));
    out
}

fn render_report(report: &FileReport) -> String {
    let mut out = match &report.status {
        FileStatus::CreatedFromTemplate => {
            format!("✅ Created {} from default template\n", report.path)
        }
        FileStatus::Created => format!("✅ Created {}\n", report.path),
        FileStatus::Updated => format!("✅ Updated {}\n", report.path),
        FileStatus::Unchanged => format!("ℹ️ {} already up to date\n", report.path),
        FileStatus::Skipped(reason) => format!("⚠️ Skipped {}: {}\n", report.path, reason),
        FileStatus::Failed(message) => format!("❌ Failed {}: {}\n", report.path, message),
    };
    for key in &report.changed {
        out.push_str(&format!("  • {}\n", key));
    }
    for warning in &report.warnings {
        out.push_str(&format!("  ⚠️ {}\n", warning));
    }
    out
}
