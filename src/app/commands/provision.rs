use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::plan::{self, PlanFormat};
use crate::domain::{AppError, InstallPlan, Platform, ProvisionConfig, Step};
use crate::ports::{CondaPort, InterpreterPort, PipPort};

/// Options for the provision command.
#[derive(Debug, Clone, Default)]
pub struct ProvisionOptions {
    /// Platform override; falls back to `TRAVIS_OS_NAME` when absent.
    pub platform: Option<String>,
    /// Print the step list without executing anything.
    pub dry_run: bool,
}

/// Outcome of a provision run.
#[derive(Debug, Clone)]
pub struct ProvisionReport {
    /// Resolved platform label.
    pub platform: String,
    /// Steps that were actually executed (empty for dry runs).
    pub steps_run: Vec<Step>,
}

/// Execute the provision command.
///
/// Derives the step sequence for the resolved platform and runs it in order.
/// The first failing step aborts the rest; nothing after it executes.
pub fn execute<C, P, I>(
    ctx: &AppContext<C, P, I>,
    config: &ProvisionConfig,
    options: &ProvisionOptions,
) -> Result<ProvisionReport, AppError>
where
    C: CondaPort,
    P: PipPort,
    I: InterpreterPort,
{
    let platform = Platform::resolve(options.platform.as_deref());
    let install_plan = InstallPlan::for_platform(&platform, config);

    if options.dry_run {
        print!("{}", plan::render(&platform, config, PlanFormat::Text)?);
        return Ok(ProvisionReport { platform: install_plan.platform, steps_run: Vec::new() });
    }

    let mut steps_run = Vec::new();
    for step in &install_plan.steps {
        run_step(ctx, config, step)?;
        steps_run.push(step.clone());
    }

    Ok(ProvisionReport { platform: install_plan.platform, steps_run })
}

fn run_step<C, P, I>(
    ctx: &AppContext<C, P, I>,
    config: &ProvisionConfig,
    step: &Step,
) -> Result<(), AppError>
where
    C: CondaPort,
    P: PipPort,
    I: InterpreterPort,
{
    let environment = config.environment.name.as_str();

    match step {
        Step::Activate { environment } => {
            println!("Activating environment '{}'", environment);
            ctx.conda().activate(environment)
        }
        Step::CondaInstall { channel, packages } => {
            println!("Installing {} (channel: {})", packages.join(", "), channel);
            ctx.conda().install(environment, channel, packages)
        }
        Step::PipInstall { manifest } => {
            println!("Installing requirements from {}", manifest);
            ctx.pip().install_manifest(environment, Path::new(manifest))
        }
        Step::VerifyImport { module } => {
            let version = ctx.interpreter().module_version(environment, module)?;
            println!("{} {}", module, version);
            Ok(())
        }
        Step::InterpreterVersion => {
            let version = ctx.interpreter().version(environment)?;
            println!("{}", version);
            Ok(())
        }
    }
}
