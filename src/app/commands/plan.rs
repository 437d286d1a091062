use crate::domain::{AppError, InstallPlan, Platform, ProvisionConfig};

/// Output format for plan rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanFormat {
    #[default]
    Text,
    Json,
}

/// Render the step sequence provision would execute for `platform`.
///
/// Never invokes anything; an unrecognized platform just yields a shorter
/// plan, not an error.
pub fn render(
    platform: &Platform,
    config: &ProvisionConfig,
    format: PlanFormat,
) -> Result<String, AppError> {
    let plan = InstallPlan::for_platform(platform, config);

    match format {
        PlanFormat::Text => {
            let mut out = format!("Platform: {}\n", plan.platform);
            for step in &plan.steps {
                out.push_str(&format!("  {}\n", step.describe()));
            }
            Ok(out)
        }
        PlanFormat::Json => serde_json::to_string_pretty(&plan)
            .map_err(|e| AppError::config_error(format!("Failed to serialize plan: {}", e))),
    }
}
