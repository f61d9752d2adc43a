use bootstrap_manifest::{ConfigFileConfig, TemplatePolicy};
use domain::{
    ArtifactState, BootstrapContext, BootstrapError, CommandRunner, StepKind, StepOutcome,
};

use crate::step::Step;

/// Copies the template to the config file once; an existing file is never touched.
pub struct ConfigMaterialization<'a> {
    pub config: &'a ConfigFileConfig,
}

impl Step for ConfigMaterialization<'_> {
    fn kind(&self) -> StepKind {
        StepKind::ConfigMaterialization
    }

    fn run(
        &self,
        ctx: &mut BootstrapContext,
        _runner: &dyn CommandRunner,
    ) -> Result<StepOutcome, BootstrapError> {
        let target = ctx.path(&self.config.target);
        let template = ctx.path(&self.config.template);
        let target_label = self.config.target.display();
        let template_label = self.config.template.display();

        if ArtifactState::probe(&target).is_present() {
            return Ok(StepOutcome::Skipped(format!("Keeping existing {}", target_label)));
        }

        if ArtifactState::probe(&template).is_present() {
            std::fs::copy(&template, &target).map_err(|e| BootstrapError::io(&target, e))?;
            tracing::info!(from = %template.display(), to = %target.display(), "materialised config");
            return Ok(StepOutcome::Completed(format!(
                "Created {} from {}",
                target_label, template_label
            )));
        }

        match self.config.missing_template {
            TemplatePolicy::Warn => {
                tracing::warn!(template = %template.display(), "config template missing");
                Ok(StepOutcome::Warned(format!(
                    "{} not found; create {} manually",
                    template_label, target_label
                )))
            }
            TemplatePolicy::Fatal => Err(BootstrapError::missing("configuration template", template)),
        }
    }
}
