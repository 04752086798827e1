use crate::domain::{
    entities::{OutputPlan, Template, TemplateRegistry},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        template.validate()
    }

    pub fn validate_registry(registry: &TemplateRegistry) -> Result<(), DomainError> {
        registry.validate()
    }

    pub fn validate_output_plan(plan: &OutputPlan) -> Result<(), DomainError> {
        plan.validate()
    }

    /// A project name must contain something other than whitespace.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid_input(
                "project name",
                "name cannot be empty",
            ));
        }
        Ok(())
    }
}
