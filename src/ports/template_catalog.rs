use crate::domain::AppError;
use crate::domain::plan::TemplateContext;

/// Port for the default templates used to bootstrap missing or broken files.
pub trait TemplateCatalog {
    /// Render the named template with this run's derived values.
    fn render(&self, name: &str, context: &TemplateContext) -> Result<String, AppError>;
}
