//! Default templates embedded in the binary.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::domain::AppError;
use crate::domain::plan::TemplateContext;
use crate::ports::TemplateCatalog;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Renders templates from `src/assets/templates`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateCatalog;

impl EmbeddedTemplateCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Raw template source, if embedded.
    pub fn source(&self, name: &str) -> Option<&'static str> {
        TEMPLATES_DIR.get_file(name).and_then(|file| file.contents_utf8())
    }
}

impl TemplateCatalog for EmbeddedTemplateCatalog {
    fn render(&self, name: &str, context: &TemplateContext) -> Result<String, AppError> {
        let source = self.source(name).ok_or_else(|| AppError::TemplateNotFound(name.to_string()))?;

        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.render_str(source, context).map_err(|err| AppError::TemplateRender {
            template: name.to_string(),
            reason: err.to_string(),
        })
    }
}
