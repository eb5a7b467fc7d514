use crate::adapters::paths::namespace_segments;
use crate::core::TemplateRenderer;
use crate::utils::error::{GenError, Result};
use handlebars::Handlebars;
use std::path::Path;

const TRAIT_TEMPLATE: &str = include_str!("templates/trait.hbs");
const TEMPLATE_EXTENSION: &str = "hbs";

/// Handlebars-backed renderer with the built-in `trait` template registered.
///
/// Strict mode is on, so a template that references a parameter the generator
/// does not provide fails instead of rendering an empty string.
pub struct HandlebarsRenderer {
    handlebars: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        // Register helpers
        handlebars.register_helper("php_str", Box::new(php_str_helper));
        handlebars.register_helper("php_ns", Box::new(php_ns_helper));

        let mut renderer = Self { handlebars };
        renderer.register_template("trait", TRAIT_TEMPLATE)?;
        Ok(renderer)
    }

    /// Built-ins plus every `<name>.hbs` found in `dir`; files override built-ins.
    pub fn with_template_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut renderer = Self::new()?;
        let dir = dir.as_ref();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let source = std::fs::read_to_string(&path)?;
            renderer.register_template(name, &source)?;
            tracing::debug!("Registered template '{}' from {}", name, path.display());
        }

        Ok(renderer)
    }

    pub fn register_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, source)
            .map_err(|e| GenError::render(name, e))
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, template_id: &str, params: &serde_json::Value) -> Result<String> {
        if !self.has_template(template_id) {
            return Err(GenError::render(template_id, "template is not registered"));
        }

        self.handlebars
            .render(template_id, params)
            .map_err(|e| GenError::render(template_id, e))
    }
}

/// Single-quoted PHP string literal.
pub fn php_string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn php_str_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let param = h.param(0).map(|v| v.value());
    let literal = match param {
        Some(serde_json::Value::String(s)) => php_string_literal(s),
        Some(other) => php_string_literal(&other.to_string()),
        None => php_string_literal(""),
    };
    out.write(&literal)?;
    Ok(())
}

fn php_ns_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(&namespace_segments(param).join("\\"))?;
    Ok(())
}
