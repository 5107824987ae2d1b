#![deny(missing_docs)]

//! # Template Renderer
//!
//! Renders endpoint descriptors with Tera. The per-endpoint template sees every
//! descriptor field under its camelCase name (`method`, `pathType`,
//! `paramsExpected`, ...); the module template sees `content`, the rendered
//! fragments joined by newlines.

use crate::config::EndpointsConfig;
use std::error::Error as _;
use tera::{Context, Tera};
use typegen_core::{AppError, AppResult, EndpointDescriptor, EndpointRenderer};

const EACH_TEMPLATE: &str = "endpoint";
const MODULE_TEMPLATE: &str = "module";

/// Per-endpoint template used when none is configured.
pub const DEFAULT_EACH_TEMPLATE: &str = "\t'{{ method }} {{ path }}': { path: {{ pathType }}; params: {{ paramsType }}; request: {{ requestType }}; response: {{ responseType }}; };";

/// Module template used when none is configured.
pub const DEFAULT_MODULE_TEMPLATE: &str = "export interface Endpoints {\n{{ content }}\n}";

/// An [`EndpointRenderer`] backed by two Tera templates.
#[derive(Debug)]
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Compiles the configured templates, falling back to the defaults.
    pub fn new(config: &EndpointsConfig) -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(
            EACH_TEMPLATE,
            config.each.as_deref().unwrap_or(DEFAULT_EACH_TEMPLATE),
        )
        .map_err(|e| render_error("Invalid endpoint template", &e))?;
        tera.add_raw_template(
            MODULE_TEMPLATE,
            config.module.as_deref().unwrap_or(DEFAULT_MODULE_TEMPLATE),
        )
        .map_err(|e| render_error("Invalid module template", &e))?;
        Ok(Self { tera })
    }
}

impl EndpointRenderer for TemplateRenderer {
    fn render_endpoint(&self, endpoint: &EndpointDescriptor) -> AppResult<String> {
        let context = Context::from_serialize(endpoint)
            .map_err(|e| render_error("Failed to build endpoint context", &e))?;
        self.tera.render(EACH_TEMPLATE, &context).map_err(|e| {
            render_error(
                &format!("Failed to render {} {}", endpoint.method, endpoint.path),
                &e,
            )
        })
    }

    fn render_module(&self, content: &str) -> AppResult<String> {
        let mut context = Context::new();
        context.insert("content", content);
        self.tera
            .render(MODULE_TEMPLATE, &context)
            .map_err(|e| render_error("Failed to render endpoints module", &e))
    }
}

/// Tera keeps the useful part of an error in its source chain.
fn render_error(prefix: &str, err: &tera::Error) -> AppError {
    let mut message = format!("{}: {}", prefix, err);
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    AppError::Render(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn descriptor() -> EndpointDescriptor {
        EndpointDescriptor {
            method: "get".into(),
            path: "/items/{id}".into(),
            operation_id: Some("getItem".into()),
            path_type: "`/items/${number}`".into(),
            params_type: "p.GetItemsIdParams".into(),
            params_expected: true,
            params_required: false,
            request_type: "never".into(),
            response_type: "s.Item".into(),
            body_expected: false,
            body_returned: true,
        }
    }

    #[test]
    fn test_default_templates() {
        let renderer = TemplateRenderer::new(&EndpointsConfig::default()).unwrap();
        let fragment = renderer.render_endpoint(&descriptor()).unwrap();
        assert_eq!(
            fragment,
            "\t'get /items/{id}': { path: `/items/${number}`; params: p.GetItemsIdParams; request: never; response: s.Item; };"
        );
        assert_eq!(
            renderer.render_module("A\nB").unwrap(),
            "export interface Endpoints {\nA\nB\n}"
        );
    }

    #[test]
    fn test_custom_templates_see_flags() {
        let renderer = TemplateRenderer::new(&EndpointsConfig {
            each: Some(
                "export const {{ operationId }} = (params{% if not paramsRequired %}?{% endif %}: {{ paramsType }}): Promise<{{ responseType }}> => call('{{ method }}', params);"
                    .into(),
            ),
            module: Some("{{ content }}".into()),
        })
        .unwrap();

        assert_eq!(
            renderer.render_endpoint(&descriptor()).unwrap(),
            "export const getItem = (params?: p.GetItemsIdParams): Promise<s.Item> => call('get', params);"
        );
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TemplateRenderer::new(&EndpointsConfig {
            each: Some("{{ responseType }}".into()),
            module: None,
        })
        .unwrap();
        let mut d = descriptor();
        d.response_type = "Record<string, 'a' & \"b\">".into();
        assert_eq!(renderer.render_endpoint(&d).unwrap(), "Record<string, 'a' & \"b\">");
    }

    #[test]
    fn test_template_errors_are_render_errors() {
        let invalid = TemplateRenderer::new(&EndpointsConfig {
            each: Some("{% if %}".into()),
            module: None,
        });
        assert!(matches!(invalid, Err(AppError::Render(_))));

        let renderer = TemplateRenderer::new(&EndpointsConfig {
            each: Some("{{ missing }}".into()),
            module: None,
        })
        .unwrap();
        assert!(matches!(
            renderer.render_endpoint(&descriptor()),
            Err(AppError::Render(_))
        ));
    }
}
