//! Handlebars template set for the generated artifacts.
//!
//! Templates are compiled into the binary and keyed by artifact. Rendering
//! takes a [`RenderData`] bundle; this is the only seam between the derived
//! render data and the text that lands on disk.

use crate::render::{Artifact, RenderData};
use crate::Result;
use handlebars::Handlebars;

pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    /// Compiles the built-in artifact templates.
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        // Output is TypeScript, not HTML; `Post[]` has to come through verbatim.
        registry.register_escape_fn(handlebars::no_escape);

        registry.register_template_string("core", include_str!("../templates/core.hbs"))?;
        registry.register_template_string("index", include_str!("../templates/index.hbs"))?;
        registry.register_template_string("client", include_str!("../templates/client.hbs"))?;
        registry.register_template_string(
            "types-client",
            include_str!("../templates/types-client.hbs"),
        )?;
        registry
            .register_template_string("types-api", include_str!("../templates/types-api.hbs"))?;

        Ok(Self { registry })
    }

    /// Renders one artifact from its data bundle.
    pub fn render(&self, artifact: Artifact, data: &RenderData) -> Result<String> {
        Ok(self.registry.render(artifact.template_name(), data)?)
    }
}
