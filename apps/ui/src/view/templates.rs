use handlebars::{Handlebars, TemplateError};

use crate::errors::RenderError;
use crate::view::PageView;

const PAGE_TEMPLATE: &str = "page";

/// Handlebars registry holding the page layout and its partials.
///
/// Templates are compiled into the binary. Strict mode turns a reference to a
/// field the view model does not have into a render error.
pub struct PageTemplates {
    registry: Handlebars<'static>,
}

impl PageTemplates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);

        registry.register_partial("styles", include_str!("../../templates/styles.css"))?;
        registry.register_partial("section", include_str!("../../templates/section.hbs"))?;
        registry.register_partial("card", include_str!("../../templates/card.hbs"))?;
        registry.register_template_string(PAGE_TEMPLATE, include_str!("../../templates/page.hbs"))?;

        Ok(Self { registry })
    }

    pub fn render(&self, page: &PageView) -> Result<String, RenderError> {
        Ok(self.registry.render(PAGE_TEMPLATE, page)?)
    }
}
