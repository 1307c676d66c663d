//! Template engine wrapper.
//!
//! Templates are parsed once at startup from a filesystem glob and
//! never reloaded; a parse error aborts startup. Auto-escaping is
//! turned off: values land in the rendered output verbatim, exactly
//! as the handlers pass them in.

use crate::error::Error;
use tera::Tera;

/// A set of templates parsed once at startup.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Parse all templates matching `glob` (e.g. `views/*.html`).
    ///
    /// Fails fast on any parse error so a broken template never makes
    /// it to serving time.
    pub fn load(glob: &str) -> Result<Self, Error> {
        let mut tera = Tera::new(glob)?;
        tera.autoescape_on(vec![]);
        Ok(Self { tera })
    }

    /// Build a template set from in-memory sources.
    pub fn from_named(sources: &[(&str, &str)]) -> Result<Self, Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(sources.to_vec())?;
        tera.autoescape_on(vec![]);
        Ok(Self { tera })
    }

    /// Render `name` against `context`, producing the HTML body.
    pub fn render(&self, name: &str, context: &tera::Context) -> Result<String, Error> {
        Ok(self.tera.render(name, context)?)
    }

    /// Number of loaded templates.
    pub fn len(&self) -> usize {
        self.tera.get_template_names().count()
    }

    /// True when the glob matched no template files.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_context_values() {
        let templates =
            Templates::from_named(&[("result.html", "<p>Hello, {{ name }}.</p>")]).unwrap();
        let mut ctx = tera::Context::new();
        ctx.insert("name", "World");
        let html = templates.render("result.html", &ctx).unwrap();
        assert_eq!(html, "<p>Hello, World.</p>");
    }

    #[test]
    fn values_are_not_escaped() {
        // The originals echo form input without sanitization; the
        // rendered output must contain markup verbatim.
        let templates =
            Templates::from_named(&[("result.html", "{{ name }}")]).unwrap();
        let mut ctx = tera::Context::new();
        ctx.insert("name", "<b>X</b>");
        let html = templates.render("result.html", &ctx).unwrap();
        assert_eq!(html, "<b>X</b>");
    }

    #[test]
    fn missing_template_is_an_error() {
        let templates = Templates::from_named(&[]).unwrap();
        let err = templates.render("nope.html", &tera::Context::new());
        assert!(err.is_err());
    }

    #[test]
    fn broken_template_fails_at_load() {
        let result = Templates::from_named(&[("bad.html", "{{ unclosed")]);
        assert!(result.is_err());
    }
}
