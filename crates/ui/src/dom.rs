use everymode_content::{Error, Fragment, Page, Result};
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element};

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn host_error(e: &JsValue) -> Error {
    Error::Host(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

/// [`Page`] over the live browser document
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    /// Page for the current window, if there is one
    pub fn current() -> Option<Self> {
        get_document().map(Self::new)
    }

    fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| Error::mount_not_found(id))
    }

    fn build(&self, fragment: &Fragment) -> Result<Element> {
        let el = self
            .document
            .create_element(fragment.tag)
            .map_err(|e| host_error(&e))?;
        el.set_class_name(fragment.class);
        for (name, value) in &fragment.attributes {
            el.set_attribute(name, value).map_err(|e| host_error(&e))?;
        }
        el.set_inner_html(&fragment.inner_html);
        Ok(el)
    }
}

impl Page for DomPage {
    fn replace_children(&mut self, id: &str, fragments: &[Fragment]) -> Result<()> {
        let container = self.element(id)?;

        // Clear existing content
        container.set_inner_html("");

        for fragment in fragments {
            let card = self.build(fragment)?;
            container.append_child(&card).map_err(|e| host_error(&e))?;
        }
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }
}
