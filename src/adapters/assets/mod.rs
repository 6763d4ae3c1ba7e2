mod template_catalog_embedded;

pub use template_catalog_embedded::EmbeddedTemplateCatalog;
