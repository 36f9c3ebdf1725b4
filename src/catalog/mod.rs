//! Service catalog
//!
//! The fixed list of flooring services shown on the marketing site. The
//! catalog is chosen once at startup and never changes afterwards.

mod content;
pub mod models;

pub use models::{Locale, ServiceOffering};

/// Read-only catalog for one locale
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    locale: Locale,
    services: &'static [ServiceOffering],
}

impl Catalog {
    /// Select the catalog for a locale
    pub fn new(locale: Locale) -> Self {
        let services = match locale {
            Locale::Czech => content::CZECH,
            Locale::English => content::ENGLISH,
        };
        Self { locale, services }
    }

    /// Locale this catalog was built for
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// All offerings in declaration order
    pub fn services(&self) -> &'static [ServiceOffering] {
        self.services
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
