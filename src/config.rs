/// Options controlling how definitions are turned into descriptors.
#[derive(Debug, Clone)]
pub struct Config {
    /// Treat system names with characters outside `[a-zA-Z0-9]` as errors instead of warnings
    pub strict_names: bool,
    /// Pretty-print emitted descriptor JSON
    pub pretty: bool,
    /// Append the site URL parameter to every method, not only those that ask for it
    pub site_url_on_every_method: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_names: false,
            pretty: true,
            site_url_on_every_method: false,
        }
    }
}
