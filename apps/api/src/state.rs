use std::sync::Arc;

use crate::config::Config;
use crate::render::compiler::Typesetter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable typesetter. Default: `LatexCompiler` running pdflatex; tests swap in a stub.
    pub typesetter: Arc<dyn Typesetter>,
}
