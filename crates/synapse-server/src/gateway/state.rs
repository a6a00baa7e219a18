use std::sync::Arc;

use synapse::{TextGenerator, WebSearch};

/// Shared collaborators. Cloning is cheap; nothing here is mutated per request.
pub struct HandlerState<S, G>
where
    S: WebSearch + 'static,
    G: TextGenerator + 'static,
{
    pub search: Arc<S>,

    pub generator: Arc<G>,
}

impl<S, G> HandlerState<S, G>
where
    S: WebSearch + 'static,
    G: TextGenerator + 'static,
{
    pub fn new(search: S, generator: G) -> Self {
        Self {
            search: Arc::new(search),
            generator: Arc::new(generator),
        }
    }

    /// Whether the generator has credentials. Never touches the network.
    pub fn gemini_configured(&self) -> bool {
        self.generator.is_configured()
    }
}

impl<S, G> Clone for HandlerState<S, G>
where
    S: WebSearch + 'static,
    G: TextGenerator + 'static,
{
    fn clone(&self) -> Self {
        Self {
            search: self.search.clone(),
            generator: self.generator.clone(),
        }
    }
}
