//! Shared handler state.

use std::sync::Arc;

use createx_content::{ContentManager, ContentValidator, StructuralValidator};

use crate::providers::{
    GenerationProvider, SimulatedGenerator, SimulatedTranslator, TranslationProvider,
};

/// State handed to every route.
///
/// Cloning is cheap; all members are shared.
#[derive(Clone)]
pub struct AppState {
    /// Catalog queries.
    pub manager: Arc<ContentManager>,
    /// Backend for `POST /content/generate`.
    pub generator: Arc<dyn GenerationProvider>,
    /// Backend for `POST /content/translate`.
    pub translator: Arc<dyn TranslationProvider>,
    /// Checks for `POST /content/validate`.
    pub validator: Arc<dyn ContentValidator>,
}

impl AppState {
    /// State with the simulated providers and structural validator.
    pub fn new(manager: Arc<ContentManager>) -> Self {
        Self {
            manager,
            generator: Arc::new(SimulatedGenerator),
            translator: Arc::new(SimulatedTranslator::new()),
            validator: Arc::new(StructuralValidator),
        }
    }

    /// Replace the generation backend.
    pub fn with_generator(mut self, generator: impl GenerationProvider + 'static) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    /// Replace the translation backend.
    pub fn with_translator(mut self, translator: impl TranslationProvider + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    /// Replace the validator.
    pub fn with_validator(mut self, validator: impl ContentValidator + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }
}
