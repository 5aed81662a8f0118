use crate::service::{HerkunftService, Shared};
use herkunft::{Config, MediumEngine, TokenCodec};
use smol_str::SmolStr;
use tower::Layer;
use triomphe::Arc;

pub struct HerkunftLayer<E> {
    shared: Arc<Shared<E>>,
}

impl<E> HerkunftLayer<E>
where
    E: MediumEngine,
{
    /// Validates the configuration, so misconfigurations surface before the first request
    pub fn new(config: Config, engine: E) -> herkunft::Result<Self> {
        Self::with_default_scheme(config, engine, SmolStr::new_static("http"))
    }

    /// Same as [`HerkunftLayer::new`] with the scheme to assume when the request doesn't reveal it
    pub fn with_default_scheme(
        config: Config,
        engine: E,
        default_scheme: SmolStr,
    ) -> herkunft::Result<Self> {
        config.validate()?;

        let shared = Shared {
            codec: TokenCodec::new(config.token_encoding),
            config,
            default_scheme,
            engine,
        };

        Ok(Self {
            shared: Arc::new(shared),
        })
    }
}

impl<E> Clone for HerkunftLayer<E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S, E> Layer<S> for HerkunftLayer<E> {
    type Service = HerkunftService<S, E>;

    fn layer(&self, inner: S) -> Self::Service {
        HerkunftService::new(inner, Arc::clone(&self.shared))
    }
}
