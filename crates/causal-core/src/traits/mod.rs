mod causal_backend;

pub use causal_backend::{ICausalBackend, NoOpBackend};
