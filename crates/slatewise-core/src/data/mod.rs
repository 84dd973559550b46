// Slate data: document model, loading, and dataset-wide summaries.

pub mod loader;
pub mod model;
pub mod stats;

pub use loader::{load_dataset, Dataset, DatasetLoader, LoadError};
pub use model::{PlayerKey, Slate, SlateId, SlatePlayer, SlatePlayerId};
