pub mod dijkstra;
pub mod engine;
pub mod traits;

pub use dijkstra::{Dijkstra, SelectionPolicy};
pub use engine::{EngineStatus, ShortestPathEngine};
pub use traits::{ShortestPathAlgorithm, ShortestPathTree};
