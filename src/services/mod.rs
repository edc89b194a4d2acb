pub mod activity_service;
pub mod annotation_service;
pub mod edge_service;
pub mod experiment_service;
pub mod node_service;
pub mod participation_service;
pub mod sample_service;
pub mod search_service;

pub use activity_service::*;
pub use annotation_service::*;
pub use edge_service::*;
pub use experiment_service::*;
pub use node_service::*;
pub use participation_service::*;
pub use sample_service::*;
pub use search_service::*;
