pub mod repository_response;

pub use repository_response::RepositoryRef;
