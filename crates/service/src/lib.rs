pub mod crud;
pub mod errors;
pub mod logger;
pub mod repository;
pub mod storage;

pub use crud::CrudService;
pub use errors::{status_of, ServiceError, StatusClass};
pub use logger::{LogFields, Logger, TracingLogger};
pub use repository::Repository;
