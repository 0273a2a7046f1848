pub mod adapter;
pub mod backend;
pub mod error;
pub mod postgres;

pub use adapter::RecordStore;
pub use backend::StoreBackend;
pub use error::StoreError;
pub use postgres::PgStore;
