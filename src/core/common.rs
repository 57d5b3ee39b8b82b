pub mod cancellation;
pub mod error_mapper;
pub mod http_client_factory;
pub mod outcome;
pub mod transport;

pub use cancellation::{cancellable, CancellationSource, CancellationToken};
pub use error_mapper::{map_error, map_transport_error};
pub use http_client_factory::HttpClientFactory;
pub use outcome::Outcome;
pub use transport::{ApiError, ErrorKind};
