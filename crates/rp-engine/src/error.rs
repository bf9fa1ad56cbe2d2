use thiserror::Error;

use rp_route::RouteError;
use rp_status::StatusError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type EngineResult<T> = Result<T, EngineError>;
