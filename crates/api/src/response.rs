//! Response envelope types.

use serde::Serialize;

/// `{ "data": T }` wrapper used by the aggregation endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
