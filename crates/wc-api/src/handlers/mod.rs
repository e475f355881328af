//! API handlers, one module per entity.

pub mod clients;
pub mod service_records;
pub mod vehicles;
pub mod workers;

use serde::Serialize;

use wc_db::PaginatedResult;

/// Envelope for list responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection<T: Serialize> {
    pub total: i64,
    pub count: usize,
    pub page_size: i64,
    pub offset: i64,
    pub elements: Vec<T>,
}

impl<T: Serialize> Collection<T> {
    /// Map a paginated repository result, converting each element.
    pub fn from_result<U>(result: PaginatedResult<U>, convert: impl Fn(U) -> T) -> Self {
        let elements: Vec<T> = result.items.into_iter().map(convert).collect();
        Self {
            total: result.total,
            count: elements.len(),
            page_size: result.limit,
            offset: result.offset,
            elements,
        }
    }
}
