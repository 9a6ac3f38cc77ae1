//! Pagination window

use serde::Deserialize;

use super::ValidationError;

/// Maximum items returned by one list call
pub const MAX_LIMIT: u32 = 100;

/// Items returned when `limit` is not given
pub const DEFAULT_LIMIT: u32 = 10;

/// Skip/limit pair bounding a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Rows to skip
    pub skip: u32,
    /// Rows to return (max 100)
    pub limit: u32,
}

impl Pagination {
    /// Create a window, capping `limit` at 100.
    ///
    /// A limit of zero is kept and yields an empty page.
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.min(MAX_LIMIT),
        }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        i64::from(self.skip)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination
///
/// Kept signed so negative input is reported as a validation error rather
/// than a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ValidationError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let skip = non_negative("skip", params.skip.unwrap_or(0))?;
        let limit = non_negative("limit", params.limit.unwrap_or(i64::from(DEFAULT_LIMIT)))?;

        Ok(Self::new(
            u32::try_from(skip).unwrap_or(u32::MAX),
            u32::try_from(limit).unwrap_or(u32::MAX),
        ))
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<i64, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}
