use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::pagination::{PageRequest, SortOrder};
use crate::application::error::ServiceResult;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl PageQuery {
    pub fn page_request(&self) -> ServiceResult<PageRequest> {
        PageRequest::new(self.page, self.size)
    }

    pub fn sort_order(&self) -> ServiceResult<SortOrder> {
        SortOrder::parse(self.sort.as_deref())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
