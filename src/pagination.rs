use crate::errors::SdkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_COUNT: u32 = 100;
const MAX_PAGE: u32 = 21474836;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = SdkError;

    fn from_str(order: &str) -> Result<Self, Self::Err> {
        match order {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(SdkError::InvalidArgument(
                "order must be equal to one of the allowed values".to_string(),
            )),
        }
    }
}

/// Optional `count`, `page` and `order` query parameters of list endpoints.
/// Unset fields are left for the server to default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub count: Option<u32>,
    pub page: Option<u32>,
    pub order: Option<Order>,
}

impl Pagination {
    pub fn new(count: Option<u32>, page: Option<u32>, order: Option<Order>) -> Self {
        Self { count, page, order }
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Rejects values the API would answer with a 400 anyway.
    pub fn validate(&self) -> Result<(), SdkError> {
        if let Some(count) = self.count {
            if count < 1 {
                return Err(SdkError::InvalidArgument("count must be >= 1".to_string()));
            }
            if count > MAX_COUNT {
                return Err(SdkError::InvalidArgument(format!(
                    "count must be <= {MAX_COUNT}"
                )));
            }
        }

        if let Some(page) = self.page {
            if page < 1 {
                return Err(SdkError::InvalidArgument("page must be >= 1".to_string()));
            }
            if page > MAX_PAGE {
                return Err(SdkError::InvalidArgument(format!(
                    "page must be <= {MAX_PAGE}"
                )));
            }
        }

        Ok(())
    }
}
