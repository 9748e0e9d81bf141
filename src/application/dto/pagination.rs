use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub last_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, per_page: u32) -> Self {
        let last_page = if per_page == 0 {
            1
        } else {
            total.div_ceil(u64::from(per_page)).max(1) as u32
        };
        Self {
            items,
            total,
            page,
            per_page,
            last_page,
        }
    }

    pub fn has_more(&self) -> bool {
        self.page < self.last_page
    }
}
