use std::sync::Arc;

use crate::domain::news::NewsReadRepository;

pub struct NewsQueryService {
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) default_per_page: u32,
}

impl NewsQueryService {
    pub fn new(read_repo: Arc<dyn NewsReadRepository>, default_per_page: u32) -> Self {
        Self {
            read_repo,
            default_per_page,
        }
    }
}
