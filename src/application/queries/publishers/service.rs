// src/application/queries/publishers/service.rs
use std::sync::Arc;

use crate::domain::publisher::PublisherRepository;

pub struct PublisherQueryService {
    pub(super) repo: Arc<dyn PublisherRepository>,
}

impl PublisherQueryService {
    pub fn new(repo: Arc<dyn PublisherRepository>) -> Self {
        Self { repo }
    }
}
