// src/application/commands/publishers/service.rs
use std::sync::Arc;

use crate::domain::publisher::PublisherRepository;

pub struct PublisherCommandService {
    pub(super) repo: Arc<dyn PublisherRepository>,
}

impl PublisherCommandService {
    pub fn new(repo: Arc<dyn PublisherRepository>) -> Self {
        Self { repo }
    }
}
