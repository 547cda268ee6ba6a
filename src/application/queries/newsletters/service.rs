// src/application/queries/newsletters/service.rs
use std::sync::Arc;

use crate::domain::newsletter::NewsletterRepository;

pub struct NewsletterQueryService {
    pub(super) repo: Arc<dyn NewsletterRepository>,
}

impl NewsletterQueryService {
    pub fn new(repo: Arc<dyn NewsletterRepository>) -> Self {
        Self { repo }
    }
}
