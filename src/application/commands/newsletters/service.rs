// src/application/commands/newsletters/service.rs
use std::sync::Arc;

use crate::{
    application::{notifications::ApprovalNotifier, ports::time::Clock},
    domain::{
        newsletter::NewsletterRepository, publisher::PublisherRepository, user::UserRepository,
    },
};

pub struct NewsletterCommandService {
    pub(super) repo: Arc<dyn NewsletterRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) notifier: Arc<ApprovalNotifier>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsletterCommandService {
    pub fn new(
        repo: Arc<dyn NewsletterRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
        notifier: Arc<ApprovalNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            publisher_repo,
            user_repo,
            notifier,
            clock,
        }
    }
}
