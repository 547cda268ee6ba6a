// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{notifications::ApprovalNotifier, ports::time::Clock},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        publisher::PublisherRepository,
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) notifier: Arc<ApprovalNotifier>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
        notifier: Arc<ApprovalNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            publisher_repo,
            user_repo,
            notifier,
            clock,
        }
    }
}
