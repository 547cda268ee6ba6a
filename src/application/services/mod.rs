// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, newsletters::NewsletterCommandService,
            publishers::PublisherCommandService, users::UserCommandService,
        },
        notifications::ApprovalNotifier,
        ports::time::Clock,
        queries::{
            articles::ArticleQueryService, newsletters::NewsletterQueryService,
            publishers::PublisherQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        newsletter::NewsletterRepository,
        publisher::PublisherRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    pub publisher_commands: Arc<PublisherCommandService>,
    pub user_commands: Arc<UserCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub newsletter_queries: Arc<NewsletterQueryService>,
    pub publisher_queries: Arc<PublisherQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        newsletter_repo: Arc<dyn NewsletterRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
        notifier: Arc<ApprovalNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&publisher_repo),
            Arc::clone(&user_repo),
            Arc::clone(&notifier),
            Arc::clone(&clock),
        ));

        let newsletter_commands = Arc::new(NewsletterCommandService::new(
            Arc::clone(&newsletter_repo),
            Arc::clone(&publisher_repo),
            Arc::clone(&user_repo),
            Arc::clone(&notifier),
            Arc::clone(&clock),
        ));

        let publisher_commands = Arc::new(PublisherCommandService::new(Arc::clone(&publisher_repo)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&publisher_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let newsletter_queries = Arc::new(NewsletterQueryService::new(Arc::clone(&newsletter_repo)));
        let publisher_queries = Arc::new(PublisherQueryService::new(Arc::clone(&publisher_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            article_commands,
            newsletter_commands,
            publisher_commands,
            user_commands,
            article_queries,
            newsletter_queries,
            publisher_queries,
            user_queries,
        }
    }
}
