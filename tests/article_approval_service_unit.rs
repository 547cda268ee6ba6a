mod support;

use std::sync::Arc;

use newsroom_core::application::commands::articles::{
    ArticleCommandService, CreateArticleCommand, SetApprovalCommand,
};
use newsroom_core::application::notifications::{ApprovalNotifier, NotifierSettings};
use newsroom_core::application::ports::email::EmailChannel;
use newsroom_core::application::ports::social::SocialChannel;
use newsroom_core::application::ApplicationError;
use newsroom_core::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle, ArticleWriteRepository,
};
use newsroom_core::domain::publisher::{PublisherId, PublisherRepository};
use newsroom_core::domain::user::{UserId, UserRepository};

use support::{
    fixed_instant, journalist_user, publisher, reader_user, FixedClock, InMemoryArticleRepo,
    InMemoryPublisherRepo, InMemoryUserRepo, RecordingEmailChannel, RecordingSocialChannel,
};

const PUBLISHER_ID: i64 = 1;
const JOURNALIST_ID: i64 = 10;
const ARTICLE_ID: i64 = 1;

fn draft_article(publisher_id: Option<i64>) -> Article {
    Article {
        id: ArticleId::new(ARTICLE_ID).unwrap(),
        title: ArticleTitle::new("Breaking").unwrap(),
        body: ArticleBody::new("full text").unwrap(),
        approved: false,
        approved_at: None,
        publisher_id: publisher_id.map(|id| PublisherId::new(id).unwrap()),
        author_id: UserId::new(JOURNALIST_ID).unwrap(),
        created_at: fixed_instant(),
        updated_at: fixed_instant(),
    }
}

struct Harness {
    email: Arc<RecordingEmailChannel>,
    service: ArticleCommandService,
}

fn harness(articles: Vec<Article>, email: RecordingEmailChannel) -> Harness {
    let users = InMemoryUserRepo::new(vec![
        journalist_user(JOURNALIST_ID, Some("Jane Doe")),
        reader_user(2, Some("two@example.com")),
    ]);
    users.add_publisher_subscription(2, PUBLISHER_ID);
    let users: Arc<dyn UserRepository> = Arc::new(users);

    let articles = Arc::new(InMemoryArticleRepo::new(articles));
    let publishers: Arc<dyn PublisherRepository> =
        Arc::new(InMemoryPublisherRepo::new(vec![publisher(
            PUBLISHER_ID,
            "The Daily",
        )]));

    let email = Arc::new(email);
    let notifier = Arc::new(ApprovalNotifier::new(
        Arc::clone(&users),
        Arc::clone(&email) as Arc<dyn EmailChannel>,
        Some(Arc::new(RecordingSocialChannel::failing()) as Arc<dyn SocialChannel>),
        NotifierSettings::default(),
    ));

    let service = ArticleCommandService::new(
        Arc::clone(&articles) as Arc<dyn ArticleWriteRepository>,
        Arc::clone(&articles) as Arc<dyn ArticleReadRepository>,
        publishers,
        users,
        notifier,
        Arc::new(FixedClock(fixed_instant() + chrono::Duration::minutes(5))),
    );

    Harness { email, service }
}

#[tokio::test]
async fn approving_persists_and_notifies() {
    let h = harness(vec![draft_article(Some(PUBLISHER_ID))], RecordingEmailChannel::new());

    let dto = h
        .service
        .set_approval(SetApprovalCommand {
            id: ARTICLE_ID,
            approved: true,
        })
        .await
        .unwrap();

    assert!(dto.approved);
    assert!(dto.approved_at.is_some());
    assert!(dto.updated_at > fixed_instant());

    let sent = h.email.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "New Article Published: Breaking");
    assert_eq!(sent[0].recipients.len(), 1);
}

#[tokio::test]
async fn reapproving_an_approved_article_is_a_no_op() {
    let h = harness(vec![draft_article(Some(PUBLISHER_ID))], RecordingEmailChannel::new());

    let first = h
        .service
        .set_approval(SetApprovalCommand {
            id: ARTICLE_ID,
            approved: true,
        })
        .await
        .unwrap();
    let second = h
        .service
        .set_approval(SetApprovalCommand {
            id: ARTICLE_ID,
            approved: true,
        })
        .await
        .unwrap();

    // No second write, no second notification.
    assert_eq!(first.updated_at, second.updated_at);
    assert_eq!(h.email.sent_messages().len(), 1);
}

#[tokio::test]
async fn retracting_persists_without_notifying() {
    let mut article = draft_article(Some(PUBLISHER_ID));
    article.approve(fixed_instant());
    let h = harness(vec![article], RecordingEmailChannel::new());

    let dto = h
        .service
        .set_approval(SetApprovalCommand {
            id: ARTICLE_ID,
            approved: false,
        })
        .await
        .unwrap();

    assert!(!dto.approved);
    assert!(dto.approved_at.is_none());
    assert!(h.email.sent_messages().is_empty());
}

#[tokio::test]
async fn approval_survives_channel_failure() {
    let h = harness(
        vec![draft_article(Some(PUBLISHER_ID))],
        RecordingEmailChannel::failing(),
    );

    let dto = h
        .service
        .set_approval(SetApprovalCommand {
            id: ARTICLE_ID,
            approved: true,
        })
        .await
        .unwrap();

    // Both channels failed, the approval still committed.
    assert!(dto.approved);
    assert!(h.email.sent_messages().is_empty());
}

#[tokio::test]
async fn approving_without_a_publisher_still_persists() {
    let h = harness(vec![draft_article(None)], RecordingEmailChannel::new());

    let dto = h
        .service
        .set_approval(SetApprovalCommand {
            id: ARTICLE_ID,
            approved: true,
        })
        .await
        .unwrap();

    assert!(dto.approved);
    assert!(h.email.sent_messages().is_empty());
}

#[tokio::test]
async fn each_approval_edge_notifies_again() {
    let h = harness(vec![draft_article(Some(PUBLISHER_ID))], RecordingEmailChannel::new());

    for approved in [true, false, true] {
        h.service
            .set_approval(SetApprovalCommand {
                id: ARTICLE_ID,
                approved,
            })
            .await
            .unwrap();
    }

    assert_eq!(h.email.sent_messages().len(), 2);
}

#[tokio::test]
async fn approving_a_missing_article_reports_not_found() {
    let h = harness(vec![], RecordingEmailChannel::new());

    let err = h
        .service
        .set_approval(SetApprovalCommand {
            id: 99,
            approved: true,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn only_journalists_can_author_articles() {
    let h = harness(vec![], RecordingEmailChannel::new());

    let err = h
        .service
        .create_article(CreateArticleCommand {
            title: "Breaking".into(),
            body: "full text".into(),
            author_id: 2,
            publisher_id: Some(PUBLISHER_ID),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn created_articles_start_unapproved() {
    let h = harness(vec![], RecordingEmailChannel::new());

    let dto = h
        .service
        .create_article(CreateArticleCommand {
            title: "Breaking".into(),
            body: "full text".into(),
            author_id: JOURNALIST_ID,
            publisher_id: Some(PUBLISHER_ID),
        })
        .await
        .unwrap();

    assert!(!dto.approved);
    assert!(dto.approved_at.is_none());
    assert!(h.email.sent_messages().is_empty());
}
