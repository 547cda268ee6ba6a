#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use newsroom_core::application::ports::email::{EmailChannel, EmailMessage};
use newsroom_core::application::ports::social::SocialChannel;
use newsroom_core::application::ports::time::Clock;
use newsroom_core::application::ports::{ChannelError, ChannelResult};
use newsroom_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use newsroom_core::domain::errors::{DomainError, DomainResult};
use newsroom_core::domain::publisher::{
    NewPublisher, Publisher, PublisherId, PublisherName, PublisherRepository,
};
use newsroom_core::domain::user::{
    DisplayName, EmailAddress, NewUser, RoleProfile, User, UserId, UserRepository, Username,
};

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn reader_user(id: i64, email: Option<&str>) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(format!("reader{id}")).unwrap(),
        display_name: None,
        email: email.map(|e| EmailAddress::new(e).unwrap()),
        profile: RoleProfile::reader(),
        created_at: fixed_instant(),
    }
}

pub fn journalist_user(id: i64, display_name: Option<&str>) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(format!("journalist{id}")).unwrap(),
        display_name: display_name.map(|n| DisplayName::new(n).unwrap()),
        email: None,
        profile: RoleProfile::journalist(),
        created_at: fixed_instant(),
    }
}

// ---------------------------------------------------------------------------
// Channel doubles
// ---------------------------------------------------------------------------

pub struct RecordingEmailChannel {
    pub sent: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

impl RecordingEmailChannel {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailChannel for RecordingEmailChannel {
    async fn send(&self, message: EmailMessage) -> ChannelResult<()> {
        if self.fail {
            return Err(ChannelError::Transport("connection refused".into()));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

pub struct RecordingSocialChannel {
    pub posts: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingSocialChannel {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn posted(&self) -> Vec<String> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialChannel for RecordingSocialChannel {
    async fn post(&self, text: &str) -> ChannelResult<()> {
        if self.fail {
            return Err(ChannelError::Rejected {
                status: 403,
                detail: "forbidden".into(),
            });
        }
        self.posts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory repositories
// ---------------------------------------------------------------------------

pub struct InMemoryUserRepo {
    users: Mutex<HashMap<i64, User>>,
    publisher_subs: Mutex<Vec<(i64, i64)>>,
    journalist_subs: Mutex<Vec<(i64, i64)>>,
}

impl InMemoryUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        let users = users.into_iter().map(|u| (i64::from(u.id), u)).collect();
        Self {
            users: Mutex::new(users),
            publisher_subs: Mutex::new(Vec::new()),
            journalist_subs: Mutex::new(Vec::new()),
        }
    }

    pub fn add_publisher_subscription(&self, reader: i64, publisher: i64) {
        self.publisher_subs.lock().unwrap().push((reader, publisher));
    }

    pub fn add_journalist_subscription(&self, reader: i64, journalist: i64) {
        self.journalist_subs
            .lock()
            .unwrap()
            .push((reader, journalist));
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let id = users.keys().max().copied().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            display_name: new_user.display_name,
            email: new_user.email,
            profile: new_user.profile,
            created_at: new_user.created_at,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn replace_profile(&self, id: UserId, profile: RoleProfile) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.profile = profile;
        if !matches!(user.profile, RoleProfile::Reader { .. }) {
            self.publisher_subs
                .lock()
                .unwrap()
                .retain(|(reader, _)| *reader != i64::from(id));
            self.journalist_subs
                .lock()
                .unwrap()
                .retain(|(reader, _)| *reader != i64::from(id));
        }
        Ok(user.clone())
    }

    async fn subscribe_to_publisher(
        &self,
        reader: UserId,
        publisher: PublisherId,
    ) -> DomainResult<()> {
        let pair = (i64::from(reader), i64::from(publisher));
        let mut subs = self.publisher_subs.lock().unwrap();
        if !subs.contains(&pair) {
            subs.push(pair);
        }
        Ok(())
    }

    async fn subscribe_to_journalist(
        &self,
        reader: UserId,
        journalist: UserId,
    ) -> DomainResult<()> {
        let pair = (i64::from(reader), i64::from(journalist));
        let mut subs = self.journalist_subs.lock().unwrap();
        if !subs.contains(&pair) {
            subs.push(pair);
        }
        Ok(())
    }

    async fn subscribers_of_publisher(&self, publisher: PublisherId) -> DomainResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(self
            .publisher_subs
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, pid)| *pid == i64::from(publisher))
            .filter_map(|(reader, _)| users.get(reader).cloned())
            .collect())
    }

    async fn followers_of_journalist(&self, journalist: UserId) -> DomainResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(self
            .journalist_subs
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, jid)| *jid == i64::from(journalist))
            .filter_map(|(reader, _)| users.get(reader).cloned())
            .collect())
    }
}

/// Fails every audience query; used to exercise absorbed lookup errors.
pub struct BrokenUserRepo;

#[async_trait]
impl UserRepository for BrokenUserRepo {
    async fn insert(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn find_by_username(&self, _username: &Username) -> DomainResult<Option<User>> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn replace_profile(&self, _id: UserId, _profile: RoleProfile) -> DomainResult<User> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn subscribe_to_publisher(
        &self,
        _reader: UserId,
        _publisher: PublisherId,
    ) -> DomainResult<()> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn subscribe_to_journalist(
        &self,
        _reader: UserId,
        _journalist: UserId,
    ) -> DomainResult<()> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn subscribers_of_publisher(&self, _publisher: PublisherId) -> DomainResult<Vec<User>> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn followers_of_journalist(&self, _journalist: UserId) -> DomainResult<Vec<User>> {
        Err(DomainError::Persistence("store offline".into()))
    }
}

pub struct InMemoryArticleRepo {
    articles: Mutex<HashMap<i64, Article>>,
}

impl InMemoryArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        let articles = articles
            .into_iter()
            .map(|a| (i64::from(a.id), a))
            .collect();
        Self {
            articles: Mutex::new(articles),
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let id = articles.keys().max().copied().unwrap_or(0) + 1;
        let article = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            body: article.body,
            approved: false,
            approved_at: None,
            publisher_id: article.publisher_id,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if article.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article was modified concurrently".into(),
            ));
        }
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(state) = update.approval_state {
            article.approved = state.approved;
            article.approved_at = state.approved_at;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.articles
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list(&self, include_unapproved: bool) -> DomainResult<Vec<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|a| include_unapproved || a.approved)
            .cloned()
            .collect())
    }
}

pub struct InMemoryPublisherRepo {
    publishers: Mutex<HashMap<i64, Publisher>>,
}

impl InMemoryPublisherRepo {
    pub fn new(publishers: Vec<Publisher>) -> Self {
        let publishers = publishers
            .into_iter()
            .map(|p| (i64::from(p.id), p))
            .collect();
        Self {
            publishers: Mutex::new(publishers),
        }
    }
}

pub fn publisher(id: i64, name: &str) -> Publisher {
    Publisher {
        id: PublisherId::new(id).unwrap(),
        name: PublisherName::new(name).unwrap(),
        description: None,
    }
}

#[async_trait]
impl PublisherRepository for InMemoryPublisherRepo {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let mut publishers = self.publishers.lock().unwrap();
        let id = publishers.keys().max().copied().unwrap_or(0) + 1;
        let publisher = Publisher {
            id: PublisherId::new(id)?,
            name: publisher.name,
            description: publisher.description,
        };
        publishers.insert(id, publisher.clone());
        Ok(publisher)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        Ok(self.publishers.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Publisher>> {
        Ok(self.publishers.lock().unwrap().values().cloned().collect())
    }
}
