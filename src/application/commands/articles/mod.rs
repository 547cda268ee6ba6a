mod approve;
mod create;
mod delete;
mod service;
mod update;

pub use approve::SetApprovalCommand;
pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
