mod approve;
mod create;
mod service;

pub use approve::SetNewsletterApprovalCommand;
pub use create::CreateNewsletterCommand;
pub use service::NewsletterCommandService;
