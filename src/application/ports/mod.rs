pub mod email;
pub mod social;
pub mod time;

use thiserror::Error;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type EmailChannelPort = dyn email::EmailChannel;
pub type SocialChannelPort = dyn social::SocialChannel;

pub type ChannelResult<T> = Result<T, ChannelError>;

/// Failure of a delivery channel. Never propagated past the notifier;
/// callers log it and move on.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("rejected with status {status}: {detail}")]
    Rejected { status: u16, detail: String },
}
