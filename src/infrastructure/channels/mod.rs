mod email;
mod social;

pub use email::RestEmailChannel;
pub use social::StatusApiSocialChannel;
