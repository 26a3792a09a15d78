//! Explicit session object and the authentication provider seam.

pub mod domain;
pub mod provider;
pub mod router;


pub use domain::{QuickAction, Session, SessionToken, User, WelcomeView};
pub use provider::{SessionError, SessionIssuer, SessionProvider};
pub use router::{bearer_token, session_router, SessionView};
