pub mod assertions;
pub mod checker;
pub mod config;
pub mod dsl;
pub mod errors;
pub mod net;
pub mod protocol;

pub use assertions::{AssertionFailure, AssertionSink, Expectation, FailFast, PanicOnFailure, SoftAssertions};
pub use checker::{FollowGuard, RedirectChecker};
pub use config::ClientConfig;
pub use dsl::SeeRedirects;
pub use errors::{CheckError, ClientError};
pub use net::{HttpClient, ReqwestClient, Response};
pub use protocol::Protocol;

pub mod prelude {
    pub use crate::{
        CheckError, ClientConfig, HttpClient, Protocol, RedirectChecker, ReqwestClient, SeeRedirects,
    };
}
