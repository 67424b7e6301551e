//! Flow control and backend interaction for the recommendation client.
//!
//! `protocol` models the wire contracts and classifies the overlapping
//! `/ask` response shapes, `backend` is the HTTP client behind the
//! [`backend::BackendClient`] seam, and `controller` drives the
//! question/answer flow and emits display events.

pub mod backend;
pub mod controller;
pub mod protocol;

pub use backend::{BackendClient, HttpBackend};
pub use controller::{
    Banner, BannerKind, FlowController, FlowEvent, ANSWER_SUBMIT_DELAY, ASK_TIMEOUT,
    SECOND_BANNER_DELAY,
};
pub use protocol::{classify, AskRequest, AskResponse, QuestionCard};
