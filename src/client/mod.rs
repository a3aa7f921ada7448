//! Typed client for engagement actions.
//!
//! Mirrors what `static/js/likes.js` does in the browser, with seams for
//! native frontends and tests: a transport trait over the HTTP exchange
//! and handle traits for the counter display and the pressed control.

pub mod like;

pub use like::{
    HttpLikeTransport, LikeControl, LikeDisplay, LikeError, LikeTransport, send_like,
};
