//! Diagnostic reporting for parsers.
//!
//! A parser reports problems to a [`Session`] as it runs:
//! - **worry**: not fatal, parsing carries on
//! - **sorry**: the result is wrong, but parsing carries on to find more
//! - **panic**: parsing stops here
//!
//! Worries and sorries are buffered in report order. They surface as one
//! [`Failure`] when the parser calls [`Session::express_concerns`] at the
//! end, or earlier if the buffer reaches its limit. A panic surfaces alone
//! and discards whatever was buffered.
//!
//! ```text
//! fn parse<'src>(text: &'src str, session: &mut Session<'src>) -> Result<Ast, Failure<'src>> {
//!     // ...
//!     session.sorry(Concern::new(ExtraParen { close: ')' }).at(&cursor))?;
//!     // ...
//!     return Err(session.panic(EarlyEnd { expecting: None }));
//!     // ...
//!     session.express_concerns()?;
//!     Ok(ast)
//! }
//! ```

mod anchor;
mod diagnostic;
pub mod emitter;
mod failure;
pub mod kinds;
pub mod ledger;
mod policy;
pub mod render;
mod session;
mod severity;

pub use anchor::{Anchor, Anchored, Location};
pub use diagnostic::{Concern, Diagnostic};
pub use failure::{Failure, FailureCause};
pub use kinds::{
    AdHoc, EarlyEnd, Expected, Explain, ExtraParen, Mismatched, Obsolete, Problem, Unclosed,
};
pub use ledger::Ledger;
pub use policy::{classify, Action};
pub use session::{Session, SessionConfig, SessionState};
pub use severity::Severity;
