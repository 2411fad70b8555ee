//! # itermath-core
//!
//! Iterative approximations of the natural logarithm and general
//! exponentiation, built from elementary arithmetic only — no library
//! transcendental function is ever called.
//!
//! Two families of routines:
//! - fixed iteration count: [`taylor_log`], [`cfrac_log`], [`taylor_pow`],
//!   [`taylorcf_pow`] — the caller chooses how many terms to spend;
//! - adaptive: [`mylog`], [`mypow`] — refine until successive approximations
//!   agree to within [`EPS`].
//!
//! Every routine is a pure function of its numeric inputs. Domain violations
//! and boundary limits are reported through IEEE-754 special values (`NaN`,
//! signed infinity), never through panics or a `Result` channel.

pub mod adaptive;
pub mod cfrac;
pub mod power;
pub mod special;
pub mod taylor;

pub use adaptive::{EPS, mylog, mypow};
pub use cfrac::cfrac_log;
pub use power::{taylor_pow, taylorcf_pow};
pub use special::log_special_value;
pub use taylor::taylor_log;
