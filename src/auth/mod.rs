pub mod session;

pub use session::{current_user, require_user, sign_in, sign_out, sign_up};
