pub mod session;
pub mod storage;

pub use session::{Session, SessionAction};
pub use storage::LocalStore;
