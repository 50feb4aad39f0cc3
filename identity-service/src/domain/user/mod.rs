pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::AuthError;
pub use errors::PersistenceError;
pub use models::Role;
pub use models::User;
pub use models::UserId;
pub use models::UserView;
pub use ports::UserStore;
pub use service::AccessGrant;
pub use service::AuthService;
