pub mod local;
pub mod remote;
pub mod types;

pub use local::LocalProvider;
pub use remote::RemoteProvider;
