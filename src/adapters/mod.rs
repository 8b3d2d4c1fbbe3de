pub mod gbfs;
pub mod ors;

pub use gbfs::GbfsClient;
pub use ors::OrsClient;
