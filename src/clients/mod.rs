pub mod sunbae_client;

pub use sunbae_client::SunbaeClient;
