pub mod direct_url;
pub mod provider_list;

pub use direct_url::DirectUrlNormalizer;
pub use provider_list::ProviderListNormalizer;
