pub mod proxy_to_clash;

pub use proxy_to_clash::{document_to_clash_config, group_to_clash_group, proxy_to_clash_proxy};
