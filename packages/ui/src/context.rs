use api::{ApiClient, HttpTransport};
use dioxus::prelude::*;
use store::ConsoleConfig;

pub type Api = ApiClient<HttpTransport>;

/// Client for the configured REST service.
pub fn use_api() -> Api {
    use_context::<Api>()
}

pub fn use_config() -> ConsoleConfig {
    use_context::<ConsoleConfig>()
}

/// Shares the configuration and an [`Api`] client bound to its base address.
#[component]
pub fn ConsoleProvider(config: ConsoleConfig, children: Element) -> Element {
    let base_url = config.api.base_url.clone();
    use_context_provider(move || ApiClient::new(&base_url));
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}
