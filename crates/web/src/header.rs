//! The shared application header and the logout flow.

use datahub_client::ApiClient;

/// Pages that can host the shared header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Connections,
    Explorer,
    Query,
    DataBrowser,
    ApiLog,
}

impl Page {
    /// Stable identifier used to mark the active nav link.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Connections => "connections",
            Self::Explorer => "explorer",
            Self::Query => "query",
            Self::DataBrowser => "data-browser",
            Self::ApiLog => "api-log",
        }
    }
}

struct NavItem {
    page: Page,
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem { page: Page::Connections, label: "コネクション", href: "/connections" },
    NavItem { page: Page::Explorer, label: "エクスプローラー", href: "/explorer" },
    NavItem { page: Page::Query, label: "クエリ", href: "/query" },
    NavItem { page: Page::DataBrowser, label: "データブラウザ", href: "/data-browser" },
    NavItem { page: Page::ApiLog, label: "API ログ", href: "/api-log" },
];

const ACTIVE_LINK_CLASS: &str = "text-sm font-semibold text-blue-600 border-b-2 border-blue-600 pb-0.5";
const LINK_CLASS: &str = "text-sm text-gray-600 hover:text-gray-800 transition-colors";

/// Render the shared `<header>` markup with the nav link for `current`
/// highlighted. The dashboard is reachable through the brand link, not the
/// nav list.
#[must_use]
pub fn render_header(current: Page) -> String {
    let nav_links: String = NAV_ITEMS
        .iter()
        .map(|item| {
            let class = if item.page == current { ACTIVE_LINK_CLASS } else { LINK_CLASS };
            format!(r#"<a href="{}" class="{}">{}</a>"#, item.href, class, item.label)
        })
        .collect();

    format!(
        concat!(
            r#"<header class="bg-white border-b border-gray-200 px-6 py-4 flex items-center gap-6">"#,
            r#"<a href="/dashboard" class="text-xl font-bold text-gray-800 hover:text-gray-600 transition-colors shrink-0">DataHub</a>"#,
            r#"<nav class="flex items-center gap-5 flex-1">{nav}</nav>"#,
            r#"<button onclick="logout()" class="text-sm bg-gray-100 hover:bg-gray-200 text-gray-700 px-3 py-1.5 rounded-lg transition-colors shrink-0">ログアウト</button>"#,
            "</header>"
        ),
        nav = nav_links,
    )
}

/// Log the user out and return to the login page.
///
/// The logout request is best-effort: a failure is logged and the user goes
/// to the login page regardless. An expired session (401) already navigated
/// inside the gateway, so no second navigation is issued for it.
pub async fn logout(client: &ApiClient) {
    match client.logout().await {
        Ok(None) => {}
        Ok(Some(_)) => client.navigator().go_to_login(),
        Err(error) => {
            tracing::error!(%error, "logout request failed");
            client.navigator().go_to_login();
        }
    }
}
