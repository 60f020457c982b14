//! Page route handlers.
//!
//! Every page renders inside the same shell: the navigation bar mounted
//! against the visitor's session and the page footer. The page bodies are
//! placeholders for the catalog, account and checkout flows.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::OriginalUri;
use axum::http::Uri;
use tower_sessions::Session;
use tracing::instrument;

use crate::components::{NavigationBar, PageFooter};
use crate::filters;
use crate::storage::SessionStorage;

/// Heading and lead text for a shell page.
#[derive(Debug, Clone, Copy)]
pub struct PageCopy {
    pub title: &'static str,
    pub heading: &'static str,
    pub intro: &'static str,
}

pub const PRODUCTS_PAGE: PageCopy = PageCopy {
    title: "Products",
    heading: "All Products",
    intro: "Jerseys, perfume oils and everyday essentials.",
};

pub const ACCOUNT_PAGE: PageCopy = PageCopy {
    title: "Account",
    heading: "Your Account",
    intro: "Sign in to see your orders and saved addresses.",
};

pub const WISHLIST_PAGE: PageCopy = PageCopy {
    title: "Wishlist",
    heading: "Your Wishlist",
    intro: "Items you save will appear here.",
};

pub const CHECKOUT_PAGE: PageCopy = PageCopy {
    title: "Checkout",
    heading: "Checkout",
    intro: "Review your order before payment.",
};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub nav: NavigationBar,
    pub footer: PageFooter,
}

/// Generic shell page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/page.html")]
pub struct PageTemplate {
    pub nav: NavigationBar,
    pub footer: PageFooter,
    pub page: PageCopy,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/cart.html")]
pub struct CartPageTemplate {
    pub nav: NavigationBar,
    pub footer: PageFooter,
}

/// Mount the navigation bar for the request path.
///
/// Takes the full request URI, not the path seen inside a nested router.
async fn mount_nav(session: Session, uri: &Uri) -> NavigationBar {
    let store = SessionStorage::new(session);
    NavigationBar::mount(Some(&store), uri.path()).await
}

async fn shell_page(session: Session, uri: &Uri, page: PageCopy) -> PageTemplate {
    PageTemplate {
        nav: mount_nav(session, uri).await,
        footer: PageFooter::new(),
        page,
    }
}

/// Display the home page.
#[instrument(skip(session))]
pub async fn home(session: Session, OriginalUri(uri): OriginalUri) -> HomeTemplate {
    HomeTemplate {
        nav: mount_nav(session, &uri).await,
        footer: PageFooter::new(),
    }
}

#[instrument(skip(session))]
pub async fn products(session: Session, OriginalUri(uri): OriginalUri) -> PageTemplate {
    shell_page(session, &uri, PRODUCTS_PAGE).await
}

#[instrument(skip(session))]
pub async fn account(session: Session, OriginalUri(uri): OriginalUri) -> PageTemplate {
    shell_page(session, &uri, ACCOUNT_PAGE).await
}

#[instrument(skip(session))]
pub async fn wishlist(session: Session, OriginalUri(uri): OriginalUri) -> PageTemplate {
    shell_page(session, &uri, WISHLIST_PAGE).await
}

#[instrument(skip(session))]
pub async fn checkout(session: Session, OriginalUri(uri): OriginalUri) -> PageTemplate {
    shell_page(session, &uri, CHECKOUT_PAGE).await
}

/// Display the cart page with every line and the subtotal.
#[instrument(skip(session))]
pub async fn cart(session: Session, OriginalUri(uri): OriginalUri) -> CartPageTemplate {
    CartPageTemplate {
        nav: mount_nav(session, &uri).await,
        footer: PageFooter::new(),
    }
}
