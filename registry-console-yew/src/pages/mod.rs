mod admin_page;
mod packages_page;

pub use admin_page::AdminPage;
pub use packages_page::PackagesPage;
