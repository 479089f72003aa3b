//! UI components of the registry console

mod create_user_form;
mod loading_indicator;
mod login_modal;
mod navigation;
mod notice_area;
mod package_row;
mod user_table;
mod version_detail;
mod version_list;

pub use create_user_form::CreateUserForm;
pub use loading_indicator::LoadingIndicator;
pub use login_modal::LoginModal;
pub use navigation::Navigation;
pub use notice_area::NoticeArea;
pub use package_row::PackageRow;
pub use user_table::UserTable;
pub use version_detail::VersionDetailView;
pub use version_list::VersionList;
