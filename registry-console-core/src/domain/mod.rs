pub mod endpoint;
pub mod package;
pub mod session;
pub mod user;
pub mod version;

pub use package::{OwnerRef, OwnerUpdate, Package, PackageDetailPayload, PackageInfo, PackageSummary};
pub use session::{Credentials, SessionInfo};
pub use user::{FieldError, NewUser, User, UserDetail, UserForm, UserId, UserPatch, ValidationErrors};
pub use version::{DistributionFile, HiddenUpdate, VersionDetail, VersionNode};
