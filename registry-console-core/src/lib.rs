//! Core of the package registry administration console
//!
//! The console talks to the registry's JSON API through a single [`Gateway`] that keeps
//! a per-endpoint busy map ([`LoadingTracker`]). On top of it the [`TreeSynchronizer`]
//! maintains the package → version tree, [`UserAdmin`] manages accounts and the
//! [`SessionGate`] makes sure a session exists before gated loads run.
//!
//! Presentation shells supply a [`Transport`] and the modal [`Dialogs`].

pub mod application;
pub mod domain;
pub mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use application::{
    Call, Console, ConsoleError, Gateway, GatewayError, LoadingTracker, LoginOutcome,
    PackageHandle, SessionGate, TreeSynchronizer, UserAdmin, VersionHandle,
};
pub use domain::{
    endpoint, Credentials, DistributionFile, FieldError, HiddenUpdate, NewUser, OwnerRef,
    OwnerUpdate, Package, PackageDetailPayload, PackageInfo, PackageSummary, SessionInfo, User,
    UserDetail, UserForm, UserId, UserPatch, ValidationErrors, VersionDetail, VersionNode,
};
pub use traits::{
    ActionOutcome, ApiRequest, ApiResponse, CredentialsPrompt, Dialogs, Method, PackageActions,
    Transport, TransportError, VersionActions,
};
