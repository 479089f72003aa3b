use crate::application::{Call, ConsoleError, Gateway, GatewayError, Result};
use crate::domain::{endpoint, NewUser, OwnerRef, User, UserDetail, UserForm, UserId, UserPatch};
use crate::traits::ActionOutcome;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct UserState {
    users: Vec<User>,
    revision: u64,
}

/// User administration: list, create, modify and disable accounts
///
/// Create and delete reload the whole list; modify patches the listed user in place.
#[derive(Clone)]
pub struct UserAdmin {
    gateway: Gateway,
    state: Rc<RefCell<UserState>>,
}

impl UserAdmin {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            state: Rc::new(RefCell::new(UserState::default())),
        }
    }

    pub fn users(&self) -> Vec<User> {
        self.state.borrow().users.clone()
    }

    pub fn user(&self, id: UserId) -> Option<User> {
        self.state.borrow().users.iter().find(|u| u.id == id).cloned()
    }

    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    pub async fn load_users(&self) -> Result<Vec<User>> {
        let users: Vec<User> = self.gateway.fetch(Call::get(endpoint::users())).await?;

        let mut state = self.state.borrow_mut();
        state.users = users;
        state.revision += 1;
        tracing::debug!(count = state.users.len(), "User list loaded");
        Ok(state.users.clone())
    }

    /// Single user with the packages it owns
    pub async fn user_detail(&self, id: UserId) -> Result<UserDetail> {
        Ok(self.gateway.fetch(Call::get(endpoint::user(id))).await?)
    }

    /// Id of the user an owner reference points at
    ///
    /// Logins are looked up in the listed users, loading the list once when the login is
    /// not among them.
    pub async fn resolve_owner(&self, owner: &OwnerRef) -> Result<UserId> {
        let login = match owner {
            OwnerRef::Id(id) => return Ok(*id),
            OwnerRef::Login(login) => login,
        };

        if let Some(id) = self.id_of(login) {
            return Ok(id);
        }
        self.load_users().await?;
        self.id_of(login)
            .ok_or_else(|| ConsoleError::UnknownUser(login.clone()))
    }

    fn id_of(&self, login: &str) -> Option<UserId> {
        self.state
            .borrow()
            .users
            .iter()
            .find(|u| u.login == login)
            .map(|u| u.id)
    }

    /// Validate the form, create the account and reload the list
    ///
    /// An invalid form is rejected with every failing field and no request is made.
    pub async fn create(&self, form: &UserForm) -> Result<User> {
        let new_user: NewUser = form.validate()?;
        let login = new_user.login.clone();

        let created = self
            .gateway
            .call(Call::post(endpoint::users(), serde_json::to_value(&new_user)?))
            .await?;
        tracing::info!(login = %login, "User created");

        self.gateway
            .dialogs()
            .alert(&format!("User \"{login}\" created."));
        let users = self.load_users().await?;

        // The create answer may omit the user
        serde_json::from_value::<User>(created)
            .ok()
            .or_else(|| users.into_iter().find(|u| u.login == login))
            .ok_or_else(|| {
                GatewayError::Decode {
                    endpoint: endpoint::users(),
                    reason: format!("created user {login} is missing from the list"),
                }
                .into()
            })
    }

    /// Send a partial update; the accepted patch is applied to the listed user
    pub async fn modify(&self, id: UserId, patch: UserPatch) -> Result<()> {
        self.gateway
            .call(Call::put(endpoint::user(id), serde_json::to_value(&patch)?))
            .await?;

        let login = {
            let mut state = self.state.borrow_mut();
            let login = state.users.iter_mut().find(|u| u.id == id).map(|user| {
                user.apply(&patch);
                user.login.clone()
            });
            state.revision += 1;
            login
        };
        let login = login.or_else(|| patch.login.clone()).unwrap_or_else(|| format!("#{id}"));

        tracing::info!(id, login = %login, "User updated");
        self.gateway
            .dialogs()
            .alert(&format!("User \"{login}\" updated."));
        Ok(())
    }

    /// Confirm, disable the account and reload the list
    pub async fn remove(&self, id: UserId) -> Result<ActionOutcome> {
        let login = self
            .user(id)
            .map(|u| u.login)
            .unwrap_or_else(|| format!("#{id}"));

        let question = format!("Do you really want to delete user \"{login}\"?");
        if !self.gateway.dialogs().confirm(&question).await {
            return Ok(ActionOutcome::Cancelled);
        }

        self.gateway.call(Call::delete(endpoint::user(id))).await?;
        tracing::info!(id, login = %login, "User disabled");
        self.gateway
            .dialogs()
            .alert(&format!("User \"{login}\" disabled."));

        self.load_users().await?;
        Ok(ActionOutcome::Completed)
    }
}
