use web_sys::Storage;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_ROLE_KEY: &str = "user_role";
pub const USER_NAME_KEY: &str = "user_name";
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

const SESSION_KEYS: [&str; 4] = [ACCESS_TOKEN_KEY, USER_ROLE_KEY, USER_NAME_KEY, LOGGED_IN_KEY];

/// Login state kept in the browser's local storage by the login page.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    login_page: String,
}

impl Session {
    pub fn new(login_page: impl Into<String>) -> Self {
        Session {
            login_page: login_page.into(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        read_key(LOGGED_IN_KEY).is_some()
    }

    pub fn token(&self) -> Option<String> {
        read_key(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn role(&self) -> Option<String> {
        read_key(USER_ROLE_KEY)
    }

    pub fn user_name(&self) -> Option<String> {
        read_key(USER_NAME_KEY).filter(|n| !n.is_empty())
    }

    pub fn is_admin(&self) -> bool {
        self.role().as_deref() == Some("admin")
    }

    /// Drops every session key and sends the browser to the login page.
    pub fn logout(&self) {
        if let Some(storage) = local_storage() {
            for key in SESSION_KEYS {
                let _ = storage.remove_item(key);
            }
        }
        self.redirect_to_login();
    }

    pub fn redirect_to_login(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&self.login_page);
        }
    }
}

/// Header greeting, preferring the profile name over the stored one.
pub fn greeting(profile_name: Option<&str>, stored_name: Option<&str>) -> String {
    let name = profile_name
        .filter(|n| !n.is_empty())
        .or(stored_name.filter(|n| !n.is_empty()))
        .unwrap_or("Usuario");
    format!("Hola, {}", name)
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read_key(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}
