//! Firebase Auth bindings for the compat SDK loaded by `index.html`.
//!
//! Only the pieces the app needs are bound: `initializeApp`, `auth()`, the
//! Google popup flow, `signOut`, and `onAuthStateChanged`. Every call that can
//! throw is bound with `catch` so a missing SDK surfaces as an error instead
//! of a panic.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::identity::{IdentityListener, IdentityProvider};
use crate::config::FirebaseConfig;
use crate::error::AppError;
use crate::state::auth::Identity;
use crate::util::guard::DropGuard;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = firebase, js_name = initializeApp)]
    fn initialize_app(options: &JsValue) -> Result<JsValue, JsValue>;

    type Auth;

    #[wasm_bindgen(catch, js_namespace = firebase, js_name = auth)]
    fn firebase_auth() -> Result<Auth, JsValue>;

    #[wasm_bindgen(method, catch, js_name = signInWithPopup)]
    fn sign_in_with_popup(this: &Auth, provider: &GoogleAuthProvider) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = signOut)]
    fn sign_out(this: &Auth) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, js_name = onAuthStateChanged)]
    fn on_auth_state_changed(this: &Auth, observer: &Closure<dyn FnMut(JsValue)>) -> js_sys::Function;

    #[wasm_bindgen(js_namespace = ["firebase", "auth"])]
    type GoogleAuthProvider;

    #[wasm_bindgen(catch, constructor, js_namespace = ["firebase", "auth"])]
    fn new() -> Result<GoogleAuthProvider, JsValue>;

    type FirebaseUser;

    #[wasm_bindgen(method, getter, js_name = displayName)]
    fn display_name(this: &FirebaseUser) -> Option<String>;

    #[wasm_bindgen(method, getter)]
    fn email(this: &FirebaseUser) -> Option<String>;
}

fn auth_failed(err: &JsValue) -> AppError {
    let detail = js_sys::Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    AppError::Auth(detail)
}

/// Map a Firebase user object to an identity; accounts without an email
/// address do not count.
fn identity_from_js(value: &JsValue) -> Option<Identity> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let user: &FirebaseUser = value.unchecked_ref();
    let email = user.email().filter(|e| !e.is_empty())?;
    Some(Identity::new(user.display_name(), email))
}

pub struct FirebaseIdentity {
    auth: Auth,
}

impl FirebaseIdentity {
    /// Initialize the Firebase app and grab its auth instance.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Auth`] if the SDK is missing or rejects the options.
    pub fn connect(config: &FirebaseConfig) -> Result<Self, AppError> {
        let options = serde_json::to_string(config).map_err(|e| AppError::Auth(e.to_string()))?;
        let options = js_sys::JSON::parse(&options).map_err(|e| auth_failed(&e))?;
        initialize_app(&options).map_err(|e| auth_failed(&e))?;
        let auth = firebase_auth().map_err(|e| auth_failed(&e))?;
        log::info!("firebase auth initialized for {}", config.project_id);
        Ok(Self { auth })
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseIdentity {
    async fn sign_in(&self) -> Result<Identity, AppError> {
        let provider = GoogleAuthProvider::new().map_err(|e| auth_failed(&e))?;
        let promise = self.auth.sign_in_with_popup(&provider).map_err(|e| auth_failed(&e))?;
        let credential = JsFuture::from(promise).await.map_err(|e| auth_failed(&e))?;
        let user = js_sys::Reflect::get(&credential, &JsValue::from_str("user")).map_err(|e| auth_failed(&e))?;
        identity_from_js(&user).ok_or_else(|| AppError::Auth("account has no email address".to_owned()))
    }

    async fn sign_out(&self) {
        let result = match self.auth.sign_out() {
            Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            log::warn!("sign-out failed: {}", auth_failed(&e));
        }
    }

    fn observe(&self, listener: IdentityListener) -> DropGuard {
        let observer = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            listener(identity_from_js(&value));
        });
        let unsubscribe = self.auth.on_auth_state_changed(&observer);
        DropGuard::new(move || {
            let _ = unsubscribe.call0(&JsValue::NULL);
            drop(observer);
        })
    }
}
