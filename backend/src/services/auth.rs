//! Mock session service: sign-in, registration with phone verification, and
//! sign-out
//!
//! Credentials are not checked and no OTP is actually delivered. The signed-in
//! profile is persisted under a fixed key so a restart keeps the session, and
//! removing it ends the session for every token issued before.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::{
    validate_all_required, validate_email, validate_otp, validate_phone_number, RegisterData,
    UserProfile, ValidationError,
};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Key under which the signed-in profile is stored
pub const PROFILE_KEY: &str = "mitraUser";

const STORE_FILE: &str = "local_storage.json";

/// Minutes a registration may wait for OTP confirmation
pub const PENDING_TTL_MINUTES: i64 = 15;

/// Key/value JSON file holding the persisted profile
#[derive(Clone)]
pub struct ProfileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl ProfileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORE_FILE),
            lock: Arc::new(Mutex::new(())),
        }
    }

    async fn read_entries(&self) -> AppResult<Map<String, Value>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| AppError::StorageError(format!("Corrupt store file: {}", e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(AppError::StorageError(e.to_string())),
        }
    }

    // Written beside the store and renamed over it, so readers never see a partial file
    async fn write_entries(&self, entries: &Map<String, Value>) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| AppError::StorageError(e.to_string()))?;
        }
        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| AppError::StorageError(e.to_string()))?;

        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, bytes)
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))
    }

    /// Load the persisted profile, if any
    pub async fn load(&self) -> AppResult<Option<UserProfile>> {
        let _guard = self.lock.lock().await;
        let entries = self.read_entries().await?;
        entries
            .get(PROFILE_KEY)
            .map(|value| {
                serde_json::from_value(value.clone())
                    .map_err(|e| AppError::StorageError(format!("Corrupt profile: {}", e)))
            })
            .transpose()
    }

    /// Persist the profile, replacing any previous one
    pub async fn save(&self, profile: &UserProfile) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        let value =
            serde_json::to_value(profile).map_err(|e| AppError::StorageError(e.to_string()))?;
        entries.insert(PROFILE_KEY.to_string(), value);
        self.write_entries(&entries).await
    }

    /// Remove the persisted profile; other entries are left alone
    pub async fn remove(&self) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(PROFILE_KEY).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Profile ID
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// An active session
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserProfile,
}

/// Returned when a registration is waiting for phone verification
#[derive(Debug, Clone, Serialize)]
pub struct PendingVerification {
    pub verification_id: String,
}

#[derive(Debug, Clone)]
struct PendingRegistration {
    data: RegisterData,
    verified_phone: Option<String>,
    created_at: DateTime<Utc>,
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    store: ProfileStore,
    pending: Arc<RwLock<HashMap<String, PendingRegistration>>>,
    jwt_secret: String,
    session_expiry: i64,
    pending_ttl: Duration,
}

impl AuthService {
    pub fn new(store: ProfileStore, config: &Config) -> Self {
        Self {
            store,
            pending: Arc::new(RwLock::new(HashMap::new())),
            jwt_secret: config.jwt.secret.clone(),
            session_expiry: config.jwt.session_expiry,
            pending_ttl: Duration::minutes(PENDING_TTL_MINUTES),
        }
    }

    /// Override how long a registration waits for confirmation
    pub fn with_pending_ttl(mut self, ttl: Duration) -> Self {
        self.pending_ttl = ttl;
        self
    }

    fn is_live(&self, registration: &PendingRegistration, now: DateTime<Utc>) -> bool {
        now - registration.created_at <= self.pending_ttl
    }

    /// Number of registrations awaiting confirmation
    pub async fn pending_count(&self) -> usize {
        self.pending.read().await.len()
    }

    /// Sign in; any non-empty credentials are accepted
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        validate_all_required(&[("email", email), ("password", password)])?;
        validate_email(email.trim())?;

        let profile = UserProfile {
            id: new_profile_id(),
            email: email.trim().to_string(),
            first_name: "Mitra".to_string(),
            last_name: "User".to_string(),
            phone: None,
            is_phone_verified: true,
            is_email_verified: true,
        };

        self.store.save(&profile).await?;
        info!(user_id = %profile.id, "User signed in");
        self.issue_session(profile)
    }

    /// Hold registration details until the phone number is confirmed
    pub async fn register(&self, data: RegisterData) -> AppResult<PendingVerification> {
        let phone = data.phone.clone().unwrap_or_default();
        validate_all_required(&[
            ("email", data.email.as_str()),
            ("password", data.password.as_str()),
            ("first_name", data.first_name.as_str()),
            ("last_name", data.last_name.as_str()),
            ("phone", phone.as_str()),
        ])?;
        validate_email(data.email.trim())?;
        validate_phone_number(&phone)?;

        let now = Utc::now();
        let verification_id = Uuid::new_v4().to_string();
        let mut pending = self.pending.write().await;
        pending.retain(|_, registration| self.is_live(registration, now));
        pending.insert(
            verification_id.clone(),
            PendingRegistration {
                data,
                verified_phone: None,
                created_at: now,
            },
        );

        debug!(%verification_id, "Registration pending phone verification");
        Ok(PendingVerification { verification_id })
    }

    /// Record the phone number an OTP would be sent to
    pub async fn verify_phone(&self, verification_id: &str, phone: &str) -> AppResult<()> {
        validate_phone_number(phone)?;

        let now = Utc::now();
        let mut pending = self.pending.write().await;
        let registration = pending
            .get_mut(verification_id)
            .filter(|registration| self.is_live(registration, now))
            .ok_or_else(|| AppError::NotFound("Registration".to_string()))?;
        registration.verified_phone = Some(phone.to_string());

        debug!(%verification_id, "OTP sent");
        Ok(())
    }

    /// Accept any six-digit OTP and create the profile
    pub async fn confirm_otp(&self, verification_id: &str, otp: &str) -> AppResult<Session> {
        validate_otp(otp)?;

        let registration = {
            let now = Utc::now();
            let mut pending = self.pending.write().await;
            let phone_sent = pending
                .get(verification_id)
                .filter(|registration| self.is_live(registration, now))
                .ok_or_else(|| AppError::NotFound("Registration".to_string()))?
                .verified_phone
                .is_some();
            if !phone_sent {
                return Err(ValidationError::new(
                    "phone",
                    "Please enter your phone number",
                    "कृपया अपना फ़ोन नंबर दर्ज करें",
                )
                .into());
            }
            pending
                .remove(verification_id)
                .ok_or_else(|| AppError::NotFound("Registration".to_string()))?
        };

        let profile = UserProfile {
            id: new_profile_id(),
            email: registration.data.email,
            first_name: registration.data.first_name,
            last_name: registration.data.last_name,
            phone: registration.verified_phone,
            is_phone_verified: true,
            is_email_verified: true,
        };

        self.store.save(&profile).await?;
        info!(user_id = %profile.id, "Registration confirmed");
        self.issue_session(profile)
    }

    /// Sign out by removing the persisted profile
    pub async fn logout(&self) -> AppResult<()> {
        self.store.remove().await?;
        info!("User signed out");
        Ok(())
    }

    /// The persisted profile, if someone is signed in
    pub async fn current_session(&self) -> AppResult<Option<UserProfile>> {
        self.store.load().await
    }

    /// Check a token against the persisted profile
    ///
    /// A well-formed token is rejected once its profile has been removed or
    /// replaced.
    pub async fn authenticate(&self, token: &str) -> AppResult<UserProfile> {
        let claims = self.validate_token(token)?;
        match self.store.load().await? {
            Some(profile) if profile.id == claims.sub => Ok(profile),
            _ => Err(AppError::Unauthorized {
                message: "Session has ended, please sign in again".to_string(),
                message_hi: "सत्र समाप्त हो गया है, कृपया फिर से साइन इन करें".to_string(),
            }),
        }
    }

    /// Validate a session token and return claims
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        })
    }

    fn issue_session(&self, user: UserProfile) -> AppResult<Session> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            exp: (now + Duration::seconds(self.session_expiry)).timestamp(),
            iat: now.timestamp(),
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))?;

        Ok(Session {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.session_expiry,
            user,
        })
    }
}

fn new_profile_id() -> String {
    format!("user-{}", Uuid::new_v4())
}
