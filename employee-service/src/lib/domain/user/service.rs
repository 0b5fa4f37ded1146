use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::AuthenticationResult;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Well-formed Argon2id digest that matches no password.
///
/// Verified against when the username is unknown so a failed lookup costs
/// as much as a failed password check.
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Domain service implementation for registration and authentication.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token handling
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn reject_login(&self, password: &str) -> UserError {
        // Equalises timing with the wrong-password path
        let _ = self
            .authenticator
            .verify_password(password, DUMMY_PASSWORD_HASH);
        UserError::InvalidCredentials
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self.authenticator.hash_password(&command.password)?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            full_name: command.full_name,
            password_hash,
            disabled: false,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationResult, UserError> {
        let username = match Username::new(username.to_string()) {
            Ok(username) => username,
            Err(_) => return Err(self.reject_login(password)),
        };

        let user = match self.repository.find_by_username(&username).await? {
            Some(user) => user,
            None => {
                tracing::warn!(username = %username, "Login failed");
                return Err(self.reject_login(password));
            }
        };

        self.authenticator
            .authenticate(password, &user.password_hash, &user.id.to_string())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(username = %username, "Login failed");
                    UserError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => UserError::Token(err),
            })
    }

    async fn resolve_current_user(&self, token: &str) -> Result<User, UserError> {
        let subject = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(reason = %e, "JWT validation failed");
            UserError::Unauthorized
        })?;

        let user_id = UserId::from_string(&subject).map_err(|e| {
            tracing::warn!(reason = %e, "Token subject is not a user ID");
            UserError::Unauthorized
        })?;

        let user = self.repository.find_by_id(&user_id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %user_id, "Token subject no longer exists");
            UserError::Unauthorized
        })?;

        if user.disabled {
            return Err(UserError::InactiveUser);
        }

        Ok(user)
    }
}
