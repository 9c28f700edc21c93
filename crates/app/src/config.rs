//! Runtime configuration (flags with environment fallbacks).

use std::path::PathBuf;

use anyhow::Context;

use stockroom_auth::{AuthState, InMemoryAuthProvider, SignedInUser};
use stockroom_infra::FileStorage;

use crate::cli::GlobalArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    /// `None` means nobody is signed in.
    pub user: Option<SignedInUser>,
    pub entry_page: String,
}

impl AppConfig {
    pub fn from_args(args: &GlobalArgs) -> anyhow::Result<Self> {
        let data_dir = match &args.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };

        let non_blank = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        let user = non_blank(&args.user_email).map(|email| SignedInUser {
            display_name: non_blank(&args.user_name),
            photo_url: non_blank(&args.user_photo),
            email: Some(email),
        });

        Ok(Self {
            data_dir,
            storage_key: args.storage_key.clone(),
            user,
            entry_page: args.entry_page.clone(),
        })
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }

    /// Identity provider seeded from the configured user.
    pub fn auth_provider(&self) -> InMemoryAuthProvider {
        match &self.user {
            Some(user) => InMemoryAuthProvider::new(AuthState::SignedIn(user.clone())),
            None => InMemoryAuthProvider::signed_out(),
        }
    }
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS data directory - set STOCKROOM_DATA_DIR or --data-dir")?;
    Ok(base.join("stockroom"))
}
