use crate::domain::repositories::StorageRepository;
use crate::shared::constants::{
    ARGON2_ITERATIONS, ARGON2_MEMORY_KIB, ARGON2_PARALLELISM, KEY_LEN, NONCE_LEN, SALT_LEN,
};
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;
use zeroize::Zeroizing;

/// Passphrase-encrypted files, one `.dat` and one `.salt` per key.
///
/// File layout of `.dat` is `nonce || ciphertext`. Key derivation runs on
/// the blocking pool. Clones share one lock: writes and deletes are
/// exclusive, so a salt is never replaced under a record encrypted with it.
#[derive(Clone)]
pub struct EncryptedFileStorage {
    dir: PathBuf,
    passphrase: Zeroizing<String>,
    params: Params,
    lock: Arc<RwLock<()>>,
}

impl EncryptedFileStorage {
    pub fn new(dir: impl Into<PathBuf>, passphrase: &str) -> WalletResult<Self> {
        if passphrase.is_empty() {
            return Err(WalletError::config("Storage passphrase must not be empty"));
        }
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&dir, fs::Permissions::from_mode(0o700))?;
        }
        log::debug!("Encrypted storage at {}", dir.display());

        Ok(Self {
            dir,
            passphrase: Zeroizing::new(passphrase.to_string()),
            params: Params::new(
                ARGON2_MEMORY_KIB,
                ARGON2_ITERATIONS,
                ARGON2_PARALLELISM,
                Some(KEY_LEN),
            )?,
            lock: Arc::new(RwLock::new(())),
        })
    }

    /// Override the Argon2 cost, e.g. for low-memory devices
    pub fn with_kdf_cost(mut self, memory_kib: u32, iterations: u32) -> WalletResult<Self> {
        self.params = Params::new(memory_kib, iterations, ARGON2_PARALLELISM, Some(KEY_LEN))?;
        Ok(self)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // Hash of the key so file names do not reveal what is stored
    fn file_stem(key: &str) -> String {
        hex::encode(Sha256::digest(key.as_bytes()))
    }

    fn data_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.dat", Self::file_stem(key)))
    }

    fn salt_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.salt", Self::file_stem(key)))
    }

    fn derive_key(&self, salt: &[u8]) -> WalletResult<Zeroizing<[u8; KEY_LEN]>> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        argon2.hash_password_into(self.passphrase.as_bytes(), salt, &mut *key)?;
        Ok(key)
    }

    // Salt is generated on first write of a key and reused afterwards
    fn load_or_create_salt(&self, key: &str) -> WalletResult<Vec<u8>> {
        let path = self.salt_path(key);
        match fs::read(&path) {
            Ok(salt) if salt.len() == SALT_LEN => Ok(salt),
            Ok(_) => Err(WalletError::storage(format!("Corrupt salt file {}", path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let mut salt = vec![0u8; SALT_LEN];
                OsRng.fill_bytes(&mut salt);
                write_private(&self.dir, &path, &salt)?;
                Ok(salt)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn store_blocking(&self, key: &str, data: &[u8]) -> WalletResult<()> {
        let salt = self.load_or_create_salt(key)?;
        let key_bytes = self.derive_key(&salt)?;
        let cipher = Aes256Gcm::new(GenericArray::from_slice(&*key_bytes));

        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);
        let ciphertext = cipher
            .encrypt(GenericArray::from_slice(&nonce), data)
            .map_err(|e| WalletError::crypto(format!("Encryption failed: {}", e)))?;

        let mut contents = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        contents.extend_from_slice(&nonce);
        contents.extend_from_slice(&ciphertext);
        write_private(&self.dir, &self.data_path(key), &contents)
    }

    fn retrieve_blocking(&self, key: &str) -> WalletResult<Option<Vec<u8>>> {
        let contents = match fs::read(self.data_path(key)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if contents.len() < NONCE_LEN {
            return Err(WalletError::storage("Stored record is truncated"));
        }

        let salt = match fs::read(self.salt_path(key)) {
            Ok(salt) => salt,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(WalletError::storage("Salt missing for stored record"))
            }
            Err(e) => return Err(e.into()),
        };
        let key_bytes = self.derive_key(&salt)?;
        let cipher = Aes256Gcm::new(GenericArray::from_slice(&*key_bytes));

        let (nonce, ciphertext) = contents.split_at(NONCE_LEN);
        let plaintext = cipher
            .decrypt(GenericArray::from_slice(nonce), ciphertext)
            .map_err(|e| WalletError::crypto(format!("Decryption failed: {}", e)))?;
        Ok(Some(plaintext))
    }

    fn delete_blocking(&self, key: &str) -> WalletResult<()> {
        for path in [self.data_path(key), self.salt_path(key)] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

// Write through a uniquely named temp file so a crash never leaves a
// half-written record. Temp files are created owner-only.
fn write_private(dir: &Path, path: &Path, contents: &[u8]) -> WalletResult<()> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| WalletError::from(e.error))?;
    Ok(())
}

#[async_trait]
impl StorageRepository for EncryptedFileStorage {
    async fn store(&self, key: &str, data: &[u8]) -> WalletResult<()> {
        let guard = self.lock.clone().write_owned().await;
        let this = self.clone();
        let key = key.to_string();
        let data = Zeroizing::new(data.to_vec());
        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            this.store_blocking(&key, &data)
        })
        .await?
    }

    async fn retrieve(&self, key: &str) -> WalletResult<Option<Vec<u8>>> {
        let guard = self.lock.clone().read_owned().await;
        let this = self.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            this.retrieve_blocking(&key)
        })
        .await?
    }

    async fn delete(&self, key: &str) -> WalletResult<()> {
        let guard = self.lock.clone().write_owned().await;
        let this = self.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            this.delete_blocking(&key)
        })
        .await?
    }

    async fn exists(&self, key: &str) -> WalletResult<bool> {
        let _guard = self.lock.read().await;
        Ok(tokio::fs::try_exists(self.data_path(key)).await?)
    }
}

/// Volatile storage for tests and for running without a passphrase
#[derive(Default)]
pub struct InMemoryStorage {
    entries: RwLock<HashMap<String, Zeroizing<Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageRepository for InMemoryStorage {
    async fn store(&self, key: &str, data: &[u8]) -> WalletResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), Zeroizing::new(data.to_vec()));
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> WalletResult<Option<Vec<u8>>> {
        Ok(self.entries.read().await.get(key).map(|data| data.to_vec()))
    }

    async fn delete(&self, key: &str) -> WalletResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> WalletResult<bool> {
        Ok(self.entries.read().await.contains_key(key))
    }
}
