//! Library tenant management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::library::{CreateLibrary, Library, UpdateLibrary},
    repository::Repository,
};

#[derive(Clone)]
pub struct LibrariesService {
    repository: Repository,
}

impl LibrariesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all libraries
    pub async fn list(&self) -> AppResult<Vec<Library>> {
        self.repository.libraries.list().await
    }

    /// Get a library by ID
    pub async fn get(&self, id: i32) -> AppResult<Library> {
        self.repository.libraries.get_by_id(id).await
    }

    /// Create a new library
    pub async fn create(&self, library: CreateLibrary) -> AppResult<Library> {
        library.validate()?;
        let name = library
            .name
            .as_deref()
            .ok_or_else(|| AppError::Validation("Invalid name".to_string()))?;
        let password = library
            .password
            .as_deref()
            .ok_or_else(|| AppError::Validation("Invalid password".to_string()))?;

        let created = self.repository.libraries.create(name, password).await?;
        tracing::info!("Created library {} ({})", created.library_id, created.name);
        Ok(created)
    }

    /// Update an existing library
    pub async fn update(&self, id: i32, update: UpdateLibrary) -> AppResult<Library> {
        update.validate()?;
        self.repository.libraries.update(id, &update).await
    }

    /// Delete a library; associated members and books survive
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.libraries.delete(id).await?;
        tracing::info!("Deleted library {}", id);
        Ok(())
    }

    /// Check library credentials. Plaintext exact match, preserved from the
    /// reference contract.
    pub async fn login(&self, library_id: i32, password: &str) -> AppResult<Option<Library>> {
        let library = self
            .repository
            .libraries
            .find_by_credentials(library_id, password)
            .await?;

        if library.is_none() {
            tracing::warn!("Failed login attempt for library {}", library_id);
        }
        Ok(library)
    }
}
