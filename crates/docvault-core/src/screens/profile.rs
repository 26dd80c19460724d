//! Profile screen: account details, address book and document uploads.
//!
//! The three sections load independently and each mutation re-fetches the
//! collection it touched instead of patching the local copy.

use super::{Screen, Section};
use crate::api::{ApiError, DocVaultApi};
use crate::models::{Address, AddressId, Document, NewAddress, User, UserUpdate};
use crate::session::{Session, SessionStore, TokenStorage};
use crate::util::compact_text;
pub use crate::validation::DocumentDraft;
use crate::validation::validate_document;

pub const USER_LOAD_FAILED: &str = "Error fetching user profile.";
pub const ADDRESSES_LOAD_FAILED: &str = "Error fetching addresses.";
pub const DOCUMENTS_LOAD_FAILED: &str = "Error fetching documents.";
pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile.";
pub const ADDRESS_ADD_FAILED: &str = "Error adding address.";
pub const ADDRESS_UPDATE_FAILED: &str = "Error updating address.";
pub const UPLOAD_FAILED: &str = "Error uploading document.";

/// Edit buffer for the account card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub phone_number: String,
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            phone_number: user.phone_display().to_string(),
        }
    }

    /// PATCH body with surrounding whitespace removed.
    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            username: self.username.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserEditor {
    #[default]
    Viewing,
    Editing(UserDraft),
}

impl UserEditor {
    /// Seeds the buffer from the loaded user.
    pub fn begin(&mut self, user: &User) {
        *self = Self::Editing(UserDraft::from_user(user));
    }

    /// Drops the buffer without a request.
    pub fn cancel(&mut self) {
        *self = Self::Viewing;
    }

    /// Applies a successful save: the section takes the server's copy and
    /// the buffer is dropped.
    pub fn commit(&mut self, section: &mut Section<User>, updated: User) {
        *section = Section::Ready(updated);
        *self = Self::Viewing;
    }

    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub const fn draft(&self) -> Option<&UserDraft> {
        match self {
            Self::Editing(draft) => Some(draft),
            Self::Viewing => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut UserDraft> {
        match self {
            Self::Editing(draft) => Some(draft),
            Self::Viewing => None,
        }
    }
}

/// Editable address columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Street,
    City,
    State,
    Country,
    ZipCode,
}

impl AddressField {
    pub const ALL: [Self; 5] = [
        Self::Street,
        Self::City,
        Self::State,
        Self::Country,
        Self::ZipCode,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Street => "Street",
            Self::City => "City",
            Self::State => "State",
            Self::Country => "Country",
            Self::ZipCode => "Zip Code",
        }
    }

    pub fn value(self, address: &Address) -> &str {
        match self {
            Self::Street => &address.street,
            Self::City => &address.city,
            Self::State => &address.state,
            Self::Country => &address.country,
            Self::ZipCode => &address.zip_code,
        }
    }
}

/// Edit buffer for a new or existing address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub is_default: bool,
}

impl AddressDraft {
    pub fn from_address(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            country: address.country.clone(),
            zip_code: address.zip_code.clone(),
            is_default: address.is_default,
        }
    }

    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street => &self.street,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Country => &self.country,
            AddressField::ZipCode => &self.zip_code,
        }
    }

    pub fn set(&mut self, field: AddressField, value: String) {
        match field {
            AddressField::Street => self.street = value,
            AddressField::City => self.city = value,
            AddressField::State => self.state = value,
            AddressField::Country => self.country = value,
            AddressField::ZipCode => self.zip_code = value,
        }
    }

    pub fn to_new(&self) -> NewAddress {
        NewAddress {
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            zip_code: self.zip_code.clone(),
            is_default: self.is_default,
        }
    }

    /// Full record for a PUT on `id`.
    pub fn to_address(&self, id: AddressId) -> Address {
        Address {
            id,
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            zip_code: self.zip_code.clone(),
            is_default: self.is_default,
        }
    }
}

/// The one address row currently in edit mode, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditTarget {
    #[default]
    None,
    Editing { id: AddressId, draft: AddressDraft },
}

impl EditTarget {
    /// Puts `address` in edit mode. Any unsaved draft for another row is dropped.
    pub fn begin(&mut self, address: &Address) {
        *self = Self::Editing {
            id: address.id,
            draft: AddressDraft::from_address(address),
        };
    }

    pub fn cancel(&mut self) {
        *self = Self::None;
    }

    pub const fn editing_id(&self) -> Option<AddressId> {
        match self {
            Self::Editing { id, .. } => Some(*id),
            Self::None => None,
        }
    }

    pub fn is_editing(&self, id: AddressId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn draft_mut(&mut self) -> Option<&mut AddressDraft> {
        match self {
            Self::Editing { draft, .. } => Some(draft),
            Self::None => None,
        }
    }

    /// The record to PUT for the row being edited.
    pub fn pending_update(&self) -> Option<Address> {
        match self {
            Self::Editing { id, draft } => Some(draft.to_address(*id)),
            Self::None => None,
        }
    }
}

pub async fn load_user<A: DocVaultApi>(api: &A, session: Option<&Session>) -> Section<User> {
    Section::from_result(api.fetch_user(session).await, USER_LOAD_FAILED)
}

pub async fn load_addresses<A: DocVaultApi>(
    api: &A,
    session: Option<&Session>,
) -> Section<Vec<Address>> {
    Section::from_result(api.list_addresses(session).await, ADDRESSES_LOAD_FAILED)
}

pub async fn load_documents<A: DocVaultApi>(
    api: &A,
    session: Option<&Session>,
) -> Section<Vec<Document>> {
    Section::from_result(api.list_documents(session).await, DOCUMENTS_LOAD_FAILED)
}

/// Sends the trimmed draft and returns the user as the server now has it.
///
/// On rejection the server's response body is shown when there is one.
pub async fn save_user<A: DocVaultApi>(
    api: &A,
    session: Option<&Session>,
    draft: &UserDraft,
) -> Result<User, String> {
    let update = draft.to_update();
    tracing::debug!("Updating profile: {:?}", update);
    api.update_user(session, &update).await.map_err(|error| {
        tracing::error!("Error updating user: {}", error);
        update_failure_message(&error)
    })
}

fn update_failure_message(error: &ApiError) -> String {
    match error.response_body().map(compact_text) {
        Some(body) if !body.is_empty() => body,
        _ => PROFILE_UPDATE_FAILED.to_string(),
    }
}

/// Creates an address, then re-fetches the whole list.
pub async fn add_address<A: DocVaultApi>(
    api: &A,
    session: Option<&Session>,
    draft: &AddressDraft,
) -> Result<Section<Vec<Address>>, String> {
    if let Err(error) = api.create_address(session, &draft.to_new()).await {
        tracing::error!("Error adding address: {}", error);
        return Err(ADDRESS_ADD_FAILED.to_string());
    }
    Ok(load_addresses(api, session).await)
}

/// Replaces an address with `draft`, then re-fetches the whole list.
pub async fn save_address<A: DocVaultApi>(
    api: &A,
    session: Option<&Session>,
    id: AddressId,
    draft: &AddressDraft,
) -> Result<Section<Vec<Address>>, String> {
    if let Err(error) = api.replace_address(session, &draft.to_address(id)).await {
        tracing::error!("Error updating address {}: {}", id, error);
        return Err(ADDRESS_UPDATE_FAILED.to_string());
    }
    Ok(load_addresses(api, session).await)
}

/// Validates and uploads a document, then re-fetches the list.
///
/// Incomplete drafts fail without a request.
pub async fn upload_document<A: DocVaultApi>(
    api: &A,
    session: Option<&Session>,
    draft: &DocumentDraft,
) -> Result<Section<Vec<Document>>, String> {
    let document = validate_document(draft).map_err(|error| error.to_string())?;
    if let Err(error) = api.upload_document(session, document).await {
        tracing::error!("Error uploading document: {}", error);
        return Err(UPLOAD_FAILED.to_string());
    }
    Ok(load_documents(api, session).await)
}

/// Clears local credentials. There is no server-side logout.
pub fn logout<S: TokenStorage>(store: &SessionStore<S>) -> Screen {
    if let Err(error) = store.clear() {
        tracing::error!("Failed to clear session: {}", error);
    }
    Screen::Login
}
