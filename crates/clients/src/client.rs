use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledgercraft_core::{ClientId, DomainError, DomainResult, Entity, ValueObject};

/// Contact and tax-identity details for a client.
///
/// `gstin`/`pan`, when present, are expected to have passed the validation
/// library before reaching this constructor; the domain layer does not
/// re-check identifier formats.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gstin: Option<String>,
    pub pan: Option<String>,
}

impl ValueObject for ContactDetails {}

/// A billable client.
///
/// `client_code` is assigned once at creation by the code generator and never
/// regenerated; uniqueness across clients is enforced by the owning store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub client_code: String,
    pub name: String,
    pub company: Option<String>,
    pub contact: ContactDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn new(
        id: ClientId,
        client_code: impl Into<String>,
        name: impl Into<String>,
        company: Option<String>,
        contact: ContactDetails,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let client_code = client_code.into();
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("client name cannot be empty"));
        }
        if client_code.trim().is_empty() {
            return Err(DomainError::validation("client code cannot be empty"));
        }

        Ok(Self {
            id,
            client_code,
            name,
            company,
            contact,
            created_at,
            updated_at: created_at,
        })
    }

    /// Apply a user edit. The code is creation-only and stays untouched.
    pub fn update_details(
        &mut self,
        name: Option<String>,
        company: Option<Option<String>>,
        contact: Option<ContactDetails>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("client name cannot be empty"));
            }
            self.name = name;
        }
        if let Some(company) = company {
            self.company = company;
        }
        if let Some(contact) = contact {
            self.contact = contact;
        }
        self.updated_at = updated_at;
        Ok(())
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
